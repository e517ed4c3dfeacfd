mod distance_properties;
