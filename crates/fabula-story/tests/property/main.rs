mod story_properties;
