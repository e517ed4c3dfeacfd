/// Story model errors: violations of the solution contract discovered
/// while building a plan.
#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    #[error("no goal explanation for consenting character {character} at step {step}")]
    MissingExplanation { step: usize, character: String },
}
