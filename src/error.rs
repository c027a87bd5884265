/// Errors produced by the extraction pipeline and the record codec.
///
/// Field-level absences never surface here; they degrade to defaults
/// inside the extractors. Only total structural failure and schema
/// failure are fatal.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("page has no recognizable dictionary entries")]
    CannotParsePage,

    #[error("lemma record does not match the expected schema: {0}")]
    Decode(#[from] serde_json::Error),
}
