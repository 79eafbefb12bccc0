use chrono::{DateTime, Utc};

use super::domain::{QuestionnaireAnswers, Regeling, UserId};

/// Read boundary to the external catalog store.
///
/// Implementations return every regeling with `is_active = true`; the scorer
/// still skips inactive entries defensively if one slips through.
pub trait CatalogRepository: Send + Sync {
    fn active_regelingen(&self) -> Result<Vec<Regeling>, CatalogError>;
}

/// Error enumeration for catalog reads. Fetch failure is a hard error for the
/// whole scoring operation; there is no partial scoring.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog store unavailable: {0}")]
    Unavailable(String),
    #[error("catalog payload malformed: {0}")]
    Malformed(String),
}

/// Best-effort write boundary for persisting raw answers to a caller's profile.
pub trait ProfileStore: Send + Sync {
    fn save_answers(
        &self,
        user: &UserId,
        answers: &QuestionnaireAnswers,
        submitted_at: DateTime<Utc>,
    ) -> Result<(), ProfileStoreError>;
}

/// Profile persistence error. Recovered locally by the service and never
/// propagated into the scoring response.
#[derive(Debug, thiserror::Error)]
pub enum ProfileStoreError {
    #[error("profile store unavailable: {0}")]
    Unavailable(String),
    #[error("profile rejected: {0}")]
    Rejected(String),
}
