use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::catalog::{CatalogError, CatalogRepository, ProfileStore};
use super::domain::{MatchReport, QuestionnaireAnswers, UserId};
use super::scoring::score_matches;
use super::tags::derive_tags;

/// Service composing the catalog read, tag derivation, scoring, and the
/// best-effort profile write.
pub struct MatchingService<C, P> {
    catalog: Arc<C>,
    profiles: Arc<P>,
}

impl<C, P> MatchingService<C, P>
where
    C: CatalogRepository + 'static,
    P: ProfileStore + 'static,
{
    pub fn new(catalog: Arc<C>, profiles: Arc<P>) -> Self {
        Self { catalog, profiles }
    }

    /// Score a questionnaire submission against the active catalog.
    ///
    /// Catalog fetch failure fails the whole operation. When `caller` is
    /// present the raw answers are persisted to that profile; a failed write
    /// is logged and the report is returned regardless.
    pub fn evaluate(
        &self,
        answers: &QuestionnaireAnswers,
        caller: Option<&UserId>,
    ) -> Result<MatchReport, MatchingServiceError> {
        let catalog = self.catalog.active_regelingen()?;

        let tags = derive_tags(answers);
        let matches = score_matches(&catalog, &tags, answers);
        let user_tags: Vec<String> = tags.iter().map(|tag| tag.key.to_string()).collect();

        info!(
            programs = catalog.len(),
            tags = user_tags.len(),
            matches = matches.len(),
            "questionnaire scored"
        );

        if let Some(user) = caller {
            if let Err(error) = self.profiles.save_answers(user, answers, Utc::now()) {
                warn!(user = %user.0, %error, "profile save failed; returning matches anyway");
            }
        }

        Ok(MatchReport {
            total_found: matches.len(),
            matches,
            user_tags,
        })
    }
}

/// Error raised by the matching service.
#[derive(Debug, thiserror::Error)]
pub enum MatchingServiceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
