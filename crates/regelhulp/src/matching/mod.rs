//! Benefits matching: tag derivation, catalog scoring, and the service facade.
//!
//! The engine itself is pure and synchronous; a single questionnaire and a
//! single catalog snapshot go in, a ranked match report comes out. Everything
//! stateful (catalog reads, profile writes) sits behind the traits in
//! [`catalog`].

pub mod catalog;
pub mod domain;
pub mod router;
pub mod scoring;
pub mod service;
pub mod tags;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, CatalogRepository, ProfileStore, ProfileStoreError};
pub use domain::{
    EligibilityTag, EmploymentStatus, HousingType, IncomeRange, MatchReport, MatchResult,
    QuestionnaireAnswers, Regeling, RegelingDetails, UserId,
};
pub use router::matching_router;
pub use scoring::{score_matches, MIN_MATCH_SCORE};
pub use service::{MatchingService, MatchingServiceError};
pub use tags::derive_tags;
