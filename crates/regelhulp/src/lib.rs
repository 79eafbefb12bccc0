//! Regelhulp: matches Dutch households to government assistance programs.
//!
//! The interesting logic lives in [`matching`]; [`config`], [`telemetry`], and
//! [`error`] carry the service scaffolding shared with the API binary.

pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;
