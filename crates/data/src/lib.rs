//! Data access for the SkillPath dashboard.
//!
//! The [`repositories::LearningRepository`] trait is the only way the
//! service layer reaches learning data. [`repositories::InMemoryRepository`]
//! serves the seeded catalog from [`seed`], optionally with simulated latency.

pub mod error;
pub mod repositories;
pub mod seed;

pub use error::RepositoryError;
pub use repositories::{InMemoryRepository, LatencyProfile, LearningRepository};
