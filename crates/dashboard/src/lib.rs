//! SkillPath dashboard service library.
//!
//! Exposes the configuration, error types and [`service::DashboardService`]
//! so integration tests and the binary entrypoint can both access them.

pub mod config;
pub mod error;
pub mod service;
