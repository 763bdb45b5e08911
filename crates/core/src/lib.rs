//! Pure domain logic for the SkillPath learning-progress dashboard.
//!
//! Everything in this crate is synchronous and free of I/O. Callers load
//! collections through `skillpath-data` and pass them in; the functions here
//! derive points, progress percentages, completion ratios and view-ready
//! summaries from them.

pub mod chart;
pub mod completion;
pub mod dashboard;
pub mod error;
pub mod grouping;
pub mod ladder;
pub mod learning;
pub mod lesson_content;
pub mod points;
pub mod priority;
pub mod progress;
pub mod quiz;
pub mod recommendation;
pub mod resource_filter;
pub mod session;
pub mod types;
pub mod weekly;
