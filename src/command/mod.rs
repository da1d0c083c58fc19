//! Utterance resolution pipeline
//!
//! raw text -> Utterance (trimmed + lowercased) -> handler chain -> ActionPlan

pub mod extract;
pub mod handlers;
pub mod resolver;

pub use handlers::Utterance;
pub use resolver::{build_plan, IntentResolver};
