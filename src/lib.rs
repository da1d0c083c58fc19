//! Vista Action Engine - rule-based natural language to action plans

pub mod actions;
pub mod command;
pub mod core;

pub use actions::{ActionPlan, ActionStep, Intent};
pub use command::{build_plan, IntentResolver};
pub use crate::core::{EngineError, ResolverConfig};
