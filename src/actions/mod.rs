pub mod plan;

pub use plan::{ActionPlan, ActionStep, Intent, Params};
