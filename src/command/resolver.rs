//! Intent resolution - converts raw utterances into action plans

use once_cell::sync::Lazy;
use serde_json::json;

use crate::actions::{ActionPlan, ActionStep, Intent, Params};
use crate::command::handlers::{Utterance, HANDLERS};
use crate::core::config::ResolverConfig;

pub const FALLBACK_CONFIDENCE: f64 = 0.1;

static DEFAULT_RESOLVER: Lazy<IntentResolver> = Lazy::new(IntentResolver::new);

/// Resolves utterances against the fixed handler chain
///
/// Holds only read-only configuration, so one resolver can be shared
/// across threads and every call is independent of the previous ones.
#[derive(Debug, Clone, Default)]
pub struct IntentResolver {
    config: ResolverConfig,
}

impl IntentResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Handler names in evaluation order
    pub fn handler_names() -> impl Iterator<Item = &'static str> {
        HANDLERS.iter().map(|(name, _)| *name)
    }

    /// Build a plan for `utterance`; never fails
    ///
    /// Unmatched or empty input resolves to the `unknown` intent with a
    /// single `clarify` step.
    pub fn build_plan(&self, utterance: &str) -> ActionPlan {
        let utterance = Utterance::new(utterance);

        for (name, handler) in HANDLERS.iter() {
            if let Some(plan) = handler(&utterance, &self.config) {
                tracing::debug!(
                    handler = *name,
                    confidence = plan.confidence,
                    steps = plan.steps.len(),
                    "Resolved utterance"
                );
                return plan;
            }
        }

        tracing::debug!(text = utterance.text, "No handler matched, falling back");
        fallback_plan(utterance.text)
    }
}

fn fallback_plan(text: &str) -> ActionPlan {
    let mut slots = Params::new();
    slots.insert("raw_text".into(), json!(text));

    let mut prompt = Params::new();
    prompt.insert("prompt".into(), json!(text));

    ActionPlan {
        intent: Intent::Unknown,
        confidence: FALLBACK_CONFIDENCE,
        slots,
        steps: vec![ActionStep::with_params("clarify", prompt)],
        explanation: "Fallback: not enough confidence to produce a plan.".into(),
    }
}

/// Resolve with the default configuration
pub fn build_plan(utterance: &str) -> ActionPlan {
    DEFAULT_RESOLVER.build_plan(utterance)
}
