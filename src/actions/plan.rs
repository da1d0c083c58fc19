//! Action plans and their primitive steps
//!
//! A plan is the resolver's only output. It is built once per utterance and
//! never mutated afterwards; the host assistant executes `steps` in order.

use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};

/// Key/value bag used for both slots and step params
pub type Params = Map<String, Value>;

/// High-level goal recognized in an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    SendMessage,
    MakeCall,
    PlayMusic,
    OpenApp,
    ReadScreen,
    ToggleSetting,
    /// No handler matched
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::SendMessage => "send_message",
            Intent::MakeCall => "make_call",
            Intent::PlayMusic => "play_music",
            Intent::OpenApp => "open_app",
            Intent::ReadScreen => "read_screen",
            Intent::ToggleSetting => "toggle_setting",
            Intent::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One primitive operation for the host assistant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionStep {
    pub name: String,
    pub params: Params,
}

impl ActionStep {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_params(name, Params::new())
    }

    pub fn with_params(name: impl Into<String>, params: Params) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "action step name must not be empty");
        Self { name, params }
    }

    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }
}

/// Structured description of how to satisfy a request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionPlan {
    pub intent: Intent,
    /// Static heuristic score in [0, 1], fixed per handler
    #[serde(serialize_with = "serialize_confidence")]
    pub confidence: f64,
    pub slots: Params,
    /// Execution order
    pub steps: Vec<ActionStep>,
    pub explanation: String,
}

/// Confidence as emitted to callers; display only, never fed back into matching
pub fn round_confidence(confidence: f64) -> f64 {
    (confidence * 1000.0).round() / 1000.0
}

fn serialize_confidence<S: Serializer>(confidence: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_confidence(*confidence))
}

impl ActionPlan {
    /// Canonical key-ordered form:
    /// `{intent, confidence, slots, steps: [{name, params}], explanation}`
    pub fn to_value(&self) -> Value {
        let steps: Vec<Value> = self
            .steps
            .iter()
            .map(|step| json!({ "name": step.name, "params": step.params }))
            .collect();

        json!({
            "intent": self.intent.as_str(),
            "confidence": round_confidence(self.confidence),
            "slots": self.slots,
            "steps": steps,
            "explanation": self.explanation,
        })
    }

    pub fn slot_str(&self, key: &str) -> Option<&str> {
        self.slots.get(key).and_then(Value::as_str)
    }

    pub fn is_fallback(&self) -> bool {
        self.intent == Intent::Unknown
    }

    pub fn first_step(&self) -> Option<&ActionStep> {
        self.steps.first()
    }

    pub fn last_step(&self) -> Option<&ActionStep> {
        self.steps.last()
    }
}
