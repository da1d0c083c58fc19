//! Intent handlers, one per recognized goal
//!
//! Each handler inspects the utterance and either declines (`None`) or
//! returns a complete plan. Order matters and lives in [`HANDLERS`]:
//! specific intents are checked before looser ones like generic "open".

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value};

use crate::actions::{ActionPlan, ActionStep, Intent, Params};
use crate::command::extract::{
    contains_any, detect_messaging_app, extract_after_keyword, extract_message_body,
    extract_music_context, extract_recipient,
};
use crate::core::config::ResolverConfig;

pub const SEND_MESSAGE_CONFIDENCE: f64 = 0.82;
pub const MAKE_CALL_CONFIDENCE: f64 = 0.78;
pub const PLAY_MUSIC_CONFIDENCE: f64 = 0.74;
pub const OPEN_APP_CONFIDENCE: f64 = 0.6;
pub const READ_SCREEN_CONFIDENCE: f64 = 0.71;
pub const TOGGLE_SETTING_CONFIDENCE: f64 = 0.69;

/// Raw text alongside its matching form
#[derive(Debug, Clone)]
pub struct Utterance<'a> {
    /// Trimmed, original casing; used for content extraction
    pub text: &'a str,
    /// Lowercased `text`; used for trigger detection
    pub normalized: String,
}

impl<'a> Utterance<'a> {
    pub fn new(raw: &'a str) -> Self {
        let text = raw.trim();
        Self {
            text,
            normalized: text.to_lowercase(),
        }
    }
}

pub type Handler = fn(&Utterance<'_>, &ResolverConfig) -> Option<ActionPlan>;

/// Fixed priority order; the first handler returning a plan wins
pub const HANDLERS: [(&str, Handler); 6] = [
    ("send_message", handle_send_message),
    ("make_call", handle_make_call),
    ("play_music", handle_play_music),
    ("open_app", handle_open_app),
    ("read_screen", handle_read_screen),
    ("toggle_setting", handle_toggle_setting),
];

static TURN_SWITCH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(turn|switch)\s+(on|off)\s+(?:(?:the|my)\s+)?(\w[\w-]*)")
        .expect("valid turn/switch pattern")
});

static ENABLE_DISABLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(enable|disable)\s+(?:(?:the|my)\s+)?(\w[\w-]*)")
        .expect("valid enable/disable pattern")
});

fn intent_slots(intent: Intent) -> Params {
    let mut slots = Params::new();
    slots.insert("intent".into(), json!(intent.as_str()));
    slots
}

fn params(entries: &[(&str, Value)]) -> Params {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

fn handle_send_message(utterance: &Utterance<'_>, _config: &ResolverConfig) -> Option<ActionPlan> {
    let normalized = utterance.normalized.as_str();
    if !contains_any(normalized, &["message", "text", "whatsapp"]) {
        return None;
    }

    let recipient = extract_recipient(normalized);
    let content = extract_message_body(utterance.text);
    let app = detect_messaging_app(normalized);

    let mut slots = intent_slots(Intent::SendMessage);
    slots.insert("app".into(), json!(app));
    slots.insert("recipient".into(), json!(recipient));
    slots.insert("content".into(), json!(content));

    let steps = vec![
        ActionStep::with_params("open_app", params(&[("app", json!(app))])),
        ActionStep::with_params(
            "find_contact",
            params(&[("name", json!(recipient.unwrap_or_default()))]),
        ),
        ActionStep::new("open_conversation"),
        ActionStep::with_params(
            "type_message",
            params(&[("text", json!(content.unwrap_or_default()))]),
        ),
        ActionStep::new("send"),
    ];

    Some(ActionPlan {
        intent: Intent::SendMessage,
        confidence: SEND_MESSAGE_CONFIDENCE,
        slots,
        steps,
        explanation: "Detected messaging request via keywords and contact pattern.".into(),
    })
}

fn handle_make_call(utterance: &Utterance<'_>, _config: &ResolverConfig) -> Option<ActionPlan> {
    let normalized = utterance.normalized.as_str();
    if !normalized.contains("call") {
        return None;
    }

    let recipient =
        extract_recipient(normalized).or_else(|| extract_after_keyword(normalized, "call"));

    let mut slots = intent_slots(Intent::MakeCall);
    slots.insert("recipient".into(), json!(recipient));

    let steps = vec![
        ActionStep::with_params("open_app", params(&[("app", json!("dialer"))])),
        ActionStep::with_params(
            "find_contact",
            params(&[("name", json!(recipient.unwrap_or_default()))]),
        ),
        ActionStep::new("start_call"),
    ];

    Some(ActionPlan {
        intent: Intent::MakeCall,
        confidence: MAKE_CALL_CONFIDENCE,
        slots,
        steps,
        explanation: "Detected calling intent via keyword match.".into(),
    })
}

fn handle_play_music(utterance: &Utterance<'_>, _config: &ResolverConfig) -> Option<ActionPlan> {
    let normalized = utterance.normalized.as_str();
    // Both a playback verb and a music token; "play" alone is too broad
    if !contains_any(normalized, &["play", "resume"]) {
        return None;
    }
    if !contains_any(normalized, &["music", "songs", "spotify", "playlist"]) {
        return None;
    }

    let app = if normalized.contains("spotify") {
        "spotify"
    } else {
        "default_music"
    };
    let context = extract_music_context(normalized);

    let mut slots = intent_slots(Intent::PlayMusic);
    slots.insert("app".into(), json!(app));
    slots.insert("context".into(), json!(context));

    let steps = vec![
        ActionStep::with_params("open_app", params(&[("app", json!(app))])),
        ActionStep::with_params("resume_playback", params(&[("context", json!(context))])),
    ];

    Some(ActionPlan {
        intent: Intent::PlayMusic,
        confidence: PLAY_MUSIC_CONFIDENCE,
        slots,
        steps,
        explanation: "Detected playback intent via play/resume keyword and music token.".into(),
    })
}

fn handle_open_app(utterance: &Utterance<'_>, _config: &ResolverConfig) -> Option<ActionPlan> {
    let normalized = utterance.normalized.as_str();
    if !contains_any(normalized, &["open", "launch"]) {
        return None;
    }

    // Declines on an empty remainder so later handlers still get a chance
    let app = extract_after_keyword(normalized, "open")
        .or_else(|| extract_after_keyword(normalized, "launch"))?;

    let mut slots = intent_slots(Intent::OpenApp);
    slots.insert("app".into(), json!(app));

    Some(ActionPlan {
        intent: Intent::OpenApp,
        confidence: OPEN_APP_CONFIDENCE,
        slots,
        steps: vec![ActionStep::with_params("open_app", params(&[("app", json!(app))]))],
        explanation: "Default open/launch handler.".into(),
    })
}

fn handle_read_screen(utterance: &Utterance<'_>, _config: &ResolverConfig) -> Option<ActionPlan> {
    let normalized = utterance.normalized.as_str();
    if !normalized.contains("read") || !contains_any(normalized, &["screen", "here", "this"]) {
        return None;
    }

    Some(ActionPlan {
        intent: Intent::ReadScreen,
        confidence: READ_SCREEN_CONFIDENCE,
        slots: intent_slots(Intent::ReadScreen),
        steps: vec![
            ActionStep::new("capture_screen"),
            ActionStep::new("ocr"),
            ActionStep::new("narrate"),
        ],
        explanation: "Screen reading request detected via read + screen keywords.".into(),
    })
}

fn handle_toggle_setting(utterance: &Utterance<'_>, config: &ResolverConfig) -> Option<ActionPlan> {
    let normalized = utterance.normalized.as_str();

    let (state, setting) = if let Some(caps) = TURN_SWITCH.captures(normalized) {
        (caps.get(2)?.as_str(), caps.get(3)?.as_str())
    } else {
        let caps = ENABLE_DISABLE.captures(normalized)?;
        let state = if &caps[1] == "enable" { "on" } else { "off" };
        (state, caps.get(2)?.as_str())
    };

    let mut slots = intent_slots(Intent::ToggleSetting);
    slots.insert("setting".into(), json!(config.canonical_setting(setting)));
    slots.insert("state".into(), json!(state));

    Some(ActionPlan {
        intent: Intent::ToggleSetting,
        confidence: TOGGLE_SETTING_CONFIDENCE,
        steps: vec![ActionStep::with_params("set_setting", slots.clone())],
        slots,
        explanation: "Setting toggle detected via turn on/off pattern.".into(),
    })
}
