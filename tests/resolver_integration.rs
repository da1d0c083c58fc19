//! Integration tests for utterance -> action plan resolution

use serde_json::json;
use vista_action_engine::{build_plan, Intent, IntentResolver};

fn step_names(text: &str) -> Vec<String> {
    build_plan(text).steps.into_iter().map(|s| s.name).collect()
}

/// Test 1: WhatsApp message with recipient and trailing clause
#[test]
fn test_send_whatsapp_message() {
    let plan = build_plan("Iris send a WhatsApp message to Sam saying I will arrive soon");

    assert_eq!(plan.intent, Intent::SendMessage);
    assert_eq!(plan.slot_str("recipient"), Some("sam"));
    assert_eq!(plan.slot_str("app"), Some("whatsapp"));
    assert_eq!(plan.slot_str("content"), Some("i will arrive soon"));
    assert_eq!(plan.last_step().unwrap().name, "send");
    assert!((plan.confidence - 0.82).abs() < 1e-9);
}

/// Test 2: Calling falls back to the words after "call"
#[test]
fn test_call_my_mom() {
    let plan = build_plan("call my mom");

    assert_eq!(plan.intent, Intent::MakeCall);
    assert_eq!(plan.slot_str("recipient"), Some("my mom"));
    assert_eq!(plan.first_step().unwrap().params["app"], json!("dialer"));
    assert_eq!(step_names("call my mom"), ["open_app", "find_contact", "start_call"]);
}

/// Test 3: Music playback with app and generic context
#[test]
fn test_play_some_music_on_spotify() {
    let plan = build_plan("play some music on Spotify");

    assert_eq!(plan.intent, Intent::PlayMusic);
    assert_eq!(plan.slot_str("app"), Some("spotify"));
    assert_eq!(plan.slot_str("context"), Some("generic_music"));
    assert_eq!(plan.steps[1].params["context"], json!("generic_music"));
}

/// Test 4: "play" without a music token is not playback
#[test]
fn test_play_guitar_is_not_music() {
    let plan = build_plan("play the guitar");
    assert_ne!(plan.intent, Intent::PlayMusic);
    assert_eq!(plan.intent, Intent::Unknown);
}

/// Test 5: Toggle with a determiner before the setting
#[test]
fn test_turn_on_the_flashlight() {
    let plan = build_plan("turn on the flashlight");

    assert_eq!(plan.intent, Intent::ToggleSetting);
    assert_eq!(plan.slot_str("setting"), Some("flashlight"));
    assert_eq!(plan.slot_str("state"), Some("on"));
    assert_eq!(plan.steps.len(), 1);
    assert_eq!(plan.steps[0].name, "set_setting");
}

/// Test 6: Both wifi spellings canonicalize to the same setting
#[test]
fn test_wifi_aliases() {
    for text in ["turn on wi-fi", "enable wifi", "Switch ON Wi-Fi"] {
        let plan = build_plan(text);
        assert_eq!(plan.slot_str("setting"), Some("wifi"), "input: {}", text);
        assert_eq!(plan.slot_str("state"), Some("on"), "input: {}", text);
    }
}

/// Test 7: Unmatched input resolves to a clarification
#[test]
fn test_remind_me_later_is_unknown() {
    let plan = build_plan("remind me later");

    assert_eq!(plan.intent, Intent::Unknown);
    assert!((plan.confidence - 0.1).abs() < 1e-9);
    assert_eq!(plan.first_step().unwrap().name, "clarify");
}

/// Test 8: Messaging keywords win over "open"
#[test]
fn test_message_has_priority_over_open() {
    let plan = build_plan("open telegram and text Maria that dinner is ready");

    assert_eq!(plan.intent, Intent::SendMessage);
    assert_eq!(plan.slot_str("app"), Some("telegram"));
    assert_eq!(plan.slot_str("content"), Some("dinner is ready"));
}

/// Test 9: Plain open/launch requests
#[test]
fn test_open_and_launch() {
    let plan = build_plan("Open the Camera");
    assert_eq!(plan.intent, Intent::OpenApp);
    assert_eq!(plan.slot_str("app"), Some("the camera"));

    let plan = build_plan("launch maps");
    assert_eq!(plan.slot_str("app"), Some("maps"));
    assert_eq!(step_names("launch maps"), ["open_app"]);
}

/// Test 10: Screen reading
#[test]
fn test_read_the_screen() {
    let plan = build_plan("read what is on the screen");

    assert_eq!(plan.intent, Intent::ReadScreen);
    assert_eq!(plan.slots.len(), 1);
    assert_eq!(
        step_names("read what is on the screen"),
        ["capture_screen", "ocr", "narrate"]
    );
}

/// Test 11: Message body from the second sentence keeps its casing
#[test]
fn test_message_body_from_sentence() {
    let plan = build_plan("Message to Ana. Bring The Keys. Thanks");

    assert_eq!(plan.intent, Intent::SendMessage);
    assert_eq!(plan.slot_str("content"), Some("Bring The Keys"));
}

/// Test 12: Serialized output has the canonical shape
#[test]
fn test_serialized_plan_shape() {
    let value = build_plan("call my mom").to_value();

    assert_eq!(value["intent"], json!("make_call"));
    assert_eq!(value["confidence"], json!(0.78));
    assert_eq!(value["slots"], json!({"intent": "make_call", "recipient": "my mom"}));
    assert_eq!(value["steps"][0], json!({"name": "open_app", "params": {"app": "dialer"}}));
    assert_eq!(value["steps"][2], json!({"name": "start_call", "params": {}}));
    assert_eq!(value["explanation"], json!("Detected calling intent via keyword match."));
}

/// Test 13: A shared resolver is usable from several threads
#[test]
fn test_resolver_shared_across_threads() {
    let resolver = IntentResolver::new();
    let expected = resolver.build_plan("text bob saying hi");

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| resolver.build_plan("text bob saying hi")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
