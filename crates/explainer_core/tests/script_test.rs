use explainer_core::{Script, ScriptSection, VideoType};
use explainer_error::{CapabilityErrorKind, ExplainerErrorKind};

fn section(duration: f64) -> ScriptSection {
    ScriptSection::new("s", "Some narration.", duration)
}

#[test]
fn test_total_duration_is_sum_of_sections() {
    let durations = [10.0, 20.0, 25.0, 12.0, 8.0];
    let script = Script::new(
        VideoType::Generic,
        None,
        durations.iter().copied().map(section).collect(),
    )
    .unwrap();

    assert_eq!(*script.total_duration_seconds(), 75.0);
    assert_eq!(script.sections().len(), 5);
}

#[test]
fn test_fractional_durations_sum_exactly() {
    let sections = vec![section(0.25), section(1.5), section(2.125)];
    let expected: f64 = sections.iter().map(|s| s.duration_seconds).sum();

    let script = Script::new(VideoType::Generic, None, sections).unwrap();

    assert_eq!(*script.total_duration_seconds(), expected);
}

#[test]
fn test_raw_narration_joins_sections_with_space() {
    let script = Script::new(
        VideoType::Generic,
        None,
        vec![
            ScriptSection::new("hook", "First line.", 5.0),
            ScriptSection::new("cta", "Second line.", 5.0),
        ],
    )
    .unwrap();

    assert_eq!(script.raw_narration(), "First line. Second line.");
}

#[test]
fn test_empty_sections_rejected() {
    let err = Script::new(VideoType::Generic, None, vec![]).unwrap_err();

    match err.kind() {
        ExplainerErrorKind::Capability(e) => {
            assert!(matches!(e.kind, CapabilityErrorKind::InvalidScript(_)));
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
    assert!(err.reason().contains("empty sections"));
}

#[test]
fn test_negative_duration_rejected() {
    let result = Script::new(VideoType::Generic, None, vec![section(5.0), section(-1.0)]);
    assert!(result.is_err());
}

#[test]
fn test_blank_narration_rejected() {
    let result = Script::new(
        VideoType::Generic,
        None,
        vec![ScriptSection::new("hook", "   ", 5.0)],
    );
    assert!(result.is_err());
}

#[test]
fn test_client_name_kept_only_for_personalized() {
    let generic = Script::new(VideoType::Generic, Some("Acme".to_string()), vec![section(1.0)])
        .unwrap();
    let personalized = Script::new(
        VideoType::Personalized,
        Some("Acme".to_string()),
        vec![section(1.0)],
    )
    .unwrap();

    assert!(generic.client_name().is_none());
    assert_eq!(personalized.client_name().as_deref(), Some("Acme"));
}

#[test]
fn test_scripts_get_distinct_ids() {
    let a = Script::new(VideoType::Generic, None, vec![section(1.0)]).unwrap();
    let b = Script::new(VideoType::Generic, None, vec![section(1.0)]).unwrap();

    assert_ne!(a.id(), b.id());
    assert_eq!(a.sections(), b.sections());
}

#[test]
fn test_sections_deserialize_from_provider_json() {
    let json = r#"{
        "id": "hook",
        "label": "Opening Hook",
        "durationSeconds": 10,
        "narration": "Hello.",
        "visualCue": "Logo",
        "onScreenText": null
    }"#;

    let parsed: ScriptSection = serde_json::from_str(json).unwrap();

    assert_eq!(parsed.duration_seconds, 10.0);
    assert_eq!(parsed.visual_cue, "Logo");
    assert!(parsed.on_screen_text.is_none());
}

#[test]
fn test_blank_section_ids_are_numbered() {
    let script = Script::new(
        VideoType::Generic,
        None,
        vec![
            ScriptSection::new("", "First.", 5.0),
            ScriptSection::new("cta", "Second.", 5.0),
            ScriptSection::new(" ", "Third.", 5.0),
        ],
    )
    .unwrap();

    let ids: Vec<&str> = script.sections().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["section-1", "cta", "section-3"]);
}
