//! Parsing of script-writer responses.

use explainer_core::{Script, ScriptSection, VideoType};
use explainer_error::{CapabilityError, CapabilityErrorKind, ExplainerError, ExplainerResult};
use explainer_interface::ScriptRequest;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

static FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(?:json)?\s*([\s\S]*?)```").expect("fence pattern is valid")
});

#[derive(Debug, Deserialize)]
struct ScriptPayload {
    #[serde(default)]
    sections: Vec<ScriptSection>,
}

/// Parse raw model text into a validated [`Script`].
///
/// Accepts bare JSON or JSON wrapped in a ```` ```json ```` fence.
///
/// # Errors
///
/// Returns [`CapabilityErrorKind::Parse`] for malformed JSON and
/// [`CapabilityErrorKind::InvalidScript`] for an empty or missing sections
/// array or invalid section values.
///
/// # Examples
///
/// ```
/// use explainer_core::VideoType;
/// use explainer_interface::ScriptRequest;
/// use explainer_providers::parse_script_response;
///
/// let raw = "```json\n{\"sections\":[{\"narration\":\"Hi.\",\"durationSeconds\":4}]}\n```";
/// let request = ScriptRequest { video_type: VideoType::Generic, client_profile: None };
///
/// let script = parse_script_response(raw, &request).unwrap();
/// assert_eq!(*script.total_duration_seconds(), 4.0);
/// ```
pub fn parse_script_response(raw: &str, request: &ScriptRequest) -> ExplainerResult<Script> {
    let trimmed = raw.trim();
    let json = match FENCE.captures(trimmed).and_then(|c| c.get(1)) {
        Some(body) => body.as_str().trim(),
        None => trimmed,
    };

    let payload: ScriptPayload = serde_json::from_str(json).map_err(|e| {
        ExplainerError::from(CapabilityError::new(CapabilityErrorKind::Parse(format!(
            "Failed to parse script JSON: {}",
            e
        ))))
    })?;

    let client_name = match request.video_type {
        VideoType::Personalized => request.client_profile.as_ref().map(|p| p.name.clone()),
        VideoType::Generic => None,
    };

    Script::new(request.video_type, client_name, payload.sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use explainer_core::ClientProfile;
    use explainer_error::ExplainerErrorKind;

    fn generic() -> ScriptRequest {
        ScriptRequest {
            video_type: VideoType::Generic,
            client_profile: None,
        }
    }

    fn capability_kind(err: &ExplainerError) -> &CapabilityErrorKind {
        match err.kind() {
            ExplainerErrorKind::Capability(e) => &e.kind,
            other => panic!("expected capability error, got {:?}", other),
        }
    }

    #[test]
    fn test_parses_bare_json() {
        let raw = r#"{"sections":[
            {"id":"hook","label":"Hook","durationSeconds":30,"narration":"One.","visualCue":"x"},
            {"id":"cta","label":"CTA","durationSeconds":45,"narration":"Two.","visualCue":"y","onScreenText":null}
        ]}"#;

        let script = parse_script_response(raw, &generic()).unwrap();

        assert_eq!(*script.total_duration_seconds(), 75.0);
        assert_eq!(script.raw_narration(), "One. Two.");
    }

    #[test]
    fn test_unwraps_unlabelled_fence_with_prose() {
        let raw = "Here you go:\n```\n{\"sections\":[{\"narration\":\"Hi.\",\"durationSeconds\":3}]}\n```\nEnjoy.";
        let script = parse_script_response(raw, &generic()).unwrap();
        assert_eq!(script.sections().len(), 1);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = parse_script_response("not json", &generic()).unwrap_err();
        assert!(matches!(capability_kind(&err), CapabilityErrorKind::Parse(_)));
    }

    #[test]
    fn test_missing_sections_is_invalid_script() {
        let err = parse_script_response("{}", &generic()).unwrap_err();
        assert!(matches!(
            capability_kind(&err),
            CapabilityErrorKind::InvalidScript(_)
        ));
    }

    #[test]
    fn test_personalized_keeps_client_name() {
        let request = ScriptRequest {
            video_type: VideoType::Personalized,
            client_profile: Some(ClientProfile::new("Acme")),
        };
        let raw = r#"{"sections":[{"narration":"Hi Acme.","durationSeconds":3}]}"#;

        let script = parse_script_response(raw, &request).unwrap();

        assert_eq!(script.client_name().as_deref(), Some("Acme"));
    }
}
