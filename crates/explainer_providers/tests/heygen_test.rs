use explainer_core::{RenderState, Script, ScriptSection, VideoType};
use explainer_error::{CapabilityErrorKind, ExplainerErrorKind};
use explainer_interface::{RenderRequest, VideoRenderer};
use explainer_providers::{HeyGenConfig, HeyGenRenderer};
use mockito::Matcher;
use std::path::PathBuf;

fn renderer(base_url: String) -> HeyGenRenderer {
    let mut config = HeyGenConfig::new("hg-key");
    config.base_url = base_url;
    HeyGenRenderer::new(config)
}

fn request() -> RenderRequest {
    let script = Script::new(
        VideoType::Generic,
        None,
        vec![
            ScriptSection::new("hook", "Picture this.", 30.0),
            ScriptSection::new("cta", "Book a demo.", 45.0),
        ],
    )
    .unwrap();
    RenderRequest {
        script,
        audio_path: PathBuf::from("data/audio/s-voiceover.mp3"),
    }
}

fn status_mock(server: &mut mockito::ServerGuard, job_id: &str, body: &str) -> mockito::Mock {
    server
        .mock("GET", "/v1/video_status.get")
        .match_query(Matcher::UrlEncoded("video_id".into(), job_id.into()))
        .match_header("x-api-key", "hg-key")
        .with_status(200)
        .with_body(body)
}

#[tokio::test]
async fn test_submit_returns_job_id() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v2/video/generate")
        .match_header("x-api-key", "hg-key")
        .match_body(Matcher::Regex("Book a demo.".to_string()))
        .with_status(200)
        .with_body(r#"{"error":null,"data":{"video_id":"job-42"}}"#)
        .create_async()
        .await;

    let job_id = renderer(server.url()).submit(&request()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(job_id, "job-42");
}

#[tokio::test]
async fn test_submit_failure_names_action() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v2/video/generate")
        .with_status(400)
        .with_body("invalid avatar")
        .create_async()
        .await;

    let err = renderer(server.url()).submit(&request()).await.unwrap_err();

    match err.kind() {
        ExplainerErrorKind::Capability(e) => match &e.kind {
            CapabilityErrorKind::Api {
                provider,
                status,
                message,
            } => {
                assert_eq!(provider, "heygen submit");
                assert_eq!(*status, 400);
                assert_eq!(message, "invalid avatar");
            }
            other => panic!("unexpected kind: {:?}", other),
        },
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_status_completed_carries_url_and_duration() {
    let mut server = mockito::Server::new_async().await;
    let _mock = status_mock(
        &mut server,
        "job-42",
        r#"{"data":{"status":"completed","video_url":"https://x/y.mp4","duration":74.5}}"#,
    )
    .create_async()
    .await;

    let status = renderer(server.url()).status("job-42").await.unwrap();

    assert_eq!(status.state, RenderState::Completed);
    assert_eq!(status.video_url.as_deref(), Some("https://x/y.mp4"));
    assert_eq!(status.duration_seconds, Some(74.5));
}

#[tokio::test]
async fn test_status_maps_provider_states() {
    let mut server = mockito::Server::new_async().await;
    let _processing = status_mock(&mut server, "a", r#"{"data":{"status":"processing"}}"#)
        .create_async()
        .await;
    let _waiting = status_mock(&mut server, "b", r#"{"data":{"status":"waiting"}}"#)
        .create_async()
        .await;
    let _failed = status_mock(&mut server, "c", r#"{"data":{"status":"failed"}}"#)
        .create_async()
        .await;

    let heygen = renderer(server.url());

    assert_eq!(heygen.status("a").await.unwrap().state, RenderState::Processing);
    assert_eq!(heygen.status("b").await.unwrap().state, RenderState::Pending);
    let failed = heygen.status("c").await.unwrap();
    assert_eq!(failed.state, RenderState::Failed);
    assert!(failed.video_url.is_none());
}
