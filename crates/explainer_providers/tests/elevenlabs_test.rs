use explainer_error::{CapabilityErrorKind, ExplainerErrorKind};
use explainer_interface::SpeechSynthesizer;
use explainer_providers::{ElevenLabsConfig, ElevenLabsSynthesizer};
use mockito::Matcher;

fn synthesizer(base_url: String) -> ElevenLabsSynthesizer {
    let mut config = ElevenLabsConfig::new("xi-key");
    config.base_url = base_url;
    ElevenLabsSynthesizer::new(config)
}

#[tokio::test]
async fn test_synthesize_returns_audio_bytes() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/text-to-speech/21m00Tcm4TlvDq8ikWAM")
        .match_header("xi-api-key", "xi-key")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "text": "Hello there.",
            "model_id": "eleven_monolingual_v1",
            "voice_settings": { "stability": 0.5, "similarity_boost": 0.75 }
        })))
        .with_status(200)
        .with_header("content-type", "audio/mpeg")
        .with_body(vec![0xff, 0xfb, 0x90, 0x00])
        .create_async()
        .await;

    let tts = synthesizer(server.url());
    let audio = tts.synthesize("Hello there.").await.unwrap();

    mock.assert_async().await;
    assert_eq!(audio, vec![0xff, 0xfb, 0x90, 0x00]);
    assert_eq!(tts.voice_id(), "21m00Tcm4TlvDq8ikWAM");
    assert_eq!(tts.audio_extension(), "mp3");
}

#[tokio::test]
async fn test_synthesize_surfaces_status_and_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/text-to-speech/21m00Tcm4TlvDq8ikWAM")
        .with_status(401)
        .with_body("quota exceeded")
        .create_async()
        .await;

    let err = synthesizer(server.url())
        .synthesize("Hello.")
        .await
        .unwrap_err();

    match err.kind() {
        ExplainerErrorKind::Capability(e) => {
            assert!(matches!(&e.kind, CapabilityErrorKind::Api { status: 401, .. }));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.reason().contains("quota exceeded"));
}

#[tokio::test]
async fn test_list_voices() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/voices")
        .match_header("xi-api-key", "xi-key")
        .with_status(200)
        .with_body(
            r#"{"voices":[{"voice_id":"a1","name":"Rachel"},{"voice_id":"b2","name":"Adam"}]}"#,
        )
        .create_async()
        .await;

    let voices = synthesizer(server.url()).list_voices().await.unwrap();

    assert_eq!(voices.len(), 2);
    assert_eq!(voices[0].voice_id(), "a1");
    assert_eq!(voices[1].name(), "Adam");
}
