//! Tests for report persistence.

use explainer::{
    Manifest, PipelineOptionsBuilder, ReportWriter, VideoType, WorkflowOverrides,
    mock_capabilities, run_workflow,
};
use std::time::Duration;
use tempfile::TempDir;

async fn mock_report(dir: &TempDir) -> explainer::VideoReport {
    let options = PipelineOptionsBuilder::default()
        .poll_interval(Duration::from_millis(1))
        .build()
        .unwrap();
    run_workflow(
        WorkflowOverrides {
            output_dir: Some(dir.path().join("audio")),
            capabilities: Some(mock_capabilities()),
            ..Default::default()
        },
        options,
    )
    .await
}

#[tokio::test]
async fn test_write_creates_report_latest_and_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let report = mock_report(&temp_dir).await;
    let writer = ReportWriter::new(temp_dir.path());

    let report_path = writer.write(&report).await.unwrap();

    let expected_name = ReportWriter::report_file_name(&report);
    assert_eq!(report_path, temp_dir.path().join("reports").join(&expected_name));
    assert!(!expected_name.contains(':'));
    assert!(expected_name.ends_with(&format!("-{}.json", report.id)));

    let archived = std::fs::read_to_string(&report_path).unwrap();
    let latest = std::fs::read_to_string(temp_dir.path().join("latest.json")).unwrap();
    assert_eq!(archived, latest);
    assert!(archived.ends_with("}\n"));

    let json: serde_json::Value = serde_json::from_str(&archived).unwrap();
    assert_eq!(json["id"], report.id.as_str());
    assert_eq!(json["videoType"], "generic");
    assert_eq!(json["summary"]["succeeded"], true);
    assert_eq!(json["stageRuns"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_manifest_points_at_latest_report() {
    let temp_dir = TempDir::new().unwrap();
    let report = mock_report(&temp_dir).await;
    let writer = ReportWriter::new(temp_dir.path());

    writer.write(&report).await.unwrap();

    let raw = std::fs::read_to_string(temp_dir.path().join("manifest.json")).unwrap();
    let manifest: Manifest = serde_json::from_str(&raw).unwrap();
    assert_eq!(manifest.schema_version, "1.0");
    assert_eq!(manifest.latest_report, ReportWriter::report_file_name(&report));
    assert_eq!(manifest.generated_at, report.generated_at);
    assert_eq!(manifest.video_type, VideoType::Generic);
    assert!(manifest.client_name.is_none());
    assert_eq!(
        manifest.video_url,
        report.video.as_ref().map(|v| v.video_url.clone())
    );
    assert!(raw.contains("\"schemaVersion\""));
}

#[tokio::test]
async fn test_second_write_keeps_archive_and_replaces_latest() {
    let temp_dir = TempDir::new().unwrap();
    let writer = ReportWriter::new(temp_dir.path());

    let first = mock_report(&temp_dir).await;
    writer.write(&first).await.unwrap();
    let second = mock_report(&temp_dir).await;
    writer.write(&second).await.unwrap();

    let archived = std::fs::read_dir(temp_dir.path().join("reports"))
        .unwrap()
        .count();
    assert_eq!(archived, 2);

    let manifest: Manifest = serde_json::from_str(
        &std::fs::read_to_string(temp_dir.path().join("manifest.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(manifest.latest_report, ReportWriter::report_file_name(&second));
}
