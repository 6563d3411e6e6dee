//! Video generation command handler.

use super::Cli;
use explainer::{
    ConfigError, ExplainerResult, PipelineOptionsBuilder, ProvidersConfig, ReportWriter,
    VideoReport, WorkflowOverrides, capabilities_from_config, run_workflow,
};
use std::path::Path;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Generate one video and persist its report.
///
/// Returns whether the pipeline succeeded; a failed pipeline still writes its
/// report.
///
/// # Errors
///
/// Fails on invalid flags, unreadable configuration, or when the report
/// cannot be written.
pub async fn run_explainer(cli: &Cli) -> ExplainerResult<bool> {
    let client_profile = cli.client_profile()?;

    let config = ProvidersConfig::load(cli.config.as_deref())?;
    match &config {
        Some(_) => info!("Loaded providers configuration"),
        None => info!("No providers configured; using mock clients"),
    }
    let capabilities = capabilities_from_config(config.as_ref());
    info!(providers = ?capabilities, "Capabilities ready");

    match &client_profile {
        Some(profile) => println!("Generating {} video for {}...", cli.video_type, profile.name),
        None => println!("Generating {} video...", cli.video_type),
    }

    let cancellation = CancellationToken::new();
    let interrupt = cancellation.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted; cancelling render wait");
            interrupt.cancel();
        }
    });

    let options = PipelineOptionsBuilder::default()
        .poll_interval(cli.poll_interval())
        .poll_timeout(cli.timeout())
        .cancellation(cancellation)
        .build()
        .map_err(|e| ConfigError::new(format!("Invalid pipeline options: {}", e)))?;

    let report = run_workflow(
        WorkflowOverrides {
            video_type: Some(cli.video_type),
            client_profile,
            output_dir: Some(cli.output.join("audio")),
            capabilities: Some(capabilities),
            ..Default::default()
        },
        options,
    )
    .await;

    let report_path = ReportWriter::new(&cli.output).write(&report).await?;
    print_summary(&report, &report_path);

    Ok(report.summary.succeeded)
}

fn print_summary(report: &VideoReport, report_path: &Path) {
    if report.summary.succeeded {
        println!("\nPipeline completed successfully!");
        if let Some(script) = &report.script {
            println!(
                "  Script: {} sections, {}s",
                script.sections().len(),
                script.total_duration_seconds()
            );
        }
        if let Some(voiceover) = &report.voiceover {
            println!("  Audio: {}", voiceover.audio_path.display());
        }
        if let Some(video) = &report.video {
            println!("  Video: {}", video.video_url);
        }
        println!("  Report: {}", report_path.display());
        return;
    }

    if let Some(stage) = report.summary.failed_at_stage {
        eprintln!("\nPipeline failed at stage: {}", stage);
    }
    if let Some(run) = report.failed_run() {
        eprintln!("  Errors: {}", run.errors().join(", "));
    }
    eprintln!("  Report: {}", report_path.display());
}
