//! Report persistence.
//!
//! Each run writes three JSON files under the output directory:
//!
//! ```text
//! <output>/
//! ├── reports/<generatedAt>-<id>.json   (every report ever written)
//! ├── latest.json                       (copy of the newest report)
//! └── manifest.json                     (pointer to the newest report)
//! ```

use explainer_core::{VideoReport, VideoType, file_safe_timestamp};
use explainer_error::{ExplainerResult, StorageError, StorageErrorKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Version stamped into every manifest.
pub const MANIFEST_SCHEMA_VERSION: &str = "1.0";

/// Summary pointing at the most recent report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Manifest format version
    pub schema_version: String,
    /// File name of the newest report inside `reports/`
    pub latest_report: String,
    /// When the newest report was generated
    pub generated_at: String,
    /// Workflow variant of the newest report
    pub video_type: VideoType,
    /// Client of the newest report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    /// Rendered video, when the run got that far
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl Manifest {
    fn for_report(report: &VideoReport, file_name: String) -> Self {
        Self {
            schema_version: MANIFEST_SCHEMA_VERSION.to_string(),
            latest_report: file_name,
            generated_at: report.generated_at.clone(),
            video_type: report.video_type,
            client_name: report.client_name.clone(),
            video_url: report.video.as_ref().map(|v| v.video_url.clone()),
        }
    }
}

/// Writes reports, `latest.json` and `manifest.json`.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    /// Create a writer rooted at `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Root directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// File name a report is stored under.
    pub fn report_file_name(report: &VideoReport) -> String {
        format!("{}-{}.json", file_safe_timestamp(&report.generated_at), report.id)
    }

    /// Persist a report, returning the path of the archived copy.
    ///
    /// # Errors
    ///
    /// Returns a storage error if a directory cannot be created, a value
    /// cannot be serialized or a file cannot be written.
    #[instrument(skip(self, report), fields(report_id = %report.id, output_dir = %self.output_dir.display()))]
    pub async fn write(&self, report: &VideoReport) -> ExplainerResult<PathBuf> {
        let reports_dir = self.output_dir.join("reports");
        tokio::fs::create_dir_all(&reports_dir).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                reports_dir.display(),
                e
            )))
        })?;

        let file_name = Self::report_file_name(report);
        let report_path = reports_dir.join(&file_name);

        write_json(&report_path, report).await?;
        write_json(&self.output_dir.join("latest.json"), report).await?;
        write_json(
            &self.output_dir.join("manifest.json"),
            &Manifest::for_report(report, file_name),
        )
        .await?;

        info!(path = %report_path.display(), "Report written");
        Ok(report_path)
    }
}

async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> ExplainerResult<()> {
    let mut json = serde_json::to_string_pretty(value)
        .map_err(|e| StorageError::new(StorageErrorKind::Serialize(e.to_string())))?;
    json.push('\n');

    tokio::fs::write(path, json).await.map_err(|e| {
        StorageError::new(StorageErrorKind::Write(format!("{}: {}", path.display(), e)))
    })?;
    debug!(path = %path.display(), "JSON written");
    Ok(())
}
