use cwl_hysds_core::{IssueSeverity, StructuredIssue};
use tracing_subscriber::filter::EnvFilter;

/// Installs the stderr subscriber. `RUST_LOG` takes precedence over
/// `default_level`. Returns false when a subscriber is already installed.
pub fn init_logging(default_level: &str) -> Result<bool, String> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|error| format!("invalid log level `{default_level}`: {error}"))?;
    Ok(tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok())
}

/// Emits one event per issue at the level matching its severity.
pub fn log_issues(issues: &[StructuredIssue]) {
    for issue in issues {
        let reference = issue.reference.as_deref().unwrap_or_default();
        let source_id = issue.source_id.as_deref().unwrap_or_default();
        match issue.severity {
            IssueSeverity::Error => {
                tracing::error!(
                    reference,
                    field_path = %issue.field_path,
                    source_id,
                    "{}",
                    issue.message
                )
            }
            IssueSeverity::Warning => {
                tracing::warn!(
                    reference,
                    field_path = %issue.field_path,
                    source_id,
                    "{}",
                    issue.message
                )
            }
            IssueSeverity::Info => {
                tracing::info!(
                    reference,
                    field_path = %issue.field_path,
                    source_id,
                    "{}",
                    issue.message
                )
            }
        }
    }
}

#[cfg(test)]
#[path = "logging_test.rs"]
mod tests;
