use cwl_hysds_core::{FieldPath, IssueSeverity, StructuredIssue};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Where a CWL document lives on disk and the URI its ids resolve against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSource {
    pub path: PathBuf,
    pub base_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSourceText {
    pub source: DocumentSource,
    pub text: String,
}

/// Accepts a `file://` URI or a filesystem path. Relative paths are resolved
/// against `cwd`.
pub fn resolve_document_source(
    location: &str,
    cwd: &Path,
) -> Result<DocumentSource, StructuredIssue> {
    if location.contains("://") {
        let url = Url::parse(location).map_err(|error| {
            source_issue(
                format!("invalid document URI: {error}"),
                "runner.source.invalid_uri",
                location,
            )
        })?;
        if url.scheme() != "file" {
            return Err(source_issue(
                format!("unsupported document URI scheme `{}`", url.scheme()),
                "runner.source.unsupported_scheme",
                location,
            ));
        }
        let path = url.to_file_path().map_err(|()| {
            source_issue(
                "file URI does not name a local path".to_string(),
                "runner.source.invalid_uri",
                location,
            )
        })?;
        let mut base = url;
        base.set_fragment(None);
        return Ok(DocumentSource {
            path,
            base_uri: base.to_string(),
        });
    }

    let path = if Path::new(location).is_absolute() {
        PathBuf::from(location)
    } else {
        cwd.join(location)
    };
    let url = Url::from_file_path(&path).map_err(|()| {
        source_issue(
            "document path cannot be expressed as a file URI".to_string(),
            "runner.source.invalid_path",
            location,
        )
    })?;
    Ok(DocumentSource {
        path,
        base_uri: url.to_string(),
    })
}

pub fn read_document_source(
    location: &str,
    cwd: &Path,
) -> Result<LoadedSourceText, StructuredIssue> {
    let source = resolve_document_source(location, cwd)?;
    let text = fs::read_to_string(&source.path).map_err(|error| {
        source_issue(
            format!("read file failed: {error}"),
            "runner.source.read_failed",
            source.path.display().to_string().as_str(),
        )
    })?;
    Ok(LoadedSourceText { source, text })
}

fn source_issue(message: String, reference: &str, location: &str) -> StructuredIssue {
    StructuredIssue::new(
        "source_io_error",
        IssueSeverity::Error,
        FieldPath::root(),
        message,
        reference,
    )
    .with_related(json!({ "file": location }))
}

#[cfg(test)]
#[path = "read_document_test.rs"]
mod tests;
