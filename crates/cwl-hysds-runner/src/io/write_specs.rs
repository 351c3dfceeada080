use std::fs;
use std::path::{Path, PathBuf};

pub const IO_SPEC_FILE_PREFIX: &str = "hysds-io.json";
pub const JOB_SPEC_FILE_PREFIX: &str = "job-spec.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecOutputPaths {
    pub io_spec: PathBuf,
    pub job_spec: PathBuf,
}

impl SpecOutputPaths {
    pub fn new(output_dir: &Path, algorithm_name: &str) -> Self {
        Self {
            io_spec: output_dir.join(format!("{IO_SPEC_FILE_PREFIX}.{algorithm_name}")),
            job_spec: output_dir.join(format!("{JOB_SPEC_FILE_PREFIX}.{algorithm_name}")),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SpecWriteError {
    #[error("create output directory failed `{path}`: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("write file failed `{path}`: {source}")]
    WriteFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Writes both documents or neither. Contents go to temporary siblings
/// first; existing files at the final paths are set aside as backups while
/// the temporaries are renamed into place. A failed rename puts every
/// earlier target back the way it was.
pub fn write_spec_files(
    paths: &SpecOutputPaths,
    io_spec_json: &str,
    job_spec_json: &str,
) -> Result<(), SpecWriteError> {
    for parent in [paths.io_spec.parent(), paths.job_spec.parent()]
        .into_iter()
        .flatten()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        fs::create_dir_all(parent).map_err(|source| SpecWriteError::CreateDir {
            path: parent.display().to_string(),
            source,
        })?;
    }

    let staged = [
        (sibling(&paths.io_spec, "tmp"), paths.io_spec.as_path(), io_spec_json),
        (sibling(&paths.job_spec, "tmp"), paths.job_spec.as_path(), job_spec_json),
    ];

    for (temp, _, contents) in &staged {
        if let Err(source) = fs::write(temp, contents) {
            discard(&staged);
            return Err(SpecWriteError::WriteFile {
                path: temp.display().to_string(),
                source,
            });
        }
    }

    let mut placed = Vec::with_capacity(staged.len());
    for (temp, target, _) in &staged {
        match place(temp, target) {
            Ok(backup) => placed.push(PlacedTarget {
                target: *target,
                backup,
            }),
            Err(error) => {
                roll_back(&placed);
                discard(&staged);
                return Err(error);
            }
        }
    }
    for backup in placed.iter().filter_map(|placed| placed.backup.as_ref()) {
        if let Err(error) = fs::remove_file(backup) {
            tracing::warn!(path = %backup.display(), %error, "remove output backup failed");
        }
    }
    Ok(())
}

struct PlacedTarget<'a> {
    target: &'a Path,
    backup: Option<PathBuf>,
}

/// Moves `temp` onto `target`, keeping an existing file as a backup. On
/// failure the backup is already restored.
fn place(temp: &Path, target: &Path) -> Result<Option<PathBuf>, SpecWriteError> {
    let backup = if target.is_file() {
        let backup = sibling(target, "bak");
        fs::rename(target, &backup).map_err(|source| SpecWriteError::WriteFile {
            path: target.display().to_string(),
            source,
        })?;
        Some(backup)
    } else {
        None
    };

    if let Err(source) = fs::rename(temp, target) {
        if let Some(backup) = &backup {
            restore(backup, target);
        }
        return Err(SpecWriteError::WriteFile {
            path: target.display().to_string(),
            source,
        });
    }
    Ok(backup)
}

fn roll_back(placed: &[PlacedTarget<'_>]) {
    for placed in placed.iter().rev() {
        match &placed.backup {
            Some(backup) => restore(backup, placed.target),
            None => {
                if let Err(error) = fs::remove_file(placed.target) {
                    tracing::warn!(
                        path = %placed.target.display(),
                        %error,
                        "remove partially written output failed"
                    );
                }
            }
        }
    }
}

fn restore(backup: &Path, target: &Path) {
    if let Err(error) = fs::rename(backup, target) {
        tracing::warn!(
            path = %target.display(),
            backup = %backup.display(),
            %error,
            "restore previous output failed"
        );
    }
}

fn sibling(target: &Path, suffix: &str) -> PathBuf {
    let name = target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(".{name}.{}.{suffix}", std::process::id()))
}

fn discard(staged: &[(PathBuf, &Path, &str)]) {
    for (temp, _, _) in staged {
        if temp.exists() {
            if let Err(error) = fs::remove_file(temp) {
                tracing::warn!(path = %temp.display(), %error, "remove temporary output failed");
            }
        }
    }
}

#[cfg(test)]
#[path = "write_specs_test.rs"]
mod tests;
