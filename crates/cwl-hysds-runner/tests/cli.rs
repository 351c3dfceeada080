use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

const CWL: &str = r#"
$graph:
  - class: Workflow
    id: main
    label: Mosaic
    inputs:
      granule: File
    outputs: []
    steps: []
  - class: CommandLineTool
    id: mosaic
    requirements:
      ResourceRequirement:
        outdirMax: abc
    inputs:
      granule:
        type: File
        inputBinding:
          position: 0
    outputs: []
"#;

fn temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time must be monotonic")
        .as_nanos();
    let path = std::env::temp_dir().join(format!(
        "cwl-to-hysds-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&path).expect("must create temp dir");
    path
}

#[test]
fn converts_and_reports_output_directory() {
    let dir = temp_dir("cli-ok");
    fs::write(dir.join("mosaic.cwl"), CWL).expect("must write cwl");

    Command::cargo_bin("cwl-to-hysds")
        .expect("binary must build")
        .current_dir(&dir)
        .args(["mosaic.cwl", "mosaic"])
        .env("RUST_LOG", "warn")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated hysds-io.json and job-spec.json in"))
        .stderr(predicate::str::contains("requirements.resource.outdir_max_invalid"));

    let job = fs::read_to_string(dir.join("job-spec.json.mosaic")).expect("job spec written");
    assert!(job.contains("\"disk_usage\": \"10GB\""));
    assert!(job.contains("\"destination\": \"positional\""));
    assert!(dir.join("hysds-io.json.mosaic").exists());
}

#[test]
fn missing_workflow_exits_non_zero() {
    let dir = temp_dir("cli-no-workflow");
    fs::write(
        dir.join("tool.cwl"),
        "class: CommandLineTool\ninputs: []\noutputs: []\n",
    )
    .expect("must write cwl");

    Command::cargo_bin("cwl-to-hysds")
        .expect("binary must build")
        .current_dir(&dir)
        .args(["tool.cwl", "tool"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no Workflow record found"));

    assert!(!dir.join("hysds-io.json.tool").exists());
    assert!(!dir.join("job-spec.json.tool").exists());
}

#[test]
fn missing_arguments_print_usage() {
    Command::cargo_bin("cwl-to-hysds")
        .expect("binary must build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
