use super::{load_document_set, load_document_set_with_options, DocumentFormat, LoadDocumentOptions};
use crate::documents::{ProcessRecord, Requirement, TypeExpression};

const BASE: &str = "file:///work/process.cwl";

const GRAPH_DOCUMENT: &str = r#"
cwlVersion: v1.2
$graph:
  - class: Workflow
    id: main
    label: NDVI algorithm
    doc: Computes NDVI over a scene
    inputs:
      threshold:
        type: float?
        default: 0.5
      scene:
        type: File
        label: Input scene
    outputs: []
    steps: []
  - class: CommandLineTool
    id: ndvi
    baseCommand: run.sh
    requirements:
      DockerRequirement:
        dockerPull: docker.io/library/ubuntu
      ResourceRequirement:
        outdirMax: 20
    inputs:
      scene:
        type: File
        inputBinding:
          position: 1
      threshold: float?
    outputs: []
"#;

#[test]
fn graph_document_yields_workflow_and_tool() {
    let loaded = load_document_set(GRAPH_DOCUMENT, BASE).expect("must load");
    assert!(loaded.issues.is_empty(), "issues: {:?}", loaded.issues);
    assert_eq!(loaded.documents.base_uri, BASE);
    assert_eq!(loaded.documents.records.len(), 2);

    let workflow = loaded.documents.workflows().next().expect("workflow");
    assert_eq!(workflow.id, format!("{BASE}#main"));
    assert_eq!(workflow.label.as_deref(), Some("NDVI algorithm"));
    let ids = workflow.inputs.iter().map(|input| input.id.as_str()).collect::<Vec<_>>();
    assert_eq!(
        ids,
        vec![
            format!("{BASE}#main/threshold").as_str(),
            format!("{BASE}#main/scene").as_str()
        ]
    );

    let tool = loaded.documents.command_line_tools().next().expect("tool");
    assert_eq!(tool.id, format!("{BASE}#ndvi"));
    assert_eq!(tool.requirements.len(), 2);
    assert!(matches!(tool.requirements[0], Requirement::Container(_)));
    assert!(tool.inputs[0].is_positional());
    assert_eq!(
        tool.inputs[1].type_expression,
        TypeExpression::Scalar("float?".to_string())
    );
}

#[test]
fn single_process_document_uses_document_uri_as_id() {
    let input = r#"
class: CommandLineTool
inputs:
  - id: count
    type: int
requirements:
  - class: InlineJavascriptRequirement
  - class: DockerRequirement
    dockerPull: ubuntu:22.04
"#;
    let loaded = load_document_set(input, BASE).expect("must load");
    let tool = loaded.documents.command_line_tools().next().expect("tool");
    assert_eq!(tool.id, BASE);
    assert_eq!(tool.inputs[0].id, format!("{BASE}#count"));
    assert_eq!(tool.requirements.len(), 1);
}

#[test]
fn base_uri_fragment_is_ignored() {
    let loaded =
        load_document_set(GRAPH_DOCUMENT, &format!("{BASE}#main")).expect("must load");
    assert_eq!(loaded.documents.base_uri, BASE);
}

#[test]
fn json_documents_are_detected() {
    let input = r#"{"class": "Workflow", "id": "wf", "inputs": [{"id": "x", "type": "string"}]}"#;
    let loaded = load_document_set(input, BASE).expect("must load");
    match &loaded.documents.records[0] {
        ProcessRecord::Workflow(workflow) => assert_eq!(workflow.inputs.len(), 1),
        other => panic!("expected workflow, got {other:?}"),
    }
}

#[test]
fn unsupported_process_classes_are_skipped() {
    let input = r#"
$graph:
  - class: ExpressionTool
    id: expr
    inputs: []
  - class: Workflow
    id: main
    inputs: []
"#;
    let loaded = load_document_set(input, BASE).expect("must load");
    assert_eq!(loaded.documents.records.len(), 1);
    assert_eq!(loaded.documents.records[0].id(), format!("{BASE}#main"));
}

#[test]
fn yaml_duplicate_keys_are_rejected() {
    let input = r#"
class: Workflow
id: a
id: b
"#;
    let options = LoadDocumentOptions {
        format: DocumentFormat::Yaml,
        base_uri: BASE.to_string(),
    };
    let issues = load_document_set_with_options(input, &options).expect_err("must reject");
    assert!(issues.iter().any(|issue| issue.has_reference("yaml.duplicate_key")));
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let issues = load_document_set("class: [\n", BASE).expect_err("must reject");
    assert!(issues.iter().any(|issue| issue.has_reference("yaml.parse_error")));
}

#[test]
fn missing_docker_pull_is_fatal() {
    let input = r#"
class: CommandLineTool
inputs: []
requirements:
  - class: DockerRequirement
    dockerImport: https://example.org/image.tar
"#;
    let issues = load_document_set(input, BASE).expect_err("must reject");
    assert_eq!(issues.len(), 1);
    assert!(issues[0].has_reference("cwl.docker_requirement.pull_required"));
    assert_eq!(issues[0].field_path.to_string(), "$.requirements[0].dockerPull");
}

#[test]
fn warnings_do_not_fail_loading() {
    let input = r#"
class: CommandLineTool
inputs:
  - id: x
    type: string
    inputBinding:
      position: $(self.length)
"#;
    let loaded = load_document_set(input, BASE).expect("must load");
    assert_eq!(loaded.issues.len(), 1);
    assert!(loaded.issues[0].has_reference("cwl.input_binding.position_not_integer"));
    let tool = loaded.documents.command_line_tools().next().expect("tool");
    assert!(!tool.inputs[0].is_positional());
}
