use super::ids::{resolve_parameter_id, resolve_process_id};
use super::types::convert_type;
use super::{issue, warning};
use crate::documents::{
    CommandInputParameter, CommandStepRecord, ContainerRequirement, DefaultValue, InputBinding,
    ProcessRecord, Requirement, ResourceRequirement, ResourceValue, TypeExpression,
    WorkflowInputParameter, WorkflowRecord, COMMAND_LINE_TOOL_CLASS, DOCKER_REQUIREMENT_CLASS,
    RESOURCE_REQUIREMENT_CLASS, WORKFLOW_CLASS,
};
use cwl_hysds_core::{FieldPath, StructuredIssue};
use serde_json::{Map, Value};

const GRAPH_KEY: &str = "$graph";

/// Walks the document root and converts every recognised process object.
pub fn collect_records(
    root: &Value,
    base: &str,
    issues: &mut Vec<StructuredIssue>,
) -> Vec<ProcessRecord> {
    let Some(object) = root.as_object() else {
        issues.push(issue(
            FieldPath::root(),
            "CWL document must be a mapping",
            "cwl.document.mapping_required",
        ));
        return Vec::new();
    };

    match object.get(GRAPH_KEY) {
        Some(Value::Array(entries)) => {
            let graph_path = FieldPath::root().key(GRAPH_KEY);
            entries
                .iter()
                .enumerate()
                .filter_map(|(index, entry)| {
                    let path = graph_path.index(index);
                    let Some(entry) = entry.as_object() else {
                        issues.push(issue(
                            path,
                            "`$graph` entries must be mappings",
                            "cwl.graph.entry_mapping_required",
                        ));
                        return None;
                    };
                    convert_process(entry, &path, base, true, issues)
                })
                .collect()
        }
        Some(_) => {
            issues.push(issue(
                FieldPath::root().key(GRAPH_KEY),
                "`$graph` must be a list",
                "cwl.graph.list_required",
            ));
            Vec::new()
        }
        None => convert_process(object, &FieldPath::root(), base, false, issues)
            .into_iter()
            .collect(),
    }
}

fn convert_process(
    object: &Map<String, Value>,
    path: &FieldPath,
    base: &str,
    in_graph: bool,
    issues: &mut Vec<StructuredIssue>,
) -> Option<ProcessRecord> {
    let Some(class) = object.get("class").and_then(Value::as_str) else {
        issues.push(issue(
            path.key("class"),
            "process must declare string field `class`",
            "cwl.process.class_required",
        ));
        return None;
    };
    let id = resolve_process_id(object.get("id").and_then(Value::as_str), base, in_graph);

    match class {
        WORKFLOW_CLASS => Some(ProcessRecord::Workflow(WorkflowRecord {
            label: text_field(object, "label"),
            doc: doc_field(object),
            inputs: convert_workflow_inputs(object.get("inputs"), path, &id, issues),
            id,
        })),
        COMMAND_LINE_TOOL_CLASS => Some(ProcessRecord::CommandLineTool(CommandStepRecord {
            inputs: convert_command_inputs(object.get("inputs"), path, &id, issues),
            requirements: convert_requirements(object.get("requirements"), path, issues),
            id,
        })),
        other => {
            tracing::debug!(class = other, id = %id, "skipping unsupported process class");
            None
        }
    }
}

struct InputEntry {
    path: FieldPath,
    id: String,
    fields: Map<String, Value>,
}

/// Normalises the list form and the map form of `inputs`.
fn input_entries(
    value: Option<&Value>,
    process_path: &FieldPath,
    issues: &mut Vec<StructuredIssue>,
) -> Vec<InputEntry> {
    let inputs_path = process_path.key("inputs");
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let path = inputs_path.index(index);
                let Some(fields) = item.as_object() else {
                    issues.push(issue(path, "input must be a mapping", "cwl.input.mapping_required"));
                    return None;
                };
                let Some(id) = fields.get("id").and_then(Value::as_str) else {
                    issues.push(issue(
                        path.key("id"),
                        "input must declare string field `id`",
                        "cwl.input.id_required",
                    ));
                    return None;
                };
                Some(InputEntry {
                    id: id.to_string(),
                    fields: fields.clone(),
                    path,
                })
            })
            .collect(),
        Some(Value::Object(by_name)) => by_name
            .iter()
            .map(|(name, body)| {
                let fields = match body {
                    Value::Object(fields) => fields.clone(),
                    shorthand => {
                        let mut fields = Map::new();
                        fields.insert("type".to_string(), shorthand.clone());
                        fields
                    }
                };
                InputEntry {
                    path: inputs_path.key(name.as_str()),
                    id: name.clone(),
                    fields,
                }
            })
            .collect(),
        Some(_) => {
            issues.push(issue(
                inputs_path,
                "`inputs` must be a list or a mapping",
                "cwl.inputs.shape",
            ));
            Vec::new()
        }
    }
}

fn entry_type(entry: &InputEntry, issues: &mut Vec<StructuredIssue>) -> Option<TypeExpression> {
    match entry.fields.get("type") {
        Some(value) => convert_type(value, &entry.path.key("type"), issues),
        None => {
            issues.push(issue(
                entry.path.key("type"),
                format!("input `{}` must declare `type`", entry.id),
                "cwl.input.type_required",
            ));
            None
        }
    }
}

fn convert_workflow_inputs(
    value: Option<&Value>,
    process_path: &FieldPath,
    process_id: &str,
    issues: &mut Vec<StructuredIssue>,
) -> Vec<WorkflowInputParameter> {
    input_entries(value, process_path, issues)
        .into_iter()
        .filter_map(|entry| {
            let type_expression = entry_type(&entry, issues)?;
            Some(WorkflowInputParameter {
                id: resolve_parameter_id(&entry.id, process_id),
                type_expression,
                default: entry.fields.get("default").cloned().map(DefaultValue::from_json),
                label: text_field(&entry.fields, "label"),
                doc: doc_field(&entry.fields),
                source_path: entry.path.relative_to(process_path),
            })
        })
        .collect()
}

fn convert_command_inputs(
    value: Option<&Value>,
    process_path: &FieldPath,
    process_id: &str,
    issues: &mut Vec<StructuredIssue>,
) -> Vec<CommandInputParameter> {
    input_entries(value, process_path, issues)
        .into_iter()
        .filter_map(|entry| {
            let type_expression = entry_type(&entry, issues)?;
            let input_binding = match entry.fields.get("inputBinding") {
                Some(Value::Object(binding)) => Some(convert_binding(
                    binding,
                    &entry.path.key("inputBinding"),
                    issues,
                )),
                _ => None,
            };
            Some(CommandInputParameter {
                id: resolve_parameter_id(&entry.id, process_id),
                type_expression,
                input_binding,
                source_path: entry.path.relative_to(process_path),
            })
        })
        .collect()
}

fn convert_binding(
    binding: &Map<String, Value>,
    path: &FieldPath,
    issues: &mut Vec<StructuredIssue>,
) -> InputBinding {
    let position = match binding.get("position") {
        None | Some(Value::Null) => None,
        Some(Value::Number(number)) if number.as_i64().is_some() => number.as_i64(),
        Some(Value::String(text)) if text.trim().parse::<i64>().is_ok() => text.trim().parse().ok(),
        Some(other) => {
            issues.push(warning(
                path.key("position"),
                format!("non-integer binding position {other} is ignored"),
                "cwl.input_binding.position_not_integer",
            ));
            None
        }
    };
    InputBinding { position }
}

/// Normalises the list form and the map form of `requirements`.
fn convert_requirements(
    value: Option<&Value>,
    process_path: &FieldPath,
    issues: &mut Vec<StructuredIssue>,
) -> Vec<Requirement> {
    let requirements_path = process_path.key("requirements");
    let entries: Vec<(FieldPath, String, Map<String, Value>)> = match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let path = requirements_path.index(index);
                let Some(fields) = item.as_object() else {
                    issues.push(issue(
                        path,
                        "requirement must be a mapping",
                        "cwl.requirement.mapping_required",
                    ));
                    return None;
                };
                match fields.get("class").and_then(Value::as_str) {
                    Some(class) => Some((path, class.to_string(), fields.clone())),
                    None => {
                        issues.push(issue(
                            path.key("class"),
                            "requirement must declare string field `class`",
                            "cwl.requirement.class_required",
                        ));
                        None
                    }
                }
            })
            .collect(),
        Some(Value::Object(by_class)) => by_class
            .iter()
            .map(|(class, body)| {
                let fields = body.as_object().cloned().unwrap_or_default();
                (requirements_path.key(class.as_str()), class.clone(), fields)
            })
            .collect(),
        Some(_) => {
            issues.push(issue(
                requirements_path,
                "`requirements` must be a list or a mapping",
                "cwl.requirements.shape",
            ));
            Vec::new()
        }
    };

    entries
        .into_iter()
        .filter_map(|(path, class, fields)| match class.as_str() {
            DOCKER_REQUIREMENT_CLASS => {
                let Some(pull) = text_field(&fields, "dockerPull") else {
                    issues.push(issue(
                        path.key("dockerPull"),
                        "DockerRequirement must declare `dockerPull`",
                        "cwl.docker_requirement.pull_required",
                    ));
                    return None;
                };
                Some(Requirement::Container(ContainerRequirement {
                    pull,
                    import: text_field(&fields, "dockerImport"),
                    source_path: path.relative_to(process_path),
                }))
            }
            RESOURCE_REQUIREMENT_CLASS => Some(Requirement::Resource(ResourceRequirement {
                outdir_max: resource_value(fields.get("outdirMax")),
                ram_min: resource_value(fields.get("ramMin")),
                cores_min: resource_value(fields.get("coresMin")),
                source_path: path.relative_to(process_path),
            })),
            other => {
                tracing::debug!(class = other, path = %path, "ignoring requirement class");
                None
            }
        })
        .collect()
}

fn resource_value(value: Option<&Value>) -> Option<ResourceValue> {
    match value? {
        Value::Null => None,
        Value::Number(number) => Some(ResourceValue::Number(number.clone())),
        Value::String(text) => Some(ResourceValue::Text(text.clone())),
        other => Some(ResourceValue::Text(other.to_string())),
    }
}

fn text_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_string)
}

/// `doc` may be a string or a list of lines.
fn doc_field(object: &Map<String, Value>) -> Option<String> {
    match object.get("doc")? {
        Value::String(text) => Some(text.clone()),
        Value::Array(lines) => {
            let lines = lines.iter().filter_map(Value::as_str).collect::<Vec<_>>();
            (!lines.is_empty()).then(|| lines.join("\n"))
        }
        _ => None,
    }
}

#[cfg(test)]
#[path = "process_test.rs"]
mod tests;
