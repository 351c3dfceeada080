//! Resolution of CWL `id` fields into absolute, fragment-bearing URIs.

const GRAPH_DEFAULT_ID: &str = "main";

/// Drops any fragment from the document URI.
pub fn document_base(uri: &str) -> &str {
    uri.split_once('#').map_or(uri, |(base, _)| base)
}

pub fn resolve_process_id(raw: Option<&str>, base: &str, in_graph: bool) -> String {
    match raw {
        Some(raw) if is_absolute(raw) => raw.to_string(),
        Some(raw) => format!("{base}#{}", raw.trim_start_matches('#')),
        None if in_graph => format!("{base}#{GRAPH_DEFAULT_ID}"),
        None => base.to_string(),
    }
}

/// Parameter ids are scoped under their process fragment; `#`-prefixed ids are
/// already document-scoped.
pub fn resolve_parameter_id(raw: &str, process_id: &str) -> String {
    if is_absolute(raw) {
        return raw.to_string();
    }
    if let Some(fragment) = raw.strip_prefix('#') {
        return format!("{}#{fragment}", document_base(process_id));
    }
    match process_id.split_once('#') {
        Some((_, fragment)) if !fragment.is_empty() => format!("{process_id}/{raw}"),
        Some((base, _)) => format!("{base}#{raw}"),
        None => format!("{process_id}#{raw}"),
    }
}

fn is_absolute(raw: &str) -> bool {
    raw.contains("://") || raw.starts_with("file:") || raw.starts_with("_:")
}

#[cfg(test)]
#[path = "ids_test.rs"]
mod tests;
