use crate::documents::ContainerRequirement;
use regex::Regex;
use std::sync::OnceLock;

/// A first path segment holding a dot (optionally followed by a port) names a
/// registry host. A namespace segment containing a dot is also stripped; this
/// matches what existing job specs were generated with.
const REGISTRY_PREFIX_PATTERN: &str = r"^([^/:]+[.][^/]+[:0-9]*)/";

fn registry_prefix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(REGISTRY_PREFIX_PATTERN).expect("valid regex"))
}

/// `docker.io/library/ubuntu` -> `library/ubuntu`; `library/ubuntu` is unchanged.
pub fn strip_registry(reference: &str) -> String {
    registry_prefix().replace(reference, "").into_owned()
}

/// The requirement's import reference wins, then a non-empty fallback.
pub fn resolve_image_url(requirement: &ContainerRequirement, fallback_uri: &str) -> Option<String> {
    match requirement.import.as_deref() {
        Some(import) => Some(import.to_string()),
        None if !fallback_uri.is_empty() => Some(fallback_uri.to_string()),
        None => None,
    }
}

#[cfg(test)]
#[path = "container_test.rs"]
mod tests;
