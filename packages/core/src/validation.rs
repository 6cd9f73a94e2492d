use std::collections::HashSet;
use std::hash::Hash;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Interaction used for edges whose interaction type is not given.
pub const DEFAULT_INTERACTION: &str = "interacts with";

/// Errors returned when caller input is rejected before any request is made.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("network title must not be empty")]
    EmptyTitle,

    #[error("node name at index {0} must not be empty")]
    EmptyNodeName(usize),
}

/// Cytoscape's display name for an edge: `source (interaction) target`.
pub fn edge_name(source: &str, interaction: &str, target: &str) -> String {
    format!("{} ({}) {}", source, interaction, target)
}

static EDGE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?) \((.*)\) (.*)$").expect("static regex"));

/// Split an edge name produced by [`edge_name`] back into its parts.
///
/// Returns `None` when the name does not have the `source (interaction)
/// target` shape, which happens for edges renamed by the user.
pub fn split_edge_name(name: &str) -> Option<(String, String, String)> {
    let caps = EDGE_NAME_RE.captures(name)?;
    Some((caps[1].to_string(), caps[2].to_string(), caps[3].to_string()))
}

/// Network titles must be non-empty.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(())
}

pub fn validate_node_names<S: AsRef<str>>(names: &[S]) -> Result<(), ValidationError> {
    for (i, name) in names.iter().enumerate() {
        if name.as_ref().is_empty() {
            return Err(ValidationError::EmptyNodeName(i));
        }
    }
    Ok(())
}

/// Remove duplicates, keeping the first occurrence of each item.
pub fn dedup_preserving_order<T: Eq + Hash + Clone>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_name_shape() {
        assert_eq!(edge_name("node 0", "inhibits", "node 1"), "node 0 (inhibits) node 1");
    }

    #[test]
    fn split_recovers_parts() {
        assert_eq!(
            split_edge_name("YLR075W (pp) YPR102C"),
            Some(("YLR075W".into(), "pp".into(), "YPR102C".into()))
        );
    }

    #[test]
    fn split_keeps_spaces_in_endpoints() {
        let name = edge_name("node 0", DEFAULT_INTERACTION, "node 3");
        assert_eq!(
            split_edge_name(&name),
            Some(("node 0".into(), "interacts with".into(), "node 3".into()))
        );
    }

    #[test]
    fn split_rejects_renamed_edges() {
        assert_eq!(split_edge_name("my favourite edge"), None);
    }

    #[test]
    fn empty_title_rejected() {
        assert_eq!(validate_title(""), Err(ValidationError::EmptyTitle));
        assert_eq!(validate_title("renamed network"), Ok(()));
    }

    #[test]
    fn empty_node_name_reported_with_index() {
        assert_eq!(
            validate_node_names(&["RAP1", ""]),
            Err(ValidationError::EmptyNodeName(1))
        );
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        assert_eq!(
            dedup_preserving_order(vec!["b", "a", "b", "c", "a"]),
            vec!["b", "a", "c"]
        );
    }
}
