//! Name ↔ SUID resolution for nodes and edges.
//!
//! Cytoscape keys everything by SUID, while people think in names. Names
//! are not unique: two nodes may share a name, and parallel edges between
//! the same pair of nodes with the same interaction always do. Resolution
//! therefore returns a [`SuidMatch`] per name and leaves it to each caller
//! to decide whether ambiguity is an error.
//!
//! All lookups read the default table's `SUID` and `name` columns once per
//! call, then resolve every requested name against that snapshot.

use std::collections::HashMap;

use serde_json::{Map, Value};

use cyrest::{cell_to_string, NetworkRef, Suid, TableKind};

use crate::client::CyRestClient;
use crate::endpoints;
use crate::error::{CyError, Result};

/// The SUIDs a single name resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuidMatch {
    Unique(Suid),
    /// Several elements share the name; SUIDs in table order.
    Multiple(Vec<Suid>),
}

impl SuidMatch {
    /// The SUID if the match is unique, otherwise [`CyError::AmbiguousName`].
    pub fn unique(&self, name: &str) -> Result<Suid> {
        match self {
            SuidMatch::Unique(s) => Ok(*s),
            SuidMatch::Multiple(suids) => Err(CyError::AmbiguousName {
                name: name.to_string(),
                suids: suids.clone(),
            }),
        }
    }

    /// The first SUID in table order. `None` only for an empty `Multiple`.
    pub fn first(&self) -> Option<Suid> {
        match self {
            SuidMatch::Unique(s) => Some(*s),
            SuidMatch::Multiple(suids) => suids.first().copied(),
        }
    }

    pub fn all(&self) -> Vec<Suid> {
        match self {
            SuidMatch::Unique(s) => vec![*s],
            SuidMatch::Multiple(suids) => suids.clone(),
        }
    }

    pub fn is_unique(&self) -> bool {
        matches!(self, SuidMatch::Unique(_))
    }
}

/// `(SUID, name)` pairs of one table, in table order.
#[derive(Debug, Clone, Default)]
pub(crate) struct NameIndex {
    entries: Vec<(Suid, String)>,
}

impl NameIndex {
    pub(crate) fn from_rows(rows: &[Map<String, Value>], path: &str) -> Result<Self> {
        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            let suid = row
                .get("SUID")
                .and_then(Value::as_i64)
                .ok_or_else(|| CyError::UnexpectedResponse {
                    path: path.to_string(),
                    detail: "table row without an integer SUID".into(),
                })?;
            let name = row.get("name").map(cell_to_string).unwrap_or_default();
            entries.push((Suid(suid), name));
        }
        Ok(Self { entries })
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, n)| n.as_str())
    }

    pub(crate) fn contains_name(&self, name: &str) -> bool {
        self.entries.iter().any(|(_, n)| n == name)
    }

    /// Resolve each name; a name with no match yields `missing(name)`.
    pub(crate) fn match_names<S: AsRef<str>>(
        &self,
        names: &[S],
        missing: impl Fn(String) -> CyError,
    ) -> Result<Vec<SuidMatch>> {
        let mut by_name: HashMap<&str, Vec<Suid>> = HashMap::new();
        for (suid, name) in &self.entries {
            by_name.entry(name.as_str()).or_default().push(*suid);
        }
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                match by_name.get(name).map(Vec::as_slice) {
                    None | Some([]) => Err(missing(name.to_string())),
                    Some([single]) => Ok(SuidMatch::Unique(*single)),
                    Some(many) => Ok(SuidMatch::Multiple(many.to_vec())),
                }
            })
            .collect()
    }

    /// Map SUIDs back to names; an unknown SUID is an error.
    pub(crate) fn names_for(&self, suids: &[Suid]) -> Result<Vec<String>> {
        let by_suid: HashMap<Suid, &str> = self
            .entries
            .iter()
            .map(|(s, n)| (*s, n.as_str()))
            .collect();
        suids
            .iter()
            .map(|s| {
                by_suid
                    .get(s)
                    .map(|n| n.to_string())
                    .ok_or(CyError::SuidNotFound(*s))
            })
            .collect()
    }
}

impl CyRestClient {
    pub(crate) async fn name_index(&self, net: Suid, kind: TableKind) -> Result<NameIndex> {
        let path = endpoints::table_rows(net, kind);
        let rows: Vec<Map<String, Value>> = self.get(&path, &[]).await?;
        NameIndex::from_rows(&rows, &path)
    }

    /// Resolve node names to SUIDs.
    ///
    /// A name that matches no node is [`CyError::NodeNotFound`].
    pub async fn node_name_to_node_suid<S: AsRef<str>>(
        &self,
        names: &[S],
        network: impl Into<NetworkRef>,
    ) -> Result<Vec<SuidMatch>> {
        let net = self.get_network_suid(network).await?;
        self.name_index(net, TableKind::Node)
            .await?
            .match_names(names, CyError::NodeNotFound)
    }

    /// Resolve edge names to SUIDs.
    ///
    /// A name that matches no edge is [`CyError::EdgeNotFound`].
    pub async fn edge_name_to_edge_suid<S: AsRef<str>>(
        &self,
        names: &[S],
        network: impl Into<NetworkRef>,
    ) -> Result<Vec<SuidMatch>> {
        let net = self.get_network_suid(network).await?;
        self.name_index(net, TableKind::Edge)
            .await?
            .match_names(names, CyError::EdgeNotFound)
    }

    /// Map node SUIDs to their names.
    pub async fn node_suid_to_node_name(
        &self,
        suids: &[Suid],
        network: impl Into<NetworkRef>,
    ) -> Result<Vec<String>> {
        let net = self.get_network_suid(network).await?;
        self.name_index(net, TableKind::Node).await?.names_for(suids)
    }

    /// Map edge SUIDs to their names.
    pub async fn edge_suid_to_edge_name(
        &self,
        suids: &[Suid],
        network: impl Into<NetworkRef>,
    ) -> Result<Vec<String>> {
        let net = self.get_network_suid(network).await?;
        self.name_index(net, TableKind::Edge).await?.names_for(suids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn index() -> NameIndex {
        let rows: Vec<Map<String, Value>> = json!([
            {"SUID": 101, "name": "RAP1"},
            {"SUID": 102, "name": "GCR1"},
            {"SUID": 103, "name": "dup"},
            {"SUID": 104, "name": "dup"},
        ])
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_object().unwrap().clone())
        .collect();
        NameIndex::from_rows(&rows, "test").unwrap()
    }

    #[test]
    fn unique_and_ambiguous_names() {
        let matches = index()
            .match_names(&["RAP1", "dup"], CyError::NodeNotFound)
            .unwrap();
        assert_eq!(matches[0], SuidMatch::Unique(Suid(101)));
        assert_eq!(matches[1], SuidMatch::Multiple(vec![Suid(103), Suid(104)]));
        assert_eq!(matches[1].first(), Some(Suid(103)));
        assert!(matches!(
            matches[1].unique("dup"),
            Err(CyError::AmbiguousName { ref suids, .. }) if suids.len() == 2
        ));
    }

    #[test]
    fn empty_multiple_has_no_first() {
        assert_eq!(SuidMatch::Multiple(vec![]).first(), None);
        assert_eq!(SuidMatch::Unique(Suid(7)).first(), Some(Suid(7)));
    }

    #[test]
    fn missing_name_uses_supplied_error() {
        let err = index()
            .match_names(&["RAP1", "nope"], CyError::EdgeNotFound)
            .unwrap_err();
        assert!(matches!(err, CyError::EdgeNotFound(ref n) if n == "nope"));
    }

    #[test]
    fn suids_map_back_to_names() {
        let idx = index();
        assert_eq!(
            idx.names_for(&[Suid(102), Suid(101)]).unwrap(),
            vec!["GCR1", "RAP1"]
        );
        assert!(matches!(
            idx.names_for(&[Suid(999)]),
            Err(CyError::SuidNotFound(Suid(999)))
        ));
    }

    #[test]
    fn rows_without_suid_are_rejected() {
        let rows = vec![json!({"name": "x"}).as_object().unwrap().clone()];
        assert!(matches!(
            NameIndex::from_rows(&rows, "p"),
            Err(CyError::UnexpectedResponse { .. })
        ));
    }
}
