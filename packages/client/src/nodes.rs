//! General node functions.

use tracing::{debug, info};

use cyrest::{dedup_preserving_order, validate_node_names, NetworkRef, Suid, TableKind};
use cyrest_api::{ColumnValues, CountResponse, CreatedNode};

use crate::client::CyRestClient;
use crate::endpoints;
use crate::error::{CyError, Result};

/// Result of [`CyRestClient::get_first_neighbors`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FirstNeighbors {
    /// Every neighbor of every queried node, deduplicated, first-seen order.
    Flat(Vec<String>),
    /// One `(node, neighbors)` pair per queried node, in query order.
    Nested(Vec<(String, Vec<String>)>),
}

impl FirstNeighbors {
    pub fn is_empty(&self) -> bool {
        match self {
            FirstNeighbors::Flat(v) => v.is_empty(),
            FirstNeighbors::Nested(v) => v.is_empty(),
        }
    }

    /// All neighbor names regardless of shape, deduplicated.
    pub fn into_flat(self) -> Vec<String> {
        match self {
            FirstNeighbors::Flat(v) => v,
            FirstNeighbors::Nested(v) => {
                dedup_preserving_order(v.into_iter().flat_map(|(_, n)| n))
            }
        }
    }
}

impl CyRestClient {
    /// Names of the nodes adjacent to each of `node_names`.
    ///
    /// With `None` the currently selected nodes are used, and an empty
    /// selection is [`CyError::NoNodesSelected`]. A name shared by several
    /// nodes is [`CyError::AmbiguousName`].
    pub async fn get_first_neighbors(
        &self,
        node_names: Option<&[String]>,
        nested: bool,
        network: impl Into<NetworkRef>,
    ) -> Result<FirstNeighbors> {
        let net = self.get_network_suid(network).await?;
        let names = match node_names {
            Some(names) => names.to_vec(),
            None => {
                let selected = self.get_selected_nodes(net).await?;
                if selected.is_empty() {
                    return Err(CyError::NoNodesSelected);
                }
                selected
            }
        };
        if names.is_empty() {
            return Ok(if nested {
                FirstNeighbors::Nested(vec![])
            } else {
                FirstNeighbors::Flat(vec![])
            });
        }

        let index = self.name_index(net, TableKind::Node).await?;
        let matches = index.match_names(&names, CyError::NodeNotFound)?;

        let mut pairs = Vec::with_capacity(names.len());
        for (name, m) in names.into_iter().zip(matches) {
            let node = m.unique(&name)?;
            let neighbor_suids: Vec<Suid> =
                self.get(&endpoints::node_neighbors(net, node), &[]).await?;
            let neighbors = index.names_for(&neighbor_suids)?;
            debug!(node = %name, count = neighbors.len(), "first neighbors");
            pairs.push((name, neighbors));
        }

        Ok(if nested {
            FirstNeighbors::Nested(pairs)
        } else {
            FirstNeighbors::Flat(dedup_preserving_order(
                pairs.into_iter().flat_map(|(_, n)| n),
            ))
        })
    }

    /// Add nodes by name.
    ///
    /// With `skip_duplicate_names`, names already present in the network and
    /// repeats within `names` are dropped first. Returns the created nodes.
    pub async fn add_cy_nodes<S: AsRef<str>>(
        &self,
        names: &[S],
        skip_duplicate_names: bool,
        network: impl Into<NetworkRef>,
    ) -> Result<Vec<CreatedNode>> {
        validate_node_names(names)?;
        let net = self.get_network_suid(network).await?;

        let mut to_add: Vec<String> = names.iter().map(|n| n.as_ref().to_string()).collect();
        if skip_duplicate_names {
            let existing = self.name_index(net, TableKind::Node).await?;
            to_add = dedup_preserving_order(to_add)
                .into_iter()
                .filter(|n| !existing.contains_name(n))
                .collect();
        }
        if to_add.is_empty() {
            return Ok(vec![]);
        }

        info!(network = %net, count = to_add.len(), "adding nodes");
        self.post(&endpoints::nodes(net), &[], &to_add).await
    }

    pub async fn get_node_count(&self, network: impl Into<NetworkRef>) -> Result<u64> {
        let net = self.get_network_suid(network).await?;
        let res: CountResponse = self.get(&endpoints::node_count(net), &[]).await?;
        Ok(res.count)
    }

    /// Every node name in the network, in table order.
    pub async fn get_all_nodes(&self, network: impl Into<NetworkRef>) -> Result<Vec<String>> {
        let net = self.get_network_suid(network).await?;
        all_names(self, net, TableKind::Node).await
    }
}

/// The `name` column of a default table, or nothing when the table is empty.
pub(crate) async fn all_names(
    client: &CyRestClient,
    net: Suid,
    kind: TableKind,
) -> Result<Vec<String>> {
    let count_path = match kind {
        TableKind::Edge => endpoints::edge_count(net),
        _ => endpoints::node_count(net),
    };
    let count: CountResponse = client.get(&count_path, &[]).await?;
    if count.count == 0 {
        return Ok(vec![]);
    }
    let column: ColumnValues = client
        .get(&endpoints::table_column(net, kind, "name"), &[])
        .await?;
    Ok(column.values.iter().map(cyrest::cell_to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_flattens_with_dedup() {
        let n = FirstNeighbors::Nested(vec![
            ("A".into(), vec!["B".into(), "C".into()]),
            ("D".into(), vec!["C".into(), "E".into()]),
        ]);
        assert_eq!(n.into_flat(), vec!["B", "C", "E"]);
    }

    #[test]
    fn empty_shapes() {
        assert!(FirstNeighbors::Flat(vec![]).is_empty());
        assert!(!FirstNeighbors::Nested(vec![("A".into(), vec![])]).is_empty());
    }
}
