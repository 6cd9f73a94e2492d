//! General edge functions.

use tracing::{info, warn};

use cyrest::{NetworkRef, TableKind, DEFAULT_INTERACTION};
use cyrest_api::{CountResponse, CreatedEdge, EdgeEnvelope, EdgeInfo, NewEdge};

use crate::client::CyRestClient;
use crate::endpoints;
use crate::error::{CyError, Result};
use crate::nodes::all_names;

/// Options for [`CyRestClient::add_cy_edges`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeOptions {
    /// Written to each edge's `interaction` column.
    pub edge_type: String,
    pub directed: bool,
}

impl Default for EdgeOptions {
    fn default() -> Self {
        Self {
            edge_type: DEFAULT_INTERACTION.to_string(),
            directed: false,
        }
    }
}

impl CyRestClient {
    /// Add one edge per `(source, target)` pair of node names.
    ///
    /// Every endpoint must name exactly one node. If any name is shared by
    /// several nodes nothing is added and [`CyError::AmbiguousName`] is
    /// returned.
    pub async fn add_cy_edges<S: AsRef<str>>(
        &self,
        pairs: &[(S, S)],
        options: &EdgeOptions,
        network: impl Into<NetworkRef>,
    ) -> Result<Vec<CreatedEdge>> {
        let net = self.get_network_suid(network).await?;
        let names: Vec<&str> = pairs
            .iter()
            .flat_map(|(s, t)| [s.as_ref(), t.as_ref()])
            .collect();

        let matches = self
            .name_index(net, TableKind::Node)
            .await?
            .match_names(&names, CyError::NodeNotFound)?;
        let mut suids = Vec::with_capacity(matches.len());
        for (name, m) in names.iter().zip(&matches) {
            match m.unique(name) {
                Ok(s) => suids.push(s),
                Err(e) => {
                    warn!(node = %name, "ambiguous node name; no edges added");
                    return Err(e);
                }
            }
        }

        let body: Vec<NewEdge> = suids
            .chunks(2)
            .map(|pair| NewEdge::new(pair[0], pair[1], &options.edge_type, options.directed))
            .collect();
        if body.is_empty() {
            return Ok(vec![]);
        }
        info!(network = %net, count = body.len(), "adding edges");
        self.post(&endpoints::edges(net), &[], &body).await
    }

    pub async fn get_edge_count(&self, network: impl Into<NetworkRef>) -> Result<u64> {
        let net = self.get_network_suid(network).await?;
        let res: CountResponse = self.get(&endpoints::edge_count(net), &[]).await?;
        Ok(res.count)
    }

    /// Every edge name in the network, in table order.
    pub async fn get_all_edges(&self, network: impl Into<NetworkRef>) -> Result<Vec<String>> {
        let net = self.get_network_suid(network).await?;
        all_names(self, net, TableKind::Edge).await
    }

    /// Endpoint SUIDs and attributes of each named edge. When a name matches
    /// several parallel edges the first one is reported.
    pub async fn get_edge_info<S: AsRef<str>>(
        &self,
        edge_names: &[S],
        network: impl Into<NetworkRef>,
    ) -> Result<Vec<EdgeInfo>> {
        let net = self.get_network_suid(network).await?;
        let matches = self
            .name_index(net, TableKind::Edge)
            .await?
            .match_names(edge_names, CyError::EdgeNotFound)?;
        let mut out = Vec::with_capacity(matches.len());
        for (name, m) in edge_names.iter().zip(matches) {
            let suid = m
                .first()
                .ok_or_else(|| CyError::EdgeNotFound(name.as_ref().to_string()))?;
            let env: EdgeEnvelope = self.get(&endpoints::edge(net, suid), &[]).await?;
            out.push(env.data);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_undirected_interacts_with() {
        let o = EdgeOptions::default();
        assert_eq!(o.edge_type, "interacts with");
        assert!(!o.directed);
    }
}
