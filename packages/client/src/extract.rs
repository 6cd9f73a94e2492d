//! Pulling a network out of Cytoscape into a local [`NetworkGraph`].

use tracing::debug;

use cyrest::{NetworkGraph, NetworkRef, TableKind};

use crate::client::CyRestClient;
use crate::error::Result;

impl CyRestClient {
    /// Snapshot a network's nodes, edges and attributes.
    ///
    /// Edge endpoints come from the edge table's `source`/`target` columns
    /// when present, otherwise from splitting edge names of the form
    /// `source (interaction) target`.
    pub async fn create_graph_from_network(&self, network: impl Into<NetworkRef>) -> Result<NetworkGraph> {
        let net = self.get_network_suid(network).await?;
        let edges = self.get_table_columns(TableKind::Edge, &[], net).await?;
        let nodes = self.get_table_columns(TableKind::Node, &[], net).await?;
        let graph = NetworkGraph::from_tables(&nodes, &edges);
        if graph.edge_count() < edges.len() {
            debug!(
                network = %net,
                skipped = edges.len() - graph.edge_count(),
                "edges without recoverable endpoints were skipped"
            );
        }
        Ok(graph)
    }
}
