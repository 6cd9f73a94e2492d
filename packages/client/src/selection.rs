//! Node and edge selection.

use cyrest::{ElementSelector, NeighborDirection, NetworkRef, SelectionKind, Suid, TableKind};
use cyrest_api::SelectionResult;

use crate::client::CyRestClient;
use crate::command::Command;
use crate::endpoints;
use crate::error::Result;

impl CyRestClient {
    pub async fn get_selected_node_suids(&self, network: impl Into<NetworkRef>) -> Result<Vec<Suid>> {
        let net = self.get_network_suid(network).await?;
        self.get(&endpoints::selected_nodes(net), &[]).await
    }

    /// Names of the selected nodes.
    pub async fn get_selected_nodes(&self, network: impl Into<NetworkRef>) -> Result<Vec<String>> {
        let net = self.get_network_suid(network).await?;
        let suids: Vec<Suid> = self.get(&endpoints::selected_nodes(net), &[]).await?;
        if suids.is_empty() {
            return Ok(vec![]);
        }
        self.name_index(net, TableKind::Node).await?.names_for(&suids)
    }

    pub async fn get_selected_node_count(&self, network: impl Into<NetworkRef>) -> Result<usize> {
        Ok(self.get_selected_node_suids(network).await?.len())
    }

    pub async fn get_selected_edge_suids(&self, network: impl Into<NetworkRef>) -> Result<Vec<Suid>> {
        let net = self.get_network_suid(network).await?;
        self.get(&endpoints::selected_edges(net), &[]).await
    }

    /// Names of the selected edges.
    pub async fn get_selected_edges(&self, network: impl Into<NetworkRef>) -> Result<Vec<String>> {
        let net = self.get_network_suid(network).await?;
        let suids: Vec<Suid> = self.get(&endpoints::selected_edges(net), &[]).await?;
        if suids.is_empty() {
            return Ok(vec![]);
        }
        self.name_index(net, TableKind::Edge).await?.names_for(&suids)
    }

    pub async fn get_selected_edge_count(&self, network: impl Into<NetworkRef>) -> Result<usize> {
        Ok(self.get_selected_edge_suids(network).await?.len())
    }

    /// Select nodes. Unless `preserve_current_selection` is set, the current
    /// node selection is cleared first.
    pub async fn select_nodes(
        &self,
        selector: &ElementSelector,
        preserve_current_selection: bool,
        network: impl Into<NetworkRef>,
    ) -> Result<SelectionResult> {
        let net = self.get_network_suid(network).await?;
        if !preserve_current_selection {
            self.clear_selection(SelectionKind::Nodes, net).await?;
        }
        self.command(
            &Command::new("network select")
                .arg("nodeList", selector)
                .arg("network", net.command_arg()),
        )
        .await
    }

    /// Select edges. Unless `preserve_current_selection` is set, the current
    /// edge selection is cleared first.
    pub async fn select_edges(
        &self,
        selector: &ElementSelector,
        preserve_current_selection: bool,
        network: impl Into<NetworkRef>,
    ) -> Result<SelectionResult> {
        let net = self.get_network_suid(network).await?;
        if !preserve_current_selection {
            self.clear_selection(SelectionKind::Edges, net).await?;
        }
        self.command(
            &Command::new("network select")
                .arg("edgeList", selector)
                .arg("network", net.command_arg()),
        )
        .await
    }

    /// Add the first neighbors of the selected nodes to the selection.
    pub async fn select_first_neighbors(
        &self,
        direction: NeighborDirection,
        network: impl Into<NetworkRef>,
    ) -> Result<SelectionResult> {
        let net = self.get_network_suid(network).await?;
        self.command(
            &Command::new("network select")
                .arg("firstNeighbors", direction)
                .arg("nodeList", ElementSelector::Selected)
                .arg("network", net.command_arg()),
        )
        .await
    }

    pub async fn clear_selection(&self, kind: SelectionKind, network: impl Into<NetworkRef>) -> Result<()> {
        let net = self.get_network_suid(network).await?;
        let mut cmd = Command::new("network deselect").arg("network", net.command_arg());
        if matches!(kind, SelectionKind::Nodes | SelectionKind::Both) {
            cmd = cmd.arg("nodeList", ElementSelector::All);
        }
        if matches!(kind, SelectionKind::Edges | SelectionKind::Both) {
            cmd = cmd.arg("edgeList", ElementSelector::All);
        }
        self.command_unit(&cmd).await
    }
}
