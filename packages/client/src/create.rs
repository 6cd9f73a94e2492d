//! Creating networks: clones, subnetworks, bulk construction from tables or
//! a [`NetworkGraph`], and file import.
//!
//! # Building from tables
//!
//! [`CyRestClient::create_network_from_data_frames`] runs these steps:
//!
//! 1. Build a cyjs document carrying only identities: node ids and edge
//!    `source`/`target`/`interaction` plus the derived edge name.
//! 2. `POST networks?title=…&collection=…` to create the network.
//! 3. Load the remaining node columns keyed on the node id.
//! 4. Resolve each edge name to its new SUID and load the remaining edge
//!    columns keyed on SUID, so parallel edges keep distinct attributes.
//! 5. Apply the `default` style and the preferred layout.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

use cyrest::{
    dedup_preserving_order, validate_title, CyJsElement, CyJsNetwork,
    ElementSelector, NetworkGraph, NetworkRef, Suid, Table, TableKind, DEFAULT_INTERACTION,
};
use cyrest_api::{CreatedNetwork, LoadedNetworks, NetworkResult, SubnetworkRequest};

use crate::client::CyRestClient;
use crate::command::Command;
use crate::endpoints;
use crate::error::{CyError, Result};

/// Column used to carry each edge's resolved SUID into the edge table load.
const EDGE_KEY_COLUMN: &str = "data.key.column";

/// What to copy into a new subnetwork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetworkSpec {
    pub nodes: ElementSelector,
    pub edges: ElementSelector,
    /// Copy only the chosen nodes, not the edges between them.
    pub exclude_edges: bool,
    pub subnetwork_name: Option<String>,
}

impl Default for SubnetworkSpec {
    fn default() -> Self {
        Self {
            nodes: ElementSelector::Selected,
            edges: ElementSelector::Selected,
            exclude_edges: false,
            subnetwork_name: None,
        }
    }
}

/// Titles and column names used by
/// [`CyRestClient::create_network_from_data_frames`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFrameOptions {
    pub title: String,
    pub collection: String,
    pub node_id_column: String,
    pub source_column: String,
    pub target_column: String,
    pub interaction_column: String,
}

impl Default for DataFrameOptions {
    fn default() -> Self {
        Self {
            title: "From dataframe".into(),
            collection: "My Dataframe Network Collection".into(),
            node_id_column: "id".into(),
            source_column: "source".into(),
            target_column: "target".into(),
            interaction_column: "interaction".into(),
        }
    }
}

impl DataFrameOptions {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// The parts of an edge table the builder needs, with the interaction
/// column filled in where it was missing.
struct EdgeRows {
    table: Table,
    sources: Vec<String>,
    targets: Vec<String>,
    interactions: Vec<String>,
}

impl EdgeRows {
    fn new(edges: &Table, opts: &DataFrameOptions) -> Result<Self> {
        let mut table = edges.clone();
        if !table.has_column(&opts.interaction_column) {
            let fill = vec![Value::String(DEFAULT_INTERACTION.into()); table.len()];
            table.set_column(&opts.interaction_column, fill)?;
        }
        let column = |name: &str| {
            table
                .column_strings(name)
                .ok_or_else(|| CyError::InvalidInput(format!("edge table has no column {name:?}")))
        };
        let sources = column(&opts.source_column)?;
        let targets = column(&opts.target_column)?;
        let interactions = column(&opts.interaction_column)?;
        Ok(Self {
            table,
            sources,
            targets,
            interactions,
        })
    }

    fn names(&self) -> Vec<String> {
        self.sources
            .iter()
            .zip(&self.interactions)
            .zip(&self.targets)
            .map(|((s, i), t)| cyrest::edge_name(s, i, t))
            .collect()
    }

    fn elements(&self) -> Vec<CyJsElement> {
        self.sources
            .iter()
            .zip(&self.interactions)
            .zip(&self.targets)
            .map(|((s, i), t)| CyJsElement::edge(s, t, i))
            .collect()
    }

    fn endpoints(&self) -> Vec<String> {
        dedup_preserving_order(
            self.sources
                .iter()
                .zip(&self.targets)
                .flat_map(|(s, t)| [s.clone(), t.clone()]),
        )
    }
}

/// Pair each edge name with a SUID. Parallel edges share a name, so the k-th
/// occurrence of a name takes the k-th SUID Cytoscape lists for it. A name
/// with more rows than SUIDs is [`CyError::EdgeNotFound`].
fn assign_edge_suids(names: &[String], by_name: &HashMap<String, Vec<Suid>>) -> Result<Vec<Suid>> {
    let mut used: HashMap<&str, usize> = HashMap::new();
    names
        .iter()
        .map(|name| -> Result<Suid> {
            let k = used.entry(name.as_str()).or_insert(0);
            let suids = by_name.get(name).map(Vec::as_slice).unwrap_or_default();
            let Some(suid) = suids.get(*k).copied() else {
                warn!(
                    name = %name,
                    rows = *k + 1,
                    suids = suids.len(),
                    "edge name has more rows than SUIDs"
                );
                return Err(CyError::EdgeNotFound(name.clone()));
            };
            *k += 1;
            Ok(suid)
        })
        .collect()
}

impl CyRestClient {
    /// Copy a network. Returns the clone's SUID.
    pub async fn clone_network(&self, network: impl Into<NetworkRef>) -> Result<Suid> {
        let net = self.get_network_suid(network).await?;
        let res: NetworkResult = self
            .command(&Command::new("network clone").arg("network", net.command_arg()))
            .await?;
        info!(source = %net, clone = %res.network, "network cloned");
        Ok(res.network)
    }

    /// Create a subnetwork from chosen nodes and edges. Returns its SUID.
    pub async fn create_subnetwork(
        &self,
        selection: &SubnetworkSpec,
        network: impl Into<NetworkRef>,
    ) -> Result<Suid> {
        let net = self.get_network_suid(network).await?;
        let request = SubnetworkRequest {
            source: net.command_arg(),
            exclude_edges: selection.exclude_edges.to_string(),
            node_list: selection.nodes.to_query(),
            edge_list: selection.edges.to_query(),
            network_name: selection.subnetwork_name.clone(),
        };
        let res: cyrest_api::CommandResponse<NetworkResult> = self
            .post(&endpoints::command("network create"), &[], &request)
            .await?;
        if !res.errors.is_empty() {
            return Err(CyError::Command {
                command: "network create".into(),
                errors: res.error_messages(),
            });
        }
        info!(source = %net, subnetwork = %res.data.network, "subnetwork created");
        Ok(res.data.network)
    }

    /// Build a network from a node table, an edge table, or both.
    ///
    /// Without a node table, nodes are inferred from the edge endpoints.
    /// Columns beyond the identity columns become node and edge attributes.
    pub async fn create_network_from_data_frames(
        &self,
        nodes: Option<&Table>,
        edges: Option<&Table>,
        opts: &DataFrameOptions,
    ) -> Result<Suid> {
        validate_title(&opts.title).map_err(|e| CyError::InvalidInput(e.to_string()))?;
        let edges = edges.map(|e| EdgeRows::new(e, opts)).transpose()?;

        let nodes: Table = match (nodes, &edges) {
            (Some(n), _) => n.clone(),
            (None, Some(e)) => {
                let mut t = Table::new([opts.node_id_column.as_str()]);
                for id in e.endpoints() {
                    t.push_row(vec![Value::String(id)])?;
                }
                t
            }
            (None, None) => {
                return Err(CyError::InvalidInput("must provide either nodes or edges".into()))
            }
        };
        let node_ids = nodes.column_strings(&opts.node_id_column).ok_or_else(|| {
            CyError::InvalidInput(format!("node table has no column {:?}", opts.node_id_column))
        })?;

        let mut doc = CyJsNetwork::titled(&opts.title);
        doc.elements.nodes = node_ids.iter().map(|id| CyJsElement::node(id)).collect();
        if let Some(e) = &edges {
            doc.elements.edges = e.elements();
        }

        let created: CreatedNetwork = self
            .post(
                endpoints::NETWORKS,
                &[("title", opts.title.clone()), ("collection", opts.collection.clone())],
                &doc,
            )
            .await?;
        let net = created.network_suid;
        info!(
            network = %net,
            title = %opts.title,
            nodes = doc.elements.nodes.len(),
            edges = doc.elements.edges.len(),
            "network created"
        );

        let nodes = nodes.drop_column("SUID");
        if nodes.columns().iter().any(|c| *c != opts.node_id_column) {
            self.load_table_data(
                &nodes,
                &opts.node_id_column,
                TableKind::Node,
                &opts.node_id_column,
                net,
            )
            .await?;
        }

        if let Some(e) = edges {
            let names = e.names();
            let identity = [
                opts.source_column.as_str(),
                opts.target_column.as_str(),
                opts.interaction_column.as_str(),
                "name",
            ];
            let table = e.table.drop_column("SUID");
            let has_attributes = table.columns().iter().any(|c| !identity.contains(&c.as_str()));
            if has_attributes && !names.is_empty() {
                let mut by_name: HashMap<String, Vec<Suid>> = HashMap::new();
                let unique_names = dedup_preserving_order(names.iter().cloned());
                let matches = self.edge_name_to_edge_suid(&unique_names, net).await?;
                for (name, m) in unique_names.into_iter().zip(matches) {
                    by_name.insert(name, m.all());
                }
                let suids = assign_edge_suids(&names, &by_name)?;

                let mut table = table;
                table.set_column("name", names.into_iter().map(Value::String).collect())?;
                table.set_column(
                    EDGE_KEY_COLUMN,
                    suids.into_iter().map(|s| Value::from(s.get())).collect(),
                )?;
                self.load_table_data(&table, EDGE_KEY_COLUMN, TableKind::Edge, "SUID", net)
                    .await?;
            }
        }

        self.apply_style("default", net).await?;
        self.layout_network(None, net).await?;
        Ok(net)
    }

    /// Build a network from an in-memory graph. Node names become node ids;
    /// node and edge attributes are carried over.
    pub async fn create_network_from_graph(
        &self,
        graph: &NetworkGraph,
        title: &str,
        collection: &str,
    ) -> Result<Suid> {
        if graph.node_count() == 0 {
            return Err(CyError::InvalidInput("graph has no nodes".into()));
        }
        let (nodes, edges) = graph.to_tables();
        let opts = DataFrameOptions {
            title: title.to_string(),
            collection: collection.to_string(),
            ..DataFrameOptions::default()
        };
        let edges = (!edges.is_empty()).then_some(&edges);
        self.create_network_from_data_frames(Some(&nodes), edges, &opts)
            .await
    }

    /// Load a network file (SIF, GraphML, cyjs, …) through Cytoscape's
    /// importers. Returns the SUIDs of the networks created.
    pub async fn import_network_from_file(&self, file: &Path) -> Result<Vec<Suid>> {
        let path = std::path::absolute(file)
            .map_err(|e| CyError::InvalidInput(format!("cannot resolve {}: {e}", file.display())))?;
        info!(file = %path.display(), "importing network");
        let loaded: LoadedNetworks = self
            .command(&Command::new("network load file").arg("file", path.display()))
            .await?;
        Ok(loaded.networks)
    }
}
