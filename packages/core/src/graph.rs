use std::collections::{BTreeMap, HashSet, VecDeque};

use serde_json::{Map, Value};

use crate::table::{cell_to_string, Table};
use crate::validation::{dedup_preserving_order, split_edge_name, DEFAULT_INTERACTION};

/// A vertex of a [`NetworkGraph`]: its name plus every other attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub name: String,
    pub attributes: Map<String, Value>,
}

/// A directed edge of a [`NetworkGraph`] between two node names.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub attributes: Map<String, Value>,
}

impl GraphEdge {
    /// The edge's `interaction` attribute, if it has a string one.
    pub fn interaction(&self) -> Option<&str> {
        self.attributes.get("interaction").and_then(Value::as_str)
    }
}

/// A local, in-memory copy of a Cytoscape network's structure and attributes.
///
/// The graph is a snapshot, not a mirror kept in sync with Cytoscape.
/// Build one with [`NetworkGraph::from_tables`] (or via the client's
/// `create_graph_from_network`), then navigate it locally.
///
/// Nodes are indexed by name; adding a node with an existing name replaces
/// its attributes. Parallel edges are kept (the graph is a multigraph).
#[derive(Debug, Default, Clone)]
pub struct NetworkGraph {
    nodes: BTreeMap<String, GraphNode>,
    order: Vec<String>,
    edges: Vec<GraphEdge>,
}

impl NetworkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node. If a node with the same name exists, its attributes are
    /// replaced and its position is kept.
    pub fn add_node(&mut self, name: impl Into<String>, attributes: Map<String, Value>) {
        let name = name.into();
        if !self.nodes.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.nodes.insert(
            name.clone(),
            GraphNode { name, attributes },
        );
    }

    /// Insert an edge. Endpoints that are not yet nodes are added without
    /// attributes.
    pub fn add_edge(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        attributes: Map<String, Value>,
    ) {
        let source = source.into();
        let target = target.into();
        for endpoint in [&source, &target] {
            if !self.nodes.contains_key(endpoint) {
                self.add_node(endpoint.clone(), Map::new());
            }
        }
        self.edges.push(GraphEdge {
            source,
            target,
            attributes,
        });
    }

    /// Build a graph from a node table and an edge table as returned by
    /// Cytoscape.
    ///
    /// The node table must carry a `name` column. Each edge row takes its
    /// endpoints from non-empty `source`/`target` cells when both are present,
    /// otherwise from an edge name of the form `source (interaction) target`;
    /// rows with neither are skipped. The `SUID` column is dropped from both tables.
    pub fn from_tables(nodes: &Table, edges: &Table) -> Self {
        let mut g = Self::new();

        for record in nodes.to_records() {
            let Some(name) = record.get("name").map(cell_to_string) else {
                continue;
            };
            let attributes = record
                .into_iter()
                .filter(|(k, _)| k != "name" && k != "SUID")
                .collect();
            g.add_node(name, attributes);
        }

        for record in edges.to_records() {
            let cell = |k: &str| {
                record
                    .get(k)
                    .filter(|v| !v.is_null())
                    .map(cell_to_string)
                    .filter(|s| !s.is_empty())
            };
            let endpoints = match (cell("source"), cell("target")) {
                (Some(s), Some(t)) => Some((s, t)),
                _ => cell("name")
                    .and_then(|n| split_edge_name(&n))
                    .map(|(s, _, t)| (s, t)),
            };
            let Some((source, target)) = endpoints else {
                continue;
            };
            let attributes = record
                .into_iter()
                .filter(|(k, _)| k != "SUID" && k != "source" && k != "target")
                .collect();
            g.add_edge(source, target, attributes);
        }
        g
    }

    /// Flatten the graph into an `id`-keyed node table and a
    /// `source`/`target`/`interaction` edge table, the shape the network
    /// builder consumes.
    pub fn to_tables(&self) -> (Table, Table) {
        let node_records: Vec<Map<String, Value>> = self
            .nodes()
            .map(|n| {
                let mut rec = Map::new();
                rec.insert("id".into(), Value::String(n.name.clone()));
                for (k, v) in &n.attributes {
                    if k != "id" {
                        rec.insert(k.clone(), v.clone());
                    }
                }
                rec
            })
            .collect();

        let edge_records: Vec<Map<String, Value>> = self
            .edges
            .iter()
            .map(|e| {
                let mut rec = Map::new();
                rec.insert("source".into(), Value::String(e.source.clone()));
                rec.insert("target".into(), Value::String(e.target.clone()));
                rec.insert(
                    "interaction".into(),
                    Value::String(e.interaction().unwrap_or(DEFAULT_INTERACTION).to_string()),
                );
                for (k, v) in &e.attributes {
                    // The builder recomputes names from the endpoints.
                    if k != "name" && !rec.contains_key(k) {
                        rec.insert(k.clone(), v.clone());
                    }
                }
                rec
            })
            .collect();

        (
            Table::from_records(node_records.iter()),
            Table::from_records(edge_records.iter()),
        )
    }

    pub fn node(&self, name: &str) -> Option<&GraphNode> {
        self.nodes.get(name)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.order.iter().filter_map(|n| self.nodes.get(n))
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Edges leaving `name`.
    pub fn outgoing(&self, name: &str) -> Vec<&GraphEdge> {
        self.edges.iter().filter(|e| e.source == name).collect()
    }

    /// Edges arriving at `name`.
    pub fn incoming(&self, name: &str) -> Vec<&GraphEdge> {
        self.edges.iter().filter(|e| e.target == name).collect()
    }

    /// Names of nodes adjacent to `name` in either direction, without
    /// duplicates, in edge order.
    pub fn neighbors(&self, name: &str) -> Vec<&str> {
        dedup_preserving_order(self.edges.iter().filter_map(|e| {
            if e.source == name {
                Some(e.target.as_str())
            } else if e.target == name {
                Some(e.source.as_str())
            } else {
                None
            }
        }))
    }

    /// Number of edge endpoints at `name`; a self-loop counts twice.
    pub fn degree(&self, name: &str) -> usize {
        self.edges
            .iter()
            .map(|e| usize::from(e.source == name) + usize::from(e.target == name))
            .sum()
    }

    /// The weakly connected component containing `name`, the start node
    /// first. Empty when `name` is not in the graph.
    pub fn component(&self, name: &str) -> Vec<&str> {
        let Some(start) = self.nodes.get(name) else {
            return vec![];
        };
        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        let mut result: Vec<&str> = Vec::new();

        visited.insert(start.name.as_str());
        queue.push_back(start.name.as_str());
        while let Some(current) = queue.pop_front() {
            result.push(current);
            for neighbour in self.neighbors(current) {
                if visited.insert(neighbour) {
                    queue.push_back(neighbour);
                }
            }
        }
        result
    }
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(values: Value) -> Vec<Map<String, Value>> {
        values
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_object().unwrap().clone())
            .collect()
    }

    fn node_table() -> Table {
        let recs = records(json!([
            {"SUID": 1, "name": "RAP1", "COMMON": "RAP1"},
            {"SUID": 2, "name": "GCR1", "COMMON": "GCR1"},
            {"SUID": 3, "name": "PDC1", "COMMON": "PDC1"},
            {"SUID": 4, "name": "PEP12", "COMMON": "PEP12"},
        ]));
        Table::from_records(recs.iter())
    }

    fn edge_table_without_endpoints() -> Table {
        let recs = records(json!([
            {"SUID": 10, "name": "RAP1 (pd) GCR1", "interaction": "pd"},
            {"SUID": 11, "name": "GCR1 (pp) PDC1", "interaction": "pp"},
            {"SUID": 12, "name": "renamed by hand", "interaction": "pp"},
        ]));
        Table::from_records(recs.iter())
    }

    #[test]
    fn nodes_drop_suid_and_keep_attributes() {
        let g = NetworkGraph::from_tables(&node_table(), &Table::default());
        assert_eq!(g.node_count(), 4);
        let rap1 = g.node("RAP1").unwrap();
        assert_eq!(rap1.attributes.get("COMMON"), Some(&json!("RAP1")));
        assert!(rap1.attributes.get("SUID").is_none());
    }

    #[test]
    fn endpoints_recovered_from_edge_names() {
        let g = NetworkGraph::from_tables(&node_table(), &edge_table_without_endpoints());
        assert_eq!(g.edge_count(), 2, "unsplittable edge names are skipped");
        assert_eq!(g.outgoing("RAP1")[0].target, "GCR1");
        assert_eq!(g.incoming("PDC1")[0].source, "GCR1");
        assert_eq!(g.edges()[0].interaction(), Some("pd"));
    }

    #[test]
    fn explicit_endpoint_columns_win() {
        let recs = records(json!([
            {"SUID": 10, "name": "ignored", "source": "PDC1", "target": "RAP1"},
        ]));
        let edges = Table::from_records(recs.iter());
        let g = NetworkGraph::from_tables(&node_table(), &edges);
        assert_eq!(g.outgoing("PDC1").len(), 1);
        assert!(g.edges()[0].attributes.get("source").is_none());
    }

    #[test]
    fn rows_without_endpoint_cells_fall_back_to_names() {
        let recs = records(json!([
            {"SUID": 10, "name": "RAP1 (pd) GCR1", "source": "RAP1", "target": "GCR1"},
            {"SUID": 11, "name": "GCR1 (pp) RAP1", "source": null, "target": null},
            {"SUID": 12, "name": "PDC1 (pp) RAP1", "source": "", "target": "RAP1"},
        ]));
        let edges = Table::from_records(recs.iter());
        let g = NetworkGraph::from_tables(&node_table(), &edges);
        assert_eq!(g.node_count(), 4);
        assert!(g.node("").is_none());
        let pairs: Vec<(&str, &str)> = g
            .edges()
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
            .collect();
        assert_eq!(pairs, vec![("RAP1", "GCR1"), ("GCR1", "RAP1"), ("PDC1", "RAP1")]);
    }

    #[test]
    fn neighbors_and_degree() {
        let mut g = NetworkGraph::new();
        g.add_edge("a", "b", Map::new());
        g.add_edge("a", "b", Map::new());
        g.add_edge("c", "a", Map::new());
        g.add_edge("a", "a", Map::new());
        assert_eq!(g.neighbors("a"), vec!["b", "c", "a"]);
        assert_eq!(g.degree("a"), 5);
        assert_eq!(g.degree("b"), 2);
    }

    #[test]
    fn component_ignores_direction() {
        let mut g = NetworkGraph::new();
        g.add_edge("a", "b", Map::new());
        g.add_edge("c", "b", Map::new());
        g.add_node("lonely", Map::new());
        let comp = g.component("c");
        assert_eq!(comp.len(), 3);
        assert_eq!(comp[0], "c");
        assert_eq!(g.component("lonely"), vec!["lonely"]);
        assert!(g.component("missing").is_empty());
    }

    #[test]
    fn to_tables_defaults_interaction() {
        let mut g = NetworkGraph::new();
        let mut attrs = Map::new();
        attrs.insert("weight".into(), json!(5.1));
        g.add_edge("node 0", "node 1", attrs);
        let (nodes, edges) = g.to_tables();
        assert_eq!(nodes.column_strings("id").unwrap(), vec!["node 0", "node 1"]);
        assert_eq!(edges.columns(), &["source", "target", "interaction", "weight"]);
        assert_eq!(edges.cell(0, "interaction"), Some(&json!("interacts with")));
    }
}
