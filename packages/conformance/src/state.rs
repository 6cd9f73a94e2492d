//! In-memory model of a running Cytoscape session.
//!
//! Everything is held behind a single [`RwLock`] and is lost when the mock
//! is dropped. Rows are JSON objects shaped like the rows CyREST returns from
//! `tables/{table}/rows`, so the table endpoints are straight reads of this
//! state.
//!
//! SUIDs come from one counter shared by networks, nodes and edges, as in
//! Cytoscape. Subnetworks share node and edge SUIDs with their parent.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use std::sync::RwLock;

use serde_json::{json, Map, Value};
use thiserror::Error;

use cyrest::{
    cell_to_string, dedup_preserving_order, edge_name, CyJsNetwork, NeighborDirection, Suid,
    TableKind, DEFAULT_INTERACTION,
};
use cyrest_api::{
    ColumnInfo, ColumnValues, CreatedEdge, CreatedNode, EdgeInfo, NetworkName, NewEdge,
    TableUpdate,
};

/// One table row: column name to cell.
pub type Row = Map<String, Value>;

/// Styles `vizmap apply` accepts.
pub const KNOWN_STYLES: &[&str] = &["default", "Directed", "Marquee", "Minimal", "Sample1", "Solid"];

/// Layouts `layout <name>` accepts.
pub const KNOWN_LAYOUTS: &[&str] = &[
    "attribute-circle",
    "circular",
    "degree-circle",
    "force-directed",
    "grid",
    "hierarchical",
    "kamada-kawai",
];

/// Why a mock operation failed.
#[derive(Debug, Error, PartialEq)]
pub enum MockError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Invalid(String),

    /// A command ran but could not complete.
    #[error("{0}")]
    CommandFailed(String),
}

type Result<T> = std::result::Result<T, MockError>;

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

fn row_suid(row: &Row) -> Suid {
    Suid(row.get("SUID").and_then(Value::as_i64).unwrap_or_default())
}

fn row_name(row: &Row) -> String {
    row.get("name").map(cell_to_string).unwrap_or_default()
}

fn is_selected(row: &Row) -> bool {
    row.get("selected").and_then(Value::as_bool).unwrap_or(false)
}

fn base_row(suid: Suid, name: &str) -> Row {
    let mut row = Row::new();
    row.insert("SUID".into(), json!(suid.get()));
    row.insert("shared name".into(), json!(name));
    row.insert("name".into(), json!(name));
    row.insert("selected".into(), json!(false));
    row
}

/// Resolve a node or edge list (`all`, `selected`, `unselected` or
/// `column:value,...`) against rows. A term without a column matches `name`.
fn match_list(list: &str, rows: &[&Row]) -> Vec<Suid> {
    let list = list.trim();
    let terms: Vec<(&str, &str)> = list
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| t.split_once(':').unwrap_or(("name", t)))
        .collect();
    rows.iter()
        .filter(|row| match list {
            "all" => true,
            "selected" => is_selected(row),
            "unselected" => !is_selected(row),
            _ => terms
                .iter()
                .any(|(col, val)| row.get(*col).map(cell_to_string).as_deref() == Some(*val)),
        })
        .map(|row| row_suid(row))
        .collect()
}

fn parse_table(table: &str) -> Result<TableKind> {
    table.parse().map_err(MockError::NotFound)
}

// ---------------------------------------------------------------------------
// Networks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct MockEdge {
    pub row: Row,
    pub source: Suid,
    pub target: Suid,
    pub directed: bool,
}

impl MockEdge {
    pub fn suid(&self) -> Suid {
        row_suid(&self.row)
    }
}

/// A network: its row in the network table plus its node and edge rows.
#[derive(Debug, Clone, PartialEq)]
pub struct MockNetwork {
    pub row: Row,
    pub nodes: Vec<Row>,
    pub edges: Vec<MockEdge>,
}

impl MockNetwork {
    fn new(suid: Suid, name: &str) -> Self {
        Self {
            row: base_row(suid, name),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn suid(&self) -> Suid {
        row_suid(&self.row)
    }

    pub fn name(&self) -> String {
        row_name(&self.row)
    }

    fn set_name(&mut self, name: &str) {
        self.row.insert("name".into(), json!(name));
        self.row.insert("shared name".into(), json!(name));
    }

    pub fn node(&self, suid: Suid) -> Option<&Row> {
        self.nodes.iter().find(|r| row_suid(r) == suid)
    }

    pub fn edge(&self, suid: Suid) -> Option<&MockEdge> {
        self.edges.iter().find(|e| e.suid() == suid)
    }

    pub fn node_names(&self) -> Vec<String> {
        self.nodes.iter().map(row_name).collect()
    }

    pub fn edge_names(&self) -> Vec<String> {
        self.edges.iter().map(|e| row_name(&e.row)).collect()
    }

    pub fn selected(&self, kind: TableKind) -> Vec<Suid> {
        match_list("selected", &self.rows(kind))
    }

    /// The value of `column` in the row with `suid`, if both exist.
    pub fn cell(&self, kind: TableKind, suid: Suid, column: &str) -> Option<&Value> {
        self.rows(kind)
            .into_iter()
            .find(|r| row_suid(r) == suid)
            .and_then(|r| r.get(column))
    }

    fn rows(&self, kind: TableKind) -> Vec<&Row> {
        match kind {
            TableKind::Node => self.nodes.iter().collect(),
            TableKind::Edge => self.edges.iter().map(|e| &e.row).collect(),
            TableKind::Network => vec![&self.row],
        }
    }

    fn rows_mut(&mut self, kind: TableKind) -> Vec<&mut Row> {
        match kind {
            TableKind::Node => self.nodes.iter_mut().collect(),
            TableKind::Edge => self.edges.iter_mut().map(|e| &mut e.row).collect(),
            TableKind::Network => vec![&mut self.row],
        }
    }

    fn row_mut(&mut self, kind: TableKind, suid: Suid) -> Option<&mut Row> {
        self.rows_mut(kind).into_iter().find(|r| row_suid(r) == suid)
    }

    fn set_selected(&mut self, kind: TableKind, suids: &[Suid], selected: bool) {
        let wanted: HashSet<Suid> = suids.iter().copied().collect();
        for row in self.rows_mut(kind) {
            if wanted.contains(&row_suid(row)) {
                row.insert("selected".into(), json!(selected));
            }
        }
    }

    fn node_name(&self, suid: Suid) -> Result<String> {
        self.node(suid)
            .map(row_name)
            .ok_or_else(|| MockError::Invalid(format!("node {suid} does not exist")))
    }

    /// Adjacent node SUIDs, each once, in edge order.
    fn neighbors(&self, node: Suid) -> Vec<Suid> {
        dedup_preserving_order(self.edges.iter().filter_map(|e| {
            if e.source == node {
                Some(e.target)
            } else if e.target == node {
                Some(e.source)
            } else {
                None
            }
        }))
    }

    fn to_sif(&self) -> String {
        let mut lines = Vec::new();
        let mut linked = HashSet::new();
        for e in &self.edges {
            let interaction = e.row.get("interaction").map(cell_to_string).unwrap_or_default();
            let source = self.node(e.source).map(row_name).unwrap_or_default();
            let target = self.node(e.target).map(row_name).unwrap_or_default();
            lines.push(format!("{source}\t{interaction}\t{target}"));
            linked.insert(e.source);
            linked.insert(e.target);
        }
        for row in &self.nodes {
            if !linked.contains(&row_suid(row)) {
                lines.push(row_name(row));
            }
        }
        lines.join("\n") + "\n"
    }

    /// The network as a cyjs document, nodes keyed by SUID.
    fn to_cyjs(&self) -> Value {
        let nodes: Vec<Value> = self
            .nodes
            .iter()
            .map(|row| {
                let mut data = row.clone();
                data.insert("id".into(), json!(row_suid(row).to_string()));
                json!({ "data": data })
            })
            .collect();
        let edges: Vec<Value> = self
            .edges
            .iter()
            .map(|e| {
                let mut data = e.row.clone();
                data.insert("id".into(), json!(e.suid().to_string()));
                data.insert("source".into(), json!(e.source.to_string()));
                data.insert("target".into(), json!(e.target.to_string()));
                json!({ "data": data })
            })
            .collect();
        json!({ "data": self.row, "elements": { "nodes": nodes, "edges": edges } })
    }
}

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

struct Inner {
    networks: BTreeMap<Suid, MockNetwork>,
    current: Option<Suid>,
    next_suid: i64,
    /// Every command run, as `(name, args)`.
    commands: Vec<(String, Row)>,
}

impl Inner {
    fn new() -> Self {
        Self {
            networks: BTreeMap::new(),
            current: None,
            next_suid: 52,
            commands: Vec::new(),
        }
    }

    fn allocate(&mut self) -> Suid {
        let suid = Suid(self.next_suid);
        self.next_suid += 1;
        suid
    }

    fn network(&self, net: Suid) -> Result<&MockNetwork> {
        self.networks
            .get(&net)
            .ok_or_else(|| MockError::NotFound(format!("Network {net} does not exist")))
    }

    fn network_mut(&mut self, net: Suid) -> Result<&mut MockNetwork> {
        self.networks
            .get_mut(&net)
            .ok_or_else(|| MockError::NotFound(format!("Network {net} does not exist")))
    }

    /// Resolve a command's network argument: absent or `current`, `SUID:n`,
    /// or a network name.
    fn resolve(&self, arg: Option<&str>) -> Result<Suid> {
        match arg.map(str::trim) {
            None | Some("current") | Some("") => self
                .current
                .ok_or_else(|| MockError::CommandFailed("No current network".into())),
            Some(a) => {
                if let Some(raw) = a.strip_prefix("SUID:") {
                    let suid = raw
                        .trim_matches('"')
                        .parse::<Suid>()
                        .map_err(MockError::Invalid)?;
                    self.network(suid)?;
                    return Ok(suid);
                }
                self.networks
                    .values()
                    .find(|n| n.name() == a)
                    .map(MockNetwork::suid)
                    .ok_or_else(|| MockError::CommandFailed(format!("Network '{a}' does not exist")))
            }
        }
    }

    fn unique_name(&self, base: &str, suffix: impl Fn(usize) -> String) -> String {
        let taken: HashSet<String> = self.networks.values().map(MockNetwork::name).collect();
        (1..)
            .map(|i| format!("{base}{}", suffix(i)))
            .find(|n| !taken.contains(n))
            .unwrap_or_else(|| base.to_string())
    }

    fn insert_network(&mut self, name: &str) -> Suid {
        let suid = self.allocate();
        self.networks.insert(suid, MockNetwork::new(suid, name));
        self.current = Some(suid);
        suid
    }

    fn add_node(&mut self, net: Suid, name: &str) -> Result<Suid> {
        self.network(net)?;
        let suid = self.allocate();
        self.network_mut(net)?.nodes.push(base_row(suid, name));
        Ok(suid)
    }

    fn add_edge(
        &mut self,
        net: Suid,
        source: Suid,
        target: Suid,
        interaction: &str,
        directed: bool,
    ) -> Result<Suid> {
        let network = self.network(net)?;
        let name = edge_name(&network.node_name(source)?, interaction, &network.node_name(target)?);
        let suid = self.allocate();
        let mut row = base_row(suid, &name);
        row.insert("interaction".into(), json!(interaction));
        row.insert("shared interaction".into(), json!(interaction));
        self.network_mut(net)?.edges.push(MockEdge {
            row,
            source,
            target,
            directed,
        });
        Ok(suid)
    }

    fn create_from_cyjs(&mut self, title: Option<String>, doc: CyJsNetwork) -> Result<Suid> {
        let mut ids = HashSet::new();
        for el in &doc.elements.nodes {
            let id = el
                .data
                .get("id")
                .map(cell_to_string)
                .ok_or_else(|| MockError::Invalid("node element without data.id".into()))?;
            ids.insert(id);
        }
        for el in &doc.elements.edges {
            for end in ["source", "target"] {
                let id = el.data.get(end).map(cell_to_string).unwrap_or_default();
                if !ids.contains(&id) {
                    return Err(MockError::Invalid(format!(
                        "edge {end} {id:?} is not a node id"
                    )));
                }
            }
        }

        let name = title
            .or_else(|| doc.name().map(str::to_string))
            .unwrap_or_else(|| "From cyjs".into());
        let net = self.insert_network(&name);

        let mut by_id: HashMap<String, Suid> = HashMap::new();
        for el in doc.elements.nodes {
            let id = el.data.get("id").map(cell_to_string).unwrap_or_default();
            let name = el.data.get("name").map(cell_to_string).unwrap_or_else(|| id.clone());
            let suid = self.add_node(net, &name)?;
            if let Some(row) = self.network_mut(net)?.row_mut(TableKind::Node, suid) {
                for (k, v) in el.data {
                    if k != "SUID" && k != "name" {
                        row.insert(k, v);
                    }
                }
            }
            by_id.entry(id).or_insert(suid);
        }

        for el in doc.elements.edges {
            let end = |k: &str| {
                el.data
                    .get(k)
                    .map(cell_to_string)
                    .and_then(|id| by_id.get(&id).copied())
                    .ok_or_else(|| MockError::Invalid(format!("edge without {k}")))
            };
            let (source, target) = (end("source")?, end("target")?);
            let interaction = el
                .data
                .get("interaction")
                .map(cell_to_string)
                .unwrap_or_else(|| DEFAULT_INTERACTION.into());
            let suid = self.add_edge(net, source, target, &interaction, true)?;
            if let Some(row) = self.network_mut(net)?.row_mut(TableKind::Edge, suid) {
                for (k, v) in el.data {
                    if !matches!(k.as_str(), "SUID" | "id" | "source" | "target") {
                        row.insert(k, v);
                    }
                }
            }
        }
        Ok(net)
    }

    fn load_sif(&mut self, name: &str, content: &str) -> Result<Suid> {
        let mut lines = Vec::new();
        for line in content.lines().map(str::trim_end).filter(|l| !l.trim().is_empty()) {
            let tokens: Vec<&str> = if line.contains('\t') {
                line.split('\t').collect()
            } else {
                line.split_whitespace().collect()
            };
            if tokens.len() == 2 {
                return Err(MockError::CommandFailed(format!("malformed SIF line: {line:?}")));
            }
            lines.push(tokens);
        }

        let net = self.insert_network(name);
        let mut by_name: HashMap<String, Suid> = HashMap::new();
        for tokens in lines {
            let mut node = |inner: &mut Self, n: &str| -> Result<Suid> {
                if let Some(s) = by_name.get(n) {
                    return Ok(*s);
                }
                let s = inner.add_node(net, n)?;
                by_name.insert(n.to_string(), s);
                Ok(s)
            };
            let source = node(self, tokens[0])?;
            if tokens.len() >= 3 {
                for target in &tokens[2..] {
                    let target = node(self, target)?;
                    self.add_edge(net, source, target, tokens[1], true)?;
                }
            }
        }
        Ok(net)
    }

    // --- Commands ------------------------------------------------------------

    fn run(&mut self, name: &str, args: &Row) -> Result<Value> {
        let arg = |k: &str| args.get(k).map(cell_to_string);
        let required = |k: &str| {
            arg(k).ok_or_else(|| MockError::CommandFailed(format!("missing argument {k}")))
        };

        match name {
            "network get attribute" => {
                let net = self.resolve(arg("network").as_deref())?;
                let row = &self.network(net)?.row;
                let columns = arg("columnList").unwrap_or_else(|| "all".into());
                let out: Row = if columns == "all" {
                    row.clone()
                } else {
                    columns
                        .split(',')
                        .map(str::trim)
                        .filter_map(|c| row.get(c).map(|v| (c.to_string(), v.clone())))
                        .collect()
                };
                Ok(json!([out]))
            }

            "network set current" => {
                let net = self.resolve(arg("network").as_deref())?;
                self.current = Some(net);
                Ok(json!({}))
            }

            "network rename" => {
                let title = required("name")?;
                if title.is_empty() {
                    return Err(MockError::CommandFailed("Network name must not be empty".into()));
                }
                let net = self.resolve(arg("sourceNetwork").as_deref())?;
                if self.networks.values().any(|n| n.suid() != net && n.name() == title) {
                    return Err(MockError::CommandFailed(format!(
                        "Network name '{title}' is already in use"
                    )));
                }
                self.network_mut(net)?.set_name(&title);
                Ok(json!({ "network": net }))
            }

            "network clone" => {
                let src = self.resolve(arg("network").as_deref())?;
                let original = self.network(src)?.clone();
                let name = self.unique_name(&original.name(), |i| format!("_{i}"));
                let net = self.insert_network(&name);
                let mut map = HashMap::new();
                for row in &original.nodes {
                    let suid = self.add_node(net, &row_name(row))?;
                    map.insert(row_suid(row), suid);
                    if let Some(new_row) = self.network_mut(net)?.row_mut(TableKind::Node, suid) {
                        for (k, v) in row.iter().filter(|(k, _)| *k != "SUID") {
                            new_row.insert(k.clone(), v.clone());
                        }
                    }
                }
                for e in &original.edges {
                    let mut row = e.row.clone();
                    let suid = self.allocate();
                    row.insert("SUID".into(), json!(suid.get()));
                    self.network_mut(net)?.edges.push(MockEdge {
                        row,
                        source: map[&e.source],
                        target: map[&e.target],
                        directed: e.directed,
                    });
                }
                Ok(json!({ "network": net }))
            }

            "network create" => {
                let src = self.resolve(arg("source").as_deref())?;
                let parent = self.network(src)?.clone();
                let exclude = arg("excludeEdges").as_deref() == Some("true");

                let mut nodes: HashSet<Suid> =
                    match_list(&arg("nodeList").unwrap_or_else(|| "selected".into()), &parent.rows(TableKind::Node))
                        .into_iter()
                        .collect();
                let mut edges: HashSet<Suid> = match arg("edgeList") {
                    Some(list) => match_list(&list, &parent.rows(TableKind::Edge))
                        .into_iter()
                        .collect(),
                    None => HashSet::new(),
                };
                for e in parent.edges.iter().filter(|e| edges.contains(&e.suid())) {
                    nodes.insert(e.source);
                    nodes.insert(e.target);
                }
                if !exclude {
                    for e in &parent.edges {
                        if nodes.contains(&e.source) && nodes.contains(&e.target) {
                            edges.insert(e.suid());
                        }
                    }
                }
                if nodes.is_empty() {
                    return Err(MockError::CommandFailed("No nodes or edges to copy".into()));
                }

                let name = match arg("networkName") {
                    Some(n) => n,
                    None => self.unique_name(&parent.name(), |i| format!("({i})")),
                };
                let net = self.insert_network(&name);
                let sub = self.network_mut(net)?;
                sub.nodes = parent
                    .nodes
                    .iter()
                    .filter(|r| nodes.contains(&row_suid(r)))
                    .cloned()
                    .collect();
                sub.edges = parent
                    .edges
                    .iter()
                    .filter(|e| edges.contains(&e.suid()))
                    .cloned()
                    .collect();
                sub.set_selected(TableKind::Node, &parent.selected(TableKind::Node), false);
                sub.set_selected(TableKind::Edge, &parent.selected(TableKind::Edge), false);
                Ok(json!({ "network": net }))
            }

            "network select" => {
                let net = self.resolve(arg("network").as_deref())?;
                let network = self.network_mut(net)?;
                if let Some(dir) = arg("firstNeighbors") {
                    let direction: NeighborDirection = serde_json::from_value(json!(dir))
                        .map_err(|_| MockError::CommandFailed(format!("unknown direction {dir:?}")))?;
                    let list = arg("nodeList").unwrap_or_else(|| "selected".into());
                    let base = match_list(&list, &network.rows(TableKind::Node));
                    let base_set: HashSet<Suid> = base.iter().copied().collect();
                    let mut picked = base.clone();
                    for e in &network.edges {
                        let (from_source, from_target) =
                            (base_set.contains(&e.source), base_set.contains(&e.target));
                        match direction {
                            NeighborDirection::Outgoing if from_source => picked.push(e.target),
                            NeighborDirection::Incoming if from_target => picked.push(e.source),
                            NeighborDirection::Undirected if e.directed => {}
                            NeighborDirection::Any | NeighborDirection::Undirected => {
                                if from_source {
                                    picked.push(e.target);
                                }
                                if from_target {
                                    picked.push(e.source);
                                }
                            }
                            _ => {}
                        }
                    }
                    let picked = dedup_preserving_order(picked);
                    network.set_selected(TableKind::Node, &picked, true);
                    return Ok(json!({ "nodes": picked, "edges": [] }));
                }

                let nodes = arg("nodeList")
                    .map(|l| match_list(&l, &network.rows(TableKind::Node)))
                    .unwrap_or_default();
                let edges = arg("edgeList")
                    .map(|l| match_list(&l, &network.rows(TableKind::Edge)))
                    .unwrap_or_default();
                network.set_selected(TableKind::Node, &nodes, true);
                network.set_selected(TableKind::Edge, &edges, true);
                Ok(json!({ "nodes": nodes, "edges": edges }))
            }

            "network deselect" => {
                let net = self.resolve(arg("network").as_deref())?;
                let network = self.network_mut(net)?;
                if let Some(list) = arg("nodeList") {
                    let nodes = match_list(&list, &network.rows(TableKind::Node));
                    network.set_selected(TableKind::Node, &nodes, false);
                }
                if let Some(list) = arg("edgeList") {
                    let edges = match_list(&list, &network.rows(TableKind::Edge));
                    network.set_selected(TableKind::Edge, &edges, false);
                }
                Ok(json!({}))
            }

            "network export" => {
                let net = self.resolve(arg("network").as_deref())?;
                let file = required("OutputFile")?;
                let format = required("options")?;
                let network = self.network(net)?;
                let content = match format.to_ascii_uppercase().as_str() {
                    "SIF" => Some(network.to_sif()),
                    "CYJS" => Some(network.to_cyjs().to_string()),
                    "CX" | "GRAPHML" | "NNF" | "XGMML" => None,
                    other => {
                        return Err(MockError::CommandFailed(format!(
                            "unsupported export format {other}"
                        )))
                    }
                };
                if let Some(content) = content {
                    std::fs::write(&file, content).map_err(|e| {
                        MockError::CommandFailed(format!("cannot write {file}: {e}"))
                    })?;
                }
                Ok(json!({ "file": file }))
            }

            "network load file" => {
                let file = required("file")?;
                let content = std::fs::read_to_string(&file)
                    .map_err(|e| MockError::CommandFailed(format!("cannot read {file}: {e}")))?;
                let title = Path::new(&file)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| file.clone());
                let net = if file.ends_with(".cyjs") || file.ends_with(".json") {
                    let doc: CyJsNetwork = serde_json::from_str(&content)
                        .map_err(|e| MockError::CommandFailed(format!("invalid cyjs: {e}")))?;
                    self.create_from_cyjs(Some(title), doc)?
                } else {
                    self.load_sif(&title, &content)?
                };
                let view = self.allocate();
                Ok(json!({ "networks": [net], "views": [view] }))
            }

            "session save as" => {
                required("file")?;
                Ok(json!({}))
            }

            "vizmap apply" => {
                let styles = required("styles")?;
                for style in styles.split(',').map(str::trim) {
                    if !KNOWN_STYLES.contains(&style) {
                        return Err(MockError::CommandFailed(format!("No such style: {style}")));
                    }
                }
                self.resolve(None)?;
                Ok(json!([]))
            }

            "layout apply preferred" => {
                self.resolve(arg("networkSelected").as_deref())?;
                Ok(json!({}))
            }

            other => match other.strip_prefix("layout ") {
                Some(layout) if KNOWN_LAYOUTS.contains(&layout) => {
                    self.resolve(arg("network").as_deref())?;
                    Ok(json!({}))
                }
                _ => Err(MockError::NotFound(format!("No such command: {other}"))),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// MockCytoscape
// ---------------------------------------------------------------------------

/// A thread-safe stand-in for one Cytoscape session.
///
/// The seeding methods (`add_network`, `add_node`, ...) bypass HTTP so
/// tests can set up a session before pointing a client at it.
pub struct MockCytoscape {
    inner: RwLock<Inner>,
}

impl Default for MockCytoscape {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCytoscape {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::new()),
        }
    }

    // --- Seeding and inspection ---------------------------------------------

    /// Create an empty network and make it current.
    pub fn add_network(&self, name: &str) -> Suid {
        self.inner.write().unwrap().insert_network(name)
    }

    pub fn add_node(&self, net: Suid, name: &str) -> Result<Suid> {
        self.inner.write().unwrap().add_node(net, name)
    }

    pub fn add_edge(
        &self,
        net: Suid,
        source: Suid,
        target: Suid,
        interaction: &str,
        directed: bool,
    ) -> Result<Suid> {
        self.inner
            .write()
            .unwrap()
            .add_edge(net, source, target, interaction, directed)
    }

    pub fn set_selected(&self, net: Suid, kind: TableKind, suids: &[Suid], selected: bool) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        inner.network_mut(net)?.set_selected(kind, suids, selected);
        Ok(())
    }

    pub fn set_current(&self, net: Option<Suid>) {
        self.inner.write().unwrap().current = net;
    }

    pub fn current(&self) -> Option<Suid> {
        self.inner.read().unwrap().current
    }

    /// A snapshot of one network.
    pub fn network(&self, net: Suid) -> Option<MockNetwork> {
        self.inner.read().unwrap().networks.get(&net).cloned()
    }

    /// Arguments of every run of the named command, in order.
    pub fn commands_named(&self, name: &str) -> Vec<Row> {
        self.inner
            .read()
            .unwrap()
            .commands
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, args)| args.clone())
            .collect()
    }

    // --- Networks ------------------------------------------------------------

    pub fn network_suids(&self) -> Vec<Suid> {
        self.inner.read().unwrap().networks.keys().copied().collect()
    }

    pub fn network_count(&self) -> u64 {
        self.inner.read().unwrap().networks.len() as u64
    }

    /// Name/SUID pairs, optionally restricted to one SUID.
    pub fn network_names(&self, only: Option<Suid>) -> Vec<NetworkName> {
        self.inner
            .read()
            .unwrap()
            .networks
            .values()
            .filter(|n| only.map_or(true, |s| s == n.suid()))
            .map(|n| NetworkName {
                name: n.name(),
                suid: n.suid(),
            })
            .collect()
    }

    pub fn network_document(&self, net: Suid) -> Result<Value> {
        Ok(self.inner.read().unwrap().network(net)?.to_cyjs())
    }

    pub fn create_network(&self, title: Option<String>, doc: CyJsNetwork) -> Result<Suid> {
        self.inner.write().unwrap().create_from_cyjs(title, doc)
    }

    pub fn delete_network(&self, net: Suid) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        inner
            .networks
            .remove(&net)
            .ok_or_else(|| MockError::NotFound(format!("Network {net} does not exist")))?;
        if inner.current == Some(net) {
            inner.current = inner.networks.keys().next_back().copied();
        }
        Ok(())
    }

    pub fn delete_all(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.networks.clear();
        inner.current = None;
    }

    // --- Nodes and edges -----------------------------------------------------

    pub fn count(&self, net: Suid, kind: TableKind) -> Result<u64> {
        Ok(self.inner.read().unwrap().network(net)?.rows(kind).len() as u64)
    }

    pub fn selected(&self, net: Suid, kind: TableKind) -> Result<Vec<Suid>> {
        Ok(self.inner.read().unwrap().network(net)?.selected(kind))
    }

    pub fn create_nodes(&self, net: Suid, names: Vec<String>) -> Result<Vec<CreatedNode>> {
        let mut inner = self.inner.write().unwrap();
        inner.network(net)?;
        names
            .into_iter()
            .map(|name| -> Result<CreatedNode> {
                let suid = inner.add_node(net, &name)?;
                Ok(CreatedNode { name, suid })
            })
            .collect()
    }

    pub fn neighbors(&self, net: Suid, node: Suid) -> Result<Vec<Suid>> {
        let inner = self.inner.read().unwrap();
        let network = inner.network(net)?;
        if network.node(node).is_none() {
            return Err(MockError::NotFound(format!("Node {node} does not exist")));
        }
        Ok(network.neighbors(node))
    }

    /// Create edges; every endpoint is checked before any edge is added.
    pub fn create_edges(&self, net: Suid, edges: Vec<NewEdge>) -> Result<Vec<CreatedEdge>> {
        let mut inner = self.inner.write().unwrap();
        let network = inner.network(net)?;
        let mut parsed = Vec::with_capacity(edges.len());
        for e in &edges {
            let source: Suid = e.source.parse().map_err(MockError::Invalid)?;
            let target: Suid = e.target.parse().map_err(MockError::Invalid)?;
            network.node_name(source)?;
            network.node_name(target)?;
            parsed.push((source, target, e.interaction.as_str(), e.directed));
        }
        parsed
            .into_iter()
            .map(|(source, target, interaction, directed)| -> Result<CreatedEdge> {
                let suid = inner.add_edge(net, source, target, interaction, directed)?;
                Ok(CreatedEdge {
                    suid,
                    source,
                    target,
                })
            })
            .collect()
    }

    pub fn edge_info(&self, net: Suid, edge: Suid) -> Result<EdgeInfo> {
        let inner = self.inner.read().unwrap();
        let e = inner
            .network(net)?
            .edge(edge)
            .ok_or_else(|| MockError::NotFound(format!("Edge {edge} does not exist")))?;
        let mut extra = e.row.clone();
        extra.shift_remove("SUID");
        extra.insert("directed".into(), json!(e.directed));
        Ok(EdgeInfo {
            suid: edge,
            source: e.source,
            target: e.target,
            extra,
        })
    }

    // --- Tables --------------------------------------------------------------

    pub fn table_rows(&self, net: Suid, table: &str) -> Result<Vec<Row>> {
        let kind = parse_table(table)?;
        let inner = self.inner.read().unwrap();
        Ok(inner.network(net)?.rows(kind).into_iter().cloned().collect())
    }

    pub fn table_columns(&self, net: Suid, table: &str) -> Result<Vec<ColumnInfo>> {
        let rows = self.table_rows(net, table)?;
        let mut columns: Vec<ColumnInfo> = Vec::new();
        for row in &rows {
            for (name, value) in row {
                if columns.iter().any(|c| &c.name == name) {
                    continue;
                }
                let column_type = match value {
                    Value::Bool(_) => "Boolean",
                    Value::Number(_) if name == "SUID" => "Long",
                    Value::Number(n) if n.is_f64() => "Double",
                    Value::Number(_) => "Integer",
                    Value::Array(_) => "List",
                    _ => "String",
                };
                columns.push(ColumnInfo {
                    name: name.clone(),
                    column_type: column_type.into(),
                    immutable: name == "SUID",
                    primary_key: name == "SUID",
                });
            }
        }
        Ok(columns)
    }

    pub fn column_values(&self, net: Suid, table: &str, column: &str) -> Result<ColumnValues> {
        let rows = self.table_rows(net, table)?;
        if !rows.iter().any(|r| r.contains_key(column)) {
            return Err(MockError::NotFound(format!("Column {column} does not exist")));
        }
        Ok(ColumnValues {
            name: column.to_string(),
            values: rows
                .iter()
                .map(|r| r.get(column).cloned().unwrap_or(Value::Null))
                .collect(),
        })
    }

    /// Copy each record's columns onto the rows whose `key` column equals the
    /// record's `data_key` value. The data key column itself is not copied.
    pub fn update_table(&self, net: Suid, table: &str, update: TableUpdate) -> Result<()> {
        let kind = parse_table(table)?;
        let mut inner = self.inner.write().unwrap();
        let mut rows = inner.network_mut(net)?.rows_mut(kind);
        for record in &update.data {
            let Some(key) = record.get(&update.data_key).map(cell_to_string) else {
                continue;
            };
            for row in rows.iter_mut() {
                if row.get(&update.key).map(cell_to_string).as_deref() != Some(key.as_str()) {
                    continue;
                }
                for (k, v) in record {
                    if *k != update.data_key && k != "SUID" {
                        row.insert(k.clone(), v.clone());
                    }
                }
            }
        }
        Ok(())
    }

    // --- Commands ------------------------------------------------------------

    /// Run a command such as `network rename` and return its `data`.
    pub fn run_command(&self, name: &str, args: Row) -> Result<Value> {
        let mut inner = self.inner.write().unwrap();
        inner.commands.push((name.to_string(), args.clone()));
        inner.run(name, &args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> (MockCytoscape, Suid, Vec<Suid>) {
        let cy = MockCytoscape::new();
        let net = cy.add_network("net");
        let nodes: Vec<Suid> = ["A", "B", "C"]
            .iter()
            .map(|n| cy.add_node(net, n).unwrap())
            .collect();
        cy.add_edge(net, nodes[0], nodes[1], "pp", true).unwrap();
        cy.add_edge(net, nodes[1], nodes[2], "pd", true).unwrap();
        (cy, net, nodes)
    }

    #[test]
    fn node_lists_match_by_column() {
        let (cy, net, nodes) = seeded();
        let network = cy.network(net).unwrap();
        let rows = network.rows(TableKind::Node);
        assert_eq!(match_list("name:A,name:C", &rows), vec![nodes[0], nodes[2]]);
        assert_eq!(match_list(&format!("SUID:{}", nodes[1]), &rows), vec![nodes[1]]);
        assert_eq!(match_list("all", &rows).len(), 3);
        assert!(match_list("selected", &rows).is_empty());
    }

    #[test]
    fn edges_are_named_from_endpoints() {
        let (cy, net, _) = seeded();
        assert_eq!(
            cy.network(net).unwrap().edge_names(),
            vec!["A (pp) B", "B (pd) C"]
        );
    }

    #[test]
    fn outgoing_first_neighbors_follow_direction() {
        let (cy, net, nodes) = seeded();
        cy.set_selected(net, TableKind::Node, &[nodes[1]], true).unwrap();
        let mut args = Row::new();
        args.insert("firstNeighbors".into(), json!("outgoing"));
        args.insert("nodeList".into(), json!("selected"));
        cy.run_command("network select", args).unwrap();
        assert_eq!(cy.selected(net, TableKind::Node).unwrap(), vec![nodes[1], nodes[2]]);
    }

    #[test]
    fn rename_rejects_names_in_use() {
        let (cy, net, _) = seeded();
        cy.add_network("other");
        let mut args = Row::new();
        args.insert("name".into(), json!("other"));
        args.insert("sourceNetwork".into(), json!(format!("SUID:{net}")));
        assert!(matches!(
            cy.run_command("network rename", args),
            Err(MockError::CommandFailed(_))
        ));
    }

    #[test]
    fn sif_round_trip_keeps_structure() {
        let (cy, net, _) = seeded();
        let sif = cy.network(net).unwrap().to_sif();
        assert_eq!(sif, "A\tpp\tB\nB\tpd\tC\n");
        let mut inner = Inner::new();
        let loaded = inner.load_sif("copy.sif", &sif).unwrap();
        assert_eq!(inner.network(loaded).unwrap().edge_names(), vec!["A (pp) B", "B (pd) C"]);
    }

    #[test]
    fn sif_with_two_tokens_is_rejected() {
        let mut inner = Inner::new();
        assert!(inner.load_sif("bad.sif", "A pp\n").is_err());
    }

    #[test]
    fn unknown_command_is_not_found() {
        let cy = MockCytoscape::new();
        assert!(matches!(
            cy.run_command("network frobnicate", Row::new()),
            Err(MockError::NotFound(_))
        ));
    }
}
