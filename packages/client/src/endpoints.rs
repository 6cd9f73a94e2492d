//! CyREST resource paths, relative to the API base.
//!
//! There is no I/O here; these helpers only compute strings. The
//! [`CyRestClient`](crate::CyRestClient) joins them onto its base URL.
//! Column names are percent-encoded because they may contain spaces or
//! dots (`data.key.column`).

use cyrest::{Suid, TableKind};
use urlencoding::encode;

// ── Networks ─────────────────────────────────────────────────────────────────

pub const NETWORKS: &str = "networks";
pub const NETWORK_COUNT: &str = "networks/count";
pub const NETWORK_NAMES: &str = "networks.names";

/// `networks/{suid}`
pub fn network(net: Suid) -> String {
    format!("networks/{}", net)
}

// ── Nodes ────────────────────────────────────────────────────────────────────

/// `networks/{suid}/nodes`: `POST` a list of names to create nodes.
pub fn nodes(net: Suid) -> String {
    format!("networks/{}/nodes", net)
}

pub fn node_count(net: Suid) -> String {
    format!("networks/{}/nodes/count", net)
}

pub fn selected_nodes(net: Suid) -> String {
    format!("networks/{}/nodes/selected", net)
}

/// `networks/{suid}/nodes/{node}/neighbors`
pub fn node_neighbors(net: Suid, node: Suid) -> String {
    format!("networks/{}/nodes/{}/neighbors", net, node)
}

// ── Edges ────────────────────────────────────────────────────────────────────

pub fn edges(net: Suid) -> String {
    format!("networks/{}/edges", net)
}

pub fn edge_count(net: Suid) -> String {
    format!("networks/{}/edges/count", net)
}

pub fn selected_edges(net: Suid) -> String {
    format!("networks/{}/edges/selected", net)
}

pub fn edge(net: Suid, edge: Suid) -> String {
    format!("networks/{}/edges/{}", net, edge)
}

// ── Tables ───────────────────────────────────────────────────────────────────

/// `networks/{suid}/tables/{defaultnode|defaultedge|defaultnetwork}`
pub fn table(net: Suid, kind: TableKind) -> String {
    format!("networks/{}/tables/{}", net, kind.default_table())
}

pub fn table_rows(net: Suid, kind: TableKind) -> String {
    format!("{}/rows", table(net, kind))
}

/// `…/columns`: the column definitions of a table.
pub fn table_columns(net: Suid, kind: TableKind) -> String {
    format!("{}/columns", table(net, kind))
}

/// `…/columns/{column}` with the column name percent-encoded.
pub fn table_column(net: Suid, kind: TableKind, column: &str) -> String {
    format!("{}/columns/{}", table(net, kind), encode(column))
}

// ── Commands ─────────────────────────────────────────────────────────────────

/// `commands/{namespace}/{verb…}` for a command such as `network get attribute`.
pub fn command(name: &str) -> String {
    let words: Vec<String> = name.split_whitespace().map(|w| encode(w).into_owned()).collect();
    format!("commands/{}", words.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_paths() {
        assert_eq!(network(Suid(52)), "networks/52");
        assert_eq!(node_count(Suid(52)), "networks/52/nodes/count");
        assert_eq!(node_neighbors(Suid(52), Suid(101)), "networks/52/nodes/101/neighbors");
        assert_eq!(edge(Suid(52), Suid(300)), "networks/52/edges/300");
    }

    #[test]
    fn table_paths() {
        assert_eq!(table(Suid(52), TableKind::Node), "networks/52/tables/defaultnode");
        assert_eq!(table_rows(Suid(52), TableKind::Edge), "networks/52/tables/defaultedge/rows");
        assert_eq!(
            table_columns(Suid(52), TableKind::Node),
            "networks/52/tables/defaultnode/columns"
        );
        assert_eq!(
            table_column(Suid(52), TableKind::Node, "name"),
            "networks/52/tables/defaultnode/columns/name"
        );
    }

    #[test]
    fn column_names_are_encoded() {
        assert_eq!(
            table_column(Suid(1), TableKind::Node, "shared name"),
            "networks/1/tables/defaultnode/columns/shared%20name"
        );
    }

    #[test]
    fn command_words_become_path_segments() {
        assert_eq!(command("network get attribute"), "commands/network/get/attribute");
        assert_eq!(command("  vizmap   apply "), "commands/vizmap/apply");
    }
}
