//! Network-level types: version, counts, names, creation (CyREST `networks`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use cyrest::Suid;

/// Response body for `GET {base}`, the cheapest way to check Cytoscape is up.
///
/// ```json
/// { "apiVersion": "v1", "cytoscapeVersion": "3.10.2" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub api_version: String,
    pub cytoscape_version: String,
}

/// `{ "count": n }`, returned by every `…/count` endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountResponse {
    pub count: u64,
}

/// One entry of `GET networks.names`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkName {
    pub name: String,
    #[serde(rename = "SUID")]
    pub suid: Suid,
}

/// The `data` section of `GET networks/{suid}`: network table row values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkData {
    pub name: String,
    #[serde(rename = "SUID")]
    pub suid: Suid,
    /// Every other network table column.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response body for `GET networks/{suid}` (a cyjs document; only `data` is
/// read by the client).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkEnvelope {
    pub data: NetworkData,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub elements: Value,
}

/// Response body for `POST networks`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedNetwork {
    #[serde(rename = "networkSUID")]
    pub network_suid: Suid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_info_camel_case() {
        let v: VersionInfo =
            serde_json::from_str(r#"{"apiVersion":"v1","cytoscapeVersion":"3.10.2"}"#).unwrap();
        assert_eq!(v.cytoscape_version, "3.10.2");
    }

    #[test]
    fn network_envelope_keeps_extra_columns() {
        let json = r#"{"data":{"name":"galFiltered.sif","SUID":52,"shared_name":"galFiltered.sif","selected":true},"elements":{"nodes":[],"edges":[]}}"#;
        let env: NetworkEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(env.data.suid, Suid(52));
        assert_eq!(env.data.extra["selected"], true);
    }

    #[test]
    fn created_network_field_name() {
        let c: CreatedNetwork = serde_json::from_str(r#"{"networkSUID":1502}"#).unwrap();
        assert_eq!(c.network_suid, Suid(1502));
    }
}
