//! Command envelope and the command result shapes the client reads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use cyrest::Suid;

/// Every `POST commands/…` response: `{ "data": …, "errors": [...] }`.
///
/// A command that ran but failed reports its messages in `errors` with an
/// HTTP 200 status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandResponse<T = Value> {
    pub data: T,
    #[serde(default)]
    pub errors: Vec<Value>,
}

impl<T> CommandResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data,
            errors: vec![],
        }
    }

    /// `errors` rendered as strings (entries may be strings or objects with
    /// a `message` field).
    pub fn error_messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|e| match e {
                Value::String(s) => s.clone(),
                Value::Object(o) => o
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| e.to_string()),
                other => other.to_string(),
            })
            .collect()
    }
}

/// `data` of commands that create a network (`network clone`,
/// `network create`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkResult {
    pub network: Suid,
}

/// One entry of `network get attribute … columnList="SUID"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkAttribute {
    #[serde(rename = "SUID")]
    pub suid: Suid,
}

/// `data` of `network load file`: the networks created and their views.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadedNetworks {
    #[serde(default)]
    pub networks: Vec<Suid>,
    #[serde(default)]
    pub views: Vec<Suid>,
}

/// `data` of `network select` / `network deselect`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionResult {
    #[serde(default)]
    pub nodes: Vec<Suid>,
    #[serde(default)]
    pub edges: Vec<Suid>,
}

/// Request body for `POST commands/network/create`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetworkRequest {
    /// `SUID:<n>` of the parent network.
    pub source: String,
    /// `"true"` or `"false"`; the command language takes strings.
    pub exclude_edges: String,
    pub node_list: String,
    pub edge_list: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_accept_strings_and_objects() {
        let r: CommandResponse = serde_json::from_str(
            r#"{"data":{},"errors":["plain",{"status":500,"message":"boxed"}]}"#,
        )
        .unwrap();
        assert_eq!(r.error_messages(), vec!["plain", "boxed"]);
    }

    #[test]
    fn missing_errors_default_to_empty() {
        let r: CommandResponse<NetworkResult> =
            serde_json::from_str(r#"{"data":{"network":1502}}"#).unwrap();
        assert!(r.errors.is_empty());
        assert_eq!(r.data.network, Suid(1502));
    }

    #[test]
    fn subnetwork_request_omits_absent_name() {
        let req = SubnetworkRequest {
            source: "SUID:52".into(),
            exclude_edges: "false".into(),
            node_list: "selected".into(),
            edge_list: "all".into(),
            network_name: None,
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["excludeEdges"], "false");
        assert_eq!(v["nodeList"], "selected");
        assert!(v.get("networkName").is_none());
    }
}
