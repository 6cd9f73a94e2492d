//! Attribute table types (`networks/{suid}/tables/...`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response body for `GET …/tables/{table}/columns/{column}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnValues {
    pub name: String,
    pub values: Vec<Value>,
}

/// One entry of `GET …/tables/{table}/columns`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
    #[serde(default)]
    pub immutable: bool,
    #[serde(default)]
    pub primary_key: bool,
}

/// Request body for `PUT …/tables/{table}`: merge `data` rows into the table,
/// matching each row's `dataKey` value against the table's `key` column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TableUpdate {
    pub key: String,
    pub data_key: String,
    pub data: Vec<Map<String, Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_update_wire_names() {
        let u = TableUpdate {
            key: "SUID".into(),
            data_key: "data.key.column".into(),
            data: vec![],
        };
        let v = serde_json::to_value(&u).unwrap();
        assert_eq!(v["dataKey"], "data.key.column");
        assert_eq!(v["key"], "SUID");
    }
}
