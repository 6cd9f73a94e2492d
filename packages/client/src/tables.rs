//! Reading and writing the default node, edge and network tables.

use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::{debug, info};

use cyrest::{cell_to_string, NetworkRef, Table, TableKind};
use cyrest_api::{ColumnInfo, ColumnValues, TableUpdate};

use crate::client::CyRestClient;
use crate::endpoints;
use crate::error::{CyError, Result};

impl CyRestClient {
    /// Column names of the default table of `kind`, `SUID` included.
    pub async fn get_table_column_names(
        &self,
        kind: TableKind,
        network: impl Into<NetworkRef>,
    ) -> Result<Vec<String>> {
        let net = self.get_network_suid(network).await?;
        let columns: Vec<ColumnInfo> = self.get(&endpoints::table_columns(net, kind), &[]).await?;
        Ok(columns.into_iter().map(|c| c.name).collect())
    }

    /// The default table of `kind` as a [`Table`], with `SUID` first followed
    /// by `columns` in the order given. An empty `columns` returns every
    /// column.
    pub async fn get_table_columns(
        &self,
        kind: TableKind,
        columns: &[&str],
        network: impl Into<NetworkRef>,
    ) -> Result<Table> {
        let net = self.get_network_suid(network).await?;
        let rows: Vec<Map<String, Value>> = self.get(&endpoints::table_rows(net, kind), &[]).await?;
        let table = Table::from_records(rows.iter());
        if columns.is_empty() {
            return Ok(table);
        }
        // An empty table has no columns to check against.
        if !table.is_empty() {
            let known = self.get_table_column_names(kind, net).await?;
            if let Some(missing) = columns.iter().find(|c| !known.iter().any(|k| k == *c)) {
                return Err(CyError::InvalidInput(format!(
                    "column {missing:?} does not exist in the {kind} table"
                )));
            }
        }
        let mut wanted = vec!["SUID"];
        wanted.extend(columns.iter().filter(|c| **c != "SUID"));
        Ok(table.select(&wanted))
    }

    /// Merge `data` into a default table.
    ///
    /// Rows are matched on `data[data_key_column] == table[table_key_column]`
    /// (compared as strings). Rows without a match are dropped; if no row
    /// matches, nothing is sent and [`CyError::InvalidInput`] is returned.
    pub async fn load_table_data(
        &self,
        data: &Table,
        data_key_column: &str,
        kind: TableKind,
        table_key_column: &str,
        network: impl Into<NetworkRef>,
    ) -> Result<()> {
        let net = self.get_network_suid(network).await?;
        let Some(keys) = data.column_strings(data_key_column) else {
            return Err(CyError::InvalidInput(format!(
                "data has no column {data_key_column:?}"
            )));
        };

        let target: ColumnValues = self
            .get(&endpoints::table_column(net, kind, table_key_column), &[])
            .await?;
        let existing: HashSet<String> = target.values.iter().map(cell_to_string).collect();

        let mut row = 0;
        let filtered = data.filter_rows(|_| {
            let keep = existing.contains(&keys[row]);
            row += 1;
            keep
        });
        if filtered.is_empty() {
            return Err(CyError::InvalidInput(
                "provided key columns do not contain any matches".into(),
            ));
        }
        debug!(
            table = %kind,
            matched = filtered.len(),
            dropped = data.len() - filtered.len(),
            "loading table data"
        );

        let update = TableUpdate {
            key: table_key_column.to_string(),
            data_key: data_key_column.to_string(),
            data: filtered.to_records(),
        };
        self.put(&endpoints::table(net, kind), &update).await?;
        info!(network = %net, table = %kind, rows = update.data.len(), "table data loaded");
        Ok(())
    }
}
