//! Builder for CyREST commands.
//!
//! A command such as
//!
//! ```text
//! network rename name="renamed network" sourceNetwork="SUID:52"
//! ```
//!
//! is sent as `POST {base}/commands/network/rename` with the JSON body
//! `{"name": "renamed network", "sourceNetwork": "SUID:52"}`. Building the
//! argument map directly avoids quoting problems with names that contain
//! spaces, quotes or `=`.

use std::fmt;

use serde_json::{Map, Value};

use crate::endpoints;

#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    name: String,
    args: Map<String, Value>,
}

impl Command {
    /// Start a command, e.g. `Command::new("network clone")`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Map::new(),
        }
    }

    /// Add a string argument. The command language is string-typed, so
    /// booleans and numbers are passed in their text form too.
    pub fn arg(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.args
            .insert(key.into(), Value::String(value.to_string()));
        self
    }

    /// Add an argument only when `value` is present.
    pub fn arg_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.arg(key, v),
            None => self,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &Map<String, Value> {
        &self.args
    }

    /// Request path relative to the API base.
    pub fn path(&self) -> String {
        endpoints::command(&self.name)
    }
}

/// Renders the command in the syntax of the Cytoscape command line, for logs
/// and error messages.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for (k, v) in &self.args {
            match v {
                Value::String(s) => write!(f, " {}={:?}", k, s)?,
                other => write!(f, " {}={}", k, other)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_path_and_body() {
        let cmd = Command::new("network rename")
            .arg("name", "renamed network")
            .arg("sourceNetwork", "SUID:52");
        assert_eq!(cmd.path(), "commands/network/rename");
        assert_eq!(cmd.args()["name"], "renamed network");
        assert_eq!(cmd.args()["sourceNetwork"], "SUID:52");
    }

    #[test]
    fn non_string_values_are_stringified() {
        let cmd = Command::new("network create").arg("excludeEdges", false);
        assert_eq!(cmd.args()["excludeEdges"], "false");
    }

    #[test]
    fn optional_args_are_skipped_when_absent() {
        let cmd = Command::new("network export")
            .arg_opt("network", None::<String>)
            .arg_opt("options", Some("SIF"));
        assert!(cmd.args().get("network").is_none());
        assert_eq!(cmd.args()["options"], "SIF");
    }

    #[test]
    fn display_quotes_values() {
        let cmd = Command::new("vizmap apply").arg("styles", "default");
        assert_eq!(cmd.to_string(), r#"vizmap apply styles="default""#);
    }
}
