//! General network functions: lookup, naming, the current network, export
//! and deletion.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use cyrest::{validate_title, NetworkRef, Suid};
use cyrest_api::{CountResponse, NetworkAttribute, NetworkEnvelope, NetworkName};

use crate::client::CyRestClient;
use crate::command::Command;
use crate::endpoints;
use crate::error::{CyError, Result};

/// File formats `network export` can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    Cx,
    Cyjs,
    GraphMl,
    Nnf,
    #[default]
    Sif,
    Xgmml,
    /// A whole-session file; written with `session save as` rather than
    /// `network export`.
    Cys,
}

impl ExportFormat {
    /// The spelling Cytoscape expects in the `options` argument.
    pub fn wire_name(self) -> &'static str {
        match self {
            ExportFormat::Cx => "CX",
            ExportFormat::Cyjs => "CYJS",
            ExportFormat::GraphMl => "GraphML",
            ExportFormat::Nnf => "NNF",
            ExportFormat::Sif => "SIF",
            ExportFormat::Xgmml => "XGMML",
            ExportFormat::Cys => "CYS",
        }
    }

    /// File extension without the dot, e.g. `graphml`.
    pub fn extension(self) -> String {
        self.wire_name().to_ascii_lowercase()
    }
}

/// Parses a format name case-insensitively (`sif`, `GraphML`, `cyjs`, …).
impl std::str::FromStr for ExportFormat {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CX" => Ok(ExportFormat::Cx),
            "CYJS" => Ok(ExportFormat::Cyjs),
            "GRAPHML" => Ok(ExportFormat::GraphMl),
            "NNF" => Ok(ExportFormat::Nnf),
            "SIF" => Ok(ExportFormat::Sif),
            "XGMML" => Ok(ExportFormat::Xgmml),
            "CYS" => Ok(ExportFormat::Cys),
            _ => Err(format!(
                "unknown export format {:?}; expected one of: cx, cyjs, graphml, nnf, sif, xgmml, cys",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Append `.<ext>` unless the file name already ends with it, then make the
/// path absolute (Cytoscape resolves relative paths against its own working
/// directory, not ours).
pub fn export_path(filename: &Path, format: ExportFormat) -> Result<PathBuf> {
    let ext = format!(".{}", format.extension());
    let mut path = filename.to_path_buf();
    if !filename.to_string_lossy().ends_with(&ext) {
        let mut raw = path.into_os_string();
        raw.push(&ext);
        path = PathBuf::from(raw);
    }
    std::path::absolute(&path)
        .map_err(|e| CyError::InvalidInput(format!("cannot resolve {}: {e}", path.display())))
}

impl CyRestClient {
    /// Number of networks in the session.
    pub async fn get_network_count(&self) -> Result<u64> {
        let res: CountResponse = self.get(endpoints::NETWORK_COUNT, &[]).await?;
        Ok(res.count)
    }

    /// SUIDs of every network in the session.
    pub async fn get_network_suids(&self) -> Result<Vec<Suid>> {
        self.get(endpoints::NETWORKS, &[]).await
    }

    /// Names of every network in the session, in SUID-list order.
    pub async fn get_network_list(&self) -> Result<Vec<String>> {
        if self.get_network_count().await? == 0 {
            return Ok(vec![]);
        }
        let mut names = Vec::new();
        for suid in self.get_network_suids().await? {
            let env: NetworkEnvelope = self.get(&endpoints::network(suid), &[]).await?;
            names.push(env.data.name);
        }
        Ok(names)
    }

    /// Resolve a network reference to its SUID.
    ///
    /// - A name must match an existing network exactly.
    /// - A SUID must exist in the session and is returned as is.
    /// - `Current` asks Cytoscape for the current network.
    pub async fn get_network_suid(&self, network: impl Into<NetworkRef>) -> Result<Suid> {
        let title = match network.into() {
            NetworkRef::Suid(suid) => {
                if self.get_network_suids().await?.contains(&suid) {
                    return Ok(suid);
                }
                return Err(CyError::NetworkNotFound(suid.to_string()));
            }
            NetworkRef::Name(name) => {
                if !self.get_network_list().await?.contains(&name) {
                    return Err(CyError::NetworkNotFound(name));
                }
                name
            }
            NetworkRef::Current => "current".to_string(),
        };

        let cmd = Command::new("network get attribute")
            .arg("network", &title)
            .arg("namespace", "default")
            .arg("columnList", "SUID");
        let rows: Vec<NetworkAttribute> = self.command(&cmd).await?;
        rows.first()
            .map(|r| r.suid)
            .ok_or(CyError::NetworkNotFound(title))
    }

    /// Resolve a network reference to its name.
    pub async fn get_network_name(&self, network: impl Into<NetworkRef>) -> Result<String> {
        let suid = match network.into() {
            NetworkRef::Name(name) => {
                if self.get_network_list().await?.contains(&name) {
                    return Ok(name);
                }
                return Err(CyError::NetworkNotFound(name));
            }
            NetworkRef::Suid(suid) => suid,
            NetworkRef::Current => self.get_network_suid(NetworkRef::Current).await?,
        };

        let names: Vec<NetworkName> = self
            .get(
                endpoints::NETWORK_NAMES,
                &[("column", "suid".to_string()), ("query", suid.to_string())],
            )
            .await?;
        names
            .into_iter()
            .next()
            .map(|n| n.name)
            .ok_or_else(|| CyError::NetworkNotFound(suid.to_string()))
    }

    /// Make `network` the current network.
    pub async fn set_current_network(&self, network: impl Into<NetworkRef>) -> Result<()> {
        let suid = self.get_network_suid(network).await?;
        self.command_unit(&Command::new("network set current").arg("network", suid.command_arg()))
            .await
    }

    /// Give `network` a new title. Cytoscape rejects duplicate titles.
    pub async fn rename_network(&self, title: &str, network: impl Into<NetworkRef>) -> Result<()> {
        validate_title(title).map_err(|e| CyError::InvalidInput(e.to_string()))?;
        let suid = self.get_network_suid(network).await?;
        self.command_unit(
            &Command::new("network rename")
                .arg("name", title)
                .arg("sourceNetwork", suid.command_arg()),
        )
        .await
    }

    /// Export a network (or, for [`ExportFormat::Cys`], the whole session)
    /// and return the absolute path written.
    ///
    /// Without a filename the network's name is used. Without a network the
    /// current network is exported.
    pub async fn export_network(
        &self,
        filename: Option<&Path>,
        format: ExportFormat,
        network: Option<NetworkRef>,
    ) -> Result<PathBuf> {
        let base = match filename {
            Some(f) => f.to_path_buf(),
            None => PathBuf::from(
                self.get_network_name(network.clone().unwrap_or_default())
                    .await?,
            ),
        };
        let path = export_path(&base, format)?;
        if path.exists() {
            warn!(path = %path.display(), "export target exists; Cytoscape will ask before overwriting");
        }

        let cmd = if format == ExportFormat::Cys {
            info!(path = %path.display(), "saving session");
            Command::new("session save as").arg("file", path.display())
        } else {
            let network_arg = match network {
                Some(n) => Some(self.get_network_suid(n).await?.command_arg()),
                None => None,
            };
            Command::new("network export")
                .arg_opt("network", network_arg)
                .arg("options", format.wire_name())
                .arg("OutputFile", path.display())
        };
        self.command_unit(&cmd).await?;
        Ok(path)
    }

    pub async fn delete_network(&self, network: impl Into<NetworkRef>) -> Result<()> {
        let suid = self.get_network_suid(network).await?;
        info!(%suid, "deleting network");
        self.delete(&endpoints::network(suid)).await
    }

    pub async fn delete_all_networks(&self) -> Result<()> {
        info!("deleting all networks");
        self.delete(endpoints::NETWORKS).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parse_is_case_insensitive() {
        assert_eq!("graphml".parse::<ExportFormat>(), Ok(ExportFormat::GraphMl));
        assert_eq!("CyJs".parse::<ExportFormat>(), Ok(ExportFormat::Cyjs));
        assert!("png".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn graphml_keeps_mixed_case_on_the_wire() {
        assert_eq!(ExportFormat::GraphMl.wire_name(), "GraphML");
        assert_eq!(ExportFormat::GraphMl.extension(), "graphml");
    }

    #[test]
    fn extension_appended_once() {
        let p = export_path(Path::new("/tmp/galFiltered"), ExportFormat::Sif).unwrap();
        assert_eq!(p, PathBuf::from("/tmp/galFiltered.sif"));
        let p = export_path(Path::new("/tmp/galFiltered.sif"), ExportFormat::Sif).unwrap();
        assert_eq!(p, PathBuf::from("/tmp/galFiltered.sif"));
    }

    #[test]
    fn names_with_other_extensions_get_the_new_one() {
        let p = export_path(Path::new("/tmp/net.sif"), ExportFormat::Cyjs).unwrap();
        assert_eq!(p, PathBuf::from("/tmp/net.sif.cyjs"));
    }

    #[test]
    fn relative_paths_become_absolute() {
        let p = export_path(Path::new("out"), ExportFormat::Cx).unwrap();
        assert!(p.is_absolute());
        assert!(p.ends_with("out.cx"));
    }
}
