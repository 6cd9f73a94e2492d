//! Layout and visual style, as far as network creation needs them.

use tracing::debug;

use cyrest::NetworkRef;

use crate::client::CyRestClient;
use crate::command::Command;
use crate::error::Result;

impl CyRestClient {
    /// Lay out a network. `None` applies the user's preferred layout.
    pub async fn layout_network(&self, name: Option<&str>, network: impl Into<NetworkRef>) -> Result<()> {
        let net = self.get_network_suid(network).await?;
        let cmd = match name {
            None => Command::new("layout apply preferred").arg("networkSelected", net.command_arg()),
            Some(layout) => Command::new(format!("layout {layout}")).arg("network", net.command_arg()),
        };
        debug!(network = %net, layout = name.unwrap_or("preferred"), "applying layout");
        self.command_unit(&cmd).await
    }

    /// Apply a named visual style to a network.
    pub async fn apply_style(&self, style: &str, network: impl Into<NetworkRef>) -> Result<()> {
        let net = self.get_network_suid(network).await?;
        self.set_current_network(net).await?;
        debug!(network = %net, style, "applying style");
        self.command_unit(&Command::new("vizmap apply").arg("styles", style))
            .await
    }
}
