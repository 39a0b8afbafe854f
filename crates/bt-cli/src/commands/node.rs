//! Node.js project lifecycle command implementation.

use std::io::Write;

use tracing::debug;

use bt_api::{PanelClient, PanelConfig, ProjectAction};

use crate::cli::ProjectCommands;
use crate::error::CliError;
use crate::output::{OperationReport, OutputFormat};

/// Node.js project command executor.
pub struct NodeCommand {
    config: PanelConfig,
}

impl NodeCommand {
    /// Create a new node project command.
    #[must_use]
    pub fn new(config: PanelConfig) -> Self {
        Self { config }
    }

    /// Execute a lifecycle subcommand against the panel.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the response cannot be
    /// decoded, or the panel reports `status = false`.
    pub async fn execute<W: Write>(
        &self,
        writer: &mut W,
        format: &OutputFormat,
        command: &ProjectCommands,
    ) -> Result<(), CliError> {
        let client = PanelClient::new(self.config.clone())?;
        let name = command.name();
        let action = command.action();
        debug!(project = %name, action = %action, "node project operation");

        let response = match action {
            ProjectAction::Start => client.start_node_project(name).await?,
            ProjectAction::Stop => client.stop_node_project(name).await?,
            ProjectAction::Restart => client.restart_node_project(name).await?,
        };

        if !response.status {
            return Err(CliError::Panel(response.message().to_string()));
        }

        let report = OperationReport {
            project: name.to_string(),
            action: action.to_string(),
            status: response.status,
            message: response.message().to_string(),
        };
        format.write(writer, &report)?;
        Ok(())
    }
}
