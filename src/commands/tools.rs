use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::ErrorData as McpError;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ServerHandler};
use tracing::info;

use crate::commands::filemod;
use crate::core::state::SharedState;
use crate::core::types::FileMod;

/// Tool implementations to be registered with MCP
#[derive(Clone)]
pub struct FileModTools {
    state: SharedState,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl FileModTools {
    pub fn new(state: SharedState) -> Self {
        Self {
            state,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "filemod",
        description = "Universal File Transformer (UFT): creates, edits, and transforms files of any type through targeted regex search and replace. Creates the file and its parent directories when missing, then replaces every match of the pattern across the file's entire content."
    )]
    async fn file_mod(
        &self,
        Parameters(request): Parameters<FileMod>,
    ) -> Result<CallToolResult, McpError> {
        info!("filemod tool called for {}", request.file_path);

        let report = filemod::file_mod_internal(&self.state, &request).await;

        Ok(CallToolResult::success(vec![Content::text(report)]))
    }
}

#[tool_handler]
impl ServerHandler for FileModTools {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Filemod exposes a single regex-powered file transformation tool. It creates \
                 the target file on demand, replaces every match of a pattern across the \
                 file's full content, and reports how many replacements were made."
                    .to_string(),
            ),
            ..Default::default()
        }
    }
}
