use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// Argument bundle accepted by the `filemod` tool
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct FileMod {
    #[schemars(
        description = "Path of the file to transform; created (with parent directories) when missing. Relative paths resolve against the server workspace"
    )]
    pub file_path: String,

    #[schemars(description = "Regular expression matched against the entire file content")]
    pub regex_target: String,

    #[schemars(
        description = "Replacement text; capture groups are referenced as $1 or ${name}, a literal dollar sign is written $$"
    )]
    pub replacement: String,
}
