/// Bukkit plugin descriptor (`plugin.yml`)
///
/// Bukkit refuses to load a jar without this file. It is only written when
/// requested, so the default build invokes the toolchain with the generated
/// class alone.

use serde::{Deserialize, Serialize};
use voidscript_parser::PluginMetadata;

/// File name Bukkit looks for at the jar root
pub const DESCRIPTOR_FILE: &str = "plugin.yml";

const DEFAULT_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    pub name: String,
    pub version: String,
    /// Fully qualified main class; generated classes live in the default package
    pub main: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub author: Option<String>,
}

impl PluginDescriptor {
    pub fn from_metadata(metadata: &PluginMetadata) -> Self {
        Self {
            name: metadata.name.clone(),
            version: metadata
                .version
                .clone()
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            main: metadata.name.clone(),
            author: metadata.author.clone(),
        }
    }

    pub fn to_yaml(&self) -> crate::Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
