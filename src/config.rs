//
//  config.rs
//  Routemap
//

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::format::OutputFormat;
use crate::mapping::MappingKind;

/// Top-level Routemap configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapperConfig {
    #[serde(default)]
    pub family: FamilyConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Qualified names of the mapping-annotation family.
///
/// `request_mapping` doubles as the class-level prefix annotation;
/// `path_variable` marks parameters bound to `{name}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyConfig {
    #[serde(default = "default_request_mapping")]
    pub request_mapping: String,
    #[serde(default = "default_path_variable")]
    pub path_variable: String,
    #[serde(default = "default_get_mapping")]
    pub get_mapping: String,
    #[serde(default = "default_post_mapping")]
    pub post_mapping: String,
    #[serde(default = "default_put_mapping")]
    pub put_mapping: String,
    #[serde(default = "default_delete_mapping")]
    pub delete_mapping: String,
    #[serde(default = "default_patch_mapping")]
    pub patch_mapping: String,
}

/// Output settings for the CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

const SPRING_PACKAGE: &str = "org.springframework.web.bind.annotation";

fn spring(name: &str) -> String {
    format!("{SPRING_PACKAGE}.{name}")
}

fn default_request_mapping() -> String {
    spring("RequestMapping")
}

fn default_path_variable() -> String {
    spring("PathVariable")
}

fn default_get_mapping() -> String {
    spring("GetMapping")
}

fn default_post_mapping() -> String {
    spring("PostMapping")
}

fn default_put_mapping() -> String {
    spring("PutMapping")
}

fn default_delete_mapping() -> String {
    spring("DeleteMapping")
}

fn default_patch_mapping() -> String {
    spring("PatchMapping")
}

impl Default for FamilyConfig {
    fn default() -> Self {
        Self {
            request_mapping: default_request_mapping(),
            path_variable: default_path_variable(),
            get_mapping: default_get_mapping(),
            post_mapping: default_post_mapping(),
            put_mapping: default_put_mapping(),
            delete_mapping: default_delete_mapping(),
            patch_mapping: default_patch_mapping(),
        }
    }
}

impl FamilyConfig {
    /// Which mapping variant a qualified annotation name denotes. Exact match only.
    pub fn kind_of(&self, qualified_name: &str) -> Option<MappingKind> {
        let table = [
            (&self.get_mapping, MappingKind::Get),
            (&self.post_mapping, MappingKind::Post),
            (&self.put_mapping, MappingKind::Put),
            (&self.delete_mapping, MappingKind::Delete),
            (&self.patch_mapping, MappingKind::Patch),
            (&self.request_mapping, MappingKind::Request),
        ];
        table
            .into_iter()
            .find(|(name, _)| name.as_str() == qualified_name)
            .map(|(_, kind)| kind)
    }
}

impl MapperConfig {
    /// Load config from a TOML file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }
}
