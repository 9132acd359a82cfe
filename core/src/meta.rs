//! Static script metadata, deserialized from an embedded TOML document.

use crate::{Error, Result};
use std::str::FromStr;

/// Who maintains the script.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
pub struct Author {
    pub name: String,
    pub email: String,
    /// Author homepage.
    #[serde(default)]
    pub url: Option<String>,
}

/// Identity and documentation of a script.
///
/// Expected TOML keys:
/// - `name`, `description`, `version`, `update_time`, `readme_url` as strings
/// - `[author]` table with `name`, `email` and an optional `url`
/// - optional `update_log` as a (multi-line) string
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
pub struct ScriptMeta {
    pub name: String,
    pub description: String,
    pub version: String,
    pub update_time: String,
    pub author: Author,
    pub readme_url: String,
    #[serde(default)]
    pub update_log: Option<String>,
}

impl ScriptMeta {
    /// `Name <email>`
    pub fn author_line(&self) -> String {
        format!("{} <{}>", self.author.name, self.author.email)
    }

    /// `name version`, as printed by `--version`.
    pub fn version_line(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}

impl FromStr for ScriptMeta {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}
