//! Configuration value types resolved per document or workspace folder.
//!
//! These mirror the settings payloads a client sends over the configuration
//! channel, so every field uses the camelCase wire name.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Flat environment mapping, cached per workspace folder.
pub type Environment = HashMap<String, String>;

/// A feature switch that is either a plain boolean or a configuration block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Toggle<T> {
    Switch(bool),
    Options(T),
}

/// How a tool is invoked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RubyCommandSettings {
    pub command: Option<String>,
    pub use_bundler: Option<bool>,
}

/// RuboCop lint configuration, extending the base command settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuboCopLintSettings {
    #[serde(flatten)]
    pub command: RubyCommandSettings,
    pub lint: Option<bool>,
    pub only: Option<Vec<String>>,
    pub except: Option<Vec<String>>,
    pub require: Option<Vec<String>>,
    pub rails: Option<bool>,
    pub force_exclusion: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintSettings {
    pub fasterer: Option<Toggle<RubyCommandSettings>>,
    pub reek: Option<Toggle<RubyCommandSettings>>,
    pub rubocop: Option<Toggle<RuboCopLintSettings>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formatter {
    Rubocop,
    Standard,
    Rufo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interpreter {
    pub command_path: Option<String>,
}

/// Resolved per-document Ruby configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RubySettings {
    pub use_bundler: bool,
    pub workspace_folder_uri: String,
    pub interpreter: Option<Interpreter>,
    pub path_to_bundler: String,
    #[serde(default)]
    pub lint: LintSettings,
    pub format: Toggle<Formatter>,
}
