/* src/server/core/rust/src/config.rs */

//! Layered configuration.
//!
//! Two TOML layers are merged at startup: the framework defaults shipped
//! with this crate, then the project file. A layer defines a key only when
//! no earlier layer did (first writer wins). The result is an immutable
//! `Config` passed by reference into every component that needs it; nothing
//! reads configuration ambiently after startup.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::alias::AliasTable;
use crate::errors::PlumeError;

/// Framework defaults, first layer of the merge.
const FRAMEWORK_DEFAULTS: &str = include_str!("../config/plume.toml");

#[derive(Debug, Clone, Default)]
pub struct Config {
  pub file_root: Option<PathBuf>,
  pub vuetify: bool,
  pub vuetify_theme: Option<String>,
  pub axios: bool,
  pub developer: bool,
  pub aliases: AliasTable,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigLayer {
  #[serde(default)]
  config: LayerValues,
  #[serde(default)]
  aliases: Option<AliasTable>,
}

#[derive(Debug, Default, Deserialize)]
struct LayerValues {
  file_root: Option<String>,
  vuetify: Option<bool>,
  vuetify_theme: Option<String>,
  axios: Option<bool>,
  developer: Option<bool>,
}

fn parse_layer(source: &str, origin: &str) -> Result<ConfigLayer, PlumeError> {
  toml::from_str(source)
    .map_err(|e| PlumeError::with_code("CONFIG_INVALID", format!("{origin}: {e}")))
}

impl Config {
  /// Merge the framework defaults with an optional project layer.
  pub fn from_project_source(project: Option<&str>) -> Result<Self, PlumeError> {
    Self::from_layers(FRAMEWORK_DEFAULTS, project)
  }

  /// Merge two explicit TOML layers, first writer wins per key. The alias
  /// table is read from the project layer only.
  pub fn from_layers(framework: &str, project: Option<&str>) -> Result<Self, PlumeError> {
    let framework = parse_layer(framework, "framework config")?;
    let project = match project {
      Some(source) => parse_layer(source, "project config")?,
      None => ConfigLayer::default(),
    };

    let first = framework.config;
    let second = project.config;

    Ok(Self {
      file_root: first.file_root.or(second.file_root).map(PathBuf::from),
      vuetify: first.vuetify.or(second.vuetify).unwrap_or(false),
      vuetify_theme: first.vuetify_theme.or(second.vuetify_theme),
      axios: first.axios.or(second.axios).unwrap_or(false),
      developer: first.developer.or(second.developer).unwrap_or(false),
      aliases: project.aliases.unwrap_or_default(),
    })
  }

  /// Load the project layer from disk; a missing file means framework
  /// defaults only.
  pub fn load(project_path: &Path) -> Result<Self, PlumeError> {
    match std::fs::read_to_string(project_path) {
      Ok(source) => Self::from_project_source(Some(&source)),
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::from_project_source(None),
      Err(e) => Err(PlumeError::resource_missing(format!("{}: {e}", project_path.display()))),
    }
  }

  /// Base directory for wrapper, page, and component templates.
  pub fn template_root(&self) -> PathBuf {
    self.file_root.clone().unwrap_or_else(|| PathBuf::from("templates"))
  }
}
