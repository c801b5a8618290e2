/* src/server/injector/rust/src/lib.rs */

//! Named-placeholder substitution over text resources.
//!
//! A template is plain text carrying `<!--plume:NAME-->` markers. Values are
//! assigned by name and spliced in when the template is rendered; markers
//! that never received a value are stripped from the output. A resource may
//! also contain named blocks (`<!--plume:block:NAME-->` ...
//! `<!--plume:endblock-->`) that can be loaded in isolation.

use std::fmt;
use std::path::{Path, PathBuf};

const MARKER_OPEN: &str = "<!--plume:";
const MARKER_CLOSE: &str = "-->";
const BLOCK_PREFIX: &str = "block:";
const BLOCK_END: &str = "endblock";

#[derive(Debug)]
pub enum TemplateError {
  Io { path: PathBuf, source: std::io::Error },
  BlockNotFound { path: PathBuf, block: String },
}

impl fmt::Display for TemplateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Io { path, source } => write!(f, "template {}: {source}", path.display()),
      Self::BlockNotFound { path, block } => {
        write!(f, "template {} has no block '{block}'", path.display())
      }
    }
  }
}

impl std::error::Error for TemplateError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io { source, .. } => Some(source),
      Self::BlockNotFound { .. } => None,
    }
  }
}

/// A loaded template plus the placeholder values assigned so far.
#[derive(Debug, Clone, Default)]
pub struct Template {
  source: String,
  values: Vec<(String, String)>,
}

impl Template {
  pub fn from_source(source: impl Into<String>) -> Self {
    Self { source: source.into(), values: Vec::new() }
  }

  /// Load a template resource from disk.
  pub fn load(path: &Path) -> Result<Self, TemplateError> {
    let source = std::fs::read_to_string(path)
      .map_err(|source| TemplateError::Io { path: path.to_path_buf(), source })?;
    Ok(Self::from_source(source))
  }

  /// Load one named block of a template resource.
  pub fn load_block(path: &Path, block: &str) -> Result<Self, TemplateError> {
    let full = Self::load(path)?;
    let open = format!("{MARKER_OPEN}{BLOCK_PREFIX}{block}{MARKER_CLOSE}");
    let close = format!("{MARKER_OPEN}{BLOCK_END}{MARKER_CLOSE}");

    let start = full.source.find(&open).map(|pos| pos + open.len());
    let body = start.and_then(|start| {
      full.source[start..].find(&close).map(|end| &full.source[start..start + end])
    });
    match body {
      Some(body) => Ok(Self::from_source(body.trim())),
      None => {
        Err(TemplateError::BlockNotFound { path: path.to_path_buf(), block: block.to_string() })
      }
    }
  }

  /// Assign a placeholder value. Reassigning a name replaces the earlier
  /// value; substitution happens at render time.
  pub fn substitute(&mut self, name: &str, value: impl Into<String>) {
    let value = value.into();
    match self.values.iter_mut().find(|(existing, _)| existing == name) {
      Some((_, slot)) => *slot = value,
      None => self.values.push((name.to_string(), value)),
    }
  }

  fn lookup(&self, name: &str) -> Option<&str> {
    self.values.iter().find(|(existing, _)| existing == name).map(|(_, value)| value.as_str())
  }

  /// Render the template: every marker is replaced by its assigned value,
  /// unassigned markers (block delimiters included) disappear.
  pub fn render(&self) -> String {
    let mut out = String::with_capacity(self.source.len());
    let mut rest = self.source.as_str();

    while let Some(start) = rest.find(MARKER_OPEN) {
      out.push_str(&rest[..start]);
      let after = &rest[start + MARKER_OPEN.len()..];
      match after.find(MARKER_CLOSE) {
        Some(end) => {
          let name = after[..end].trim();
          if let Some(value) = self.lookup(name) {
            out.push_str(value);
          }
          rest = &after[end + MARKER_CLOSE.len()..];
        }
        None => {
          // Unterminated marker, emit verbatim
          out.push_str(&rest[start..]);
          rest = "";
        }
      }
    }

    out.push_str(rest);
    out
  }
}
