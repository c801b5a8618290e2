/* src/server/core/rust/src/errors.rs */

use std::fmt;

#[derive(Debug)]
pub struct PlumeError {
  code: String,
  message: String,
  status: u16,
}

fn default_status(code: &str) -> u16 {
  match code {
    "BAD_REQUEST" => 400,
    "NOT_FOUND" => 404,
    "RESOURCE_MISSING" | "HANDLER_LOAD" | "HANDLER_RUNTIME" => 500,
    _ => 500,
  }
}

impl PlumeError {
  pub fn new(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
    Self { code: code.into(), message: message.into(), status }
  }

  pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
    let code = code.into();
    let status = default_status(&code);
    Self { code, message: message.into(), status }
  }

  /// A required template resource is absent. Fatal, no partial document.
  pub fn resource_missing(msg: impl Into<String>) -> Self {
    Self::with_code("RESOURCE_MISSING", msg)
  }

  /// Neither registry tier holds the resolved handler identity.
  pub fn handler_load(msg: impl Into<String>) -> Self {
    Self::with_code("HANDLER_LOAD", msg)
  }

  pub fn bad_request(msg: impl Into<String>) -> Self {
    Self::with_code("BAD_REQUEST", msg)
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::with_code("NOT_FOUND", msg)
  }

  /// An error raised by handler logic itself; propagates unmodified and is
  /// never reinterpreted as a load failure.
  pub fn handler_runtime(msg: impl Into<String>) -> Self {
    Self::with_code("HANDLER_RUNTIME", msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }
}

impl fmt::Display for PlumeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for PlumeError {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_status_known_codes() {
    assert_eq!(default_status("BAD_REQUEST"), 400);
    assert_eq!(default_status("NOT_FOUND"), 404);
    assert_eq!(default_status("RESOURCE_MISSING"), 500);
    assert_eq!(default_status("HANDLER_LOAD"), 500);
    assert_eq!(default_status("HANDLER_RUNTIME"), 500);
  }

  #[test]
  fn default_status_unknown_code() {
    assert_eq!(default_status("CUSTOM"), 500);
  }

  #[test]
  fn convenience_constructors() {
    assert_eq!(PlumeError::resource_missing("x").status(), 500);
    assert_eq!(PlumeError::handler_load("x").status(), 500);
    assert_eq!(PlumeError::bad_request("x").status(), 400);
    assert_eq!(PlumeError::not_found("x").status(), 404);
    assert_eq!(PlumeError::handler_runtime("x").status(), 500);
  }

  #[test]
  fn new_explicit_status() {
    let err = PlumeError::new("HANDLER_RUNTIME", "boom", 502);
    assert_eq!(err.code(), "HANDLER_RUNTIME");
    assert_eq!(err.message(), "boom");
    assert_eq!(err.status(), 502);
  }

  #[test]
  fn display_format() {
    let err = PlumeError::bad_request("missing ajax handler");
    assert_eq!(err.to_string(), "BAD_REQUEST: missing ajax handler");
  }
}
