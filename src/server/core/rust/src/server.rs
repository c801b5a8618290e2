/* src/server/core/rust/src/server.rs */

use crate::config::Config;
use crate::controller::Controller;
use crate::page::{AjaxHandler, ModuleHandler, PageHandler};
use crate::registry::HandlerRegistry;

use std::sync::Arc;

/// Builder assembling a framework instance: configuration plus handler
/// registrations. Adapter crates consume the finished `Controller`.
pub struct PlumeServer {
  config: Config,
  registry: HandlerRegistry,
}

impl PlumeServer {
  pub fn new() -> Self {
    Self { config: Config::default(), registry: HandlerRegistry::new() }
  }

  pub fn config(mut self, config: Config) -> Self {
    self.config = config;
    self
  }

  /// Register a project page handler for `(page, action)`.
  pub fn page<F>(mut self, page: &str, action: &str, factory: F) -> Self
  where
    F: Fn() -> Box<dyn PageHandler> + Send + Sync + 'static,
  {
    self.registry.register_page(page, action, Arc::new(factory));
    self
  }

  /// Register a project ajax handler for `(page, action)`.
  pub fn ajax<F>(mut self, page: &str, action: &str, factory: F) -> Self
  where
    F: Fn() -> Box<dyn AjaxHandler> + Send + Sync + 'static,
  {
    self.registry.register_ajax(page, action, Arc::new(factory));
    self
  }

  /// Register a named module. Registering an existing name (such as
  /// `debugger`) replaces the framework implementation.
  pub fn module<F>(mut self, name: &str, factory: F) -> Self
  where
    F: Fn() -> Box<dyn ModuleHandler> + Send + Sync + 'static,
  {
    self.registry.register_module(name, Arc::new(factory));
    self
  }

  /// Consume the builder, returning the request-dispatch entry point.
  pub fn into_controller(self) -> Controller {
    Controller::new(self.config, self.registry)
  }
}

impl Default for PlumeServer {
  fn default() -> Self {
    Self::new()
  }
}
