/* src/server/core/rust/src/controller.rs */

//! Framework entry point: one request in, one dispatch outcome out.
//!
//! Adapter crates construct a `Controller` once and call `dispatch` per
//! request; the controller owns no per-request state, so sharing it behind
//! an `Arc` across workers is safe.

use crate::config::Config;
use crate::errors::PlumeError;
use crate::invoker::{instantiate_ajax, instantiate_page};
use crate::registry::HandlerRegistry;
use crate::route::{RouteRequest, RouteResolver};
use crate::wrapper::PageWrapper;

/// Outcome of one dispatched request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
  /// A full rendered document.
  Document { html: String, status: u16 },
  /// An ajax JSON payload.
  Ajax { body: String, status: u16 },
}

pub struct Controller {
  config: Config,
  registry: HandlerRegistry,
}

impl Controller {
  pub fn new(config: Config, registry: HandlerRegistry) -> Self {
    Self { config, registry }
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn dispatch(&self, request: &RouteRequest) -> Result<Dispatch, PlumeError> {
    let resolver = RouteResolver::new(&self.config.aliases, &self.registry);
    let route = resolver.resolve(request);
    if route.is_ajax {
      self.dispatch_ajax(request, &route)
    } else {
      self.dispatch_page(request, &route)
    }
  }

  fn dispatch_page(
    &self,
    request: &RouteRequest,
    route: &crate::route::ResolvedRoute,
  ) -> Result<Dispatch, PlumeError> {
    let mut invoked = instantiate_page(&self.registry, route, request, self.config.developer)?;
    let wrapper = PageWrapper::new(&self.config, &self.registry);
    let html = wrapper.render(&mut invoked)?;
    let status = if route.not_found { 404 } else { 200 };
    Ok(Dispatch::Document { html, status })
  }

  fn dispatch_ajax(
    &self,
    request: &RouteRequest,
    route: &crate::route::ResolvedRoute,
  ) -> Result<Dispatch, PlumeError> {
    if route.bad_request {
      let body = serde_json::json!({ "content": "Bad Request" }).to_string();
      return Ok(Dispatch::Ajax { body, status: 400 });
    }

    let mut invoked = instantiate_ajax(&self.registry, route, request, self.config.developer)?;
    let content = invoked.handler.render(&invoked.context)?;

    let mut payload = serde_json::Map::new();
    payload.insert("content".to_string(), serde_json::Value::String(content));
    if self.config.developer {
      if let Some(factory) = self.registry.lookup_module("debugger") {
        let mut module = factory();
        let debug = module.render_ajax(&invoked.context)?;
        payload.insert("debug".to_string(), serde_json::Value::String(debug));
      }
    }

    Ok(Dispatch::Ajax { body: serde_json::Value::Object(payload).to_string(), status: 200 })
  }
}
