/* src/server/core/rust/src/invoker.rs */

//! Handler instantiation with namespace fallback.
//!
//! The project tier is tried first, the framework tier second. A miss in
//! both is `HANDLER_LOAD` — distinct from an error raised by handler logic,
//! which propagates unmodified and never triggers the fallback.

use crate::errors::PlumeError;
use crate::page::{AjaxHandler, CallContext, PageHandler};
use crate::registry::{CallKind, HandlerIdentity, HandlerRegistry, RegistryLookup};
use crate::route::{ResolvedRoute, RouteRequest};

/// An instantiated page handler paired with its call context.
pub struct InvokedPage {
  pub handler: Box<dyn PageHandler>,
  pub context: CallContext,
}

impl std::fmt::Debug for InvokedPage {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("InvokedPage").field("context", &self.context).finish_non_exhaustive()
  }
}

/// An instantiated ajax handler paired with its call context.
pub struct InvokedAjax {
  pub handler: Box<dyn AjaxHandler>,
  pub context: CallContext,
}

fn call_context(request: &RouteRequest, debug_mode: bool) -> CallContext {
  CallContext {
    called_page: request.page.clone(),
    called_action: request.action.clone(),
    called_argument: request.argument.clone(),
    debug_mode,
  }
}

pub fn instantiate_page(
  registry: &HandlerRegistry,
  route: &ResolvedRoute,
  request: &RouteRequest,
  debug_mode: bool,
) -> Result<InvokedPage, PlumeError> {
  let identity = HandlerIdentity::derive(&route.page, &route.action, CallKind::Render);
  let factory = match registry.lookup_page(&route.page, &route.action) {
    RegistryLookup::Project(factory) => {
      tracing::debug!(identity = %identity.project, "instantiating project handler");
      factory
    }
    RegistryLookup::Framework(factory) => {
      tracing::debug!(identity = %identity.framework, "instantiating framework handler");
      factory
    }
    RegistryLookup::NotRegistered => {
      return Err(PlumeError::handler_load(format!(
        "neither {} nor {} is registered",
        identity.project, identity.framework
      )));
    }
  };
  Ok(InvokedPage { handler: factory(), context: call_context(request, debug_mode) })
}

pub fn instantiate_ajax(
  registry: &HandlerRegistry,
  route: &ResolvedRoute,
  request: &RouteRequest,
  debug_mode: bool,
) -> Result<InvokedAjax, PlumeError> {
  let identity = HandlerIdentity::derive(&route.page, &route.action, CallKind::Ajax);
  let factory = match registry.lookup_ajax(&route.page, &route.action) {
    RegistryLookup::Project(factory) => factory,
    RegistryLookup::Framework(factory) => {
      tracing::debug!(identity = %identity.framework, "instantiating framework ajax handler");
      factory
    }
    RegistryLookup::NotRegistered => {
      return Err(PlumeError::handler_load(format!(
        "neither {} nor {} is registered",
        identity.project, identity.framework
      )));
    }
  };
  Ok(InvokedAjax { handler: factory(), context: call_context(request, debug_mode) })
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;
  use crate::page::PageOutput;

  struct StubPage;

  impl PageHandler for StubPage {
    fn generate_content(&mut self, ctx: &CallContext) -> Result<PageOutput, PlumeError> {
      Ok(PageOutput::new(format!("{}::{}", ctx.called_page, ctx.called_action)))
    }
  }

  struct FailingPage;

  impl PageHandler for FailingPage {
    fn generate_content(&mut self, _ctx: &CallContext) -> Result<PageOutput, PlumeError> {
      Err(PlumeError::handler_runtime("database unreachable"))
    }
  }

  fn route(page: &str, action: &str) -> ResolvedRoute {
    ResolvedRoute {
      page: page.to_string(),
      action: action.to_string(),
      is_ajax: false,
      not_found: false,
      bad_request: false,
    }
  }

  fn request(page: &str, action: &str) -> RouteRequest {
    RouteRequest::new(Some(page.to_string()), Some(action.to_string()), None, false)
  }

  #[test]
  fn context_carries_pre_fallback_names() {
    let mut registry = HandlerRegistry::new();
    registry.register_page("blog", "default", Arc::new(|| Box::new(StubPage)));
    // the request asked for an action that fell back to "default"
    let invoked =
      instantiate_page(&registry, &route("blog", "default"), &request("weblog", "archive"), false)
        .expect("instantiate");
    assert_eq!(invoked.context.called_page, "weblog");
    assert_eq!(invoked.context.called_action, "archive");
  }

  #[test]
  fn framework_tier_is_used_when_project_misses() {
    let registry = HandlerRegistry::new();
    let invoked =
      instantiate_page(&registry, &route("oops", "default"), &request("ghost", "default"), false)
        .expect("instantiate");
    assert!(!invoked.context.debug_mode);
  }

  #[test]
  fn both_tiers_missing_is_handler_load() {
    let registry = HandlerRegistry::empty();
    let err =
      instantiate_page(&registry, &route("ghost", "default"), &request("ghost", "default"), false)
        .unwrap_err();
    assert_eq!(err.code(), "HANDLER_LOAD");
    assert!(err.message().contains("project::Pages/Ghost/DefaultAction"));
    assert!(err.message().contains("plume::Pages/Ghost/DefaultAction"));
  }

  #[test]
  fn handler_runtime_error_propagates_unmodified() {
    let mut registry = HandlerRegistry::new();
    registry.register_page("home", "default", Arc::new(|| Box::new(FailingPage)));
    let mut invoked =
      instantiate_page(&registry, &route("home", "default"), &request("home", "default"), false)
        .expect("instantiate");
    let err = invoked.handler.generate_content(&invoked.context).unwrap_err();
    assert_eq!(err.code(), "HANDLER_RUNTIME");
    assert_eq!(err.message(), "database unreachable");
  }
}
