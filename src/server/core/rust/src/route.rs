/* src/server/core/rust/src/route.rs */

//! Route resolution: alias lookup plus the existence-probing fallback chain.
//!
//! The chain tolerates three independent failure causes without handlers
//! pre-declaring their supported actions: an unresolvable action alias, a
//! page that only implements its default action, and a page that does not
//! exist at all. The probe order is part of the framework's observable
//! behavior — which handler ultimately loads depends on it — so the probes
//! run in this exact order, redundancy included.

use crate::alias::AliasTable;
use crate::registry::{CallKind, HandlerRegistry};

/// Immutable request input. `page`/`action` default to `"home"`/`"default"`
/// when absent from the incoming request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
  pub page: String,
  pub action: String,
  pub argument: Option<String>,
  pub is_ajax: bool,
}

impl RouteRequest {
  pub fn new(
    page: Option<String>,
    action: Option<String>,
    argument: Option<String>,
    is_ajax: bool,
  ) -> Self {
    Self {
      page: page.unwrap_or_else(|| "home".to_string()),
      action: action.unwrap_or_else(|| "default".to_string()),
      argument,
      is_ajax,
    }
  }
}

/// The canonical, registry-verified page/action pair plus status flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
  pub page: String,
  pub action: String,
  pub is_ajax: bool,
  pub not_found: bool,
  pub bad_request: bool,
}

pub struct RouteResolver<'a> {
  aliases: &'a AliasTable,
  registry: &'a HandlerRegistry,
}

impl<'a> RouteResolver<'a> {
  pub fn new(aliases: &'a AliasTable, registry: &'a HandlerRegistry) -> Self {
    Self { aliases, registry }
  }

  pub fn resolve(&self, request: &RouteRequest) -> ResolvedRoute {
    if request.is_ajax {
      return self.resolve_ajax(request);
    }

    // was the link an alias?
    let mut page = request.page.clone();
    let alias_page = self.aliases.resolve_page_alias(&page);
    if alias_page != page {
      page = alias_page;
    }

    let original_action = request.action.clone();

    // was the action an alias?
    let mut action = original_action.clone();
    let alias_action = self.aliases.resolve_action_alias(&action);
    if alias_action != action {
      action = alias_action;
    }

    // "real" page name request
    let mut found = self.registry.exists(&page, &action, CallKind::Render);

    // action not found - default action?
    if !found && action != "default" {
      action = "default".to_string();
      found = self.registry.exists(&page, &action, CallKind::Render);
    }

    // alias-resolved default missing, retry the original action name
    if !found {
      action = original_action.clone();
      found = self.registry.exists(&page, &action, CallKind::Render);
    }

    if !found && action != "default" {
      action = "default".to_string();
      found = self.registry.exists(&page, &action, CallKind::Render);
    }

    // still not found -> framework not-found page
    let mut not_found = false;
    if !found {
      tracing::debug!(%page, %action, "no handler after fallback chain, routing to oops");
      page = "oops".to_string();
      let _ = self.registry.exists(&page, &action, CallKind::Render);
      not_found = true;
    }

    ResolvedRoute { page, action, is_ajax: false, not_found, bad_request: false }
  }

  /// Ajax path: one probe against the raw pair, no alias resolution, no
  /// fallback chain.
  fn resolve_ajax(&self, request: &RouteRequest) -> ResolvedRoute {
    let found = self.registry.exists(&request.page, &request.action, CallKind::Ajax);
    if !found {
      tracing::debug!(page = %request.page, action = %request.action, "ajax handler missing");
    }
    ResolvedRoute {
      page: request.page.clone(),
      action: request.action.clone(),
      is_ajax: true,
      not_found: false,
      bad_request: !found,
    }
  }
}
