/* src/server/core/rust/src/registry.rs */

//! Static handler registry.
//!
//! Handlers are registered at startup as factories keyed by the canonical
//! `(page, action)` pair and call kind. Two tiers exist: the project tier is
//! probed first, the framework tier second; a miss in both is an explicit
//! `NotRegistered` result, never an error caught mid-construction. The
//! framework tier always carries the built-in `oops` page and the
//! `debugger` module.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::builtin;
use crate::page::{AjaxHandler, ModuleHandler, PageHandler};
use crate::strings::to_pascal_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
  Render,
  Ajax,
}

impl CallKind {
  pub fn suffix(self) -> &'static str {
    match self {
      Self::Render => "Action",
      Self::Ajax => "Ajax",
    }
  }
}

/// The fully qualified references a `(page, action, kind)` triple derives
/// to, one per namespace tier. Kept for diagnostics and load errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerIdentity {
  pub project: String,
  pub framework: String,
}

impl HandlerIdentity {
  pub fn derive(page: &str, action: &str, kind: CallKind) -> Self {
    let path =
      format!("Pages/{}/{}{}", to_pascal_case(page), to_pascal_case(action), kind.suffix());
    Self { project: format!("project::{path}"), framework: format!("plume::{path}") }
  }
}

impl fmt::Display for HandlerIdentity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} | {}", self.project, self.framework)
  }
}

pub type PageFactory = Arc<dyn Fn() -> Box<dyn PageHandler> + Send + Sync>;
pub type AjaxFactory = Arc<dyn Fn() -> Box<dyn AjaxHandler> + Send + Sync>;
pub type ModuleFactory = Arc<dyn Fn() -> Box<dyn ModuleHandler> + Send + Sync>;

/// Outcome of a two-tier lookup.
pub enum RegistryLookup<T> {
  Project(T),
  Framework(T),
  NotRegistered,
}

#[derive(Clone, PartialEq, Eq, Hash)]
struct RouteKey {
  page: String,
  action: String,
}

impl RouteKey {
  fn new(page: &str, action: &str) -> Self {
    Self { page: page.to_string(), action: action.to_string() }
  }
}

#[derive(Clone)]
pub struct HandlerRegistry {
  project_pages: HashMap<RouteKey, PageFactory>,
  project_ajax: HashMap<RouteKey, AjaxFactory>,
  framework_pages: HashMap<RouteKey, PageFactory>,
  framework_ajax: HashMap<RouteKey, AjaxFactory>,
  modules: HashMap<String, ModuleFactory>,
}

impl HandlerRegistry {
  /// A registry with the framework built-ins pre-registered.
  pub fn new() -> Self {
    let mut registry = Self::bare();
    builtin::register(&mut registry);
    registry
  }

  fn bare() -> Self {
    Self {
      project_pages: HashMap::new(),
      project_ajax: HashMap::new(),
      framework_pages: HashMap::new(),
      framework_ajax: HashMap::new(),
      modules: HashMap::new(),
    }
  }

  /// A registry without the framework built-ins. Only resolution-failure
  /// paths need this.
  #[cfg(test)]
  pub(crate) fn empty() -> Self {
    Self::bare()
  }

  pub fn register_page(&mut self, page: &str, action: &str, factory: PageFactory) {
    self.project_pages.insert(RouteKey::new(page, action), factory);
  }

  pub fn register_ajax(&mut self, page: &str, action: &str, factory: AjaxFactory) {
    self.project_ajax.insert(RouteKey::new(page, action), factory);
  }

  pub fn register_framework_page(&mut self, page: &str, action: &str, factory: PageFactory) {
    self.framework_pages.insert(RouteKey::new(page, action), factory);
  }

  pub fn register_framework_ajax(&mut self, page: &str, action: &str, factory: AjaxFactory) {
    self.framework_ajax.insert(RouteKey::new(page, action), factory);
  }

  pub fn register_module(&mut self, name: &str, factory: ModuleFactory) {
    self.modules.insert(name.to_string(), factory);
  }

  /// Existence probe across both tiers, the `handlerExists` predicate of
  /// the route resolver.
  pub fn exists(&self, page: &str, action: &str, kind: CallKind) -> bool {
    let key = RouteKey::new(page, action);
    match kind {
      CallKind::Render => {
        self.project_pages.contains_key(&key) || self.framework_pages.contains_key(&key)
      }
      CallKind::Ajax => {
        self.project_ajax.contains_key(&key) || self.framework_ajax.contains_key(&key)
      }
    }
  }

  pub fn lookup_page(&self, page: &str, action: &str) -> RegistryLookup<PageFactory> {
    let key = RouteKey::new(page, action);
    if let Some(factory) = self.project_pages.get(&key) {
      return RegistryLookup::Project(factory.clone());
    }
    if let Some(factory) = self.framework_pages.get(&key) {
      return RegistryLookup::Framework(factory.clone());
    }
    RegistryLookup::NotRegistered
  }

  pub fn lookup_ajax(&self, page: &str, action: &str) -> RegistryLookup<AjaxFactory> {
    let key = RouteKey::new(page, action);
    if let Some(factory) = self.project_ajax.get(&key) {
      return RegistryLookup::Project(factory.clone());
    }
    if let Some(factory) = self.framework_ajax.get(&key) {
      return RegistryLookup::Framework(factory.clone());
    }
    RegistryLookup::NotRegistered
  }

  pub fn lookup_module(&self, name: &str) -> Option<ModuleFactory> {
    self.modules.get(name).cloned()
  }
}

impl Default for HandlerRegistry {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::errors::PlumeError;
  use crate::page::{CallContext, PageOutput};

  struct StubPage;

  impl PageHandler for StubPage {
    fn generate_content(&mut self, _ctx: &CallContext) -> Result<PageOutput, PlumeError> {
      Ok(PageOutput::new("stub"))
    }
  }

  fn stub_factory() -> PageFactory {
    Arc::new(|| Box::new(StubPage))
  }

  #[test]
  fn identity_derivation() {
    let identity = HandlerIdentity::derive("my-blog", "default", CallKind::Render);
    assert_eq!(identity.project, "project::Pages/MyBlog/DefaultAction");
    assert_eq!(identity.framework, "plume::Pages/MyBlog/DefaultAction");
  }

  #[test]
  fn identity_ajax_suffix() {
    let identity = HandlerIdentity::derive("home", "search", CallKind::Ajax);
    assert_eq!(identity.project, "project::Pages/Home/SearchAjax");
  }

  #[test]
  fn builtins_are_registered() {
    let registry = HandlerRegistry::new();
    assert!(registry.exists("oops", "default", CallKind::Render));
    assert!(registry.lookup_module("debugger").is_some());
  }

  #[test]
  fn project_tier_wins() {
    let mut registry = HandlerRegistry::new();
    registry.register_page("home", "default", stub_factory());
    registry.register_framework_page("home", "default", stub_factory());
    assert!(matches!(registry.lookup_page("home", "default"), RegistryLookup::Project(_)));
  }

  #[test]
  fn framework_tier_fallback() {
    let registry = HandlerRegistry::new();
    assert!(matches!(registry.lookup_page("oops", "default"), RegistryLookup::Framework(_)));
  }

  #[test]
  fn unregistered_is_explicit() {
    let registry = HandlerRegistry::new();
    assert!(matches!(registry.lookup_page("ghost", "default"), RegistryLookup::NotRegistered));
    assert!(!registry.exists("ghost", "default", CallKind::Render));
  }

  #[test]
  fn render_and_ajax_namespaces_are_disjoint() {
    let mut registry = HandlerRegistry::new();
    registry.register_page("home", "default", stub_factory());
    assert!(registry.exists("home", "default", CallKind::Render));
    assert!(!registry.exists("home", "default", CallKind::Ajax));
  }
}
