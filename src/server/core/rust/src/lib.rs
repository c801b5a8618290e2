/* src/server/core/rust/src/lib.rs */

pub mod alias;
mod builtin;
pub mod config;
pub mod controller;
pub mod errors;
pub mod invoker;
pub mod page;
pub mod registry;
pub mod route;
pub mod server;
pub mod strings;
pub mod wrapper;

// Re-exports for ergonomic use
pub use alias::{AliasEntry, AliasTable};
pub use config::Config;
pub use controller::{Controller, Dispatch};
pub use errors::PlumeError;
pub use invoker::{InvokedAjax, InvokedPage, instantiate_ajax, instantiate_page};
pub use page::{
  AjaxHandler, CallContext, MixinType, ModuleHandler, PageHandler, PageOutput, UiComponent,
};
pub use registry::{
  AjaxFactory, CallKind, HandlerIdentity, HandlerRegistry, ModuleFactory, PageFactory,
  RegistryLookup,
};
pub use route::{ResolvedRoute, RouteRequest, RouteResolver};
pub use server::PlumeServer;
pub use wrapper::PageWrapper;
