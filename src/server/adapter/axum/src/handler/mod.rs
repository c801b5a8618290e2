/* src/server/adapter/axum/src/handler/mod.rs */

mod request;

use std::sync::Arc;

use axum::Router;
use plume_server::Controller;

pub(crate) struct AppState {
  pub controller: Controller,
}

/// Front-controller router: every path funnels into one handler that reads
/// the framework request parameters (`requestPage`, `requestAction`,
/// `requestArgument`) and the `Ajax` header.
pub(crate) fn build_router(controller: Controller) -> Router {
  let state = Arc::new(AppState { controller });
  Router::new().fallback(request::handle_request).with_state(state)
}
