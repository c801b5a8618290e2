/* src/server/adapter/axum/src/handler/request.rs */

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use plume_server::{Dispatch, RouteRequest};

use super::AppState;
use crate::error::AxumError;

fn is_ajax_call(headers: &HeaderMap) -> bool {
  headers
    .get("ajax")
    .and_then(|value| value.to_str().ok())
    .is_some_and(|value| value.eq_ignore_ascii_case("true"))
}

pub(super) async fn handle_request(
  State(state): State<Arc<AppState>>,
  Query(params): Query<HashMap<String, String>>,
  headers: HeaderMap,
) -> Result<Response, AxumError> {
  let request = RouteRequest::new(
    params.get("requestPage").cloned(),
    params.get("requestAction").cloned(),
    params.get("requestArgument").cloned(),
    is_ajax_call(&headers),
  );

  let dispatch = state.controller.dispatch(&request)?;
  let response = match dispatch {
    Dispatch::Document { html, status } => {
      let status = StatusCode::from_u16(status).unwrap_or(StatusCode::OK);
      (status, Html(html)).into_response()
    }
    Dispatch::Ajax { body, status } => {
      let status = StatusCode::from_u16(status).unwrap_or(StatusCode::OK);
      (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
    }
  };
  Ok(response)
}
