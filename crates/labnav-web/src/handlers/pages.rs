//! Page handler — every dashboard route, and the fallback for unknown paths.
//!
//! A request for a page path is a navigation event: the handler moves the
//! shared [`NavigationState`](crate::navigation::NavigationState) and renders
//! the composed page.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::warn;

use labnav_config::UnknownPathPolicy;

use crate::error::WebError;
use crate::pages::PageRequest;
use crate::routes::HOME_PATH;
use crate::state::SharedState;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub doc_type: Option<String>,
}

pub async fn page(
    State(state): State<SharedState>,
    uri: Uri,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Response, WebError> {
    let path = uri.path();
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(path, error = %rejection, "Ignoring malformed query string");
            PageQuery::default()
        }
    };
    let request = PageRequest {
        doc_type: state.page_doc_type(query.doc_type.as_deref()),
    };

    let mut nav = state.lock_nav()?;
    let navigated = nav.navigate(path).map(|_| ());
    match navigated {
        Ok(()) => {
            let view = state.composer.compose(&nav, &request)?;
            Ok(Html(state.composer.render(&view)?).into_response())
        }
        Err(err) if err.is_not_found() && !is_api_path(path) => {
            warn!(path, "No page for path");
            match state.config.routing.unknown_path {
                UnknownPathPolicy::RedirectHome => Ok(Redirect::to(HOME_PATH).into_response()),
                UnknownPathPolicy::NotFoundPage => {
                    let view = state.composer.compose_unroutable(&nav, path);
                    let html = state.composer.render(&view)?;
                    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
                }
            }
        }
        Err(err) => Err(err.into()),
    }
}

fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_paths() {
        assert!(is_api_path("/api"));
        assert!(is_api_path("/api/unknown"));
        assert!(!is_api_path("/apiary"));
        assert!(!is_api_path("/"));
    }
}
