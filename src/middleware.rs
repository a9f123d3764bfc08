//! # Host Framework Glue
//!
//! Two ways into the compiler from an axum application:
//!
//! - [`ParsedQuery`] as an extractor, for handlers that want the compiled
//!   query as an argument;
//! - [`parse_query`], a middleware that compiles the query string of every
//!   GET request and attaches the result as a request extension.
//!
//! Both paths share [`compile`](crate::compiler::compile), which remains
//! directly callable outside any request pipeline.

use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts, Query, Request, State};
use axum::http::request::Parts;
use axum::http::Method;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::compiler::{compile, ParsedQuery};
use crate::config::BuilderConfig;
use crate::errors::QueryError;
use crate::params::RawParams;

#[async_trait]
impl<S> FromRequestParts<S> for ParsedQuery
where
    BuilderConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = QueryError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = BuilderConfig::from_ref(state);
        let params = decode_params(parts, state).await?;
        compile(params, &config)
    }
}

/// Middleware: compile the query string of GET requests into a
/// [`ParsedQuery`] request extension. Other methods pass through untouched;
/// a compilation failure answers 400 without reaching the inner handler.
pub async fn parse_query(
    State(config): State<BuilderConfig>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::GET {
        return next.run(request).await;
    }

    let (mut parts, body) = request.into_parts();
    let parsed = match decode_params(&mut parts, &()).await {
        Ok(params) => compile(params, &config),
        Err(err) => Err(err),
    };

    match parsed {
        Ok(parsed) => {
            parts.extensions.insert(parsed);
            next.run(Request::from_parts(parts, body)).await
        }
        Err(err) => err.into_response(),
    }
}

/// Decode the query string into raw parameters, preserving repeated keys.
async fn decode_params<S: Send + Sync>(
    parts: &mut Parts,
    state: &S,
) -> Result<RawParams, QueryError> {
    let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
        .await
        .map_err(|err| QueryError::InvalidParam(err.to_string()))?;
    Ok(RawParams::from_pairs(pairs))
}
