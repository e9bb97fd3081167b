use std::sync::Arc;

use async_graphql::extensions::Tracing;
use async_graphql::http::{GraphiQLSource, parse_query_string};
use async_graphql::parser::parse_query;
use async_graphql::parser::types::{DocumentOperations, OperationType};
use async_graphql::{EmptySubscription, Schema, ServerError};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

mod context;
pub(crate) mod schema;

use schema::{MutationRoot, QueryRoot};

use crate::config::Config;
use crate::store::Store;

pub const GRAPHQL_PATH: &str = "/graphql";

pub type LibrarySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: Arc<Store>) -> LibrarySchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .extension(Tracing)
        .finish()
}

#[derive(Clone)]
struct AppState {
    schema: LibrarySchema,
    graphiql: bool,
}

fn error_response(status: StatusCode, message: &str) -> Response {
    let response = async_graphql::Response::from_errors(vec![ServerError::new(message, None)]);
    (status, GraphQLResponse::from(response)).into_response()
}

/// Whether the operation that `request` would run is a mutation.
/// Unparseable documents are left for the executor to report.
fn is_mutation(request: &async_graphql::Request) -> bool {
    let Ok(document) = parse_query(&request.query) else {
        return false;
    };
    let operation = match &document.operations {
        DocumentOperations::Single(operation) => Some(operation),
        DocumentOperations::Multiple(operations) => match &request.operation_name {
            Some(wanted) => operations
                .iter()
                .find(|(name, _)| name.as_str() == wanted.as_str())
                .map(|(_, operation)| operation),
            None if operations.len() == 1 => operations.values().next(),
            None => None,
        },
    };
    operation.is_some_and(|operation| operation.node.ty == OperationType::Mutation)
}

fn has_query_param(raw: &str) -> bool {
    raw.split('&')
        .any(|pair| pair == "query" || pair.starts_with("query="))
}

/// Browsers navigating to the endpoint ask for HTML first.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|accept| accept.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

fn graphiql() -> Response {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish()).into_response()
}

async fn graphql_get(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
) -> Response {
    let raw = raw.unwrap_or_default();
    if state.graphiql && accepts_html(&headers) {
        return graphiql();
    }
    if !has_query_param(&raw) {
        if state.graphiql {
            return graphiql();
        }
        return error_response(StatusCode::BAD_REQUEST, "Must provide query string.");
    }

    let request = match parse_query_string(&raw) {
        Ok(request) => request,
        Err(err) => {
            tracing::debug!(error = %err, "rejecting malformed GET request");
            return error_response(StatusCode::BAD_REQUEST, &err.to_string());
        }
    };
    if is_mutation(&request) {
        let mut response = error_response(
            StatusCode::METHOD_NOT_ALLOWED,
            "Can only perform a mutation operation from a POST request.",
        );
        response
            .headers_mut()
            .insert(header::ALLOW, header::HeaderValue::from_static("POST"));
        return response;
    }

    GraphQLResponse::from(state.schema.execute(request).await).into_response()
}

#[axum::debug_handler]
async fn graphql_post(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

pub fn make_app(store: Arc<Store>, config: &Config) -> Router {
    let state = AppState {
        schema: build_schema(store),
        graphiql: config.graphiql,
    };

    Router::new()
        .route(GRAPHQL_PATH, get(graphql_get).post(graphql_post))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
