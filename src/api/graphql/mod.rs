//! GraphQL schema and its HTTP handlers

mod mutation;
mod query;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

use async_graphql::{http::GraphiQLSource, Context, EmptySubscription, Schema, ID};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Json,
};
use uuid::Uuid;

use super::Viewer;
use crate::{
    error::{AppError, AppResult},
    services::Services,
    AppState,
};

pub type BookSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the services every resolver reads from context
pub fn build_schema(services: Services) -> BookSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(services)
        .finish()
}

/// Fail the current operation unless the request carries a verified user
pub fn require_authenticated(ctx: &Context<'_>) -> AppResult<Uuid> {
    ctx.data_opt::<Viewer>()
        .and_then(|viewer| viewer.user_id)
        .ok_or_else(|| AppError::Authentication("You must be logged in".to_string()))
}

fn services<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Services> {
    ctx.data::<Services>()
}

/// Identifiers that are not UUIDs cannot name a stored record
fn parse_id(id: &ID, not_found: &str) -> AppResult<Uuid> {
    Uuid::parse_str(id.as_str()).map_err(|_| AppError::NotFound(not_found.to_string()))
}

/// Execute a GraphQL request on behalf of the bearer of its token
pub async fn graphql_handler(
    State(state): State<AppState>,
    viewer: Viewer,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    let operation = request.operation_name.clone().unwrap_or_default();
    tracing::debug!(%operation, authenticated = viewer.user_id.is_some(), "GraphQL request");
    Json(state.schema.execute(request.data(viewer)).await)
}

/// GraphiQL explorer
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Schema definition in SDL
pub async fn sdl(State(state): State<AppState>) -> String {
    state.schema.sdl()
}
