//! GraphQL data-access layer

use std::sync::Arc;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use super::{
    operations,
    storage::{FileTokenStore, TokenStore},
    ClientConfig, ClientError, ClientResult,
};
use crate::models::{AuthPayload, Book, CreateBook, CreateUser, UpdateBook, User};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

/// API client. Every call carries `Authorization: Bearer <token>` when the
/// token store holds a token, and no credential otherwise.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    endpoint: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(endpoint: impl Into<String>, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            tokens,
        }
    }

    /// Client persisting its token to `config.token_path`
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(
            config.api_url.clone(),
            Arc::new(FileTokenStore::new(config.token_path.clone())),
        )
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Send one operation and decode the value of its top-level `field`
    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
        field: &str,
    ) -> ClientResult<T> {
        let mut request = self
            .http
            .post(&self.endpoint)
            .json(&GraphQlRequest { query, variables });

        if let Some(token) = self.tokens.load() {
            request = request.bearer_auth(token);
        }

        let response: GraphQlResponse = request.send().await?.error_for_status()?.json().await?;

        if let Some(error) = response.errors.into_iter().next() {
            tracing::debug!(%field, "API error: {}", error.message);
            return Err(ClientError::Api(error.message));
        }

        let value = response
            .data
            .and_then(|mut data| data.get_mut(field).map(Value::take))
            .filter(|value| !value.is_null())
            .ok_or(ClientError::EmptyResponse)?;

        Ok(serde_json::from_value(value)?)
    }

    pub async fn create_user(&self, input: &CreateUser) -> ClientResult<AuthPayload> {
        self.execute(operations::CREATE_USER, json!({ "input": input }), "createUser")
            .await
    }

    pub async fn login_user(&self, email: &str, password: &str) -> ClientResult<AuthPayload> {
        self.execute(
            operations::LOGIN_USER,
            json!({ "email": email, "password": password }),
            "loginUser",
        )
        .await
    }

    pub async fn me(&self) -> ClientResult<User> {
        self.execute(operations::ME, json!({}), "me").await
    }

    pub async fn get_users(&self) -> ClientResult<Vec<User>> {
        self.execute(operations::GET_USERS, json!({}), "getUsers").await
    }

    pub async fn get_user_by_id(&self, id: Uuid) -> ClientResult<User> {
        self.execute(operations::GET_USER_BY_ID, json!({ "id": id }), "getUserById")
            .await
    }

    pub async fn get_books(&self) -> ClientResult<Vec<Book>> {
        self.execute(operations::GET_BOOKS, json!({}), "getBooks").await
    }

    pub async fn get_book_by_id(&self, id: Uuid) -> ClientResult<Book> {
        self.execute(operations::GET_BOOK_BY_ID, json!({ "id": id }), "getBookById")
            .await
    }

    pub async fn create_book(&self, input: &CreateBook) -> ClientResult<Book> {
        self.execute(operations::CREATE_BOOK, json!({ "input": input }), "createBook")
            .await
    }

    pub async fn update_book(&self, id: Uuid, patch: &UpdateBook) -> ClientResult<Book> {
        self.execute(
            operations::UPDATE_BOOK,
            json!({ "id": id, "input": patch }),
            "updateBook",
        )
        .await
    }

    pub async fn delete_book(&self, id: Uuid) -> ClientResult<Book> {
        self.execute(operations::DELETE_BOOK, json!({ "id": id }), "deleteBook")
            .await
    }
}
