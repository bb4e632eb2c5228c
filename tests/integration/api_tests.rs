//! GraphQL API integration tests
//!
//! Executed against the schema with the in-memory store, so no database or
//! listening server is needed.

use async_graphql::{Request, Variables};
use bookshelf::{
    api::{graphql::build_schema, graphql::BookSchema, Viewer},
    config::AuthConfig,
    repository::Repository,
    services::Services,
};
use serde_json::{json, Value};
use uuid::Uuid;

const SECRET: &str = "integration-secret";

fn schema() -> (BookSchema, Services) {
    let services = Services::new(
        Repository::in_memory(),
        AuthConfig {
            jwt_secret: SECRET.to_string(),
            jwt_expiration_minutes: 60,
        },
    );
    (build_schema(services.clone()), services)
}

async fn run(schema: &BookSchema, query: &str, variables: Value, viewer: Viewer) -> Value {
    let request = Request::new(query)
        .variables(Variables::from_json(variables))
        .data(viewer);
    let response = schema.execute(request).await;
    serde_json::to_value(&response).expect("serialize response")
}

fn error_code(response: &Value) -> &str {
    response["errors"][0]["extensions"]["code"]
        .as_str()
        .unwrap_or_default()
}

fn error_message(response: &Value) -> &str {
    response["errors"][0]["message"].as_str().unwrap_or_default()
}

const SIGNUP: &str = r#"
mutation($input: CreateUserInput!) {
  createUser(input: $input) { token user { id name email } }
}"#;

const LOGIN: &str = r#"
mutation($email: String!, $password: String!) {
  loginUser(email: $email, password: $password) { token user { id email } }
}"#;

const CREATE_BOOK: &str = r#"
mutation($input: CreateBookInput!) {
  createBook(input: $input) { id title author year genre language enterTime }
}"#;

const UPDATE_BOOK: &str = r#"
mutation($id: ID!, $input: UpdateBookInput!) {
  updateBook(id: $id, input: $input) { id title author year genre }
}"#;

const DELETE_BOOK: &str = r#"
mutation($id: ID!) { deleteBook(id: $id) { id title } }"#;

const GET_BOOKS: &str = "{ getBooks { id title } }";

const GET_BOOK: &str = r#"
query($id: ID!) { getBookById(id: $id) { id title genre } }"#;

/// Sign up a user and return its id
async fn signup(schema: &BookSchema, email: &str) -> Uuid {
    let response = run(
        schema,
        SIGNUP,
        json!({ "input": {
            "name": "Ada",
            "email": email,
            "password": "secret",
            "confirmPassword": "secret"
        }}),
        Viewer::anonymous(),
    )
    .await;
    let id = response["data"]["createUser"]["user"]["id"]
        .as_str()
        .expect("user id");
    Uuid::parse_str(id).expect("uuid")
}

async fn create_book(schema: &BookSchema, viewer: Viewer, title: &str) -> Value {
    run(
        schema,
        CREATE_BOOK,
        json!({ "input": {
            "title": title,
            "author": "Frank Herbert",
            "year": 1965,
            "genre": "Science Fiction",
            "language": "English"
        }}),
        viewer,
    )
    .await
}

#[tokio::test]
async fn test_signup_returns_verifiable_token() {
    let (schema, services) = schema();

    let response = run(
        &schema,
        SIGNUP,
        json!({ "input": {
            "name": "Ada",
            "email": "Ada@Example.com",
            "password": "secret",
            "confirmPassword": "secret"
        }}),
        Viewer::anonymous(),
    )
    .await;

    let payload = &response["data"]["createUser"];
    assert_eq!(payload["user"]["email"], "ada@example.com");
    let token = payload["token"].as_str().unwrap();
    let id = Uuid::parse_str(payload["user"]["id"].as_str().unwrap()).unwrap();
    assert_eq!(services.auth.verify_token(token), Some(id));
}

#[tokio::test]
async fn test_signup_rejects_mismatched_passwords() {
    let (schema, _) = schema();

    let response = run(
        &schema,
        SIGNUP,
        json!({ "input": {
            "name": "Ada",
            "email": "ada@example.com",
            "password": "secret",
            "confirmPassword": "other"
        }}),
        Viewer::anonymous(),
    )
    .await;

    assert_eq!(error_code(&response), "BAD_USER_INPUT");
    assert_eq!(error_message(&response), "Passwords do not match");

    // nothing was stored: the same email can still sign up
    signup(&schema, "ada@example.com").await;
}

#[tokio::test]
async fn test_signup_rejects_duplicate_email() {
    let (schema, _) = schema();
    signup(&schema, "ada@example.com").await;

    let response = run(
        &schema,
        SIGNUP,
        json!({ "input": {
            "name": "Other",
            "email": "ADA@example.com",
            "password": "secret",
            "confirmPassword": "secret"
        }}),
        Viewer::anonymous(),
    )
    .await;

    assert_eq!(error_code(&response), "CONFLICT");
}

#[tokio::test]
async fn test_login_errors_do_not_reveal_which_part_failed() {
    let (schema, _) = schema();
    signup(&schema, "ada@example.com").await;

    let ok = run(
        &schema,
        LOGIN,
        json!({ "email": "ada@example.com", "password": "secret" }),
        Viewer::anonymous(),
    )
    .await;
    assert!(ok["data"]["loginUser"]["token"].is_string());

    let wrong_password = run(
        &schema,
        LOGIN,
        json!({ "email": "ada@example.com", "password": "nope" }),
        Viewer::anonymous(),
    )
    .await;
    let unknown_email = run(
        &schema,
        LOGIN,
        json!({ "email": "bob@example.com", "password": "secret" }),
        Viewer::anonymous(),
    )
    .await;

    assert_eq!(error_code(&wrong_password), "UNAUTHENTICATED");
    assert_eq!(error_message(&wrong_password), error_message(&unknown_email));
}

#[tokio::test]
async fn test_padded_mixed_case_signup_logs_in_with_canonical_email() {
    let (schema, _) = schema();

    let created = run(
        &schema,
        SIGNUP,
        json!({ "input": {
            "name": "Bo",
            "email": "  Bo@X.com ",
            "password": "secret",
            "confirmPassword": "secret"
        }}),
        Viewer::anonymous(),
    )
    .await;
    assert_eq!(created["data"]["createUser"]["user"]["email"], "bo@x.com");

    for email in ["bo@x.com", " BO@x.com"] {
        let login = run(
            &schema,
            LOGIN,
            json!({ "email": email, "password": "secret" }),
            Viewer::anonymous(),
        )
        .await;
        assert_eq!(login["data"]["loginUser"]["user"]["email"], "bo@x.com", "login as {:?}", email);
    }
}

#[tokio::test]
async fn test_me_requires_authentication() {
    let (schema, _) = schema();
    let id = signup(&schema, "ada@example.com").await;

    let anonymous = run(&schema, "{ me { id } }", json!({}), Viewer::anonymous()).await;
    assert_eq!(error_code(&anonymous), "UNAUTHENTICATED");

    let me = run(&schema, "{ me { id email } }", json!({}), Viewer::user(id)).await;
    assert_eq!(me["data"]["me"]["id"], id.to_string());
    assert_eq!(me["data"]["me"]["email"], "ada@example.com");
}

#[tokio::test]
async fn test_user_queries_are_protected() {
    let (schema, _) = schema();
    let id = signup(&schema, "ada@example.com").await;

    let anonymous = run(&schema, "{ getUsers { id } }", json!({}), Viewer::anonymous()).await;
    assert_eq!(error_code(&anonymous), "UNAUTHENTICATED");

    let users = run(&schema, "{ getUsers { id } }", json!({}), Viewer::user(id)).await;
    assert_eq!(users["data"]["getUsers"].as_array().unwrap().len(), 1);

    let missing = run(
        &schema,
        "query($id: ID!) { getUserById(id: $id) { id } }",
        json!({ "id": Uuid::new_v4() }),
        Viewer::user(id),
    )
    .await;
    assert_eq!(error_code(&missing), "NOT_FOUND");
}

#[tokio::test]
async fn test_password_hash_is_not_in_schema() {
    let (schema, _) = schema();
    let sdl = schema.sdl();
    assert!(!sdl.contains("password_hash"));
    assert!(!sdl.contains("passwordHash"));
}

#[tokio::test]
async fn test_book_mutations_require_authentication() {
    let (schema, _) = schema();

    let response = create_book(&schema, Viewer::anonymous(), "Dune").await;
    assert_eq!(error_code(&response), "UNAUTHENTICATED");
    assert_eq!(error_message(&response), "You must be logged in");

    let books = run(&schema, GET_BOOKS, json!({}), Viewer::anonymous()).await;
    assert!(books["data"]["getBooks"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_book_lifecycle() {
    let (schema, _) = schema();
    let viewer = Viewer::user(signup(&schema, "ada@example.com").await);

    let created = create_book(&schema, viewer, "Dune").await;
    let book = &created["data"]["createBook"];
    assert_eq!(book["title"], "Dune");
    assert_eq!(book["year"], 1965);
    assert!(book["enterTime"].is_string());
    let id = book["id"].as_str().unwrap().to_string();

    // reads are public
    let fetched = run(&schema, GET_BOOK, json!({ "id": id }), Viewer::anonymous()).await;
    assert_eq!(fetched["data"]["getBookById"]["genre"], "Science Fiction");

    // fields missing from the patch keep their values
    let updated = run(
        &schema,
        UPDATE_BOOK,
        json!({ "id": id, "input": { "title": "Dune Messiah", "year": 1969 } }),
        viewer,
    )
    .await;
    let book = &updated["data"]["updateBook"];
    assert_eq!(book["title"], "Dune Messiah");
    assert_eq!(book["year"], 1969);
    assert_eq!(book["author"], "Frank Herbert");
    assert_eq!(book["genre"], "Science Fiction");

    let deleted = run(&schema, DELETE_BOOK, json!({ "id": id }), viewer).await;
    assert_eq!(deleted["data"]["deleteBook"]["title"], "Dune Messiah");

    let gone = run(&schema, GET_BOOK, json!({ "id": id }), Viewer::anonymous()).await;
    assert_eq!(error_code(&gone), "NOT_FOUND");
}

#[tokio::test]
async fn test_update_with_null_clears_optional_field() {
    let (schema, _) = schema();
    let viewer = Viewer::user(signup(&schema, "ada@example.com").await);
    let created = create_book(&schema, viewer, "Dune").await;
    let id = created["data"]["createBook"]["id"].as_str().unwrap().to_string();

    let updated = run(
        &schema,
        UPDATE_BOOK,
        json!({ "id": id, "input": { "author": null } }),
        viewer,
    )
    .await;
    let book = &updated["data"]["updateBook"];
    assert!(book["author"].is_null(), "{}", updated);
    assert_eq!(book["title"], "Dune");
    assert_eq!(book["genre"], "Science Fiction");
}

#[tokio::test]
async fn test_books_are_listed_in_creation_order() {
    let (schema, _) = schema();
    let viewer = Viewer::user(signup(&schema, "ada@example.com").await);

    for title in ["A", "B", "C"] {
        create_book(&schema, viewer, title).await;
    }

    let books = run(&schema, GET_BOOKS, json!({}), Viewer::anonymous()).await;
    let titles: Vec<&str> = books["data"]["getBooks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["A", "B", "C"]);
}

#[tokio::test]
async fn test_invalid_book_input() {
    let (schema, _) = schema();
    let viewer = Viewer::user(signup(&schema, "ada@example.com").await);

    let empty_title = create_book(&schema, viewer, "").await;
    assert_eq!(error_code(&empty_title), "BAD_USER_INPUT");

    let created = create_book(&schema, viewer, "Dune").await;
    let id = created["data"]["createBook"]["id"].as_str().unwrap().to_string();

    let cleared = run(
        &schema,
        UPDATE_BOOK,
        json!({ "id": id, "input": { "title": "" } }),
        viewer,
    )
    .await;
    assert_eq!(error_code(&cleared), "BAD_USER_INPUT");
}

#[tokio::test]
async fn test_unknown_and_malformed_book_ids_are_not_found() {
    let (schema, _) = schema();
    let viewer = Viewer::user(signup(&schema, "ada@example.com").await);

    for id in [Uuid::new_v4().to_string(), "not-an-id".to_string()] {
        let fetched = run(&schema, GET_BOOK, json!({ "id": id }), Viewer::anonymous()).await;
        assert_eq!(error_code(&fetched), "NOT_FOUND");

        let updated = run(
            &schema,
            UPDATE_BOOK,
            json!({ "id": id, "input": { "title": "X" } }),
            viewer,
        )
        .await;
        assert_eq!(error_code(&updated), "NOT_FOUND");

        let deleted = run(&schema, DELETE_BOOK, json!({ "id": id }), viewer).await;
        assert_eq!(error_code(&deleted), "NOT_FOUND");
    }
}

#[tokio::test]
async fn test_anonymous_delete_leaves_book_in_place() {
    let (schema, _) = schema();
    let viewer = Viewer::user(signup(&schema, "ada@example.com").await);
    let created = create_book(&schema, viewer, "Dune").await;
    let id = created["data"]["createBook"]["id"].as_str().unwrap().to_string();

    let response = run(&schema, DELETE_BOOK, json!({ "id": id }), Viewer::anonymous()).await;
    assert_eq!(error_code(&response), "UNAUTHENTICATED");

    let fetched = run(&schema, GET_BOOK, json!({ "id": id }), Viewer::anonymous()).await;
    assert_eq!(fetched["data"]["getBookById"]["title"], "Dune");
}
