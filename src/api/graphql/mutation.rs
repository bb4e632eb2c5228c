//! Mutation resolvers

use async_graphql::{Context, Object, Result, ResultExt, ID};

use super::{parse_id, require_authenticated, services};
use crate::models::{AuthPayload, Book, CreateBook, CreateUser, UpdateBook};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Sign up; returns a token for the new account
    async fn create_user(&self, ctx: &Context<'_>, input: CreateUser) -> Result<AuthPayload> {
        services(ctx)?.users.create_user(input).await.extend()
    }

    async fn login_user(
        &self,
        ctx: &Context<'_>,
        email: String,
        password: String,
    ) -> Result<AuthPayload> {
        services(ctx)?
            .users
            .login_user(&email, &password)
            .await
            .extend()
    }

    async fn create_book(&self, ctx: &Context<'_>, input: CreateBook) -> Result<Book> {
        require_authenticated(ctx).extend()?;
        services(ctx)?.catalog.create_book(input).await.extend()
    }

    /// Patch the fields present in `input`
    async fn update_book(&self, ctx: &Context<'_>, id: ID, input: UpdateBook) -> Result<Book> {
        require_authenticated(ctx).extend()?;
        let id = parse_id(&id, "Book not found").extend()?;
        services(ctx)?.catalog.update_book(id, input).await.extend()
    }

    /// Returns the deleted book
    async fn delete_book(&self, ctx: &Context<'_>, id: ID) -> Result<Book> {
        require_authenticated(ctx).extend()?;
        let id = parse_id(&id, "Book not found").extend()?;
        services(ctx)?.catalog.delete_book(id).await.extend()
    }
}
