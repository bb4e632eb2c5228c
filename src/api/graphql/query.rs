//! Query resolvers

use async_graphql::{Context, Object, Result, ResultExt, ID};

use super::{parse_id, require_authenticated, services};
use crate::models::{Book, User};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// The user the bearer token belongs to
    async fn me(&self, ctx: &Context<'_>) -> Result<User> {
        let user_id = require_authenticated(ctx).extend()?;
        services(ctx)?.users.get_by_id(user_id).await.extend()
    }

    async fn get_users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        require_authenticated(ctx).extend()?;
        services(ctx)?.users.list().await.extend()
    }

    async fn get_user_by_id(&self, ctx: &Context<'_>, id: ID) -> Result<User> {
        require_authenticated(ctx).extend()?;
        let id = parse_id(&id, "User not found").extend()?;
        services(ctx)?.users.get_by_id(id).await.extend()
    }

    async fn get_books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        services(ctx)?.catalog.list_books().await.extend()
    }

    async fn get_book_by_id(&self, ctx: &Context<'_>, id: ID) -> Result<Book> {
        let id = parse_id(&id, "Book not found").extend()?;
        services(ctx)?.catalog.get_book(id).await.extend()
    }
}
