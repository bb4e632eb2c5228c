//! Signup, login and user lookup

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{AuthPayload, CreateUser, NewUser, User},
    repository::Repository,
};

use super::auth::AuthService;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
    auth: AuthService,
}

impl UsersService {
    pub fn new(repository: Repository, auth: AuthService) -> Self {
        Self { repository, auth }
    }

    /// Register a user and sign them in
    pub async fn create_user(&self, mut input: CreateUser) -> AppResult<AuthPayload> {
        // Validated and stored in the form login looks up
        input.email = normalize_email(&input.email);
        input.validate()?;

        if input.password != input.confirm_password {
            return Err(AppError::Validation("Passwords do not match".to_string()));
        }

        if self.repository.users.email_exists(&input.email).await? {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }

        let password_hash = self.auth.hash_password(&input.password)?;
        let user = self
            .repository
            .users
            .create(&NewUser {
                name: input.name.trim().to_string(),
                email: input.email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User created");

        let token = self.auth.issue_token(user.id)?;
        Ok(AuthPayload { token, user })
    }

    /// Authenticate by email and password
    pub async fn login_user(&self, email: &str, password: &str) -> AppResult<AuthPayload> {
        let user = self
            .repository
            .users
            .get_by_email(&normalize_email(email))
            .await?
            .ok_or_else(|| AppError::Authentication(INVALID_CREDENTIALS.to_string()))?;

        if !self.auth.verify_password(&user.password_hash, password)? {
            tracing::info!(user_id = %user.id, "Login rejected");
            return Err(AppError::Authentication(INVALID_CREDENTIALS.to_string()));
        }

        let token = self.auth.issue_token(user.id)?;
        Ok(AuthPayload { token, user })
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<User> {
        self.repository
            .users
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.repository.users.list().await
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
