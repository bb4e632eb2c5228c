//! Signup page

use super::{FieldErrors, Outcome};
use crate::{
    client::{AuthContext, Route},
    models::CreateUser,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignupField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupPage {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub errors: FieldErrors<SignupField>,
    /// Error reported by the server
    pub error: Option<String>,
    pub loading: bool,
}

impl SignupPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&mut self) -> bool {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert(SignupField::Name, "Name is required".to_string());
        }
        if self.email.trim().is_empty() {
            errors.insert(SignupField::Email, "Email is required".to_string());
        }
        if self.password.is_empty() {
            errors.insert(SignupField::Password, "Password is required".to_string());
        }
        if self.confirm_password.is_empty() {
            errors.insert(
                SignupField::ConfirmPassword,
                "Please confirm your password".to_string(),
            );
        } else if self.password != self.confirm_password {
            errors.insert(
                SignupField::ConfirmPassword,
                "Passwords do not match".to_string(),
            );
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    /// Create the account, sign in with the returned token and open the
    /// catalog. Nothing is sent while local validation fails.
    pub async fn submit(&mut self, auth: &AuthContext) -> Outcome {
        self.error = None;
        if !self.validate() {
            return Outcome::Stay;
        }

        self.loading = true;
        let input = CreateUser {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        };

        let outcome = match auth.api().create_user(&input).await {
            Ok(payload) => match auth.login(&payload.token, payload.user) {
                Ok(()) => Outcome::Navigate(Route::Books),
                Err(e) => {
                    self.error = Some(e.to_string());
                    Outcome::Stay
                }
            },
            Err(e) => {
                self.error = Some(e.to_string());
                Outcome::Stay
            }
        };

        self.loading = false;
        outcome
    }
}
