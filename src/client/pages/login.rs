//! Login page

use super::Outcome;
use crate::client::{AuthContext, Route};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginPage {
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub loading: bool,
}

impl LoginPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exchange the credentials for a session and go to the home page
    pub async fn submit(&mut self, auth: &AuthContext) -> Outcome {
        self.error = None;
        self.loading = true;

        let result = auth
            .api()
            .login_user(self.email.trim(), &self.password)
            .await;

        let outcome = match result {
            Ok(payload) => match auth.login(&payload.token, payload.user) {
                Ok(()) => Outcome::Navigate(Route::Home),
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
