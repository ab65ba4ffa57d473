use crate::error::BookingError;
use crate::models::User;
use tracing::info;

/// Current sign-in state. Starts signed out.
///
/// Credentials are not checked against anything; any well-formed email with a
/// non-empty password signs in.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<&User, BookingError> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') || password.is_empty() {
            return Err(BookingError::InvalidCredentials);
        }

        info!("Signed in as {}", email);
        Ok(&*self.user.insert(User {
            email: email.to_string(),
        }))
    }

    /// Mocked like sign-in: the account is not stored anywhere
    pub fn sign_up(&mut self, email: &str, password: &str) -> Result<&User, BookingError> {
        self.sign_in(email, password)
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!("Signed out {}", user.email);
        }
    }
}
