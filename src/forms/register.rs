use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateError};

use crate::validation::{self, PasswordPolicy};
use crate::Sensitive;

/// Everything the registration form collects, including the
/// confirmation field that never leaves the client.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Register {
    pub email: String,
    pub name: String,
    pub password: Sensitive<String>,
    pub confirm_password: Sensitive<String>,
}

impl Register {
    /// Strips the transient confirmation field and produces the
    /// shape the registration endpoint actually receives.
    ///
    /// Kept as a named transform so the outbound contract stays
    /// visible and testable.
    #[must_use]
    pub fn to_payload(&self) -> RegisterPayload {
        RegisterPayload {
            email: self.email.clone(),
            password: self.password.clone(),
            name: self.name.clone(),
        }
    }
}

impl Validate for Register {
    fn validate(&self) -> Result<(), ValidateError> {
        let mut fields = ValidateError::field_builder();

        fields.insert("email", {
            let mut error = ValidateError::msg_builder();
            if !validation::is_valid_email(&self.email) {
                error.insert("Invalid email address");
            }
            error.build()
        });

        fields.insert("password", {
            let mut error = ValidateError::msg_builder();
            error.extend(PasswordPolicy::evaluate(self.password.as_str()));
            error.build()
        });

        fields.insert("name", {
            let mut error = ValidateError::msg_builder();
            if self.name.trim().is_empty() {
                error.insert("Name is required");
            }
            error.build()
        });

        // Mismatches attach to `confirm_password`, the field the
        // user is most likely to correct.
        fields.insert("confirm_password", {
            let mut error = ValidateError::msg_builder();
            if self.confirm_password.as_str().is_empty() {
                error.insert("Confirm Password is required");
            } else if self.password.as_str() != self.confirm_password.as_str() {
                error.insert("Passwords don't match");
            }
            error.build()
        });

        fields.build().into_result()
    }
}

/// The request body of the registration endpoint:
/// `{ email, password, name }`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegisterPayload {
    pub email: String,
    pub password: Sensitive<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthTokens {
    pub access_token: Sensitive<String>,
    pub refresh_token: Sensitive<String>,
}

/// Response envelope of a successful registration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RegisterResponse {
    pub user: User,
    pub tokens: AuthTokens,
}
