use std::fmt;

/// Bearer token attached to authenticated requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn token(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Supplies the credential for each operation and reacts to its rejection.
pub trait CredentialSource {
    /// Current credential, `None` when signed out
    fn credential(&self) -> Option<Credential>;

    /// Drop the credential and send the user back to the login page
    fn invalidate(&self);
}
