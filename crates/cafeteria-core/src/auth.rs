//! Administrator gate for catalog management and sales history.
//!
//! This is a shared passcode compared in plaintext. It keeps casual hands
//! off the admin menus and nothing more.

/// Anything that can decide whether a secret unlocks the admin menus.
pub trait Authenticator {
    fn verify(&self, secret: &str) -> bool;
}

/// A single passcode shared by all staff.
#[derive(Debug, Clone)]
pub struct StaticPasscode {
    passcode: String,
}

impl StaticPasscode {
    pub fn new(passcode: impl Into<String>) -> Self {
        StaticPasscode {
            passcode: passcode.into(),
        }
    }
}

impl Authenticator for StaticPasscode {
    fn verify(&self, secret: &str) -> bool {
        secret.trim() == self.passcode
    }
}
