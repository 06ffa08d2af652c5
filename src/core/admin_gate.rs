use crate::core::errors::FlatgateError;

/// Holds the configured admin word and checks callers against it.
pub struct AdminGate {
    admin_word: String,
}

impl AdminGate {
    pub fn new(admin_word: impl Into<String>) -> Self {
        AdminGate {
            admin_word: admin_word.into(),
        }
    }

    pub fn authorize(&self, supplied: &str) -> bool {
        supplied == self.admin_word
    }

    pub fn guard(&self, supplied: &str) -> Result<(), FlatgateError> {
        if self.authorize(supplied) {
            Ok(())
        } else {
            Err(FlatgateError::Forbidden)
        }
    }
}

impl std::fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminGate").field("admin_word", &"<redacted>").finish()
    }
}
