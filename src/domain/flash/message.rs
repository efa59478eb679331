//! Flash message carried from an action handler to the next rendered page

use serde::{Deserialize, Serialize};

/// Outcome of a form action, shown once on the page the user is redirected to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    success: Option<String>,
    error: Option<String>,
}

/// What the listing page surfaces as a blocking alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    Error(String),
    Success(String),
}

impl Alert {
    pub fn text(&self) -> &str {
        match self {
            Self::Error(text) | Self::Success(text) => text,
        }
    }
}

impl FlashMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Record a success and drop any pending error
    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    /// Record an error and drop any pending success
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
    }

    /// Concatenate onto the current success text
    pub fn append_success(&mut self, text: &str) {
        self.success.get_or_insert_with(String::new).push_str(text);
    }

    /// Concatenate onto the current error text
    pub fn append_error(&mut self, text: &str) {
        self.error.get_or_insert_with(String::new).push_str(text);
    }

    pub fn clear_success(&mut self) {
        self.success = None;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn is_empty(&self) -> bool {
        self.success.is_none() && self.error.is_none()
    }

    /// The message to surface: an error wins over a success
    pub fn alert(&self) -> Option<Alert> {
        match (&self.error, &self.success) {
            (Some(error), _) => Some(Alert::Error(error.clone())),
            (None, Some(success)) => Some(Alert::Success(success.clone())),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_success_clears_error() {
        let mut flash = FlashMessage::new();
        flash.set_error("boom");
        flash.set_success("done");

        assert_eq!(flash.success(), Some("done"));
        assert!(flash.error().is_none());
    }

    #[test]
    fn test_set_error_clears_success() {
        let mut flash = FlashMessage::new();
        flash.set_success("done");
        flash.set_error("boom");

        assert_eq!(flash.error(), Some("boom"));
        assert!(flash.success().is_none());
    }

    #[test]
    fn test_append_concatenates() {
        let mut flash = FlashMessage::new();
        flash.set_error("first. ");
        flash.append_error("second.");
        flash.append_success("image uploaded successfully");

        assert_eq!(flash.error(), Some("first. second."));
        assert_eq!(flash.success(), Some("image uploaded successfully"));
    }

    #[test]
    fn test_alert_prefers_error() {
        let mut flash = FlashMessage::new();
        flash.append_success("ok");
        flash.append_error("bad");

        assert_eq!(flash.alert(), Some(Alert::Error("bad".to_string())));

        flash.clear_error();
        assert_eq!(flash.alert(), Some(Alert::Success("ok".to_string())));

        flash.clear_success();
        assert!(flash.alert().is_none());
        assert!(flash.is_empty());
    }
}
