use serde::{Deserialize, Serialize};

/// The text box pair of one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub source_text: String,
    pub translated_text: String,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> SessionState {
        self.clone()
    }

    pub fn set_source(&mut self, text: impl Into<String>) {
        self.source_text = text.into();
    }

    pub fn set_translated(&mut self, text: impl Into<String>) {
        self.translated_text = text.into();
    }

    pub fn clear(&mut self) {
        self.source_text.clear();
        self.translated_text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        assert_eq!(
            SessionState::new().get(),
            SessionState {
                source_text: String::new(),
                translated_text: String::new(),
            }
        );
    }

    #[test]
    fn clear_resets_both_fields() {
        let mut state = SessionState::new();
        state.set_source("नमस्ते");
        state.set_translated("Hello");

        state.clear();

        assert_eq!(state.get(), SessionState::default());
    }

    #[test]
    fn set_translated_overwrites() {
        let mut state = SessionState::new();
        state.set_translated("first");
        state.set_translated("second");
        assert_eq!(state.translated_text, "second");
    }
}
