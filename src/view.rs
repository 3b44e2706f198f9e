//! Page layout for one session, rendered by the static client.

use serde::Serialize;

use crate::session::{SessionState, SubmitError, SubmitOutcome, EMPTY_INPUT_WARNING};
use crate::translate::{resolve, LanguagePreference};

pub const PAGE_TITLE: &str = "Translator App";
pub const HEADING: &str = "Hindi-English Translator";
pub const SELECTOR_PROMPT: &str = "Select the language to translate to:";
pub const BUSY_LABEL: &str = "Translating...";
pub const CLEAR_LABEL: &str = "Clear";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn from_outcome(outcome: &SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Translated(_) => Self {
                level: NoticeLevel::Success,
                message: "Translation complete.".to_string(),
            },
            SubmitOutcome::EmptyInput => Self::warning(EMPTY_INPUT_WARNING),
        }
    }

    pub fn from_error(error: &SubmitError) -> Self {
        Self::error(error.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: LanguagePreference,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageControl {
    pub prompt: &'static str,
    pub options: Vec<SelectOption>,
    pub selected: LanguagePreference,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextRegion {
    pub label: &'static str,
    pub text: String,
    pub read_only: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionControl {
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub page_title: &'static str,
    pub heading: &'static str,
    pub language: LanguageControl,
    pub source: TextRegion,
    pub result: TextRegion,
    pub submit: ActionControl,
    pub clear: ActionControl,
    pub busy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

/// Lay out the page for the given state. Labels follow the preference and the
/// text regions mirror the session's text box pair.
pub fn render(
    state: &SessionState,
    preference: LanguagePreference,
    notice: Option<Notice>,
    busy: bool,
) -> PageView {
    let route = resolve(preference);

    PageView {
        page_title: PAGE_TITLE,
        heading: HEADING,
        language: LanguageControl {
            prompt: SELECTOR_PROMPT,
            options: LanguagePreference::ALL
                .iter()
                .map(|p| SelectOption {
                    value: *p,
                    label: p.option_label(),
                })
                .collect(),
            selected: preference,
        },
        source: TextRegion {
            label: route.source_label,
            text: state.source_text.clone(),
            read_only: false,
        },
        result: TextRegion {
            label: route.result_label,
            text: state.translated_text.clone(),
            read_only: true,
        },
        submit: ActionControl {
            label: if busy { BUSY_LABEL } else { route.button_label },
            disabled: busy,
        },
        clear: ActionControl {
            label: CLEAR_LABEL,
            disabled: false,
        },
        busy,
        notice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_preference() {
        let view = render(&SessionState::default(), LanguagePreference::ToHindi, None, false);
        assert_eq!(view.source.label, "Enter English Text Here:");
        assert_eq!(view.result.label, "Translated Hindi Text:");
        assert_eq!(view.submit.label, "Translate to Hindi");
        assert_eq!(view.language.selected, LanguagePreference::ToHindi);
        assert_eq!(view.language.options.len(), 2);
    }

    #[test]
    fn regions_are_bound_to_session_state() {
        let state = SessionState {
            source_text: "नमस्ते".to_string(),
            translated_text: "Hello".to_string(),
        };
        let view = render(&state, LanguagePreference::ToEnglish, None, false);
        assert_eq!(view.source.text, "नमस्ते");
        assert!(!view.source.read_only);
        assert_eq!(view.result.text, "Hello");
        assert!(view.result.read_only);
    }

    #[test]
    fn busy_disables_submit() {
        let view = render(&SessionState::default(), LanguagePreference::ToEnglish, None, true);
        assert!(view.submit.disabled);
        assert_eq!(view.submit.label, BUSY_LABEL);
        assert!(!view.clear.disabled);
    }

    #[test]
    fn empty_input_notice_is_a_warning() {
        let notice = Notice::from_outcome(&SubmitOutcome::EmptyInput);
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.message, "Please enter some text to translate.");
    }

    #[test]
    fn notice_is_omitted_when_absent() {
        let view = render(&SessionState::default(), LanguagePreference::ToEnglish, None, false);
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("notice").is_none());
        assert_eq!(json["language"]["options"][0]["value"], "to_english");
        assert_eq!(json["language"]["options"][1]["label"], "Hindi");
    }
}
