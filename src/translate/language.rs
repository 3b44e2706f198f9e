use serde::{Deserialize, Serialize};

/// Language/script tokens understood by the translation model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageCode {
    #[serde(rename = "hin_Deva")]
    HinDeva,
    #[serde(rename = "eng_Latn")]
    EngLatn,
}

impl LanguageCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::HinDeva => "hin_Deva",
            LanguageCode::EngLatn => "eng_Latn",
        }
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The language the user wants to translate *to*
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguagePreference {
    #[default]
    ToEnglish,
    ToHindi,
}

impl LanguagePreference {
    pub const ALL: [LanguagePreference; 2] =
        [LanguagePreference::ToEnglish, LanguagePreference::ToHindi];

    /// Option label shown in the selector
    pub fn option_label(&self) -> &'static str {
        match self {
            LanguagePreference::ToEnglish => "English",
            LanguagePreference::ToHindi => "Hindi",
        }
    }
}

/// Codes and display labels derived from a [`LanguagePreference`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageRoute {
    pub preference: LanguagePreference,
    pub source_code: LanguageCode,
    pub target_code: LanguageCode,
    pub source_label: &'static str,
    pub result_label: &'static str,
    pub button_label: &'static str,
}

pub fn resolve(preference: LanguagePreference) -> LanguageRoute {
    match preference {
        LanguagePreference::ToEnglish => LanguageRoute {
            preference,
            source_code: LanguageCode::HinDeva,
            target_code: LanguageCode::EngLatn,
            source_label: "Enter Hindi Text Here:",
            result_label: "Translated English Text:",
            button_label: "Translate to English",
        },
        LanguagePreference::ToHindi => LanguageRoute {
            preference,
            source_code: LanguageCode::EngLatn,
            target_code: LanguageCode::HinDeva,
            source_label: "Enter English Text Here:",
            result_label: "Translated Hindi Text:",
            button_label: "Translate to Hindi",
        },
    }
}
