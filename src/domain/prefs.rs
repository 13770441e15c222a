use std::collections::HashMap;

use crate::domain::person::Person;

/// Interface language for a chat session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    Ru,
}

impl Language {
    /// Parses a language code, falling back to the default for anything
    /// outside the supported set.
    pub fn from_code(code: &str) -> Self {
        match code {
            "ru" => Language::Ru,
            _ => Language::Es,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::Ru => "ru",
        }
    }
}

/// Preferences of one chat session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ChatPrefs {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub last_person: Option<Person>,
}

/// Per-session preference store, keyed by an opaque session id. Entries are
/// created lazily, updated last-write-wins, never deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SessionPrefs {
    entries: HashMap<String, ChatPrefs>,
}

impl SessionPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, session: &str) -> ChatPrefs {
        self.entries.get(session).copied().unwrap_or_default()
    }

    pub fn set_language(&mut self, session: &str, language: Language) {
        self.entries.entry(session.to_owned()).or_default().language = language;
    }

    pub fn set_last_person(&mut self, session: &str, person: Person) {
        self.entries.entry(session.to_owned()).or_default().last_person = Some(person);
    }
}
