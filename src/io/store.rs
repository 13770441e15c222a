use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::common::error::AppError;
use crate::domain::{
    account::PersonAccount,
    ledger::SavingsLedger,
    person::{self, Person},
    prefs::SessionPrefs,
};

/// Persisted application state: the account map plus session preferences,
/// written as one JSON document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct StateDocument {
    #[serde(default, rename = "accounts")]
    pub ledger: SavingsLedger,
    #[serde(default)]
    pub prefs: SessionPrefs,
}

impl StateDocument {
    /// Fresh document with an empty account for every tracked person.
    pub fn new() -> Self {
        let mut doc = Self::default();
        for p in person::ROSTER {
            doc.ledger.get_or_create_account(p);
        }
        doc
    }

    /// Defensive migration for documents written by earlier builds: missing
    /// accounts are synthesized and malformed `pressed` sequences reset.
    pub fn repair(&mut self) {
        for p in person::ROSTER {
            let acc = self.ledger.get_or_create_account(p);
            if acc.repair() {
                log::warn!("reset malformed pressed sequence for {p}");
            }
        }
    }
}

/// Load/save collaborator for the whole state document. Saves happen after
/// every successful mutation and their failures must reach the caller.
pub trait StateStore {
    fn load(&self) -> Result<StateDocument, AppError>;
    fn save(&mut self, doc: &StateDocument) -> Result<(), AppError>;
}

/// JSON file store. A missing file loads as a fresh document; a present one
/// is repaired after parsing.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[derive(serde::Deserialize)]
/// Loose on-disk shape: account keys stay strings so a document written by
/// another build cannot fail the whole load over one unknown identity.
struct RawDocument {
    #[serde(default)]
    accounts: HashMap<String, PersonAccount>,
    #[serde(default)]
    prefs: SessionPrefs,
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<StateDocument, AppError> {
        if !self.path.exists() {
            return Ok(StateDocument::new());
        }

        let raw: RawDocument = serde_json::from_str(&fs::read_to_string(&self.path)?)?;

        let mut doc = StateDocument {
            ledger: SavingsLedger::new(),
            prefs: raw.prefs,
        };
        for (name, acc) in raw.accounts {
            match name.parse::<Person>() {
                Ok(p) => {
                    doc.ledger.accounts.insert(p, acc);
                }
                Err(_) => log::warn!("dropping stored account for unknown person {name}"),
            }
        }
        doc.repair();
        Ok(doc)
    }

    fn save(&mut self, doc: &StateDocument) -> Result<(), AppError> {
        let raw = serde_json::to_string_pretty(doc)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory store. Backs unit and integration tests, and doubles as the
/// failure-injection point for persist-error coverage.
#[derive(Debug, Default)]
pub struct MemStore {
    pub saved: Option<StateDocument>,
    pub save_count: usize,
    fail_saves: bool,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every save fails.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }
}

impl StateStore for MemStore {
    fn load(&self) -> Result<StateDocument, AppError> {
        Ok(self.saved.clone().unwrap_or_else(StateDocument::new))
    }

    fn save(&mut self, doc: &StateDocument) -> Result<(), AppError> {
        if self.fail_saves {
            return Err(AppError::Io(std::io::Error::other("injected save failure")));
        }
        self.saved = Some(doc.clone());
        self.save_count += 1;
        Ok(())
    }
}
