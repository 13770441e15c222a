use crate::domain::action::Action;
use crate::domain::ledger::PersonTotals;
use crate::domain::person::Person;
use crate::domain::prefs::Language;

/// A command delivered by the transport layer for processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Mark { person: Person, index: usize },
    Fine { person: Person },
    Undo { person: Person },
    SetLanguage { session: String, language: Language },
    SelectPerson { session: String, person: Person },
}

/// Acknowledged outcome of one processed command. Ledger outcomes carry the
/// updated totals; an empty-history undo is reported as `NothingToUndo`
/// rather than an error so the transport can show a notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    Marked {
        person: Person,
        newly_marked: bool,
        totals: PersonTotals,
    },
    Fined {
        person: Person,
        totals: PersonTotals,
    },
    Undone {
        person: Person,
        action: Action,
        totals: PersonTotals,
    },
    NothingToUndo {
        person: Person,
        totals: PersonTotals,
    },
    PrefsUpdated {
        session: String,
    },
}
