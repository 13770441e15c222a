use crate::{
    common::{
        error::AppError,
        event::{Applied, Command},
    },
    io::store::{StateDocument, StateStore},
    worker::handlers::{fine, mark, undo},
};

/// Applies commands to the state document and persists through the injected
/// store before acknowledging.
///
/// Semantics are apply-then-persist-then-acknowledge: when a save fails the
/// in-memory mutation stands and the error is surfaced to the caller
/// (at-least-once applied, best-effort persisted). Commands that change
/// nothing — a tap on an already-marked slot, an undo with empty history —
/// do not trigger a save.
#[derive(Debug, Default)]
pub struct Processor<S> {
    store: S,
}

impl<S: StateStore> Processor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn process(
        &mut self,
        state: &mut StateDocument,
        command: Command,
    ) -> Result<Applied, AppError> {
        match command {
            Command::Mark { person, index } => {
                let newly_marked = mark::handle(&mut state.ledger, person, index)?;
                if newly_marked {
                    self.store.save(state)?;
                }
                Ok(Applied::Marked {
                    person,
                    newly_marked,
                    totals: state.ledger.person_totals(person),
                })
            }
            Command::Fine { person } => {
                fine::handle(&mut state.ledger, person);
                self.store.save(state)?;
                Ok(Applied::Fined {
                    person,
                    totals: state.ledger.person_totals(person),
                })
            }
            Command::Undo { person } => match undo::handle(&mut state.ledger, person) {
                Some(action) => {
                    self.store.save(state)?;
                    Ok(Applied::Undone {
                        person,
                        action,
                        totals: state.ledger.person_totals(person),
                    })
                }
                None => Ok(Applied::NothingToUndo {
                    person,
                    totals: state.ledger.person_totals(person),
                }),
            },
            Command::SetLanguage { session, language } => {
                state.prefs.set_language(&session, language);
                self.store.save(state)?;
                Ok(Applied::PrefsUpdated { session })
            }
            Command::SelectPerson { session, person } => {
                state.prefs.set_last_person(&session, person);
                self.store.save(state)?;
                Ok(Applied::PrefsUpdated { session })
            }
        }
    }
}
