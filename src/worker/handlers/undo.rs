use crate::domain::{action::Action, ledger::SavingsLedger, person::Person, slots};

/// Reverses the most recent action for `person`, whichever kind it was: the
/// history is one unified chronological stack, not a stack per action kind.
/// Returns the popped action, or `None` when there is nothing to undo.
pub fn handle(ledger: &mut SavingsLedger, person: Person) -> Option<Action> {
    let acc = ledger.get_or_create_account(person);
    let last = acc.history.pop()?;

    match last {
        Action::Tap { index } => {
            // index guard tolerates history from a repaired document
            if index < acc.pressed.len() {
                acc.pressed[index] = false;
            }
        }
        Action::Fine => {
            // floor at zero tolerates fines skew in legacy data
            acc.fines = acc.fines.sub_floor_zero(slots::FINE_VALUE);
        }
    }

    Some(last)
}
