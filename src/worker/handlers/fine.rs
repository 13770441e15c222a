use crate::domain::{action::Action, ledger::SavingsLedger, person::Person, slots};

/// Adds one fine. Unconditional: fines have no upper bound and every call
/// appends a history entry.
pub fn handle(ledger: &mut SavingsLedger, person: Person) {
    let acc = ledger.get_or_create_account(person);
    acc.fines += slots::FINE_VALUE;
    acc.history.push(Action::Fine);
}
