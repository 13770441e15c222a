use crate::{
    common::error::AppError,
    domain::{action::Action, ledger::SavingsLedger, person::Person, slots},
};

/// Marks the slot at `index` complete. Returns `Ok(false)` when the slot was
/// already marked: repeated taps must not grow the history or change totals.
pub fn handle(ledger: &mut SavingsLedger, person: Person, index: usize) -> Result<bool, AppError> {
    // out-of-range index is a caller error, not a user condition
    if index >= slots::SLOT_COUNT {
        return Err(AppError::InvalidIndex { index });
    }

    let acc = ledger.get_or_create_account(person);

    if acc.pressed[index] {
        return Ok(false);
    }

    acc.pressed[index] = true;
    acc.history.push(Action::Tap { index });
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::handle;
    use crate::common::error::AppError;
    use crate::common::money::Money;
    use crate::domain::{action::Action, ledger::SavingsLedger, person::Person};

    #[test]
    fn mark_sets_slot_and_records_tap() {
        let mut ledger = SavingsLedger::new();

        let newly_marked = handle(&mut ledger, Person::Michael, 4).unwrap();
        assert!(newly_marked);

        let acc = ledger.accounts.get(&Person::Michael).expect("account exists");
        assert!(acc.pressed[4]);
        assert_eq!(acc.history, vec![Action::Tap { index: 4 }]);
        assert_eq!(acc.saved_sum(), Money::new(500));
    }

    #[test]
    fn mark_is_idempotent() {
        let mut ledger = SavingsLedger::new();

        assert!(handle(&mut ledger, Person::Michael, 4).unwrap());
        assert!(!handle(&mut ledger, Person::Michael, 4).unwrap()); // repeat tap must be a no-op

        let acc = ledger.accounts.get(&Person::Michael).expect("account exists");
        assert!(acc.pressed[4]);
        assert_eq!(acc.history.len(), 1);
        assert_eq!(acc.saved_sum(), Money::new(500));
    }

    #[test]
    fn mark_rejects_out_of_range_index() {
        let mut ledger = SavingsLedger::new();

        let err = handle(&mut ledger, Person::Michael, 100).unwrap_err();
        assert!(matches!(err, AppError::InvalidIndex { index: 100 }));

        // the failed call must not create or touch any account
        assert!(ledger.accounts.is_empty());
    }

    #[test]
    fn marks_are_tracked_per_person() {
        let mut ledger = SavingsLedger::new();

        handle(&mut ledger, Person::Michael, 0).unwrap();
        handle(&mut ledger, Person::Madina, 1).unwrap();

        let michael = ledger.accounts.get(&Person::Michael).unwrap();
        let madina = ledger.accounts.get(&Person::Madina).unwrap();
        assert!(michael.pressed[0] && !michael.pressed[1]);
        assert!(!madina.pressed[0] && madina.pressed[1]);
    }
}
