use crate::common::money::Money;

/// Number of savings slots per person.
pub const SLOT_COUNT: usize = 100;

/// Value step between consecutive slots.
const SLOT_STEP: i64 = 100;

/// Fixed penalty added per fine.
pub const FINE_VALUE: Money = Money::new(100);

/// Sum of all slot values for one person: 100 + 200 + ... + 10000.
pub const PERSON_TARGET: Money = Money::new(505_000);

/// Both person targets combined.
pub const COMBINED_TARGET: Money = Money::new(1_010_000);

/// Value of the slot at `index`. Slot 0 is worth 100, slot 99 is worth 10000.
///
/// Callers must pass an index below [`SLOT_COUNT`]; the mark handler rejects
/// out-of-range indices before they reach this table.
pub fn slot_value(index: usize) -> Money {
    debug_assert!(index < SLOT_COUNT);
    Money::new((index as i64 + 1) * SLOT_STEP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_values_span_100_to_10000() {
        assert_eq!(slot_value(0), Money::new(100));
        assert_eq!(slot_value(49), Money::new(5_000));
        assert_eq!(slot_value(99), Money::new(10_000));
    }

    #[test]
    fn person_target_is_sum_of_all_slots() {
        let sum = (0..SLOT_COUNT).fold(Money::zero(), |acc, i| acc + slot_value(i));
        assert_eq!(sum, PERSON_TARGET);
    }

    #[test]
    fn combined_target_is_twice_person_target() {
        assert_eq!(PERSON_TARGET + PERSON_TARGET, COMBINED_TARGET);
    }
}
