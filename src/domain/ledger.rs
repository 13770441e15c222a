use std::collections::HashMap;

use crate::common::money::Money;
use crate::domain::{
    account::PersonAccount,
    person::{self, Person},
    slots,
};

/// Aggregate of both tracked accounts. Mutations go through the worker
/// handlers; the ledger itself only owns the map and answers totals queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SavingsLedger {
    pub accounts: HashMap<Person, PersonAccount>,
}

/// Snapshot of one person's progress. `saved + remaining` always equals the
/// per-person target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonTotals {
    pub completed: usize,
    pub saved: Money,
    pub remaining: Money,
    pub fines: Money,
}

/// Progress of both people combined, against the combined target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinedTotals {
    pub saved: Money,
    pub remaining: Money,
    pub fines: Money,
}

impl SavingsLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_create_account(&mut self, person: Person) -> &mut PersonAccount {
        self.accounts.entry(person).or_default()
    }

    pub fn person_totals(&self, person: Person) -> PersonTotals {
        match self.accounts.get(&person) {
            Some(acc) => {
                let saved = acc.saved_sum();
                PersonTotals {
                    completed: acc.completed_count(),
                    saved,
                    remaining: slots::PERSON_TARGET - saved,
                    fines: acc.fines,
                }
            }
            None => PersonTotals {
                completed: 0,
                saved: Money::zero(),
                remaining: slots::PERSON_TARGET,
                fines: Money::zero(),
            },
        }
    }

    pub fn combined_totals(&self) -> CombinedTotals {
        let mut saved = Money::zero();
        let mut fines = Money::zero();
        for person in person::ROSTER {
            let totals = self.person_totals(person);
            saved += totals.saved;
            fines += totals.fines;
        }
        CombinedTotals {
            saved,
            remaining: slots::COMBINED_TARGET - saved,
            fines,
        }
    }
}
