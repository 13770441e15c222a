use crate::common::money::Money;
use crate::domain::{action::Action, slots};

#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct PersonAccount {
    /// Completion flag per slot, index-aligned with the slot value table.
    #[serde(default = "default_pressed")]
    pub pressed: Vec<bool>,
    /// Accumulated penalty total, a non-negative multiple of the fine value.
    #[serde(default)]
    pub fines: Money,
    /// Chronological stack of applied actions, used solely for one-step undo.
    #[serde(default)]
    pub history: Vec<Action>,
}

fn default_pressed() -> Vec<bool> {
    vec![false; slots::SLOT_COUNT]
}

impl Default for PersonAccount {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonAccount {
    pub fn new() -> Self {
        Self {
            pressed: default_pressed(),
            fines: Money::zero(),
            history: Vec::new(),
        }
    }

    pub fn saved_sum(&self) -> Money {
        self.pressed
            .iter()
            .enumerate()
            .filter(|&(_, &ok)| ok)
            .fold(Money::zero(), |acc, (i, _)| acc + slots::slot_value(i))
    }

    pub fn completed_count(&self) -> usize {
        self.pressed.iter().filter(|&&ok| ok).count()
    }

    /// Resets a `pressed` sequence whose length drifted from the slot count.
    /// Returns true if a repair happened.
    pub fn repair(&mut self) -> bool {
        if self.pressed.len() != slots::SLOT_COUNT {
            self.pressed = default_pressed();
            true
        } else {
            false
        }
    }
}
