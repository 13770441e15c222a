use std::io::Write;

use crate::common::money::Money;
use crate::domain::{ledger::SavingsLedger, person};

#[derive(serde::Serialize)]
/// Internal CSV output row representation matching the output headers.
///
/// Headers written (in this order): `person,completed,saved,remaining,fines`.
struct OutputRow {
    person: String,
    completed: usize,
    saved: Money,
    remaining: Money,
    fines: Money,
}

/// Writes progress totals to a CSV writer: one row per person in fixed
/// roster order, then a `combined` row against the combined target.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use savings_tracker::domain::ledger::SavingsLedger;
/// use savings_tracker::io::writer::write_totals;
///
/// let ledger = SavingsLedger::new();
/// let mut out = Vec::new();
/// write_totals(&mut out, &ledger).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.starts_with("person,completed,saved,remaining,fines\n"));
/// assert!(s.contains("\ncombined,"));
/// ```
pub fn write_totals<W: Write>(writer: W, ledger: &SavingsLedger) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    let mut completed_total = 0;
    for person in person::ROSTER {
        let totals = ledger.person_totals(person);
        completed_total += totals.completed;
        wtr.serialize(OutputRow {
            person: person.as_str().to_owned(),
            completed: totals.completed,
            saved: totals.saved,
            remaining: totals.remaining,
            fines: totals.fines,
        })?;
    }

    let combined = ledger.combined_totals();
    wtr.serialize(OutputRow {
        person: "combined".to_owned(),
        completed: completed_total,
        saved: combined.saved,
        remaining: combined.remaining,
        fines: combined.fines,
    })?;

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::person::Person;

    // Helper: writes totals to a Vec<u8> and returns UTF-8 string.
    fn write_to_string(ledger: &SavingsLedger) -> String {
        let mut out = Vec::new();
        write_totals(&mut out, ledger).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn writes_header_and_rows_in_roster_order() {
        let s = write_to_string(&SavingsLedger::new());

        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 4, "expected header + 2 people + combined");
        assert_eq!(lines[0], "person,completed,saved,remaining,fines");
        assert_eq!(lines[1], "Michael,0,0,505000,0");
        assert_eq!(lines[2], "Madina,0,0,505000,0");
        assert_eq!(lines[3], "combined,0,0,1010000,0");
    }

    #[test]
    fn combined_row_sums_both_people() {
        let mut ledger = SavingsLedger::new();
        ledger.get_or_create_account(Person::Michael).pressed[0] = true; // 100
        let madina = ledger.get_or_create_account(Person::Madina);
        madina.pressed[9] = true; // 1000
        madina.fines = Money::new(200);

        let s = write_to_string(&ledger);
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines[1], "Michael,1,100,504900,0");
        assert_eq!(lines[2], "Madina,1,1000,504000,200");
        assert_eq!(lines[3], "combined,2,1100,1008900,200");
    }
}
