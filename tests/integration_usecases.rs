use std::fs;
use std::io::Cursor;

use savings_tracker::domain::person::Person;
use savings_tracker::domain::prefs::Language;
use savings_tracker::io::store::{MemStore, StateDocument, StateStore};
use savings_tracker::worker::processor::Processor;

fn run_commands(input_csv: &str) -> StateDocument {
    let store = MemStore::new();
    let mut state = store.load().expect("fresh state");
    let mut processor = Processor::new(store);

    let rdr = Cursor::new(input_csv.as_bytes());
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(rdr);

    for row in savings_tracker::io::reader::read_commands(&mut csv_reader) {
        let command = row.expect("failed to parse input row");
        processor
            .process(&mut state, command)
            .expect("failed to process command");
    }

    state
}

fn run_case(input_csv: &str) -> String {
    let state = run_commands(input_csv);

    let mut out = Vec::<u8>::new();
    savings_tracker::io::writer::write_totals(&mut out, &state.ledger)
        .expect("failed to write output CSV");
    String::from_utf8(out).expect("output was not valid UTF-8")
}

fn normalize_csv(s: &str) -> String {
    // Normalize line endings + trim trailing whitespace lines.
    // Also allows tests to be stable across platforms.
    s.replace("\r\n", "\n")
        .lines()
        .map(|l| l.trim_end())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn case1_marks_with_idempotent_re_tap() {
    let input = fs::read_to_string("tests/fixtures/case1_input.csv").unwrap();
    let expected = fs::read_to_string("tests/fixtures/case1_expected.csv").unwrap();

    let actual = run_case(&input);

    assert_eq!(normalize_csv(&actual), normalize_csv(&expected));
}

#[test]
fn case2_fines_and_undo_interleaved() {
    let input = fs::read_to_string("tests/fixtures/case2_input.csv").unwrap();
    let expected = fs::read_to_string("tests/fixtures/case2_expected.csv").unwrap();

    let actual = run_case(&input);

    assert_eq!(normalize_csv(&actual), normalize_csv(&expected));
}

#[test]
fn case3_prefs_commands_alongside_ledger_commands() {
    let input = fs::read_to_string("tests/fixtures/case3_input.csv").unwrap();
    let expected = fs::read_to_string("tests/fixtures/case3_expected.csv").unwrap();

    let actual = run_case(&input);

    assert_eq!(normalize_csv(&actual), normalize_csv(&expected));
}

#[test]
fn prefs_survive_the_command_stream() {
    let input = fs::read_to_string("tests/fixtures/case3_input.csv").unwrap();
    let state = run_commands(&input);

    let chat = state.prefs.get("chat-1");
    assert_eq!(chat.language, Language::Ru);
    assert_eq!(chat.last_person, Some(Person::Madina));
}
