use std::io::{BufWriter, stdout};

use crate::{
    common::error::AppError,
    io::{
        reader,
        store::{JsonFileStore, StateStore},
        writer,
    },
    worker::processor::Processor,
};

const DEFAULT_STATE_FILE: &str = "savings_state.json";

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    if args.len() < 2 {
        return Err(AppError::MissingArg);
    }
    let input_path = &args[1];
    let state_path = args.get(2).map(String::as_str).unwrap_or(DEFAULT_STATE_FILE);

    let store = JsonFileStore::new(state_path);
    let mut state = store.load()?;
    let mut processor = Processor::new(store);

    let file = std::fs::File::open(input_path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let mut processed = 0usize;
    for command in reader::read_commands(&mut reader) {
        let command = command.map_err(AppError::Parse)?;
        processor.process(&mut state, command)?;
        processed += 1;
    }
    log::info!("processed {processed} commands from {input_path}, state in {state_path}");

    // After processing all commands, write the progress totals to stdout
    let stdout = stdout();
    let writer = BufWriter::new(stdout.lock());
    writer::write_totals(writer, &state.ledger)?;

    Ok(())
}
