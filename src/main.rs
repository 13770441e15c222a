use savings_tracker::app;

fn main() {
    env_logger::init();

    if let Err(err) = app::run(std::env::args()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
