//! Entry point for the TripWeaver command line.
#![forbid(unsafe_code)]

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    if let Err(err) = tripweaver_cli::run() {
        eprintln!("tripweaver: {err}");
        std::process::exit(1);
    }
}
