//! Entry point for the neoscout command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = neoscout_cli::run() {
        eprintln!("neoscout: {err}");
        std::process::exit(1);
    }
}
