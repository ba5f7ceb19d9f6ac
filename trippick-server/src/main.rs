//! Entry point for the `trippick` server binary.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = trippick_server::run() {
        eprintln!("trippick: {err}");
        std::process::exit(1);
    }
}
