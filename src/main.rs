//! bstt-sync main entrypoint.

use bstt_sync::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
