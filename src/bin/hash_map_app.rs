use splay_collections::app::{self, App};
use std::io::{self, BufWriter};
use std::process;

fn main() {
    app::init_logging();
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(error) = app::run(App::HashMap, stdin.lock(), BufWriter::new(stdout.lock())) {
        eprintln!("Unhandled exception: {}", error);
        process::exit(1);
    }
}
