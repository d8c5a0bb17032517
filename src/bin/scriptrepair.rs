use std::process;

fn main() {
    if let Err(err) = scriptrepair::cli::run() {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
