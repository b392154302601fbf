fn main() {
    if let Err(e) = labelpaint::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
