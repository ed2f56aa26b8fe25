fn main() {
    if let Err(err) = mdcombine::run() {
        eprintln!("{}", mdcombine::format_error(&err));
        std::process::exit(1);
    }
}
