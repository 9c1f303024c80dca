use std::io;
use std::process::exit;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let code = highcard_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    exit(code);
}
