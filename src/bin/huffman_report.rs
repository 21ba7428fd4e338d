use std::process::ExitCode;

use huffman_verifier::{analyze_name, Placement};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(name) = args.next() else {
        eprintln!("usage: huffman_report <name> [high|low]");
        return ExitCode::from(2);
    };

    let placement = match args.next().map(|s| s.parse::<Placement>()) {
        None => Placement::default(),
        Some(Ok(p)) => p,
        Some(Err(e)) => {
            error!("{e}");
            return ExitCode::from(2);
        }
    };

    match analyze_name(&name, placement) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
