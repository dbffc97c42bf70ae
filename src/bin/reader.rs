//! Prints a file's contents: `reader <file>`.

use std::process::ExitCode;

use fileserve::files::read_contents;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let Some(filename) = std::env::args().nth(1) else {
        eprintln!("usage: reader <file>");
        return ExitCode::from(2);
    };

    match read_contents(&filename).await {
        Ok(text) => {
            println!("File Contents:");
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Read failed");
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}
