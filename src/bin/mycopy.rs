//! Copies one file to another: `mycopy <src> <dest>`.

use std::process::ExitCode;

use fileserve::files::copy_file;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(src), Some(dest)) = (args.next(), args.next()) else {
        eprintln!("usage: mycopy <src> <dest>");
        return ExitCode::from(2);
    };

    match copy_file(&src, &dest).await {
        Ok(_) => {
            println!("Copied from {src} to {dest}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Copy failed");
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}
