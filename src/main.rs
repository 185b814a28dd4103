// src/main.rs

use std::io;

use sysbak::{cli, logging, run, term::Console};

#[tokio::main]
async fn main() {
    let args = cli::parse();
    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("sysbak error: {err:?}");
        std::process::exit(1);
    }

    let term = Console::new(!args.no_color);
    match run(&args).await {
        Ok(report) => std::process::exit(report.exit_code()),
        Err(err) => {
            if err.is_config_error() {
                let _ = term.fatal(&mut io::stdout(), &err.to_string());
            } else {
                eprintln!("sysbak error: {err:?}");
            }
            std::process::exit(1);
        }
    }
}
