use std::fs::OpenOptions;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use signpost::cli::{self, Args, CliError};
use signpost::core::clock::SystemClock;
use signpost::core::config;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};

fn init_logging(args: &Args) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    // A log file gets everything; the terminal only gets what -v asks for
    if let Some(path) = &args.log_file {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(log_file) => {
                let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
                return;
            }
            Err(e) => eprintln!("signpost: cannot open log file {}: {e}", path.display()),
        }
    }

    let _ = TermLogger::init(level, log_config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_logging(&args);

    log::info!("signpost starting: {:?}", args.command);

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };

    let result = loaded.map_err(CliError::from).and_then(|config| {
        let mut out = io::stdout().lock();
        cli::run(&args.command, &config, &SystemClock, &mut out)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("signpost: {e}");
            ExitCode::FAILURE
        }
    }
}
