use clap::{Arg, ArgMatches, Command};
use console::Style;
use pal_core::{Script, analyze_source, generate_error_report};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    init_logging();

    let cli = Command::new("pal")
        .version(VERSION)
        .about("Checks a PAL program for syntax and semantic errors");

    let cli = setup_cli(cli);
    let matches = cli.get_matches();
    dispatch(&matches)
}

/// Log records go to stderr so they never mix with the report on stdout.
/// The filter is read from `PAL_LOG` (e.g. `PAL_LOG=pal_core=trace`).
fn init_logging() {
    let filter = EnvFilter::try_from_env("PAL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn setup_cli(cli: Command) -> Command {
    cli.arg(
        Arg::new("file")
            .help("The PAL source file to check")
            .required(true)
            .value_parser(clap::value_parser!(PathBuf))
            .index(1),
    )
}

fn dispatch(matches: &ArgMatches) -> ExitCode {
    let Some(file) = matches.get_one::<PathBuf>("file") else {
        return ExitCode::from(2);
    };

    let banner = Style::new().bold();
    println!("{}", banner.apply_to(format!("PAL compiler front-end {}", VERSION)));

    log::debug!("checking {}", file.display());
    let script = match Script::new(file.clone()) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("{}", e.message());
            return ExitCode::from(2);
        }
    };

    let diagnostics = analyze_source(&script);
    for diagnostic in &diagnostics {
        println!("{}", generate_error_report(diagnostic));
    }
    println!("{} errors found.", diagnostics.len());

    if diagnostics.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
