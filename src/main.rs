use clap::Parser;
use color_eyre::Result;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use pbcopy::config;
use pbcopy::dispatch::{self, Outcome};
use pbcopy::environment::{Environment, PsProcessTable};

const USAGE: &str = "Usage:\n  pbcopy FILE\n  some-command | pbcopy\n";

/// Copy to the terminal clipboard over OSC 52
#[derive(Parser, Debug)]
#[command(version, disable_help_flag = true)]
struct Args {
    /// Input file (if not provided, reads from stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_logging();
    color_eyre::install()?;

    // Only the first argument counts: a help flag there prints usage,
    // anything else is the input file and later arguments are ignored
    let argv: Vec<OsString> = std::env::args_os().take(2).collect();
    if is_help_flag(argv.get(1)) {
        print_usage_and_exit();
    }
    let args = Args::parse_from(argv);

    let config_result = config::load_config();
    if let Some(warning) = &config_result.warning {
        log::warn!("{}", warning);
    }

    let environment = Environment::from_env();
    log::debug!("Environment: {:?}", environment);

    let outcome = dispatch::run(
        args.input.as_deref(),
        io::stdin().lock(),
        io::stdout().lock(),
        &environment,
        &config_result.config,
        &PsProcessTable,
    )?;

    match outcome {
        Outcome::Empty => log::debug!("Nothing copied"),
        Outcome::Copied { mode, bytes } => log::debug!("Wrote {} bytes ({:?})", bytes, mode),
    }

    Ok(())
}

/// Logs go to stderr so they never mix with the escape sequence on stdout
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn is_help_flag(arg: Option<&OsString>) -> bool {
    arg.is_some_and(|arg| arg == "-h" || arg == "--help")
}

fn print_usage_and_exit() -> ! {
    let mut stdout = io::stdout();
    let _ = stdout.write_all(USAGE.as_bytes());
    let _ = stdout.flush();
    std::process::exit(1);
}
