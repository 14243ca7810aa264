//! xpcgen: generate and verify the xPC Target host API bindings.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "xpcgen", version, about = "Binding generator for the xPC Target host API")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the binding module from the vendor headers
    Generate {
        /// Function declaration header (xpcapi.h)
        #[arg(long)]
        header: PathBuf,
        /// Constants header (xpcapiconst.h)
        #[arg(long)]
        constants: PathBuf,
        /// Generator configuration (default: built-in conventions)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output Rust module
        #[arg(long)]
        output: PathBuf,
    },
    /// Check that a generated module is current with the headers
    Check {
        /// Function declaration header (xpcapi.h)
        #[arg(long)]
        header: PathBuf,
        /// Constants header (xpcapiconst.h)
        #[arg(long)]
        constants: PathBuf,
        /// Generator configuration the module was generated with
        #[arg(long)]
        config: Option<PathBuf>,
        /// Previously generated module
        #[arg(long)]
        artifact: PathBuf,
    },
    /// Print parsed functions and constant groups
    Inspect {
        /// Function declaration header (xpcapi.h)
        #[arg(long)]
        header: PathBuf,
        /// Constants header (xpcapiconst.h)
        #[arg(long)]
        constants: Option<PathBuf>,
        /// Generator configuration (default: built-in conventions)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Default filter from `-v` count; `RUST_LOG` still wins.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            header,
            constants,
            config,
            output,
        } => commands::generate::run(&header, &constants, config.as_deref(), &output),

        Commands::Check {
            header,
            constants,
            config,
            artifact,
        } => commands::check::run(&header, &constants, config.as_deref(), &artifact),

        Commands::Inspect {
            header,
            constants,
            config,
            json,
        } => commands::inspect::run(&header, constants.as_deref(), config.as_deref(), json),
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    const HEADER: &str = "\
XPCAPIFUNC(int, xPCGetLastError)(void);
XPCAPIFUNC(void, xPCErrorMsg)(int error_number, char *error_message);
XPCAPIFUNC(double, xPCGetExecTime)(int port);
";
    const CONSTANTS: &str = "#define MAX_SCOPES 30\n#define SCTYPE_HOST 1\n";

    /// Full workflow: generate, check, edit header, check again.
    #[test]
    fn generate_then_check_workflow() {
        let dir = tempfile::tempdir().unwrap();
        let header = dir.path().join("xpcapi.h");
        let constants = dir.path().join("xpcapiconst.h");
        let output = dir.path().join("src/raw/generated.rs");
        std::fs::write(&header, HEADER).unwrap();
        std::fs::write(&constants, CONSTANTS).unwrap();

        commands::generate::run(&header, &constants, None, &output).unwrap();
        assert!(output.is_file());
        commands::check::run(&header, &constants, None, &output).unwrap();

        std::fs::write(
            &header,
            format!("{HEADER}XPCAPIFUNC(double, xPCGetStopTime)(int port);\n"),
        )
        .unwrap();
        let err = commands::check::run(&header, &constants, None, &output).unwrap_err();
        assert!(err.to_string().contains("stale"));
    }

    #[test]
    fn cli_parses_verbosity_and_subcommand() {
        let cli = Cli::try_parse_from([
            "xpcgen", "-vv", "check", "--header", "a.h", "--constants", "b.h", "--artifact",
            "c.rs",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Check { .. }));
    }
}
