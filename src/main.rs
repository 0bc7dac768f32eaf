use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "docforge")]
#[command(
    version,
    about = "Regenerates the decompiled-server API reference with doxygen"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the API reference from the decompiled sources
    Generate {
        #[arg(long, help = "Decompiled source directory (input)")]
        source: Option<PathBuf>,
        #[arg(long, short, help = "Output directory for the generated reference")]
        output: Option<PathBuf>,
        #[arg(
            long,
            env = "DOCFORGE_DOXYGEN_BIN",
            help = "Doxygen executable to invoke"
        )]
        doxygen_bin: Option<PathBuf>,
        #[arg(long = "dry-run", help = "Print the Doxyfile that would be used, then exit")]
        dry_run: bool,
    },

    /// Verify doxygen and the decompiled sources are in place
    Check,

    /// Show workspace status
    Status {
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },

    /// Remove the generated reference output
    Clean,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },
    /// Show the configuration file path
    Path,
    /// Write a commented default docforge.toml
    Init {
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        // Extract panic message
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mdocforge encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }

        // Call default hook for backtrace (if RUST_BACKTRACE=1)
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    // Install panic handler first
    setup_panic_handler();

    // Run the actual CLI
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Generate {
            source,
            output,
            doxygen_bin,
            dry_run,
        } => {
            use docforge::cli::commands::generate::GenerateOptions;

            docforge::cli::commands::generate::run(GenerateOptions {
                source,
                output,
                doxygen_bin,
                dry_run,
            })?;
        }
        Commands::Check => {
            docforge::cli::commands::check::run()?;
        }
        Commands::Status { format } => {
            docforge::cli::commands::status::run(&format)?;
        }
        Commands::Clean => {
            docforge::cli::commands::clean::run()?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                docforge::cli::commands::config::show(&format)?;
            }
            ConfigAction::Path => {
                docforge::cli::commands::config::path()?;
            }
            ConfigAction::Init { force } => {
                docforge::cli::commands::config::init(force)?;
            }
        },
    }

    Ok(())
}
