//! CLI entry point - the composition root.
//!
//! Wires settings, the process table and the platform terminator together
//! and maps handler results to exit codes. A successful restart is the one
//! place the supervisor terminates itself: the replacement instance starts
//! independently of this process's lifetime.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use respawn_cli::{Cli, CliConfig, CliError, Commands, handlers};
use respawn_runtime::{KillOutcome, RestartOutcome};

fn main() {
    // Load environment variables before anything reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match cli.config {
        Some(ref path) => CliConfig::load(path)?,
        None => CliConfig::with_defaults()?,
    };

    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command()
            .print_help()
            .map_err(|e| CliError::Io(e.to_string()))?;
        return Ok(());
    };

    match command {
        Commands::Restart { executable } => {
            match handlers::restart_server(&config, executable)? {
                RestartOutcome::Shutdown => {
                    println!("Replacement launcher spawned, exiting.");
                    // The new instance starts on its own; this process is done
                    std::process::exit(0);
                }
            }
        }
        Commands::Kill => match handlers::kill_server(&config)? {
            KillOutcome::Killed => println!("Server process killed."),
            KillOutcome::AlreadyExited => println!("Server process had already exited."),
        },
        Commands::Status => {
            let handle = handlers::server_status(&config)?;
            println!(
                "Server running: pid {} ({})",
                handle.pid,
                handle.executable.display()
            );
        }
        Commands::Run { args } => {
            let status = handlers::run_server(&config, args)?;
            if !status.success() {
                return Err(CliError::Process(format!(
                    "run script exited with {status}"
                )));
            }
            println!("Server launched.");
        }
    }

    Ok(())
}
