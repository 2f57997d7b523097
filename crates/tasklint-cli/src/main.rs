//! tasklint CLI: convention checks for integration task libraries.
//!
//! This binary provides the `tasklint` command with subcommands for checking
//! a declaration graph, listing rules and inspecting task identities.
//! See `tasklint --help` for usage.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let formatter: Box<dyn tasklint_output::OutputFormatter> = if cli.json {
        Box::new(tasklint_output::json::JsonFormatter)
    } else {
        Box::new(tasklint_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Check {
            graph,
            metadata,
            task_methods,
            root_namespace,
            suppress,
            strict,
        } => commands::check::run(
            &*formatter,
            cli.verbose,
            commands::check::CheckArgs {
                graph,
                metadata,
                task_methods,
                root_namespace,
                suppress,
                strict,
            },
        ),
        Commands::Rules => commands::rules::run(&*formatter),
        Commands::Identity {
            path,
            root_namespace,
        } => commands::identity::run(&*formatter, &path, root_namespace.as_deref()),
    };

    std::process::exit(exit_code);
}

/// Logs go to stderr so stdout stays parseable. `--verbose` forces debug.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
