use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "tasklint",
    version,
    about = "Convention checks for integration task libraries"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Debug logging on stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Check a declaration graph against the registered tasks
    Check {
        /// Declaration graph exported by a front-end
        #[arg(long, default_value = "graph.json")]
        graph: String,
        /// Task metadata side-car (default: <project>/TaskMetadata.json)
        #[arg(long)]
        metadata: Option<String>,
        /// `;`-separated task method paths, overriding the side-car
        #[arg(long, env = "TASKLINT_TASK_METHODS")]
        task_methods: Option<String>,
        /// Project root namespace
        #[arg(long)]
        root_namespace: Option<String>,
        /// Suppress a rule code (repeatable)
        #[arg(long)]
        suppress: Vec<String>,
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },

    /// List every rule with its default severity
    Rules,

    /// Show how a task method path decomposes
    Identity {
        /// Task method path, e.g. Vendor.System.Action.Type.Method
        path: String,
        /// Project root namespace
        #[arg(long)]
        root_namespace: Option<String>,
    },
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
