use std::path::{Path, PathBuf};

use tasklint_core::config::{TasklintConfig, CONFIG_DIR};
use tasklint_core::metadata::{ROOT_NAMESPACE_KEY, TASK_METHODS_KEY};
use tasklint_enforce::engine::EnforcementEngine;
use tasklint_enforce::project;
use tasklint_enforce::types::CheckResult;
use tasklint_output::OutputFormatter;

#[derive(Debug, Default)]
pub struct CheckArgs {
    pub graph: String,
    pub metadata: Option<String>,
    pub task_methods: Option<String>,
    pub root_namespace: Option<String>,
    pub suppress: Vec<String>,
    pub strict: bool,
}

/// Run `tasklint check`: one analysis pass over an exported declaration graph.
pub fn run(formatter: &dyn OutputFormatter, verbose: bool, args: CheckArgs) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("tasklint check: failed to get current directory: {}", e);
            return 2;
        }
    };
    run_in(formatter, verbose, &cwd, args)
}

pub(crate) fn run_in(
    formatter: &dyn OutputFormatter,
    verbose: bool,
    root: &Path,
    args: CheckArgs,
) -> i32 {
    let mut config = TasklintConfig::load(&root.join(CONFIG_DIR));
    if let Some(methods) = args.task_methods {
        config.options.insert(TASK_METHODS_KEY.to_string(), methods);
    }
    if let Some(ns) = args.root_namespace {
        config.options.insert(ROOT_NAMESPACE_KEY.to_string(), ns);
    }

    let graph = match project::load_graph(&resolve(root, &args.graph)) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("tasklint check: {}", e);
            return 2;
        }
    };

    tracing::debug!(declarations = graph.len(), "declaration graph loaded");

    let sidecar = match &args.metadata {
        Some(path) => resolve(root, path),
        None => project::sidecar_path(root, &config),
    };
    let (registry, source) = match project::load_metadata(&config.options, &sidecar) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("tasklint check: {}", e);
            return 2;
        }
    };

    let mut engine = EnforcementEngine::with_config(&config);
    for code in &args.suppress {
        engine.suppress(code);
    }

    tracing::debug!(
        identities = registry.len(),
        source = source.as_str(),
        "task metadata loaded"
    );
    let result = engine.check_with_source(&graph, &registry, source);
    output_result(formatter, &result, args.strict, verbose)
}

fn output_result(
    formatter: &dyn OutputFormatter,
    result: &CheckResult,
    strict: bool,
    verbose: bool,
) -> i32 {
    let has_errors = !result.errors.is_empty();
    let has_warnings = !result.warnings.is_empty();

    if verbose && !has_errors && !has_warnings {
        eprintln!(
            "tasklint check: clean, {} declaration(s) in {} task(s)",
            result.info.declarations_analyzed, result.info.tasks_matched
        );
    }

    let output = formatter.format_check(result);
    if !output.is_empty() {
        println!("{}", output);
    }

    if has_errors || (strict && has_warnings) {
        1
    } else {
        0
    }
}

fn resolve(root: &Path, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        root.join(p)
    }
}
