use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use tasklint_core::config::TasklintConfig;
use tasklint_core::graph::DeclarationGraph;
use tasklint_core::identity::TaskRegistry;
use tasklint_core::metadata::MetadataSource;
use tasklint_core::types::{DeclKind, Declaration};

use crate::context::{PassContext, RuleSettings};
use crate::reporter::{CollectingSink, DiagnosticSink, Reporter};
use crate::rules::{Rule, Severity};
use crate::suppress::SuppressionManager;
use crate::types::{CheckInfo, CheckResult, Diagnostic};
use crate::{configuration, documentation, exposure, naming, parameters, structure};

/// Host-controlled stop flag, checked before each declaration.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub declarations_analyzed: u32,
    pub tasks_matched: u32,
    pub diagnostics_reported: u32,
    pub cancelled: bool,
}

/// Runs every enabled rule module over a declaration graph.
pub struct EnforcementEngine {
    settings: RuleSettings,
    suppressions: SuppressionManager,
}

impl Default for EnforcementEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl EnforcementEngine {
    pub fn new() -> Self {
        Self {
            settings: RuleSettings::default(),
            suppressions: SuppressionManager::new(),
        }
    }

    /// Create an engine configured from a `TasklintConfig`.
    pub fn with_config(config: &TasklintConfig) -> Self {
        let mut engine = Self {
            settings: RuleSettings::from(config),
            suppressions: SuppressionManager::new(),
        };
        for code in &config.suppress {
            engine.suppress(code);
        }
        for (code, level) in &config.severity {
            match (Rule::from_code(code), Severity::parse(level)) {
                (Some(_), Some(severity)) => engine.suppressions.override_severity(code, severity),
                (None, _) => tracing::warn!(code = %code, "unknown rule in severity overrides"),
                (_, None) => tracing::warn!(code = %code, level = %level, "unknown severity"),
            }
        }
        engine
    }

    pub fn settings(&self) -> &RuleSettings {
        &self.settings
    }

    /// Report diagnostics of `code` as suppressed notes.
    pub fn suppress(&mut self, code: &str) {
        if Rule::from_code(code).is_none() {
            tracing::warn!(code = %code, "suppressing unknown rule");
        }
        self.suppressions.suppress(code);
    }

    /// One analysis pass. Diagnostics go to `sink` as they are found.
    pub fn run(
        &self,
        graph: &DeclarationGraph,
        registry: &TaskRegistry,
        sink: &dyn DiagnosticSink,
        cancel: &CancellationToken,
    ) -> PassSummary {
        let reporter = Reporter::new(sink, &self.suppressions);
        if !configuration::check_registry(&reporter, registry) {
            return PassSummary {
                diagnostics_reported: reporter.forwarded() as u32,
                ..PassSummary::default()
            };
        }

        let ctx = PassContext::new(graph, registry, &reporter, &self.settings);
        tracing::debug!(
            declarations = graph.len(),
            identities = registry.len(),
            matched = ctx.matcher.len(),
            "starting pass"
        );

        let analyzed = AtomicU32::new(0);
        graph.declarations().par_iter().for_each(|decl| {
            if cancel.is_cancelled() {
                return;
            }
            analyzed.fetch_add(1, Ordering::Relaxed);
            self.visit(&ctx, decl);
        });

        let summary = PassSummary {
            declarations_analyzed: analyzed.into_inner(),
            tasks_matched: ctx.matcher.len() as u32,
            diagnostics_reported: reporter.forwarded() as u32,
            cancelled: cancel.is_cancelled(),
        };
        tracing::info!(
            analyzed = summary.declarations_analyzed,
            matched = summary.tasks_matched,
            reported = summary.diagnostics_reported,
            cancelled = summary.cancelled,
            "pass finished"
        );
        summary
    }

    fn visit(&self, ctx: &PassContext<'_>, decl: &Declaration) {
        let s = &self.settings;
        match decl.kind {
            DeclKind::Namespace => {
                if s.naming {
                    naming::check_namespace(ctx, decl);
                }
            }
            DeclKind::Type { .. } => {
                if s.naming {
                    naming::check_type(ctx, decl);
                }
                if s.structure {
                    structure::check_type(ctx, decl);
                }
                if s.documentation {
                    documentation::check_declaration(ctx, decl);
                }
            }
            DeclKind::Method { .. } => {
                if s.naming {
                    naming::check_method(ctx, decl);
                }
                if s.parameters {
                    parameters::check_method(ctx, decl);
                }
                if s.structure {
                    structure::check_method(ctx, decl);
                }
                if s.documentation {
                    documentation::check_declaration(ctx, decl);
                }
                if s.types {
                    exposure::check_method(ctx, decl);
                }
            }
            DeclKind::Property { .. } => {
                if s.documentation {
                    documentation::check_declaration(ctx, decl);
                }
            }
            DeclKind::Parameter { .. } => {}
        }
    }

    /// Run a full pass and collect the result. Registries built in code
    /// count as configuration-sourced.
    pub fn check(&self, graph: &DeclarationGraph, registry: &TaskRegistry) -> CheckResult {
        let source = if registry.is_empty() {
            MetadataSource::None
        } else {
            MetadataSource::Config
        };
        self.check_with_source(graph, registry, source)
    }

    /// An empty registry always reports source `none`.
    pub fn check_with_source(
        &self,
        graph: &DeclarationGraph,
        registry: &TaskRegistry,
        source: MetadataSource,
    ) -> CheckResult {
        let source = if registry.is_empty() {
            MetadataSource::None
        } else {
            source
        };
        let sink = CollectingSink::new();
        let summary = self.run(graph, registry, &sink, &CancellationToken::new());

        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut notes = Vec::new();
        Self::partition_diagnostics(sink.into_sorted(), &mut errors, &mut warnings, &mut notes);

        let status = if !errors.is_empty() {
            "error"
        } else if !warnings.is_empty() {
            "warning"
        } else {
            "ok"
        };

        CheckResult {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "check".to_string(),
            status: status.to_string(),
            identities: registry.iter().map(|i| i.path().to_string()).collect(),
            errors,
            warnings,
            notes,
            info: CheckInfo {
                declarations_analyzed: summary.declarations_analyzed,
                tasks_matched: summary.tasks_matched,
                metadata_source: source.as_str().to_string(),
                cancelled: summary.cancelled,
            },
        }
    }

    pub(crate) fn partition_diagnostics(
        diagnostics: Vec<Diagnostic>,
        errors: &mut Vec<Diagnostic>,
        warnings: &mut Vec<Diagnostic>,
        notes: &mut Vec<Diagnostic>,
    ) {
        for d in diagnostics {
            match d.severity {
                _ if d.suppressed => notes.push(d),
                Severity::Error => errors.push(d),
                Severity::Warning => warnings.push(d),
                Severity::Info => notes.push(d),
            }
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
