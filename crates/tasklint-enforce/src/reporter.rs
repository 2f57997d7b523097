//! Per-pass diagnostic deduplication and the host reporting seam.
//!
//! Rule modules may be invoked several times for the same declaration (a type
//! is inspected once per member, a return type once per task using it). The
//! [`Reporter`] guarantees each `(declaration, rule, argument)` violation
//! reaches the [`DiagnosticSink`] at most once per pass, even when modules run
//! on different worker threads.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use tasklint_core::types::{DeclId, Location};

use crate::rules::Rule;
use crate::suppress::SuppressionManager;
use crate::types::Diagnostic;

/// Receives diagnostics as they are found. Implementations must tolerate
/// calls from several threads.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Sink that keeps everything in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Diagnostic>> {
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Diagnostics in arrival order, which depends on thread scheduling.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Diagnostics ordered by location, then code, then message.
    pub fn into_sorted(self) -> Vec<Diagnostic> {
        let mut diagnostics = self.into_diagnostics();
        diagnostics.sort_by(|a, b| {
            a.primary_location()
                .cmp(&b.primary_location())
                .then_with(|| a.code.cmp(&b.code))
                .then_with(|| a.message.cmp(&b.message))
        });
        diagnostics
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.lock().push(diagnostic);
    }
}

/// Dedup key for one violation instance within a pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReportedKey {
    pub declaration: Option<DeclId>,
    pub rule: Rule,
    pub argument: Option<String>,
}

impl ReportedKey {
    pub fn new(declaration: DeclId, rule: Rule) -> Self {
        Self {
            declaration: Some(declaration),
            rule,
            argument: None,
        }
    }

    pub fn with_argument(declaration: DeclId, rule: Rule, argument: &str) -> Self {
        Self {
            declaration: Some(declaration),
            rule,
            argument: Some(argument.to_string()),
        }
    }

    /// Key for a diagnostic not attached to any declaration.
    pub fn pass(rule: Rule) -> Self {
        Self {
            declaration: None,
            rule,
            argument: None,
        }
    }
}

pub struct Reporter<'a> {
    sink: &'a dyn DiagnosticSink,
    suppressions: &'a SuppressionManager,
    reported: Mutex<HashSet<ReportedKey>>,
    forwarded: AtomicUsize,
}

impl<'a> Reporter<'a> {
    pub fn new(sink: &'a dyn DiagnosticSink, suppressions: &'a SuppressionManager) -> Self {
        Self {
            sink,
            suppressions,
            reported: Mutex::new(HashSet::new()),
            forwarded: AtomicUsize::new(0),
        }
    }

    /// Forward `diagnostic` if `key` has not been seen in this pass.
    /// Returns true when it was forwarded.
    pub fn report_once(&self, key: ReportedKey, diagnostic: Diagnostic) -> bool {
        let inserted = self
            .reported
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key);
        if !inserted {
            return false;
        }
        self.sink.report(self.suppressions.apply(diagnostic));
        self.forwarded.fetch_add(1, Ordering::Relaxed);
        true
    }

    /// Build a diagnostic for the key's declaration and report it once.
    pub fn emit(
        &self,
        key: ReportedKey,
        rule: Rule,
        arguments: Vec<String>,
        locations: Vec<Location>,
    ) -> bool {
        let declaration = key.declaration;
        let mut diagnostic = Diagnostic::new(rule, arguments, locations);
        diagnostic.declaration = declaration;
        self.report_once(key, diagnostic)
    }

    /// Number of diagnostics forwarded to the sink so far.
    pub fn forwarded(&self) -> usize {
        self.forwarded.load(Ordering::Relaxed)
    }
}
