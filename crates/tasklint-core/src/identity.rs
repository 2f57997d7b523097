//! Task identity registry.
//!
//! A task identity is the dot-qualified path of a task entry point, e.g.
//! `Frends.Echo.Execute.Echo.Execute`. Conforming paths decompose into
//! vendor / system / action (the first three segments), which the naming
//! rules map onto namespace / type / method names.

use serde::{Deserialize, Serialize};

pub const SEPARATOR: char = '.';

/// Errors raised while parsing identity metadata.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("invalid task identity '{path}': must have at least three segments and not start or end with '.'")]
    InvalidPath { path: String },

    #[error("invalid root namespace '{root}': must not start or end with '.'")]
    InvalidRootNamespace { root: String },
}

/// One registered task entry point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskIdentity {
    path: String,
    vendor: Option<String>,
    system: Option<String>,
    action: Option<String>,
}

impl TaskIdentity {
    /// Parse a path, optionally in the context of the project's root namespace.
    ///
    /// Paths with five or more segments decompose into vendor/system/action,
    /// unless the root namespace prefixes the path without itself having
    /// exactly three segments.
    pub fn parse(path: &str, root_namespace: Option<&str>) -> Result<Self, IdentityError> {
        let segments: Vec<&str> = path.split(SEPARATOR).collect();
        if path.trim().is_empty()
            || path.starts_with(SEPARATOR)
            || path.ends_with(SEPARATOR)
            || segments.len() < 3
        {
            return Err(IdentityError::InvalidPath {
                path: path.to_string(),
            });
        }

        if let Some(root) = root_namespace {
            if root.starts_with(SEPARATOR) || root.ends_with(SEPARATOR) {
                return Err(IdentityError::InvalidRootNamespace {
                    root: root.to_string(),
                });
            }
        }

        if segments.len() < 5 {
            return Ok(Self::unresolved(path));
        }

        if let Some(root) = root_namespace.filter(|r| !r.is_empty()) {
            let prefixes_path = path
                .strip_prefix(root)
                .is_some_and(|rest| rest.starts_with(SEPARATOR));
            if prefixes_path && root.split(SEPARATOR).count() != 3 {
                return Ok(Self::unresolved(path));
            }
        }

        Ok(Self {
            path: path.to_string(),
            vendor: Some(segments[0].to_string()),
            system: Some(segments[1].to_string()),
            action: Some(segments[2].to_string()),
        })
    }

    fn unresolved(path: &str) -> Self {
        Self {
            path: path.to_string(),
            vendor: None,
            system: None,
            action: None,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn vendor(&self) -> Option<&str> {
        self.vendor.as_deref()
    }

    pub fn system(&self) -> Option<&str> {
        self.system.as_deref()
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// True when vendor, system and action are all known.
    pub fn is_resolved(&self) -> bool {
        self.vendor.is_some() && self.system.is_some() && self.action.is_some()
    }

    /// Namespace the task's own types live in: the path minus the type and
    /// method segments.
    pub fn namespace(&self) -> &str {
        let mut end = self.path.len();
        for _ in 0..2 {
            match self.path[..end].rfind(SEPARATOR) {
                Some(pos) => end = pos,
                None => return "",
            }
        }
        &self.path[..end]
    }

    /// `(from, to)` for converter actions named `Convert{From}To{To}`.
    pub fn converter_formats(&self) -> Option<(&str, &str)> {
        let rest = self.action()?.strip_prefix("Convert")?;
        let (split, _) = rest.match_indices("To").find(|(idx, _)| {
            *idx > 0
                && rest[idx + 2..]
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_uppercase())
        })?;
        Some((&rest[..split], &rest[split + 2..]))
    }
}

impl std::fmt::Display for TaskIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path)
    }
}

/// Ordered, immutable set of identities for one analysis pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskRegistry {
    identities: Vec<TaskIdentity>,
}

impl TaskRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse every path; the first malformed entry aborts construction.
    pub fn parse<'a, I>(paths: I, root_namespace: Option<&str>) -> Result<Self, IdentityError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let identities = paths
            .into_iter()
            .map(|p| TaskIdentity::parse(p, root_namespace))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { identities })
    }

    /// Parse a `;`-delimited list. Entries are trimmed and blanks skipped.
    pub fn from_delimited(list: &str, root_namespace: Option<&str>) -> Result<Self, IdentityError> {
        Self::parse(
            list.split(';').map(str::trim).filter(|p| !p.is_empty()),
            root_namespace,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskIdentity> {
        self.identities.iter()
    }

    pub fn get(&self, index: usize) -> Option<&TaskIdentity> {
        self.identities.get(index)
    }

    /// Registry index of the first identity with this exact path.
    pub fn position(&self, path: &str) -> Option<usize> {
        self.identities.iter().position(|t| t.path == path)
    }
}
