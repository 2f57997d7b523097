//! Core types, declaration graph, and configuration for tasklint.
//!
//! This crate provides the foundational data structures used across all tasklint crates:
//! - [`types`]: Declarations, type references, locations, and graph errors
//! - [`graph`]: The read-only [`DeclarationGraph`](graph::DeclarationGraph) and its queries
//! - [`builder`]: Programmatic graph construction
//! - [`identity`]: Task identities and the per-pass [`TaskRegistry`](identity::TaskRegistry)
//! - [`metadata`]: Loading identities from the config and side-car channels
//! - [`config`]: Configuration loading from `.tasklint/tasklint.json`

pub mod builder;
pub mod config;
pub mod graph;
pub mod identity;
pub mod metadata;
pub mod types;
