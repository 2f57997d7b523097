//! Convention enforcement for task identities.
//!
//! Checks a declaration graph against the registered task entry points and
//! reports diagnostics:
//! - TL0001-TL0003: namespace, type and method names follow `Vendor.System.Action`
//! - TL0004-TL0006, TL0010-TL0011: static classes and methods, no overloads, result shape
//! - TL0007-TL0009, TL0018-TL0019: the canonical parameter list
//! - TL0012-TL0014, TL0021: documentation tags and the catalog link
//! - TL0015-TL0017: exposed third-party types and the `Options` contract
//! - TL0020: no task metadata in the project

pub mod types;
pub mod rules;
pub mod suppress;
pub mod reporter;
pub mod category;
pub mod matcher;
pub mod context;
pub mod naming;
pub mod parameters;
pub mod structure;
pub mod documentation;
pub mod exposure;
pub mod configuration;
pub mod error;
pub mod project;
pub mod engine;
