pub mod check;
pub mod identity;
pub mod rules;
