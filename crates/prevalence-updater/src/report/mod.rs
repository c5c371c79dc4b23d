//! The report document: types, seed data, merge rules, persistence.

pub mod defaults;
pub mod merge;
pub mod store;
pub mod types;
