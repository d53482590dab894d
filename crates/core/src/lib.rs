//! Domain types, validation rules and pure query/prompt builders for the
//! project tracker. Nothing in this crate performs I/O.

pub mod error;
pub mod filter;
pub mod project;
pub mod summary;
pub mod types;
