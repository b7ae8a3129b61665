//! Deterministic, pure logic for editing freshclam-style configuration text.
//!
//! Core modules must be free of I/O side effects. They operate on an
//! in-memory [`document::Document`] and return deterministic outputs suitable
//! for tests. Reading and writing files lives in [`crate::io`].

pub mod document;
pub mod error;
pub mod line;
pub mod mutator;
pub mod parser;
pub mod plan;
pub mod serializer;
