//! Schema-to-source emission pipeline for datatable artifacts
//!
//! Many list/table screens in an application share one generic
//! table-rendering widget; what differs per entity is typing and metadata.
//! This crate derives those mechanically from a single schema document:
//! a TypeScript interface, a column-descriptor list, a filter-field list,
//! and a row-action list, assembled into one module per schema, plus an
//! aggregate index re-exporting every generated module.
//!
//! The pipeline is strictly one-way:
//!
//! ```text
//! schema file -> Schema -> four fragments -> assembled document -> index entry
//! ```
//!
//! Everything in this crate is pure: emitters and the assembler take a
//! [`Schema`] and return text. Directory traversal, file I/O, and
//! configuration live in the CLI crate.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod assemble;
pub mod emit;
pub mod error;
pub mod index;
pub mod schema;

pub use assemble::Assembler;
pub use error::SchemaError;
pub use index::render_index;
pub use schema::{ActionDescriptor, FilterKind, PropertyDescriptor, Schema};
