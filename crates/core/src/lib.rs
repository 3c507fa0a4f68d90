//! Caller-side rules for photogram.
//!
//! The store treats every edge as plain CRUD. The services here are what a
//! request handler calls: they validate input, reject self-references and
//! check ownership before anything reaches the store.

pub mod services;

pub use services::*;
