//! Shared test utilities for Commune workspace
//!
//! This crate provides in-memory stand-ins for external dependencies so that
//! tests can run without network access. The main piece is
//! [`MemoryCollection`], a predicate-queryable document collection that mimics
//! the subset of MongoDB collection behavior the API layer relies on.

mod collection;

pub use collection::MemoryCollection;
