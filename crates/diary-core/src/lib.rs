//! Core types and trait definitions for the diary entry store.
//!
//! This crate is deliberately free of database and terminal dependencies.
//! Backends implement [`store::EntryStore`]; front ends depend only on it.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod entry;
pub mod error;
pub mod store;

pub use error::{Error, Result};
