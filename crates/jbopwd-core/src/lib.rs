//! Core contracts for jbopwd.
//!
//! This crate defines the lexical entry types parsed out of the Lojban
//! reference tables and the immutable lexicon container shared by the
//! generators and the CLI.

pub mod entry;
pub mod lexicon;

pub use entry::{Cmavo, Gismu};
pub use lexicon::{APOSTROPHE, Lexicon};
