//! Textbook problems expressed as a prior plus a `Likelihood`.
//!
//! Each submodule defines the hypotheses and data of one problem and a constructor for a
//! ready-to-update `Suite`. They double as worked examples of the core API.

pub mod cookie;
pub mod dice;
pub mod euro;
pub mod mm;
pub mod monty;
pub mod train;
