//! Text analysis for the spell-check pass.
//!
//! Splits documentation text into word tokens with byte offsets, so that
//! errors can be reported with their surrounding context.

pub mod token;
pub mod tokenizer;
