//! # Calculator evaluation core
//!
//! The core behind the NeoCal display: it turns a user-entered or
//! voice-derived arithmetic string into a formatted numeric answer.
//!
//! The supported expression grammar is deliberately flat:
//!
//! * a single signed decimal number: `5`, `-2.5`
//! * exactly one binary operation: `2+3`, `10/4`, `5*-3`
//!
//! No operator chaining, no precedence, no brackets. Display glyphs
//! `x` and `÷` are accepted and normalized to `*` and `/` before
//! evaluation. Results render as integers when whole and with up to
//! six fractional digits otherwise: `10/4` gives `2.5`, `10/2` gives
//! `5`, `1/3` gives `0.333333`.
//!
//! [`eval::calculate`] never fails: blank input yields `"0"` and any
//! malformed expression or division by zero yields the literal
//! `"Error"`, so the caller can put the returned string straight on
//! the display.
//!
//! The second half of the crate handles voice input.
//! [`speech::parse_to_math_expression`] converts a recognized phrase
//! such as `"what is twenty five plus three"` into the canonical
//! string `"25+3"`. English number words are supported from `zero`
//! to `twenty`, the tens up to `ninety`, `hundred`, and the compound
//! forms `twenty one` through `fifty nine`. Operator keywords are
//! `plus`, `minus`, `times`/`multiply`, and `divide`. A phrase with
//! no recognizable expression yields `None`.
//!
//! Both halves are pure functions with no internal state: the same
//! input always produces the same output and calls are safe from any
//! number of threads.

#[macro_use]
extern crate pest_derive;

pub mod errors;
pub mod eval;
pub mod speech;
pub mod words;
