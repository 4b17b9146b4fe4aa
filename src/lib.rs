//! # shunt
//!
//! shunt is an embeddable arithmetic expression engine written in Rust.
//! It normalizes, validates, tokenizes and evaluates plain arithmetic
//! expressions with support for brackets, decimal commas and scientific
//! notation, returning a finite number or a descriptive failure.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::error::EngineError;

/// Houses the evaluation pipeline.
///
/// This module ties together the lexeme vocabulary, input validation,
/// tokenization, infix-to-postfix conversion and postfix evaluation. The
/// stages are usable on their own, but most callers only need the
/// [`evaluate`] facade at the crate root.
///
/// # Responsibilities
/// - Declares the pipeline stages in dependency order.
/// - Keeps every stage stateless; all sequences and stacks are local to one
///   facade call.
pub mod engine;
/// Provides unified error types for validation and evaluation.
///
/// This module defines all errors the pipeline can raise and the single
/// taxonomy the facade exposes to callers. Every error formats as a message
/// meant to be shown to the user unmodified, and validation failures
/// aggregate every detected problem into one multi-line report.
///
/// # Responsibilities
/// - Defines per-stage error types and their `Display` messages.
/// - Converts stage-local failures into the caller-facing taxonomy.
pub mod error;

/// Evaluates an arithmetic expression and returns its value.
///
/// This is the engine's single entry point. The expression may use `+`, `-`,
/// `*`, `/` and `^`, round or square brackets, decimal numbers with `.` or
/// `,` as the separator, and scientific notation such as `1.5e-3`. The call
/// is stateless and synchronous: the whole pipeline (validation,
/// tokenization, conversion to postfix order, stack evaluation) runs on the
/// calling thread and shares nothing with other calls.
///
/// # Errors
/// - [`EngineError::Format`] for malformed input, aggregating every detected
///   problem into one multi-line message.
/// - [`EngineError::DivisionByZero`] when the divisor is an evident textual
///   zero, like in `5/0`.
/// - [`EngineError::Overflow`] and [`EngineError::NotANumber`] when the
///   arithmetic leaves the finite range.
///
/// # Examples
/// ```
/// use shunt::evaluate;
///
/// assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluate("(2+3)*4").unwrap(), 20.0);
///
/// // A leading minus reads as a subtraction from zero.
/// assert_eq!(evaluate("-5+3").unwrap(), -2.0);
///
/// // Malformed input reports every problem it contains.
/// assert!(evaluate("(2++3").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EngineError> {
    let lexemes = engine::tokenizer::tokenize(expression)?;
    let postfix = engine::converter::to_postfix(lexemes);
    Ok(engine::evaluator::evaluate(&postfix)?)
}
