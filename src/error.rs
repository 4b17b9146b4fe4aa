/// Caller-facing errors.
///
/// Defines the single error taxonomy the facade exposes: format failures,
/// statically detected division by zero, overflow, and NaN results. All
/// stage-local errors convert into this type on their way out of the engine.
pub mod engine_error;
/// Evaluation errors.
///
/// Contains the errors the postfix evaluator can raise: overflow (non-finite
/// results, including runtime division by zero), NaN results, and malformed
/// postfix sequences.
pub mod eval_error;
/// Validation and tokenization errors.
///
/// Defines the individual syntax problems the validator and tokenizer detect
/// and the aggregate that reports all of them together.
pub mod format_error;

pub use engine_error::EngineError;
pub use eval_error::EvalError;
pub use format_error::{FormatError, SyntaxProblem};
