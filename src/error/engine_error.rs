use crate::error::{
    eval_error::EvalError,
    format_error::{FormatError, SyntaxProblem},
};

/// The single error taxonomy the engine exposes to callers.
///
/// Every internal failure surfaces as exactly one of these kinds, unmodified;
/// nothing is silently recovered or retried. The message (possibly multi-line
/// for [`EngineError::Format`]) is meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The input was malformed: empty, unbalanced, containing disallowed
    /// characters, adjacent or missing operators, or an unparsable number.
    /// Aggregates every problem detected in the input.
    Format(FormatError),
    /// The validator's textual scan found an evident zero divisor.
    DivisionByZero,
    /// An arithmetic step produced a non-finite result.
    Overflow,
    /// An arithmetic step produced NaN.
    NotANumber,
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format(error) => write!(f, "{error}"),
            Self::DivisionByZero => write!(f, "{}", SyntaxProblem::DividesByZero),
            Self::Overflow => write!(f, "{}", EvalError::Overflow),
            Self::NotANumber => write!(f, "{}", EvalError::NotANumber),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<FormatError> for EngineError {
    /// A validation failure whose only problem is the zero-divisor detection
    /// is promoted to [`EngineError::DivisionByZero`]; any other combination
    /// stays a format failure so that no aggregated message is lost.
    fn from(error: FormatError) -> Self {
        if error.is_division_by_zero() {
            Self::DivisionByZero
        } else {
            Self::Format(error)
        }
    }
}

impl From<EvalError> for EngineError {
    fn from(error: EvalError) -> Self {
        match error {
            EvalError::Overflow => Self::Overflow,
            EvalError::NotANumber => Self::NotANumber,
            EvalError::MalformedSequence => {
                Self::Format(FormatError::from(SyntaxProblem::MissingOperand))
            },
        }
    }
}
