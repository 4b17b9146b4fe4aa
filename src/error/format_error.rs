/// A single problem detected while validating or tokenizing an expression.
///
/// The validator runs every check even after one has failed, so several
/// problems can be reported for the same input. Each variant corresponds to
/// one detection rule and formats as one line of the aggregated message.
#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxProblem {
    /// The input was empty, or contained nothing but spaces.
    EmptyInput,
    /// Opening and closing brackets of one kind do not pair up.
    MissingBracket {
        /// The bracket character that is in deficit.
        bracket: char,
    },
    /// The textual zero-divisor scan matched (see the validator; the scan is
    /// a narrow heuristic, not a symbolic check).
    DividesByZero,
    /// A letter other than the exponent marker `e` appeared.
    UnsupportedText,
    /// A punctuation character outside the accepted set appeared.
    UnsupportedPunctuation,
    /// A modifier symbol other than `^` appeared.
    UnsupportedModifier,
    /// A math symbol other than `+` appeared.
    UnsupportedMath,
    /// Two or more arithmetic operators were adjacent.
    AdjacentOperators,
    /// A close bracket was immediately followed by an open bracket.
    MissingOperatorBetweenBrackets,
    /// A digit touched a bracket on the side that needs an operator.
    MissingOperatorAroundBracket,
    /// An operand substring failed to parse as a number.
    InvalidOperand {
        /// The substring that failed to parse.
        text: String,
    },
    /// An operator reached evaluation without enough operands on the stack.
    MissingOperand,
}

impl std::fmt::Display for SyntaxProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Error. Input string is empty."),
            Self::MissingBracket { bracket } => {
                write!(f, "Error. There is {bracket} missing.")
            },
            Self::DividesByZero => write!(f,
                                          "Error. Input string contains dividing by zero operation."),
            Self::UnsupportedText => write!(f,
                                            "Error. Input string contains some unsupported text symbols."),
            Self::UnsupportedPunctuation => write!(f,
                                                   "Error. Input string contains some unsupported punctuation symbols."),
            Self::UnsupportedModifier => write!(f,
                                                "Error. Input string contains some unsupported modifier symbols."),
            Self::UnsupportedMath => write!(f,
                                            "Error. Input string contains some unsupported math symbols."),
            Self::AdjacentOperators => {
                write!(f, "Error. There are two or more operators together.")
            },
            Self::MissingOperatorBetweenBrackets => {
                write!(f, "Error. There is a missing operator between )(.")
            },
            Self::MissingOperatorAroundBracket => write!(f,
                                                         "Error. There is a missing operator between bracket and number."),
            Self::InvalidOperand { text } => {
                write!(f, "Error. '{text}' is not a valid number.")
            },
            Self::MissingOperand => {
                write!(f, "Error. An operator is missing an operand.")
            },
        }
    }
}

/// An aggregate of every [`SyntaxProblem`] detected in one expression.
///
/// Formats as the problem messages joined by newlines, so a caller can show
/// the user everything that is wrong with the input at once.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatError {
    /// The detected problems, in detection order.
    pub problems: Vec<SyntaxProblem>,
}

impl FormatError {
    /// Wraps the given problems. The validator never constructs an empty
    /// aggregate.
    #[must_use]
    pub const fn new(problems: Vec<SyntaxProblem>) -> Self {
        Self { problems }
    }
    /// True when the zero-divisor scan was the only problem detected, which
    /// is the case the engine reports as a division-by-zero failure instead
    /// of a format failure.
    #[must_use]
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self.problems.as_slice(), [SyntaxProblem::DividesByZero])
    }
}

impl From<SyntaxProblem> for FormatError {
    fn from(problem: SyntaxProblem) -> Self {
        Self { problems: vec![problem] }
    }
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, problem) in self.problems.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{problem}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FormatError {}
