use crate::{
    engine::lexeme::{Lexeme, Operator},
    error::eval_error::EvalError,
};

/// Folds a postfix lexeme sequence into a single value.
///
/// Walks the sequence left to right with a value stack: operands push their
/// value, and each operator pops the top value as its right operand and the
/// next as its left, applies the arithmetic and pushes the result back. The
/// single value remaining after the last lexeme is the expression's result.
///
/// # Parameters
/// - `postfix`: A sequence in postfix order, as produced by the converter.
///
/// # Returns
/// The finite value of the expression.
///
/// # Errors
/// - [`EvalError::Overflow`] or [`EvalError::NotANumber`] from an arithmetic
///   step, see [`apply`].
/// - [`EvalError::MalformedSequence`] when the sequence is not a well-formed
///   postfix ordering, such as the one an operand-less trailing operator
///   produces.
///
/// # Example
/// ```
/// use shunt::engine::{converter::to_postfix, evaluator, tokenizer::tokenize};
///
/// let postfix = to_postfix(tokenize("(2+3)*4").unwrap());
/// assert_eq!(evaluator::evaluate(&postfix).unwrap(), 20.0);
/// ```
pub fn evaluate(postfix: &[Lexeme]) -> Result<f64, EvalError> {
    let mut values = Vec::new();

    for lexeme in postfix {
        match lexeme {
            Lexeme::Operand(value) => values.push(*value),
            Lexeme::Operator(operator) => {
                let op2 = values.pop().ok_or(EvalError::MalformedSequence)?;
                let op1 = values.pop().ok_or(EvalError::MalformedSequence)?;
                values.push(apply(*operator, op1, op2)?);
            },
            Lexeme::OpenBracket | Lexeme::CloseBracket => {
                return Err(EvalError::MalformedSequence);
            },
        }
    }

    let result = values.pop().ok_or(EvalError::MalformedSequence)?;
    if values.is_empty() {
        Ok(result)
    } else {
        Err(EvalError::MalformedSequence)
    }
}

/// Applies one operator to its two operands, left operand first.
///
/// `+`, `-`, `*` and `/` are the standard IEEE double operations; `^` raises
/// `op1` to the power `op2`, fractional and negative exponents included. An
/// infinite result fails as overflow, which also catches a runtime division
/// by zero the validator's textual scan missed; a NaN result fails as
/// not-a-number.
///
/// # Errors
/// [`EvalError::Overflow`] for infinite results, [`EvalError::NotANumber`]
/// for NaN.
pub fn apply(operator: Operator, op1: f64, op2: f64) -> Result<f64, EvalError> {
    let result = match operator {
        Operator::Add => op1 + op2,
        Operator::Sub => op1 - op2,
        Operator::Mul => op1 * op2,
        Operator::Div => op1 / op2,
        Operator::Pow => op1.powf(op2),
    };

    if result.is_infinite() {
        return Err(EvalError::Overflow);
    }
    if result.is_nan() {
        return Err(EvalError::NotANumber);
    }
    Ok(result)
}
