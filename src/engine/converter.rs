use crate::engine::lexeme::{Lexeme, Priority};

/// Reorders an infix lexeme sequence into postfix (Reverse Polish) order.
///
/// One left-to-right pass of the shunting-yard algorithm: operands go
/// straight to the output, operators wait on a priority stack until an
/// incoming operator of equal or lower priority forces them off, and brackets
/// delimit stack regions that close brackets drain. Brackets themselves are
/// never emitted.
///
/// `^` skips the popping step entirely, so it never forces earlier operators
/// off the stack before being pushed. Relative to itself that makes it
/// right-associative (`2^3^2` reads as `2^(3^2)`); every other operator
/// groups left to right.
///
/// The conversion has no failure mode of its own; the validator has already
/// rejected unbalanced bracket sequences.
///
/// # Parameters
/// - `lexemes`: The sequence in source order, as produced by the tokenizer.
///
/// # Returns
/// The same lexemes in postfix order, minus the brackets.
///
/// # Example
/// ```
/// use shunt::engine::{converter::to_postfix, tokenizer::tokenize};
///
/// let postfix = to_postfix(tokenize("2+3*4").unwrap());
/// let rendered: Vec<String> = postfix.iter().map(ToString::to_string).collect();
/// assert_eq!(rendered.join(" "), "2 3 4 * +");
/// ```
#[must_use]
pub fn to_postfix(lexemes: Vec<Lexeme>) -> Vec<Lexeme> {
    let mut output = Vec::with_capacity(lexemes.len());
    let mut operators: Vec<Lexeme> = Vec::new();

    for lexeme in lexemes {
        match lexeme {
            Lexeme::Operand(_) => output.push(lexeme),
            Lexeme::Operator(operator) => {
                while let Some(top) = operators.pop() {
                    if operator.priority() == Priority::High
                       || operator.priority() > top.priority()
                    {
                        operators.push(top);
                        break;
                    }
                    output.push(top);
                }
                operators.push(Lexeme::Operator(operator));
            },
            Lexeme::OpenBracket => operators.push(lexeme),
            Lexeme::CloseBracket => {
                while let Some(top) = operators.pop() {
                    if matches!(top, Lexeme::OpenBracket) {
                        break;
                    }
                    output.push(top);
                }
            },
        }
    }

    while let Some(top) = operators.pop() {
        output.push(top);
    }

    output
}
