use crate::{
    engine::{
        lexeme::{Lexeme, Operator},
        validator,
    },
    error::format_error::{FormatError, SyntaxProblem},
};

/// Converts an expression into an ordered sequence of lexemes.
///
/// The validator runs first and its error propagates unchanged. Scanning then
/// walks the normalized text left to right, accumulating characters into a
/// pending operand buffer. A bracket or math sign ends the buffer and becomes
/// its own lexeme, unless it is immediately preceded by the exponent marker
/// `e`; that exception keeps the sign of `1e-5` inside the operand text
/// instead of splitting it into a subtraction.
///
/// # Parameters
/// - `expression`: The expression as the user typed it.
///
/// # Returns
/// The lexeme sequence in source order.
///
/// # Errors
/// A [`FormatError`] from validation, or one naming an operand substring that
/// failed to parse as a number.
///
/// # Example
/// ```
/// use shunt::engine::{lexeme::Lexeme, tokenizer::tokenize};
///
/// let lexemes = tokenize("2*3").unwrap();
/// assert_eq!(lexemes.len(), 3);
/// assert_eq!(lexemes[0], Lexeme::Operand(2.0));
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Lexeme>, FormatError> {
    let normalized = validator::normalize_and_validate(expression)?;

    let mut lexemes = Vec::new();
    let mut operand = String::new();
    let mut previous = None;

    for c in normalized.chars() {
        if let Some(delimiter) = delimiter_lexeme(c)
           && previous != Some('e')
        {
            flush_operand(&mut operand, &mut lexemes)?;
            lexemes.push(delimiter);
        } else {
            operand.push(c);
        }
        previous = Some(c);
    }
    flush_operand(&mut operand, &mut lexemes)?;

    Ok(lexemes)
}

fn delimiter_lexeme(c: char) -> Option<Lexeme> {
    match c {
        '(' => Some(Lexeme::OpenBracket),
        ')' => Some(Lexeme::CloseBracket),
        _ => Operator::from_symbol(c).map(Lexeme::Operator),
    }
}

fn flush_operand(operand: &mut String, lexemes: &mut Vec<Lexeme>) -> Result<(), FormatError> {
    if operand.is_empty() {
        return Ok(());
    }
    lexemes.push(Lexeme::Operand(parse_operand(operand)?));
    operand.clear();
    Ok(())
}

/// Parses one operand substring into a number.
///
/// A substring without the exponent marker parses directly as a decimal float
/// with `.` as the decimal point. Otherwise the text splits at the first `e`:
/// the mantissa parses as a plain float, and the exponent honors one leading
/// sign, drops any remaining non-digit characters, and scales the mantissa by
/// the resulting power of ten.
fn parse_operand(text: &str) -> Result<f64, FormatError> {
    let invalid = || FormatError::from(SyntaxProblem::InvalidOperand { text: text.to_string() });

    let Some(index) = text.find('e') else {
        return text.parse().map_err(|_| invalid());
    };

    let mantissa: f64 = text[..index].parse().map_err(|_| invalid())?;
    let exponent = &text[index + 1..];
    let (negative, magnitude) = match exponent.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, exponent.strip_prefix('+').unwrap_or(exponent)),
    };
    let digits: String = magnitude.chars().filter(char::is_ascii_digit).collect();
    let power: i32 = digits.parse().map_err(|_| invalid())?;

    Ok(mantissa * 10f64.powi(if negative { -power } else { power }))
}
