use crate::error::format_error::{FormatError, SyntaxProblem};

/// Punctuation the engine accepts. `,`, `[` and `]` are rewritten away during
/// normalization but stay in the accepted set so the check mirrors what the
/// user actually typed.
const ACCEPTED_PUNCTUATION: &[char] = &['.', ',', '/', ']', ')', '(', '[', '*', '-'];

/// Normalizes a raw expression and rejects malformed input before any lexeme
/// is constructed.
///
/// Normalization, applied in order: strip spaces; replace `,` with `.` and
/// `[`/`]` with `(`/`)`; insert a literal `0` before a `-` that begins the
/// expression or follows `(`; lowercase everything (so the exponent marker
/// `E` becomes `e`).
///
/// Validation runs every check even after one has failed, so the returned
/// error aggregates all detected problems. An input that is empty after
/// space-stripping is fatal and short-circuits the remaining checks. The
/// square-bracket pairing check runs against the text before substitution;
/// the round-bracket check runs after, so a square bracket closed by a round
/// one is caught by the square check alone.
///
/// # Parameters
/// - `raw`: The expression as the user typed it.
///
/// # Returns
/// The normalized text on success.
///
/// # Errors
/// A [`FormatError`] aggregating every detected [`SyntaxProblem`].
pub fn normalize_and_validate(raw: &str) -> Result<String, FormatError> {
    let stripped: String = raw.chars().filter(|c| *c != ' ').collect();
    let normalized = normalize(&stripped);

    if normalized.is_empty() {
        return Err(FormatError::from(SyntaxProblem::EmptyInput));
    }

    let mut problems = Vec::new();
    check_bracket_pairing(&normalized, '(', ')', &mut problems);
    check_bracket_pairing(&stripped, '[', ']', &mut problems);
    check_zero_divisor(&normalized, &mut problems);
    check_characters(&normalized, &mut problems);
    check_adjacent_operators(&normalized, &mut problems);
    check_missing_operators(&normalized, &mut problems);

    if problems.is_empty() {
        Ok(normalized)
    } else {
        Err(FormatError::new(problems))
    }
}

fn normalize(stripped: &str) -> String {
    let substituted: String = stripped.chars()
                                      .map(|c| match c {
                                          ',' => '.',
                                          '[' => '(',
                                          ']' => ')',
                                          other => other,
                                      })
                                      .collect();

    // A leading minus, bare or after an open bracket, becomes a subtraction
    // from zero: `-5` reads as `0-5`, `(-5)` as `(0-5)`.
    let mut zeroed = String::with_capacity(substituted.len() + 2);
    let mut previous = None;
    for c in substituted.chars() {
        if c == '-' && (previous.is_none() || previous == Some('(')) {
            zeroed.push('0');
        }
        zeroed.push(c);
        previous = Some(c);
    }

    zeroed.to_lowercase()
}

fn check_bracket_pairing(text: &str,
                         open: char,
                         close: char,
                         problems: &mut Vec<SyntaxProblem>) {
    let opened = text.chars().filter(|c| *c == open).count();
    let closed = text.chars().filter(|c| *c == close).count();
    if opened != closed {
        let bracket = if opened < closed { open } else { close };
        problems.push(SyntaxProblem::MissingBracket { bracket });
    }
}

/// Scans for a division whose divisor is syntactically zero.
///
/// Four textual patterns are recognized after a `/`: a bare `0` behind any
/// run of open brackets, the single-digit products `(d*0)` and `(0*d)`, and a
/// bracketed pair of zeros joined by a run of `+`/`-`/`*`. The scan is a
/// narrow heuristic: it does not catch `2-2`-style zero values, and it does
/// fire on divisors that merely start with a zero digit, such as `0.5`.
fn check_zero_divisor(text: &str, problems: &mut Vec<SyntaxProblem>) {
    let chars: Vec<char> = text.chars().collect();
    let found = (0..chars.len()).filter(|i| chars[*i] == '/').any(|i| {
                                    let divisor = &chars[i + 1..];
                                    divides_bare_zero(divisor)
                                    || divides_zero_product(divisor)
                                    || divides_zero_run(divisor)
                                });
    if found {
        problems.push(SyntaxProblem::DividesByZero);
    }
}

fn divides_bare_zero(divisor: &[char]) -> bool {
    let brackets = divisor.iter().take_while(|c| **c == '(').count();
    divisor.get(brackets) == Some(&'0')
}

fn divides_zero_product(divisor: &[char]) -> bool {
    match divisor {
        ['(', a, '*', b, ')', ..] => {
            (a.is_ascii_digit() && *b == '0') || (*a == '0' && b.is_ascii_digit())
        },
        _ => false,
    }
}

fn divides_zero_run(divisor: &[char]) -> bool {
    let brackets = divisor.iter().take_while(|c| **c == '(').count();
    if brackets == 0 || divisor.get(brackets) != Some(&'0') {
        return false;
    }
    let rest = &divisor[brackets + 1..];
    let operators = rest.iter()
                        .take_while(|c| matches!(**c, '+' | '-' | '*'))
                        .count();
    operators > 0 && rest.get(operators) == Some(&'0') && rest.get(operators + 1) == Some(&')')
}

/// Flags characters outside the accepted alphabet, one problem per character
/// class so the aggregated message names what kind of symbol was wrong.
///
/// The classes mirror the Unicode categories of the characters this check can
/// actually meet: letters, punctuation, modifier symbols and math symbols.
/// Characters outside all four classes (currency signs, for instance) pass
/// here and fail later as unparsable operand text.
fn check_characters(text: &str, problems: &mut Vec<SyntaxProblem>) {
    if text.chars().any(is_unsupported_letter) {
        problems.push(SyntaxProblem::UnsupportedText);
    }
    if text.chars().any(is_unsupported_punctuation) {
        problems.push(SyntaxProblem::UnsupportedPunctuation);
    }
    if text.chars().any(is_unsupported_modifier) {
        problems.push(SyntaxProblem::UnsupportedModifier);
    }
    if text.chars().any(is_unsupported_math) {
        problems.push(SyntaxProblem::UnsupportedMath);
    }
}

fn is_unsupported_letter(c: char) -> bool {
    // The text is lowercased by normalization, so `e` covers `E` too.
    c.is_alphabetic() && c != 'e'
}

fn is_unsupported_punctuation(c: char) -> bool {
    let is_symbol = matches!(c, '+' | '<' | '=' | '>' | '|' | '~' | '^' | '`' | '$');
    c.is_ascii_punctuation() && !is_symbol && !ACCEPTED_PUNCTUATION.contains(&c)
}

fn is_unsupported_modifier(c: char) -> bool {
    matches!(c, '`' | '¨' | '´' | '¯' | 'ˆ' | '˜')
}

fn is_unsupported_math(c: char) -> bool {
    matches!(c, '<' | '=' | '>' | '|' | '~' | '±' | '×' | '÷' | '¬' | '√' | '∞')
}

fn check_adjacent_operators(text: &str, problems: &mut Vec<SyntaxProblem>) {
    let adjacent = text.chars()
                       .zip(text.chars().skip(1))
                       .any(|(a, b)| is_operator_symbol(a) && is_operator_symbol(b));
    if adjacent {
        problems.push(SyntaxProblem::AdjacentOperators);
    }
}

const fn is_operator_symbol(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^')
}

/// Detects the places where two value-like lexemes touch without an operator:
/// `)(`, a digit followed by `(`, and `)` followed by a digit. The two cases
/// report separately so both can appear in the aggregated message.
fn check_missing_operators(text: &str, problems: &mut Vec<SyntaxProblem>) {
    let pairs = || text.chars().zip(text.chars().skip(1));

    if pairs().any(|(a, b)| a == ')' && b == '(') {
        problems.push(SyntaxProblem::MissingOperatorBetweenBrackets);
    }
    if pairs().any(|(a, b)| (a.is_ascii_digit() && b == '(') || (a == ')' && b.is_ascii_digit()))
    {
        problems.push(SyntaxProblem::MissingOperatorAroundBracket);
    }
}
