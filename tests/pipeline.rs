use pretty_assertions::assert_eq;
use shunt::{
    engine::{
        converter::to_postfix,
        evaluator,
        lexeme::{Lexeme, Operator, Priority},
        tokenizer::tokenize,
        validator::normalize_and_validate,
    },
    error::{EvalError, SyntaxProblem},
};

fn postfix_of(expression: &str) -> String {
    let postfix = to_postfix(tokenize(expression).expect("expression should tokenize"));
    let rendered: Vec<String> = postfix.iter().map(ToString::to_string).collect();
    rendered.join(" ")
}

#[test]
fn normalization_rewrites_in_order() {
    assert_eq!(normalize_and_validate("- 5 + 3").unwrap(), "0-5+3");
    assert_eq!(normalize_and_validate("(-5)*2").unwrap(), "(0-5)*2");
    assert_eq!(normalize_and_validate("[2,5]*2").unwrap(), "(2.5)*2");
    assert_eq!(normalize_and_validate("3E2+1").unwrap(), "3e2+1");
}

#[test]
fn validator_names_the_missing_bracket() {
    let error = normalize_and_validate("(2+3").unwrap_err();
    assert_eq!(error.problems,
               vec![SyntaxProblem::MissingBracket { bracket: ')' }]);

    // The square-bracket check runs against the pre-substitution text, so an
    // unpaired square bracket is reported as itself, alongside the round
    // mismatch its substitution produces.
    let error = normalize_and_validate("[2+3").unwrap_err();
    assert_eq!(error.problems,
               vec![SyntaxProblem::MissingBracket { bracket: ')' },
                    SyntaxProblem::MissingBracket { bracket: ']' }]);
}

#[test]
fn validator_detects_independent_problems_together() {
    let error = normalize_and_validate("2++3)").unwrap_err();
    assert_eq!(error.problems,
               vec![SyntaxProblem::MissingBracket { bracket: '(' },
                    SyntaxProblem::AdjacentOperators]);
}

#[test]
fn zero_divisor_scan_is_reported_alone() {
    let error = normalize_and_validate("5/0").unwrap_err();
    assert_eq!(error.problems, vec![SyntaxProblem::DividesByZero]);
    assert!(error.is_division_by_zero());
}

#[test]
fn priorities_form_a_strict_total_order() {
    assert!(Priority::None < Priority::Lowest);
    assert!(Priority::Lowest < Priority::Low);
    assert!(Priority::Low < Priority::Medium);
    assert!(Priority::Medium < Priority::High);

    assert_eq!(Lexeme::Operand(1.0).priority(), Priority::None);
    assert_eq!(Lexeme::OpenBracket.priority(), Priority::Lowest);
    assert_eq!(Lexeme::Operator(Operator::Pow).priority(), Priority::High);
}

#[test]
fn tokenizer_splits_on_delimiters() {
    assert_eq!(tokenize("2+3*4").unwrap(),
               vec![Lexeme::Operand(2.0),
                    Lexeme::Operator(Operator::Add),
                    Lexeme::Operand(3.0),
                    Lexeme::Operator(Operator::Mul),
                    Lexeme::Operand(4.0)]);
    assert_eq!(tokenize("(5)").unwrap(),
               vec![Lexeme::OpenBracket, Lexeme::Operand(5.0), Lexeme::CloseBracket]);
}

#[test]
fn exponent_signs_stay_inside_the_operand() {
    assert_eq!(tokenize("1e-3").unwrap(), vec![Lexeme::Operand(0.001)]);
    assert_eq!(tokenize("2e+2").unwrap(), vec![Lexeme::Operand(200.0)]);
    // Without the exponent marker in front of it, the sign is an operator.
    assert_eq!(tokenize("1-3").unwrap().len(), 3);
}

#[test]
fn degenerate_exponents_fail_to_parse() {
    assert!(tokenize("5e").is_err());
    assert!(tokenize("1e-").is_err());
    assert!(tokenize("2.3.4").is_err());
}

#[test]
fn conversion_reorders_by_priority() {
    assert_eq!(postfix_of("2+3*4"), "2 3 4 * +");
    assert_eq!(postfix_of("(2+3)*4"), "2 3 + 4 *");
    assert_eq!(postfix_of("2^3^2"), "2 3 2 ^ ^");
    assert_eq!(postfix_of("2^3*4"), "2 3 ^ 4 *");
    assert_eq!(postfix_of("2-3+4"), "2 3 - 4 +");
}

#[test]
fn evaluator_folds_postfix_sequences() {
    let postfix = vec![Lexeme::Operand(2.0),
                       Lexeme::Operand(3.0),
                       Lexeme::Operator(Operator::Add)];
    assert_eq!(evaluator::evaluate(&postfix).unwrap(), 5.0);
}

#[test]
fn evaluator_rejects_malformed_sequences() {
    let underflow = vec![Lexeme::Operand(2.0), Lexeme::Operator(Operator::Add)];
    assert_eq!(evaluator::evaluate(&underflow).unwrap_err(),
               EvalError::MalformedSequence);

    let leftover = vec![Lexeme::Operand(2.0), Lexeme::Operand(3.0)];
    assert_eq!(evaluator::evaluate(&leftover).unwrap_err(),
               EvalError::MalformedSequence);

    let stray_bracket = vec![Lexeme::OpenBracket];
    assert_eq!(evaluator::evaluate(&stray_bracket).unwrap_err(),
               EvalError::MalformedSequence);
}

#[test]
fn apply_checks_the_result_for_finiteness() {
    assert_eq!(evaluator::apply(Operator::Div, 1.0, 0.0).unwrap_err(),
               EvalError::Overflow);
    assert_eq!(evaluator::apply(Operator::Pow, -8.0, 0.5).unwrap_err(),
               EvalError::NotANumber);
    assert_eq!(evaluator::apply(Operator::Pow, 2.0, 0.5).unwrap(),
               2.0_f64.sqrt());
}

/// A plain recursive-descent evaluator over the tokenizer's output, used as
/// the independent oracle for the conversion round-trip.
struct ReferenceParser<'a> {
    lexemes: &'a [Lexeme],
    index:   usize,
}

impl<'a> ReferenceParser<'a> {
    fn parse(lexemes: &'a [Lexeme]) -> f64 {
        let mut parser = Self { lexemes, index: 0 };
        let value = parser.additive();
        assert_eq!(parser.index,
                   lexemes.len(),
                   "reference parser should consume every lexeme");
        value
    }

    fn peek(&self) -> Option<&Lexeme> {
        self.lexemes.get(self.index)
    }

    fn additive(&mut self) -> f64 {
        let mut left = self.multiplicative();
        while let Some(Lexeme::Operator(operator)) = self.peek()
              && matches!(operator, Operator::Add | Operator::Sub)
        {
            let operator = *operator;
            self.index += 1;
            let right = self.multiplicative();
            left = match operator {
                Operator::Add => left + right,
                _ => left - right,
            };
        }
        left
    }

    fn multiplicative(&mut self) -> f64 {
        let mut left = self.power();
        while let Some(Lexeme::Operator(operator)) = self.peek()
              && matches!(operator, Operator::Mul | Operator::Div)
        {
            let operator = *operator;
            self.index += 1;
            let right = self.power();
            left = match operator {
                Operator::Mul => left * right,
                _ => left / right,
            };
        }
        left
    }

    fn power(&mut self) -> f64 {
        let base = self.primary();
        if let Some(Lexeme::Operator(Operator::Pow)) = self.peek() {
            self.index += 1;
            let exponent = self.power();
            return base.powf(exponent);
        }
        base
    }

    fn primary(&mut self) -> f64 {
        match self.peek() {
            Some(Lexeme::Operand(value)) => {
                let value = *value;
                self.index += 1;
                value
            },
            Some(Lexeme::OpenBracket) => {
                self.index += 1;
                let value = self.additive();
                assert_eq!(self.peek(),
                           Some(&Lexeme::CloseBracket),
                           "bracket should be closed");
                self.index += 1;
                value
            },
            other => panic!("reference parser met {other:?}"),
        }
    }
}

#[test]
fn conversion_round_trips_against_recursive_descent() {
    let expressions = ["1+2*3-4/2",
                       "(1+2)*(3+4)",
                       "2^3^2",
                       "10/4/5",
                       "3*(2+(1-5))",
                       "0-3^2",
                       "2.5*4-1.5",
                       "1e2/(3+1)",
                       "(-2)*(8-3)",
                       "((2))",
                       "5"];

    for expression in expressions {
        let lexemes = tokenize(expression).expect("expression should tokenize");
        let expected = ReferenceParser::parse(&lexemes);
        let actual = evaluator::evaluate(&to_postfix(lexemes.clone())).unwrap();
        assert_eq!(actual, expected, "round trip diverged for '{expression}'");
    }
}
