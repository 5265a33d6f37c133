use pest::Parser;

use crate::errors::*;

#[derive(Parser)]
#[grammar = "calc.pest"]
pub struct CalcParser;

/// Evaluates a raw display buffer and returns a display-ready string.
///
/// Blank input yields `"0"`. Any failure - malformed expression,
/// unknown token, division by zero - yields the literal `"Error"`.
/// The function never panics and never returns an `Err` to the caller.
pub fn calculate(input: &str) -> String {
    if input.trim().is_empty() {
        return "0".to_string();
    }

    let clean = sanitize_input(input);

    // a bare number needs no evaluation, only formatting
    if is_valid_number(&clean) {
        if let Ok(v) = clean.parse::<f64>() {
            return format_result(v);
        }
    }

    match eval_two_operand(&clean) {
        Ok(v) => format_result(v),
        Err(..) => "Error".to_string(),
    }
}

/// Converts display glyphs to canonical operators (`x` to `*`, `÷` to `/`)
/// and strips every whitespace character. Idempotent.
pub fn sanitize_input(input: &str) -> String {
    input
        .replace('x', "*")
        .replace('÷', "/")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Checks that the trimmed input is a finite decimal number: an optional
/// sign, digits, and an optional fractional part. Exponent forms and
/// textual specials like `inf` are rejected.
pub fn is_valid_number(input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return false;
    }
    if CalcParser::parse(Rule::single, trimmed).is_err() {
        return false;
    }
    trimmed.parse::<f64>().map(|v| v.is_finite()).unwrap_or(false)
}

/// Checks that the token is one of the supported binary operators,
/// canonical or display form.
pub fn is_valid_operator(op: &str) -> bool {
    matches!(op, "+" | "-" | "*" | "/" | "x" | "÷")
}

/// Evaluates a two-operand expression `<number><operator><number>`.
///
/// The grammar is deliberately flat: exactly one operator, no chaining,
/// no brackets. A minus directly before digits always belongs to the
/// operand, so `5*-3` multiplies by negative three while `--5+3` does
/// not parse.
pub fn eval_two_operand(expr: &str) -> CalcResult {
    let pairs = match CalcParser::parse(Rule::binary, expr) {
        Ok(p) => p,
        Err(..) => return Err(CalcError::ParseFailed("invalid expression".to_string())),
    };

    let mut lhs: Option<f64> = None;
    let mut rhs: Option<f64> = None;
    let mut op: Option<String> = None;
    for pair in pairs {
        let val = pair.as_span().as_str().to_string();
        match pair.as_rule() {
            Rule::number => {
                let v = parse_operand(&val)?;
                if lhs.is_none() {
                    lhs = Some(v);
                } else {
                    rhs = Some(v);
                }
            }
            Rule::operator => op = Some(val),
            Rule::EOI => {}
            _ => return Err(CalcError::ParseFailed("invalid expression".to_string())),
        }
    }

    match (lhs, op, rhs) {
        (Some(a), Some(o), Some(b)) => apply_operator(&o, a, b),
        _ => Err(CalcError::EmptyExpression),
    }
}

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Division fails when the divisor is exactly zero.
pub fn divide(a: f64, b: f64) -> CalcResult {
    if b == 0.0 {
        Err(CalcError::DividedByZero(format!("{}", a)))
    } else {
        Ok(a / b)
    }
}

/// Formats a result for the display: whole numbers lose the decimal
/// point, fractional ones are rounded to six digits with trailing
/// zeros stripped.
pub fn format_result(value: f64) -> String {
    if value == (value as i64) as f64 {
        format!("{}", value as i64)
    } else {
        format!("{:.6}", value)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

fn parse_operand(text: &str) -> CalcResult {
    text.parse::<f64>()
        .map_err(|_| CalcError::StrToFloat(text.to_string()))
}

fn apply_operator(op: &str, a: f64, b: f64) -> CalcResult {
    match op {
        "+" => Ok(add(a, b)),
        "-" => Ok(subtract(a, b)),
        "*" => Ok(multiply(a, b)),
        "/" => divide(a, b),
        _ => Err(CalcError::InvalidOp(op.to_string())),
    }
}
