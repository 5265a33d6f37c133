use std::fmt;

#[derive(PartialEq)]
pub enum CalcError {
    StrToFloat(String),
    DividedByZero(String),
    InvalidOp(String),
    EmptyExpression,
    ParseFailed(String),
}

pub type CalcResult = Result<f64, CalcError>;

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self {
            CalcError::StrToFloat(s) => write!(f, "Failed to convert '{}' to float", s),
            CalcError::DividedByZero(s) => write!(f, "'{}' divided by zero", s),
            CalcError::InvalidOp(s) => write!(f, "Invalid operator '{}'", s),
            CalcError::EmptyExpression => write!(f, "Nothing to calculate"),
            CalcError::ParseFailed(s) => write!(f, "Failed to parse expression: {}", s),
        }
    }
}

impl fmt::Debug for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self {
            CalcError::StrToFloat(s) => write!(f, "Failed to convert '{}' to float", s),
            CalcError::DividedByZero(s) => write!(f, "'{}' divided by zero", s),
            CalcError::InvalidOp(s) => write!(f, "Invalid operator '{}'", s),
            CalcError::EmptyExpression => write!(f, "Nothing to calculate"),
            CalcError::ParseFailed(s) => write!(f, "Failed to parse expression: {}", s),
        }
    }
}
