//! Operations that can be replayed on a `Calculator`.

use crate::{Calculator, Error};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// One of the four binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// `x + y`
    #[serde(alias = "+")]
    Add,
    /// `x - y`
    #[serde(alias = "sub", alias = "-")]
    Subtract,
    /// `x * y`
    #[serde(alias = "mul", alias = "*", alias = "x")]
    Multiply,
    /// `x / y`
    #[serde(alias = "div", alias = "/")]
    Divide,
}

impl Operator {
    /// The mathematical symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// The verb a history entry starts with.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Add => "Added",
            Self::Subtract => "Subtracted",
            Self::Multiply => "Multiplied",
            Self::Divide => "Divided",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "add" | "+" => Self::Add,
            "subtract" | "sub" | "-" => Self::Subtract,
            "multiply" | "mul" | "*" | "x" => Self::Multiply,
            "divide" | "div" | "/" => Self::Divide,
            _ => return Err(Error::UnknownOperator(s.to_string())),
        })
    }
}

/// A binary operation waiting to be applied.
///
/// ```
/// use rechner::{Calculator, Operation, Operator};
///
/// let operation = Operation::new(Operator::Multiply, 6.0, 7.0);
/// assert_eq!(operation.to_string(), "6 * 7");
///
/// let mut calculator = Calculator::new();
/// assert_eq!(operation.apply(&mut calculator).unwrap(), 42.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// The operator.
    pub op: Operator,
    /// The left operand.
    pub x: f64,
    /// The right operand.
    pub y: f64,
}

impl Operation {
    /// Create a new `Operation`.
    #[must_use]
    pub const fn new(op: Operator, x: f64, y: f64) -> Self {
        Self { op, x, y }
    }

    /// Run the operation on the given `calculator`.
    pub fn apply(&self, calculator: &mut Calculator) -> Result<f64, Error> {
        let Self { op, x, y } = *self;
        match op {
            Operator::Add => Ok(calculator.add(x, y)),
            Operator::Subtract => Ok(calculator.subtract(x, y)),
            Operator::Multiply => Ok(calculator.multiply(x, y)),
            Operator::Divide => calculator.divide(x, y),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.op, self.y)
    }
}
