use crate::{format::two_decimals, Error, Operator};

/// An abstraction to evaluate simple binary calculations.
///
/// Every successful calculation is written to the history as a line like
/// `Added 5.00 + 3.00 = 8.00`. Failed calculations leave no trace.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    last_result: f64,
    history: Vec<String>,
}

impl Calculator {
    /// Create a new calculator with an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_result: 0.0,
            history: Vec::new(),
        }
    }

    /// Return result from last successful calculation.
    #[must_use]
    pub const fn last_result(&self) -> f64 {
        self.last_result
    }

    /// Add two numbers.
    pub fn add(&mut self, x: f64, y: f64) -> f64 {
        self.record(Operator::Add, x, y, x + y)
    }

    /// Subtract `y` from `x`.
    pub fn subtract(&mut self, x: f64, y: f64) -> f64 {
        self.record(Operator::Subtract, x, y, x - y)
    }

    /// Multiply two numbers.
    pub fn multiply(&mut self, x: f64, y: f64) -> f64 {
        self.record(Operator::Multiply, x, y, x * y)
    }

    /// Divide `x` by `y`.
    ///
    /// Fails with [`Error::DivisionByZero`](enum.Error.html) if `y` is zero
    /// (including `-0.0`). The calculator is not modified in that case.
    #[allow(clippy::float_cmp)]
    pub fn divide(&mut self, x: f64, y: f64) -> Result<f64, Error> {
        if y == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(self.record(Operator::Divide, x, y, x / y))
    }

    /// Return a copy of all history entries, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.history.clone()
    }

    /// Remove all history entries. The last result is kept.
    pub fn clear_history(&mut self) {
        log::debug!("Clearing {} history entries.", self.history.len());
        self.history.clear();
    }

    /// The number of history entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    fn record(&mut self, op: Operator, x: f64, y: f64, result: f64) -> f64 {
        let entry = format!(
            "{} {} {} {} = {}",
            op.verb(),
            two_decimals(x),
            op.symbol(),
            two_decimals(y),
            two_decimals(result)
        );
        log::debug!("{}", entry);
        self.history.push(entry);
        self.last_result = result;
        result
    }
}
