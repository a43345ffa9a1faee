use crate::{Calculator, Error, Operation};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type ArcMut<T> = Arc<Mutex<T>>;

/// A `Calculator` that can be used from multiple threads.
///
/// Clones share the same calculator. Each call holds the lock for the whole
/// calculation, so history entries are never lost or interleaved.
///
/// ```
/// use rechner::SharedCalculator;
/// use std::thread;
///
/// let calculator = SharedCalculator::new();
///
/// let handles: Vec<_> = (0..4)
///     .map(|n| {
///         let calculator = calculator.clone();
///         thread::spawn(move || calculator.add(f64::from(n), 1.0))
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(calculator.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedCalculator {
    calculator: ArcMut<Calculator>,
}

impl SharedCalculator {
    /// Create a new `SharedCalculator` with an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add two numbers.
    pub fn add(&self, x: f64, y: f64) -> f64 {
        self.lock().add(x, y)
    }

    /// Subtract `y` from `x`.
    pub fn subtract(&self, x: f64, y: f64) -> f64 {
        self.lock().subtract(x, y)
    }

    /// Multiply two numbers.
    pub fn multiply(&self, x: f64, y: f64) -> f64 {
        self.lock().multiply(x, y)
    }

    /// Divide `x` by `y`.
    pub fn divide(&self, x: f64, y: f64) -> Result<f64, Error> {
        self.lock().divide(x, y)
    }

    /// Run an `Operation` on the shared calculator.
    pub fn apply(&self, operation: &Operation) -> Result<f64, Error> {
        operation.apply(&mut self.lock())
    }

    /// Return a copy of all history entries, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.lock().history()
    }

    /// Remove all history entries.
    pub fn clear_history(&self) {
        self.lock().clear_history();
    }

    /// Return result from last successful calculation.
    #[must_use]
    pub fn last_result(&self) -> f64 {
        self.lock().last_result()
    }

    /// The number of history entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave a half-written entry behind.
    fn lock(&self) -> MutexGuard<'_, Calculator> {
        self.calculator
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Calculator> for SharedCalculator {
    fn from(calculator: Calculator) -> Self {
        Self {
            calculator: Arc::new(calculator.into()),
        }
    }
}
