#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::similar_names)]

//! A small stateful calculator that keeps a log of everything it computed.
//!
//! ```
//! use rechner::{Calculator, Error};
//!
//! let mut calculator = Calculator::new();
//!
//! assert_eq!(calculator.add(5.0, 3.0), 8.0);
//! assert_eq!(calculator.divide(15.0, 3.0).unwrap(), 5.0);
//!
//! // dividing by zero is an error and leaves no trace
//! match calculator.divide(1.0, 0.0) {
//!     Err(Error::DivisionByZero) => {}
//!     other => panic!("unexpected: {:?}", other),
//! }
//!
//! assert_eq!(
//!     calculator.history(),
//!     vec!["Added 5.00 + 3.00 = 8.00", "Divided 15.00 / 3.00 = 5.00"],
//! );
//! ```

mod calculator;
mod error;
mod format;
mod operation;
mod shared;

pub use calculator::Calculator;
pub use error::Error;
pub use operation::{Operation, Operator};
pub use shared::SharedCalculator;
