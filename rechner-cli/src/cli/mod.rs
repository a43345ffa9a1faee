mod error;
mod options;
mod script;

pub mod prelude {
    pub use super::{
        error::Error,
        options::{cmd, Cmd, Opt},
        script::Script,
    };
}
