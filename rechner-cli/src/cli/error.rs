use err_derive::Error;
use std::path::PathBuf;

/// An error of the `rechner` command line tool.
#[derive(Debug, Error)]
pub enum Error {
    /// The script file could not be read.
    #[error(display = "{}", 0)]
    IO(#[error(from)] std::io::Error),

    /// The script is not valid TOML.
    #[error(display = "{}", 0)]
    Toml(#[error(from)] toml::de::Error),

    /// The script is not valid YAML.
    #[error(display = "{}", 0)]
    Yaml(#[error(from)] serde_yaml::Error),

    /// The script has an extension we cannot parse.
    #[error(display = "Unsupported script format: {:?}", 0)]
    UnsupportedFormat(PathBuf),

    /// A calculation failed.
    #[error(display = "{}", 0)]
    Calculator(#[error(from)] rechner::Error),
}
