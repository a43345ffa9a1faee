//! Scripts are lists of operations stored as TOML or YAML.

use super::error::Error;
use rechner::Operation;
use serde::Deserialize;
use std::{fs, path::Path};

/// A list of operations to replay, in order.
///
/// `op` takes the same spellings as the command line (`add`, `sub`, `+`, ...).
///
/// ```toml
/// [[operation]]
/// op = "add"
/// x = 5.0
/// y = 3.0
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    #[serde(default, rename = "operation")]
    pub operations: Vec<Operation>,
}

impl Script {
    /// Load a script, choosing the format by the file extension.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let extension = path.extension().and_then(|extension| extension.to_str());
        let parse: fn(&str) -> Result<Self, Error> = match extension {
            Some("toml") => Self::from_toml,
            Some("yaml") | Some("yml") => Self::from_yaml,
            _ => return Err(Error::UnsupportedFormat(path.to_path_buf())),
        };
        let data = fs::read_to_string(path)?;
        let script = parse(&data)?;
        log::debug!(
            "Loaded {} operations from {}.",
            script.operations.len(),
            path.display()
        );
        Ok(script)
    }

    pub fn from_toml(data: &str) -> Result<Self, Error> {
        Ok(toml::from_str(data)?)
    }

    pub fn from_yaml(data: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rechner::Operator;
    use std::path::PathBuf;

    #[test]
    fn test_toml_script() {
        let script = Script::from_toml(
            r#"
            [[operation]]
            op = "add"
            x = 5.0
            y = 3.0

            [[operation]]
            op = "divide"
            x = 15.0
            y = 0.0
            "#,
        )
        .unwrap();

        assert_eq!(
            script.operations,
            vec![
                Operation::new(Operator::Add, 5.0, 3.0),
                Operation::new(Operator::Divide, 15.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_yaml_script() {
        let script = Script::from_yaml(
            "operation:\n  - op: multiply\n    x: 6.0\n    y: 7.0\n  - op: subtract\n    x: 10.0\n    y: -4.5\n",
        )
        .unwrap();

        assert_eq!(
            script.operations,
            vec![
                Operation::new(Operator::Multiply, 6.0, 7.0),
                Operation::new(Operator::Subtract, 10.0, -4.5),
            ]
        );
    }

    #[test]
    fn test_operator_short_forms() {
        let script = Script::from_toml(
            r#"
            operation = [
                { op = "+", x = 1.0, y = 2.0 },
                { op = "sub", x = 1.0, y = 2.0 },
                { op = "x", x = 1.0, y = 2.0 },
                { op = "/", x = 1.0, y = 2.0 },
            ]
            "#,
        )
        .unwrap();

        let ops: Vec<_> = script.operations.iter().map(|operation| operation.op).collect();
        assert_eq!(
            ops,
            vec![
                Operator::Add,
                Operator::Subtract,
                Operator::Multiply,
                Operator::Divide,
            ]
        );
    }

    #[test]
    fn test_empty_script() {
        let script = Script::from_toml("").unwrap();
        assert!(script.operations.is_empty());
    }

    #[test]
    fn test_unknown_operator() {
        let result = Script::from_toml("[[operation]]\nop = \"modulo\"\nx = 1.0\ny = 2.0\n");
        assert!(matches!(result, Err(Error::Toml(_))));
    }

    #[test]
    fn test_unsupported_format() {
        let result = Script::load(Path::new("script.json"));
        assert!(matches!(
            result,
            Err(Error::UnsupportedFormat(path)) if path == PathBuf::from("script.json")
        ));
    }

    #[test]
    fn test_sample_script() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../config/script.toml");
        let script = Script::load(&path).unwrap();
        assert_eq!(script.operations.len(), 4);
    }
}
