use std::path::PathBuf;

use crate::error::{Error, Result};

/// Where the artifacts go and how the builder artifact reaches the runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub out_dir: PathBuf,
    pub builder_file: String,
    pub test_file: String,
    /// Path of the module providing `HtmlElement`, `Node` and friends, as seen from the
    /// generated builder module.
    pub runtime_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            builder_file: "html_gen.rs".to_string(),
            test_file: "html_gen_test.rs".to_string(),
            runtime_path: "super".to_string(),
        }
    }
}

impl Config {
    pub fn builder_path(&self) -> PathBuf {
        self.out_dir.join(&self.builder_file)
    }

    pub fn test_path(&self) -> PathBuf {
        self.out_dir.join(&self.test_file)
    }

    pub(crate) fn parse_runtime_path(&self) -> Result<syn::Path> {
        syn::parse_str(&self.runtime_path).map_err(|source| Error::InvalidRuntimePath {
            path: self.runtime_path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_write_next_to_the_runtime() {
        let config = Config::default();
        assert_eq!(config.builder_path(), PathBuf::from("./html_gen.rs"));
        assert_eq!(config.test_path(), PathBuf::from("./html_gen_test.rs"));
        assert!(config.parse_runtime_path().is_ok());
    }

    #[test]
    fn runtime_path_must_be_a_path() {
        let config = Config {
            runtime_path: "crate::".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.parse_runtime_path(),
            Err(Error::InvalidRuntimePath { .. })
        ));
    }
}
