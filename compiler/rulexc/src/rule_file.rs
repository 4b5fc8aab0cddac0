//! JSON rule files.

use std::path::{Path, PathBuf};

use rulex_ir::{Rule, Settings};
use rulex_lexer::Lexer;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Contents of a rule file: settings plus the rule list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleFile {
    pub settings: Settings,
    pub rules: Vec<Rule>,
}

impl RuleFile {
    /// Build a lexer from these rules and settings.
    pub fn into_lexer(self) -> Lexer {
        Lexer::new(self.rules, self.settings)
    }
}

/// Failure reading driver inputs.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed rule file '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse rule-file JSON.
pub fn parse_rules(text: &str) -> Result<RuleFile, serde_json::Error> {
    serde_json::from_str(text)
}

/// Read and parse the rule file at `path`.
pub fn load_rules(path: impl AsRef<Path>) -> Result<RuleFile, LoadError> {
    let path = path.as_ref();
    let text = read_source(path)?;
    let rule_file = parse_rules(&text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        rules = rule_file.rules.len(),
        "loaded rule file"
    );
    Ok(rule_file)
}

/// Read a text file, attaching the path to any I/O error.
pub(crate) fn read_source(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
