//! Engine configuration, expressed in this crate's own JSON dialect and
//! loaded through [`crate::json::parse_json`] rather than `serde_json` —
//! eating our own dog food for the ambient config-loading path.

use std::path::Path;

use crate::diagnostics::DiagnosticsPrinter;
use crate::json::{parse_json, Value};
use crate::{Error, Result};

/// Recovery mode controlling whether warnings are treated as fatal for
/// tooling purposes. Both modes still produce a full, lossless tree and the
/// same diagnostics list — `Strict` only changes whether a caller (e.g.
/// `pgncheck`) exits non-zero on a warning-severity diagnostic, the same
/// effect `pgncheck --strict` has on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryMode {
    /// Stop at the first unrecoverable construct rather than skipping ahead.
    Strict,
    /// Skip to the next recognisable token and keep going (the default).
    Lenient,
}

impl Default for RecoveryMode {
    fn default() -> Self {
        RecoveryMode::Lenient
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub recovery: RecoveryMode,
    pub max_variation_depth: u32,
    pub warn_unrecognised_moves: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            recovery: RecoveryMode::Lenient,
            max_variation_depth: 128,
            warn_unrecognised_moves: true,
        }
    }
}

impl EngineConfig {
    /// Parses `text` as a config document and builds an `EngineConfig`,
    /// falling back to defaults for any property that is absent or
    /// malformed. Parse diagnostics (not structural ones) are rendered into
    /// the returned `Error::Config` message if the document fails to parse
    /// into a map at all.
    pub fn from_json(text: &str) -> Result<Self> {
        let root = parse_json(text);

        let Some(Value::Map(map)) = root.value() else {
            let rendered = DiagnosticsPrinter::new(root.errors(), text).render();
            return Err(Error::Config(format!(
                "config document is not a JSON object\n{rendered}"
            )));
        };

        let mut config = EngineConfig::default();

        if let Some(Value::Str(mode)) = map.get("recovery") {
            config.recovery = match mode.text().as_str() {
                "strict" => RecoveryMode::Strict,
                "lenient" => RecoveryMode::Lenient,
                other => {
                    return Err(Error::Config(format!(
                        "unrecognised recovery mode {other:?}, expected \"strict\" or \"lenient\""
                    )))
                }
            };
        }

        if let Some(Value::Integer(depth)) = map.get("max_variation_depth") {
            let value = depth
                .value()
                .ok_or_else(|| Error::Config("max_variation_depth is not a valid integer".to_string()))?;
            config.max_variation_depth = u32::try_from(value)
                .map_err(|_| Error::Config("max_variation_depth must fit in a u32".to_string()))?;
        }

        if let Some(Value::Boolean(flag)) = map.get("warn_unrecognised_moves") {
            config.warn_unrecognised_moves = flag.value();
        }

        Ok(config)
    }

    /// Reads and parses a config file from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_empty() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config.recovery, RecoveryMode::Lenient);
        assert_eq!(config.max_variation_depth, 128);
        assert!(config.warn_unrecognised_moves);
    }

    #[test]
    fn overrides_are_applied() {
        let config = EngineConfig::from_json(
            r#"{"recovery": "strict", "max_variation_depth": 16, "warn_unrecognised_moves": false}"#,
        )
        .unwrap();
        assert_eq!(config.recovery, RecoveryMode::Strict);
        assert_eq!(config.max_variation_depth, 16);
        assert!(!config.warn_unrecognised_moves);
    }

    #[test]
    fn rejects_unknown_recovery_mode() {
        let err = EngineConfig::from_json(r#"{"recovery": "yolo"}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn rejects_non_object_document() {
        let err = EngineConfig::from_json("42").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn tolerates_comments_and_trailing_trivia() {
        let config = EngineConfig::from_json(
            "{\n  // line comment\n  \"recovery\": \"strict\" /* inline */\n}",
        )
        .unwrap();
        assert_eq!(config.recovery, RecoveryMode::Strict);
    }
}
