//! Inversion settings, loadable from JSON.
//!
//! ```json
//! { "parallel": true, "min_parallel_rows": 64, "log_timings": false }
//! ```
//!
//! Missing keys take their defaults; unknown keys are rejected.

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

const DEFAULT_MIN_PARALLEL_ROWS: u32 = 64;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InvertSettings {
    /// Split rows across the rayon pool (needs the `parallel` feature).
    pub parallel: bool,
    /// Images shorter than this run sequentially. Must be at least 1.
    pub min_parallel_rows: u32,
    /// Log each inversion's timing to the console.
    pub log_timings: bool,
}

impl Default for InvertSettings {
    fn default() -> Self {
        Self {
            parallel: true,
            min_parallel_rows: DEFAULT_MIN_PARALLEL_ROWS,
            log_timings: false,
        }
    }
}

impl InvertSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| Error::InvalidSettings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_parallel_rows == 0 {
            return Err(Error::InvalidSettings("min_parallel_rows must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Settings that never use the thread pool.
    pub fn sequential() -> Self {
        Self { parallel: false, ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(InvertSettings::from_json("{}").unwrap(), InvertSettings::default());
    }

    #[test]
    fn partial_json_overrides_only_given_keys() {
        let s = InvertSettings::from_json(r#"{"min_parallel_rows": 8, "log_timings": true}"#).unwrap();
        assert!(s.parallel);
        assert_eq!(s.min_parallel_rows, 8);
        assert!(s.log_timings);
    }

    #[test]
    fn to_json_round_trips() {
        let s = InvertSettings { parallel: false, min_parallel_rows: 3, log_timings: true };
        assert_eq!(InvertSettings::from_json(&s.to_json()).unwrap(), s);
    }

    #[test]
    fn rejects_zero_threshold() {
        let err = InvertSettings::from_json(r#"{"min_parallel_rows": 0}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidSettings(_)));
    }

    #[test]
    fn rejects_unknown_keys_and_bad_json() {
        assert!(InvertSettings::from_json(r#"{"threads": 4}"#).is_err());
        assert!(InvertSettings::from_json("not json").is_err());
        assert!(InvertSettings::from_json(r#"{"parallel": "yes"}"#).is_err());
    }
}
