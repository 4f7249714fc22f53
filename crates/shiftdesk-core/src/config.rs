//! Engine configuration.

use serde::{Deserialize, Serialize};

/// What a replaced shift's identifier becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplacementIdentity {
    /// The old shift record is deleted and a new one with a fresh ID is created.
    #[default]
    Reissue,
    /// The shift keeps its ID; only the talent changes.
    Preserve,
}

/// Scheduling engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// Reassign every shift of a replacement in a single transaction.
    #[serde(default)]
    pub all_or_nothing: bool,

    /// Reject bookings and replacements that overlap the talent's other shifts.
    #[serde(default)]
    pub reject_overlaps: bool,

    /// Identity of replaced shifts.
    #[serde(default)]
    pub replacement_identity: ReplacementIdentity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_baseline() {
        let config = SchedulingConfig::default();
        assert!(!config.all_or_nothing);
        assert!(!config.reject_overlaps);
        assert_eq!(config.replacement_identity, ReplacementIdentity::Reissue);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: SchedulingConfig =
            serde_json::from_str(r#"{"replacement_identity": "preserve"}"#).unwrap();
        assert_eq!(config.replacement_identity, ReplacementIdentity::Preserve);
        assert!(!config.all_or_nothing);
    }
}
