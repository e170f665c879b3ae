//! Level identifier classification.
//!
//! The status service reports a `level` string alongside the readings. Known
//! levels map to a display title and a severity tier through
//! [`SEVERITY_TABLE`]; anything else falls back to [`NEUTRAL`] so the client
//! keeps working when the service adds new levels.

use serde::Serialize;

/// Display severity bucket derived from a level.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Neutral,
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub fn name(self) -> &'static str {
        match self {
            Severity::Neutral => "neutral",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }

    /// Border and header accent color for result panels.
    pub fn accent_color(self) -> &'static str {
        match self {
            Severity::Neutral => "#BDBDBD",
            Severity::Success => "#2E7D32",
            Severity::Warning => "#F9A825",
            Severity::Danger => "#C62828",
        }
    }

    /// Header background for result panels.
    pub fn background_color(self) -> &'static str {
        match self {
            Severity::Neutral => "#F5F5F5",
            Severity::Success => "#E8F5E9",
            Severity::Warning => "#FFF8E1",
            Severity::Danger => "#FFEBEE",
        }
    }
}

/// Display title and tier for one level.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Classification {
    pub title: &'static str,
    pub tier: Severity,
}

/// Fallback for levels missing from the table.
pub const NEUTRAL: Classification = Classification {
    title: "",
    tier: Severity::Neutral,
};

/// Known level identifiers, in increasing severity.
pub const SEVERITY_TABLE: &[(&str, Classification)] = &[
    (
        "good",
        Classification {
            title: "Good",
            tier: Severity::Success,
        },
    ),
    (
        "moderate",
        Classification {
            title: "Moderate",
            tier: Severity::Warning,
        },
    ),
    (
        "possibly_unhealthy",
        Classification {
            title: "Possibly unhealthy",
            tier: Severity::Warning,
        },
    ),
    (
        "unhealthy",
        Classification {
            title: "Unhealthy",
            tier: Severity::Danger,
        },
    ),
    (
        "very_unhealthy",
        Classification {
            title: "Very unhealthy",
            tier: Severity::Danger,
        },
    ),
    (
        "hazardous",
        Classification {
            title: "Hazardous",
            tier: Severity::Danger,
        },
    ),
];

/// Look up the display title and tier for a level identifier.
pub fn classify(level: &str) -> Classification {
    SEVERITY_TABLE
        .iter()
        .find(|(key, _)| *key == level)
        .map(|(_, classification)| *classification)
        .unwrap_or(NEUTRAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_levels() {
        let expected = [
            ("good", "Good", Severity::Success),
            ("moderate", "Moderate", Severity::Warning),
            ("possibly_unhealthy", "Possibly unhealthy", Severity::Warning),
            ("unhealthy", "Unhealthy", Severity::Danger),
            ("very_unhealthy", "Very unhealthy", Severity::Danger),
            ("hazardous", "Hazardous", Severity::Danger),
        ];
        for (level, title, tier) in expected {
            let classification = classify(level);
            assert_eq!(classification.title, title, "title for {}", level);
            assert_eq!(classification.tier, tier, "tier for {}", level);
        }
        assert_eq!(SEVERITY_TABLE.len(), expected.len());
    }

    #[test]
    fn test_unknown_levels_are_neutral() {
        for level in ["unknown_future_value", "", "Good", "HAZARDOUS", " good"] {
            assert_eq!(classify(level), NEUTRAL, "level {:?}", level);
        }
        assert_eq!(NEUTRAL.title, "");
        assert_eq!(NEUTRAL.tier, Severity::Neutral);
    }

    #[test]
    fn test_severity_names() {
        assert_eq!(Severity::default(), Severity::Neutral);
        assert_eq!(Severity::Danger.name(), "danger");
        assert_eq!(
            serde_json::to_string(&Severity::Warning).unwrap(),
            "\"warning\""
        );
    }
}
