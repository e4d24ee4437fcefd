//! Attribute kinds.

use std::fmt;
use std::str::FromStr;

use crate::error::DashError;

/// How an attribute's value is formatted.
///
/// `ProgressBar`, `Percentage` and `Division` are bounded by a maximum value;
/// `Counter` and `Status` show their value verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    ProgressBar,
    Percentage,
    Division,
    Counter,
    Status,
}

impl AttributeKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::ProgressBar,
        Self::Percentage,
        Self::Division,
        Self::Counter,
        Self::Status,
    ];

    /// Whether this kind needs a positive maximum value.
    #[must_use]
    pub fn is_bounded(self) -> bool {
        match self {
            Self::ProgressBar | Self::Percentage | Self::Division => true,
            Self::Counter | Self::Status => false,
        }
    }

    /// Canonical tag name.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::ProgressBar => "ProgressBar",
            Self::Percentage => "Percentage",
            Self::Division => "Division",
            Self::Counter => "Counter",
            Self::Status => "Status",
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for AttributeKind {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ProgressBar" | "progress-bar" | "progressbar" => Ok(Self::ProgressBar),
            "Percentage" | "percentage" => Ok(Self::Percentage),
            "Division" | "division" => Ok(Self::Division),
            "Counter" | "counter" => Ok(Self::Counter),
            "Status" | "status" => Ok(Self::Status),
            other => Err(DashError::InvalidKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_partition() {
        assert!(AttributeKind::ProgressBar.is_bounded());
        assert!(AttributeKind::Percentage.is_bounded());
        assert!(AttributeKind::Division.is_bounded());
        assert!(!AttributeKind::Counter.is_bounded());
        assert!(!AttributeKind::Status.is_bounded());
    }

    #[test]
    fn tags_parse_back() {
        for kind in AttributeKind::ALL {
            assert_eq!(kind.tag().parse::<AttributeKind>().unwrap(), kind);
        }
    }

    #[test]
    fn kebab_aliases() {
        assert_eq!(
            "progress-bar".parse::<AttributeKind>().unwrap(),
            AttributeKind::ProgressBar
        );
        assert_eq!(
            "status".parse::<AttributeKind>().unwrap(),
            AttributeKind::Status
        );
    }

    #[test]
    fn unknown_tag_is_invalid_kind() {
        let err = "Gauge".parse::<AttributeKind>().unwrap_err();
        assert!(matches!(err, DashError::InvalidKind(ref tag) if tag == "Gauge"));
    }

    #[test]
    fn display_uses_tag() {
        assert_eq!(AttributeKind::Division.to_string(), "Division");
    }
}
