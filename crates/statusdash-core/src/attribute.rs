//! A single tracked dashboard value.

use crate::constants::{DASHBOARD_LABEL_RESERVE, MIN_BAR_WIDTH};
use crate::error::{DashError, Result};
use crate::format::format_attribute;
use crate::kind::AttributeKind;
use crate::value::AttributeValue;

/// One named, typed value shown on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayAttribute {
    name: String,
    kind: AttributeKind,
    value: AttributeValue,
    max_value: Option<i64>,
    bar_width: Option<usize>,
    logged: bool,
}

impl DisplayAttribute {
    /// Create an attribute with value `0`.
    ///
    /// `max_value` is only kept for bounded kinds, where it must be positive.
    /// A progress bar's width is fixed here from the viewport's `columns`.
    pub fn new(
        name: &str,
        kind: AttributeKind,
        logged: bool,
        max_value: i64,
        columns: u16,
    ) -> Result<Self> {
        if kind.is_bounded() && max_value <= 0 {
            return Err(DashError::InvalidConfig(format!(
                "{kind} attribute '{name}' needs a positive maximum value, got {max_value}"
            )));
        }

        let bar_width = (kind == AttributeKind::ProgressBar)
            .then(|| dashboard_bar_width(columns, name));

        Ok(Self {
            name: name.to_string(),
            kind,
            value: AttributeValue::default(),
            max_value: kind.is_bounded().then_some(max_value),
            bar_width,
            logged,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    #[must_use]
    pub fn value(&self) -> &AttributeValue {
        &self.value
    }

    #[must_use]
    pub fn max_value(&self) -> Option<i64> {
        self.max_value
    }

    #[must_use]
    pub fn bar_width(&self) -> Option<usize> {
        self.bar_width
    }

    #[must_use]
    pub fn is_logged(&self) -> bool {
        self.logged
    }

    /// Check that `value` can be stored without changing anything.
    pub fn accepts(&self, value: &AttributeValue) -> Result<()> {
        if self.kind.is_bounded() && value.as_number().is_none() {
            return Err(DashError::NonNumericValue {
                name: self.name.clone(),
                value: value.to_string(),
            });
        }
        Ok(())
    }

    pub(crate) fn set_value(&mut self, value: AttributeValue) {
        self.value = value;
    }

    /// The line this attribute renders to.
    #[must_use]
    pub fn render_line(&self) -> String {
        format_attribute(self)
    }

    /// Log record for the current value, without a line terminator.
    #[must_use]
    pub fn log_record(&self) -> String {
        format!("{}: {}", self.name, self.value)
    }
}

/// Bar width for a dashboard progress bar named `name` in `columns` columns.
#[must_use]
pub fn dashboard_bar_width(columns: u16, name: &str) -> usize {
    usize::from(columns)
        .saturating_sub(name.chars().count() + DASHBOARD_LABEL_RESERVE)
        .max(MIN_BAR_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let attr = DisplayAttribute::new("files", AttributeKind::Counter, false, 0, 80).unwrap();
        assert_eq!(attr.value(), &AttributeValue::Int(0));
        assert_eq!(attr.max_value(), None);
        assert_eq!(attr.bar_width(), None);
        assert!(!attr.is_logged());
    }

    #[test]
    fn progress_bar_width_from_columns() {
        let attr =
            DisplayAttribute::new("copy", AttributeKind::ProgressBar, true, 100, 80).unwrap();
        // 80 - (4 + 10)
        assert_eq!(attr.bar_width(), Some(66));
        assert_eq!(attr.max_value(), Some(100));
        assert!(attr.is_logged());
    }

    #[test]
    fn narrow_viewport_keeps_one_cell() {
        assert_eq!(dashboard_bar_width(12, "a very long name"), 1);
    }

    #[test]
    fn bounded_kinds_need_positive_max() {
        for kind in [
            AttributeKind::ProgressBar,
            AttributeKind::Percentage,
            AttributeKind::Division,
        ] {
            for max in [0, -1] {
                let err = DisplayAttribute::new("x", kind, false, max, 80).unwrap_err();
                assert!(matches!(err, DashError::InvalidConfig(_)), "{kind} {max}");
            }
        }
    }

    #[test]
    fn unbounded_kinds_ignore_max() {
        let attr = DisplayAttribute::new("state", AttributeKind::Status, false, -3, 80).unwrap();
        assert_eq!(attr.max_value(), None);
    }

    #[test]
    fn bounded_kinds_reject_text() {
        let attr = DisplayAttribute::new("done", AttributeKind::Division, false, 10, 80).unwrap();
        assert!(attr.accepts(&AttributeValue::from(3)).is_ok());
        assert!(attr.accepts(&AttributeValue::from("3")).is_ok());
        assert!(matches!(
            attr.accepts(&AttributeValue::from("three")),
            Err(DashError::NonNumericValue { .. })
        ));
    }

    #[test]
    fn status_accepts_anything() {
        let attr = DisplayAttribute::new("state", AttributeKind::Status, false, 0, 80).unwrap();
        assert!(attr.accepts(&AttributeValue::from("idle")).is_ok());
    }

    #[test]
    fn log_record_has_no_terminator() {
        let mut attr = DisplayAttribute::new("speed", AttributeKind::Counter, true, 0, 80).unwrap();
        attr.set_value(AttributeValue::from(12));
        assert_eq!(attr.log_record(), "speed: 12");
    }
}
