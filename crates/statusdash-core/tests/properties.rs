//! Property-based tests for bar geometry and attribute lines.

use proptest::prelude::*;

use statusdash_core::format::{fill_length, percentage, render_bar};
use statusdash_core::{AttributeKind, AttributeRegistry, AttributeValue, DisplayAttribute};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The bar interior is always exactly `width` cells for widths >= 1.
    #[test]
    fn bar_always_spans_width(pct in -500.0f64..500.0, width in 1usize..300) {
        let bar = render_bar(pct, width);
        prop_assert_eq!(bar.chars().count(), width);
        prop_assert!(bar.contains('>'));
    }

    /// Within [0, 100] the fill matches floor(p/100*w)-1, clamped at zero.
    #[test]
    fn fill_follows_formula(value in 0i64..=1000, max in 1i64..=1000, width in 1usize..200) {
        prop_assume!(value <= max);
        #[allow(clippy::cast_precision_loss)]
        let pct = percentage(value as f64, max);
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        let expected = ((pct / 100.0 * width as f64).floor() as i64 - 1).max(0);
        prop_assert_eq!(i64::try_from(fill_length(pct, width)).unwrap(), expected);
    }

    /// A value at its maximum always draws a full bar.
    #[test]
    fn max_value_fills_bar(max in 1i64..100_000, width in 1usize..200) {
        #[allow(clippy::cast_precision_loss)]
        let bar = render_bar(percentage(max as f64, max), width);
        let expected = format!("{}>", "=".repeat(width - 1));
        prop_assert_eq!(bar, expected);
    }

    /// Division lines print value and maximum verbatim.
    #[test]
    fn division_line(value in 0i64..10_000, max in 1i64..10_000) {
        let mut reg = AttributeRegistry::new();
        reg.insert(DisplayAttribute::new("jobs", AttributeKind::Division, false, max, 80).unwrap())
            .unwrap();
        let attr = reg.set_value("jobs", AttributeValue::from(value)).unwrap();
        prop_assert_eq!(attr.render_line(), format!("jobs: {value}/{max}"));
    }
}
