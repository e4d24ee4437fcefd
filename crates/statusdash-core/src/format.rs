//! Bar geometry and per-kind line formatting.
//!
//! The standalone bar and the dashboard both draw bars with these helpers,
//! so a given percentage and width always produce the same characters.

use crate::attribute::DisplayAttribute;
use crate::constants::{CAP_CHAR, FILL_CHAR};
use crate::kind::AttributeKind;

/// `value * 100 / max`, unclamped.
///
/// Values outside `[0, max]` give percentages outside `[0, 100]`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percentage(value: f64, max: i64) -> f64 {
    value * 100.0 / max as f64
}

/// Whole-number percentage for display, truncated toward zero.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn display_percent(percentage: f64) -> i64 {
    percentage.trunc() as i64
}

/// Number of fill characters before the cap: `floor(p / 100 * width) - 1`.
///
/// Negative lengths (0%, negative values) clamp to zero. Lengths past the
/// last cell clamp to `width - 1` so the cap still fits.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn fill_length(percentage: f64, width: usize) -> usize {
    let raw = (percentage / 100.0 * width as f64).floor() - 1.0;
    if raw.is_nan() || raw <= 0.0 {
        return 0;
    }
    (raw as usize).min(width.saturating_sub(1))
}

/// Bar interior (without brackets): fill, cap, then padding up to `width`.
#[must_use]
pub fn render_bar(percentage: f64, width: usize) -> String {
    let fill = fill_length(percentage, width);
    let pad = width.saturating_sub(fill + 1);

    format!(
        "{}{CAP_CHAR}{}",
        FILL_CHAR.to_string().repeat(fill),
        " ".repeat(pad)
    )
}

/// Completely filled bar interior, without cap.
#[must_use]
pub fn render_full_bar(width: usize) -> String {
    FILL_CHAR.to_string().repeat(width)
}

/// Dashboard line for an attribute.
///
/// | kind | line |
/// |---|---|
/// | Division | `name: value/max` |
/// | ProgressBar | `name: [====>    ] pct%` |
/// | Percentage | `name: pct%` |
/// | Counter, Status | `name: value` |
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_attribute(attr: &DisplayAttribute) -> String {
    let name = attr.name();
    let max = attr.max_value().unwrap_or(0);
    // Registration only admits numeric payloads for bounded kinds.
    let number = || attr.value().as_number().unwrap_or(0.0);

    match attr.kind() {
        AttributeKind::Division => format!("{name}: {}/{max}", number().trunc() as i64),
        AttributeKind::ProgressBar => {
            let pct = percentage(number(), max);
            let bar = render_bar(pct, attr.bar_width().unwrap_or(0));
            format!("{name}: [{bar}] {}%", display_percent(pct))
        }
        AttributeKind::Percentage => {
            format!("{name}: {}%", display_percent(percentage(number(), max)))
        }
        AttributeKind::Counter | AttributeKind::Status => format!("{name}: {}", attr.value()),
    }
}
