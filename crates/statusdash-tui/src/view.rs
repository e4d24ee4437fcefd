//! Full-viewport drawing of a dashboard frame.

use std::ops::Range;

use ratatui::widgets::Clear;
use ratatui::Frame;
use statusdash_core::constants::FIRST_ATTRIBUTE_ROW;
use statusdash_core::AttributeRegistry;

use crate::header::render_header;
use crate::styles::ColorTheme;

/// Rows available to attributes in a viewport `height` rows tall.
#[must_use]
pub fn attribute_rows(height: u16) -> Range<u16> {
    FIRST_ATTRIBUTE_ROW..height.max(FIRST_ATTRIBUTE_ROW)
}

/// Clear the frame, then draw the header and one line per attribute.
///
/// Attributes that do not fit below the last row are left out.
pub fn render_view(
    frame: &mut Frame,
    header: &str,
    registry: &AttributeRegistry,
    theme: &ColorTheme,
) {
    let area = frame.area();
    frame.render_widget(Clear, area);

    let buf = frame.buffer_mut();
    render_header(buf, area, header, theme.header_style());
    for (row, attr) in attribute_rows(area.height).zip(registry.iter()) {
        buf.set_string(area.x, area.y + row, attr.render_line(), theme.body_style());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use statusdash_core::{AttributeKind, DisplayAttribute};

    fn registry(names: &[&str]) -> AttributeRegistry {
        let mut reg = AttributeRegistry::new();
        for name in names {
            reg.insert(DisplayAttribute::new(name, AttributeKind::Counter, false, 0, 40).unwrap())
                .unwrap();
        }
        reg
    }

    fn draw(width: u16, height: u16, reg: &AttributeRegistry) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let completed = terminal
            .draw(|frame| render_view(frame, "Head", reg, &ColorTheme::default()))
            .unwrap();
        (0..completed.buffer.area.height)
            .map(|y| {
                (0..completed.buffer.area.width)
                    .map(|x| completed.buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn rows_start_below_header() {
        assert_eq!(attribute_rows(24), 4..24);
        assert!(attribute_rows(3).is_empty());
    }

    #[test]
    fn lays_out_header_and_attributes() {
        let rows = draw(20, 8, &registry(&["a", "b"]));
        assert_eq!(rows[2], "        Head");
        assert_eq!(rows[4], "a: 0");
        assert_eq!(rows[5], "b: 0");
        assert_eq!(rows[6], "");
    }

    #[test]
    fn truncates_to_viewport() {
        let rows = draw(20, 6, &registry(&["a", "b", "c"]));
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[4], "a: 0");
        assert_eq!(rows[5], "b: 0");
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        draw(1, 1, &registry(&["a"]));
        draw(3, 5, &registry(&["a long attribute name"]));
    }
}
