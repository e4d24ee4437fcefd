//! Dashboard header placement.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use statusdash_core::constants::HEADER_ROW;

/// Column where a header of `header` starts when centered in `columns`.
///
/// Both halves are floored, so odd widths lean left by at most one cell.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn header_column(columns: u16, header: &str) -> u16 {
    let half_header = (header.chars().count() / 2).min(usize::from(u16::MAX)) as u16;
    (columns / 2).saturating_sub(half_header)
}

/// Draw the header on its row, if the viewport has that row.
pub fn render_header(buf: &mut Buffer, area: Rect, header: &str, style: Style) {
    if HEADER_ROW >= area.height {
        return;
    }
    let x = area.x + header_column(area.width, header);
    buf.set_string(x, area.y + HEADER_ROW, header, style);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn centers_header() {
        assert_eq!(header_column(80, "Sync"), 38);
        assert_eq!(header_column(80, "My Advanced Status Window"), 28);
        assert_eq!(header_column(81, "abc"), 39);
    }

    #[test]
    fn long_header_starts_at_left_edge() {
        assert_eq!(header_column(10, "a header wider than the screen"), 0);
    }

    #[test]
    fn draws_on_header_row() {
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        render_header(&mut buf, area, "Jobs", Style::default());
        assert_eq!(row(&buf, 2), format!("{}Jobs{}", " ".repeat(8), " ".repeat(8)));
        assert_eq!(row(&buf, 0).trim(), "");
    }

    #[test]
    fn short_viewport_skips_header() {
        let area = Rect::new(0, 0, 20, 2);
        let mut buf = Buffer::empty(area);
        render_header(&mut buf, area, "Jobs", Style::default());
        assert_eq!(row(&buf, 1).trim(), "");
    }
}
