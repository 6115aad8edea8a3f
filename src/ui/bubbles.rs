//! Bubble layout and colouring for the terminal
//!
//! Each sized word becomes a run of block glyphs whose width follows its
//! bubble size. Rows flow left to right and wrap at the viewport width; line
//! breaks start a new row when breaks are shown. In grid mode every bubble is
//! centred in a fixed slot so columns line up.

use crate::engine::{Bubble, DisplayConfig};
use crate::ui::theme::{colors, BUBBLE_LIGHTNESS, BUBBLE_SATURATION};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

/// Slot width in grid mode before spacing is added
pub const GRID_SLOT: usize = 10;

const BUBBLE_GLYPH: &str = "█";

/// Hue in degrees for a token of `length` letters and digits.
pub fn hue_for_length(length: usize) -> f64 {
    (length as f64 * 7.0 - 300.0).rem_euclid(360.0)
}

/// Converts HSL (hue in degrees, saturation and lightness in 0..=1) to RGB.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let m = lightness - chroma / 2.0;
    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(r), channel(g), channel(b))
}

pub fn bubble_color(length: usize) -> Color {
    let (r, g, b) = hsl_to_rgb(hue_for_length(length), BUBBLE_SATURATION, BUBBLE_LIGHTNESS);
    Color::Rgb(r, g, b)
}

/// Horizontal footprint of one bubble, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub lead: usize,
    pub width: usize,
    pub trail: usize,
    /// Letters plus digits of the token, drives the colour
    pub length: usize,
}

impl Cell {
    pub fn total(&self) -> usize {
        self.lead.saturating_add(self.width).saturating_add(self.trail)
    }

    /// Shrinks the cell to at most `max_width` columns, giving up margins
    /// before the bubble itself. The bubble keeps at least one column.
    pub fn fit(self, max_width: usize) -> Self {
        let max_width = max_width.max(1);
        let width = self.width.min(max_width);
        let lead = self.lead.min(max_width - width);
        let trail = self.trail.min(max_width - width - lead);
        Cell {
            lead,
            width,
            trail,
            length: self.length,
        }
    }
}

/// Widest bubble or gap a cell can hold; no terminal is wider.
const MAX_CELL: f64 = u16::MAX as f64;

pub fn cell_for(size: f64, length: usize, spacing: f64, gridded: bool) -> Cell {
    let width = (size.round().min(MAX_CELL) as usize).max(1);
    let gap = spacing.round().clamp(0.0, MAX_CELL) as usize;

    if gridded {
        let slot = GRID_SLOT.saturating_add(gap);
        let width = width.min(slot);
        let lead = (slot - width) / 2;
        Cell {
            lead,
            width,
            trail: slot - width - lead,
            length,
        }
    } else {
        Cell {
            lead: 0,
            width,
            trail: gap,
            length,
        }
    }
}

/// Lays sized bubbles into rows no wider than `max_width`. A bubble wider
/// than the viewport is clipped to it and gets a row of its own.
pub fn layout_rows(
    bubbles: &[Bubble],
    spacing: f64,
    display: &DisplayConfig,
    max_width: usize,
) -> Vec<Vec<Cell>> {
    let mut rows: Vec<Vec<Cell>> = vec![Vec::new()];
    let mut used: usize = 0;

    for bubble in bubbles {
        if bubble.token.is_break() {
            if display.show_breaks {
                rows.push(Vec::new());
                used = 0;
            }
            continue;
        }

        let Some(size) = bubble.size else {
            continue;
        };
        let cell = cell_for(size, bubble.token.alpha_num_length, spacing, display.gridded)
            .fit(max_width);

        let row_is_empty = rows.last().map_or(true, Vec::is_empty);
        if !row_is_empty && used.saturating_add(cell.lead + cell.width) > max_width {
            rows.push(Vec::new());
            used = 0;
        }

        used = used.saturating_add(cell.total());
        if let Some(row) = rows.last_mut() {
            row.push(cell);
        }
    }

    rows
}

pub fn render_rows(rows: &[Vec<Cell>]) -> Vec<Line<'static>> {
    rows.iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 3);
            for cell in row {
                if cell.lead > 0 {
                    spans.push(Span::raw(" ".repeat(cell.lead)));
                }
                spans.push(Span::styled(
                    BUBBLE_GLYPH.repeat(cell.width),
                    Style::default().fg(bubble_color(cell.length)),
                ));
                if cell.trail > 0 {
                    spans.push(Span::raw(" ".repeat(cell.trail)));
                }
            }
            Line::from(spans)
        })
        .collect()
}

pub fn render_bubbles(rows: &[Vec<Cell>]) -> Paragraph<'static> {
    Paragraph::new(render_rows(rows))
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(colors::ink()).bg(colors::canvas()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{analyze, ScaleLaw, SizeConfig};

    fn widths(rows: &[Vec<Cell>]) -> Vec<Vec<usize>> {
        rows.iter()
            .map(|row| row.iter().map(|c| c.width).collect())
            .collect()
    }

    #[test]
    fn test_hue_wraps_negative() {
        assert_eq!(hue_for_length(0), 60.0);
        assert_eq!(hue_for_length(60), 120.0);
    }

    #[test]
    fn test_hsl_to_rgb_known_values() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), (255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 0.5, 0.5), (64, 191, 64));
        assert_eq!(hsl_to_rgb(240.0, 0.0, 0.5), (128, 128, 128));
    }

    #[test]
    fn test_bubble_color_differs_by_length() {
        assert_ne!(bubble_color(3), bubble_color(9));
    }

    #[test]
    fn test_cell_flowing_uses_spacing_gap() {
        let cell = cell_for(6.25, 5, 2.0, false);
        assert_eq!(cell, Cell { lead: 0, width: 6, trail: 2, length: 5 });
    }

    #[test]
    fn test_cell_minimum_width_is_one() {
        assert_eq!(cell_for(0.2, 1, 0.0, false).width, 1);
    }

    #[test]
    fn test_cell_gridded_centres_in_slot() {
        let cell = cell_for(4.0, 3, 2.0, true);
        assert_eq!(cell.total(), GRID_SLOT + 2);
        assert_eq!(cell.lead, 4);
        assert_eq!(cell.trail, 4);
    }

    #[test]
    fn test_cell_gridded_caps_oversized_bubble() {
        let cell = cell_for(30.0, 24, 0.0, true);
        assert_eq!(cell.width, GRID_SLOT);
        assert_eq!(cell.total(), GRID_SLOT);
    }

    #[test]
    fn test_layout_skips_fillers() {
        let analysis = analyze("Hi, you!", &SizeConfig::default()).unwrap();
        let rows = layout_rows(&analysis.bubbles, 1.0, &DisplayConfig::default(), 80);
        // 2.5 rounds to 3 (half away from zero), 3.75 to 4
        assert_eq!(widths(&rows), vec![vec![3, 4]]);
    }

    #[test]
    fn test_layout_breaks_start_new_row() {
        let analysis = analyze("one\ntwo", &SizeConfig::default()).unwrap();
        let rows = layout_rows(&analysis.bubbles, 1.0, &DisplayConfig::default(), 80);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_layout_breaks_hidden() {
        let analysis = analyze("one\ntwo", &SizeConfig::default()).unwrap();
        let display = DisplayConfig {
            show_breaks: false,
            ..DisplayConfig::default()
        };
        let rows = layout_rows(&analysis.bubbles, 1.0, &display, 80);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 2);
    }

    #[test]
    fn test_layout_wraps_at_width() {
        // each "abcd" is 5 cells wide plus 1 gap
        let analysis = analyze("abcd abcd abcd", &SizeConfig::default()).unwrap();
        let rows = layout_rows(&analysis.bubbles, 1.0, &DisplayConfig::default(), 12);
        assert_eq!(widths(&rows), vec![vec![5, 5], vec![5]]);
    }

    #[test]
    fn test_layout_oversized_bubble_clipped_to_viewport() {
        let analysis = analyze("hi supercalifragilistic", &SizeConfig::default()).unwrap();
        let rows = layout_rows(&analysis.bubbles, 1.0, &DisplayConfig::default(), 10);
        assert_eq!(widths(&rows), vec![vec![3], vec![10]]);
        assert_eq!(rows[1][0].total(), 10);
    }

    #[test]
    fn test_cell_huge_size_and_spacing_saturate() {
        let flowing = cell_for(1e300, 5, 1e300, false);
        assert_eq!(flowing.width, u16::MAX as usize);
        assert_eq!(flowing.trail, u16::MAX as usize);

        let gridded = cell_for(1e300, 5, 1e300, true);
        assert_eq!(gridded.total(), GRID_SLOT + u16::MAX as usize);
    }

    #[test]
    fn test_layout_huge_config_stays_in_viewport() {
        let config = SizeConfig::new(ScaleLaw::Linear, 1e300, 1e300);
        assert!(config.validate().is_ok());
        let analysis = analyze("hello big world", &config).unwrap();

        for gridded in [false, true] {
            let display = DisplayConfig {
                gridded,
                ..DisplayConfig::default()
            };
            let rows = layout_rows(&analysis.bubbles, config.spacing, &display, 80);
            assert_eq!(rows.len(), 3);
            for row in &rows {
                let width: usize = row.iter().map(Cell::total).sum();
                assert!(width <= 80);
            }
            assert_eq!(render_rows(&rows)[0].width(), 80);
        }
    }

    #[test]
    fn test_fit_gives_up_margins_first() {
        let cell = Cell { lead: 3, width: 4, trail: 3, length: 3 };
        assert_eq!(cell.fit(6), Cell { lead: 2, width: 4, trail: 0, length: 3 });
        assert_eq!(cell.fit(0).width, 1);
    }

    #[test]
    fn test_layout_empty() {
        let rows = layout_rows(&[], 1.0, &DisplayConfig::default(), 80);
        assert_eq!(rows, vec![Vec::<Cell>::new()]);
    }

    #[test]
    fn test_render_rows_line_width() {
        let rows = vec![vec![cell_for(4.0, 3, 2.0, false), cell_for(2.0, 2, 2.0, false)]];
        let lines = render_rows(&rows);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].width(), 10);
    }
}
