//! Legend - a column of labelled colour swatches.
//!
//! One row per entry: a swatch in the entry's colour, a space, then the
//! label, truncated with `…` so it never leaves the legend's content area.
//! Rows that do not fit vertically are not drawn.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::engine::{Component, ComponentBase};
use crate::error::{ComponentError, Result};
use crate::layout::{truncate_text, BoxStyle};
use crate::types::{Attr, Rgba};

const SWATCH: &str = "■";
const ELLIPSIS: &str = "…";

/// One legend row.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgba,
}

impl LegendEntry {
    pub fn new(label: impl Into<String>, color: Rgba) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

pub struct Legend {
    base: ComponentBase,
    entries: RefCell<Vec<LegendEntry>>,
}

impl Legend {
    pub fn new(entries: Vec<LegendEntry>) -> Rc<Self> {
        Self::with_style(entries, BoxStyle::default())
    }

    pub fn with_style(entries: Vec<LegendEntry>, style: BoxStyle) -> Rc<Self> {
        Rc::new(Self {
            base: ComponentBase::with_style(style),
            entries: RefCell::new(entries),
        })
    }

    pub fn entries(&self) -> Vec<LegendEntry> {
        self.entries.borrow().clone()
    }

    /// Replace the entries and request a redraw.
    pub fn set_entries(&self, entries: Vec<LegendEntry>) {
        *self.entries.borrow_mut() = entries;
        self.base.request_redraw();
    }

    /// Minimum height needed to show every row: one row per entry plus the
    /// vertical border and padding. Zero while there are no entries.
    pub fn row_minimum(&self) -> u16 {
        let rows = self.entries.borrow().len();
        if rows == 0 {
            return 0;
        }

        let style = self.base.style();
        let chrome = style.border.thickness() * 2 + style.padding.top + style.padding.bottom;
        u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(chrome)
    }

    /// The row minimum is derived from the entries and cannot be forced.
    pub fn set_row_minimum(&self, _rows: u16) -> Result<()> {
        Err(ComponentError::ReadOnlyMetric { metric: "row_minimum" })
    }
}

impl Component for Legend {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn render(&self) -> Result<()> {
        let Some((surface, layout)) = self.base.render_target() else {
            trace!("legend not anchored or laid out, skipping render");
            return Ok(());
        };
        let style = self.base.style();
        let entries = self.entries.borrow();

        surface.draw(layout.frame, |buffer, clip| {
            // Erase the previous frame so fewer rows leave nothing behind.
            buffer.fill_rect(&layout.frame, Rgba::TRANSPARENT, Some(clip));
            buffer.draw_border(&layout.frame, style.border, Rgba::GRAY, Some(clip));

            let content = layout.content;
            let label_width = content.width.saturating_sub(2);

            for (row, entry) in entries.iter().enumerate().take(content.height as usize) {
                let y = content.y + row as u16;
                buffer.draw_text(content.x, y, SWATCH, entry.color, Attr::NONE, Some(clip));

                let label = truncate_text(&entry.label, label_width, ELLIPSIS);
                buffer.draw_text(content.x + 2, y, &label, Rgba::TERMINAL_DEFAULT, Attr::NONE, Some(clip));
            }
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::string_width;
    use crate::pipeline::render_to;
    use crate::renderer::Surface;
    use crate::types::BorderStyle;

    fn entries(labels: &[&str]) -> Vec<LegendEntry> {
        let palette = [Rgba::RED, Rgba::GREEN, Rgba::BLUE, Rgba::YELLOW];
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| LegendEntry::new(*label, palette[i % palette.len()]))
            .collect()
    }

    #[test]
    fn test_basic_legend_renders() {
        let legend = Legend::new(entries(&["foo", "bar", "baz"]));
        let surface = Surface::new(20, 6);
        render_to(legend.as_ref(), &surface).unwrap();

        assert_eq!(surface.text_at(0).trim_end(), "■ foo");
        assert_eq!(surface.text_at(1).trim_end(), "■ bar");
        assert_eq!(surface.text_at(2).trim_end(), "■ baz");
        assert_eq!(surface.text_at(3).trim_end(), "");

        let buffer = surface.buffer();
        assert_eq!(buffer.get(0, 0).map(|c| c.fg), Some(Rgba::RED));
        assert_eq!(buffer.get(0, 2).map(|c| c.fg), Some(Rgba::BLUE));
    }

    #[test]
    fn test_row_minimum_tracks_entries() {
        let legend = Legend::new(Vec::new());
        assert_eq!(legend.row_minimum(), 0);

        legend.set_entries(entries(&["foo", "bar"]));
        let two = legend.row_minimum();
        assert!(two > 0);

        legend.set_entries(entries(&["foo", "bar", "baz"]));
        assert!(legend.row_minimum() > two);
    }

    #[test]
    fn test_row_minimum_counts_border() {
        let legend = Legend::with_style(
            entries(&["foo", "bar"]),
            BoxStyle::default().with_border(BorderStyle::Single),
        );
        assert_eq!(legend.row_minimum(), 4);
    }

    #[test]
    fn test_row_minimum_cannot_be_set() {
        let legend = Legend::new(entries(&["foo"]));
        assert_eq!(
            legend.set_row_minimum(5),
            Err(ComponentError::ReadOnlyMetric { metric: "row_minimum" })
        );
        assert_eq!(legend.row_minimum(), 1);
    }

    #[test]
    fn test_many_labels_do_not_overflow_vertically() {
        let labels = ["alpha", "beta", "gamma", "delta", "omega", "omicron", "persei", "eight"];
        let legend = Legend::new(entries(&labels));
        let surface = Surface::new(20, 10).with_region(crate::types::ClipRect::new(0, 0, 20, 5));
        render_to(legend.as_ref(), &surface).unwrap();

        for row in 0..5 {
            assert!(surface.text_at(row).starts_with('■'));
        }
        for row in 5..10 {
            assert_eq!(surface.text_at(row).trim_end(), "");
        }
    }

    #[test]
    fn test_long_label_is_truncated() {
        let legend = Legend::with_style(
            entries(&["foooboooloonoogoorooboopoo"]),
            BoxStyle::default().with_border(BorderStyle::Ascii),
        );
        let surface = Surface::new(12, 3);
        render_to(legend.as_ref(), &surface).unwrap();

        let row = surface.text_at(1);
        assert_eq!(string_width(&row), 12);
        assert!(row.starts_with("|■ "));
        assert!(row.ends_with("…|"));
        assert!(!row.contains("foooboooloonoogoorooboopoo"));
    }

    #[test]
    fn test_render_twice_adds_nothing() {
        let legend = Legend::new(entries(&["foo", "bar", "baz"]));
        let surface = Surface::new(20, 6);
        render_to(legend.as_ref(), &surface).unwrap();
        let first = surface.buffer().clone();

        legend.render().unwrap();
        assert_eq!(*surface.buffer(), first);
    }

    #[test]
    fn test_rerender_with_new_entries() {
        let legend = Legend::new(entries(&["foo", "bar", "baz"]));
        let surface = Surface::new(20, 6);
        render_to(legend.as_ref(), &surface).unwrap();

        let labels = ["mushu", "foo", "persei", "baz", "eight"];
        legend.set_entries(entries(&labels));
        legend.compute_layout(None).unwrap();
        legend.render().unwrap();

        for (row, label) in labels.iter().enumerate() {
            assert_eq!(surface.text_at(row as u16).trim_end(), format!("■ {label}"));
        }

        legend.set_entries(entries(&["only"]));
        legend.render().unwrap();
        assert_eq!(surface.text_at(0).trim_end(), "■ only");
        assert_eq!(surface.text_at(1).trim_end(), "");
    }

    #[test]
    fn test_render_before_anchor_is_noop() {
        let legend = Legend::new(entries(&["foo"]));
        legend.render().unwrap();
        assert!(!legend.base().is_anchored());
    }
}
