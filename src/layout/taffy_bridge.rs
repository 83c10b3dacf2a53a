//! Taffy Bridge - Integration with Taffy layout engine
//!
//! Converts a component's `BoxStyle` to a Taffy style, lays it out inside the
//! region its parent offers, and extracts the frame and content rectangles.
//!
//! The Taffy tree is two nodes deep: a definite-size node standing for the
//! offered region, and the component itself as its only flex item.

use taffy::{
    AlignItems, AvailableSpace, Dimension as TaffyDimension, Display, FlexDirection,
    LengthPercentage, Rect, Size, Style, TaffyTree,
};

use crate::error::{ComponentError, Result};
use crate::types::{ClipRect, Dimension};

use super::types::{BoxStyle, ComputedLayout};

// =============================================================================
// STYLE BUILDING
// =============================================================================

fn to_taffy_dimension(dim: Dimension) -> TaffyDimension {
    match dim {
        Dimension::Auto => TaffyDimension::Auto,
        Dimension::Cells(n) => TaffyDimension::Length(n as f32),
        Dimension::Percent(p) => TaffyDimension::Percent(p / 100.0),
    }
}

fn length_rect(top: u16, right: u16, bottom: u16, left: u16) -> Rect<LengthPercentage> {
    Rect {
        top: LengthPercentage::Length(top as f32),
        right: LengthPercentage::Length(right as f32),
        bottom: LengthPercentage::Length(bottom as f32),
        left: LengthPercentage::Length(left as f32),
    }
}

/// Style of the node standing for the offered region.
fn region_style(region: &ClipRect) -> Style {
    Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Row,
        align_items: Some(AlignItems::Stretch),
        size: Size {
            width: TaffyDimension::Length(region.width as f32),
            height: TaffyDimension::Length(region.height as f32),
        },
        ..Default::default()
    }
}

/// Style of the component node.
fn component_style(style: &BoxStyle) -> Style {
    let border = style.border.thickness();
    let padding = style.padding;

    Style {
        display: Display::Flex,
        // Auto width fills the main axis; auto height is stretched by align_items.
        flex_grow: if style.width == Dimension::Auto { 1.0 } else { 0.0 },
        size: Size {
            width: to_taffy_dimension(style.width),
            height: to_taffy_dimension(style.height),
        },
        padding: length_rect(padding.top, padding.right, padding.bottom, padding.left),
        border: length_rect(border, border, border, border),
        ..Default::default()
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Lay out one component inside `region`.
///
/// The frame never extends past `region`; content is the frame minus border
/// and padding, and collapses to zero size when those do not fit.
pub fn compute_box_layout(region: ClipRect, style: &BoxStyle) -> Result<ComputedLayout> {
    let layout_error = |e: taffy::TaffyError| ComponentError::Layout(e.to_string());

    let mut tree: TaffyTree<()> = TaffyTree::new();
    let node = tree.new_leaf(component_style(style)).map_err(layout_error)?;
    let root = tree
        .new_with_children(region_style(&region), &[node])
        .map_err(layout_error)?;

    let available = Size {
        width: AvailableSpace::Definite(region.width as f32),
        height: AvailableSpace::Definite(region.height as f32),
    };
    tree.compute_layout(root, available).map_err(layout_error)?;

    let layout = tree.layout(node).map_err(layout_error)?;
    let to_cells = |v: f32| v.max(0.0).round() as u16;

    let unclamped = ClipRect::new(
        region.x.saturating_add(to_cells(layout.location.x)),
        region.y.saturating_add(to_cells(layout.location.y)),
        to_cells(layout.size.width),
        to_cells(layout.size.height),
    );
    let frame = unclamped
        .intersect(&region)
        .unwrap_or(ClipRect::new(region.x, region.y, 0, 0));

    let content = frame.inset(
        to_cells(layout.border.top + layout.padding.top),
        to_cells(layout.border.right + layout.padding.right),
        to_cells(layout.border.bottom + layout.padding.bottom),
        to_cells(layout.border.left + layout.padding.left),
    );

    Ok(ComputedLayout { frame, content })
}
