//! Error types for component lifecycle operations.

use thiserror::Error;

use crate::types::ClipRect;

/// Errors raised while anchoring, laying out or rendering components.
///
/// Routine membership failures (adding a duplicate child, removing an
/// absent one) are not errors; they are reported through return values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    #[error("component is not anchored to a surface")]
    NotAnchored,

    #[error("region {region:?} lies outside the {width}x{height} surface")]
    RegionOutOfBounds {
        region: ClipRect,
        width: u16,
        height: u16,
    },

    #[error("{metric} is derived from content and cannot be set directly")]
    ReadOnlyMetric { metric: &'static str },

    #[error("layout computation failed: {0}")]
    Layout(String),
}

pub type Result<T> = std::result::Result<T, ComponentError>;
