//! SVG rendering stages
//!
//! This module contains the full rendering pipeline from module matrix to
//! SVG document:
//! - Component grouping (flood fill over filled modules)
//! - Contour tracing (boundary segments walked into closed polylines)
//! - Corner smoothing (per-vertex insets and quadratic curves)
//! - Hole detection (enclosed background regions, subtracted via even-odd)
//! - Finder ornaments and final document composition

/// Classic style: one square per filled module
pub mod classic;
/// Document assembly for both styles
pub mod compose;
/// Boundary contour tracing from unit segments
pub mod contour;
/// Stylistic finder pattern ornaments
pub mod finder;
/// 4-connected component grouping
pub mod groups;
/// Enclosed background hole detection
pub mod holes;
/// Corner rounding into blob paths
pub mod smooth;

pub use groups::Group;

/// Rendering style for the generated SVG
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Discrete filled squares, one per module
    Classic,
    /// Contiguous modules merged into smoothed outlines
    Blob,
}

impl Style {
    /// Parse a style from its lowercase name ("classic" or "blob")
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(Style::Classic),
            "blob" => Some(Style::Blob),
            _ => None,
        }
    }

    /// The lowercase name of this style
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Classic => "classic",
            Style::Blob => "blob",
        }
    }
}

/// Geometry options shared by both rendering styles
///
/// The defaults reproduce the canonical output: 30px modules, 7-module
/// finder ornaments, smoothing radius at 30% of the module size.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Side length of one module in pixels
    pub module_size: u32,
    /// Side length of a finder ornament in modules
    pub finder_size: u32,
    /// Smoothing radius as a fraction of the module size
    pub smoothing: f32,
}

impl RenderOptions {
    /// Effective corner smoothing radius in pixels
    pub fn smoothing_radius(&self) -> f32 {
        self.module_size as f32 * self.smoothing
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            module_size: 30,
            finder_size: 7,
            smoothing: 0.3,
        }
    }
}
