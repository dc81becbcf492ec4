//! qrblob - QR code SVG generator with classic and blob styles
//!
//! Encodes text into a QR module matrix and renders it as a self-contained
//! SVG document in one of two styles: "classic" (one square per module) and
//! "blob" (contiguous modules merged into smoothed outlines with enclosed
//! holes cut out, plus three stylistic finder ornaments).
//!
//! Each generation is a pure, synchronous computation: text, style and color
//! in, SVG string out. Nothing is cached or shared between calls.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Error types for generation requests
pub mod error;
/// Core data structures (Matrix, Point, Cell)
pub mod models;
/// Output file naming and the SVG file sink
pub mod output;
/// SVG rendering stages (grouping, contours, smoothing, holes, composition)
pub mod render;

pub use error::GenerateError;
pub use models::{Cell, Matrix, Point};
pub use render::{Group, RenderOptions, Style};

use std::path::{Path, PathBuf};

/// Generate an SVG document for `text` with default options
///
/// `color` is interpolated into fill attributes as-is and is expected to be
/// a 3- or 6-digit hex value; validating it is the caller's concern.
///
/// # Example
/// ```
/// use qrblob::{Style, generate};
///
/// let svg = generate("HELLO", Style::Blob, "#000000").unwrap();
/// assert!(svg.starts_with("<svg"));
/// ```
pub fn generate(text: &str, style: Style, color: &str) -> Result<String, GenerateError> {
    Generator::new().generate(text, style, color)
}

/// Generate an SVG file under `dir` with default options and return its path
pub fn generate_to_file(
    text: &str,
    style: Style,
    color: &str,
    dir: &Path,
) -> Result<PathBuf, GenerateError> {
    Generator::new().generate_to_file(text, style, color, dir)
}

/// Generator with configurable geometry options
pub struct Generator {
    options: RenderOptions,
}

impl Generator {
    /// Create a generator with default options
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
        }
    }

    /// Create a generator with specific rendering options
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Generate the SVG document string
    pub fn generate(&self, text: &str, style: Style, color: &str) -> Result<String, GenerateError> {
        let matrix = Matrix::from_text(text)?;
        log::debug!("encoded text into a {size}x{size} symbol", size = matrix.size());
        Ok(render::compose::render_svg(&matrix, style, color, &self.options))
    }

    /// Generate the SVG and write it under `dir`, returning the full path
    ///
    /// The file name is derived from the text (see [`output::file_name_for`]).
    pub fn generate_to_file(
        &self,
        text: &str,
        style: Style,
        color: &str,
        dir: &Path,
    ) -> Result<PathBuf, GenerateError> {
        let svg = self.generate(text, style, color)?;
        let file_name = output::file_name_for(text, style);
        let path = output::write_svg(dir, &file_name, &svg)?;
        Ok(path)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_classic() {
        let svg = generate("HELLO", Style::Classic, "#000000").expect("generation failed");
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        // 21 modules at 30px
        assert!(svg.contains("viewBox=\"0 0 630 630\""));
    }

    #[test]
    fn test_generate_blob() {
        let svg = generate("HELLO", Style::Blob, "#ff0000").expect("generation failed");
        assert!(svg.contains("<path"));
        assert!(svg.contains("fill-rule=\"evenodd\""));
        assert!(svg.contains("#ff0000"));
    }

    #[test]
    fn test_generate_rejects_oversized_text() {
        // Far past the capacity of any QR version at level M
        let text = "x".repeat(5000);
        let result = generate(&text, Style::Classic, "#000000");
        assert!(matches!(result, Err(GenerateError::Encode(_))));
    }

    #[test]
    fn test_custom_module_size() {
        let generator = Generator::with_options(RenderOptions {
            module_size: 10,
            ..RenderOptions::default()
        });
        let svg = generator
            .generate("HELLO", Style::Classic, "#000000")
            .expect("generation failed");
        assert!(svg.contains("viewBox=\"0 0 210 210\""));
    }
}
