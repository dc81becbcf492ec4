use std::fmt::Write;

use crate::models::Matrix;
use crate::render::{RenderOptions, Style, classic, contour, finder, groups, holes, smooth};

/// Assemble the final SVG document for a module matrix
///
/// The document uses a `viewBox` of `module count × module size` in both
/// dimensions, a white background rectangle, and crisp edge rendering. The
/// blob style paints, in order: one even-odd path per group (outer contour
/// plus hole sub-paths), a white square over every background module, and
/// the three finder ornaments last so they override whatever sits beneath
/// them.
pub fn render_svg(matrix: &Matrix, style: Style, color: &str, options: &RenderOptions) -> String {
    let module_size = options.module_size;
    let size = matrix.size() as u32 * module_size;

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {size} {size}\" shape-rendering=\"crispEdges\">"
    );
    let _ = write!(svg, "<rect width=\"{size}\" height=\"{size}\" fill=\"#FFFFFF\"/>");

    match style {
        Style::Classic => svg.push_str(&classic::cell_squares(matrix, module_size, color)),
        Style::Blob => svg.push_str(&blob_body(matrix, color, options)),
    }

    svg.push_str("</svg>");
    svg
}

/// Render the merged blob style body
fn blob_body(matrix: &Matrix, color: &str, options: &RenderOptions) -> String {
    let module_size = options.module_size;
    let radius = options.smoothing_radius();
    let size = matrix.size() as u32 * module_size;

    let mut body = String::new();

    for group in groups::group_modules(matrix) {
        let points: Vec<_> = contour::trace_outline(&group.cells, module_size)
            .iter()
            .map(|p| p.to_point())
            .collect();
        let outer = smooth::round_polygon(&points, radius);
        if outer.is_empty() {
            // Degenerate contour, nothing to draw
            continue;
        }

        let mut d = outer;
        for hole in holes::hole_paths(&group, matrix, module_size, radius) {
            d.push(' ');
            d.push_str(&hole);
        }
        let _ = write!(
            body,
            "<path d=\"{d}\" fill=\"{color}\" fill-rule=\"evenodd\" />"
        );
    }

    // White squares over every background module: blob outlines round
    // outward past cell borders, and this restores the background there.
    for row in 0..matrix.size() {
        for col in 0..matrix.size() {
            if matrix.get(row, col) {
                continue;
            }
            let x = col as u32 * module_size;
            let y = row as u32 * module_size;
            let _ = write!(
                body,
                "<rect x=\"{x}\" y=\"{y}\" width=\"{module_size}\" height=\"{module_size}\" fill=\"#FFFFFF\" />"
            );
        }
    }

    // Finder ornaments painted last, over symbol content
    let span = options.finder_size * module_size;
    body.push_str(&finder::finder_ornament(0, 0, module_size, options.finder_size, color));
    body.push_str(&finder::finder_ornament(size - span, 0, module_size, options.finder_size, color));
    body.push_str(&finder::finder_ornament(0, size - span, module_size, options.finder_size, color));

    body
}
