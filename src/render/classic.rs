use std::fmt::Write;

use crate::models::Matrix;

/// Render every filled module as one unit square
///
/// The straightforward style: no grouping, no smoothing, one `<rect>` per
/// dark module at its pixel position.
pub fn cell_squares(matrix: &Matrix, module_size: u32, color: &str) -> String {
    let mut body = String::new();
    for row in 0..matrix.size() {
        for col in 0..matrix.size() {
            if !matrix.get(row, col) {
                continue;
            }
            let x = col as u32 * module_size;
            let y = row as u32 * module_size;
            let _ = write!(
                body,
                "<rect x=\"{x}\" y=\"{y}\" width=\"{module_size}\" height=\"{module_size}\" fill=\"{color}\" />"
            );
        }
    }
    body
}
