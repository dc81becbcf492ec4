use crate::models::{Cell, Matrix};
use crate::render::contour::trace_outline;
use crate::render::groups::{Group, NEIGHBORS};
use crate::render::smooth::round_polygon;

/// Find enclosed background regions inside `group` and return their smoothed
/// sub-paths
///
/// The group's bounding box is expanded by one module on each side (clamped
/// to the matrix) and the background cells inside it are flood filled with a
/// local visited arena. A background component that reaches the box edge is
/// the exterior as seen from this frame and is dropped; fully enclosed
/// components are true holes and are traced and smoothed like the group
/// itself. The returned fragments are appended to the group's path so an
/// even-odd fill subtracts them.
pub fn hole_paths(group: &Group, matrix: &Matrix, module_size: u32, radius: f32) -> Vec<String> {
    if group.cells.is_empty() {
        return Vec::new();
    }

    let size = matrix.size();
    let mut min_row = usize::MAX;
    let mut max_row = 0;
    let mut min_col = usize::MAX;
    let mut max_col = 0;
    for cell in &group.cells {
        min_row = min_row.min(cell.row);
        max_row = max_row.max(cell.row);
        min_col = min_col.min(cell.col);
        max_col = max_col.max(cell.col);
    }

    // Expand by one module, clamped to matrix bounds
    let min_row = min_row.saturating_sub(1);
    let min_col = min_col.saturating_sub(1);
    let max_row = (max_row + 1).min(size - 1);
    let max_col = (max_col + 1).min(size - 1);

    let box_cols = max_col - min_col + 1;
    let box_rows = max_row - min_row + 1;
    let mut visited = vec![false; box_rows * box_cols];
    let local = |row: usize, col: usize| (row - min_row) * box_cols + (col - min_col);

    let mut holes = Vec::new();
    for row in min_row..=max_row {
        for col in min_col..=max_col {
            if matrix.get(row, col) || visited[local(row, col)] {
                continue;
            }

            let mut region = Vec::new();
            let mut touches_boundary = false;
            let mut stack = vec![Cell::new(row, col)];
            visited[local(row, col)] = true;

            while let Some(cell) = stack.pop() {
                region.push(cell);
                if cell.row == min_row
                    || cell.row == max_row
                    || cell.col == min_col
                    || cell.col == max_col
                {
                    touches_boundary = true;
                }
                // 4-connected background neighbors inside the box
                for (dr, dc) in NEIGHBORS {
                    let nr = cell.row as i32 + dr;
                    let nc = cell.col as i32 + dc;
                    if nr < min_row as i32
                        || nc < min_col as i32
                        || nr > max_row as i32
                        || nc > max_col as i32
                    {
                        continue;
                    }
                    let (nr, nc) = (nr as usize, nc as usize);
                    if matrix.get(nr, nc) || visited[local(nr, nc)] {
                        continue;
                    }
                    visited[local(nr, nc)] = true;
                    stack.push(Cell::new(nr, nc));
                }
            }

            if touches_boundary {
                continue;
            }

            let points: Vec<_> = trace_outline(&region, module_size)
                .iter()
                .map(|p| p.to_point())
                .collect();
            let path = round_polygon(&points, radius);
            if !path.is_empty() {
                holes.push(path);
            }
        }
    }

    if !holes.is_empty() {
        log::debug!("group of {} cells has {} holes", group.cells.len(), holes.len());
    }
    holes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group_of(cells: &[(usize, usize)]) -> Group {
        Group {
            cells: cells.iter().map(|&(r, c)| Cell::new(r, c)).collect(),
        }
    }

    fn fill(matrix: &mut Matrix, cells: &[(usize, usize)]) {
        for &(r, c) in cells {
            matrix.set(r, c, true);
        }
    }

    #[test]
    fn test_solid_rectangle_has_no_holes() {
        let mut matrix = Matrix::new(6);
        let cells: Vec<_> = (1..4).flat_map(|r| (1..4).map(move |c| (r, c))).collect();
        fill(&mut matrix, &cells);

        let holes = hole_paths(&group_of(&cells), &matrix, 30, 9.0);
        assert!(holes.is_empty());
    }

    #[test]
    fn test_ring_has_one_hole() {
        let mut matrix = Matrix::new(7);
        let mut cells = Vec::new();
        for r in 1..4 {
            for c in 1..4 {
                if r != 2 || c != 2 {
                    cells.push((r, c));
                }
            }
        }
        fill(&mut matrix, &cells);

        let holes = hole_paths(&group_of(&cells), &matrix, 30, 9.0);
        assert_eq!(holes.len(), 1);
        assert!(holes[0].starts_with('M'));
        assert!(holes[0].ends_with('Z'));
    }

    #[test]
    fn test_thick_ring_has_one_hole() {
        // 5x5 block with the center cell cleared: a ring two modules thick
        let mut matrix = Matrix::new(9);
        let mut cells = Vec::new();
        for r in 1..6 {
            for c in 1..6 {
                if r != 3 || c != 3 {
                    cells.push((r, c));
                }
            }
        }
        fill(&mut matrix, &cells);

        let holes = hole_paths(&group_of(&cells), &matrix, 30, 9.0);
        assert_eq!(holes.len(), 1);
    }

    #[test]
    fn test_open_pocket_is_not_a_hole() {
        // U shape: the pocket connects to the exterior through the opening
        let mut matrix = Matrix::new(6);
        let cells = [(1, 1), (2, 1), (3, 1), (3, 2), (3, 3), (2, 3), (1, 3)];
        fill(&mut matrix, &cells);

        let holes = hole_paths(&group_of(&cells), &matrix, 30, 9.0);
        assert!(holes.is_empty());
    }

    #[test]
    fn test_ring_at_matrix_edge() {
        // Ring touching the matrix corner: the expanded box clamps to the
        // matrix bounds and the enclosed cell is still a hole.
        let mut matrix = Matrix::new(5);
        let mut cells = Vec::new();
        for r in 0..3 {
            for c in 0..3 {
                if r != 1 || c != 1 {
                    cells.push((r, c));
                }
            }
        }
        fill(&mut matrix, &cells);

        let holes = hole_paths(&group_of(&cells), &matrix, 30, 9.0);
        assert_eq!(holes.len(), 1);
    }

    #[test]
    fn test_empty_group() {
        let matrix = Matrix::new(4);
        let holes = hole_paths(&group_of(&[]), &matrix, 30, 9.0);
        assert!(holes.is_empty());
    }
}
