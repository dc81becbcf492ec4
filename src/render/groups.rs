use crate::models::{Cell, Matrix};

/// Maximal 4-connected set of filled modules
///
/// Cell order follows flood fill traversal and is irrelevant to rendering;
/// only the set matters.
#[derive(Debug, Clone)]
pub struct Group {
    /// Cells belonging to this group
    pub cells: Vec<Cell>,
}

/// Von Neumann neighborhood offsets (up, down, left, right)
pub(crate) const NEIGHBORS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Partition the filled modules of `matrix` into 4-connected groups
///
/// Cells are scanned in row-major order; each unvisited filled cell seeds an
/// iterative flood fill over its 4-connected filled neighbors. Groups are
/// emitted in the order their first cell is discovered, which makes the
/// z-order of rendered paths deterministic.
pub fn group_modules(matrix: &Matrix) -> Vec<Group> {
    let size = matrix.size();
    let mut visited = vec![false; size * size];
    let mut groups = Vec::new();

    for row in 0..size {
        for col in 0..size {
            if !matrix.get(row, col) || visited[row * size + col] {
                continue;
            }
            let cells = flood_fill(matrix, row, col, &mut visited);
            groups.push(Group { cells });
        }
    }

    log::debug!(
        "grouped {} filled modules into {} groups",
        matrix.filled_count(),
        groups.len()
    );
    groups
}

/// Collect all filled cells reachable from (start_row, start_col)
///
/// Uses an explicit stack instead of recursion so large symbols cannot
/// overflow the call stack.
fn flood_fill(
    matrix: &Matrix,
    start_row: usize,
    start_col: usize,
    visited: &mut [bool],
) -> Vec<Cell> {
    let size = matrix.size();
    let mut stack = vec![Cell::new(start_row, start_col)];
    visited[start_row * size + start_col] = true;
    let mut cells = Vec::new();

    while let Some(cell) = stack.pop() {
        cells.push(cell);
        for (dr, dc) in NEIGHBORS {
            let nr = cell.row as i32 + dr;
            let nc = cell.col as i32 + dc;
            if nr < 0 || nc < 0 || nr as usize >= size || nc as usize >= size {
                continue;
            }
            let (nr, nc) = (nr as usize, nc as usize);
            if matrix.get(nr, nc) && !visited[nr * size + nc] {
                visited[nr * size + nc] = true;
                stack.push(Cell::new(nr, nc));
            }
        }
    }

    cells
}
