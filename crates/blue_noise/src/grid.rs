//! Toroidal occupancy grid and cell index math.
//!
//! The grid covers a working domain slightly larger than the requested square:
//! `grid_length = ceil(sample_range / cell_size)` cells per side, so the
//! physical extent `grid_length * cell_size` is the smallest whole-cell square
//! covering `sample_range`. Positions and cell indices wrap toroidally, which
//! makes the 3x3 neighbor query trivial at the seam.

/// Square boolean occupancy grid over a toroidally wrapped working domain.
///
/// `cell_size` is `min_dist / sqrt(2)`, so a cell's diagonal is exactly
/// `min_dist` and no cell can hold two valid samples.
#[derive(Debug, Clone)]
pub struct TorusGrid {
    cell_size: f32,
    grid_length: usize,
    ceiled_range: f32,
    cells: Vec<bool>,
}

impl TorusGrid {
    /// Creates an empty grid sized for the given run parameters.
    ///
    /// Expects `min_dist > 0` and `sample_range > min_dist` (enforced by
    /// [`crate::config::SamplerConfig::validate`]), which guarantees
    /// `grid_length >= 2`.
    pub fn new(min_dist: f32, sample_range: f32) -> Self {
        debug_assert!(min_dist > 0.0);
        debug_assert!(sample_range > min_dist);
        let cell_size = min_dist / std::f32::consts::SQRT_2;
        let grid_length = (sample_range / cell_size).ceil() as usize;
        let ceiled_range = grid_length as f32 * cell_size;

        Self {
            cell_size,
            grid_length,
            ceiled_range,
            cells: vec![false; grid_length * grid_length],
        }
    }

    /// Cell side length in world units.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Cells per side.
    pub fn length(&self) -> usize {
        self.grid_length
    }

    /// Physical side length of the working domain, `>= sample_range`.
    pub fn extent(&self) -> f32 {
        self.ceiled_range
    }

    /// Maximum number of samples the grid can hold, one per cell.
    pub fn capacity(&self) -> usize {
        self.grid_length * self.grid_length
    }

    /// Reduces any coordinate into `[0, extent)` with a true modulo, so
    /// negative inputs wrap to the far edge instead of truncating toward zero.
    pub fn wrap_position(&self, f: f32) -> f32 {
        f - (f / self.ceiled_range).floor() * self.ceiled_range
    }

    /// Maps a coordinate to its cell index along one axis.
    pub fn cell_of(&self, f: f32) -> usize {
        // Roundoff in wrap_position can land exactly on `extent`; the modulo
        // folds that onto cell 0, consistent with the torus.
        ((self.wrap_position(f) / self.cell_size).floor() as usize) % self.grid_length
    }

    /// Wraps a cell index into `[0, length)`, true modulo.
    pub fn wrap_cell(&self, i: isize) -> usize {
        i.rem_euclid(self.grid_length as isize) as usize
    }

    /// Whether the cell at `(x, y)` holds a sample.
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Marks the cell at `(x, y)` as holding a sample.
    pub fn occupy(&mut self, x: usize, y: usize) {
        let idx = self.index(x, y);
        self.cells[idx] = true;
    }

    /// Whether any cell in the 3x3 block centered on `(cx, cy)` is occupied,
    /// with each coordinate wrapped individually across the seam.
    ///
    /// Conservative conflict test: any sample within one cell of the candidate
    /// in either axis could sit closer than `min_dist`.
    pub fn has_neighbor(&self, cx: usize, cy: usize) -> bool {
        for dy in -1..=1isize {
            for dx in -1..=1isize {
                let x = self.wrap_cell(cx as isize + dx);
                let y = self.wrap_cell(cy as isize + dy);
                if self.cells[self.index(x, y)] {
                    return true;
                }
            }
        }

        false
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.grid_length + x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_constants_cover_the_requested_range() {
        let grid = TorusGrid::new(5.0, 256.0);
        let expected_cell = 5.0 / std::f32::consts::SQRT_2;
        assert!((grid.cell_size() - expected_cell).abs() < 1e-6);
        assert_eq!(grid.length(), 73);
        assert!(grid.extent() >= 256.0);
        assert!(grid.extent() < 256.0 + expected_cell);
        assert_eq!(grid.capacity(), 73 * 73);
    }

    #[test]
    fn wrap_position_handles_negative_and_oversized_inputs() {
        let grid = TorusGrid::new(1.0, 10.0);
        let extent = grid.extent();

        let wrapped = grid.wrap_position(-0.5);
        assert!((wrapped - (extent - 0.5)).abs() < 1e-4);

        let wrapped = grid.wrap_position(extent + 1.0);
        assert!((wrapped - 1.0).abs() < 1e-4);

        let inside = grid.wrap_position(3.25);
        assert!((inside - 3.25).abs() < 1e-6);
    }

    #[test]
    fn cell_of_wraps_like_the_position() {
        let grid = TorusGrid::new(1.0, 10.0);
        assert_eq!(grid.cell_of(0.0), 0);
        assert_eq!(grid.cell_of(grid.cell_size() * 1.5), 1);
        // A slightly negative coordinate belongs to the last cell.
        assert_eq!(grid.cell_of(-0.1), grid.length() - 1);
        assert_eq!(grid.cell_of(grid.extent()), 0);
    }

    #[test]
    fn wrap_cell_is_a_true_modulo() {
        let grid = TorusGrid::new(1.0, 10.0);
        let len = grid.length() as isize;
        assert_eq!(grid.wrap_cell(-1), grid.length() - 1);
        assert_eq!(grid.wrap_cell(len), 0);
        assert_eq!(grid.wrap_cell(-len), 0);
        assert_eq!(grid.wrap_cell(3), 3);
    }

    #[test]
    fn neighbor_query_wraps_across_the_seam() {
        let mut grid = TorusGrid::new(1.0, 10.0);
        grid.occupy(0, 0);

        assert!(grid.has_neighbor(0, 0));
        assert!(grid.has_neighbor(1, 1));
        // Opposite edge is adjacent on the torus.
        assert!(grid.has_neighbor(grid.length() - 1, 0));
        assert!(grid.has_neighbor(grid.length() - 1, grid.length() - 1));
        // Two cells away is out of the 3x3 block.
        assert!(!grid.has_neighbor(2, 2));
    }

    #[test]
    fn occupy_is_per_cell() {
        let mut grid = TorusGrid::new(1.0, 10.0);
        assert!(!grid.is_occupied(3, 4));
        grid.occupy(3, 4);
        assert!(grid.is_occupied(3, 4));
        assert!(!grid.is_occupied(4, 3));
    }
}
