/// Half-open row/column range `[start_row, end_row) x [start_col, end_col)`
/// within the output raster, assigned to one concurrent compute task.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRegion {
    pub start_row: u32,
    pub end_row: u32,
    pub start_col: u32,
    pub end_col: u32,
}

impl PixelRegion {
    #[must_use]
    pub fn height(&self) -> u32 {
        self.end_row.saturating_sub(self.start_row)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.end_col.saturating_sub(self.start_col)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.height() == 0 || self.width() == 0
    }
}
