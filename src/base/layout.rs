/// Cell geometry of the exported report. Rows and columns are zero based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub record_count: usize,
    /// Length of the longer recap block.
    pub recap_depth: usize,
}

impl Layout {
    pub const TITLE_ROW: u32 = 0;
    pub const HEADER_ROW: u32 = 2;
    /// Width of the record table, and of the title band above it.
    pub const COLUMNS: u16 = 6;
    pub const LEFT_BLOCK_COL: u16 = 0;
    pub const RIGHT_BLOCK_COL: u16 = 4;
    /// Rows between the end of one block and the start of the next.
    pub const GAP: u32 = 3;

    pub const COLUMN_WIDTHS: [f64; Self::COLUMNS as usize] = [22.0, 12.0, 10.0, 8.0, 22.0, 12.0];

    pub fn new(record_count: usize, summaries: &crate::base::Summaries) -> Self {
        Self {
            record_count,
            recap_depth: summaries.depth(),
        }
    }

    pub fn first_record_row(&self) -> u32 {
        Self::HEADER_ROW + 1
    }

    pub fn recap_start_row(&self) -> u32 {
        Self::HEADER_ROW + to_u32(self.record_count) + Self::GAP
    }

    pub fn stock_start_row(&self) -> u32 {
        self.recap_start_row() + to_u32(self.recap_depth) + Self::GAP
    }
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
