use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Largest row index a sheet may address, matching the ten-million-cell
/// ceiling hosts enforce when a sheet is a single column wide.
pub const MAX_ROWS: u32 = 10_000_000;

/// Largest column index a sheet may address (column `ZZZ`).
pub const MAX_COLS: u32 = 18_278;

// Column bits in a packed key. 2^15 slots cover MAX_COLS with room for the
// 1-based offset.
const COL_BITS: u32 = 15;
const COL_MASK: u64 = (1 << COL_BITS) - 1;

/// A cell position within a sheet.
///
/// Rows and columns are 1-based, matching the coordinates data-entry hosts
/// attach to edit events: `row = 1` is the header row and `col = 1` the
/// leftmost data column. Index 0 is never a valid coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    pub row: u32,
    pub col: u32,
}

impl CellCoord {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// A cell coordinate packed into a single `u64`, row-major.
///
/// Sparse grid maps key on `CellKey` instead of `CellCoord` so that map keys
/// serialize as plain integers (JSON object keys must be strings, and a
/// struct key would not survive `serde_json`), and so that `BTreeMap` range
/// scans walk one row at a time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[repr(transparent)]
pub struct CellKey(u64);

impl CellKey {
    /// Packs a 1-based coordinate. Panics if either index is zero or beyond
    /// the host ceiling; callers validate against sheet bounds first.
    pub fn new(row: u32, col: u32) -> Self {
        assert!(row >= 1 && row <= MAX_ROWS, "row {row} out of host bounds");
        assert!(col >= 1 && col <= MAX_COLS, "col {col} out of host bounds");
        CellKey(((row as u64) << COL_BITS) | col as u64)
    }

    pub fn row(self) -> u32 {
        (self.0 >> COL_BITS) as u32
    }

    pub fn col(self) -> u32 {
        (self.0 & COL_MASK) as u32
    }

    pub fn coord(self) -> CellCoord {
        CellCoord::new(self.row(), self.col())
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<CellCoord> for CellKey {
    fn from(coord: CellCoord) -> Self {
        CellKey::new(coord.row, coord.col)
    }
}

impl From<CellKey> for CellCoord {
    fn from(key: CellKey) -> Self {
        key.coord()
    }
}

// Manual impl so untrusted input cannot smuggle in an out-of-range or
// zero-index key; `Serialize` stays derived (plain u64).
impl<'de> Deserialize<'de> for CellKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = u64::deserialize(deserializer)?;
        let key = CellKey(raw);
        let (row, col) = (key.row(), key.col());
        if row == 0 || row > MAX_ROWS || col == 0 || col > MAX_COLS {
            return Err(D::Error::custom(format!("cell key {raw} out of bounds")));
        }
        Ok(key)
    }
}
