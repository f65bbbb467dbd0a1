// src/params.rs
use std::path::PathBuf;

pub const LOG_FILE: &str = "fight_scrape.log";

/// Class of the record table on a fighter profile page.
pub const RECORD_TABLE_CLASS: &str = "record";

// Marker class tokens on the first cell of a bout row.
pub const MARKER_WIN: &str = "win";
pub const MARKER_WIN_TITLE: &str = "winTitle";
pub const MARKER_LOSS: &str = "loss";
pub const MARKER_LOSS_TITLE: &str = "lossTitle";

// Fixed cell positions within a bout row.
pub const COL_MARKER: usize = 0;
pub const COL_STYLE: usize = 1;
pub const COL_OPPONENT: usize = 2;
pub const COL_OPPONENT_STYLE: usize = 3;
pub const COL_ORGANIZATION: usize = 4;
pub const COL_METHOD: usize = 5;
pub const RECORD_COLS: usize = 6;

#[derive(Clone)]
pub struct Params {
    pub input: PathBuf,           // saved fighter profile page
    pub out: Option<PathBuf>,     // output path; stdout when absent
    pub fragment_only: bool,      // emit the summary fragment, not the whole page
}
