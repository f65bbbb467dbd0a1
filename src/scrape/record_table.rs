// src/scrape/record_table.rs
// Extracts typed fight records from a profile page's record table.
//
// Layout contract with the site (fixed cell positions):
//   0 marker | 1 style | 2 opponent link | 3 opponent style | 4 org | 5 result
// The first row of the table is a header row and carries no bout.

use std::error::Error;

use crate::core::html::{self, inner_after_open_tag, next_tag_block_ci, strip_tags};
use crate::core::sanitize::normalize_entities;
use crate::params::{
    COL_MARKER, COL_METHOD, COL_OPPONENT, COL_OPPONENT_STYLE, COL_ORGANIZATION, COL_STYLE,
    MARKER_LOSS_TITLE, MARKER_WIN, MARKER_WIN_TITLE, RECORD_COLS, RECORD_TABLE_CLASS,
};
use crate::record::{FightRecord, Outcome, ResultMethod};

pub struct RecordBundle {
    pub records: Vec<FightRecord>,
    pub skipped: usize,
}

/// Byte span of the record table block in a full page. None when the page has none.
pub fn find_record_table(doc: &str) -> Option<(usize, usize)> {
    let mut pos = 0usize;
    while let Some((tb_s, tb_e)) = next_tag_block_ci(doc, "<table", "</table>", pos) {
        let opener = html::opener(&doc[tb_s..tb_e]);
        if html::opener_classes(opener).iter().any(|c| c == RECORD_TABLE_CLASS) {
            return Some((tb_s, tb_e));
        }
        pos = tb_e;
    }
    None
}

/// Parse every bout row of a record table block, preserving table order.
/// Malformed rows are logged and dropped so one broken row cannot take out
/// the whole summary.
pub fn parse_table(table: &str) -> RecordBundle {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    let mut row_idx = 0usize;
    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(table, "<tr", "</tr>", pos) {
        let tr = &table[tr_s..tr_e];
        pos = tr_e;
        row_idx += 1;
        if row_idx == 1 {
            continue; // header row
        }

        match extract_record(tr) {
            Ok(rec) => records.push(rec),
            Err(e) => {
                loge!("record row {}: {}", row_idx, e);
                skipped += 1;
            }
        }
    }

    RecordBundle { records, skipped }
}

/// Build one FightRecord from one <tr> block.
fn extract_record(tr: &str) -> Result<FightRecord, Box<dyn Error>> {
    let mut tds: Vec<&str> = Vec::with_capacity(RECORD_COLS);
    let mut td_pos = 0usize;
    while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", td_pos) {
        tds.push(&tr[td_s..td_e]);
        td_pos = td_e;
    }
    if tds.len() < RECORD_COLS {
        return Err(format!("expected {} cells, found {}", RECORD_COLS, tds.len()).into());
    }

    // Outcome + title flag from the marker cell's class tokens.
    let marker = html::opener_classes(html::opener(tds[COL_MARKER]));
    let outcome = if marker.iter().any(|c| c == MARKER_WIN || c == MARKER_WIN_TITLE) {
        Outcome::Win
    } else {
        Outcome::Loss
    };
    let title_fight = marker.iter().any(|c| c == MARKER_WIN_TITLE || c == MARKER_LOSS_TITLE);

    // Opponent name + profile link.
    let (a_s, a_e) = next_tag_block_ci(tds[COL_OPPONENT], "<a", "</a>", 0)
        .ok_or("opponent cell has no link")?;
    let a_block = &tds[COL_OPPONENT][a_s..a_e];
    let opponent_url = html::attr_value_ci(html::opener(a_block), "href")
        .map(normalize_entities)
        .ok_or("opponent link has no href")?;
    let opponent_name = cell_text(a_block);
    if opponent_name.is_empty() {
        return Err("opponent link has no name".into());
    }

    Ok(FightRecord {
        outcome,
        title_fight,
        method: ResultMethod::classify(&cell_text(tds[COL_METHOD])),
        organization: cell_text(tds[COL_ORGANIZATION]),
        style: cell_text(tds[COL_STYLE]),
        opponent_name,
        opponent_style: cell_text(tds[COL_OPPONENT_STYLE]),
        opponent_url,
    })
}

fn cell_text(block: &str) -> String {
    strip_tags(normalize_entities(&inner_after_open_tag(block)))
}
