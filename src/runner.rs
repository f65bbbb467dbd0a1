// src/runner.rs
// One-shot pipeline: scrape the record table, aggregate, render, splice the
// summary container in front of the table.

use std::time::Instant;

use crate::record::FightRecord;
use crate::render;
use crate::scrape;
use crate::stats;

/// Augment a fighter profile page with the summary panels.
/// None when the page has no record table or the table has no bout rows.
pub fn augment(doc: &str) -> Option<String> {
    let (tb_s, _tb_e, fragment) = build(doc)?;

    let mut out = String::with_capacity(doc.len() + fragment.len());
    out.push_str(&doc[..tb_s]);
    out.push_str(&fragment);
    out.push_str(&doc[tb_s..]);
    Some(out)
}

/// The summary container alone, without the surrounding page.
pub fn fragment(doc: &str) -> Option<String> {
    build(doc).map(|(_, _, fragment)| fragment)
}

fn build(doc: &str) -> Option<(usize, usize, String)> {
    let (tb_s, tb_e) = scrape::find_record_table(doc)?;

    let t = Instant::now();
    let bundle = scrape::parse_table(&doc[tb_s..tb_e]);
    logd!("record table: {} bouts parsed in {:?}", bundle.records.len(), t.elapsed());
    if bundle.skipped > 0 {
        logf!("skipped {} malformed record rows", bundle.skipped);
    }

    if bundle.records.is_empty() {
        return None;
    }
    Some((tb_s, tb_e, summary_fragment(&bundle.records)))
}

/// Compose all six panels, fixed order: outcome breakdown, organizations,
/// nemeses, streaks, title fights, style matchups.
pub fn summary_fragment(records: &[FightRecord]) -> String {
    let panels = [
        render::outcome_breakdown_panel(&stats::outcome_breakdown(records)),
        render::organization_panel(&stats::organization_record(records)),
        render::nemesis_panel(&stats::nemesis_list(records)),
        render::streaks_panel(&stats::streaks(records)),
        render::title_fight_panel(&stats::title_fight_record(records)),
        render::style_matrix_panel(&stats::style_matrix(records)),
    ];
    render::summary_container(&panels)
}
