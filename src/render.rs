// src/render.rs
// Formats computed aggregates as HTML fragments. No counting happens here;
// every number arrives precomputed from stats.

use crate::core::html::escape_text;
use crate::stats::{MethodCounts, Nemesis, OutcomeBreakdown, Streaks, StyleMatchup, WinLoss};

fn open_panel() -> String {
    s!(r#"<div class="summary-panel">"#)
}

fn heading(out: &mut String, label: &str) {
    out.push_str(&join!("<h4>", label, "</h4>"));
}

fn line(out: &mut String, text: &str) {
    out.push_str(&join!("<div>", text, "</div>"));
}

/// Losses first, then wins, each split by method.
pub fn outcome_breakdown_panel(b: &OutcomeBreakdown) -> String {
    let mut out = open_panel();
    method_section(&mut out, "Losses", &b.losses);
    method_section(&mut out, "Wins", &b.wins);
    out.push_str("</div>");
    out
}

fn method_section(out: &mut String, label: &str, m: &MethodCounts) {
    heading(out, label);
    line(out, &format!("KO: {}", m.ko));
    line(out, &format!("Submission: {}", m.submission));
    line(out, &format!("Decision: {}", m.decision));
}

pub fn organization_panel(orgs: &[(String, WinLoss)]) -> String {
    let mut out = open_panel();
    heading(&mut out, "Record by organization");
    for (org, wl) in orgs {
        line(&mut out, &format!("{}: {} - {}", escape_text(org), wl.wins, wl.losses));
    }
    out.push_str("</div>");
    out
}

/// Opponent names link back to their profile pages.
pub fn nemesis_panel(nemeses: &[Nemesis]) -> String {
    let mut out = open_panel();
    heading(&mut out, "Nemeses");
    for n in nemeses {
        line(
            &mut out,
            &format!(
                r#"<a href="{}">{}</a>: {} - {}"#,
                escape_text(&n.url),
                escape_text(&n.name),
                n.record.wins,
                n.record.losses
            ),
        );
    }
    out.push_str("</div>");
    out
}

pub fn streaks_panel(s: &Streaks) -> String {
    let mut out = open_panel();
    heading(&mut out, "Streaks");
    line(&mut out, &format!("Longest win streak: {}", s.longest_win));
    line(&mut out, &format!("Longest loss streak: {}", s.longest_loss));
    out.push_str("</div>");
    out
}

pub fn title_fight_panel(t: &WinLoss) -> String {
    let mut out = open_panel();
    heading(&mut out, "Title fights");
    line(&mut out, &format!("Wins: {}", t.wins));
    line(&mut out, &format!("Losses: {}", t.losses));
    out.push_str("</div>");
    out
}

/// One grid row per style pair: style | vs. | opponent style | wins | - | losses.
pub fn style_matrix_panel(matchups: &[StyleMatchup]) -> String {
    let mut out = open_panel();
    heading(&mut out, "Style matchups");
    out.push_str(r#"<table class="summary-styles">"#);
    for m in matchups {
        out.push_str(&join!(
            "<tr><td>",
            &escape_text(&m.style),
            "</td><td>vs.</td><td>",
            &escape_text(&m.opponent_style),
            "</td><td>",
            &m.record.wins.to_string(),
            "</td><td>-</td><td>",
            &m.record.losses.to_string(),
            "</td></tr>"
        ));
    }
    out.push_str("</table></div>");
    out
}

/// Concatenate panels into the one container the page receives.
pub fn summary_container(panels: &[String]) -> String {
    let mut out = s!(r#"<div class="record-summary">"#);
    for p in panels {
        out.push_str(p);
    }
    out.push_str("</div>");
    out
}
