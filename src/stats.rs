// src/stats.rs
// Aggregation passes over an extracted record sequence. All of these are
// single pure folds; only the streak pass cares about row order, and the
// keyed ones report keys in first-seen order.

use crate::record::{FightRecord, Outcome, ResultMethod};

/// An opponent becomes a nemesis at this many bouts.
pub const NEMESIS_MIN_BOUTS: u32 = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WinLoss {
    pub wins: u32,
    pub losses: u32,
}

impl WinLoss {
    pub fn total(&self) -> u32 {
        self.wins + self.losses
    }

    fn add(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MethodCounts {
    pub ko: u32,
    pub submission: u32,
    pub decision: u32,
}

impl MethodCounts {
    pub fn total(&self) -> u32 {
        self.ko + self.submission + self.decision
    }

    fn add(&mut self, method: ResultMethod) {
        match method {
            ResultMethod::Ko => self.ko += 1,
            ResultMethod::Submission => self.submission += 1,
            ResultMethod::Decision => self.decision += 1,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutcomeBreakdown {
    pub wins: MethodCounts,
    pub losses: MethodCounts,
}

pub fn outcome_breakdown(records: &[FightRecord]) -> OutcomeBreakdown {
    let mut out = OutcomeBreakdown::default();
    for r in records {
        let side = match r.outcome {
            Outcome::Win => &mut out.wins,
            Outcome::Loss => &mut out.losses,
        };
        side.add(r.method);
    }
    out
}

/// Per-organization record, in first-seen organization order.
pub fn organization_record(records: &[FightRecord]) -> Vec<(String, WinLoss)> {
    let mut out: Vec<(String, WinLoss)> = Vec::new();
    for r in records {
        let idx = match out.iter().position(|(org, _)| *org == r.organization) {
            Some(i) => i,
            None => {
                out.push((r.organization.clone(), WinLoss::default()));
                out.len() - 1
            }
        };
        out[idx].1.add(r.outcome);
    }
    out
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Nemesis {
    pub name: String,
    pub url: String,
    pub record: WinLoss,
}

/// Opponents faced at least NEMESIS_MIN_BOUTS times, in first-seen order.
pub fn nemesis_list(records: &[FightRecord]) -> Vec<Nemesis> {
    let mut all: Vec<Nemesis> = Vec::new();
    for r in records {
        let idx = match all.iter().position(|n| n.name == r.opponent_name) {
            Some(i) => i,
            None => {
                all.push(Nemesis {
                    name: r.opponent_name.clone(),
                    url: r.opponent_url.clone(),
                    record: WinLoss::default(),
                });
                all.len() - 1
            }
        };
        all[idx].record.add(r.outcome);
    }
    all.retain(|n| n.record.total() >= NEMESIS_MIN_BOUTS);
    all
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Streaks {
    pub longest_win: u32,
    pub longest_loss: u32,
}

/// Longest same-outcome runs, one forward pass in table order.
pub fn streaks(records: &[FightRecord]) -> Streaks {
    let mut out = Streaks::default();
    let mut run = 0u32;
    let mut last: Option<Outcome> = None;
    for r in records {
        run = if last == Some(r.outcome) { run + 1 } else { 1 };
        last = Some(r.outcome);
        let best = match r.outcome {
            Outcome::Win => &mut out.longest_win,
            Outcome::Loss => &mut out.longest_loss,
        };
        if run > *best {
            *best = run;
        }
    }
    out
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleMatchup {
    pub style: String,
    pub opponent_style: String,
    pub record: WinLoss,
}

/// Record per (own style, opponent style) pair, in first-seen pair order.
pub fn style_matrix(records: &[FightRecord]) -> Vec<StyleMatchup> {
    let mut out: Vec<StyleMatchup> = Vec::new();
    for r in records {
        let idx = match out
            .iter()
            .position(|m| m.style == r.style && m.opponent_style == r.opponent_style)
        {
            Some(i) => i,
            None => {
                out.push(StyleMatchup {
                    style: r.style.clone(),
                    opponent_style: r.opponent_style.clone(),
                    record: WinLoss::default(),
                });
                out.len() - 1
            }
        };
        out[idx].record.add(r.outcome);
    }
    out
}

/// Record over title bouts only.
pub fn title_fight_record(records: &[FightRecord]) -> WinLoss {
    let mut out = WinLoss::default();
    for r in records.iter().filter(|r| r.title_fight) {
        out.add(r.outcome);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FightRecord, Outcome, ResultMethod};

    fn rec(
        outcome: Outcome,
        method: ResultMethod,
        title: bool,
        org: &str,
        opp: &str,
    ) -> FightRecord {
        FightRecord {
            outcome,
            title_fight: title,
            method,
            organization: s!(org),
            style: s!("Boxing"),
            opponent_name: s!(opp),
            opponent_style: s!("Wrestling"),
            opponent_url: format!("fighter.php?n={}", opp),
        }
    }

    // Four bouts against the same opponent: W-KO, W-Dec, L-Sub (title), W-KO.
    fn sample() -> Vec<FightRecord> {
        vec![
            rec(Outcome::Win, ResultMethod::Ko, false, "X", "A"),
            rec(Outcome::Win, ResultMethod::Decision, false, "X", "A"),
            rec(Outcome::Loss, ResultMethod::Submission, true, "Y", "A"),
            rec(Outcome::Win, ResultMethod::Ko, false, "X", "A"),
        ]
    }

    #[test]
    fn breakdown_counts_by_outcome_and_method() {
        let b = outcome_breakdown(&sample());
        assert_eq!(b.wins, MethodCounts { ko: 2, submission: 0, decision: 1 });
        assert_eq!(b.losses, MethodCounts { ko: 0, submission: 1, decision: 0 });
        assert_eq!(b.wins.total() + b.losses.total(), 4);
    }

    #[test]
    fn organizations_keep_first_seen_order() {
        let orgs = organization_record(&sample());
        assert_eq!(orgs.len(), 2);
        assert_eq!(orgs[0], (s!("X"), WinLoss { wins: 3, losses: 0 }));
        assert_eq!(orgs[1], (s!("Y"), WinLoss { wins: 0, losses: 1 }));
    }

    #[test]
    fn nemesis_requires_three_bouts() {
        let mut records = sample();
        records.push(rec(Outcome::Win, ResultMethod::Ko, false, "X", "B"));
        records.push(rec(Outcome::Loss, ResultMethod::Ko, false, "X", "B"));

        let nemeses = nemesis_list(&records);
        assert_eq!(nemeses.len(), 1); // B has only two bouts
        assert_eq!(nemeses[0].name, "A");
        assert_eq!(nemeses[0].record, WinLoss { wins: 3, losses: 1 });
        assert_eq!(nemeses[0].url, "fighter.php?n=A");
    }

    #[test]
    fn streaks_track_longest_runs() {
        let s = streaks(&sample());
        assert_eq!(s, Streaks { longest_win: 2, longest_loss: 1 });
    }

    #[test]
    fn streaks_on_empty_input_are_zero() {
        assert_eq!(streaks(&[]), Streaks::default());
    }

    #[test]
    fn all_wins_streak_spans_whole_sequence() {
        let records: Vec<_> = (0..6)
            .map(|_| rec(Outcome::Win, ResultMethod::Ko, false, "X", "A"))
            .collect();
        let s = streaks(&records);
        assert_eq!(s, Streaks { longest_win: 6, longest_loss: 0 });
    }

    #[test]
    fn style_matrix_groups_pairs() {
        let mut records = sample();
        records[2].opponent_style = s!("Jiu-Jitsu");
        let matrix = style_matrix(&records);
        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix[0].opponent_style, "Wrestling");
        assert_eq!(matrix[0].record, WinLoss { wins: 3, losses: 0 });
        assert_eq!(matrix[1].opponent_style, "Jiu-Jitsu");
        assert_eq!(matrix[1].record, WinLoss { wins: 0, losses: 1 });
    }

    #[test]
    fn title_record_counts_flagged_bouts_only() {
        let t = title_fight_record(&sample());
        assert_eq!(t, WinLoss { wins: 0, losses: 1 });
    }
}
