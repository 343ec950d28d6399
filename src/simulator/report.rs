//! Simulation report generation.

use crate::game::CrashCause;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of one simulated run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub score: u32,
    pub frames: u64,
    /// Includes the flap that started the run.
    pub flaps: u32,
    /// `None` when the run hit the frame cap.
    pub crash: Option<CrashCause>,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_timed_out: u32,

    pub avg_score: f64,
    pub best_score: u32,
    pub worst_score: u32,
    pub avg_frames: f64,
    pub avg_flaps_per_point: f64,

    pub crash_causes: BTreeMap<CrashCause, u32>,
    pub score_distribution: BTreeMap<u32, u32>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>, max_frames: u64) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;
        let runs_timed_out = runs
            .iter()
            .filter(|r| r.crash.is_none() && r.frames >= max_frames)
            .count() as u32;

        let total_score: u64 = runs.iter().map(|r| r.score as u64).sum();
        let total_flaps: u64 = runs.iter().map(|r| r.flaps as u64).sum();
        let avg_score = total_score as f64 / divisor;
        let avg_frames = runs.iter().map(|r| r.frames as f64).sum::<f64>() / divisor;
        let avg_flaps_per_point = if total_score == 0 {
            0.0
        } else {
            total_flaps as f64 / total_score as f64
        };

        let mut crash_causes = BTreeMap::new();
        let mut score_distribution = BTreeMap::new();
        for run in &runs {
            if let Some(cause) = run.crash {
                *crash_causes.entry(cause).or_insert(0) += 1;
            }
            *score_distribution.entry(run.score).or_insert(0) += 1;
        }

        Self {
            num_runs,
            runs_timed_out,
            avg_score,
            best_score: runs.iter().map(|r| r.score).max().unwrap_or(0),
            worst_score: runs.iter().map(|r| r.score).min().unwrap_or(0),
            avg_frames,
            avg_flaps_per_point,
            crash_causes,
            score_distribution,
            run_stats: runs,
        }
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} timed out\n\n",
            self.num_runs, self.runs_timed_out
        ));

        report.push_str("── SCORING ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Score:           {:.2}\n", self.avg_score));
        report.push_str(&format!("  Best Score:          {}\n", self.best_score));
        report.push_str(&format!("  Worst Score:         {}\n", self.worst_score));
        report.push_str(&format!("  Avg Frames Survived: {:.0}\n", self.avg_frames));
        report.push_str(&format!(
            "  Flaps per Point:     {:.1}\n\n",
            self.avg_flaps_per_point
        ));

        report.push_str("── CRASHES ──────────────────────────────────────────────────────\n");
        for cause in [CrashCause::Pipe, CrashCause::Ground, CrashCause::Ceiling] {
            let count = self.crash_causes.get(&cause).copied().unwrap_or(0);
            report.push_str(&format!(
                "  {:<8} {:>5} {}\n",
                cause.to_string(),
                count,
                self.bar(count)
            ));
        }
        report.push('\n');

        report.push_str("── SCORE DISTRIBUTION ───────────────────────────────────────────\n");
        for (score, count) in &self.score_distribution {
            report.push_str(&format!("  {:>4}: {:>5} {}\n", score, count, self.bar(*count)));
        }

        report
    }

    /// One block per 5% of runs.
    fn bar(&self, count: u32) -> String {
        let pct = count as f64 / self.num_runs.max(1) as f64 * 100.0;
        "█".repeat((pct / 5.0) as usize)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
