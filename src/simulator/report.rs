//! Simulation report generation.

use super::runner::RunStats;

/// Aggregated results from multiple autopilot runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub base_seed: u64,
    pub num_runs: u32,
    pub runs_crashed: u32,
    pub runs_timed_out: u32,

    pub avg_score: f64,
    pub min_score: u32,
    pub median_score: u32,
    pub max_score: u32,
    pub avg_jumps: f64,
    pub avg_survival_ms: f64,

    // Individual runs, in seed order
    pub runs: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>, base_seed: u64) -> Self {
        let num_runs = runs.len() as u32;
        let runs_crashed = runs.iter().filter(|r| r.crashed).count() as u32;
        let divisor = num_runs.max(1) as f64;

        let avg_score = runs.iter().map(|r| r.score as f64).sum::<f64>() / divisor;
        let avg_jumps = runs.iter().map(|r| r.jumps as f64).sum::<f64>() / divisor;
        let avg_survival_ms = runs.iter().map(|r| r.elapsed_ms).sum::<f64>() / divisor;

        let mut scores: Vec<u32> = runs.iter().map(|r| r.score).collect();
        scores.sort_unstable();

        Self {
            base_seed,
            num_runs,
            runs_crashed,
            runs_timed_out: num_runs - runs_crashed,
            avg_score,
            min_score: scores.first().copied().unwrap_or(0),
            median_score: scores.get(scores.len() / 2).copied().unwrap_or(0),
            max_score: scores.last().copied().unwrap_or(0),
            avg_jumps,
            avg_survival_ms,
            runs,
        }
    }

    /// Generate a text summary.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        out.push_str("═══════════════════════════════════════════════════\n");
        out.push_str("                 AUTOPILOT SUMMARY\n");
        out.push_str("═══════════════════════════════════════════════════\n\n");

        out.push_str(&format!("Base seed:      {}\n", self.base_seed));
        out.push_str(&format!("Runs:           {}\n", self.num_runs));
        out.push_str(&format!(
            "Crashed:        {} ({:.1}%)\n",
            self.runs_crashed,
            self.crash_rate() * 100.0
        ));
        out.push_str(&format!("Timed out:      {}\n\n", self.runs_timed_out));

        out.push_str("SCORES\n");
        out.push_str("───────────────────────────────────────────────────\n");
        out.push_str(&format!("  Average:      {:.1}\n", self.avg_score));
        out.push_str(&format!(
            "  Min / Median / Max: {} / {} / {}\n",
            self.min_score, self.median_score, self.max_score
        ));
        out.push_str(&format!("  Avg jumps:    {:.1}\n", self.avg_jumps));
        out.push_str(&format!(
            "  Avg survival: {:.1}s\n",
            self.avg_survival_ms / 1000.0
        ));

        out
    }

    pub fn crash_rate(&self) -> f64 {
        if self.num_runs == 0 {
            return 0.0;
        }
        self.runs_crashed as f64 / self.num_runs as f64
    }
}
