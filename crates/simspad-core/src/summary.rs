// crates/simspad-core/src/summary.rs

/// Aggregate figures for a response series, as reported after a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    pub time_steps: usize,
    pub dt: f64,
    pub simulated_time: f64,
    /// Sum of all per-step charge values (C).
    pub total_charge: f64,
    /// Mean current drawn over the run (A): total charge / simulated time.
    pub bias_current: f64,
}

impl RunSummary {
    pub fn new(dt: f64, response: &[f64]) -> Self {
        let time_steps = response.len();
        let simulated_time = dt * time_steps as f64;
        let total_charge: f64 = response.iter().sum();
        let bias_current = if simulated_time > 0.0 {
            total_charge / simulated_time
        } else {
            0.0
        };
        Self {
            time_steps,
            dt,
            simulated_time,
            total_charge,
            bias_current,
        }
    }
}

const PREFIXES: [&str; 9] = ["f", "p", "n", "µ", "m", "", "k", "M", "G"];

/// Scale `x` to engineering notation: returns the SI prefix and the scaled value.
/// Values outside femto..giga, zero and non-finite values are returned unscaled.
pub fn eng_notation(x: f64) -> (&'static str, f64) {
    if x == 0.0 || !x.is_finite() {
        return ("", x);
    }
    let exp3 = (x.abs().log10() / 3.0).floor() as i32;
    let idx = exp3 + 5;
    if !(0..PREFIXES.len() as i32).contains(&idx) {
        return ("", x);
    }
    (PREFIXES[idx as usize], x / 10f64.powi(exp3 * 3))
}

/// `eng_notation` rendered as e.g. `"30.8000 ns"`.
pub fn format_eng(x: f64, unit: &str) -> String {
    let (prefix, v) = eng_notation(x);
    format!("{v:.4} {prefix}{unit}")
}
