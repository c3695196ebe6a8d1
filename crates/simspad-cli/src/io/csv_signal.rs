// crates/simspad-cli/src/io/csv_signal.rs

use anyhow::{Context, Result};
use simspad_core::signal::time_axis;
use simspad_core::Channels;

/// A stimulus read from CSV.
/// Columns: `time, photons` (one channel) or `time, ch1, ch2` (two channels),
/// with a header row. Values are photons expected per time step.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvSignal {
    pub time: Vec<f64>,
    pub channels: Channels,
}

impl CsvSignal {
    /// Mean sample spacing of the time column; `None` with fewer than two rows.
    pub fn dt(&self) -> Option<f64> {
        let n = self.time.len();
        if n < 2 {
            return None;
        }
        Some((self.time[n - 1] - self.time[0]) / (n - 1) as f64)
    }
}

pub fn read_stimulus(path: &str) -> Result<CsvSignal> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("open stimulus csv {path}"))?;

    let mut time = Vec::new();
    let mut ch1 = Vec::new();
    let mut ch2 = Vec::new();
    let mut width = None;

    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("read {path} row {}", row + 2))?;
        let w = *width.get_or_insert(rec.len());
        if w != 2 && w != 3 {
            anyhow::bail!("{path}: expected 2 or 3 columns (time + 1 or 2 channels), got {w}");
        }

        let field = |i: usize| -> Result<f64> {
            let s = rec.get(i).unwrap_or_default();
            s.parse::<f64>()
                .with_context(|| format!("{path} row {} column {}: {s:?} is not a number", row + 2, i + 1))
        };
        time.push(field(0)?);
        ch1.push(field(1)?);
        if w == 3 {
            ch2.push(field(2)?);
        }
    }

    let channels = if width == Some(3) {
        Channels::Dual(ch1, ch2)
    } else {
        Channels::Single(ch1)
    };
    Ok(CsvSignal { time, channels })
}

/// Write a signal with a reconstructed time column (`t = i * dt`).
/// Single-channel output uses the simulator's `time, qOut` header.
pub fn write_signal(path: &str, dt: f64, channels: &Channels) -> Result<()> {
    let mut w = csv::Writer::from_path(path).with_context(|| format!("create csv {path}"))?;
    let t = time_axis(dt, channels.len());

    match channels {
        Channels::Single(q) => {
            w.write_record(["time", "qOut"])?;
            for (t, q) in t.iter().zip(q) {
                w.write_record([t.to_string(), q.to_string()])?;
            }
        }
        Channels::Dual(a, b) => {
            w.write_record(["time", "ch1", "ch2"])?;
            for ((t, a), b) in t.iter().zip(a).zip(b) {
                w.write_record([t.to_string(), a.to_string(), b.to_string()])?;
            }
        }
    }
    w.flush().with_context(|| format!("write csv {path}"))?;
    Ok(())
}
