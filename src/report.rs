//! Text rendering of an energy trace.

use std::fmt::Write;

use crate::EnergyTrace;

/// One `time  energy` line per sample, under a header.
pub fn render_table(trace: &EnergyTrace) -> String {
    let mut out = String::from("Time (s)\tEnergy (J)\n----------------------------\n");
    for sample in trace.iter() {
        let _ = writeln!(out, "{:.2}\t\t{:.6}", sample.time, sample.energy);
    }
    out
}

/// Horizontal bar chart; bars are scaled against the largest sample so the
/// longest one spans `width` columns.
pub fn render_chart(trace: &EnergyTrace, width: usize) -> String {
    let mut out = String::new();
    let Some(max_energy) = trace.max_energy() else {
        return out;
    };

    for sample in trace.iter() {
        let bar_length = if max_energy > 0.0 {
            ((sample.energy / max_energy) * width as f64) as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            "{:.2}s |{} {:.6} J",
            sample.time,
            "#".repeat(bar_length),
            sample.energy
        );
    }
    out
}

pub fn render_summary(total_energy: f64) -> String {
    format!("Total energy consumed: {:.6} J", total_energy)
}
