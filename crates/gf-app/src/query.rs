//! Query helpers over run summaries.

use gf_results::RunSummary;

/// Side-by-side rows `(label, controlled, fixed)` for two summaries.
pub fn compare_summaries(
    controlled: &RunSummary,
    fixed: &RunSummary,
) -> Vec<(&'static str, String, String)> {
    let num = |v: f64| format!("{v:.2}");
    vec![
        ("max level (m)", num(controlled.max_level_m), num(fixed.max_level_m)),
        ("min level (m)", num(controlled.min_level_m), num(fixed.min_level_m)),
        ("mean level (m)", num(controlled.mean_level_m), num(fixed.mean_level_m)),
        ("final level (m)", num(controlled.final_level_m), num(fixed.final_level_m)),
        (
            "max outflow (m3/s)",
            num(controlled.max_outflow_m3s),
            num(fixed.max_outflow_m3s),
        ),
        (
            "steps above flood",
            controlled.steps_above_flood.to_string(),
            fixed.steps_above_flood.to_string(),
        ),
        (
            "steps below drought",
            controlled.steps_below_drought.to_string(),
            fixed.steps_below_drought.to_string(),
        ),
        (
            "steps gate at min",
            controlled.steps_gate_at_min.to_string(),
            fixed.steps_gate_at_min.to_string(),
        ),
        (
            "steps gate at max",
            controlled.steps_gate_at_max.to_string(),
            fixed.steps_gate_at_max.to_string(),
        ),
    ]
}
