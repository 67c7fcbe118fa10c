use crate::domain::constants::{DISCLAIMER, EXPORT_TITLE, SOURCE_NOTE};
use crate::domain::models::{DisplayColor, Plan, SelectionState};
use crate::services::plans::{all_plans, lookup_plan};
use crate::services::zscore::format_z_score;
use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Text,
    Markdown,
}

impl ExportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Text => "text",
            ExportFormat::Markdown => "markdown",
        }
    }
}

pub fn paint(text: &str, color: DisplayColor, enabled: bool) -> String {
    if enabled {
        text.style(color.style()).to_string()
    } else {
        text.to_string()
    }
}

/// Field-labeled plain text, the clipboard layout.
pub fn plan_text(plan: &Plan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", EXPORT_TITLE, plan.label);
    out.push('\n');
    let _ = writeln!(out, "Z score: {}", plan.z_score);
    let _ = writeln!(out, "Description: {}", plan.description);
    out.push('\n');
    let _ = writeln!(out, "Follow-up: {}", plan.follow_up);
    let _ = writeln!(out, "Stress testing: {}", plan.stress_test);
    let _ = writeln!(out, "Advanced imaging: {}", plan.advanced_imaging);
    let _ = writeln!(out, "Antiplatelet: {}", plan.antiplatelet);
    let _ = writeln!(out, "Anticoagulation: {}", plan.anticoagulation());
    let _ = writeln!(out, "Activity: {}", plan.activity);
    if !plan.notes.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "Notes: {}", plan.notes.join("; "));
    }
    out
}

/// Plan panel lines for terminal display.
pub fn plan_panel(plan: &Plan, color: bool) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Management plan – {}",
            paint(plan.label, plan.color, color)
        ),
        format!("Z score: {} · {}", plan.z_score, plan.description),
        format!("Follow-up: {}", plan.follow_up),
        format!("Stress testing: {}", plan.stress_test),
        format!("Advanced coronary imaging: {}", plan.advanced_imaging),
        format!("Antiplatelet therapy: {}", plan.antiplatelet),
        format!("Anticoagulation: {}", plan.anticoagulation()),
        format!("Activity counseling: {}", plan.activity),
    ];
    if !plan.notes.is_empty() {
        lines.push(format!("Notes: {}", plan.notes.join(" · ")));
    }
    lines
}

pub fn matrix_row(plan: &Plan, color: bool) -> String {
    [
        paint(plan.key.as_str(), plan.color, color),
        plan.z_score.to_string(),
        plan.description.to_string(),
        plan.follow_up.to_string(),
        plan.stress_test.to_string(),
        plan.advanced_imaging.to_string(),
        plan.antiplatelet.to_string(),
        plan.anticoagulation().to_string(),
        plan.activity.to_string(),
    ]
    .join("\t")
}

/// One-line summary of inputs, suggestion and active level.
pub fn state_line(state: &SelectionState, color: bool) -> String {
    let z = state
        .input
        .z
        .map(format_z_score)
        .unwrap_or_else(|| "—".to_string());
    let mut status = state.input.status.to_string();
    if let Some(t) = state.input.regression_target {
        status.push_str(&format!(" → {}", t));
    }
    let suggested = state
        .suggested
        .map(|k| k.to_string())
        .unwrap_or_else(|| "none".to_string());
    let active = paint(
        state.active.as_str(),
        lookup_plan(state.active).color,
        color,
    );
    let marker = if state.overridden { " (manual)" } else { "" };
    format!(
        "z: {}\tstatus: {}\tsuggested: {}\tactive: {}{}",
        z, status, suggested, active, marker
    )
}

fn md_cell(s: &str) -> String {
    s.replace('|', "\\|")
}

pub fn plan_markdown(plan: &Plan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {} ({})", EXPORT_TITLE, plan.label);
    out.push('\n');
    let _ = writeln!(out, "**Z score:** {} · {}", plan.z_score, plan.description);
    out.push('\n');
    let _ = writeln!(out, "- **Follow-up:** {}", plan.follow_up);
    let _ = writeln!(out, "- **Stress testing:** {}", plan.stress_test);
    let _ = writeln!(out, "- **Advanced imaging:** {}", plan.advanced_imaging);
    let _ = writeln!(out, "- **Antiplatelet:** {}", plan.antiplatelet);
    let _ = writeln!(out, "- **Anticoagulation:** {}", plan.anticoagulation());
    let _ = writeln!(out, "- **Activity:** {}", plan.activity);
    if !plan.notes.is_empty() {
        let _ = writeln!(out, "- **Notes:** {}", plan.notes.join("; "));
    }
    out
}

pub fn matrix_markdown() -> String {
    let mut out = String::new();
    out.push_str("| Risk | Z score / status | Follow-up | Stress test | Advanced imaging | Antiplatelet | Anticoagulation | Activity |\n");
    out.push_str("|---|---|---|---|---|---|---|---|\n");
    for p in all_plans() {
        let _ = writeln!(
            out,
            "| {} | {} ({}) | {} | {} | {} | {} | {} | {} |",
            p.key,
            md_cell(p.z_score),
            md_cell(p.description),
            md_cell(p.follow_up),
            md_cell(p.stress_test),
            md_cell(p.advanced_imaging),
            md_cell(p.antiplatelet),
            md_cell(p.anticoagulation()),
            md_cell(p.activity),
        );
    }
    out
}

pub fn export(plan: &Plan, format: ExportFormat, with_matrix: bool) -> String {
    match format {
        ExportFormat::Text => {
            let mut out = plan_text(plan);
            if with_matrix {
                out.push('\n');
                for p in all_plans() {
                    out.push_str(&matrix_row(p, false));
                    out.push('\n');
                }
                out.push('\n');
                let _ = writeln!(out, "{}", SOURCE_NOTE);
                let _ = writeln!(out, "{}", DISCLAIMER);
            }
            out
        }
        ExportFormat::Markdown => {
            let mut out = plan_markdown(plan);
            if with_matrix {
                out.push_str("\n## Color-coded matrix\n\n");
                out.push_str(&matrix_markdown());
                out.push('\n');
                let _ = writeln!(out, "_{}_", SOURCE_NOTE);
                out.push('\n');
                let _ = writeln!(out, "_{}_", DISCLAIMER);
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        export, matrix_markdown, matrix_row, md_cell, paint, plan_panel, plan_text, state_line,
        ExportFormat,
    };
    use crate::domain::models::{DisplayColor, RiskKey};
    use crate::services::plans::lookup_plan;
    use crate::services::selection::Selection;

    #[test]
    fn plan_text_uses_clipboard_layout() {
        let text = plan_text(lookup_plan(RiskKey::SmallCurrent));
        let expected = "Kawasaki Disease Plan (Risk 3.1)\n\
\n\
Z score: 2.5 – <5\n\
Description: Small aneurysm – current/persistent\n\
\n\
Follow-up: Within 1 wk (closer if enlarging) → 6 wk → 6 mo → 12 mo → yearly\n\
Stress testing: Assess every 3–5 yr\n\
Advanced imaging: Coronary CTA at 1 yr as baseline; consider q3–5 yr\n\
Antiplatelet: Low-dose aspirin\n\
Anticoagulation: Not indicated\n\
Activity: Promotion counseling at every visit\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn plan_text_appends_notes() {
        let text = plan_text(lookup_plan(RiskKey::GiantCurrent));
        assert!(text.contains("Anticoagulation: Warfarin, LMWH, or DOAC\n"));
        assert!(text.ends_with("\nNotes: β-blockers and statins may be considered\n"));
    }

    #[test]
    fn panel_and_row_shapes() {
        let plan = lookup_plan(RiskKey::MediumToSmall);
        let panel = plan_panel(plan, false);
        assert_eq!(panel[0], "Management plan – Risk 4.2");
        assert_eq!(panel.len(), 9);
        assert_eq!(matrix_row(plan, false).split('\t').count(), 9);
    }

    #[test]
    fn paint_only_when_enabled() {
        assert_eq!(paint("3.1", DisplayColor::Yellow, false), "3.1");
        assert_eq!(
            paint("3.1", DisplayColor::Yellow, true),
            "\x1b[33m3.1\x1b[0m"
        );
        assert_eq!(
            paint("4.1", DisplayColor::Orange, true),
            "\x1b[38;5;208m4.1\x1b[0m"
        );
        assert_eq!(paint("1", DisplayColor::Emerald, true), "\x1b[92m1\x1b[0m");
    }

    #[test]
    fn markdown_cells_escape_pipes() {
        assert_eq!(md_cell("aspirin | clopidogrel"), "aspirin \\| clopidogrel");
        assert_eq!(md_cell("no pipes"), "no pipes");
    }

    #[test]
    fn state_line_spells_out_infinite_z() {
        let mut sel = Selection::new(RiskKey::NoInvolvement);
        sel.set_z(Some(f64::NEG_INFINITY));
        assert!(state_line(&sel.state(), false).starts_with("z: -Infinity\tstatus: none\t"));
    }

    #[test]
    fn markdown_matrix_has_header_and_eleven_rows() {
        let md = matrix_markdown();
        assert_eq!(md.lines().count(), 13);
        assert!(md.lines().nth(2).unwrap().starts_with("| 1 | < 2 ("));
    }

    #[test]
    fn export_with_matrix_carries_footer() {
        let plan = lookup_plan(RiskKey::DilationOnly);
        let md = export(plan, ExportFormat::Markdown, true);
        assert!(md.starts_with("# Kawasaki Disease Plan (Risk 2)\n"));
        assert!(md.contains("## Color-coded matrix"));
        assert!(md.contains("does not replace guidelines"));

        let plain = export(plan, ExportFormat::Text, false);
        assert_eq!(plain, plan_text(plan));
    }
}
