//! Line-oriented interactive shell over a [`Selection`].
//!
//! Reads one command per line, applies it, and writes the result. Bad lines
//! are reported and the session continues; end of input ends it.

use crate::domain::models::{
    CoronaryStatus, JsonOut, PlanView, RegressionTarget, RiskKey, SelectionState,
};
use crate::services::plans::{all_plans, lookup_plan};
use crate::services::render::{matrix_row, plan_panel, plan_text, state_line};
use crate::services::selection::Selection;
use serde::Serialize;
use std::io::{BufRead, Write};

pub const SESSION_HELP: &str = "\
commands:
  z <value>          set the maximum Z score (empty clears it)
  status <s>         none | current | regressed
  target <t>         normal | dilation | small | medium | none
  select <key>       manually choose the active risk level
  show               print the active plan
  copy               print the active plan as plain text
  matrix             print all plans
  state              print inputs, suggestion and active level
  help               this text
  quit               end the session";

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    pub json: bool,
    pub color: bool,
}

enum Step {
    Continue,
    Quit,
}

pub fn run_session<R: BufRead, W: Write>(
    selection: &mut Selection,
    input: R,
    out: &mut W,
    opts: SessionOptions,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match handle_line(selection, trimmed, out, opts) {
            Ok(Step::Continue) => {}
            Ok(Step::Quit) => break,
            Err(e) => {
                tracing::warn!(line = trimmed, error = %e, "session command failed");
                if opts.json {
                    emit_json(out, false, e.to_string())?;
                } else {
                    writeln!(out, "error: {}", e)?;
                }
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn handle_line<W: Write>(
    selection: &mut Selection,
    line: &str,
    out: &mut W,
    opts: SessionOptions,
) -> anyhow::Result<Step> {
    let (cmd, arg) = match line.split_once(char::is_whitespace) {
        Some((c, rest)) => (c, rest.trim()),
        None => (line, ""),
    };

    match cmd.to_ascii_lowercase().as_str() {
        "z" => {
            selection.set_z_text(arg);
            write_state(out, &selection.state(), opts)?;
        }
        "status" => {
            let status: CoronaryStatus = arg.parse()?;
            selection.set_status(status);
            write_state(out, &selection.state(), opts)?;
        }
        "target" => {
            let target = match arg {
                "" | "none" => None,
                t => Some(t.parse::<RegressionTarget>()?),
            };
            if target.is_some() && selection.input().status != CoronaryStatus::Regressed {
                tracing::warn!(
                    status = %selection.input().status,
                    "regression target ignored unless status is regressed"
                );
            }
            selection.set_regression_target(target);
            write_state(out, &selection.state(), opts)?;
        }
        "select" | "risk" => {
            let key: RiskKey = arg.parse()?;
            selection.override_with(key);
            write_state(out, &selection.state(), opts)?;
        }
        "show" => {
            let plan = lookup_plan(selection.active());
            if opts.json {
                emit_json(out, true, PlanView::from(plan))?;
            } else {
                for l in plan_panel(plan, opts.color) {
                    writeln!(out, "{}", l)?;
                }
            }
        }
        "copy" | "export" => {
            let text = plan_text(lookup_plan(selection.active()));
            if opts.json {
                emit_json(out, true, text)?;
            } else {
                write!(out, "{}", text)?;
            }
        }
        "matrix" => {
            if opts.json {
                let rows: Vec<PlanView> = all_plans().map(PlanView::from).collect();
                emit_json(out, true, rows)?;
            } else {
                for p in all_plans() {
                    writeln!(out, "{}", matrix_row(p, opts.color))?;
                }
            }
        }
        "state" => write_state(out, &selection.state(), opts)?,
        "help" | "?" => writeln!(out, "{}", SESSION_HELP)?,
        "quit" | "exit" | "q" => return Ok(Step::Quit),
        other => anyhow::bail!("unknown command: {} (try help)", other),
    }
    Ok(Step::Continue)
}

fn emit_json<W: Write, T: Serialize>(out: &mut W, ok: bool, data: T) -> anyhow::Result<()> {
    writeln!(out, "{}", serde_json::to_string(&JsonOut { ok, data })?)?;
    Ok(())
}

fn write_state<W: Write>(
    out: &mut W,
    state: &SelectionState,
    opts: SessionOptions,
) -> anyhow::Result<()> {
    if opts.json {
        return emit_json(out, true, state);
    }
    writeln!(out, "{}", state_line(state, opts.color))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{run_session, SessionOptions};
    use crate::domain::models::RiskKey;
    use crate::services::selection::Selection;

    fn run(script: &str, opts: SessionOptions) -> (Selection, String) {
        let mut sel = Selection::new(RiskKey::NoInvolvement);
        let mut out = Vec::new();
        run_session(&mut sel, script.as_bytes(), &mut out, opts).unwrap();
        (sel, String::from_utf8(out).unwrap())
    }

    #[test]
    fn input_changes_report_suggestion_and_active() {
        let (sel, out) = run("z 12\nstatus regressed\ntarget small\n", SessionOptions::default());
        assert_eq!(sel.active(), RiskKey::GiantToSmall);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "z: 12\tstatus: none\tsuggested: 5.1\tactive: 5.1"
        );
        assert_eq!(
            lines[2],
            "z: 12\tstatus: regressed → small\tsuggested: 5.3\tactive: 5.3"
        );
    }

    #[test]
    fn manual_selection_is_marked_and_survives_blank_z() {
        let (sel, out) = run("z 3\nselect 4.1\nz\n", SessionOptions::default());
        assert_eq!(sel.active(), RiskKey::MediumCurrent);
        assert!(out
            .lines()
            .last()
            .unwrap()
            .ends_with("suggested: none\tactive: 4.1 (manual)"));
    }

    #[test]
    fn bad_lines_do_not_end_the_session() {
        let (sel, out) = run(
            "status sideways\ntarget small\nfrobnicate\nz 7\nquit\nz 1\n",
            SessionOptions::default(),
        );
        assert_eq!(sel.active(), RiskKey::MediumCurrent);
        assert_eq!(out.matches("error: ").count(), 2);
        assert!(out.contains("unknown coronary status: sideways"));
    }

    #[test]
    fn target_without_regressed_status_is_dropped() {
        let (sel, out) = run("z 7\ntarget small\n", SessionOptions::default());
        assert_eq!(sel.input().regression_target, None);
        assert_eq!(sel.active(), RiskKey::MediumCurrent);
        assert!(!out.contains("error: "));
        assert_eq!(
            out.lines().last().unwrap(),
            "z: 7\tstatus: none\tsuggested: 4.1\tactive: 4.1"
        );
    }

    #[test]
    fn infinite_z_is_echoed_as_typed() {
        let (sel, out) = run("z Infinity\n", SessionOptions::default());
        assert_eq!(sel.active(), RiskKey::GiantCurrent);
        assert!(out.starts_with("z: Infinity\t"));
    }

    #[test]
    fn json_mode_emits_one_envelope_per_line() {
        let (_, out) = run(
            "z 2.2\nshow\nbogus\n",
            SessionOptions {
                json: true,
                color: false,
            },
        );
        let values: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(values.len(), 3);
        assert_eq!(values[0]["data"]["suggested"], "2");
        assert_eq!(values[1]["data"]["key"], "2");
        assert_eq!(values[2]["ok"], false);
    }

    #[test]
    fn copy_prints_plain_text_export() {
        let (_, out) = run("select 5.2\ncopy\n", SessionOptions::default());
        assert!(out.contains("Kawasaki Disease Plan (Risk 5.2)\n"));
        assert!(out.contains("Notes: β-blockers and statins may be considered"));
    }
}
