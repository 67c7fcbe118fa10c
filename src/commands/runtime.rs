use crate::*;
use anyhow::Context;
use std::io;

pub fn handle_runtime_commands(cli: &Cli, ctx: &Ctx) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Classify { obs } => {
            let input = observation_input(obs);
            let suggested = classify_input(&input);
            tracing::debug!(suggested = ?suggested, "classified");
            let report = ClassifyReport {
                z_input: obs.z.clone(),
                input,
                effective_status: effective_status(input.z, input.status),
                suggested,
            };
            print_one(ctx.json, report, |r| {
                vec![match r.suggested {
                    Some(k) => format!("{}\t{}", k, k.title()),
                    None => "no classification".to_string(),
                }]
            })?;
        }
        Commands::Assess { obs, risk } => {
            let input = observation_input(obs);
            let mut selection = Selection::new(ctx.config.config.general.default_risk);
            selection.set_status(input.status);
            selection.set_regression_target(input.regression_target);
            selection.set_z(input.z);
            if let Some(key) = risk {
                selection.override_with(*key);
            }
            let report = AssessReport {
                selection: selection.state(),
                plan: PlanView::from(lookup_plan(selection.active())),
            };
            let color = ctx.color;
            print_one(ctx.json, report, |r| {
                let mut lines = vec![state_line(&r.selection, color)];
                lines.extend(plan_panel(lookup_plan(r.selection.active), color));
                lines
            })?;
        }
        Commands::Plan { key } => {
            let plan = lookup_plan(*key);
            let color = ctx.color;
            print_one(ctx.json, PlanView::from(plan), |_| plan_panel(plan, color))?;
        }
        Commands::Export {
            key,
            format,
            with_matrix,
            out,
        } => {
            let content = export(lookup_plan(*key), *format, *with_matrix);
            let mut report = ExportReport {
                key: *key,
                format: format.as_str(),
                bytes: content.len(),
                path: None,
                content: None,
            };
            match out {
                Some(path) => {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        std::fs::create_dir_all(parent)
                            .with_context(|| format!("creating {}", parent.display()))?;
                    }
                    std::fs::write(path, &content)
                        .with_context(|| format!("writing export {}", path.display()))?;
                    tracing::info!(path = %path.display(), bytes = content.len(), "export written");
                    report.path = Some(path.display().to_string());
                    print_one(ctx.json, report, |r| {
                        vec![format!(
                            "wrote {} bytes to {}",
                            r.bytes,
                            r.path.as_deref().unwrap_or_default()
                        )]
                    })?;
                }
                None if ctx.json => {
                    report.content = Some(content);
                    print_one(true, report, |_| Vec::new())?;
                }
                None => print!("{}", content),
            }
        }
        Commands::Session => {
            let mut selection = Selection::new(ctx.config.config.general.default_risk);
            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();
            run_session(
                &mut selection,
                stdin.lock(),
                &mut stdout,
                SessionOptions {
                    json: ctx.json,
                    color: ctx.color,
                },
            )?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}

fn observation_input(obs: &Observations) -> ClassificationInput {
    let z = obs.z.as_deref().and_then(parse_z_score);
    if obs.z.is_some() && z.is_none() {
        tracing::warn!(z = obs.z.as_deref().unwrap_or_default(), "Z score not numeric, no classification");
    }
    if obs.regressed_to.is_some() && obs.status != CoronaryStatus::Regressed {
        tracing::warn!(status = %obs.status, "--regressed-to ignored unless --status regressed");
    }
    ClassificationInput::new(z, obs.status, obs.regressed_to)
}
