use crate::*;

pub fn handle_reference_commands(cli: &Cli, ctx: &Ctx) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Matrix => {
            let rows: Vec<PlanView> = all_plans().map(PlanView::from).collect();
            let color = ctx.color;
            print_out(ctx.json, &rows, |v| matrix_row(lookup_plan(v.key), color))?;
            if !ctx.json {
                println!();
                println!("{}", SOURCE_NOTE);
            }
        }
        Commands::Levels => {
            let levels: Vec<LevelItem> = RiskKey::ALL
                .iter()
                .map(|k| LevelItem {
                    key: *k,
                    title: k.title(),
                    color: lookup_plan(*k).color,
                })
                .collect();
            let color = ctx.color;
            print_out(ctx.json, &levels, |l| {
                format!("{}\t{}", paint(l.key.as_str(), l.color, color), l.title)
            })?;
        }
        Commands::Config => {
            print_one(ctx.json, &ctx.config, |c| {
                vec![
                    format!("path: {}", c.path.as_deref().unwrap_or("n/a")),
                    format!("loaded: {}", c.loaded),
                    format!("general.json: {}", c.config.general.json),
                    format!("general.default_risk: {}", c.config.general.default_risk),
                    format!("display.color: {}", c.config.display.color),
                ]
            })?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}
