use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use jornada_engine::calculation::{calculate_shift, project_month, summarize_week};
use jornada_engine::config::{CltRules, ConfigLoader};
use jornada_engine::logging::init_tracing;
use jornada_engine::models::{Regime, ShiftInput, parse_clock_time};
use jornada_engine::report::{format_clock, render_month, render_shift, render_week_table};

#[derive(Parser)]
#[command(name = "jornada")]
#[command(about = "Clock-out calculator for CLT workdays with the reduced night hour", long_about = None)]
struct Cli {
    /// Clock-in time (HH:MM or HH:MM:SS)
    #[arg(long)]
    clock_in: String,
    /// Working days per week: 5 (5x2) or 6 (6x1)
    #[arg(long, default_value = "5")]
    regime: String,
    /// Break length in minutes
    #[arg(long, default_value_t = 60)]
    break_minutes: u32,
    /// Work target for a single day, overriding the regime's week plan
    #[arg(long)]
    target_minutes: Option<u32>,
    /// Directory holding rules.yaml and regimes.yaml
    #[arg(long, env = "JORNADA_CONFIG")]
    config: Option<PathBuf>,
    /// Print results as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(Some(&cli.log_level))?;

    run(&cli).inspect_err(|err| tracing::debug!(error = %err, "Calculation rejected"))
}

fn load_rules(cli: &Cli) -> anyhow::Result<CltRules> {
    let loader = match &cli.config {
        Some(dir) => ConfigLoader::load(dir)
            .with_context(|| format!("loading rules from {}", dir.display()))?,
        None => ConfigLoader::from_rules(CltRules::default())?,
    };
    Ok(loader.into_rules())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let rules = load_rules(cli)?;
    let regime: Regime = cli.regime.parse()?;

    if let Some(target) = cli.target_minutes {
        let input = ShiftInput::parse(&cli.clock_in, target, cli.break_minutes)?;
        let result = calculate_shift(&input, &rules)?;
        tracing::info!(
            clock_in = %input.clock_in,
            clock_out = %result.clock_out_rounded(),
            target_work_minutes = target,
            "Workday calculated"
        );

        if cli.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            print!("{}", render_shift(&result));
        }
        return Ok(());
    }

    let clock_in = parse_clock_time(&cli.clock_in)?;
    let weekly = summarize_week(clock_in, cli.break_minutes, regime, &rules)?;
    let monthly = project_month(&weekly, &rules);
    tracing::info!(
        regime = %regime,
        clock_in = %clock_in,
        total_target_minutes = weekly.total_target_minutes,
        "Week calculated"
    );

    if cli.json {
        let output = serde_json::json!({
            "weekly": weekly,
            "monthly": monthly,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if let Some(first) = weekly.rows.first() {
        let next_day = if first.result.ends_next_day() { " (+1)" } else { "" };
        println!(
            "Clock-out: {}{}",
            format_clock(first.result.clock_out),
            next_day
        );
        println!();
    }
    print!("{}", render_week_table(&weekly));
    println!();
    print!("{}", render_month(&monthly));
    Ok(())
}
