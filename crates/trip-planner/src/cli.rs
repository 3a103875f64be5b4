use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::state::PlannerState;
use std::error::Error;
use std::fs;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::info;

pub fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 { print_help(); std::process::exit(2); }
    match args[1].as_str() {
        "rank" => run_rank(&args[2..]),
        "itinerary" => run_itinerary(&args[2..]),
        "sample" => run_sample(),
        _ => { eprintln!("unknown command: {}", args[1]); print_help(); std::process::exit(2); }
    }
}

/// Flags shared by `rank` and `itinerary`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanArgs {
    pub data_path: PathBuf,
    pub config_path: Option<PathBuf>,
    pub days: Option<NonZeroUsize>,
}

pub fn parse_plan_args(args: &[String]) -> Result<PlanArgs, Box<dyn Error>> {
    let mut data_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut days: Option<NonZeroUsize> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--data"   => { i += 1; data_path = Some(PathBuf::from(require_arg(args, i, "--data")?)); }
            "--config" => { i += 1; config_path = Some(PathBuf::from(require_arg(args, i, "--config")?)); }
            "--days"   => {
                i += 1;
                let raw = require_arg(args, i, "--days")?;
                days = Some(raw.parse().map_err(|_| PlannerError::InvalidNumber {
                    field: "--days".into(),
                    value: raw.into(),
                    expected: "a positive whole number",
                })?);
            }
            other => { return Err(format!("unexpected argument: {other}").into()); }
        }
        i += 1;
    }

    let data_path = data_path.ok_or("missing --data <export.json>")?;
    Ok(PlanArgs { data_path, config_path, days })
}

/// Applies `--days` to `config` and restores `document` on top of it.
///
/// `tp_prefs` in the document wins; without it the configured default weights apply.
pub fn prepare(
    document: &str,
    mut config: PlannerConfig,
    days: Option<NonZeroUsize>,
) -> crate::error::Result<(PlannerConfig, PlannerState)> {
    if let Some(days) = days {
        config.itinerary_size = days;
    }
    let mut state = PlannerState::default();
    state.preferences = config.default_weights;
    state.apply_import(document)?;
    Ok((config, state))
}

fn load(args: &PlanArgs) -> Result<(PlannerConfig, PlannerState), Box<dyn Error>> {
    let config = match &args.config_path {
        Some(p) => PlannerConfig::load(p)?,
        None => PlannerConfig::default(),
    };
    let (config, state) = prepare(&fs::read_to_string(&args.data_path)?, config, args.days)?;
    info!(
        data = %args.data_path.display(),
        destinations = state.destinations.len(),
        "loaded planner document"
    );
    Ok((config, state))
}

fn run_rank(args: &[String]) -> Result<(), Box<dyn Error>> {
    let args = parse_plan_args(args)?;
    let (config, state) = load(&args)?;
    let items = state.destination_items();
    let ranked = config.engine().with_weights(state.preferences).rank(&items)?;
    println!("{}", serde_json::to_string_pretty(&ranked)?);
    Ok(())
}

fn run_itinerary(args: &[String]) -> Result<(), Box<dyn Error>> {
    let args = parse_plan_args(args)?;
    let (config, state) = load(&args)?;
    let itinerary = state.plan_itinerary(&config.engine())?;
    for line in itinerary.summary_lines() {
        info!("{line}");
    }
    println!("{}", serde_json::to_string_pretty(&itinerary)?);
    Ok(())
}

fn run_sample() -> Result<(), Box<dyn Error>> {
    println!("{}", PlannerState::default().to_json()?);
    Ok(())
}

fn require_arg<'a>(args: &'a [String], idx: usize, flag: &str) -> Result<&'a str, Box<dyn Error>> {
    args.get(idx).map(|s| s.as_str()).ok_or_else(|| format!("missing value for {flag}").into())
}

fn print_help() {
    eprintln!("\
trip-planner <command>

Commands:
  rank      --data <export.json> [--config <config.json>]
  itinerary --data <export.json> [--config <config.json>] [--days <n>]
  sample

Examples:
  trip-planner sample > travel-planner-data.json
  trip-planner itinerary --data travel-planner-data.json --days 2
");
}
