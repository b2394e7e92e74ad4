use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use std::path::PathBuf;
use wbinfo::models::{LARGEST_CITY_SERIES, RURAL_POPULATION_SERIES, URBAN_GROWTH_SERIES};
use wbinfo::{loader, reshape, stats, storage, viz};

const DEFAULT_INPUT: &str = "world_population_data.csv";
const DEFAULT_OUTPUT: &str = "22077669.png";

#[derive(Parser, Debug)]
#[command(
    name = "wbinfo",
    version,
    about = "Render a World Bank urban & rural population infographic"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the four-chart infographic (the default when no subcommand is given).
    Render(RenderArgs),
    /// Export one series as a tidy long-form table (2015-2019).
    Melt(MeltArgs),
    /// Print grouped statistics per series and country (2015-2019).
    Stats(StatsArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// World Bank DataBank CSV export.
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// Output image (.png or .svg).
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Resolution of the output image (1-1200).
    #[arg(long, default_value_t = 300, value_parser = clap::value_parser!(u32).range(1..=1200))]
    dpi: u32,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.into(),
            output: DEFAULT_OUTPUT.into(),
            dpi: 300,
        }
    }
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct MeltArgs {
    /// Series name exactly as in the export (e.g. "Rural population").
    #[arg(short, long)]
    series: String,
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// Destination file.
    #[arg(long)]
    out: PathBuf,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

#[derive(Args, Debug)]
struct StatsArgs {
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// Series to summarize; repeatable. Defaults to the three charted series.
    #[arg(short, long)]
    series: Vec<String>,
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            // Format up to 4 decimals, then trim trailing zeros and trailing dot.
            let s = format!("{:.4}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match cli.cmd {
        None => cmd_render(RenderArgs::default()),
        Some(Command::Render(args)) => cmd_render(args),
        Some(Command::Melt(args)) => cmd_melt(args),
        Some(Command::Stats(args)) => cmd_stats(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let (wide, _transposed) = loader::load_world_bank_csv(&args.input)?;
    viz::render_infographic(&wide, &args.output, &viz::FigureOptions::with_dpi(args.dpi))?;
    Ok(())
}

fn cmd_melt(args: MeltArgs) -> Result<()> {
    let (wide, _) = loader::load_world_bank_csv(&args.input)?;
    let table = reshape::series_long_table(&wide, &args.series)?;
    let fmt = match args.format {
        Some(OutFormat::Csv) => "csv",
        Some(OutFormat::Json) => "json",
        None => args.out.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
    }
    .to_ascii_lowercase();
    match fmt.as_str() {
        "csv" => storage::save_long_csv(&table, &args.out)?,
        "json" => storage::save_long_json(&table, &args.out)?,
        other => anyhow::bail!("unsupported format: {}", other),
    }
    info!("saved {} rows to {}", table.rows.len(), args.out.display());
    Ok(())
}

fn cmd_stats(args: StatsArgs) -> Result<()> {
    let (wide, _) = loader::load_world_bank_csv(&args.input)?;
    let series: Vec<String> = if args.series.is_empty() {
        [URBAN_GROWTH_SERIES, LARGEST_CITY_SERIES, RURAL_POPULATION_SERIES]
            .iter()
            .map(|s| s.to_string())
            .collect()
    } else {
        args.series
    };
    let tables = series
        .iter()
        .map(|s| reshape::series_long_table(&wide, s))
        .collect::<Result<Vec<_>, _>>()?;
    for s in stats::grouped_summary(&tables) {
        println!(
            "{} • {}  count={} missing={}  min={} max={} mean={} median={}",
            s.key.series,
            s.key.country,
            s.count,
            s.missing,
            fmt_opt(s.min),
            fmt_opt(s.max),
            fmt_opt(s.mean),
            fmt_opt(s.median)
        );
    }
    Ok(())
}
