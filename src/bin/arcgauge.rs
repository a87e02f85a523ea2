use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "arcgauge", version)]
struct Cli {
    /// Log filter, e.g. `debug` or `arcgauge=trace`. Overrides `RUST_LOG`.
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a gauge as a PNG.
    Render(RenderArgs),
    /// Print the assessment category a score falls in.
    Classify(ClassifyArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Gauge spec JSON (`{"score": .., "assessment": ..}`).
    #[arg(long = "in", conflicts_with_all = ["score", "assessment"], required_unless_present = "score")]
    in_path: Option<PathBuf>,

    /// Score in points, as decimal text.
    #[arg(long, allow_hyphen_values = true, requires = "assessment")]
    score: Option<String>,

    /// excellent, good, normal or poor.
    #[arg(long, requires = "score")]
    assessment: Option<String>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Style JSON; omitted fields keep their defaults.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Rasterize layers in parallel.
    #[arg(long)]
    parallel: bool,
}

#[derive(Parser, Debug)]
struct ClassifyArgs {
    /// Score in points, as decimal text.
    #[arg(long, allow_hyphen_values = true)]
    score: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref())?;
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Classify(args) => cmd_classify(args),
    }
}

fn init_tracing(directive: Option<&str>) -> anyhow::Result<()> {
    let filter = match directive {
        Some(d) => EnvFilter::try_new(d).with_context(|| format!("parse log filter '{d}'"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    let r = BufReader::new(f);
    serde_json::from_reader(r).with_context(|| format!("parse {what} JSON '{}'", path.display()))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let spec = match (args.in_path, args.score, args.assessment) {
        (Some(path), _, _) => read_json::<arcgauge::GaugeSpec>(&path, "gauge spec")?,
        (None, Some(score), Some(assessment)) => arcgauge::GaugeSpec::new(score, assessment),
        _ => anyhow::bail!("either --in or both --score and --assessment are required"),
    };

    let mut style = match &args.style {
        Some(path) => read_json::<arcgauge::GaugeStyle>(path, "style")?,
        None => arcgauge::GaugeStyle::default(),
    };
    if args.parallel {
        style.parallel_layers = true;
    }

    let renderer = arcgauge::GaugeRenderer::new(style)?;
    renderer.render_to(&spec, &mut arcgauge::PngFileSink::new(), &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_classify(args: ClassifyArgs) -> anyhow::Result<()> {
    let score = arcgauge::ScoreInput::from(args.score).parse()?;
    println!("{}", arcgauge::Assessment::from_score(score));
    Ok(())
}
