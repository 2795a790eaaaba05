// File: crates/demo/src/main.rs
// Summary: Demo CLI: loads the trails CSV, ranks it and writes the chart as SVG / HTML / PNG.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trail_chart_core::{
    load_trails, rank_by_highpoint, theme, ChartConfig, HostDocument, LoaderOptions, TrailChart,
    VerticalRange,
};
use trail_chart_render_skia::SkiaRenderer;

#[derive(Parser, Debug)]
#[command(name = "trails-demo", version, about = "Washington trails highpoint chart")]
struct Cli {
    /// Verbose logging (debug level unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the chart and write it to one or more outputs
    Render(RenderArgs),
    /// Print the ranked table
    Rank(InputArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// CSV file, relative to --base-dir
    #[arg(default_value = "hike_trails.csv")]
    input: String,

    /// Directory the input path is resolved against
    #[arg(long, default_value = ".")]
    base_dir: PathBuf,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,

    /// TOML chart configuration
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    svg: Option<PathBuf>,

    /// Standalone page with the hover tooltip wired up
    #[arg(long)]
    html: Option<PathBuf>,

    #[arg(long)]
    png: Option<PathBuf>,

    /// Theme preset name (light, dark)
    #[arg(long)]
    theme: Option<String>,

    /// Map the vertical axis onto the bounded height instead of the bounded width
    #[arg(long)]
    correct_vertical_range: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Render(args) => render(args),
        Command::Rank(args) => rank(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn render(args: RenderArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(p) => ChartConfig::load(p).with_context(|| format!("failed to read config '{}'", p.display()))?,
        None => ChartConfig::default(),
    };
    if let Some(name) = &args.theme {
        if !theme::find(name).name.eq_ignore_ascii_case(name) {
            warn!(theme = %name, "unknown theme, using light");
        }
        config.theme = name.clone();
    }
    if args.correct_vertical_range {
        config.vertical_range = VerticalRange::BoundedHeight;
    }

    let path = resolve_path(&args.input.base_dir, &args.input.input);
    info!(input = %path.display(), "loading trails");

    let chart = match TrailChart::from_csv(&path, &LoaderOptions::default(), config) {
        Ok(chart) => chart,
        Err(err) => {
            let message = format!("Could not load {}: {err}", path.display());
            if let Some(out) = &args.html {
                let page = HostDocument::default().error_page(&message)?;
                write_text(out, &page)?;
                warn!(output = %out.display(), "wrote error page");
            }
            return Err(err).with_context(|| format!("failed to build chart from '{}'", path.display()));
        }
    };
    info!(records = chart.records().len(), "chart built");

    let no_outputs = args.svg.is_none() && args.html.is_none() && args.png.is_none();
    let svg_out = args.svg.clone().or_else(|| no_outputs.then(|| out_name("trails.svg")));

    if let Some(out) = &svg_out {
        write_text(out, &chart.to_svg())?;
        info!(output = %out.display(), "wrote svg");
    }
    if let Some(out) = &args.html {
        let page = HostDocument::default().mount(&chart).context("failed to mount chart into host page")?;
        write_text(out, &page)?;
        info!(output = %out.display(), "wrote html");
    }
    if let Some(out) = &args.png {
        SkiaRenderer::new(chart.theme())
            .render_to_png(chart.scene(), out)
            .with_context(|| format!("failed to rasterize '{}'", out.display()))?;
        info!(output = %out.display(), "wrote png");
    }
    Ok(())
}

fn rank(args: InputArgs) -> Result<()> {
    let path = resolve_path(&args.base_dir, &args.input);
    let records = load_trails(&path, &LoaderOptions::default())
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    let ranked = rank_by_highpoint(records);

    println!("{:>3}  {:<32} {:>10} {:>6}", "key", "region", "highpoint", "rating");
    for r in &ranked {
        println!("{:>3}  {:<32} {:>10.1} {:>6.2}", r.key, r.region, r.mean_highpoint_m, r.mean_rating);
    }
    Ok(())
}

/// Resolve `input` against `base`; absolute inputs are used as-is.
fn resolve_path(base: &Path, input: &str) -> PathBuf {
    let p = Path::new(input);
    if p.is_absolute() { p.to_path_buf() } else { base.join(p) }
}

/// Default output location: target/out/<file>
fn out_name(file: &str) -> PathBuf {
    PathBuf::from("target/out").join(file)
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_input_joins_base_dir() {
        assert_eq!(resolve_path(Path::new("site"), "hike_trails.csv"), PathBuf::from("site/hike_trails.csv"));
    }

    #[test]
    fn default_output_under_target() {
        assert_eq!(out_name("trails.svg"), PathBuf::from("target/out/trails.svg"));
    }

    #[test]
    fn cli_parses_render_flags() {
        let cli = Cli::parse_from(["trails-demo", "-v", "render", "data.csv", "--png", "out.png", "--correct-vertical-range"]);
        assert!(cli.verbose);
        match cli.command {
            Command::Render(args) => {
                assert_eq!(args.input.input, "data.csv");
                assert_eq!(args.png, Some(PathBuf::from("out.png")));
                assert!(args.correct_vertical_range);
            }
            Command::Rank(_) => panic!("expected render"),
        }
    }
}
