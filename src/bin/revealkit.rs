use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use revealkit::{
    CpuSurface, Layers, PngSequenceSink, RevealConfig, RevealController, SweepOpts, Viewport,
};

#[derive(Parser, Debug)]
#[command(name = "revealkit", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the triangle grid layout for a viewport as JSON.
    Layout(LayoutArgs),
    /// Render one settled frame at a scroll progress as a PNG.
    Frame(FrameArgs),
    /// Render a 0..1 scroll sweep as a PNG sequence.
    Scroll(ScrollArgs),
    /// Post the contact form and print the resulting message.
    #[cfg(feature = "http")]
    Submit(SubmitArgs),
}

#[derive(Args, Debug)]
struct ViewArgs {
    /// Viewport width in CSS pixels.
    #[arg(long, default_value_t = 1440.0)]
    width: f64,

    /// Viewport height in CSS pixels.
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Device pixel ratio.
    #[arg(long, default_value_t = 1.0)]
    dpr: f64,

    /// Seed for the reveal order shuffle.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Optional config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    #[command(flatten)]
    view: ViewArgs,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// Scroll progress in [0, 1].
    #[arg(long)]
    progress: f64,

    /// Maximum animation ticks to run before capturing.
    #[arg(long, default_value_t = 200)]
    settle: usize,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ScrollArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// Number of frames in the sweep.
    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[cfg(feature = "http")]
#[derive(Parser, Debug)]
struct SubmitArgs {
    /// Form field as `name=value`; repeatable.
    #[arg(long = "field", value_parser = parse_field)]
    fields: Vec<(String, String)>,

    /// Override the configured endpoint.
    #[arg(long)]
    endpoint: Option<String>,

    /// Optional config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(serde::Serialize)]
struct LayoutReport {
    width: f64,
    height: f64,
    device_pixel_ratio: f64,
    cell_size: f64,
    rows: u32,
    cols: u32,
    cells: usize,
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Scroll(args) => cmd_scroll(args),
        #[cfg(feature = "http")]
        Command::Submit(args) => cmd_submit(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<RevealConfig> {
    let cfg = match path {
        Some(p) => RevealConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => RevealConfig::default(),
    };
    cfg.validate().context("validate config")?;
    Ok(cfg)
}

fn build_controller(
    view: &ViewArgs,
) -> anyhow::Result<(RevealConfig, RevealController<CpuSurface>)> {
    let cfg = load_config(view.config.as_deref())?;
    let viewport = Viewport::new(view.width, view.height)
        .context("viewport")?
        .with_device_pixel_ratio(view.dpr);
    let layers = Layers::cpu(&viewport).context("allocate layers")?;
    let controller = RevealController::seeded(cfg.grid, cfg.reveal, viewport, layers, view.seed)
        .context("build reveal controller")?;
    Ok((cfg, controller))
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let (cfg, controller) = build_controller(&args.view)?;
    let dims = controller
        .store()
        .dims()
        .context("grid has no dimensions")?;
    let report = LayoutReport {
        width: args.view.width,
        height: args.view.height,
        device_pixel_ratio: controller.viewport().device_pixel_ratio,
        cell_size: cfg.grid.cell_size,
        rows: dims.rows,
        cols: dims.cols,
        cells: controller.store().len(),
        seed: args.view.seed,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (_, mut controller) = build_controller(&args.view)?;
    let opts = SweepOpts::default();
    let frame = revealkit::render_settled(
        &mut controller,
        args.progress,
        args.settle,
        opts.background,
    )
    .with_context(|| format!("render frame at progress {}", args.progress))?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    revealkit::write_png(&args.out, &frame)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    Ok(())
}

fn cmd_scroll(args: ScrollArgs) -> anyhow::Result<()> {
    let (_, mut controller) = build_controller(&args.view)?;
    let mut sink = PngSequenceSink::new(&args.out_dir);
    let opts = SweepOpts {
        frames: args.frames,
        ..SweepOpts::default()
    };
    let written = revealkit::render_sweep(&mut controller, opts, &mut sink)
        .with_context(|| format!("render sweep into '{}'", args.out_dir.display()))?;
    eprintln!("wrote {written} frames to {}", args.out_dir.display());
    Ok(())
}

#[cfg(feature = "http")]
fn cmd_submit(args: SubmitArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(args.config.as_deref())?;
    if let Some(endpoint) = args.endpoint {
        cfg.form.endpoint = endpoint;
    }
    let mut form = revealkit::ContactForm::new(cfg.form).context("form config")?;
    for (name, value) in args.fields {
        form.set_field(name, value);
    }
    let report = form.submit(&mut revealkit::IsahcTransport::default());
    println!("{}", report.message);
    Ok(())
}

#[cfg(feature = "http")]
fn parse_field(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{s}'"))
}
