use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use framescroll::{
    Canvas, CpuSurface, CpuSurfaceOpts, Element, FrameLoader, FsFrameSource, HeadlessPage,
    HeroController, Playback, PlayerConfig, ScrollEvaluator, Surface, Timer, TokioTimer, Viewport,
    evaluate_feature, frame_for_progress,
};

#[derive(Parser, Debug)]
#[command(name = "framescroll", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the progress-to-frame mapping as JSON (no frames needed).
    Plan(PlanArgs),
    /// Render the frame shown at one scroll progress as a PNG.
    Frame(FrameArgs),
    /// Scroll through the hero section headlessly, writing a PNG per step.
    Scrub(ScrubArgs),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Player config JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the frame files (overrides the configured base path).
    #[arg(long)]
    frames: Option<PathBuf>,

    /// Frame file extension, e.g. `.png`.
    #[arg(long)]
    ext: Option<String>,

    /// Number of frames in the sequence.
    #[arg(long)]
    total_frames: Option<usize>,
}

#[derive(Args, Debug)]
struct ViewportArgs {
    /// Viewport width in CSS pixels.
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Viewport height in CSS pixels.
    #[arg(long, default_value_t = 720.0)]
    height: f64,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    #[command(flatten)]
    cfg: ConfigArgs,

    /// Number of evenly spaced progress samples.
    #[arg(long, default_value_t = 11)]
    steps: usize,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    cfg: ConfigArgs,

    #[command(flatten)]
    viewport: ViewportArgs,

    /// Hero scroll progress in `[0, 1]`.
    #[arg(long)]
    progress: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ScrubArgs {
    #[command(flatten)]
    cfg: ConfigArgs,

    #[command(flatten)]
    viewport: ViewportArgs,

    /// Number of scroll positions to visit.
    #[arg(long, default_value_t = 5)]
    steps: usize,

    /// Hero section height, in viewports.
    #[arg(long, default_value_t = 5.0)]
    hero_screens: f64,

    /// Output directory for the PNGs.
    #[arg(long)]
    out_dir: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Frame(args) => cmd_frame(args).await,
        Command::Scrub(args) => cmd_scrub(args).await,
    }
}

/// Resolve the player config and the directory frame paths are read from.
fn load_config(args: &ConfigArgs) -> anyhow::Result<(PlayerConfig, PathBuf)> {
    let mut config = match &args.config {
        Some(path) => PlayerConfig::from_path(path)?,
        None => PlayerConfig::default(),
    };
    let mut root = args
        .config
        .as_deref()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    if let Some(frames) = &args.frames {
        config.naming.base_path = String::new();
        root = frames.clone();
    }
    if let Some(ext) = &args.ext {
        config.naming.extension = if ext.starts_with('.') {
            ext.clone()
        } else {
            format!(".{ext}")
        };
    }
    if let Some(n) = args.total_frames {
        config.total_frames = n;
    }
    config.validate()?;
    Ok((config, root))
}

fn viewport(args: &ViewportArgs) -> anyhow::Result<Viewport> {
    let viewport = Viewport::new(args.width, args.height);
    if viewport.canvas().is_empty() {
        anyhow::bail!("viewport must be at least 1x1, got {}x{}", args.width, args.height);
    }
    Ok(viewport)
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let (config, _) = load_config(&args.cfg)?;
    let rows: Vec<serde_json::Value> = ScrollEvaluator::sweep(&config, args.steps)
        .into_iter()
        .map(|s| {
            serde_json::json!({
                "progress": s.progress,
                "frame": s.frame.0,
                "path": config.frame_path(s.frame),
                "text_state": s.text_state,
                "title": config.text.states.get(s.text_state).map(|t| t.title.as_str()),
                "scroll_line_percent": s.scroll_line_percent,
                "feature": evaluate_feature(s.progress, &config.feature),
            })
        })
        .collect();
    let out = serde_json::to_string_pretty(&rows).context("serialize plan")?;
    println!("{out}");
    Ok(())
}

async fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (config, root) = load_config(&args.cfg)?;
    let viewport = viewport(&args.viewport)?;

    let mut loader = FrameLoader::new(FsFrameSource::new(root), &config);
    loader.preload_all(&TokioTimer::new()).await;

    let index = frame_for_progress(args.progress, config.total_frames);
    let mut surface = CpuSurface::new(viewport.canvas(), CpuSurfaceOpts::default());
    let mut playback = Playback::new();
    playback.arm();
    if !playback.draw(&mut surface, loader.frames(), index)? {
        anyhow::bail!("frame {} failed to load", index.ordinal());
    }
    surface.save_png(&args.out)?;

    eprintln!("wrote {} (frame {})", args.out.display(), index.ordinal());
    Ok(())
}

async fn cmd_scrub(args: ScrubArgs) -> anyhow::Result<()> {
    let (config, root) = load_config(&args.cfg)?;
    let viewport = viewport(&args.viewport)?;
    let text_delay = config.text_swap_delay();

    let mut page = HeadlessPage::with_standard_layout(viewport, args.hero_screens.max(1.0), 3.0);
    if let Some(first) = config.text.states.first() {
        page = page
            .with_text(Element::HeroTitle, &first.title)
            .with_text(Element::HeroSubtitle, &first.subtitle)
            .with_text(Element::HeroCta, &first.cta);
    }
    let surface = CpuSurface::new(Canvas::default(), CpuSurfaceOpts::default());
    let mut ctl = HeroController::new(config, FsFrameSource::new(root), surface, page)?;

    let timer = TokioTimer::new();
    let progress = ctl.preload(&timer).await;
    tracing::info!(
        resolved = progress.resolved,
        total = progress.total,
        "preload finished"
    );

    // Run the intro on a logical clock instead of waiting it out.
    let mut now = timer.now();
    while let Some(due) = ctl.next_deadline() {
        ctl.advance(due)?;
        now = due;
    }

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let steps = args.steps.max(1);
    for step in 0..steps {
        let p = if steps == 1 {
            0.0
        } else {
            step as f64 / (steps - 1) as f64
        };
        let y = ctl
            .page()
            .scroll_y_for(Element::HeroSection, p)
            .context("hero section has no layout")?;
        ctl.page_mut().scroll_to(y);

        ctl.on_scroll();
        let sample = ctl.on_animation_frame(now)?;
        now += text_delay + Duration::from_millis(1);
        ctl.advance(now)?;
        ctl.settle_prefetch().await;

        let out = args.out_dir.join(format!("scrub_{step:04}.png"));
        ctl.surface().save_png(&out)?;

        let line = serde_json::json!({
            "step": step,
            "scroll_y": y,
            "sample": sample,
            "drawn_frame": ctl.current_frame().0,
            "title": ctl.page().text(Element::HeroTitle),
            "canvas": [ctl.surface().size().width, ctl.surface().size().height],
            "png": out,
        });
        println!("{line}");
    }

    eprintln!("wrote {} frames to {}", steps, args.out_dir.display());
    Ok(())
}
