use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use scrollytell::{
    DerivedVisualState, ListenerId, NarrativeConfig, SceneFrame, ScrollAdapter, ScrollSignal,
    ScrollStateCalculator, SignalHost, SignalInbox, content::QuoteContent,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scrollytell", version)]
struct Cli {
    /// Narrative config JSON (defaults are used when omitted).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit a debug trace event for every applied frame.
    #[arg(long, global = true)]
    trace: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the derived visual state for one scroll position.
    State(PointArgs),
    /// Print the presentation frame (layer transforms, quote words) for one scroll position.
    Scene(PointArgs),
    /// Replay a scroll sweep through the frame adapter, one JSON line per applied frame.
    Sweep(SweepArgs),
    /// Validate a config file.
    CheckConfig(CheckConfigArgs),
}

#[derive(Parser, Debug)]
struct PointArgs {
    /// Scroll offset in pixels.
    #[arg(long, allow_negative_numbers = true)]
    scroll: f64,

    /// Viewport height in pixels.
    #[arg(long)]
    viewport: f64,

    /// Pretty-print JSON.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Viewport height in pixels.
    #[arg(long)]
    viewport: f64,

    /// First scroll offset.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    from: f64,

    /// Last scroll offset (inclusive).
    #[arg(long)]
    to: f64,

    /// Distance between consecutive scroll events.
    #[arg(long, default_value_t = 100.0)]
    step: f64,

    /// Scroll events delivered per display refresh; only the latest one is computed.
    #[arg(long, default_value_t = 1)]
    events_per_frame: u32,

    /// Upper bound on the number of scroll events a sweep may replay.
    #[arg(long, default_value_t = 1_000_000)]
    max_events: u64,
}

#[derive(Parser, Debug)]
struct CheckConfigArgs {
    /// Config JSON to validate.
    path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.trace);

    let mut config = load_config(cli.config.as_deref())?;
    if cli.trace {
        config.debug_trace = true;
    }

    match cli.cmd {
        Command::State(args) => cmd_state(config, args),
        Command::Scene(args) => cmd_scene(config, args),
        Command::Sweep(args) => cmd_sweep(config, args),
        Command::CheckConfig(args) => cmd_check_config(args),
    }
}

fn init_tracing(trace: bool) {
    let default = if trace { "scrollytell=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<NarrativeConfig> {
    match path {
        Some(p) => NarrativeConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(NarrativeConfig::default()),
    }
}

fn write_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn compute_point(config: NarrativeConfig, args: &PointArgs) -> anyhow::Result<DerivedVisualState> {
    let calc = ScrollStateCalculator::new(config)?;
    Ok(calc.compute(ScrollSignal::new(args.scroll, args.viewport)))
}

fn cmd_state(config: NarrativeConfig, args: PointArgs) -> anyhow::Result<()> {
    let state = compute_point(config, &args)?;
    write_json(&state, args.pretty)
}

fn cmd_scene(config: NarrativeConfig, args: PointArgs) -> anyhow::Result<()> {
    let state = compute_point(config, &args)?;
    let frame = SceneFrame::build(&state, &QuoteContent::default());
    write_json(&frame, args.pretty)
}

/// Host that replays a precomputed list of scroll offsets.
struct ReplayHost {
    listeners: Vec<(ListenerId, SignalInbox)>,
    next_id: u64,
}

impl ReplayHost {
    fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    fn scroll_to(&self, offset: f64) {
        for (_, inbox) in &self.listeners {
            inbox.push_scroll(offset);
        }
    }
}

impl SignalHost for ReplayHost {
    fn attach(&mut self, inbox: SignalInbox) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, inbox));
        id
    }

    fn detach(&mut self, id: ListenerId) {
        self.listeners.retain(|(l, _)| *l != id);
    }
}

#[derive(serde::Serialize)]
struct SweepLine<'a> {
    frame: u64,
    scroll_offset: f64,
    state: &'a DerivedVisualState,
}

fn cmd_sweep(config: NarrativeConfig, args: SweepArgs) -> anyhow::Result<()> {
    if !(args.step.is_finite() && args.step > 0.0) {
        anyhow::bail!("--step must be finite and > 0");
    }
    if !(args.from.is_finite() && args.to.is_finite()) || args.to < args.from {
        anyhow::bail!("--from/--to must be finite with from <= to");
    }
    let per_frame = u64::from(args.events_per_frame.max(1));

    let steps = ((args.to - args.from) / args.step).floor();
    if !steps.is_finite() || steps >= args.max_events as f64 {
        anyhow::bail!(
            "sweep from {} to {} by {} exceeds --max-events {}",
            args.from,
            args.to,
            args.step,
            args.max_events
        );
    }
    let count = (steps as u64)
        .checked_add(1)
        .filter(|&n| n <= args.max_events)
        .with_context(|| format!("sweep exceeds --max-events {}", args.max_events))?;

    let mut adapter = ScrollAdapter::new(ScrollStateCalculator::new(config)?, args.viewport);
    let mut host = ReplayHost::new();
    let mut guard = adapter.subscribe(&mut host);

    let mut frame = 0u64;
    let mut next = 0u64;
    while next < count {
        let end = next.saturating_add(per_frame).min(count);
        for i in next..end {
            guard.host().scroll_to(args.from + i as f64 * args.step);
        }
        next = end;

        let scroll_offset = adapter.inbox().peek().scroll_offset;
        if let Some(state) = adapter.pump_frame(&mut |_: &DerivedVisualState| {}) {
            write_json(
                &SweepLine {
                    frame,
                    scroll_offset,
                    state: &state,
                },
                false,
            )?;
        }
        frame += 1;
    }
    drop(guard);
    Ok(())
}

fn cmd_check_config(args: CheckConfigArgs) -> anyhow::Result<()> {
    NarrativeConfig::from_path(&args.path)
        .with_context(|| format!("check config '{}'", args.path.display()))?;
    eprintln!("ok {}", args.path.display());
    Ok(())
}
