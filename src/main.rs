//! Bubble Shooter entry point
//!
//! Runs the game on the headless host: a fixed-step clock, an optional demo
//! player feeding pointer/key events, and an optional PNG of the last frame.

use std::path::PathBuf;

use bubble_shooter::autopilot::Autopilot;
use bubble_shooter::platform::HeadlessHost;
use bubble_shooter::{FrameController, Settings};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Depth-shaded bubble shooter on a CPU rasterizer", version)]
struct Args {
    /// JSON settings file (missing fields use defaults)
    #[arg(long)]
    settings: Option<PathBuf>,
    /// RNG seed, overrides the settings file
    #[arg(long)]
    seed: Option<u64>,
    /// Frames to run before closing
    #[arg(long, default_value_t = 600)]
    frames: u64,
    /// Simulated frame rate of the headless clock
    #[arg(long, default_value_t = 60)]
    fps: u32,
    /// Write the last frame to this PNG
    #[arg(long)]
    snapshot: Option<PathBuf>,
    /// Run without the demo player (nothing fires)
    #[arg(long)]
    no_autopilot: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    let seed = settings.resolve_seed();
    settings.seed = Some(seed);
    log::info!("Bubble Shooter starting with seed: {}", seed);

    let mut host =
        HeadlessHost::new(args.fps, Some(args.frames))?.keep_last_frame(args.snapshot.is_some());
    let mut pilot = (!args.no_autopilot).then(Autopilot::default);

    let mut ctl = FrameController::new(&settings);
    ctl.run(&mut host, |sim, host| {
        if let Some(pilot) = pilot.as_mut() {
            for event in pilot.events(sim) {
                host.queue(event);
            }
        }
    });

    if let Some(path) = &args.snapshot {
        host.save_snapshot(path)?;
    }
    Ok(())
}
