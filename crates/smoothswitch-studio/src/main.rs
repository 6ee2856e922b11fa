//! Walkthrough of the switch.
//!
//! By default the run is headless: scripted pointer input goes through a
//! `UiScene`, frames advance on a fixed 16 ms clock, and the thumb's path is
//! printed. With `--window` a winit window feeds real mouse and touch input
//! through the same scene instead.
//!
//! Usage: `smoothswitch-studio [--track PATH --thumb PATH] [--filter FILTER] [--window]`
//! Without assets a 100x30 track and a 20x30 thumb are used.

mod live;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use smoothswitch_engine::input::{
    MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};
use smoothswitch_engine::logging::{init_logging, LoggingConfig};
use smoothswitch_ui::prelude::*;

const TRACK: ResourceId = ResourceId(0x7f08_0001);
const THUMB: ResourceId = ResourceId(0x7f08_0002);

const FRAME: Duration = Duration::from_millis(16);
const Y: f32 = 15.0;

#[derive(Debug, Parser)]
#[command(name = "smoothswitch-studio")]
#[command(about = "Drives a smooth switch through scripted or live input")]
struct Cli {
    /// Track asset (raster image or SVG).
    #[arg(long, requires = "thumb")]
    track: Option<PathBuf>,
    /// Thumb asset (raster image or SVG).
    #[arg(long, requires = "track")]
    thumb: Option<PathBuf>,
    /// Log filter in env_logger syntax; overrides RUST_LOG.
    #[arg(long)]
    filter: Option<String>,
    /// Open a window and use real pointer input instead of the script.
    #[arg(long)]
    window: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(match &cli.filter {
        Some(filter) => LoggingConfig::with_filter(filter.as_str()),
        None => LoggingConfig::default(),
    });

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║        SMOOTHSWITCH STUDIO v0.1        ║");
    if cli.window {
        println!("  ║   live window  ·  mouse and touch      ║");
    } else {
        println!("  ║   headless scene  ·  16 ms frames      ║");
    }
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let resources = load_resources(&cli)?;
    let switch = SmoothSwitch::from_resources(&resources, TRACK, THUMB)
        .context("building switch from registered assets")?
        .gravity(Gravity::CenterVertical)
        .on_change(|on| println!("  [LISTENER] checked -> {on}"));

    let scene = UiScene::new(switch, Rect::new(0.0, 0.0, 320.0, 48.0))
        .with_parent_intercept(8.0);

    let max = scene.root().controller().max_position();
    println!("  Track    >  {} x {}", scene.root().track_drawable().width(), scene.root().track_drawable().height());
    println!("  Thumb    >  {} x {}", scene.root().thumb_drawable().width(), scene.root().thumb_drawable().height());
    println!("  Travel   >  0 ..= {max}");
    println!();

    if cli.window {
        return live::run(scene);
    }
    run_script(scene);
    Ok(())
}

fn run_script(mut scene: UiScene<SmoothSwitch>) {
    let mut clock = FrameClock::new();

    // ── TAP ───────────────────────────────────────────────────────────────
    banner("TAP");
    press(&mut scene, 10.0);
    release(&mut scene, 10.0);
    settle(&mut scene, &mut clock);

    // ── DRAG BACK PAST THE MIDPOINT ───────────────────────────────────────
    banner("DRAG -50");
    let start = scene.root().thumb_position() as f32 + 5.0;
    press(&mut scene, start);
    drag(&mut scene, start, start - 50.0, 5);
    release(&mut scene, start - 50.0);
    settle(&mut scene, &mut clock);

    // ── SHORT DRAG, SNAPS BACK ────────────────────────────────────────────
    banner("DRAG +30");
    press(&mut scene, 5.0);
    drag(&mut scene, 5.0, 35.0, 3);
    release(&mut scene, 35.0);
    settle(&mut scene, &mut clock);

    // ── INTERRUPTED SETTLE ────────────────────────────────────────────────
    banner("TAP, GRAB MID-FLIGHT");
    press(&mut scene, 5.0);
    release(&mut scene, 5.0);
    for _ in 0..4 {
        scene.frame(&clock.advance(FRAME));
    }
    let grab = scene.root().thumb_position() as f32 + 5.0;
    println!("  grabbed at {}", scene.root().thumb_position());
    press(&mut scene, grab);
    drag(&mut scene, grab, grab + 60.0, 4);
    release(&mut scene, grab + 60.0);
    settle(&mut scene, &mut clock);

    // ── PROGRAMMATIC ──────────────────────────────────────────────────────
    banner("set_checked(false)");
    scene.root_mut().set_checked(false);
    scene.frame(&clock.advance(FRAME));
    report(&scene);

    let requests = scene.take_requests();
    println!();
    println!("  Host requests pending  >  {requests:?}");
    println!();
}

fn load_resources(cli: &Cli) -> Result<Resources> {
    let mut resources = Resources::new();
    match (&cli.track, &cli.thumb) {
        (Some(track), Some(thumb)) => {
            let track_asset = Drawable::load(track)
                .with_context(|| format!("loading track asset {}", track.display()))?;
            let thumb_asset = Drawable::load(thumb)
                .with_context(|| format!("loading thumb asset {}", thumb.display()))?;
            resources.insert(TRACK, track_asset);
            resources.insert(THUMB, thumb_asset);
        }
        _ => {
            resources.insert(TRACK, Drawable::solid("track", 100, 30, [60, 60, 80, 255])?);
            resources.insert(THUMB, Drawable::solid("thumb", 20, 30, [240, 240, 240, 255])?);
        }
    }
    log::info!("registered {} assets", resources.len());
    Ok(resources)
}

// ── scripted input ────────────────────────────────────────────────────────

fn press(scene: &mut UiScene<SmoothSwitch>, x: f32) {
    let ev = InputEvent::PointerButton(PointerButtonEvent {
        button: MouseButton::Left,
        state: MouseButtonState::Pressed,
        x,
        y: Y,
    });
    scene.dispatch(&ev);
}

fn release(scene: &mut UiScene<SmoothSwitch>, x: f32) {
    let ev = InputEvent::PointerButton(PointerButtonEvent {
        button: MouseButton::Left,
        state: MouseButtonState::Released,
        x,
        y: Y,
    });
    scene.dispatch(&ev);
}

fn drag(scene: &mut UiScene<SmoothSwitch>, from: f32, to: f32, steps: u32) {
    for i in 1..=steps {
        let x = from + (to - from) * i as f32 / steps as f32;
        scene.dispatch(&InputEvent::PointerMoved(PointerMoveEvent { x, y: Y }));
        println!("  move x={x:>6.1}  thumb={:>3}", scene.root().thumb_position());
    }
}

/// Runs frames until the thumb comes to rest.
fn settle(scene: &mut UiScene<SmoothSwitch>, clock: &mut FrameClock) {
    let mut trajectory = Vec::new();
    while scene.root().controller().phase() == Phase::Settling {
        scene.frame(&clock.advance(FRAME));
        trajectory.push(scene.root().thumb_position().to_string());
    }
    scene.frame(&clock.advance(FRAME));
    if !trajectory.is_empty() {
        println!("  settle   >  {}", trajectory.join(" → "));
    }
    report(scene);
}

fn report(scene: &UiScene<SmoothSwitch>) {
    let sw = scene.root();
    let thumb = scene
        .draw_list()
        .find("thumb")
        .map(|item| item.bounds.origin.x)
        .unwrap_or_default();
    println!(
        "  state    >  checked={}  position={}  thumb drawn at x={thumb}",
        sw.is_checked(),
        sw.thumb_position(),
    );
}

fn banner(title: &str) {
    println!();
    println!("  ── {title} {}", "─".repeat(40usize.saturating_sub(title.len())));
}
