//! Horologe binary: a live analog clock in a window.

mod angles;
mod face;
mod hand;
mod theme;
mod watch;

use std::time::Duration;

use anyhow::{Context, Result, anyhow, ensure};
use clap::Parser;

use horologe_canvas::coords::Rgba;
use horologe_canvas::logging::{LoggingConfig, init_logging};
use horologe_canvas::scene::Scene;
use horologe_canvas::surface::{WindowConfig, WindowSurface};
use horologe_canvas::time::CancelToken;

use crate::theme::{Theme, ThemeConfig};
use crate::watch::{AnalogWatch, WatchRunner};

/// Live analog clock, redrawn once per tick.
#[derive(Debug, Parser)]
#[command(name = "horologe", version, about)]
struct Cli {
    /// Seconds between frames (minimum inter-frame delay).
    #[arg(long, default_value_t = 1.0)]
    interval: f64,

    /// Dial radius in logical pixels.
    #[arg(long, default_value_t = 200.0)]
    radius: f32,

    /// Color preset: classic or midnight.
    #[arg(long, default_value = "classic")]
    theme: String,

    /// Window title.
    #[arg(long, default_value = "horologe")]
    title: String,

    /// Per-color overrides on top of the preset, as #rrggbb.
    #[arg(long, value_name = "HEX")]
    background: Option<String>,
    #[arg(long, value_name = "HEX")]
    face: Option<String>,
    #[arg(long, value_name = "HEX")]
    digit: Option<String>,
    #[arg(long, value_name = "HEX")]
    hour_hand: Option<String>,
    #[arg(long, value_name = "HEX")]
    minute_hand: Option<String>,
    #[arg(long, value_name = "HEX")]
    second_hand: Option<String>,
}

fn build_theme(cli: &Cli) -> Result<Theme> {
    let preset = Theme::preset(&cli.theme).with_context(|| {
        format!(
            "unknown theme {:?} (expected one of {:?})",
            cli.theme,
            Theme::preset_names()
        )
    })?;

    let mut config = ThemeConfig::from_theme(preset);
    let overrides = [
        (&mut config.background, &cli.background),
        (&mut config.face, &cli.face),
        (&mut config.digit, &cli.digit),
        (&mut config.hour_hand, &cli.hour_hand),
        (&mut config.minute_hand, &cli.minute_hand),
        (&mut config.second_hand, &cli.second_hand),
    ];
    for (slot, arg) in overrides {
        if let Some(hex) = arg {
            *slot = Some(Rgba::from_hex(hex).map_err(|e| anyhow!("{e}"))?);
        }
    }

    config.build().map_err(|e| anyhow!("{e}"))
}

/// Probes well-known system font locations in order.
/// `HOROLOGE_FONT` overrides the list outright.
fn load_system_font() -> Result<Vec<u8>> {
    if let Ok(path) = std::env::var("HOROLOGE_FONT") {
        return std::fs::read(&path).with_context(|| format!("failed to read font {path:?}"));
    }

    const CANDIDATES: &[&str] = &[
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ];

    CANDIDATES
        .iter()
        .find_map(|p| std::fs::read(p).ok())
        .context("no usable system font found (set HOROLOGE_FONT to a .ttf path)")
}

#[cfg(unix)]
fn install_signal_handler(cancel: &CancelToken) -> Result<()> {
    // SIGINT and SIGTERM both request a clean shutdown at the next frame
    // boundary; neither interrupts a frame in flight.
    for sig in [signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM] {
        signal_hook::flag::register(sig, cancel.flag())
            .context("failed to register signal handler")?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn install_signal_handler(_cancel: &CancelToken) -> Result<()> {
    Ok(())
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let cli = Cli::parse();
    ensure!(cli.interval > 0.0, "--interval must be positive");

    let theme = build_theme(&cli)?;
    let cancel = CancelToken::new();
    install_signal_handler(&cancel)?;

    // Window sized to fit the dial with a margin for the rim stroke.
    let extent = (cli.radius * 2.2).ceil() as u32;
    let mut surface = WindowSurface::new(
        WindowConfig {
            title: cli.title.clone(),
            width: extent,
            height: extent,
        },
        cancel.clone(),
    )?;
    let font = surface.load_font(&load_system_font()?)?;

    let mut scene = Scene::new();
    let watch = AnalogWatch::new(theme, cli.radius, font, &mut scene)?;

    log::info!(
        "horologe up: radius {} px, tick every {}s, theme {:?}",
        cli.radius,
        cli.interval,
        cli.theme
    );

    WatchRunner::new(watch, surface, scene).run(Duration::from_secs_f64(cli.interval), &cancel)
}
