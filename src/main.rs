//! Curing-barn monitor render shell.
//!
//! Walks a scripted sequence of UI events through the view state and renders
//! every resulting frame into a `SimulatorDisplay`, written out as PNG. Set
//! `RUST_LOG=debug` to see the resolved token of every gauge.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod config;
mod data;
mod pages;
mod screens;
mod state;
mod widgets;

use std::fs;
use std::iter;
use std::path::Path;

use anyhow::Context;
use curing_common::colors::SCREEN_BG;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use log::{debug, info, warn};

use crate::config::{OUTPUT_DIR, OUTPUT_SCALE, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::data::{MockBarn, ReadingSource};
use crate::screens::draw_page;
use crate::state::{ViewEvent, ViewState};

/// Events applied after the initial frame, one rendered frame each.
const SCRIPT: [ViewEvent; 5] = [
    ViewEvent::NextPage,
    ViewEvent::ToggleManualMode,
    ViewEvent::ToggleVentilationOverride,
    ViewEvent::ToggleManualMode,
    ViewEvent::NextPage,
];

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let out_dir = Path::new(OUTPUT_DIR);
    fs::create_dir_all(out_dir).with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let source = MockBarn;
    let output_settings = OutputSettingsBuilder::new().scale(OUTPUT_SCALE).build();
    let mut state = ViewState::new();

    let events = iter::once(None).chain(SCRIPT.iter().copied().map(Some));
    for (index, event) in events.enumerate() {
        if let Some(event) = event {
            state = state.apply(event);
            debug!("{event:?} -> {state:?}");
        }

        let display = render_frame(&state, &source)?;
        let path = out_dir.join(frame_file_name(index + 1, &state));
        display
            .to_rgb_output_image(&output_settings)
            .save_png(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("wrote {}", path.display());
    }

    Ok(())
}

/// Render one frame of the shell for `state`.
fn render_frame<S>(
    state: &ViewState,
    source: &S,
) -> anyhow::Result<SimulatorDisplay<Rgb565>>
where
    S: ReadingSource + ?Sized,
{
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    display.clear(SCREEN_BG).ok();

    let outcomes = draw_page(&mut display, state, source)
        .with_context(|| format!("laying out {} page", state.page.slug()))?;
    for outcome in &outcomes {
        match outcome.result {
            Ok(token) => debug!("{}: {:?} {}", outcome.title, token, token.hex()),
            Err(err) => warn!("{}: placeholder ({err})", outcome.title),
        }
    }

    Ok(display)
}

/// File name of the `index`-th frame, e.g. `03-barn-detail-manual.png`.
fn frame_file_name(
    index: usize,
    state: &ViewState,
) -> String {
    let mut name = format!("{index:02}-{}", state.page.slug());
    if state.manual_mode {
        name.push_str("-manual");
    }
    if state.ventilation_override {
        name.push_str("-override");
    }
    name.push_str(".png");
    name
}
