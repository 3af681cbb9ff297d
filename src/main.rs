// Crate-level lints: pixel math casts that pedantic lints flag
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

//! Thermocouple lab simulator.
//!
//! A tin sample sits on a resistive heater. Switching the power on heats it at
//! a constant rate; the gauge on the left shows the thermocouple reading and
//! the graph on the right plots temperature against time. Tin holds at its
//! melting point while it melts, the heater cuts off above the overheat limit,
//! and once unpowered the sample cools back to room temperature.
//!
//! # Keys
//!
//! See [`input`] for the full table. `Space` switches the heater, `I` and `D`
//! open the instruction and debug pages, `Return` closes a modal alert and
//! `Escape` quits.
//!
//! # Frame Loop
//!
//! 1. Drain window events and apply key actions
//! 2. Advance the lab to the wall clock (skipped while a modal alert is open)
//! 3. Redraw the current page and present it
//! 4. Sleep out the rest of [`timing::FRAME_TIME`]

mod app;
mod cli;
mod clock;
mod input;
mod logging;
mod profiling;
mod screens;
mod settings;
mod timing;

use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use app::App;
use clap::Parser;
use cli::Cli;
use clock::SystemClock;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use profiling::ProfilingMetrics;
use settings::Settings;
use thermolab_common::Clock;
use thermolab_common::colors::BLACK;
use timing::{FPS_WINDOW, FRAME_TIME};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init(cli.log_level) {
        eprintln!("cannot install logger: {err}");
        return ExitCode::FAILURE;
    }

    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    run(&settings);
    ExitCode::SUCCESS
}

/// Open the window and run the frame loop until the user quits.
fn run(settings: &Settings) {
    let layout = settings.layout();
    let params = settings.heating_params();
    log::info!(
        "{:?} layout, {} px canvas, melting after {:.1} s, overheat after {:.1} s",
        layout.variant,
        layout.canvas_width,
        params.time_to_melt(),
        params.time_to_overheat()
    );

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(layout.screen_size());
    let output_settings = OutputSettingsBuilder::new().scale(settings.window.scale).build();
    let mut window = Window::new(&settings.window.title, &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let clock = SystemClock::new();
    let mut app = App::new(params, layout);
    let mut metrics = ProfilingMetrics::new();

    let mut last_fps_calc = Instant::now();
    let mut fps_frame_count = 0u32;
    let mut current_fps = 0.0f32;

    'frames: loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'frames,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // OS key repeat would flip the heater back and forth
                    if repeat {
                        continue;
                    }
                    let Some(action) = input::action_for(keycode) else {
                        continue;
                    };
                    if !app.apply(action, clock.now_ms()) {
                        break 'frames;
                    }
                }
                _ => {}
            }
        }

        if app.update(&clock).is_some() {
            metrics.ticks += 1;
        } else if app.is_paused() {
            metrics.paused_frames += 1;
        }

        fps_frame_count += 1;
        let since_fps = last_fps_calc.elapsed();
        if since_fps >= FPS_WINDOW {
            current_fps = fps_frame_count as f32 / since_fps.as_secs_f32();
            fps_frame_count = 0;
            last_fps_calc = Instant::now();
        }

        app.draw(&mut display, &metrics, current_fps);
        let render_time = frame_start.elapsed();

        window.update(&display);

        let pre_sleep = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(pre_sleep) {
            thread::sleep(remaining);
        }
        let sleep_time = frame_start.elapsed().checked_sub(pre_sleep).unwrap_or(Duration::ZERO);

        metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
    }

    log::info!(
        "window closed after {} frames, {} heating runs, lab {}",
        metrics.total_frames,
        app.sessions(),
        app.lab().phase().label()
    );
}
