//! Windowed driver: winit event loop presenting through a `pixels` buffer.
//!
//! Each redraw samples the clock once, renders the whole frame into a
//! [`PixmapSurface`], copies it into the pixel buffer and presents it.
//! Closing the window or pressing Escape ends the loop.

use super::clock::{FrameClock, FrameLimiter};
use anyhow::Context;
use pixels::{Pixels, SurfaceTexture};
use ripplescope_core::constants::WINDOW_TITLE;
use ripplescope_visualizer::{PixmapSurface, SurfaceRenderer};
use std::time::Instant;
use tracing::{debug, error, info, trace, warn};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn is_quit_event(event: &WindowEvent<'_>) -> bool {
    matches!(
        event,
        WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                input: KeyboardInput {
                    state: ElementState::Pressed,
                    virtual_keycode: Some(VirtualKeyCode::Escape),
                    ..
                },
                ..
            }
    )
}

/// Open the window and run until the user quits. Does not return on success.
pub fn run_windowed(renderer: SurfaceRenderer, fps: u32) -> anyhow::Result<()> {
    let view = renderer.config().view;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(view.width as f64, view.height as f64))
        .with_resizable(false)
        .build(&event_loop)
        .context("Failed to create window")?;

    let window_size = window.inner_size();
    let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
    let mut pixels = Pixels::new(view.width, view.height, surface_texture)
        .context("Failed to create pixel buffer")?;
    let mut surface = PixmapSurface::new(view.width, view.height)?;

    let mut clock = FrameClock::realtime();
    let mut limiter = FrameLimiter::new(fps, Instant::now());
    let mut frames: u64 = 0;

    info!(
        "Opened {}x{} window, {} mode at {} fps",
        view.width,
        view.height,
        renderer.mode(),
        fps
    );

    event_loop.run(move |event, _, control_flow| match event {
        Event::WindowEvent { event, .. } if is_quit_event(&event) => {
            info!("Quit requested after {} frames", frames);
            *control_flow = ControlFlow::Exit;
        }
        Event::MainEventsCleared => {
            if limiter.is_due(Instant::now()) {
                window.request_redraw();
            } else {
                *control_flow = ControlFlow::WaitUntil(limiter.next_frame());
            }
        }
        Event::RedrawRequested(_) => {
            let started = Instant::now();
            let t = clock.sample();
            let stats = renderer.render_frame(&mut surface, t);

            pixels.frame_mut().copy_from_slice(surface.rgba());
            if let Err(err) = pixels.render() {
                error!("Failed to present frame: {}", err);
                *control_flow = ControlFlow::Exit;
                return;
            }
            frames += 1;
            trace!(
                frame = frames,
                t,
                quads = stats.quads,
                segments = stats.segments,
                "Presented frame"
            );

            let elapsed = started.elapsed();
            if elapsed > limiter.frame_duration() {
                warn!(
                    "Frame {} took {:.2?}, over the {:.2?} budget",
                    frames,
                    elapsed,
                    limiter.frame_duration()
                );
            }
            *control_flow = ControlFlow::WaitUntil(limiter.advance(Instant::now()));
        }
        Event::LoopDestroyed => {
            debug!("Event loop destroyed");
        }
        _ => {}
    });
}
