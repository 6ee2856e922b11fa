//! Windowed mode: real mouse and touch input drives the switch.
//!
//! The window surface is not painted. Thumb placement from each frame's draw
//! list goes to the log at `debug`, and the change listener prints as usual.

use anyhow::{Context, Result};
use smoothswitch_engine::input::platform::winit::translate_window_event;
use smoothswitch_ui::prelude::*;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

/// Runs the event loop until the window is closed.
pub fn run(scene: UiScene<SmoothSwitch>) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let size = scene.root_rect().size;
    let mut app = LiveStudio {
        scene,
        clock: FrameClock::new(),
        window: None,
        initial_size: LogicalSize::new(size.x.max(320.0), size.y.max(48.0)),
        ticking: false,
        last_thumb_x: None,
    };
    event_loop
        .run_app(&mut app)
        .context("winit event loop terminated with error")
}

struct LiveStudio {
    scene: UiScene<SmoothSwitch>,
    clock: FrameClock,
    window: Option<Window>,
    initial_size: LogicalSize<f32>,
    /// Frames are being requested continuously (press held or settling).
    ticking: bool,
    last_thumb_x: Option<f32>,
}

impl LiveStudio {
    /// A held press needs frames for long-press timing, a settle to move.
    fn wants_frames(&self) -> bool {
        let controller = self.scene.root().controller();
        controller.is_gesture_active() || controller.phase() == Phase::Settling
    }

    fn redraw(&mut self) {
        let draw_list = self.scene.frame(&self.clock.tick());
        let thumb_x = draw_list.find("thumb").map(|item| item.bounds.origin.x);
        if thumb_x != self.last_thumb_x {
            log::debug!("live: thumb at {thumb_x:?}");
            self.last_thumb_x = thumb_x;
        }
    }
}

impl ApplicationHandler for LiveStudio {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = Window::default_attributes()
            .with_title("Smoothswitch Studio")
            .with_inner_size(self.initial_size);
        match event_loop.create_window(attrs) {
            Ok(window) => {
                self.clock.reset();
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("live: failed to open window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(scale_factor) = self.window.as_ref().map(|w| w.scale_factor()) else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::Resized(size) => {
                let logical = size.to_logical::<f32>(scale_factor);
                self.scene.set_bounds(Rect::new(0.0, 0.0, logical.width, logical.height));
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            other => {
                if let Some(input) = translate_window_event(scale_factor, self.scene.input(), &other) {
                    self.scene.dispatch(&input);
                }
            }
        }

        if !self.scene.take_requests().is_empty() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        let wants_frames = self.wants_frames();
        if wants_frames && !self.ticking {
            // Idle time before the press must not count as the first frame.
            self.clock.reset();
        }
        self.ticking = wants_frames;
        if wants_frames {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}
