use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use pixels::{Pixels, SurfaceTexture};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::raster::{PixelFrame, render_scene};
use crate::scene::Scene;
use crate::surface::Surface;
use crate::text::{FontId, FontSystem};
use crate::time::CancelToken;

/// Window/backend configuration.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    /// Logical framebuffer size; the window opens at the same size.
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "horologe".to_string(),
            width: 480,
            height: 480,
        }
    }
}

/// Windowed draw surface: one winit window presented through a CPU
/// framebuffer.
///
/// The event loop is pumped from inside [`Surface::present`], so the watch
/// loop remains the only control flow, with no callback inversion. Window close
/// and Escape trigger the shared cancellation token instead of exiting the
/// process; the loop then shuts down at its next iteration boundary.
pub struct WindowSurface {
    event_loop: EventLoop<()>,
    state: WindowState,
    fonts: FontSystem,
}

struct WindowState {
    config: WindowConfig,
    cancel: CancelToken,
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    pending_resize: Option<PhysicalSize<u32>>,
    init_error: Option<String>,
}

impl WindowSurface {
    /// Opens the window and acquires the pixel buffer.
    ///
    /// Fatal if the platform event loop, the window, or its render surface
    /// cannot be created; the clock cannot run without a surface.
    pub fn new(config: WindowConfig, cancel: CancelToken) -> Result<Self> {
        let mut event_loop = EventLoop::new().context("failed to create winit EventLoop")?;

        let mut state = WindowState {
            config,
            cancel,
            window: None,
            pixels: None,
            pending_resize: None,
            init_error: None,
        };

        // The first pumps deliver `resumed`, which creates the window.
        // Bounded, so a platform that never resumes fails instead of hanging.
        for _ in 0..20 {
            if state.window.is_some() || state.init_error.is_some() {
                break;
            }
            event_loop.pump_app_events(Some(Duration::from_millis(10)), &mut state);
        }

        if let Some(err) = state.init_error.take() {
            return Err(anyhow!(err));
        }
        if state.window.is_none() {
            return Err(anyhow!("platform event loop never delivered a window"));
        }

        log::debug!(
            "window surface up: {}x{} logical px",
            state.config.width,
            state.config.height
        );

        Ok(Self {
            event_loop,
            state,
            fonts: FontSystem::new(),
        })
    }

    /// Loads a font for text commands.
    ///
    /// The first font loaded becomes `FontId::default()`.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId> {
        self.fonts.load_font(bytes).map_err(|e| anyhow!("{e}"))
    }
}

impl Surface for WindowSurface {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.state.config.width as f32, self.state.config.height as f32)
    }

    fn present(&mut self, scene: &mut Scene) -> Result<()> {
        // Drain pending window events without blocking the frame.
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.state);
        if let PumpStatus::Exit(_) = status {
            self.state.cancel.cancel();
            return Ok(());
        }

        let (width, height) = (self.state.config.width, self.state.config.height);

        let Some(pixels) = self.state.pixels.as_mut() else {
            return Err(anyhow!("pixel buffer is gone, cannot present"));
        };

        if let Some(size) = self.state.pending_resize.take() {
            if size.width > 0 && size.height > 0 {
                pixels
                    .resize_surface(size.width, size.height)
                    .map_err(|e| anyhow!("failed to resize surface: {e}"))?;
            }
        }

        let viewport = Viewport::new(width as f32, height as f32);
        let mut frame = PixelFrame::new(pixels.frame_mut(), width as usize, height as usize);
        render_scene(scene, &self.fonts, viewport, &mut frame);

        pixels
            .render()
            .map_err(|e| anyhow!("failed to present frame: {e}"))
    }
}

impl Drop for WindowSurface {
    fn drop(&mut self) {
        // Buffer and window are torn down with their owners; this is the
        // single release point on every exit path.
        self.state.pixels = None;
        self.state.window = None;
        log::debug!("window surface released");
    }
}

impl ApplicationHandler for WindowState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(
                f64::from(self.config.width),
                f64::from(self.config.height),
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.init_error = Some(format!("failed to create window: {e}"));
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let texture = SurfaceTexture::new(size.width.max(1), size.height.max(1), window.clone());
        match Pixels::new(self.config.width, self.config.height, texture) {
            Ok(p) => {
                self.pixels = Some(p);
                self.window = Some(window);
            }
            Err(e) => {
                self.init_error = Some(format!("failed to acquire pixel buffer: {e}"));
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("window close requested");
                self.cancel.cancel();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && matches!(event.physical_key, PhysicalKey::Code(KeyCode::Escape))
                {
                    self.cancel.cancel();
                }
            }

            WindowEvent::Resized(size) => {
                self.pending_resize = Some(size);
            }

            _ => {}
        }
    }
}
