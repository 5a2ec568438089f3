//! Window host driving the camera rig (winit 0.30)

use std::time::Instant;

use freelook_core::{Camera, FrameClock, Transform, Vec3};
use freelook_rig::{FirstPersonCameraController, InputHandler};
use tracing::{error, info, trace};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::ActiveEventLoop,
    window::{Window, WindowId},
};

use crate::settings::Settings;

/// Frames between title bar refreshes
const TITLE_INTERVAL: u64 = 30;

/// Application state
pub struct FreelookApp {
    settings: Settings,
    window: Option<Window>,
    input: InputHandler,
    clock: FrameClock,
    camera: Camera,
    transform: Transform,
    rig: FirstPersonCameraController,
    last_frame: Option<Instant>,
}

impl FreelookApp {
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let camera = Camera::with_fov(settings.video.fov);
        let rig = FirstPersonCameraController::attach(settings.controls.clone(), Some(&camera))?;

        let mut input = InputHandler::new();
        input.mouse_sensitivity = settings.input.mouse_sensitivity;
        input.invert_y = settings.input.invert_y;
        input.axis_ramp = settings.input.axis_ramp;

        Ok(Self {
            settings,
            window: None,
            input,
            clock: FrameClock::default(),
            camera,
            transform: Transform::from_position(Vec3::new(0.0, 1.7, 5.0)),
            rig,
            last_frame: None,
        })
    }

    fn frame(&mut self) {
        let now = Instant::now();
        let elapsed = self
            .last_frame
            .map(|last| now.duration_since(last))
            .unwrap_or_default();
        self.last_frame = Some(now);
        self.clock.update(elapsed);

        let Some(window) = self.window.as_mut() else {
            return;
        };

        let snapshot = self.input.snapshot(&self.clock);
        self.rig
            .tick(&snapshot, &mut self.camera, &mut self.transform, window);
        self.input.end_frame();

        trace!(
            position = ?self.transform.position,
            fov = self.camera.fov,
            "frame"
        );

        if self.clock.frame_count % TITLE_INTERVAL == 0 {
            let p = self.transform.position;
            let state = self.rig.state();
            window.set_title(&format!(
                "freelook | pos ({:.1}, {:.1}, {:.1}) yaw {:.0} pitch {:.0} fov {:.1}",
                p.x, p.y, p.z, state.yaw, state.pitch, self.camera.fov
            ));
        }
    }
}

impl ApplicationHandler for FreelookApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title("freelook")
            .with_inner_size(LogicalSize::new(
                self.settings.video.width,
                self.settings.video.height,
            ));
        match event_loop.create_window(attributes) {
            Ok(window) => {
                info!("Window created - double-click to capture the cursor");
                self.window = Some(window);
            }
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Window close requested");
                event_loop.exit();
            }
            WindowEvent::Focused(false) => {
                self.input.reset();
                if let Some(window) = self.window.as_mut() {
                    self.rig.release_cursor(window);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.input.handle_keyboard(event.physical_key, event.state);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.input.handle_mouse_button(button, state);
            }
            WindowEvent::RedrawRequested => self.frame(),
            _ => {}
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _id: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.input.handle_mouse_motion(delta);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        info!(frames = self.clock.frame_count, "Shutting down");
    }
}
