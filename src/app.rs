use std::{sync::Arc, time::Instant};

use log::{info, warn};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::{camera::MoveDirection, scene::Scene, state::State};

/// Which movement keys are currently held. Sampled once per frame; each held
/// direction becomes one camera move scaled by that frame's elapsed time.
#[derive(Clone, Copy, Debug, Default)]
struct HeldDirections {
    up: bool,
    down: bool,
    forward: bool,
    backward: bool,
}

impl HeldDirections {
    fn set(&mut self, key: KeyCode, pressed: bool) {
        match key {
            KeyCode::ArrowUp => self.up = pressed,
            KeyCode::ArrowDown => self.down = pressed,
            KeyCode::KeyW => self.forward = pressed,
            KeyCode::KeyS => self.backward = pressed,
            _ => {}
        }
    }

    fn directions(self) -> impl Iterator<Item = MoveDirection> {
        [
            (self.up, MoveDirection::Up),
            (self.down, MoveDirection::Down),
            (self.forward, MoveDirection::Forward),
            (self.backward, MoveDirection::Backward),
        ]
        .into_iter()
        .filter_map(|(held, direction)| held.then_some(direction))
    }
}

pub struct App {
    window: Option<Arc<Window>>,
    state: Option<State>,
    scene: Scene,
    held: HeldDirections,
    last_frame: Option<Instant>,
}

impl App {
    pub fn new(scene: Scene) -> Self {
        Self {
            window: None,
            state: None,
            scene,
            held: HeldDirections::default(),
            last_frame: None,
        }
    }

    fn tick(&mut self) {
        let Some(state) = &mut self.state else {
            return;
        };

        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|last| (now - last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);

        for direction in self.held.directions() {
            self.scene.move_camera(direction, dt);
        }

        self.scene.advance(dt);

        let transforms = self.scene.camera_transforms(state.aspect_ratio());
        state.upload_frame(&self.scene.draw_list(), &transforms, &self.scene.light());

        match state.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("surface lost, reconfiguring");
                state.reconfigure();
            }
            Err(e) => warn!("frame dropped: {e}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title("Solar System")
                    .with_inner_size(LogicalSize::new(800, 600)),
            )
            .unwrap();

        let window: Arc<Window> = window.into();
        self.window = Some(window.clone());

        let state = pollster::block_on(State::new(window.clone()));
        self.state = Some(state);
        self.held = HeldDirections::default();
        self.last_frame = None;

        window.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                self.held.set(code, key_state.is_pressed());
            }
            WindowEvent::CloseRequested => {
                info!("close requested, stopping");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(state) = &mut self.state {
                    state.resize(size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.tick();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => (),
        }
    }
}
