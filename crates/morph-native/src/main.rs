mod loader;
mod render;
mod sim;

use clap::Parser;
use glam::Vec3;
use instant::Instant;
use loader::{LoaderConfig, LoaderEvent};
use morph_core::{
    parse_hex_color, EngineParams, MorphEngine, PhotoFill, Settings, ShapeSelector,
    DEFAULT_PARTICLE_COUNT, DEFAULT_POINT_SIZE, DEFAULT_SHAPE_COLOR, PALETTE, SMOOTHING_ALPHA,
};
use render::GpuState;
use sim::{sim_input_for_key, KeyboardHands, SimInput};
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError};
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

const WINDOW_TITLE: &str = "Particle Morph";

#[derive(Parser, Debug)]
#[command(version, about = "Gesture-driven particle morphing between shapes and photos")]
struct Args {
    /// Directory of images to show in photo mode
    #[arg(long)]
    photos: Option<PathBuf>,
    /// Reference image for the firework shape
    #[arg(long)]
    firework: Option<PathBuf>,
    #[arg(long, default_value_t = DEFAULT_PARTICLE_COUNT)]
    particles: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// sphere, heart or firework
    #[arg(long, default_value = "sphere")]
    shape: ShapeSelector,
    /// Shape color as #rrggbb
    #[arg(long)]
    color: Option<String>,
    #[arg(long, default_value_t = DEFAULT_POINT_SIZE)]
    point_size: f32,
    /// Reuse photo points cyclically instead of collapsing spare particles
    #[arg(long)]
    wrap: bool,
}

impl Args {
    fn engine_params(&self) -> anyhow::Result<EngineParams> {
        let color = match self.color.as_deref() {
            Some(text) => parse_hex_color(text)?,
            None => Vec3::from(DEFAULT_SHAPE_COLOR),
        };
        Ok(EngineParams {
            particle_count: self.particles,
            seed: self.seed,
            smoothing: SMOOTHING_ALPHA,
            photo_fill: if self.wrap {
                PhotoFill::Wrap
            } else {
                PhotoFill::Collapse
            },
            settings: Settings {
                shape: self.shape,
                color,
                point_size: self.point_size,
            },
        })
    }
}

struct App {
    engine: MorphEngine,
    hands: KeyboardHands,
    loader: Option<Receiver<LoaderEvent>>,
    palette_index: usize,
    start: Instant,
    title: String,
}

impl App {
    /// Returns false when the user asked to quit.
    fn handle_input(&mut self, input: SimInput) -> bool {
        match input {
            SimInput::Quit => return false,
            SimInput::CycleShape => {
                let shape = self.engine.settings().shape.next();
                self.engine.set_shape(shape);
                log::info!("[settings] shape {shape}");
            }
            SimInput::CyclePalette => {
                self.palette_index = (self.palette_index + 1) % PALETTE.len();
                self.engine.set_color(Vec3::from(PALETTE[self.palette_index]));
            }
            SimInput::PointSize(factor) => {
                let size = self.engine.settings().point_size * factor;
                self.engine.set_point_size(size);
            }
            hand_input => self.hands.apply(hand_input),
        }
        true
    }

    fn drain_loader(&mut self) {
        let Some(rx) = &self.loader else {
            return;
        };
        loop {
            match rx.try_recv() {
                Ok(LoaderEvent::Photos(set)) => self.engine.replace_photos(set),
                Ok(LoaderEvent::Firework(cloud)) => self.engine.set_firework_cloud(cloud),
                Ok(LoaderEvent::Failed { path, reason }) => {
                    log::warn!("[loader] skipped {}: {}", path.display(), reason);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::info!("[loader] done");
                    self.loader = None;
                    break;
                }
            }
        }
    }

    /// Advance one frame. Returns a new window title when the overlay changed.
    fn step(&mut self) -> Option<String> {
        self.drain_loader();
        let hands = self.hands.frame();
        let now = self.start.elapsed();
        self.engine.frame(&hands, now);

        let title = format!("{WINDOW_TITLE} | {}", self.engine.overlay(now));
        if title != self.title {
            self.title = title.clone();
            Some(title)
        } else {
            None
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let params = args.engine_params()?;
    let particle_count = params.particle_count;
    let engine = MorphEngine::new(params)?;

    let loader = if args.photos.is_some() || args.firework.is_some() {
        Some(loader::spawn(LoaderConfig {
            photo_dir: args.photos.clone(),
            firework: args.firework.clone(),
            options: None,
        })?)
    } else {
        log::info!("[loader] no --photos given, photo mode unavailable");
        None
    };

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .build(&event_loop)?;
    let mut gpu = pollster::block_on(GpuState::new(&window, particle_count))?;

    log::info!(
        "[keys] left Z palm / X fist / C hide; right O palm / F fist / P point / H hide; \
         arrows swing; S shape; K color; +/- size; Esc quit"
    );
    let mut app = App {
        engine,
        hands: KeyboardHands::default(),
        loader,
        palette_index: 0,
        start: Instant::now(),
        title: String::new(),
    };

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => gpu.resize(size),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event: WindowEvent::KeyboardInput { event: key, .. },
            ..
        } => {
            if key.state != ElementState::Pressed || key.repeat {
                return;
            }
            let input = match key.logical_key.as_ref() {
                Key::Named(NamedKey::Escape) => Some(SimInput::Quit),
                Key::Named(NamedKey::ArrowLeft) => Some(KeyboardHands::swing_jerk(true)),
                Key::Named(NamedKey::ArrowRight) => Some(KeyboardHands::swing_jerk(false)),
                Key::Character(c) => sim_input_for_key(c),
                _ => None,
            };
            if let Some(input) = input {
                if !app.handle_input(input) {
                    elwt.exit();
                }
            }
        }
        Event::AboutToWait => {
            if let Some(title) = app.step() {
                gpu.window.set_title(&title);
            }
            match gpu.render(&app.engine.render_frame()) {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(err) => log::warn!("[gpu] frame skipped: {err:?}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
