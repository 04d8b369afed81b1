use clap::Parser;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use winit::dpi::PhysicalSize;
use winit::event_loop::EventLoop;
use winit::window::WindowAttributes;

use cytoscene::application::Application;
use cytoscene::SceneEvent;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Playback speed multiplier
    #[arg(long, default_value_t = 1.0)]
    speed: f32,

    /// Start with the cycle paused
    #[arg(long)]
    paused: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            speed: 1.0,
            paused: false,
        }
    }
}

fn main() {
    run();
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub fn run() {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            console_log::init_with_level(log::Level::Info).expect("Couldn't initialize logger");
            let args = Args::default();
        } else {
            env_logger::init();
            let args = Args::parse();
        }
    }

    let event_loop = EventLoop::<SceneEvent>::with_user_event()
        .build()
        .expect("Could not build event loop");
    let radio = event_loop.create_proxy();
    let window_attributes = WindowAttributes::default()
        .with_title("Cytoscene")
        .with_inner_size(PhysicalSize::new(1280, 900));
    let mut application = Application::new(window_attributes, radio, args.speed, args.paused);
    event_loop
        .run_app(&mut application)
        .expect("Could not run event loop");
}
