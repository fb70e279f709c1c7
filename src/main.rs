use std::path::PathBuf;

use clap::Parser;
use log::info;
use winit::event_loop::EventLoop;

use orrery::{app::App, config::ScenarioConfig};

#[derive(Parser, Debug)]
#[command(name = "orrery", about = "Solar system viewer")]
struct Args {
    /// Path to a RON scenario file. Defaults to the built-in Sun/Earth/Moon
    /// scenario.
    #[arg(long)]
    scene: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env().init();

    let args = Args::parse();
    let config = match &args.scene {
        Some(path) => ScenarioConfig::from_path(path)?,
        None => ScenarioConfig::default(),
    };
    let scene = config.build()?;
    info!("scenario loaded: {} satellites", scene.satellite_count());

    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut App::new(scene))?;
    Ok(())
}
