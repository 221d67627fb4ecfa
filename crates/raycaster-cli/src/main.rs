mod executor;
mod output;
mod progress;

use std::{num::NonZeroU32, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use executor::{ExecutionMode, Executor};
use output::{FileOutput, FinalOutput};
use raycaster::{
    integrators::DEFAULT_MAX_DEPTH,
    lighting::DEFAULT_SPECULAR_EXPONENT,
    scene::load_scene,
    utils::{counter, timer::timed_scope_log},
};

/// Each bounce is a nested call, deeper recursions could exhaust the stack
const MAX_DEPTH_LIMIT: i64 = 64;

/// Render a scene description with a recursive ray tracer
#[derive(Parser, Debug)]
pub struct Args {
    /// Width of the image, in pixel
    width: NonZeroU32,

    /// Height of the image, in pixel
    height: NonZeroU32,

    /// JSON scene description
    scene: PathBuf,

    /// Where to write the image. `.ppm` and `.pnm` give an ASCII PPM, other extensions pick
    /// their format from the extension
    output: PathBuf,

    #[arg(
        long,
        default_value_t = DEFAULT_MAX_DEPTH,
        value_parser = clap::value_parser!(u32).range(..=MAX_DEPTH_LIMIT),
    )]
    /// Number of bounces after which reflected and refracted rays stop
    max_depth: u32,

    #[arg(long, default_value_t = DEFAULT_SPECULAR_EXPONENT)]
    /// Exponent of the specular highlights
    specular_exponent: f32,

    #[arg(long)]
    /// Cast refracted rays through surfaces with a positive refractivity
    refraction: bool,

    #[arg(short, long, value_enum, default_value_t = ExecutionMode::Multithreaded)]
    execution_mode: ExecutionMode,

    #[arg(long)]
    /// Do not display the progress bar
    no_progress: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    log::info!("loading scene");
    let scene = timed_scope_log("load scene", || load_scene(&args.scene))
        .res
        .with_context(|| format!("cannot load scene {:?}", args.scene))?;

    let executor = Executor::from_args(&args);
    log::info!("rendering");
    let frame = timed_scope_log("render", || executor.run(&scene)).res;

    log::info!("saving image");
    FileOutput::new(args.output.clone())
        .commit(&frame)
        .with_context(|| format!("cannot write image {:?}", args.output))?;

    counter::report_counters();
    Ok(())
}
