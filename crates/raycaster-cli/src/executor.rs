use clap::ValueEnum;
use raycaster::{
    camera::Dimensions,
    integrators::WhittedIntegrator,
    renderer::{Frame, Renderer},
    scene::Scene,
};

use crate::{progress::Progress, Args};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExecutionMode {
    Multithreaded,
    Monothreaded,
}

pub struct Executor {
    pub dimensions: Dimensions,
    pub integrator: WhittedIntegrator,
    pub execution_mode: ExecutionMode,
    pub show_progress: bool,
}

impl Executor {
    pub fn from_args(args: &Args) -> Self {
        Self {
            dimensions: Dimensions {
                width: args.width.get(),
                height: args.height.get(),
            },
            integrator: WhittedIntegrator {
                max_depth: args.max_depth,
                specular_exponent: args.specular_exponent,
                refraction: args.refraction,
            },
            execution_mode: args.execution_mode,
            show_progress: !args.no_progress,
        }
    }

    pub fn run(&self, scene: &Scene) -> Frame {
        log::info!(
            "rendering {} pixels, max depth {}",
            self.dimensions,
            self.integrator.max_depth
        );
        let renderer = Renderer::new(scene, &self.integrator, self.dimensions);
        let progress = Progress::new(self.dimensions.height as usize);
        let on_row_rendered = |_row: u32| {
            progress.add(1);
            if self.show_progress {
                progress.print_throttled();
            }
        };

        let frame = match self.execution_mode {
            ExecutionMode::Multithreaded => {
                log::info!("execution mode: multithreaded");
                renderer.run_multithreaded(on_row_rendered)
            }
            ExecutionMode::Monothreaded => {
                log::info!("execution mode: monothreaded");
                renderer.run_monothreaded(on_row_rendered)
            }
        };

        if self.show_progress {
            println!("\r{progress}");
        }
        frame
    }
}
