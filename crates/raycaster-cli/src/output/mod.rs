mod file_output;

use anyhow::Result;
pub use file_output::FileOutput;
use raycaster::renderer::Frame;

/// Destination of a finished frame
pub trait FinalOutput {
    fn commit(&self, frame: &Frame) -> Result<()>;
}
