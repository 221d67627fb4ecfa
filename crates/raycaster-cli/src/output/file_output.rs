use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use image::{
    codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding},
    ColorType, ImageBuffer, ImageEncoder, Rgb,
};
use raycaster::renderer::Frame;

use super::FinalOutput;

/// Writes the frame to a single image file, picking the format from the extension.
pub struct FileOutput {
    pub path: PathBuf,
}

impl FileOutput {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn is_ascii_pixmap(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("ppm") || ext.eq_ignore_ascii_case("pnm"))
            .unwrap_or(false)
    }

    fn write_ascii_pixmap(&self, frame: &Frame) -> Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        let encoder =
            PnmEncoder::new(&mut writer).with_subtype(PnmSubtype::Pixmap(SampleEncoding::Ascii));
        encoder.write_image(
            frame.as_bytes(),
            frame.dimensions.width,
            frame.dimensions.height,
            ColorType::Rgb8,
        )?;
        writer.flush()?;
        Ok(())
    }
}

impl FinalOutput for FileOutput {
    fn commit(&self, frame: &Frame) -> Result<()> {
        log::info!("saving {} image to {:?}", frame.dimensions, self.path);
        if self.is_ascii_pixmap() {
            return self.write_ascii_pixmap(frame);
        }

        let buffer: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_raw(
            frame.dimensions.width,
            frame.dimensions.height,
            frame.as_bytes().to_vec(),
        )
        .context("frame size does not match its dimensions")?;
        buffer.save(&self.path)?;
        Ok(())
    }
}
