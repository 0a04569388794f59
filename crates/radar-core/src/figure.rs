// File: crates/radar-core/src/figure.rs
// Summary: Caller-owned drawing target backed by a Skia CPU raster surface.

use anyhow::Result;
use skia_safe as skia;

use crate::types::{HEIGHT, WIDTH};

/// The figure a chart draws onto. The caller creates it, hands it to one or
/// more charts, and exports the result; the library never writes a file the
/// caller did not ask for.
pub struct Figure {
    surface: skia::Surface,
    width: i32,
    height: i32,
}

impl Figure {
    pub fn new(width: i32, height: i32, background: skia::Color) -> Result<Self> {
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        surface.canvas().clear(background);
        Ok(Self { surface, width, height })
    }

    /// Default-sized figure with a light background.
    pub fn with_defaults() -> Result<Self> {
        Self::new(WIDTH, HEIGHT, crate::theme::Theme::light().background)
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }

    pub fn canvas(&mut self) -> &skia::Canvas {
        self.surface.canvas()
    }

    /// Encode the current surface contents as PNG bytes.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the current surface contents as a PNG at `path`.
    pub fn save_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Read the surface back as a tightly packed RGBA8 buffer.
    /// Returns (pixels, width, height, stride).
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, i32, i32, usize)> {
        let stride = self.width as usize * 4;
        let mut pixels = vec![0u8; stride * self.height as usize];
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let ok = self
            .surface
            .canvas()
            .read_pixels(&info, &mut pixels, stride, (0, 0));
        if !ok {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, self.width, self.height, stride))
    }
}
