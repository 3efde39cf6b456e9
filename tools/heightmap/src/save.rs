//! PNG persistence: pick a free file name, then encode.
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use heightmap_core::PixelBuffer;

/// First free path among `<dir>/<stem>.png`, `<dir>/<stem>_1.png`, `<dir>/<stem>_2.png`, ...
pub fn unique_path(dir: &Path, stem: &str) -> PathBuf {
    let mut path = dir.join(format!("{stem}.png"));
    let mut count = 1u32;
    while path.exists() {
        path = dir.join(format!("{stem}_{count}.png"));
        count += 1;
    }
    path
}

/// Encode `buf` as an RGBA PNG at `path`.
pub fn save_png(buf: &PixelBuffer, path: &Path) -> Result<()> {
    let img = image::RgbaImage::from_raw(buf.width as u32, buf.height as u32, buf.to_rgba8_bytes())
        .ok_or_else(|| anyhow!("pixel buffer does not match {}x{}", buf.width, buf.height))?;
    img.save(path).with_context(|| format!("failed to write {}", path.display()))
}
