//! Handing rendered frames to the outside world.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::{Error, Result};

/// Splits a packed `0xAARRGGBB` pixel into bytes.
#[inline]
pub fn unpack_argb(pixel: u32) -> Rgba<u8> {
    let [a, r, g, b] = pixel.to_be_bytes();
    Rgba([r, g, b, a])
}

pub fn to_image(pixels: &[u32], width: u32, height: u32) -> Result<RgbaImage> {
    let expected = width as usize * height as usize;
    if pixels.len() != expected {
        return Err(Error::FrameSize {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(RgbaImage::from_fn(width, height, |x, y| {
        unpack_argb(pixels[x as usize + y as usize * width as usize])
    }))
}

/// Writes the frame to `path`, format picked from the extension.
pub fn save<P: AsRef<Path>>(path: P, pixels: &[u32], width: u32, height: u32) -> Result<()> {
    let image = to_image(pixels, width, height)?;
    image.save(path.as_ref())?;

    log::info!("saved {}x{} frame to {:?}", width, height, path.as_ref());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpack() {
        assert_eq!(Rgba([0x12, 0x34, 0x56, 0xFF]), unpack_argb(0xFF12_3456));
    }

    #[test]
    fn row_major_layout() {
        let pixels = [0xFF00_0000, 0xFFFF_0000, 0xFF00_FF00, 0xFF00_00FF, 0xFFFF_FFFF, 0xFF80_8080];
        let image = to_image(&pixels, 3, 2).unwrap();

        assert_eq!(&Rgba([255, 0, 0, 255]), image.get_pixel(1, 0));
        assert_eq!(&Rgba([0, 0, 255, 255]), image.get_pixel(0, 1));
        assert_eq!(&Rgba([128, 128, 128, 255]), image.get_pixel(2, 1));
    }

    #[test]
    fn size_mismatch() {
        match to_image(&[0xFF00_0000; 5], 3, 2) {
            Err(Error::FrameSize { expected: 6, actual: 5 }) => {}
            other => panic!("unexpected result: {:?}", other.map(|i| i.dimensions())),
        }
    }

    #[test]
    fn save_png() {
        let path = std::env::temp_dir().join(format!("solari-frame-{}.png", std::process::id()));
        save(&path, &[0xFFFF_0000; 4], 2, 2).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        std::fs::remove_file(&path).unwrap();

        assert_eq!((2, 2), loaded.dimensions());
        assert_eq!(&Rgba([255, 0, 0, 255]), loaded.get_pixel(1, 1));
    }
}
