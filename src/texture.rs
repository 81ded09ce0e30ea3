//! Procedural RGBA8 textures.
//!
//! The viewer ships no image assets; each surface pattern is generated at
//! startup and uploaded once.

/// CPU-side pixel data for a square RGBA8 texture
#[derive(Debug, Clone)]
pub struct TextureData {
    pub size: u32,
    pub pixels: Vec<u8>,
}

impl TextureData {
    fn from_fn(size: u32, mut pixel: impl FnMut(u32, u32) -> [u8; 4]) -> Self {
        let mut pixels = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            for x in 0..size {
                pixels.extend_from_slice(&pixel(x, y));
            }
        }
        Self { size, pixels }
    }
}

/// Two-tone checkerboard (floor)
pub fn checkerboard(size: u32, cells: u32, light: [u8; 4], dark: [u8; 4]) -> TextureData {
    let cell = (size / cells).max(1);
    TextureData::from_fn(size, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            light
        } else {
            dark
        }
    })
}

/// Vertical grain stripes with a slow wobble (wood surfaces)
pub fn wood_grain(size: u32) -> TextureData {
    TextureData::from_fn(size, |x, y| {
        let wobble = (y as f32 * 0.11).sin() * 3.0;
        let band = ((x as f32 + wobble) * 0.35).sin() * 0.5 + 0.5;
        let r = 120.0 + band * 60.0;
        let g = 72.0 + band * 38.0;
        let b = 32.0 + band * 18.0;
        [r as u8, g as u8, b as u8, 255]
    })
}

/// Interleaved warp/weft pattern (speaker cloth, fabric)
pub fn weave(size: u32) -> TextureData {
    TextureData::from_fn(size, |x, y| {
        let warp = (x / 4) % 2 == 0;
        let weft = (y / 4) % 2 == 0;
        let value = match (warp, weft) {
            (true, true) => 58,
            (false, false) => 46,
            _ => 30,
        };
        [value, value, value + 6, 255]
    })
}

/// Horizontal brushed-metal streaks (hardware, lamp pole)
pub fn brushed_metal(size: u32) -> TextureData {
    TextureData::from_fn(size, |x, y| {
        // Cheap deterministic streak noise per row
        let seed = y.wrapping_mul(2654435761).wrapping_add(x / 16);
        let noise = (seed >> 7) % 24;
        let value = 150 + noise as u8;
        [value, value, value + 4, 255]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkerboard_alternates_cells() {
        let texture = checkerboard(8, 2, [255, 255, 255, 255], [0, 0, 0, 255]);
        assert_eq!(texture.pixels.len(), 8 * 8 * 4);

        let pixel = |x: usize, y: usize| {
            let offset = (y * 8 + x) * 4;
            texture.pixels[offset]
        };
        assert_eq!(pixel(0, 0), 255);
        assert_eq!(pixel(4, 0), 0);
        assert_eq!(pixel(0, 4), 0);
        assert_eq!(pixel(4, 4), 255);
    }

    #[test]
    fn generators_fill_full_buffers() {
        for texture in [wood_grain(64), weave(64), brushed_metal(64)] {
            assert_eq!(texture.size, 64);
            assert_eq!(texture.pixels.len(), 64 * 64 * 4);
        }
    }

    #[test]
    fn textures_are_opaque() {
        let texture = wood_grain(16);
        for alpha in texture.pixels.chunks_exact(4).map(|p| p[3]) {
            assert_eq!(alpha, 255);
        }
    }
}
