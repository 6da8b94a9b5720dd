//! Contour-band rasterizer: paint a two-color canvas from a normalized
//! height map by quantizing each cell into bands and inking the odd ones.

use image::{ImageBuffer, Rgb, RgbImage};

use crate::heightmap::HeightMap;

// =============================================================================
// ICON CONSTANTS
// =============================================================================

// E-reader theme
pub const BG_COLOR: [u8; 3] = [232, 230, 224]; // #e8e6e0
pub const LINE_COLOR: [u8; 3] = [90, 74, 58]; // #5a4a3a

/// Parameters for the banding rasterizer
pub struct IconParams {
    /// Canvas edge length in pixels
    pub size: usize,
    /// Downsampling factor: one height sample per resolution-sized block
    pub resolution: usize,
    /// Number of quantized height bands
    pub contour_count: u32,
}

impl Default for IconParams {
    fn default() -> Self {
        Self {
            size: 512,
            resolution: 2,
            contour_count: 10,
        }
    }
}

/// Quantize a normalized height into its contour band.
pub fn contour_band(normalized: f64, contour_count: u32) -> u32 {
    (normalized * contour_count as f64) as u32
}

/// Odd bands are inked, even bands show the background.
pub fn is_line_band(band: u32) -> bool {
    band % 2 == 1
}

/// Paint the full-resolution canvas from a normalized height map.
///
/// The canvas starts pre-filled with the background color; each pixel reads
/// the height of its owning coarse cell and is inked when that cell's band
/// is odd. Pixels whose cell would fall outside the map (canvas edge when
/// `size` is not a multiple of `resolution`) keep the background color.
pub fn render_contours(map: &HeightMap, params: &IconParams) -> RgbImage {
    let size = params.size as u32;
    let mut img: RgbImage = ImageBuffer::from_pixel(size, size, Rgb(BG_COLOR));

    for py in 0..params.size {
        for px in 0..params.size {
            let hx = px / params.resolution;
            let hy = py / params.resolution;
            if hx >= map.width || hy >= map.height {
                continue;
            }

            let band = contour_band(map.get(hx, hy), params.contour_count);
            if is_line_band(band) {
                img.put_pixel(px as u32, py as u32, Rgb(LINE_COLOR));
            }
        }
    }

    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_quantization_and_parity() {
        let values = [0.05, 0.15, 0.25, 0.95];
        let expected_bands = [0, 1, 2, 9];
        let expected_inked = [false, true, false, true];

        for i in 0..values.len() {
            let band = contour_band(values[i], 10);
            assert_eq!(band, expected_bands[i]);
            assert_eq!(is_line_band(band), expected_inked[i]);
        }
    }

    #[test]
    fn test_canvas_dimensions_and_two_colors() {
        let mut map = HeightMap::sample(16, 2, |x, y| (x * 31.7 + y * 17.3).sin());
        map.normalize();
        let params = IconParams {
            size: 16,
            resolution: 2,
            contour_count: 10,
        };
        let img = render_contours(&map, &params);

        assert_eq!(img.width(), 16);
        assert_eq!(img.height(), 16);
        for pixel in img.pixels() {
            assert!(
                pixel.0 == BG_COLOR || pixel.0 == LINE_COLOR,
                "unexpected color {:?}",
                pixel.0
            );
        }
    }

    #[test]
    fn test_edge_pixels_outside_map_stay_background() {
        // size 9 with resolution 2 leaves a 4x4 map; pixels in row/column 8
        // map to cell index 4, which is out of bounds. A flat field
        // normalizes to 0.5 everywhere, band 5, so every in-bounds pixel is
        // inked and only the edge strip stays background.
        let mut map = HeightMap::sample(9, 2, |_, _| 0.3);
        map.normalize();
        let params = IconParams {
            size: 9,
            resolution: 2,
            contour_count: 10,
        };
        let img = render_contours(&map, &params);

        for py in 0..9u32 {
            for px in 0..9u32 {
                let expected = if px == 8 || py == 8 { BG_COLOR } else { LINE_COLOR };
                assert_eq!(img.get_pixel(px, py).0, expected, "pixel ({px},{py})");
            }
        }
    }

    #[test]
    fn test_end_to_end_staircase_field() {
        // Samples land at canvas coords (0,0)..(6,6) step 2, so x+y mod 4 is
        // 0 or 2 and the heights are 0.0 or 0.5. Normalization maps them to
        // 0 and 1, which with two bands quantize to 0 and 2. Both even, so
        // every pixel keeps the background.
        let mut map = HeightMap::sample(8, 2, |x, y| (x + y).rem_euclid(4.0) / 4.0);
        map.normalize();
        let params = IconParams {
            size: 8,
            resolution: 2,
            contour_count: 2,
        };
        let img = render_contours(&map, &params);

        assert_eq!(img.dimensions(), (8, 8));
        for pixel in img.pixels() {
            assert_eq!(pixel.0, BG_COLOR);
        }
    }

    #[test]
    fn test_end_to_end_ramp_field() {
        // A horizontal ramp: coarse columns sample 0, 1/3, 2/3, 1 which
        // normalize unchanged and quantize (2 bands) to 0, 0, 1, 2. Only
        // band 1 is odd, so exactly the pixels over coarse column 2
        // (px 4 and 5) are inked.
        let mut map = HeightMap::sample(8, 2, |x, _| x / 6.0);
        map.normalize();
        let params = IconParams {
            size: 8,
            resolution: 2,
            contour_count: 2,
        };
        let img = render_contours(&map, &params);

        for py in 0..8u32 {
            for px in 0..8u32 {
                let expected = if px == 4 || px == 5 { LINE_COLOR } else { BG_COLOR };
                assert_eq!(img.get_pixel(px, py).0, expected, "pixel ({px},{py})");
            }
        }
    }
}
