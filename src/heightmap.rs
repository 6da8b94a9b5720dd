//! Coarse height-map sampling and normalization.
//!
//! The height field is continuous; the rasterizer only needs it on a coarse
//! lattice (one sample per `resolution`-sized block of the canvas), so the
//! field is evaluated lazily here and the observed range is rescaled to
//! [0, 1] before banding.

/// Normalized value used when the sampled field is perfectly flat
/// (max == min). Keeps the banding pass free of NaN/Inf.
const FLAT_FIELD_FALLBACK: f64 = 0.5;

/// A rectangular grid of height samples.
pub struct HeightMap {
    pub width: usize,
    pub height: usize,
    data: Vec<f64>,
    min: f64,
    max: f64,
}

impl HeightMap {
    /// Sample a height field on a coarse lattice covering a `size`-pixel
    /// square canvas. The grid has `size / resolution` cells per axis; the
    /// cell at (x, y) is sampled at canvas coordinates
    /// `(x * resolution, y * resolution)`. Min and max are tracked during
    /// the fill so normalization needs no second scan.
    pub fn sample<F>(size: usize, resolution: usize, field: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        let cells = size / resolution;
        let mut data = Vec::with_capacity(cells * cells);
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for y in 0..cells {
            for x in 0..cells {
                let h = field((x * resolution) as f64, (y * resolution) as f64);
                if h < min {
                    min = h;
                }
                if h > max {
                    max = h;
                }
                data.push(h);
            }
        }

        Self {
            width: cells,
            height: cells,
            data,
            min,
            max,
        }
    }

    /// Build a map from explicit row-major values. Useful for driving the
    /// rasterizer with a synthetic grid.
    pub fn from_values(width: usize, height: usize, data: Vec<f64>) -> Self {
        assert_eq!(data.len(), width * height, "grid must be fully populated");
        let min = data.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        Self {
            width,
            height,
            data,
            min,
            max,
        }
    }

    /// Rescale every cell from the observed [min, max] to [0, 1], in place.
    /// A perfectly flat field maps to `FLAT_FIELD_FALLBACK` everywhere.
    pub fn normalize(&mut self) {
        let range = self.max - self.min;
        if range == 0.0 {
            self.data.fill(FLAT_FIELD_FALLBACK);
        } else {
            for v in &mut self.data {
                *v = (*v - self.min) / range;
            }
        }
        self.min = 0.0;
        self.max = 1.0;
    }

    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[y * self.width + x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dimensions() {
        let map = HeightMap::sample(512, 2, |_, _| 0.25);
        assert_eq!(map.width, 256);
        assert_eq!(map.height, 256);
    }

    #[test]
    fn test_sample_coordinates_scaled_by_resolution() {
        let map = HeightMap::sample(8, 2, |x, y| x * 10.0 + y);
        // Cell (3, 1) samples the field at canvas coords (6, 2)
        assert_eq!(map.get(3, 1), 62.0);
    }

    #[test]
    fn test_normalize_invariant() {
        let mut map = HeightMap::from_values(2, 2, vec![-3.0, 1.0, 5.0, 0.0]);
        map.normalize();

        let values: Vec<f64> = (0..2)
            .flat_map(|y| (0..2).map(move |x| (x, y)))
            .map(|(x, y)| map.get(x, y))
            .collect();

        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(min, 0.0);
        assert_eq!(max, 1.0);
        // (1.0 - -3.0) / (5.0 - -3.0) = 0.5
        assert!((map.get(1, 0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_flat_field_fallback() {
        let mut map = HeightMap::from_values(3, 1, vec![0.7, 0.7, 0.7]);
        map.normalize();
        for x in 0..3 {
            assert_eq!(map.get(x, 0), 0.5);
        }
    }
}
