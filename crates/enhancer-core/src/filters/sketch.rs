use image::{GrayImage, Luma, RgbImage};

use crate::color::{expand_gray, luma_plane, to_u8};
use crate::filters::ImageFilter;

const ITERATIONS: u32 = 3;

/// Gradient-to-darkness gain for pencil strokes.
const STROKE_GAIN: f32 = 4.0;

/// Pencil-sketch rendering.
///
/// The luma is smoothed with an edge-aware recursive filter (domain
/// transform), which flattens texture but keeps object boundaries. Strokes
/// are drawn where the smoothed luma changes quickly, over white paper
/// tinted by the underlying tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SketchConfig {
    /// Spatial extent of the smoothing, in pixels.
    pub sigma_s: f32,
    /// Range extent: luma steps much larger than this are treated as edges.
    pub sigma_r: f32,
    /// How much of the underlying tone shows through the paper.
    pub shade_factor: f32,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            sigma_s: 60.0,
            sigma_r: 0.07,
            shade_factor: 0.05,
        }
    }
}

impl ImageFilter for SketchConfig {
    fn name(&self) -> &str {
        "sketch"
    }

    fn apply(&self, input: &RgbImage) -> RgbImage {
        let (width, height) = input.dimensions();
        let luma: Vec<f32> = luma_plane(input)
            .pixels()
            .map(|p| p.0[0] as f32 / 255.0)
            .collect();
        let smooth = domain_transform(&luma, width, height, self.sigma_s, self.sigma_r);
        let shade = self.shade_factor.clamp(0.0, 1.0);

        let w = width as usize;
        let h = height as usize;
        let mut out = GrayImage::new(width, height);
        for y in 0..h {
            for x in 0..w {
                let at = |xx: usize, yy: usize| smooth[yy * w + xx];
                let gx = at((x + 1).min(w - 1), y) - at(x.saturating_sub(1), y);
                let gy = at(x, (y + 1).min(h - 1)) - at(x, y.saturating_sub(1));
                let grad = (gx * gx + gy * gy).sqrt();

                let stroke = (1.0 - grad * STROKE_GAIN).clamp(0.0, 1.0);
                let paper = 1.0 - shade * (1.0 - at(x, y));
                out.put_pixel(x as u32, y as u32, Luma([to_u8(255.0 * stroke * paper)]));
            }
        }
        expand_gray(&out)
    }
}

/// Recursive-filter domain transform (Gastal & Oliveira 2011) on a single
/// plane, alternating horizontal and vertical passes.
fn domain_transform(plane: &[f32], width: u32, height: u32, sigma_s: f32, sigma_r: f32) -> Vec<f32> {
    let w = width as usize;
    let h = height as usize;
    let mut out = plane.to_vec();
    if w == 0 || h == 0 {
        return out;
    }

    let sigma_s = sigma_s.max(f32::EPSILON);
    let ratio = sigma_s / sigma_r.max(f32::EPSILON);

    // Transformed-domain distances between neighbors, taken from the input.
    let mut dx = vec![1.0_f32; w * h];
    let mut dy = vec![1.0_f32; w * h];
    for y in 0..h {
        for x in 1..w {
            let i = y * w + x;
            dx[i] = 1.0 + ratio * (plane[i] - plane[i - 1]).abs();
        }
    }
    for y in 1..h {
        for x in 0..w {
            let i = y * w + x;
            dy[i] = 1.0 + ratio * (plane[i] - plane[i - w]).abs();
        }
    }

    let n = ITERATIONS as i32;
    let denom = (4.0_f32.powi(n) - 1.0).sqrt();
    for i in 0..n {
        let sigma_h = sigma_s * 3.0_f32.sqrt() * 2.0_f32.powi(n - i - 1) / denom;
        let a = (-(2.0_f32.sqrt()) / sigma_h).exp();

        for y in 0..h {
            recursive_pass(&mut out, &dx, a, y * w, 1, w);
        }
        for x in 0..w {
            recursive_pass(&mut out, &dy, a, x, w, h);
        }
    }
    out
}

/// One causal + anti-causal sweep over `len` samples starting at `start`
/// with the given `stride`.
fn recursive_pass(data: &mut [f32], dist: &[f32], a: f32, start: usize, stride: usize, len: usize) {
    for k in 1..len {
        let i = start + k * stride;
        let v = a.powf(dist[i]);
        data[i] += v * (data[i - stride] - data[i]);
    }
    for k in (0..len.saturating_sub(1)).rev() {
        let i = start + k * stride;
        let v = a.powf(dist[i + stride]);
        data[i] += v * (data[i + stride] - data[i]);
    }
}
