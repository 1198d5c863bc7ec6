use image::RgbImage;

use crate::color::to_u8;

/// A 3x3 convolution kernel, row-major, applied as `sum(k * p) / scale`.
#[derive(Clone, Copy, Debug)]
pub struct Kernel3 {
    pub weights: [f32; 9],
    pub scale: f32,
}

/// Soft blur used as the "degenerate" image for sharpness.
pub const SMOOTH: Kernel3 = Kernel3 {
    weights: [1.0, 1.0, 1.0, 1.0, 5.0, 1.0, 1.0, 1.0, 1.0],
    scale: 13.0,
};

/// Discrete Laplacian: flat regions go to zero, edges light up.
pub const FIND_EDGES: Kernel3 = Kernel3 {
    weights: [-1.0, -1.0, -1.0, -1.0, 8.0, -1.0, -1.0, -1.0, -1.0],
    scale: 1.0,
};

/// Convolve every interior pixel of `img`. The one-pixel border is copied
/// from the input unchanged, so images narrower than 3 pixels pass through.
pub fn convolve3(img: &RgbImage, kernel: &Kernel3) -> RgbImage {
    let (width, height) = img.dimensions();
    let mut out = img.clone();
    if width < 3 || height < 3 {
        return out;
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let mut acc = [0.0_f32; 3];
            for ky in 0..3u32 {
                for kx in 0..3u32 {
                    let w = kernel.weights[(ky * 3 + kx) as usize];
                    let p = img.get_pixel(x + kx - 1, y + ky - 1).0;
                    acc[0] += w * p[0] as f32;
                    acc[1] += w * p[1] as f32;
                    acc[2] += w * p[2] as f32;
                }
            }
            let dst = out.get_pixel_mut(x, y);
            for c in 0..3 {
                dst.0[c] = to_u8(acc[c] / kernel.scale);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn flat_image_unchanged_by_smooth() {
        let img = RgbImage::from_pixel(5, 5, Rgb([80, 120, 200]));
        let out = convolve3(&img, &SMOOTH);
        assert_eq!(out, img);
    }

    #[test]
    fn flat_image_has_no_edges() {
        let img = RgbImage::from_pixel(5, 5, Rgb([80, 120, 200]));
        let out = convolve3(&img, &FIND_EDGES);
        assert_eq!(out.get_pixel(2, 2).0, [0, 0, 0]);
        // border copied
        assert_eq!(out.get_pixel(0, 0).0, [80, 120, 200]);
    }

    #[test]
    fn bright_dot_is_an_edge() {
        let mut img = RgbImage::from_pixel(5, 5, Rgb([0, 0, 0]));
        img.put_pixel(2, 2, Rgb([20, 20, 20]));
        let out = convolve3(&img, &FIND_EDGES);
        assert_eq!(out.get_pixel(2, 2).0, [160, 160, 160]);
        // neighbors see -20, clamped to 0
        assert_eq!(out.get_pixel(1, 2).0, [0, 0, 0]);
    }

    #[test]
    fn tiny_images_pass_through() {
        let img = RgbImage::from_pixel(2, 7, Rgb([1, 2, 3]));
        assert_eq!(convolve3(&img, &FIND_EDGES), img);
    }
}
