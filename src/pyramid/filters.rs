use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Normalised 5-tap Gaussian kernel `[1, 4, 6, 4, 1] / 16`.
const GAUSSIAN_5TAP: [f32; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];

/// Applies the separable 5-tap Gaussian with clamped borders.
pub fn gaussian_blur_5tap(src: &ImageF32) -> ImageF32 {
    let w = src.w;
    let h = src.h;
    let radius = (GAUSSIAN_5TAP.len() / 2) as isize;

    // Horizontal pass
    let mut tmp = ImageF32::new(w, h);
    for y in 0..h {
        let src_row = src.row(y);
        let dst_row = tmp.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in GAUSSIAN_5TAP.iter().enumerate() {
                let sx = (x as isize + k as isize - radius).clamp(0, w as isize - 1) as usize;
                acc += src_row[sx] * tap;
            }
            *dst_px = acc;
        }
    }

    // Vertical pass
    let mut out = ImageF32::new(w, h);
    for y in 0..h {
        let dst_row = out.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in GAUSSIAN_5TAP.iter().enumerate() {
                let sy = (y as isize + k as isize - radius).clamp(0, h as isize - 1) as usize;
                acc += tmp.get(x, sy) * tap;
            }
            *dst_px = acc;
        }
    }
    out
}
