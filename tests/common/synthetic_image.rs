/// Renders a bright page-like rectangle on a dark background.
///
/// The rectangle spans `[x0, x1) x [y0, y1)` in pixel coordinates.
pub fn page_u8(
    width: usize,
    height: usize,
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(x0 < x1 && x1 <= width, "page x-range out of bounds");
    assert!(y0 < y1 && y1 <= height, "page y-range out of bounds");

    let mut img = vec![32u8; width * height];
    for row in img.chunks_exact_mut(width).take(y1).skip(y0) {
        for px in &mut row[x0..x1] {
            *px = 220;
        }
    }
    img
}

/// Uniform mid-gray image with no structure at all.
pub fn flat_u8(width: usize, height: usize) -> Vec<u8> {
    vec![128u8; width * height]
}
