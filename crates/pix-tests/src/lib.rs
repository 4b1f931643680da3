//! Shared fixtures and assertions for PIX-RS integration tests.

#![warn(missing_docs)]

use pix_core::{ChannelLayout, ImageBuffer, ValueRange};

/// Builds a normalized RGB gradient: red rises along columns, green
/// along rows, blue fixed at 0.25.
pub fn gradient_rgb(height: usize, width: usize) -> ImageBuffer {
    let mut data = Vec::with_capacity(height * width * 3);
    for r in 0..height {
        for c in 0..width {
            data.push(c as f32 / (width.max(2) - 1) as f32);
            data.push(r as f32 / (height.max(2) - 1) as f32);
            data.push(0.25);
        }
    }
    ImageBuffer::from_data(height, width, ChannelLayout::Rgb, ValueRange::Normalized, data)
        .expect("gradient shape is consistent")
}

/// Builds a denormalized RGB checkerboard of `dark` and `light` cells.
pub fn checker_rgb(height: usize, width: usize, dark: f32, light: f32) -> ImageBuffer {
    let mut img = ImageBuffer::new(height, width, ChannelLayout::Rgb, ValueRange::Denormalized);
    for r in 0..height {
        for c in 0..width {
            let v = if (r + c) % 2 == 0 { dark } else { light };
            img.set_pixel(r, c, &[v, v, v]);
        }
    }
    img
}

/// Asserts two buffers match in shape, tag, and components (within
/// `epsilon`).
///
/// # Panics
///
/// Panics with the first differing component when the buffers diverge.
pub fn assert_buffers_close(got: &ImageBuffer, want: &ImageBuffer, epsilon: f32) {
    assert_eq!(got.shape(), want.shape(), "shape mismatch");
    assert_eq!(got.range(), want.range(), "range tag mismatch");
    for (i, (g, w)) in got.data().iter().zip(want.data()).enumerate() {
        assert!(
            (g - w).abs() <= epsilon,
            "component {i} differs: got {g}, want {w} (epsilon {epsilon})"
        );
    }
}
