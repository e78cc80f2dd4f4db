// SPDX-License-Identifier: MPL-2.0
//! Window icon.
//!
//! The branding SVG is embedded and rasterized at startup. A rendering
//! failure leaves the window with the platform default icon.

use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &str = include_str!("../assets/branding/rover_console.svg");

/// Edge length of the rasterized icon, in pixels.
pub const ICON_SIZE: u32 = 128;

/// Rasterize the embedded SVG to RGBA pixels, `ICON_SIZE` square.
fn rasterize(size: u32) -> Option<Vec<u8>> {
    let tree = match usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()) {
        Ok(tree) => tree,
        Err(err) => {
            tracing::warn!("window icon SVG rejected: {err}");
            return None;
        }
    };

    let original = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        size as f32 / original.width(),
        size as f32 / original.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap.take())
}

/// Window icon, or `None` if the SVG cannot be rendered.
pub fn load_window_icon() -> Option<Icon> {
    let rgba = rasterize(ICON_SIZE)?;
    icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).ok()
}
