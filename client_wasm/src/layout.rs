//! Canvas sizing

/// Width-to-height ratio of the playfield
pub const ASPECT_RATIO: f64 = 2.0;

/// Share of the container width the canvas may use
const WIDTH_SHARE: f64 = 0.9;

/// Share of the window height the canvas may use
const HEIGHT_SHARE: f64 = 0.7;

/// Canvas pixel size for a container of `container_width` in a window of
/// `window_height`. The canvas keeps a 2:1 aspect and never reports zero.
pub fn fit_canvas(container_width: f64, window_height: f64) -> (u32, u32) {
    let mut width = container_width * WIDTH_SHARE;
    let mut height = width / ASPECT_RATIO;

    let max_height = window_height * HEIGHT_SHARE;
    if height > max_height {
        height = max_height;
        width = height * ASPECT_RATIO;
    }

    (width.floor().max(1.0) as u32, height.floor().max(1.0) as u32)
}
