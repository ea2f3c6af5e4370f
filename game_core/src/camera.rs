/// Horizontal scroll offset applied to every world-to-screen projection
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    pub x: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.x = 0.0;
    }
}

/// Camera offset that centres `actor_x` in the viewport, clamped so the view
/// never leaves `[0, level_width]`. Levels that fit in the viewport are
/// centred instead, which yields a non-positive offset.
pub fn follow_x(actor_x: f32, viewport_width: f32, level_width: f32) -> f32 {
    if level_width <= viewport_width {
        return (level_width - viewport_width) / 2.0;
    }
    let target = actor_x - viewport_width / 2.0;
    target.clamp(0.0, level_width - viewport_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_actor_inside_level() {
        for x in [400.5, 700.0, 1100.0, 1799.0] {
            assert_eq!(follow_x(x, 800.0, 2200.0), x - 400.0);
        }
    }

    #[test]
    fn test_clamps_at_level_edges() {
        assert_eq!(follow_x(10.0, 800.0, 2200.0), 0.0);
        assert_eq!(follow_x(2150.0, 800.0, 2200.0), 1400.0);
    }

    #[test]
    fn test_narrow_level_is_centred() {
        for x in [-50.0, 0.0, 120.0, 900.0] {
            assert_eq!(follow_x(x, 800.0, 600.0), -100.0);
        }
    }

    #[test]
    fn test_level_as_wide_as_viewport() {
        assert_eq!(follow_x(700.0, 800.0, 800.0), 0.0);
    }
}
