//! Camera for the side-scroller
//!
//! Orthographic projection of a fixed-size viewport in world units, scrolled
//! horizontally by the simulation's camera offset. World y grows downward.

use glam::{Mat4, Vec3};

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Create an orthographic camera showing `width` x `height` world units
    /// with the top-left corner of the view at the origin
    pub fn orthographic(width: f32, height: f32) -> Self {
        // Top edge is y = 0, matching the y-down world
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);

        Self {
            view: Mat4::IDENTITY,
            projection,
        }
    }

    /// Scroll the view so world x = `offset_x` lands on the left edge
    pub fn set_offset(&mut self, offset_x: f32) {
        self.view = Mat4::from_translation(Vec3::new(-offset_x, 0.0, 0.0));
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}
