//! Frame contents: which rectangles to draw and in what colour
//!
//! Instances stay in world units; the camera uniform applies the scroll.

use game_core::{Aabb, Simulation};
use glam::Vec2;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, width, height
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    pub fn from_rect(rect: &Aabb, tint: [f32; 4]) -> Self {
        let size = rect.size();
        Self {
            transform: [rect.left(), rect.top(), size.x, size.y],
            tint,
        }
    }
}

pub const PLATFORM_TINT: [f32; 4] = [0.419_607_85, 0.274_509_82, 0.756_862_76, 1.0]; // #6b46c1
pub const ACTOR_TINT: [f32; 4] = [0.964_705_9, 0.678_431_4, 0.333_333_34, 1.0]; // #f6ad55
pub const HAT_TINT: [f32; 4] = [0.627_451, 0.682_352_96, 0.752_941_2, 1.0]; // #a0aec0
pub const BRIM_TINT: [f32; 4] = [0.443_137_26, 0.501_960_8, 0.588_235_3, 1.0]; // #718096
pub const BACKGROUND: [f64; 4] = [0.929_411_8, 0.949_019_6, 0.968_627_45, 1.0]; // #edf2f7

/// Hat and brim stacked on the actor's head, centred horizontally.
///
/// The hat is 1.2x the actor's width and 0.3x its height; the brim above it
/// is 0.8x wide and 0.1x tall.
pub fn hat_rects(pos: Vec2, size: Vec2) -> (Aabb, Aabb) {
    let hat_size = Vec2::new(size.x * 1.2, size.y * 0.3);
    let hat_pos = Vec2::new(pos.x - (hat_size.x - size.x) / 2.0, pos.y - hat_size.y);

    let brim_size = Vec2::new(size.x * 0.8, size.y * 0.1);
    let brim_pos = Vec2::new(
        pos.x - (brim_size.x - size.x) / 2.0,
        hat_pos.y - brim_size.y,
    );

    (
        Aabb::from_pos_size(hat_pos, hat_size),
        Aabb::from_pos_size(brim_pos, brim_size),
    )
}

/// Collect this frame's instances: visible platforms, then the actor with
/// its hat and brim on top.
pub fn build_instances(sim: &Simulation, out: &mut Vec<InstanceData>) {
    out.clear();

    out.extend(
        sim.level
            .visible_platforms(sim.camera_x())
            .map(|platform| InstanceData::from_rect(platform, PLATFORM_TINT)),
    );

    if let Some(actor) = sim.actor() {
        let body = Aabb::from_pos_size(actor.pos, actor.size);
        let (hat, brim) = hat_rects(actor.pos, actor.size);
        out.push(InstanceData::from_rect(&body, ACTOR_TINT));
        out.push(InstanceData::from_rect(&hat, HAT_TINT));
        out.push(InstanceData::from_rect(&brim, BRIM_TINT));
    }
}

/// Upper bound on instances per frame for `sim`
pub fn max_instances(sim: &Simulation) -> usize {
    sim.level.platforms.len() + 3
}
