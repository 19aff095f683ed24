use glam::{Quat, Vec2, Vec3};

/// A value type that can be animated between two endpoints.
pub trait Interpolatable: Copy + Sized {
    /// Interpolates between `start` and `end` at normalized position `t`.
    fn lerp(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn lerp(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolatable for Vec2 {
    fn lerp(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

impl Interpolatable for Vec3 {
    fn lerp(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

impl Interpolatable for Quat {
    // Rotations interpolate along the shortest arc.
    fn lerp(start: Self, end: Self, t: f32) -> Self {
        start.slerp(end, t)
    }
}
