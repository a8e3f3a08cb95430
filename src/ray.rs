use crate::vec3::Vec3;

/// A half-line starting at `origin`. The direction does not need to be normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Vec3, direction: Vec3) -> Ray {
        Ray { origin, direction }
    }

    /// Returns `origin + t * direction`. `t` is measured in multiples of the direction's
    /// length and may be any value, including negative ones behind the origin.
    pub fn point_at_parameter(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}
