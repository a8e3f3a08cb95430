use crate::ray::Ray;
use crate::vec3::Vec3;

/// Pinhole camera at `origin` looking down -z onto a viewport `focal_length` away.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    origin: Vec3,

    left_bottom_corner: Vec3,
    dim_horizontal: Vec3,
    dim_vertical: Vec3,
}

impl Camera {
    pub fn new(origin: Vec3, aspect_ratio: f32, viewport_height: f32, focal_length: f32) -> Camera {
        let viewport_width = aspect_ratio * viewport_height;

        let dim_horizontal = Vec3::new(viewport_width, 0.0, 0.0);
        let dim_vertical = Vec3::new(0.0, viewport_height, 0.0);
        let depth = Vec3::new(0.0, 0.0, focal_length);
        let left_bottom_corner = origin - dim_horizontal / 2.0 - dim_vertical / 2.0 - depth;

        Camera {
            origin,
            left_bottom_corner,
            dim_horizontal,
            dim_vertical,
        }
    }

    /// `u` runs left to right and `v` bottom to top, both over [0, 1].
    pub fn get_ray(&self, u: f32, v: f32) -> Ray {
        let direction =
            self.left_bottom_corner + u * self.dim_horizontal + v * self.dim_vertical - self.origin;
        Ray::new(self.origin, direction)
    }
}
