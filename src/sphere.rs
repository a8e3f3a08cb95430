use crate::ray::Ray;
use crate::vec3::Vec3;

/// Returned by [`ray_hit_sphere`] when the ray's line misses the sphere entirely.
pub const NO_HIT: f32 = -1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub const fn new(center: Vec3, radius: f32) -> Sphere {
        Sphere { center, radius }
    }

    /// Outward unit normal at a point on the surface
    pub fn normal_at(&self, position: Vec3) -> Vec3 {
        (position - self.center).normalized()
    }
}

/// Intersects the infinite line through `ray` with `sphere` by solving
/// `a*t^2 + b*t + c = 0`, where `a` is the squared length of the (not necessarily
/// normalized) direction.
///
/// Returns the smaller root `(-b - sqrt(b^2 - 4ac)) / 2a` as is, or [`NO_HIT`] if the
/// discriminant is negative. The root is NOT clamped: it is negative whenever the near
/// intersection lies behind the ray origin, including when the whole sphere is behind it.
/// Callers decide visibility themselves, the shader only accepts `t > 0`.
///
/// NOTE: `ray.direction` must not be the zero vector
pub fn ray_hit_sphere(sphere: &Sphere, ray: &Ray) -> f32 {
    let dir_center_to_origin = ray.origin - sphere.center;
    let a = Vec3::dot(ray.direction, ray.direction);
    let b = 2.0 * Vec3::dot(dir_center_to_origin, ray.direction);
    let c = Vec3::dot(dir_center_to_origin, dir_center_to_origin) - sphere.radius * sphere.radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 {
        return NO_HIT;
    }

    (-b - f32::sqrt(discriminant)) / (2.0 * a)
}
