use crate::color::Color;
use crate::ray::Ray;
use crate::sphere::{ray_hit_sphere, Sphere};
use crate::vec3::Vec3;

const SKY_COLOR: Color = Color::new(0.5, 0.7, 1.0);

/// Colors a ray by the surface normal of `sphere` if it is hit in front of the ray
/// origin (`t > 0`), otherwise by the sky gradient. Pure, no hidden state.
pub fn ray_hit_color(ray: &Ray, sphere: &Sphere) -> Color {
    let t = ray_hit_sphere(sphere, ray);
    if t > 0.0 {
        let position = ray.point_at_parameter(t);
        let normal = sphere.normal_at(position);
        // Remap each normal component from [-1, 1] to [0, 1]
        return Color::from(0.5 * (normal + Vec3::ones()));
    }

    background_color(ray)
}

/// Vertical white to sky blue gradient by the normalized direction's `y` component.
pub fn background_color(ray: &Ray) -> Color {
    let ray_unit_direction = ray.direction.normalized();
    let t = 0.5 * (ray_unit_direction.y + 1.0);
    Color::from_mix(Color::white(), SKY_COLOR, t)
}
