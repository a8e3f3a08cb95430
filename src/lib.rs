//! Renders a single sphere, shaded by its surface normal, in front of a sky gradient.

#[macro_use]
mod macros;

pub mod camera;
pub mod color;
pub mod config;
pub mod film;
pub mod output;
pub mod ray;
pub mod render;
pub mod shading;
pub mod sphere;
pub mod vec3;

pub use camera::Camera;
pub use color::Color;
pub use config::Config;
pub use film::Film;
pub use output::{encode_ppm, save_film};
pub use ray::Ray;
pub use render::render;
pub use shading::{background_color, ray_hit_color};
pub use sphere::{ray_hit_sphere, Sphere, NO_HIT};
pub use vec3::Vec3;
