use crate::camera::Camera;
use crate::sphere::Sphere;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ImageSettings {
    pub width: usize,
    pub height: usize,
    pub output: PathBuf,
}

impl Default for ImageSettings {
    fn default() -> Self {
        ImageSettings {
            width: 320,
            height: 180,
            output: PathBuf::from("image.ppm"),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CameraSettings {
    pub origin: [f32; 3],
    pub focal_length: f32,
    pub viewport_height: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        CameraSettings {
            origin: [0.0, 0.0, 0.0],
            focal_length: 1.0,
            viewport_height: 2.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SphereSettings {
    pub center: [f32; 3],
    pub radius: f32,
}

impl Default for SphereSettings {
    fn default() -> Self {
        SphereSettings {
            center: [0.0, 0.0, -1.0],
            radius: 0.5,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SceneSettings {
    pub sphere: SphereSettings,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    /// Worker threads for shading scanlines, 0 lets rayon decide
    pub threads: usize,
}

/// Everything needed to render one image. Missing TOML tables and keys fall back to
/// the defaults: a 320x180 image of a sphere of radius 0.5 at (0, 0, -1).
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub image: ImageSettings,
    pub camera: CameraSettings,
    pub scene: SceneSettings,
    pub render: RenderSettings,
}

impl Config {
    pub fn from_toml_str(input: &str) -> Result<Config> {
        let config: Config = toml::from_str(input).context("invalid config")?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Config> {
        let input = fs::read_to_string(path)
            .with_context(|| format!("couldn't read config file {}", path.display()))?;
        Config::from_toml_str(&input).with_context(|| format!("in {}", path.display()))
    }

    /// Rejects settings that would produce an empty image or degenerate rays.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.image.width > 0 && self.image.height > 0,
            "image dimensions must be non-zero, got {}x{}",
            self.image.width,
            self.image.height
        );
        ensure!(
            self.image.width <= u32::MAX as usize && self.image.height <= u32::MAX as usize,
            "image dimensions {}x{} are too large",
            self.image.width,
            self.image.height
        );
        ensure!(
            self.camera.focal_length > 0.0,
            "focal length must be positive, got {}",
            self.camera.focal_length
        );
        ensure!(
            self.camera.viewport_height > 0.0,
            "viewport height must be positive, got {}",
            self.camera.viewport_height
        );
        ensure!(
            self.scene.sphere.radius > 0.0,
            "sphere radius must be positive, got {}",
            self.scene.sphere.radius
        );
        Ok(())
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.image.width as f32 / self.image.height as f32
    }

    pub fn camera(&self) -> Camera {
        Camera::new(
            self.camera.origin.into(),
            self.aspect_ratio(),
            self.camera.viewport_height,
            self.camera.focal_length,
        )
    }

    pub fn sphere(&self) -> Sphere {
        Sphere::new(self.scene.sphere.center.into(), self.scene.sphere.radius)
    }
}
