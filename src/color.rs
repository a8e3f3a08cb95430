use crate::vec3::Vec3;

/// Linear RGB with channels nominally in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl From<Vec3> for Color {
    fn from(v: Vec3) -> Self {
        Color {
            r: v.x,
            g: v.y,
            b: v.z,
        }
    }
}

impl Default for Color {
    fn default() -> Color {
        Color::black()
    }
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Color {
        Color { r, g, b }
    }

    pub fn from_mix(first: Color, second: Color, percentage: f32) -> Color {
        (1.0 - percentage) * first + percentage * second
    }

    pub const fn black() -> Color {
        Color::new(0.0, 0.0, 0.0)
    }

    pub const fn white() -> Color {
        Color::new(1.0, 1.0, 1.0)
    }

    /// Quantizes to 8 bits per channel. Channels are clamped to [0, 1] first and then
    /// rounded to the nearest integer, so out of range or NaN input can never wrap.
    pub fn to_rgb8(self) -> [u8; 3] {
        let quantize = |channel: f32| {
            let clamped = if channel.is_nan() {
                0.0
            } else {
                channel.clamp(0.0, 1.0)
            };
            f32::round(255.0 * clamped) as u8
        };
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }
}

impl_componentwise_ops!(Color { r, g, b });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mix_endpoints() {
        let sky = Color::new(0.5, 0.7, 1.0);
        assert_eq!(Color::from_mix(Color::white(), sky, 0.0), Color::white());
        assert_eq!(Color::from_mix(Color::white(), sky, 1.0), sky);
    }

    #[test]
    fn test_to_rgb8_rounds_and_clamps() {
        assert_eq!(Color::white().to_rgb8(), [255, 255, 255]);
        assert_eq!(Color::black().to_rgb8(), [0, 0, 0]);
        assert_eq!(Color::new(0.5, 0.25, 1.0).to_rgb8(), [128, 64, 255]);
        assert_eq!(Color::new(-0.3, 1.7, f32::NAN).to_rgb8(), [0, 255, 0]);
    }

    #[test]
    fn test_from_vec3() {
        let color = Color::from(0.5 * (Vec3::unit_z() + 1.0));
        assert_eq!(color, Color::new(0.5, 0.5, 1.0));
    }
}
