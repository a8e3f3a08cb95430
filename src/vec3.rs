#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for Vec3 {
    fn default() -> Vec3 {
        Vec3::zero()
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from([x, y, z]: [f32; 3]) -> Vec3 {
        Vec3 { x, y, z }
    }
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }

    pub const fn zero() -> Vec3 {
        Vec3::new(0.0, 0.0, 0.0)
    }

    pub const fn ones() -> Vec3 {
        Vec3::new(1.0, 1.0, 1.0)
    }

    pub const fn unit_x() -> Vec3 {
        Vec3::new(1.0, 0.0, 0.0)
    }

    pub const fn unit_y() -> Vec3 {
        Vec3::new(0.0, 1.0, 0.0)
    }

    pub const fn unit_z() -> Vec3 {
        Vec3::new(0.0, 0.0, 1.0)
    }

    pub fn length(self) -> f32 {
        f32::sqrt(self.length_squared())
    }

    pub fn length_squared(self) -> f32 {
        Vec3::dot(self, self)
    }

    /// NOTE: The zero vector has no direction, normalizing it yields NaN components
    pub fn normalized(self) -> Vec3 {
        self / self.length()
    }

    pub fn dot(a: Vec3, b: Vec3) -> f32 {
        a.x * b.x + a.y * b.y + a.z * b.z
    }
}

impl_componentwise_ops!(Vec3 { x, y, z });
