/// A linear RGB radiance triple, nominally in [0, 1] per channel.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb(pub [f32; 3]);

impl Rgb {
    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self(arr)
    }

    pub const fn to_array(self) -> [f32; 3] {
        self.0
    }

    /// Clamps every channel to [0, 1]. NaN channels become 0.
    pub fn clamp(self) -> Self {
        Self(self.0.map(|c| if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) }))
    }

    pub fn is_finite(self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }

    /// Scales to [0, 255], clamps and truncates each channel.
    pub fn to_byte_array(self) -> [u8; 3] {
        self.0.map(|c| {
            let scaled = c * 255.;
            if scaled.is_nan() {
                0
            } else {
                scaled.clamp(0.0, 255.0) as u8
            }
        })
    }
}

impl std::ops::Add for Rgb {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_array([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
        ])
    }
}

impl std::ops::Mul<Rgb> for f32 {
    type Output = Rgb;

    fn mul(self, rhs: Rgb) -> Self::Output {
        Rgb::from_array([self * rhs.0[0], self * rhs.0[1], self * rhs.0[2]])
    }
}

impl From<[f32; 3]> for Rgb {
    fn from(val: [f32; 3]) -> Self {
        Rgb::from_array(val)
    }
}

pub mod linear {
    use super::Rgb;

    pub const WHITE: Rgb = Rgb::from_array([1.0, 1.0, 1.0]);
    pub const BLACK: Rgb = Rgb::from_array([0.0, 0.0, 0.0]);
    pub const RED: Rgb = Rgb::from_array([1.0, 0.0, 0.0]);
    pub const BLUE: Rgb = Rgb::from_array([0.0, 0.0, 1.0]);
}
