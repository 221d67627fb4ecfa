pub use glam::Vec3;

use crate::color::Rgb;

pub trait RgbAsVec3Ext {
    fn vec(&self) -> Vec3;
}

impl RgbAsVec3Ext for Rgb {
    fn vec(&self) -> Vec3 {
        Vec3::from_array(self.0)
    }
}

pub trait Vec3AsRgbExt {
    fn rgb(&self) -> Rgb;
}

impl Vec3AsRgbExt for Vec3 {
    fn rgb(&self) -> Rgb {
        Rgb(self.to_array())
    }
}

pub trait RefrReflVecExt {
    fn refract(self, normal: Vec3, ior: f32) -> Option<Vec3>;
    fn reflect(self, normal: Vec3) -> Vec3;
}

impl RefrReflVecExt for Vec3 {
    /// Mirror `self` around `normal`: `v - 2 (v·n) n`.
    fn reflect(self, normal: Vec3) -> Vec3 {
        self - (2.0 * self.dot(normal) * normal)
    }

    /// Snell's law. `ior` is the index of the medium on the side opposite to `normal`;
    /// a vector travelling along `normal` is leaving that medium.
    ///
    /// Returns None on total internal reflection.
    fn refract(self, mut normal: Vec3, ior: f32) -> Option<Vec3> {
        let mut cosi = self.dot(normal);
        let mut etai = 1.;
        let mut etat = ior;
        if cosi < 0.0 {
            cosi = -cosi;
        } else {
            (etat, etai) = (etai, etat);
            normal = -normal;
        }
        let eta = etai / etat;
        let k = 1. - eta * eta * (1. - cosi * cosi);

        if k < 0. {
            None
        } else {
            Some(eta * self + (eta * cosi - f32::sqrt(k)) * normal)
        }
    }
}

pub trait Vec3AsNonZero: Sized {
    fn into_non_zero(self, eps: f32) -> Option<Self>;

    /// Normalized copy of `self`, or None when `self` is too short to carry a direction
    fn into_unit(self) -> Option<Self>;
}

impl Vec3AsNonZero for Vec3 {
    fn into_non_zero(self, eps: f32) -> Option<Self> {
        use super::float::FloatAsExt;
        self.length_squared().into_non_zero(eps * eps).and(Some(self))
    }

    fn into_unit(self) -> Option<Self> {
        self.into_non_zero(f32::EPSILON)
            .filter(|v| v.is_finite())
            .map(Vec3::normalize)
    }
}
