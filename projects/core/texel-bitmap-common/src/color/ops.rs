//! Per channel arithmetic, equality and alpha helpers.

use super::channel::Channel;
use super::unit::Color;
use core::hash::{Hash, Hasher};
use core::ops::{AddAssign, MulAssign, SubAssign};

impl<T: Channel> Color<T> {
    #[inline]
    fn zip_with(&mut self, rhs: &Self, op: impl Fn(T, T) -> T) {
        self.r = op(self.r, rhs.r);
        self.g = op(self.g, rhs.g);
        self.b = op(self.b, rhs.b);
        self.a = op(self.a, rhs.a);
    }

    /// Compares every channel with an explicit tolerance.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.r.near(other.r, epsilon)
            && self.g.near(other.g, epsilon)
            && self.b.near(other.b, epsilon)
            && self.a.near(other.a, epsilon)
    }

    /// Sets alpha from a unit value, clamped.
    pub fn set_alpha(&mut self, alpha: f32) -> &mut Self {
        self.a = T::from_unit_clamped(alpha);
        self
    }

    /// Returns the colour with RGB multiplied by alpha.
    pub fn premultiply_alpha(&self) -> Self {
        let [r, g, b, a] = self.rgba();
        let mut out = Self::default();
        out.setup_from_rgba(r * a, g * a, b * a, a);
        out
    }

    /// Linear interpolation `from + t * (to - from)` over the unit RGBA values.
    pub fn blend(from: &Self, to: &Self, t: f32) -> Self {
        let from = from.rgba();
        let to = to.rgba();
        let mut mixed = [0.0f32; 4];
        for (index, out) in mixed.iter_mut().enumerate() {
            *out = from[index] + t * (to[index] - from[index]);
        }
        Self::from_rgba_array(mixed)
    }
}

impl<T: Channel> AddAssign for Color<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.zip_with(&rhs, T::add);
    }
}

impl<T: Channel> SubAssign for Color<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.zip_with(&rhs, T::sub);
    }
}

impl<T: Channel> MulAssign for Color<T> {
    fn mul_assign(&mut self, rhs: Self) {
        self.zip_with(&rhs, T::mul);
    }
}

impl<T: Channel> PartialEq for Color<T> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, T::EPSILON)
    }
}

impl Eq for Color<u8> {}

impl Hash for Color<u8> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        [self.r, self.g, self.b, self.a].hash(state);
    }
}
