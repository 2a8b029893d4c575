//! Alternate colour space views.
//!
//! Every getter returns unit floats derived from the RGB channels. Every setter other than
//! [`Color::setup_from_rgba`] writes through the clamping setup path and makes the colour opaque.

use super::channel::Channel;
use super::unit::Color;

const HSV_EPSILON: f32 = 1e-20;

impl<T: Channel> Color<T> {
    /// Luma and chroma in the YIQ space.
    pub fn yiq(&self) -> [f32; 3] {
        let [r, g, b] = self.rgb();
        [
            0.299 * r + 0.587 * g + 0.114 * b,
            0.596 * r - 0.274 * g - 0.322 * b,
            0.212 * r - 0.523 * g + 0.311 * b,
        ]
    }

    pub fn setup_from_yiq(&mut self, y: f32, i: f32, q: f32) -> &mut Self {
        self.setup_from_rgb(
            y + 0.956 * i + 0.621 * q,
            y - 0.272 * i - 0.647 * q,
            y - 1.105 * i + 1.702 * q,
        )
    }

    pub fn yuv(&self) -> [f32; 3] {
        let [r, g, b] = self.rgb();
        [
            0.299 * r + 0.587 * g + 0.114 * b,
            -0.147 * r - 0.289 * g + 0.437 * b,
            0.615 * r - 0.515 * g - 0.100 * b,
        ]
    }

    pub fn setup_from_yuv(&mut self, y: f32, u: f32, v: f32) -> &mut Self {
        self.setup_from_rgb(y + 1.140 * v, y - 0.394 * u - 0.581 * v, y + 2.028 * u)
    }

    /// CIE tristimulus values.
    pub fn cie(&self) -> [f32; 3] {
        let [r, g, b] = self.rgb();
        [
            0.6067 * r + 0.1736 * g + 0.2001 * b,
            0.2988 * r + 0.5868 * g + 0.1143 * b,
            0.0661 * g + 1.1149 * b,
        ]
    }

    pub fn setup_from_cie(&mut self, c: f32, i: f32, e: f32) -> &mut Self {
        self.setup_from_rgb(
            1.9107 * c - 0.5326 * i - 0.2883 * e,
            -0.9843 * c + 1.9984 * i - 0.0283 * e,
            0.0583 * c - 0.1185 * i + 0.8986 * e,
        )
    }

    pub fn cmy(&self) -> [f32; 3] {
        let [r, g, b] = self.rgb();
        [1.0 - r, 1.0 - g, 1.0 - b]
    }

    pub fn setup_from_cmy(&mut self, c: f32, m: f32, y: f32) -> &mut Self {
        self.setup_from_rgb(1.0 - c, 1.0 - m, 1.0 - y)
    }

    /// Hue, saturation and value, each in `[0, 1]`.
    pub fn hsv(&self) -> [f32; 3] {
        let [mut r, mut g, mut b] = self.rgb();
        let mut k = 0.0f32;

        if g < b {
            core::mem::swap(&mut g, &mut b);
            k = -1.0;
        }

        if r < g {
            core::mem::swap(&mut r, &mut g);
            k = -2.0 / 6.0 - k;
        }

        let chroma = r - g.min(b);
        let h = (k + (g - b) / (6.0 * chroma + HSV_EPSILON)).abs();
        let s = chroma / (r + HSV_EPSILON);
        [h, s, r]
    }

    /// Rebuilds the colour from hue, saturation and value.
    ///
    /// Hue wraps around 1; a saturation of zero produces grey.
    pub fn setup_from_hsv(&mut self, h: f32, s: f32, v: f32) -> &mut Self {
        if s == 0.0 {
            return self.setup_from_rgb(v, v, v);
        }

        let h = (h % 1.0) * 6.0;
        let sextant = h as i32;
        let f = h - sextant as f32;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match sextant {
            0 => self.setup_from_rgb(v, t, p),
            1 => self.setup_from_rgb(q, v, p),
            2 => self.setup_from_rgb(p, v, t),
            3 => self.setup_from_rgb(p, q, v),
            4 => self.setup_from_rgb(t, p, v),
            _ => self.setup_from_rgb(v, p, q),
        }
    }

    /// Scales each HSV component by the matching factor and rebuilds the colour.
    pub fn multiply_with_hsv(&mut self, factors: [f32; 3]) -> &mut Self {
        let [h, s, v] = self.hsv();
        self.setup_from_hsv(h * factors[0], s * factors[1], v * factors[2])
    }

    /// Decodes the colour as a unit normal stored in RGB.
    pub fn normal(&self) -> [f32; 3] {
        [self.r.decode_normal(), self.g.decode_normal(), self.b.decode_normal()]
    }

    /// Encodes a normal with components in `[-1, 1]`.
    pub fn setup_from_normal(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.r = T::encode_normal(x);
        self.g = T::encode_normal(y);
        self.b = T::encode_normal(z);
        self.a = T::FULL;
        self
    }

    /// Light direction; the negated [`Color::normal`].
    pub fn light(&self) -> [f32; 3] {
        let [x, y, z] = self.normal();
        [-x, -y, -z]
    }

    pub fn setup_from_light(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.setup_from_normal(-x, -y, -z)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    #[rstest]
    #[case([1.0, 0.0, 0.0], 0.0)]
    #[case([1.0, 1.0, 0.0], 1.0 / 6.0)]
    #[case([0.0, 1.0, 0.0], 2.0 / 6.0)]
    #[case([0.0, 1.0, 1.0], 3.0 / 6.0)]
    #[case([0.0, 0.0, 1.0], 4.0 / 6.0)]
    #[case([1.0, 0.0, 1.0], 5.0 / 6.0)]
    fn primary_hues(#[case] rgb: [f32; 3], #[case] hue: f32) {
        let [h, s, v] = ColorF32::from_rgb_array(rgb).hsv();
        assert!((h - hue).abs() < 1e-5, "hue {h} expected {hue}");
        assert!((s - 1.0).abs() < 1e-5);
        assert!((v - 1.0).abs() < 1e-5);
    }

    #[rstest]
    #[case([0.8, 0.4, 0.2])]
    #[case([0.6, 0.9, 0.3])]
    #[case([0.1, 0.7, 0.5])]
    #[case([0.2, 0.4, 0.9])]
    #[case([0.5, 0.1, 0.8])]
    #[case([0.9, 0.2, 0.6])]
    fn hsv_round_trips_every_sextant(#[case] rgb: [f32; 3]) {
        let source = ColorF32::from_rgb_array(rgb);
        let [h, s, v] = source.hsv();

        let mut rebuilt = ColorF32::default();
        rebuilt.setup_from_hsv(h, s, v);
        assert_close(rebuilt.rgba(), source.rgba(), 1e-4);
    }

    #[test]
    fn zero_saturation_gives_grey() {
        let mut color = Color8::default();
        color.setup_from_hsv(0.7, 0.0, 0.5);
        assert_eq!(color, Color8::new(127, 127, 127, 255));

        let [_, s, v] = ColorF32::from_rgb_array([0.5, 0.5, 0.5]).hsv();
        assert!(s.abs() < 1e-6);
        assert!((v - 0.5).abs() < 1e-6);
    }

    #[test]
    fn hue_wraps_around_one() {
        let mut wrapped = ColorF32::default();
        wrapped.setup_from_hsv(1.25, 1.0, 1.0);
        let mut direct = ColorF32::default();
        direct.setup_from_hsv(0.25, 1.0, 1.0);
        assert_close(wrapped.rgba(), direct.rgba(), 1e-5);
    }

    #[test]
    fn multiply_with_hsv_scales_value() {
        let mut color = ColorF32::from_rgb_array([1.0, 0.5, 0.0]);
        color.multiply_with_hsv([1.0, 1.0, 0.5]);
        assert_close(color.rgba(), [0.5, 0.25, 0.0, 1.0], 1e-5);
    }

    #[rstest]
    #[case([0.8, 0.4, 0.2])]
    #[case([0.1, 0.9, 0.5])]
    fn linear_spaces_round_trip(#[case] rgb: [f32; 3]) {
        let source = ColorF64::from_rgb_array(rgb);
        let mut rebuilt = ColorF64::default();

        let [y, i, q] = source.yiq();
        rebuilt.setup_from_yiq(y, i, q);
        assert_close(rebuilt.rgba(), source.rgba(), 5e-3);

        let [y, u, v] = source.yuv();
        rebuilt.setup_from_yuv(y, u, v);
        assert_close(rebuilt.rgba(), source.rgba(), 5e-3);

        let [c, i, e] = source.cie();
        rebuilt.setup_from_cie(c, i, e);
        assert_close(rebuilt.rgba(), source.rgba(), 5e-3);

        let [c, m, y] = source.cmy();
        rebuilt.setup_from_cmy(c, m, y);
        assert_close(rebuilt.rgba(), source.rgba(), 1e-6);
    }

    #[test]
    fn luma_of_white_is_one() {
        let [y, i, q] = ColorF32::from_rgb_array([1.0, 1.0, 1.0]).yiq();
        assert!((y - 1.0).abs() < 1e-5);
        assert!(i.abs() < 1e-2);
        assert!(q.abs() < 1e-2);
    }

    #[test]
    fn setters_force_full_alpha() {
        let mut color = Color8::new(0, 0, 0, 0);
        color.setup_from_cmy(0.0, 0.0, 0.0);
        assert_eq!(color, Color8::new(255, 255, 255, 255));

        color.a = 0;
        color.setup_from_normal(0.0, 0.0, 1.0);
        assert_eq!(color.a, 255);
    }

    #[test]
    fn integer_normals_encode_around_127() {
        let mut color = Color8::default();
        color.setup_from_normal(-1.0, 0.0, 1.0);
        assert_eq!((color.r, color.g, color.b), (0, 127, 254));
        assert_close(color.normal(), [-1.0, 0.0, 1.0], 1e-2);
    }

    #[test]
    fn light_is_the_negated_normal() {
        let mut color = ColorF32::default();
        color.setup_from_light(0.0, 0.5, -1.0);
        assert_close(color.normal(), [0.0, -0.5, 1.0], 1e-6);
        assert_close(color.light(), [0.0, 0.5, -1.0], 1e-6);
    }
}
