use std::fmt;

/// Straight-alpha sRGB color.
///
/// Invariants:
/// - `r`, `g`, `b` lie in `[0, 255]` (inputs are clamped)
/// - `a` lies in `[0, 1]`
///
/// Channels keep their fractional part so repeated small interpolation steps
/// still accumulate; they are rounded to bytes only when read out.
///
/// Construction goes through the named factories only, so the invariants hold
/// for every value of this type.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
}

impl Color {
    pub const WHITE: Color = Color { r: 255.0, g: 255.0, b: 255.0, a: 1.0 };
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };

    fn clamped(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
            a: if a.is_nan() { 0.0 } else { a.clamp(0.0, 1.0) },
        }
    }

    /// Red rounded to a byte.
    #[inline]
    pub fn r(self) -> u8 {
        to_byte(self.r)
    }

    #[inline]
    pub fn g(self) -> u8 {
        to_byte(self.g)
    }

    #[inline]
    pub fn b(self) -> u8 {
        to_byte(self.b)
    }

    /// Unrounded `[r, g, b]` in `[0, 255]`.
    #[inline]
    pub fn channels(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub fn a(self) -> f32 {
        self.a
    }

    /// Opaque color from RGB channels in `0..=255`.
    pub fn from_rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::from_rgba(red, green, blue, 1.0)
    }

    /// Color from RGB channels in `0..=255` and alpha in `[0, 1]`.
    pub fn from_rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self::clamped(red, green, blue, alpha)
    }

    /// Opaque color from hue `0..360`, saturation and lightness `0..=100`.
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self::from_hsla(hue, saturation, lightness, 1.0)
    }

    /// Color from HSL plus alpha.
    ///
    /// Uses the piecewise chroma conversion over six 60° hue sectors. Hue wraps,
    /// so 360 is red again.
    pub fn from_hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        let hue = hue.rem_euclid(360.0);
        let s = saturation / 100.0;
        let l = lightness / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - (((hue / 60.0) % 2.0) - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match (hue / 60.0).floor() as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            // rem_euclid can round up to exactly 360 for tiny negative hues.
            5 | 6 => (c, 0.0, x),
            _ => (0.0, 0.0, 0.0),
        };

        Self::clamped(
            ((r + m) * 255.0).round(),
            ((g + m) * 255.0).round(),
            ((b + m) * 255.0).round(),
            alpha,
        )
    }

    /// Random opaque color, uniform over integer hue/saturation/lightness.
    ///
    /// Sampling HSL rather than the RGB cube gives perceptually spread colors.
    pub fn random() -> Self {
        Self::from_hsl(
            fastrand::u32(0..=360) as f32,
            fastrand::u32(0..=100) as f32,
            fastrand::u32(0..=100) as f32,
        )
    }

    /// Per-channel linear interpolation, returned as a new color.
    pub fn lerp(current: Color, target: Color, alpha: f32) -> Color {
        let inv = 1.0 - alpha;
        let mix = |a: f32, b: f32| a * inv + b * alpha;
        Color::from_rgba(
            mix(current.r, target.r),
            mix(current.g, target.g),
            mix(current.b, target.b),
            current.a * inv + target.a * alpha,
        )
    }

    /// In-place form of [`Color::lerp`].
    pub fn lerp_mut(&mut self, target: Color, alpha: f32) -> &mut Self {
        *self = Self::lerp(*self, target, alpha);
        self
    }
}

#[inline]
fn channel(v: f32) -> f32 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, 255.0)
}

#[inline]
fn to_byte(v: f32) -> u8 {
    v.round() as u8
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    /// Canvas paint style: `rgba(r, g, b, a)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r(), self.g(), self.b(), self.a)
    }
}
