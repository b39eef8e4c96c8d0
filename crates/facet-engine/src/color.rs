/// Straight-alpha RGBA color, components in `[0, 1]`.
///
/// Mesh colors stay straight all the way into the vertex buffer; the vertex
/// stage is the single place that premultiplies. Use [`Rgba::premultiplied`]
/// only for host-side values that bypass the shader (clear colors).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Rgba {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from 8-bit straight components (`0`–`255`).
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns `[r*a, g*a, b*a, a]`.
    #[inline]
    pub fn premultiplied(self) -> [f32; 4] {
        [self.r * self.a, self.g * self.a, self.b * self.a, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u8_scales_to_unit_range() {
        let c = Rgba::from_u8(255, 0, 51, 255);
        assert_eq!(c, Rgba::new(1.0, 0.0, 0.2, 1.0));
    }

    #[test]
    fn premultiplied_scales_rgb_by_alpha() {
        assert_eq!(Rgba::new(1.0, 0.5, 0.25, 0.5).premultiplied(), [0.5, 0.25, 0.125, 0.5]);
        assert_eq!(Rgba::new(0.9, 0.9, 0.9, 0.0).premultiplied(), [0.0, 0.0, 0.0, 0.0]);
    }
}
