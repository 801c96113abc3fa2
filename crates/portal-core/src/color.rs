use thiserror::Error;

/// RGB color with components in \[0, 1\], as fed to the shading uniforms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected a #rrggbb color, got {0:?}")]
    Format(String),
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex literal, the format the panel's color pickers emit.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::Format(s.to_string()))?;
        // ASCII check first: byte-slicing a multibyte literal would panic.
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError::Format(s.to_string()));
        }
        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::Format(s.to_string()))
        };
        Ok(Self {
            r: byte(0..2)? as f32 / 255.0,
            g: byte(2..4)? as f32 / 255.0,
            b: byte(4..6)? as f32 / 255.0,
        })
    }

    pub fn to_hex(&self) -> String {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", q(self.r), q(self.g), q(self.b))
    }

    /// Componentwise linear interpolation: `lerp(a, b, 0) == a`, `lerp(a, b, 1) == b`.
    pub fn lerp(start: Self, end: Self, t: f32) -> Self {
        Self {
            r: start.r + (end.r - start.r) * t,
            g: start.g + (end.g - start.g) * t,
            b: start.b + (end.b - start.b) * t,
        }
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// As a vec4 uniform value with alpha 1.
    pub fn to_array4(&self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_primary_red() {
        let c = Color::from_hex("#ff0000").unwrap();
        assert_eq!(c, Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn rejects_malformed_literals() {
        assert!(Color::from_hex("ff0000").is_err());
        assert!(Color::from_hex("#ff00").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
    }

    #[test]
    fn rejects_multibyte_literals_without_panicking() {
        // Six bytes but not six hex digits; must return Err, not panic on a
        // mid-character byte slice.
        assert!(Color::from_hex("#€€").is_err());
        assert!(Color::from_hex("#ffaaé").is_err());
    }

    #[test]
    fn hex_round_trip() {
        for s in ["#110418", "#ffaae3", "#fdfaff", "#ffffe5", "#212121"] {
            assert_eq!(Color::from_hex(s).unwrap().to_hex(), s);
        }
    }
}
