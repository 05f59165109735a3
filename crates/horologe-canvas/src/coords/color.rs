use std::fmt;

/// 8-bit RGBA color, non-premultiplied.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xff)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgb(0xff, 0xff, 0xff)
    }

    /// Parses `#rrggbb` or `rrggbb` (case-insensitive). Alpha is always opaque.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorParseError(s.to_string()));
        }

        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        match (byte(0), byte(2), byte(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self::rgb(r, g, b)),
            _ => Err(ColorParseError(s.to_string())),
        }
    }
}

/// Error returned by [`Rgba::from_hex`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColorParseError(pub String);

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color {:?} (expected #rrggbb)", self.0)
    }
}

impl std::error::Error for ColorParseError {}
