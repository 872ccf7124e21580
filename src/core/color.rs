#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32, // Red component (0.0 - 1.0)
    pub g: f32, // Green component (0.0 - 1.0)
    pub b: f32, // Blue component (0.0 - 1.0)
}

impl Color {
    /// Create a new color with RGB components normalized.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    const fn hex_char_to_u8(c: char) -> u8 {
        match c {
            '0'..='9' => (c as u8) - b'0',
            'a'..='f' => (c as u8) - b'a' + 10,
            'A'..='F' => (c as u8) - b'A' + 10,
            _ => 0,
        }
    }

    const fn hex_pair_to_u8(high: char, low: char) -> u8 {
        (Self::hex_char_to_u8(high) << 4) | Self::hex_char_to_u8(low)
    }

    /// Build a color from a literal "RRGGBB" (optionally '#'-prefixed) at compile time.
    const fn hex(hex: &str) -> Self {
        let bytes = hex.as_bytes();
        let offset = if bytes[0] == b'#' { 1 } else { 0 };

        let r =
            Self::hex_pair_to_u8(bytes[offset] as char, bytes[offset + 1] as char) as f32 / 255.0;
        let g = Self::hex_pair_to_u8(bytes[offset + 2] as char, bytes[offset + 3] as char) as f32
            / 255.0;
        let b = Self::hex_pair_to_u8(bytes[offset + 4] as char, bytes[offset + 5] as char) as f32
            / 255.0;

        Self { r, g, b }
    }

    /// Pack into minifb's 0x00RRGGBB layout.
    pub fn to_u32(&self) -> u32 {
        let r = (self.r.clamp(0.0, 1.0) * 255.0) as u32;
        let g = (self.g.clamp(0.0, 1.0) * 255.0) as u32;
        let b = (self.b.clamp(0.0, 1.0) * 255.0) as u32;
        (r << 16) | (g << 8) | b
    }
}

// Predefined colors
impl Color {
    pub const BLACK: Color = Color::hex("000000");
    pub const WHITE: Color = Color::hex("FFFFFF");
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_into_minifb_layout() {
        assert_eq!(Color::BLACK.to_u32(), 0x000000);
        assert_eq!(Color::WHITE.to_u32(), 0xFFFFFF);
        assert_eq!(Color::new(1.0, 0.0, 0.0).to_u32(), 0xFF0000);
        assert_eq!(Color::new(0.0, 1.0, 0.0).to_u32(), 0x00FF00);
        assert_eq!(Color::new(0.0, 0.0, 1.0).to_u32(), 0x0000FF);
    }

    #[test]
    fn hex_accepts_optional_hash() {
        let gray = Color::hex("808080");
        assert_eq!(Color::hex("#808080"), gray);
        assert!((gray.r - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_channels_are_clamped() {
        assert_eq!(Color::new(2.0, -1.0, 0.0).to_u32(), 0xFF0000);
    }
}
