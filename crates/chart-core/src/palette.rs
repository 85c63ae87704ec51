// File: crates/chart-core/src/palette.rs
// Summary: Renderer-agnostic colors and the cyclic category palette with named presets.

/// 32-bit ARGB color, independent of any rendering backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_argb(255, 0, 0, 0);
    pub const WHITE: Color = Color::from_argb(255, 255, 255, 255);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Pack as `0xAARRGGBB`.
    pub const fn to_argb_u32(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// Ordered list of category colors. Category `i` gets `colors[i mod len]`; lookups
/// never mutate the palette, so repeated draws are identical.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub name: String,
    colors: Vec<Color>,
}

impl Palette {
    /// Build a palette from an explicit color list. An empty list falls back to black.
    pub fn new(name: impl Into<String>, colors: Vec<Color>) -> Self {
        let colors = if colors.is_empty() { vec![Color::BLACK] } else { colors };
        Self { name: name.into(), colors }
    }

    /// Never empty: `new` substitutes black for an empty list.
    pub fn colors(&self) -> &[Color] { &self.colors }

    #[inline]
    pub fn color_for(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    pub fn rainbow() -> Self {
        Self::new(
            "rainbow",
            vec![
                Color::from_argb(255, 0xe5, 0x39, 0x35), // red
                Color::from_argb(255, 0xfb, 0x8c, 0x00), // orange
                Color::from_argb(255, 0xfd, 0xd8, 0x35), // yellow
                Color::from_argb(255, 0x43, 0xa0, 0x47), // green
                Color::from_argb(255, 0x00, 0xac, 0xc1), // cyan
                Color::from_argb(255, 0x1e, 0x88, 0xe5), // blue
                Color::from_argb(255, 0x5e, 0x35, 0xb1), // indigo
                Color::from_argb(255, 0x8e, 0x24, 0xaa), // violet
                Color::from_argb(255, 0xd8, 0x1b, 0x60), // pink
                Color::from_argb(255, 0x6d, 0x4c, 0x41), // brown
                Color::from_argb(255, 0x75, 0x75, 0x75), // grey
            ],
        )
    }

    pub fn pastel() -> Self {
        Self::new(
            "pastel",
            vec![
                Color::from_argb(255, 0xff, 0xb3, 0xba),
                Color::from_argb(255, 0xff, 0xdf, 0xba),
                Color::from_argb(255, 0xff, 0xff, 0xba),
                Color::from_argb(255, 0xba, 0xff, 0xc9),
                Color::from_argb(255, 0xba, 0xe1, 0xff),
                Color::from_argb(255, 0xd7, 0xba, 0xff),
            ],
        )
    }

    pub fn high_contrast() -> Self {
        Self::new(
            "high-contrast",
            vec![
                Color::from_argb(255, 0xff, 0x00, 0x00),
                Color::from_argb(255, 0x00, 0xff, 0x00),
                Color::from_argb(255, 0x00, 0x00, 0xff),
                Color::from_argb(255, 0xff, 0xff, 0x00),
                Color::from_argb(255, 0x00, 0xff, 0xff),
                Color::from_argb(255, 0xff, 0x00, 0xff),
            ],
        )
    }
}

impl Default for Palette {
    fn default() -> Self { Self::rainbow() }
}

/// Return the built-in palette presets.
pub fn presets() -> Vec<Palette> {
    vec![Palette::rainbow(), Palette::pastel(), Palette::high_contrast()]
}

/// Find a palette by its `name`, falling back to rainbow.
pub fn find(name: &str) -> Palette {
    presets()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Palette::rainbow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_lookup_cycles() {
        let red = Color::from_argb(255, 255, 0, 0);
        let blue = Color::from_argb(255, 0, 0, 255);
        let p = Palette::new("two", vec![red, blue]);
        assert_eq!(p.color_for(0), red);
        assert_eq!(p.color_for(1), blue);
        assert_eq!(p.color_for(2), red);
        assert_eq!(p.color_for(7), blue);
        // lookups are pure
        assert_eq!(p.color_for(2), p.color_for(2));
    }

    #[test]
    fn empty_palette_never_panics() {
        let p = Palette::new("empty", Vec::new());
        assert_eq!(p.colors(), [Color::BLACK]);
        assert_eq!(p.color_for(5), Color::BLACK);
    }

    #[test]
    fn find_is_case_insensitive_with_fallback() {
        assert_eq!(find("PASTEL").name, "pastel");
        assert_eq!(find("nope").name, "rainbow");
        assert_eq!(Color::from_argb(0x80, 1, 2, 3).to_argb_u32(), 0x8001_0203);
    }
}
