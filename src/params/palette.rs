//! Color palettes shared by all scenes

/// Linear RGBA color, components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Alpha scaled by `factor` (for fades).
    pub fn faded(self, factor: f32) -> Self {
        Self {
            a: self.a * factor.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Linear blend toward `other`.
    pub fn lerp(self, other: Rgba, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Full color set for one visual theme.
///
/// Wave scenes use the sky/water/foam entries; the cyclone scene uses the
/// sky/band/eye/trail entries. Keeping them in one struct lets any palette
/// drive any scene.
#[derive(Debug, Clone)]
pub struct Palette {
    pub name: &'static str,
    pub sky_top: Rgba,
    pub sky_bottom: Rgba,
    pub water_top: Rgba,
    pub water_mid: Rgba,
    pub water_deep: Rgba,
    pub crest: Rgba,
    pub seabed: Rgba,
    pub foam: Rgba,
    pub spotlight: Rgba,
    pub band: Rgba,
    pub eyewall: Rgba,
    pub eye: Rgba,
    pub trail: Rgba,
}

impl Palette {
    /// Daylight tropical water. Default for the wave scenes.
    pub fn lagoon() -> Self {
        Self {
            name: "lagoon",
            sky_top: Rgba::new(0.49, 0.75, 0.93, 1.0),
            sky_bottom: Rgba::new(0.78, 0.90, 0.96, 1.0),
            water_top: Rgba::new(0.22, 0.69, 0.78, 1.0),
            water_mid: Rgba::new(0.10, 0.47, 0.64, 1.0),
            water_deep: Rgba::new(0.04, 0.25, 0.43, 1.0),
            crest: Rgba::new(0.93, 0.99, 1.0, 0.85),
            seabed: Rgba::new(0.76, 0.68, 0.50, 1.0),
            foam: Rgba::new(1.0, 1.0, 1.0, 1.0),
            spotlight: Rgba::new(1.0, 1.0, 0.92, 0.14),
            band: Rgba::new(0.88, 0.95, 0.99, 0.75),
            eyewall: Rgba::new(1.0, 1.0, 1.0, 0.9),
            eye: Rgba::new(0.95, 0.98, 1.0, 0.95),
            trail: Rgba::new(0.95, 0.99, 1.0, 0.5),
        }
    }

    /// Deep-ocean night tones.
    pub fn abyss() -> Self {
        Self {
            name: "abyss",
            sky_top: Rgba::new(0.02, 0.04, 0.10, 1.0),
            sky_bottom: Rgba::new(0.07, 0.11, 0.22, 1.0),
            water_top: Rgba::new(0.09, 0.23, 0.38, 1.0),
            water_mid: Rgba::new(0.04, 0.12, 0.25, 1.0),
            water_deep: Rgba::new(0.01, 0.04, 0.11, 1.0),
            crest: Rgba::new(0.55, 0.80, 0.95, 0.7),
            seabed: Rgba::new(0.12, 0.12, 0.16, 1.0),
            foam: Rgba::new(0.75, 0.88, 1.0, 1.0),
            spotlight: Rgba::new(0.55, 0.75, 1.0, 0.12),
            band: Rgba::new(0.45, 0.65, 0.9, 0.7),
            eyewall: Rgba::new(0.7, 0.85, 1.0, 0.85),
            eye: Rgba::new(0.08, 0.12, 0.2, 0.95),
            trail: Rgba::new(0.5, 0.7, 0.95, 0.45),
        }
    }

    /// Slate-grey storm light. Default for the cyclone scene.
    pub fn storm() -> Self {
        Self {
            name: "storm",
            sky_top: Rgba::new(0.10, 0.12, 0.16, 1.0),
            sky_bottom: Rgba::new(0.22, 0.26, 0.32, 1.0),
            water_top: Rgba::new(0.25, 0.33, 0.38, 1.0),
            water_mid: Rgba::new(0.15, 0.21, 0.27, 1.0),
            water_deep: Rgba::new(0.07, 0.10, 0.14, 1.0),
            crest: Rgba::new(0.80, 0.86, 0.90, 0.8),
            seabed: Rgba::new(0.28, 0.26, 0.24, 1.0),
            foam: Rgba::new(0.92, 0.95, 0.97, 1.0),
            spotlight: Rgba::new(0.9, 0.95, 1.0, 0.10),
            band: Rgba::new(0.82, 0.88, 0.93, 0.8),
            eyewall: Rgba::new(0.97, 0.98, 1.0, 0.95),
            eye: Rgba::new(0.30, 0.34, 0.40, 0.95),
            trail: Rgba::new(0.85, 0.92, 0.98, 0.5),
        }
    }

    /// Look up a palette by name; unknown names warn and fall back to lagoon.
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "lagoon" => Self::lagoon(),
            "abyss" => Self::abyss(),
            "storm" => Self::storm(),
            other => {
                eprintln!("Unknown palette: {}. Using lagoon.", other);
                Self::lagoon()
            }
        }
    }
}
