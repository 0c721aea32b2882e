use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An sRGB color carried as author data (palettes are content, not semantic
/// tokens — every preset ships its own literal colors).
///
/// Serializes as `"#rrggbb"` so scene JSON reads like the stylesheets it
/// replaces; parsing failures surface through serde's error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb` (leading `#` optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                let mut it = hex.chars().map(|c| c.to_digit(16));
                let r = it.next()??;
                let g = it.next()??;
                let b = it.next()??;
                Some(Self::rgb((r * 17) as u8, (g * 17) as u8, (b * 17) as u8))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            _ => None,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color `{s}`")))
    }
}

/// A theme preset: the colors a host swaps in when the sweep activates or a
/// reveal overlay expands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub name: String,
    pub bg: Color,
    pub accent: Color,
    pub text: Color,
    pub text_muted: Color,
    /// Where a circular theme reveal should originate, in percent of the
    /// target's box. `None` means center (50, 50).
    #[serde(default)]
    pub reveal_center: Option<[f64; 2]>,
}

impl Palette {
    pub fn reveal_center(&self) -> (f64, f64) {
        match self.reveal_center {
            Some([x, y]) => (x, y),
            None => (50.0, 50.0),
        }
    }
}

/// App theme presets driven by the diagonal sweep and theme selector.
pub fn app_palettes() -> Vec<Palette> {
    vec![
        Palette {
            name: "Dark".into(),
            bg: Color::rgb(0x2b, 0x35, 0x44),
            accent: Color::rgb(0xf9, 0xa2, 0x16),
            text: Color::rgb(0xf1, 0xf5, 0xf9),
            text_muted: Color::rgb(0x94, 0xa3, 0xb8),
            reveal_center: None,
        },
        Palette {
            name: "Ocean".into(),
            bg: Color::rgb(0x0c, 0x19, 0x29),
            accent: Color::rgb(0x38, 0xbd, 0xf8),
            text: Color::rgb(0xe0, 0xf2, 0xfe),
            text_muted: Color::rgb(0x7d, 0xd3, 0xfc),
            reveal_center: None,
        },
        Palette {
            name: "Berry".into(),
            bg: Color::rgb(0x1c, 0x10, 0x28),
            accent: Color::rgb(0xa8, 0x55, 0xf7),
            text: Color::rgb(0xf5, 0xf0, 0xff),
            text_muted: Color::rgb(0xc4, 0xb5, 0xfd),
            reveal_center: None,
        },
    ]
}

/// Hero-card reveal presets. Each one relocates the circular reveal origin to
/// sit under its selector pill.
pub fn hero_palettes() -> Vec<Palette> {
    vec![
        Palette {
            name: "Nord Dark".into(),
            bg: Color::rgb(0x24, 0x29, 0x33),
            accent: Color::rgb(0x88, 0xc0, 0xd0),
            text: Color::rgb(0x88, 0xc0, 0xd0),
            text_muted: Color::rgb(0xd8, 0xde, 0xe9),
            reveal_center: Some([39.0, 22.0]),
        },
        Palette {
            name: "Camping".into(),
            bg: Color::rgb(0xfa, 0xf1, 0xe4),
            accent: Color::rgb(0x3c, 0x40, 0x3b),
            text: Color::rgb(0x61, 0x8c, 0x56),
            text_muted: Color::rgb(0xc2, 0xb8, 0xaa),
            reveal_center: Some([81.0, 46.0]),
        },
        Palette {
            name: "Magic Girl".into(),
            bg: Color::rgb(0x29, 0x1f, 0x33),
            accent: Color::rgb(0xb3, 0xa1, 0xc4),
            text: Color::rgb(0xa9, 0x82, 0xc4),
            text_muted: Color::rgb(0x86, 0x67, 0x9c),
            reveal_center: Some([79.0, 72.0]),
        },
    ]
}
