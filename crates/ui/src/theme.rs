use scrollfx_protocol::theme::{app_palettes, Color, Palette};

/// Convert a palette color to egui.
pub fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

/// Current page theming: the selected palette plus the sweep flip.
///
/// Once the diagonal sweep passes its trigger the page switches to the next
/// palette in the cycle, mirroring what the real page does with its swept-in
/// section styling.
pub struct ThemeState {
    palettes: Vec<Palette>,
    index: usize,
    pub sweep_active: bool,
}

impl ThemeState {
    pub fn new() -> Self {
        Self {
            palettes: app_palettes(),
            index: 0,
            sweep_active: false,
        }
    }

    pub fn current(&self) -> &Palette {
        &self.palettes[self.index]
    }

    /// Palette shown inside the swept region.
    pub fn swept(&self) -> &Palette {
        &self.palettes[(self.index + 1) % self.palettes.len()]
    }

    pub fn cycle(&mut self) {
        self.index = (self.index + 1) % self.palettes.len();
    }

    pub fn name(&self) -> &str {
        self.current().name.as_str()
    }

    pub fn bg(&self) -> egui::Color32 {
        let palette = if self.sweep_active {
            self.swept()
        } else {
            self.current()
        };
        to_color32(palette.bg)
    }

    pub fn accent(&self) -> egui::Color32 {
        to_color32(self.current().accent)
    }

    pub fn text(&self) -> egui::Color32 {
        to_color32(self.current().text)
    }

    pub fn muted(&self) -> egui::Color32 {
        to_color32(self.current().text_muted)
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}
