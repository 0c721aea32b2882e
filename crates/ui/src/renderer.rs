use egui::{Align2, CornerRadius, FontId, Pos2, Rect, Stroke, StrokeKind};
use scrollfx_core::geometry::{GeometryMap, GeometrySource};
use scrollfx_protocol::{ClipShape, StyleCommand, Viewport};

use crate::theme::{self, ThemeState};

/// Styles a tick produced, plus the bits the host latches across ticks.
#[derive(Default)]
pub struct PageStyles {
    pub commands: Vec<StyleCommand>,
    /// Fade-ins are one-shot: once a target fired it stays visible.
    pub faded_in: Vec<String>,
    pub active_index: Option<usize>,
}

impl PageStyles {
    pub fn apply(&mut self, commands: Vec<StyleCommand>, theme: &mut ThemeState) {
        for cmd in &commands {
            match cmd {
                StyleCommand::ThemeActivated { active } => theme.sweep_active = *active,
                StyleCommand::SetOpacity { target, .. } => {
                    let name = target.to_string();
                    if !self.faded_in.contains(&name) {
                        self.faded_in.push(name);
                    }
                }
                StyleCommand::SetActiveIndex { index, .. } => self.active_index = Some(*index),
                _ => {}
            }
        }
        self.commands = commands;
    }

    fn clip_for(&self, name: &str) -> Option<&ClipShape> {
        self.commands.iter().find_map(|c| match c {
            StyleCommand::SetClip { target, shape } if target == name => Some(shape),
            _ => None,
        })
    }

    fn transform_for(&self, name: &str) -> Option<(f64, f64)> {
        self.commands.iter().find_map(|c| match c {
            StyleCommand::SetTransform {
                target,
                scale,
                translate_y_pct,
            } if target == name => Some((*scale, *translate_y_pct)),
            _ => None,
        })
    }

    fn offset_for(&self, name: &str) -> f64 {
        self.commands
            .iter()
            .find_map(|c| match c {
                StyleCommand::SetOffset { target, y_px } if target == name => Some(*y_px),
                _ => None,
            })
            .unwrap_or(0.0)
    }
}

/// Maps logical page coordinates (the 1280x1000 viewport) onto the panel.
struct Scaler {
    origin: Pos2,
    sx: f32,
    sy: f32,
}

impl Scaler {
    fn new(area: Rect, viewport: &Viewport) -> Self {
        Self {
            origin: area.min,
            sx: area.width() / viewport.width as f32,
            sy: area.height() / viewport.height as f32,
        }
    }

    fn rect(&self, r: &scrollfx_protocol::ElementRect) -> Rect {
        Rect::from_min_size(
            Pos2::new(
                self.origin.x + r.left as f32 * self.sx,
                self.origin.y + r.top as f32 * self.sy,
            ),
            egui::Vec2::new(r.width as f32 * self.sx, r.height as f32 * self.sy),
        )
    }
}

/// Render one tick of the demo page into an egui painter.
pub fn draw_page(
    painter: &egui::Painter,
    area: Rect,
    geometry: &GeometryMap,
    styles: &PageStyles,
    theme: &ThemeState,
) {
    painter.rect_filled(area, CornerRadius::ZERO, theme.bg());
    let scaler = Scaler::new(area, &geometry.viewport());

    // The sweep overlay paints the swept palette behind everything else.
    if let Some(ClipShape::Sweep { top_x, bottom_x, .. }) = styles.clip_for("theme-overlay") {
        let top = Pos2::new(
            area.min.x + (*top_x as f32 / 100.0) * area.width(),
            area.min.y,
        );
        let bottom = Pos2::new(
            area.min.x + (*bottom_x as f32 / 100.0) * area.width(),
            area.max.y,
        );
        let points = vec![
            top,
            Pos2::new(area.max.x, area.min.y),
            Pos2::new(area.max.x, area.max.y),
            bottom,
        ];
        painter.add(egui::Shape::convex_polygon(
            points,
            theme::to_color32(theme.swept().bg),
            Stroke::new(2.0, theme::to_color32(theme.swept().accent)),
        ));
    }

    for (target, rect) in geometry.iter() {
        let name = target.as_str();
        match name {
            // Drawn above as the full-viewport diagonal.
            "theme-overlay" | "whats-new" | "customise" => continue,
            "hero-card" => draw_hero(painter, &scaler.rect(rect), styles, theme),
            "promo-video" => draw_video(painter, &scaler.rect(rect), styles, theme),
            "particle-layer" | "study-icons" => {
                let mut shifted = *rect;
                shifted.top += styles.offset_for(name);
                let screen = scaler.rect(&shifted);
                if screen.intersects(area) {
                    painter.rect_stroke(
                        screen,
                        CornerRadius::same(2),
                        Stroke::new(1.0, theme.muted()),
                        StrokeKind::Inside,
                    );
                    label(painter, screen, name, theme.muted());
                }
            }
            "pricing-panel" | "faq-list" => {
                let screen = scaler.rect(rect);
                if !screen.intersects(area) {
                    continue;
                }
                let visible = styles.faded_in.iter().any(|f| f == name);
                let fill = if visible {
                    theme.accent().gamma_multiply(0.25)
                } else {
                    theme.muted().gamma_multiply(0.05)
                };
                painter.rect_filled(screen, CornerRadius::same(4), fill);
                label(
                    painter,
                    screen,
                    name,
                    if visible { theme.text() } else { theme.muted() },
                );
            }
            _ if name.starts_with("step-") => {
                let screen = scaler.rect(rect);
                if !screen.intersects(area) {
                    continue;
                }
                let highlighted = styles
                    .active_index
                    .is_some_and(|i| name == format!("step-{i}"));
                let fill = if highlighted {
                    theme.accent()
                } else {
                    theme.muted().gamma_multiply(0.3)
                };
                painter.circle_filled(screen.center(), screen.height() / 2.0, fill);
            }
            _ => {
                let screen = scaler.rect(rect);
                if screen.intersects(area) {
                    painter.rect_stroke(
                        screen,
                        CornerRadius::same(2),
                        Stroke::new(1.0, theme.muted()),
                        StrokeKind::Inside,
                    );
                    label(painter, screen, name, theme.muted());
                }
            }
        }
    }
}

fn draw_hero(painter: &egui::Painter, screen: &Rect, styles: &PageStyles, theme: &ThemeState) {
    painter.rect_stroke(
        *screen,
        CornerRadius::same(4),
        Stroke::new(1.0, theme.muted()),
        StrokeKind::Inside,
    );
    if let Some(ClipShape::Circle {
        radius_pct,
        center_x,
        center_y,
    }) = styles.clip_for("hero-card")
    {
        let center = Pos2::new(
            screen.min.x + (*center_x as f32 / 100.0) * screen.width(),
            screen.min.y + (*center_y as f32 / 100.0) * screen.height(),
        );
        let radius = (*radius_pct as f32 / 100.0) * screen.width() / 2.0;
        let clipped = painter.with_clip_rect(*screen);
        clipped.circle_filled(center, radius, theme.accent().gamma_multiply(0.6));
    }
    label(painter, *screen, "hero-card", theme.text());
}

fn draw_video(painter: &egui::Painter, screen: &Rect, styles: &PageStyles, theme: &ThemeState) {
    let (scale, translate_y_pct) = styles.transform_for("promo-video").unwrap_or((1.0, 0.0));
    let size = screen.size() * scale as f32;
    let center = Pos2::new(
        screen.center().x,
        screen.center().y + (translate_y_pct as f32 / 100.0) * screen.height(),
    );
    let scaled = Rect::from_center_size(center, size);
    painter.rect_filled(scaled, CornerRadius::same(4), theme.accent().gamma_multiply(0.35));
    painter.rect_stroke(
        scaled,
        CornerRadius::same(4),
        Stroke::new(1.5, theme.accent()),
        StrokeKind::Inside,
    );
    label(painter, scaled, "promo-video", theme.text());
}

fn label(painter: &egui::Painter, rect: Rect, text: &str, color: egui::Color32) {
    painter.text(
        Pos2::new(rect.min.x + 6.0, rect.min.y + 4.0),
        Align2::LEFT_TOP,
        text,
        FontId::monospace(11.0),
        color,
    );
}
