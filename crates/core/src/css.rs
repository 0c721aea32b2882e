//! CSS renderer: converts `StyleCommand` lists into stylesheet text.
//!
//! Useful for snapshotting a tick's output, server-side rendering of an
//! initial scroll position, and debugging what a host would apply.

use scrollfx_protocol::StyleCommand;

/// Render a list of commands as CSS rules, one per command, in order.
///
/// Targets are addressed through their `data-fx` attribute. Commands without
/// a per-element style representation (theme flips, spotlight indices) are
/// skipped; hosts handle those directly.
pub fn render_css(commands: &[StyleCommand]) -> String {
    let mut css = String::with_capacity(commands.len() * 80);
    for cmd in commands {
        match cmd {
            StyleCommand::SetClip { target, shape } => {
                css.push_str(&format!(
                    "[data-fx=\"{}\"] {{ clip-path: {shape}; }}\n",
                    target.as_str(),
                ));
            }
            StyleCommand::SetTransform {
                target,
                scale,
                translate_y_pct,
            } => {
                css.push_str(&format!(
                    "[data-fx=\"{}\"] {{ transform: scale({scale}) translateY({translate_y_pct}%); }}\n",
                    target.as_str(),
                ));
            }
            StyleCommand::SetOffset { target, y_px } => {
                css.push_str(&format!(
                    "[data-fx=\"{}\"] {{ transform: translateY({y_px}px); }}\n",
                    target.as_str(),
                ));
            }
            StyleCommand::SetOpacity { target, opacity } => {
                css.push_str(&format!(
                    "[data-fx=\"{}\"] {{ opacity: {opacity}; }}\n",
                    target.as_str(),
                ));
            }
            StyleCommand::ThemeActivated { .. } | StyleCommand::SetActiveIndex { .. } => {}
        }
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollfx_protocol::{ClipShape, TargetId};

    #[test]
    fn renders_element_styles_in_order() {
        let commands = vec![
            StyleCommand::SetClip {
                target: TargetId::from("hero-card"),
                shape: ClipShape::circle(75.0, 39.0, 22.0),
            },
            StyleCommand::ThemeActivated { active: true },
            StyleCommand::SetOffset {
                target: TargetId::from("particle-layer"),
                y_px: -90.0,
            },
        ];

        let css = render_css(&commands);
        assert_eq!(
            css,
            "[data-fx=\"hero-card\"] { clip-path: circle(75% at 39% 22%); }\n\
             [data-fx=\"particle-layer\"] { transform: translateY(-90px); }\n"
        );
    }

    #[test]
    fn transform_pairs_scale_and_translate() {
        let commands = vec![StyleCommand::SetTransform {
            target: TargetId::from("promo-video"),
            scale: 2.4,
            translate_y_pct: 22.0,
        }];
        assert_eq!(
            render_css(&commands),
            "[data-fx=\"promo-video\"] { transform: scale(2.4) translateY(22%); }\n"
        );
    }

    #[test]
    fn empty_input_renders_empty_sheet() {
        assert!(render_css(&[]).is_empty());
    }
}
