use scrollfx_protocol::{EffectKind, Scene};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("scene json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("scene has no effects")]
    Empty,
    #[error("sweep trigger {0} outside (0, 1)")]
    BadTrigger(f64),
    #[error("ease exponent {0} must be positive")]
    BadEase(f64),
    #[error("parallax factor {0} is not finite")]
    BadFactor(f64),
    #[error("circle radius {0} must be positive")]
    BadRadius(f64),
    #[error("spotlight has no sentinels")]
    NoSentinels,
}

/// Parse and validate a scene from JSON.
pub fn load_scene(data: &[u8]) -> Result<Scene, SceneError> {
    let scene: Scene = serde_json::from_slice(data)?;
    validate(&scene)?;
    Ok(scene)
}

/// Check the invariants parsing alone cannot enforce.
pub fn validate(scene: &Scene) -> Result<(), SceneError> {
    if scene.effects.is_empty() {
        return Err(SceneError::Empty);
    }
    for effect in &scene.effects {
        match &effect.kind {
            EffectKind::Sweep { span, trigger, .. } => {
                check_ease(span.ease)?;
                if let Some(t) = trigger {
                    let in_range = *t > 0.0 && *t < 1.0;
                    if !in_range {
                        return Err(SceneError::BadTrigger(*t));
                    }
                }
            }
            EffectKind::CircleReveal {
                span,
                max_radius_pct,
                ..
            } => {
                check_ease(span.ease)?;
                let positive = *max_radius_pct > 0.0;
                if !positive {
                    return Err(SceneError::BadRadius(*max_radius_pct));
                }
            }
            EffectKind::ZoomReveal { span, .. } => check_ease(span.ease)?,
            EffectKind::Parallax { factor } => {
                if !factor.is_finite() {
                    return Err(SceneError::BadFactor(*factor));
                }
            }
            EffectKind::FadeIn { .. } => {}
            EffectKind::Spotlight { sentinels } => {
                if sentinels.is_empty() {
                    return Err(SceneError::NoSentinels);
                }
            }
        }
    }
    Ok(())
}

fn check_ease(ease: Option<f64>) -> Result<(), SceneError> {
    if let Some(k) = ease {
        let positive = k > 0.0;
        if !positive {
            return Err(SceneError::BadEase(k));
        }
    }
    Ok(())
}
