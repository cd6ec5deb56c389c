//! src/effect/codegen.rs
//!
//! Deterministic mapping from an effect configuration to a copyable CSS
//! snippet. This is the only place where the string-typed scale value is
//! coerced to a number.

use super::config::{EffectConfig, EffectKind};

/// Generate the full copyable snippet for a configuration.
///
/// Pure and deterministic: equal configs produce byte-identical output.
pub fn generate(config: &EffectConfig) -> String {
    format!(
        "/* Hovercraft hover effect */\n\
         .hover-element {{\n    transition: all {}s ease-in-out;\n}}\n\
         \n\
         .hover-element:hover {{\n    {}\n}}",
        config.speed,
        hover_declarations(&config.kind, &config.scale)
    )
}

/// The declaration block applied on `:hover`, keyed by effect kind.
///
/// Unrecognized kinds produce an empty body. The scale string passes
/// through verbatim for `scale`; every other kind derives a number from
/// it (an unparsable scale renders through default float formatting).
pub fn hover_declarations(kind: &str, scale: &str) -> String {
    let magnitude = scale.parse::<f64>().unwrap_or(f64::NAN);
    match EffectKind::parse(kind) {
        Some(EffectKind::Scale) => format!("transform: scale({scale});"),
        Some(EffectKind::Rotate) => {
            format!("transform: rotate({}deg);", (magnitude - 1.0) * 360.0)
        }
        Some(EffectKind::Glow) => {
            format!("box-shadow: 0 0 {}px rgba(74,144,226,0.6);", 20.0 * magnitude)
        }
        Some(EffectKind::Blur) => format!("filter: blur({}px);", 2.0 * magnitude),
        Some(EffectKind::Skew) => format!("transform: skew({}deg);", -15.0 * magnitude),
        Some(EffectKind::Border) => format!(
            "border-color: white;\n    box-shadow: 0 0 {}px rgba(255,255,255,0.5);",
            10.0 * magnitude
        ),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(kind: &str, scale: &str) -> EffectConfig {
        EffectConfig {
            speed: "0.3".into(),
            scale: scale.into(),
            kind: kind.into(),
            timing: "ease".into(),
        }
    }

    #[test]
    fn scale_uses_raw_string_value() {
        assert_eq!(hover_declarations("scale", "1.5"), "transform: scale(1.5);");
    }

    #[test]
    fn rotate_maps_scale_to_degrees() {
        // (2 - 1) * 360
        assert_eq!(hover_declarations("rotate", "2"), "transform: rotate(360deg);");
        assert_eq!(
            hover_declarations("rotate", "1.5"),
            "transform: rotate(180deg);"
        );
    }

    #[test]
    fn glow_scales_shadow_radius() {
        assert_eq!(
            hover_declarations("glow", "0.5"),
            "box-shadow: 0 0 10px rgba(74,144,226,0.6);"
        );
    }

    #[test]
    fn blur_and_skew_bodies() {
        assert_eq!(hover_declarations("blur", "2"), "filter: blur(4px);");
        assert_eq!(hover_declarations("skew", "1"), "transform: skew(-15deg);");
    }

    #[test]
    fn border_emits_two_declarations() {
        let body = hover_declarations("border", "1");
        assert!(body.starts_with("border-color: white;\n"));
        assert!(body.contains("box-shadow: 0 0 10px rgba(255,255,255,0.5);"));
    }

    #[test]
    fn unknown_kind_yields_empty_body() {
        assert_eq!(hover_declarations("wobble", "1.5"), "");
    }

    #[test]
    fn unparsable_scale_renders_nan() {
        assert_eq!(hover_declarations("blur", "oops"), "filter: blur(NaNpx);");
    }

    #[test]
    fn generate_is_deterministic() {
        let cfg = config("glow", "1.5");
        assert_eq!(generate(&cfg), generate(&cfg));
    }

    #[test]
    fn generate_template_shape() {
        let css = generate(&config("scale", "1.5"));
        assert!(css.starts_with("/* Hovercraft hover effect */\n"));
        assert!(css.contains(".hover-element {\n    transition: all 0.3s ease-in-out;\n}"));
        assert!(css.contains(".hover-element:hover {\n    transform: scale(1.5);\n}"));
    }
}
