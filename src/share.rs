//! src/share.rs
//!
//! Share-link query string. The controller rewrites the full link on
//! every sync; at startup a link passed on the command line overrides
//! stored settings.

use crate::effect::{Controls, EffectConfig};

/// Build the share link for a configuration. All four parameters are
/// always written.
pub fn build(config: &EffectConfig) -> String {
    format!(
        "?speed={}&scale={}&type={}&timing={}",
        encode(&config.speed),
        encode(&config.scale),
        encode(&config.kind),
        encode(&config.timing)
    )
}

/// Apply a share link to the controls.
///
/// Only `type`, `speed`, and `scale` are read back; `timing` is written
/// to links but never restored from them. Unknown parameters are ignored.
pub fn apply(link: &str, controls: &mut Controls) {
    for (key, value) in pairs(link) {
        match key.as_str() {
            "type" => controls.kind = value,
            "speed" => controls.speed = value,
            "scale" => controls.scale = value,
            _ => {}
        }
    }
}

/// Split a query string (with or without a leading `?`) into decoded
/// key/value pairs. Malformed pairs are skipped.
fn pairs(link: &str) -> Vec<(String, String)> {
    link.trim_start_matches('?')
        .split('&')
        .filter_map(|part| {
            let (key, value) = part.split_once('=')?;
            if key.is_empty() {
                return None;
            }
            Some((decode(key), decode(value)))
        })
        .collect()
}

fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Percent-decode; invalid escapes pass through literally and invalid
/// UTF-8 decodes lossily.
fn decode(value: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(value.as_bytes())).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_writes_all_four_parameters() {
        let config = EffectConfig {
            speed: "0.5".into(),
            scale: "1.5".into(),
            kind: "glow".into(),
            timing: "ease-in-out".into(),
        };
        assert_eq!(
            build(&config),
            "?speed=0.5&scale=1.5&type=glow&timing=ease-in-out"
        );
    }

    #[test]
    fn apply_reads_type_speed_scale_only() {
        let mut controls = Controls::default();
        let original_timing = controls.timing.clone();
        apply("?type=blur&speed=0.8&scale=2.0&timing=linear", &mut controls);
        assert_eq!(controls.kind, "blur");
        assert_eq!(controls.speed, "0.8");
        assert_eq!(controls.scale, "2.0");
        // timing is written to links but never read back
        assert_eq!(controls.timing, original_timing);
    }

    #[test]
    fn apply_ignores_unknown_and_malformed_parts() {
        let mut controls = Controls::default();
        apply("?foo=bar&speed&=x&scale=0.9", &mut controls);
        assert_eq!(controls.scale, "0.9");
        assert_eq!(controls.speed, Controls::default().speed);
    }

    #[test]
    fn apply_works_without_leading_question_mark() {
        let mut controls = Controls::default();
        apply("type=skew", &mut controls);
        assert_eq!(controls.kind, "skew");
    }

    #[test]
    fn encode_decode_roundtrip() {
        assert_eq!(encode("ease-in-out"), "ease-in-out");
        assert_eq!(encode("a b/c"), "a%20b%2Fc");
        assert_eq!(decode("a%20b%2Fc"), "a b/c");
        // truncated escape passes through literally
        assert_eq!(decode("50%"), "50%");
    }

    #[test]
    fn link_roundtrip_restores_readable_fields() {
        let config = EffectConfig {
            speed: "1.1".into(),
            scale: "0.7".into(),
            kind: "border".into(),
            timing: "linear".into(),
        };
        let mut controls = Controls::default();
        apply(&build(&config), &mut controls);
        assert_eq!(controls.speed, "1.1");
        assert_eq!(controls.scale, "0.7");
        assert_eq!(controls.kind, "border");
    }
}
