//! Presentation variables derived from the accent color and effective mode.
//!
//! Variable names are a contract with the stylesheet consuming them; the
//! values use CSS Color 4 space-separated `rgb(r g b / a)` syntax.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::color::Rgb;
use super::mode::EffectiveMode;

pub const PRIMARY_RGB: &str = "--primary-rgb";
pub const PRIMARY: &str = "--primary";
pub const PRIMARY_FOREGROUND: &str = "--primary-foreground";
pub const RING: &str = "--ring";
pub const ACCENT: &str = "--accent";
pub const ACCENT_FOREGROUND: &str = "--accent-foreground";
pub const SECONDARY: &str = "--secondary";
pub const SECONDARY_FOREGROUND: &str = "--secondary-foreground";

/// Every published variable, in publication order.
pub const VARIABLE_NAMES: [&str; 8] = [
    PRIMARY_RGB,
    PRIMARY,
    PRIMARY_FOREGROUND,
    RING,
    ACCENT,
    ACCENT_FOREGROUND,
    SECONDARY,
    SECONDARY_FOREGROUND,
];

const WHITE: Rgb = Rgb::new(255, 255, 255);

/// Opacity applied per variable for one effective mode.
struct Alphas {
    primary: &'static str,
    primary_foreground: &'static str,
    ring: &'static str,
    soft_background: &'static str,
    soft_foreground: &'static str,
}

impl Alphas {
    fn for_mode(mode: EffectiveMode) -> Self {
        match mode {
            EffectiveMode::Dark => Self {
                primary: "1",
                primary_foreground: "0.9",
                ring: "0.7",
                soft_background: "0.2",
                soft_foreground: "0.9",
            },
            EffectiveMode::Light => Self {
                primary: "0.9",
                primary_foreground: "1",
                ring: "0.7",
                soft_background: "0.1",
                soft_foreground: "0.9",
            },
        }
    }
}

/// Derived presentation variables for one `(accent, mode)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationVars {
    accent: Rgb,
    mode: EffectiveMode,
    values: [String; 8],
}

impl PresentationVars {
    /// Run the derivation for `accent` under `mode`.
    pub fn derive(accent: Rgb, mode: EffectiveMode) -> Self {
        let alphas = Alphas::for_mode(mode);
        let tint = |alpha: &str| rgb_with_alpha(accent, alpha);
        let values = [
            accent.triplet(),
            tint(alphas.primary),
            rgb_with_alpha(WHITE, alphas.primary_foreground),
            tint(alphas.ring),
            tint(alphas.soft_background),
            tint(alphas.soft_foreground),
            tint(alphas.soft_background),
            tint(alphas.soft_foreground),
        ];
        Self {
            accent,
            mode,
            values,
        }
    }

    pub fn accent(&self) -> Rgb {
        self.accent
    }

    pub fn mode(&self) -> EffectiveMode {
        self.mode
    }

    /// Value for one variable name (with the leading `--`).
    pub fn get(&self, name: &str) -> Option<&str> {
        VARIABLE_NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .map(|idx| self.values[idx].as_str())
    }

    /// `(name, value)` pairs in publication order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        VARIABLE_NAMES
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }

    /// Render as a `:root` rule with one declaration per line.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.iter() {
            css.push_str(&format!("  {name}: {value};\n"));
        }
        css.push_str("}\n");
        css
    }
}

impl Serialize for PresentationVars {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(VARIABLE_NAMES.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

fn rgb_with_alpha(color: Rgb, alpha: &str) -> String {
    format!("rgb({} / {alpha})", color.triplet())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::color::DEFAULT_ACCENT;

    #[test]
    fn dark_mode_uses_full_primary() {
        let vars = PresentationVars::derive(DEFAULT_ACCENT, EffectiveMode::Dark);
        assert_eq!(vars.get(PRIMARY_RGB), Some("59 130 246"));
        assert_eq!(vars.get(PRIMARY), Some("rgb(59 130 246 / 1)"));
        assert_eq!(vars.get(PRIMARY_FOREGROUND), Some("rgb(255 255 255 / 0.9)"));
        assert_eq!(vars.get(RING), Some("rgb(59 130 246 / 0.7)"));
        assert_eq!(vars.get(ACCENT), Some("rgb(59 130 246 / 0.2)"));
        assert_eq!(vars.get(ACCENT_FOREGROUND), Some("rgb(59 130 246 / 0.9)"));
        assert_eq!(vars.get(SECONDARY), Some("rgb(59 130 246 / 0.2)"));
        assert_eq!(vars.get(SECONDARY_FOREGROUND), Some("rgb(59 130 246 / 0.9)"));
    }

    #[test]
    fn light_mode_softens_primary_and_tints() {
        let vars = PresentationVars::derive(DEFAULT_ACCENT, EffectiveMode::Light);
        assert_eq!(vars.get(PRIMARY), Some("rgb(59 130 246 / 0.9)"));
        assert_eq!(vars.get(PRIMARY_FOREGROUND), Some("rgb(255 255 255 / 1)"));
        assert_eq!(vars.get(RING), Some("rgb(59 130 246 / 0.7)"));
        assert_eq!(vars.get(ACCENT), Some("rgb(59 130 246 / 0.1)"));
        assert_eq!(vars.get(SECONDARY), Some("rgb(59 130 246 / 0.1)"));
        assert_eq!(vars.get(SECONDARY_FOREGROUND), Some("rgb(59 130 246 / 0.9)"));
    }

    #[test]
    fn remembers_its_inputs() {
        let accent = Rgb::new(0xec, 0x48, 0x99);
        let vars = PresentationVars::derive(accent, EffectiveMode::Dark);
        assert_eq!(vars.accent(), accent);
        assert_eq!(vars.mode(), EffectiveMode::Dark);
    }

    #[test]
    fn unknown_variable_is_none() {
        let vars = PresentationVars::derive(DEFAULT_ACCENT, EffectiveMode::Light);
        assert_eq!(vars.get("--background"), None);
    }

    #[test]
    fn iterates_in_publication_order() {
        let vars = PresentationVars::derive(Rgb::new(1, 2, 3), EffectiveMode::Dark);
        let names: Vec<_> = vars.iter().map(|(name, _)| name).collect();
        assert_eq!(names, VARIABLE_NAMES.to_vec());
    }

    #[test]
    fn css_block_has_one_declaration_per_variable() {
        let css = PresentationVars::derive(Rgb::new(255, 0, 0), EffectiveMode::Light).to_css();
        assert!(css.starts_with(":root {\n"));
        assert!(css.ends_with("}\n"));
        assert!(css.contains("  --primary: rgb(255 0 0 / 0.9);\n"));
        assert_eq!(css.matches(';').count(), VARIABLE_NAMES.len());
    }

    #[test]
    fn serializes_as_name_value_map() {
        let vars = PresentationVars::derive(DEFAULT_ACCENT, EffectiveMode::Dark);
        let value = serde_json::to_value(&vars).expect("serialize");
        assert_eq!(value["--ring"], "rgb(59 130 246 / 0.7)");
        assert_eq!(value.as_object().map(|m| m.len()), Some(8));
    }
}
