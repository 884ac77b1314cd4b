//! Color palette for the site.
//!
//! Two tiers: `brand` accent colors and a `neutrals` grayscale ramp.
//! Every value is a `#RRGGBB` hex string consumed by the theme wiring
//! and rendered into the exported `variables.css`.

/// Brand accent colors.
#[derive(Debug, Clone, Copy)]
pub struct Brand {
    pub pink500: &'static str,
    pub green500: &'static str,
    pub blue500: &'static str,
}

/// Grayscale ramp, lightest to darkest.
#[derive(Debug, Clone, Copy)]
pub struct Neutrals {
    pub white: &'static str,
    pub gray100: &'static str,
    pub gray200: &'static str,
    pub gray300: &'static str,
    pub gray400: &'static str,
    pub gray500: &'static str,
    pub gray600: &'static str,
    pub gray700: &'static str,
    pub gray800: &'static str,
    pub gray900: &'static str,
    pub black: &'static str,
}

/// The full two-tier palette.
#[derive(Debug, Clone, Copy)]
pub struct ColorTokens {
    pub brand: Brand,
    pub neutrals: Neutrals,
}

/// The site palette. Defined once, never mutated.
pub const COLOR_TOKENS: ColorTokens = ColorTokens {
    brand: Brand {
        pink500: "#FF5964",
        green500: "#6BF178",
        blue500: "#35A7FF",
    },
    neutrals: Neutrals {
        white: "#EFEFEF",
        gray100: "#DEDEDE",
        gray200: "#C4C4C4",
        gray300: "#B3B3B3",
        gray400: "#A3A3A3",
        gray500: "#8C8C8C",
        gray600: "#787878",
        gray700: "#666666",
        gray800: "#4F4F4F",
        gray900: "#333333",
        black: "#1C1C1C",
    },
};

impl ColorTokens {
    /// Enumerate every token as (tier, name, value), declaration order.
    pub fn entries(&self) -> Vec<(&'static str, &'static str, &'static str)> {
        let Self { brand, neutrals } = self;
        vec![
            ("brand", "pink500", brand.pink500),
            ("brand", "green500", brand.green500),
            ("brand", "blue500", brand.blue500),
            ("neutrals", "white", neutrals.white),
            ("neutrals", "gray100", neutrals.gray100),
            ("neutrals", "gray200", neutrals.gray200),
            ("neutrals", "gray300", neutrals.gray300),
            ("neutrals", "gray400", neutrals.gray400),
            ("neutrals", "gray500", neutrals.gray500),
            ("neutrals", "gray600", neutrals.gray600),
            ("neutrals", "gray700", neutrals.gray700),
            ("neutrals", "gray800", neutrals.gray800),
            ("neutrals", "gray900", neutrals.gray900),
            ("neutrals", "black", neutrals.black),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_values() {
        assert_eq!(COLOR_TOKENS.brand.pink500, "#FF5964");
        assert_eq!(COLOR_TOKENS.brand.green500, "#6BF178");
        assert_eq!(COLOR_TOKENS.brand.blue500, "#35A7FF");
    }

    #[test]
    fn test_neutral_endpoints() {
        assert_eq!(COLOR_TOKENS.neutrals.white, "#EFEFEF");
        assert_eq!(COLOR_TOKENS.neutrals.black, "#1C1C1C");
    }

    #[test]
    fn test_entries_cover_both_tiers() {
        let entries = COLOR_TOKENS.entries();
        assert_eq!(entries.len(), 14);
        assert_eq!(entries.iter().filter(|(tier, ..)| *tier == "brand").count(), 3);
        assert_eq!(entries.iter().filter(|(tier, ..)| *tier == "neutrals").count(), 11);
    }

    #[test]
    fn test_all_entries_are_hex() {
        for (tier, name, value) in COLOR_TOKENS.entries() {
            assert!(
                value.len() == 7 && value.starts_with('#'),
                "{tier}.{name} is not #RRGGBB: {value}"
            );
        }
    }
}
