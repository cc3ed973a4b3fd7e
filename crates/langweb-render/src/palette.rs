//! Fixed color palette for the Sankey diagrams.
//!
//! Colors match the survey's language set. Node colors are fully opaque;
//! link colors reuse the source language's color at 0.8 alpha. Labels that
//! are not languages (interlocutors, places, situations, media) share one
//! beige node color.

use tracing::warn;

/// RGB triples for the known languages.
pub const LANGUAGE_COLORS: [(&str, (u8, u8, u8)); 8] = [
    ("No language given", (0, 104, 201)),
    ("Dutch", (158, 115, 45)),
    ("Turkish", (13, 59, 102)),
    ("French", (238, 150, 75)),
    ("German", (185, 117, 39)),
    ("Şexbizinî", (249, 87, 56)),
    ("Other language", (229, 183, 16)),
    ("Kurmanji", (102, 17, 0)),
];

const LABEL_RGB: (u8, u8, u8) = (216, 198, 151);
const FALLBACK_RGB: (u8, u8, u8) = (128, 128, 128);

fn language_rgb(label: &str) -> Option<(u8, u8, u8)> {
    LANGUAGE_COLORS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, rgb)| *rgb)
}

fn rgba((r, g, b): (u8, u8, u8), alpha: f32) -> String {
    format!("rgba({r}, {g}, {b}, {alpha:.1})")
}

/// Node color for a diagram label.
pub fn node_color(label: &str) -> String {
    rgba(language_rgb(label).unwrap_or(LABEL_RGB), 1.0)
}

/// Link color, keyed by the link's source language.
pub fn link_color(source: &str) -> String {
    match language_rgb(source) {
        Some(rgb) => rgba(rgb, 0.8),
        None => {
            warn!(source, "no link color for language; using fallback");
            rgba(FALLBACK_RGB, 0.8)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_node_and_link_colors_share_rgb() {
        assert_eq!(node_color("Dutch"), "rgba(158, 115, 45, 1.0)");
        assert_eq!(link_color("Dutch"), "rgba(158, 115, 45, 0.8)");
    }

    #[test]
    fn test_non_language_labels_are_beige() {
        assert_eq!(node_color("at the bank"), "rgba(216, 198, 151, 1.0)");
        assert_eq!(node_color("partner"), "rgba(216, 198, 151, 1.0)");
    }

    #[test]
    fn test_unknown_language_link_falls_back() {
        assert_eq!(link_color("Elvish"), "rgba(128, 128, 128, 0.8)");
    }

    #[test]
    fn test_diacritics_match() {
        assert_eq!(link_color("Şexbizinî"), "rgba(249, 87, 56, 0.8)");
    }
}
