//! Fill color normalization.
//!
//! Shapes store the color exactly as the color picker reports it. When drawn,
//! the color is rewritten as an `rgba(...)` string carrying the fill opacity.

pub const DEFAULT_COLOR: &str = "#000000";

/// Rewrites `color` as an `rgba(...)` string with the given opacity.
///
/// Accepts `#rgb`, `#rrggbb` and `rgb(r,g,b)`. Anything else, including
/// `rgba(...)` and named colors, comes back unchanged.
///
/// ```
/// use shapekit_designer::color::to_rgba;
///
/// assert_eq!(to_rgba("#fff", 0.5), "rgba(255, 255, 255, 0.5)");
/// assert_eq!(to_rgba("rgb(10,20,30)", 0.5), "rgba(10,20,30, 0.5)");
/// ```
pub fn to_rgba(color: &str, opacity: f64) -> String {
    if let Some(hex) = color.strip_prefix('#') {
        return match parse_hex(hex) {
            Some((r, g, b)) => format!("rgba({}, {}, {}, {})", r, g, b, opacity),
            None => color.to_string(),
        };
    }

    if color.starts_with("rgb(") && color.contains(')') {
        return color
            .replacen(')', &format!(", {})", opacity), 1)
            .replacen("rgb", "rgba", 1);
    }

    color.to_string()
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_forms() {
        assert_eq!(to_rgba("#fff", 0.5), "rgba(255, 255, 255, 0.5)");
        assert_eq!(to_rgba("#ff0000", 1.0), "rgba(255, 0, 0, 1)");
        assert_eq!(to_rgba("#0066FF", 0.25), "rgba(0, 102, 255, 0.25)");
        assert_eq!(to_rgba("#a1b", 0.5), "rgba(170, 17, 187, 0.5)");
    }

    #[test]
    fn test_rgb_form() {
        assert_eq!(to_rgba("rgb(10,20,30)", 0.5), "rgba(10,20,30, 0.5)");
        assert_eq!(to_rgba("rgb(1, 2, 3)", 1.0), "rgba(1, 2, 3, 1)");
    }

    #[test]
    fn test_unrecognized_passes_through() {
        assert_eq!(to_rgba("red", 0.5), "red");
        assert_eq!(to_rgba("#ggg", 0.5), "#ggg");
        assert_eq!(to_rgba("#abcd", 0.5), "#abcd");
        assert_eq!(to_rgba("rgba(1,2,3,0.4)", 0.5), "rgba(1,2,3,0.4)");
        assert_eq!(to_rgba("", 0.5), "");
    }
}
