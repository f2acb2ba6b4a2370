//! Color helpers for hex tokens.

/// Parses a `#RGB` or `#RRGGBB` hex color into an RGB triplet.
///
/// Returns `None` for anything else, including colors that already carry an
/// alpha channel.
///
/// # Example
///
/// ```rust
/// use bear_theme::parse_hex;
///
/// assert_eq!(parse_hex("#FF3A00"), Some((255, 58, 0)));
/// assert_eq!(parse_hex("#fff"), Some((255, 255, 255)));
/// assert_eq!(parse_hex("red"), None);
/// ```
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut channels = hex.chars().map(|c| {
                let v = c.to_digit(16).unwrap_or(0) as u8;
                v * 17
            });
            Some((channels.next()?, channels.next()?, channels.next()?))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some((channel(0)?, channel(2)?, channel(4)?))
        }
        _ => None,
    }
}

/// Appends a two-digit hex alpha to a six-digit hex color.
///
/// Used for translucent variants such as focus rings (`<accent>20`) and
/// tinted backgrounds (`<background>90`). Colors that are not `#RRGGBB`
/// are returned unchanged, since suffixing them would not produce a valid
/// color.
///
/// ```rust
/// use bear_theme::with_alpha;
///
/// assert_eq!(with_alpha("#F0B9DD", "20"), "#F0B9DD20");
/// assert_eq!(with_alpha("transparent", "20"), "transparent");
/// ```
pub fn with_alpha(color: &str, alpha: &str) -> String {
    let is_rrggbb = color.len() == 7 && parse_hex(color).is_some();
    let is_alpha = alpha.len() == 2 && alpha.chars().all(|c| c.is_ascii_hexdigit());
    if is_rrggbb && is_alpha {
        format!("{}{}", color, alpha)
    } else {
        color.to_string()
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// # Example
///
/// ```rust
/// use bear_theme::rgb_to_ansi256;
///
/// // Pure red maps to ANSI 196
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}
