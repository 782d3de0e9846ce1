//! CSS hex color helpers used when validating palette entries.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// RGBA channels parsed from a CSS hex color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` into channels.
///
/// Alpha defaults to `0xff` for the forms that omit it.
pub fn parse_hex_rgba(raw: &str) -> Option<Rgba> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 | 4 => {
            let nibble = |i: usize| channel(&hex[i..=i].repeat(2));
            let a = if hex.len() == 4 { nibble(3)? } else { 0xff };
            Some(Rgba { r: nibble(0)?, g: nibble(1)?, b: nibble(2)?, a })
        }
        6 | 8 => {
            let pair = |i: usize| channel(&hex[i..i + 2]);
            let a = if hex.len() == 8 { pair(6)? } else { 0xff };
            Some(Rgba { r: pair(0)?, g: pair(2)?, b: pair(4)?, a })
        }
        _ => None,
    }
}

/// Whether `raw` is a hex color a stylesheet variable can hold.
pub fn is_hex_color(raw: &str) -> bool {
    parse_hex_rgba(raw).is_some()
}

fn channel(hex: &str) -> Option<u8> {
    match u8::from_str_radix(hex, 16) {
        Ok(v) => Some(v),
        Err(_) => None,
    }
}
