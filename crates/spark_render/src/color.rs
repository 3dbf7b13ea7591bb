//! Resolving color tokens into RGBA

use std::collections::HashMap;

use lightningcss::traits::Parse;
use lightningcss::values::color::{CssColor, FloatColor};
use spark_core::ColorToken;

/// Straight (non-premultiplied) 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba { r: 0, g: 0, b: 0, a: 0 };

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse any CSS color: hex forms, `rgb()`/`rgba()`, `hsl()`, `hwb()`,
    /// the wider-gamut functions and every named color. Non-sRGB colors are
    /// mapped into sRGB.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        // hex is what the palette uses, skip the CSS parser for it
        if let Some(hex) = token.strip_prefix('#') {
            return parse_hex(hex);
        }
        parse_css(token)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Channels as `0.0..=1.0` floats
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Like [`Rgba::to_f32`] with the color channels decoded to linear light,
    /// for render targets that re-encode to sRGB on write. Alpha stays as is.
    pub fn to_linear_f32(self) -> [f32; 4] {
        let [r, g, b, a] = self.to_f32();
        [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a]
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(Rgba::opaque(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Rgba { r: nibble(0)?, g: nibble(1)?, b: nibble(2)?, a: nibble(3)? }),
        6 => Some(Rgba::opaque(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Rgba { r: byte(0)?, g: byte(2)?, b: byte(4)?, a: byte(6)? }),
        _ => None,
    }
}

fn parse_css(token: &str) -> Option<Rgba> {
    let color = CssColor::parse_string(token).ok()?.to_rgb().ok()?;
    match color {
        CssColor::RGBA(rgba) => Some(Rgba {
            r: rgba.red,
            g: rgba.green,
            b: rgba.blue,
            a: rgba.alpha,
        }),
        // components given as `none` stay in float form
        CssColor::Float(float) => match float.as_ref() {
            FloatColor::RGB(rgb) => {
                let unit = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
                Some(Rgba {
                    r: unit(rgb.r),
                    g: unit(rgb.g),
                    b: unit(rgb.b),
                    a: unit(rgb.alpha),
                })
            }
            _ => None,
        },
        _ => None,
    }
}

/// Memoizes token resolution. Unknown tokens fall back to white and are
/// reported once.
#[derive(Debug, Default)]
pub struct ColorCache {
    resolved: HashMap<ColorToken, Rgba>,
}

impl ColorCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, token: &ColorToken) -> Rgba {
        if let Some(rgba) = self.resolved.get(token) {
            return *rgba;
        }
        let rgba = Rgba::parse(token.as_str()).unwrap_or_else(|| {
            tracing::warn!(color = %token, "unrecognized color, drawing white");
            Rgba::WHITE
        });
        self.resolved.insert(token.clone(), rgba);
        rgba
    }

    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }
}
