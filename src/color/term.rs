//! `crossterm` colour interop.
//!
//! Palette colours are resolved to the xterm defaults so they can be emitted
//! as 24-bit sequences like any other colour.

use crossterm::style::Color;

use super::core::{Rgb, Rgba};

const XTERM_BASE: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

/// Resolve a 256-colour palette index to its xterm RGB value.
pub fn ansi_index_to_rgb(index: u8) -> Rgb {
    match index {
        0..=15 => XTERM_BASE[index as usize].into(),
        16..=231 => {
            let idx = index - 16;
            let level = |v: u8| if v == 0 { 0 } else { 55 + v * 40 };
            Rgb::new(level(idx / 36), level((idx % 36) / 6), level(idx % 6))
        }
        _ => {
            let gray = 8 + (index - 232) * 10;
            Rgb::new(gray, gray, gray)
        }
    }
}

fn resolve(color: &Color) -> Rgb {
    match *color {
        Color::Rgb { r, g, b } => Rgb::new(r, g, b),
        Color::AnsiValue(index) => ansi_index_to_rgb(index),
        Color::Reset | Color::Black => ansi_index_to_rgb(0),
        Color::DarkRed => ansi_index_to_rgb(1),
        Color::DarkGreen => ansi_index_to_rgb(2),
        Color::DarkYellow => ansi_index_to_rgb(3),
        Color::DarkBlue => ansi_index_to_rgb(4),
        Color::DarkMagenta => ansi_index_to_rgb(5),
        Color::DarkCyan => ansi_index_to_rgb(6),
        Color::Grey => ansi_index_to_rgb(7),
        Color::DarkGrey => ansi_index_to_rgb(8),
        Color::Red => ansi_index_to_rgb(9),
        Color::Green => ansi_index_to_rgb(10),
        Color::Yellow => ansi_index_to_rgb(11),
        Color::Blue => ansi_index_to_rgb(12),
        Color::Magenta => ansi_index_to_rgb(13),
        Color::Cyan => ansi_index_to_rgb(14),
        Color::White => ansi_index_to_rgb(15),
    }
}

impl Rgba for Color {
    fn rgba(&self) -> (u32, u32, u32, u32) {
        resolve(self).rgba()
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Color::Rgb {
            r: value.r,
            g: value.g,
            b: value.b,
        }
    }
}
