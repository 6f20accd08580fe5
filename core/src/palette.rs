//! Card background colors keyed by Pokémon type.

/// A 24-bit RGB color, `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u32);

/// Color used for unknown types and for Pokémon with no types.
pub const FALLBACK: Rgb = Rgb(0xAAAAAA);

const TYPE_COLORS: [(&str, Rgb); 18] = [
    ("fire", Rgb(0xFFA756)),
    ("water", Rgb(0x58ABF6)),
    ("grass", Rgb(0x8BBE8A)),
    ("poison", Rgb(0x9F5BBA)),
    ("electric", Rgb(0xFFCE4B)),
    ("ground", Rgb(0xD78555)),
    ("fairy", Rgb(0xEE99AC)),
    ("psychic", Rgb(0xFF9BB5)),
    ("rock", Rgb(0xB69E31)),
    ("fighting", Rgb(0xC03028)),
    ("ghost", Rgb(0x705898)),
    ("flying", Rgb(0xA890F0)),
    ("bug", Rgb(0xA8B820)),
    ("normal", Rgb(0xA8A878)),
    ("dark", Rgb(0x705848)),
    ("steel", Rgb(0xB8B8D0)),
    ("ice", Rgb(0x98D8D8)),
    ("dragon", Rgb(0x7038F8)),
];

/// How a card should be filled for a given list of types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backdrop {
    Solid(Rgb),
    /// Horizontal gradient through the colors, left to right.
    Gradient(Vec<Rgb>),
}

/// Color for a type name as returned by the API (lowercase).
pub fn type_color(name: &str) -> Rgb {
    TYPE_COLORS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK)
}

pub fn backdrop<S: AsRef<str>>(types: &[S]) -> Backdrop {
    let mut colors: Vec<Rgb> = types.iter().map(|t| type_color(t.as_ref())).collect();
    match colors.len() {
        0 => Backdrop::Solid(FALLBACK),
        1 => Backdrop::Solid(colors.remove(0)),
        _ => Backdrop::Gradient(colors),
    }
}
