//! Color swatch lookup for the color tags shown on item cards.

/// Swatch used when a color name is not in the table.
pub const FALLBACK_COLOR: &str = "#888888";

/// Swedish color names first, then English fallbacks.
const COLOR_TABLE: &[(&str, &str)] = &[
    ("svart", "#1a1a1a"),
    ("vit", "#ffffff"),
    ("röd", "#e07a5f"),
    ("blå", "#3d5a80"),
    ("grön", "#81b29a"),
    ("gul", "#f4d35e"),
    ("orange", "#f4a261"),
    ("lila", "#8e6c88"),
    ("rosa", "#e8b4bc"),
    ("brun", "#8b4513"),
    ("guld", "#d4a574"),
    ("silver", "#c0c0c0"),
    ("turkos", "#40e0d0"),
    ("korall", "#e07a5f"),
    ("mint", "#98ff98"),
    ("lavendel", "#e6e6fa"),
    ("persika", "#ffcba4"),
    ("beige", "#f5f5dc"),
    ("grå", "#888888"),
    ("black", "#1a1a1a"),
    ("white", "#ffffff"),
    ("red", "#e07a5f"),
    ("blue", "#3d5a80"),
    ("green", "#81b29a"),
    ("yellow", "#f4d35e"),
    ("purple", "#8e6c88"),
    ("pink", "#e8b4bc"),
    ("gold", "#d4a574"),
];

/// Resolve a color name to a CSS color value.
///
/// Hex values (`#...`) pass through unchanged. Names are matched
/// case-insensitively against the table; anything else resolves to
/// [`FALLBACK_COLOR`].
pub fn color_value(name: &str) -> &str {
    let name = name.trim();
    if name.starts_with('#') {
        return name;
    }
    let lower = name.to_lowercase();
    COLOR_TABLE
        .iter()
        .find(|(key, _)| *key == lower)
        .map(|(_, hex)| *hex)
        .unwrap_or(FALLBACK_COLOR)
}
