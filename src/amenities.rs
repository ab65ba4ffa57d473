/// Glyph used for amenities missing from the table
pub const DEFAULT_GLYPH: &str = "star";

const AMENITY_GLYPHS: &[(&str, &str)] = &[
    ("WiFi", "wifi"),
    ("Pool", "waves"),
    ("Kitchen", "utensils"),
    ("Air conditioning", "wind"),
    ("Free parking", "car"),
    ("Fireplace", "flame"),
    ("Heating", "flame"),
];

/// Icon name shown next to an amenity on the details page
pub fn glyph_for(amenity: &str) -> &'static str {
    AMENITY_GLYPHS
        .iter()
        .find(|(name, _)| *name == amenity)
        .map(|(_, glyph)| *glyph)
        .unwrap_or(DEFAULT_GLYPH)
}
