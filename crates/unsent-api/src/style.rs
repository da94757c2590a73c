//! Card styling: fixed mappings from a color theme to the utility
//! classes the feed cards are drawn with. Unrecognized keywords never
//! get here — they collapse to `Color::Default` at parse time.

use unsent_types::models::Color;

pub fn border_class(color: Color) -> &'static str {
    match color {
        Color::Default | Color::Gray => "border-gray-400",
        Color::Blue => "border-blue-400",
        Color::Purple => "border-purple-400",
        Color::Navy => "border-blue-900",
        Color::Maroon => "border-red-800",
        Color::Pink => "border-pink-400",
        Color::Teal => "border-teal-400",
    }
}

pub fn background_class(color: Color) -> &'static str {
    match color {
        Color::Default | Color::Gray => "bg-gray-100",
        Color::Blue | Color::Navy => "bg-blue-100",
        Color::Purple => "bg-purple-100",
        Color::Maroon => "bg-red-100",
        Color::Pink => "bg-pink-100",
        Color::Teal => "bg-teal-100",
    }
}

/// A card only takes the tinted background when the author asked for it;
/// otherwise the color shows as a border accent on the white card.
pub fn card_background(color: Color, full_bg: bool) -> &'static str {
    if full_bg {
        background_class(color)
    } else {
        "bg-white/90"
    }
}
