//! Named-color table
//!
//! Maps a normalized color name to a `#`-prefixed hex string. Names are
//! matched after trimming, lowercasing and removing spaces, so
//! `"Rebecca Purple"` and `"rebeccapurple"` resolve the same way.
//!
//! The table holds the CSS/X11 names, a few common misspellings and
//! synonyms (`burgendy`, `ochre`, `mint`), `clear`/`transparent` (the only
//! entries carrying an alpha byte, both zero) and a block of brand and
//! pop-culture aliases such as `dotnetpurple2024` or `shrekgreen`.
//!
//! Unknown names are handed back unchanged. Callers detect a miss by the
//! missing leading `#` and let the hex stage report the failure.

pub mod known;

use std::borrow::Cow;

/// Normalized name to hex, sorted by name for binary search
static NAMED_COLORS: &[(&str, &str)] = &[
    ("aliceblue", "#F0F8FF"),
    ("amigawhite", "#FFFFFF"),
    ("androidbotgreen2024", "#A7CD45"),
    ("antiquewhite", "#FAEBD7"),
    ("appleiibeige", "#D3D3D3"),
    ("aqua", "#00FFFF"),
    ("aquamarine", "#7FFFD4"),
    ("atari800blue", "#0057A0"),
    ("azure", "#F0FFFF"),
    ("barbiepink", "#DA1884"),
    ("beige", "#F5F5DC"),
    ("bisque", "#FFE4C4"),
    ("black", "#000000"),
    ("blanchedalmond", "#FFEBCD"),
    ("blue", "#0000FF"),
    ("blueviolet", "#8A2BE2"),
    ("bratautumn", "#FF8C00"),
    ("bratsummer", "#8ACE00"),
    ("brown", "#A52A2A"),
    ("burgendy", "#FF6347"),
    ("burlywood", "#DEB887"),
    ("cadetblue", "#5F9EA0"),
    ("carebearsrainbow", "#FF69B4"),
    ("chartreuse", "#7FFF00"),
    ("chocolate", "#D2691E"),
    ("clear", "#00000000"),
    ("commodore64brown", "#6C4F3D"),
    ("coral", "#FF7F50"),
    ("cornflowerblue", "#6495ED"),
    ("cornsilk", "#FFF8DC"),
    ("crimson", "#DC143C"),
    ("cyan", "#00FFFF"),
    ("darkblue", "#00008B"),
    ("darkcyan", "#008B8B"),
    ("darkgoldenrod", "#B8860B"),
    ("darkgray", "#A9A9A9"),
    ("darkgreen", "#006400"),
    ("darkgrey", "#A9A9A9"),
    ("darkkhaki", "#BDB76B"),
    ("darkmagenta", "#8B008B"),
    ("darkolivegreen", "#556B2F"),
    ("darkorange", "#FF8C00"),
    ("darkorchid", "#9932CC"),
    ("darkred", "#8B0000"),
    ("darksalmon", "#E9967A"),
    ("darkseagreen", "#8FBC8B"),
    ("darkslateblue", "#483D8B"),
    ("darkslategray", "#2F4F4F"),
    ("darkslategrey", "#2F4F4F"),
    ("darkturquoise", "#00CED1"),
    ("darkviolet", "#9400D3"),
    ("darkyellow", "#D7C32A"),
    ("deeppink", "#FF1493"),
    ("deepskyblue", "#00BFFF"),
    ("dimgray", "#696969"),
    ("dimgrey", "#696969"),
    ("dodgerblue", "#1E90FF"),
    ("dotnetpurple2024", "#512BD4"),
    ("firebrick", "#B22222"),
    ("floralwhite", "#FFFAF0"),
    ("forestgreen", "#228B22"),
    ("fuchsia", "#FF00FF"),
    ("gainsboro", "#DCDCDC"),
    ("gameboygreen", "#9BBC0F"),
    ("ghostwhite", "#F8F8FF"),
    ("gijoegreen", "#4B5320"),
    ("gold", "#FFD700"),
    ("goldenrod", "#DAA520"),
    ("gray", "#808080"),
    ("green", "#008000"),
    ("greenyellow", "#ADFF2F"),
    ("grey", "#808080"),
    ("honeydew", "#F0FFF0"),
    ("hotpink", "#FF69B4"),
    ("hotwheelsblue", "#005BAC"),
    ("ibmpcgray", "#808080"),
    ("indianred", "#CD5C5C"),
    ("indigo", "#4B0082"),
    ("ivory", "#FFFFF0"),
    ("khaki", "#F0E68C"),
    ("lavender", "#E6E6FA"),
    ("lavenderblush", "#FFF0F5"),
    ("lawngreen", "#7CFC00"),
    ("legored", "#B40000"),
    ("lemonchiffon", "#FFFACD"),
    ("lightblue", "#ADD8E6"),
    ("lightcoral", "#F08080"),
    ("lightcyan", "#E0FFFF"),
    ("lightgoldenrodyellow", "#FAFAD2"),
    ("lightgray", "#D3D3D3"),
    ("lightgreen", "#90EE90"),
    ("lightgrey", "#D3D3D3"),
    ("lightpink", "#FFB6C1"),
    ("lightsalmon", "#FFA07A"),
    ("lightseagreen", "#20B2AA"),
    ("lightskyblue", "#87CEFA"),
    ("lightslategray", "#778899"),
    ("lightslategrey", "#778899"),
    ("lightsteelblue", "#B0C4DE"),
    ("lightyellow", "#FFFFE0"),
    ("lime", "#00FF00"),
    ("limegreen", "#32CD32"),
    ("linen", "#FAF0E6"),
    ("magenta", "#FF00FF"),
    ("maroon", "#800000"),
    ("mediumaquamarine", "#66CDAA"),
    ("mediumblue", "#0000CD"),
    ("mediumorchid", "#BA55D3"),
    ("mediumpurple", "#9370DB"),
    ("mediumseagreen", "#3CB371"),
    ("mediumslateblue", "#7B68EE"),
    ("mediumspringgreen", "#00FA9A"),
    ("mediumturquoise", "#48D1CC"),
    ("mediumvioletred", "#C71585"),
    ("midnightblue", "#191970"),
    ("mint", "#66CDAA"),
    ("mintcream", "#F5FFFA"),
    ("mistyrose", "#FFE4E1"),
    ("moccasin", "#FFE4B5"),
    ("msxblue", "#0000FF"),
    ("mushypeas", "#5FA41C"),
    ("mylittleponypurple", "#DDA0DD"),
    ("navajowhite", "#FFDEAD"),
    ("navy", "#000080"),
    ("neonelectricblue", "#154FEE"),
    ("neonvividmagenta", "#FF08FC"),
    ("nerforange", "#FF6F00"),
    ("ochre", "#D7C32A"),
    ("oldlace", "#FDF5E6"),
    ("olive", "#808000"),
    ("olivedrab", "#6B8E23"),
    ("orange", "#FFA500"),
    ("orangered", "#FF4500"),
    ("orchid", "#DA70D6"),
    ("painfulred", "#FF1A00"),
    ("palegoldenrod", "#EEE8AA"),
    ("palegreen", "#98FB98"),
    ("paleturquoise", "#AFEEEE"),
    ("palevioletred", "#DB7093"),
    ("papayawhip", "#FFEFD5"),
    ("peachpuff", "#FFDAB9"),
    ("peru", "#CD853F"),
    ("pink", "#FFC0CB"),
    ("playdohyellow", "#FBE870"),
    ("plum", "#DDA0DD"),
    ("potatoheadbrown", "#8B4513"),
    ("powderblue", "#B0E0E6"),
    ("powerrangersred", "#FF0000"),
    ("pukepink", "#FF3AC6"),
    ("pumpkin", "#FF4500"),
    ("purple", "#800080"),
    ("rebeccapurple", "#663399"),
    ("red", "#FF0000"),
    ("rosybrown", "#BC8F8F"),
    ("royalblue", "#4169E1"),
    ("rubberduckyellow", "#FFD700"),
    ("saddlebrown", "#8B4513"),
    ("salmon", "#FA8072"),
    ("sandybrown", "#F4A460"),
    ("seagreen", "#2E8B57"),
    ("seashell", "#FFF5EE"),
    ("shrekgreen", "#009B00"),
    ("sienna", "#A0522D"),
    ("silver", "#C0C0C0"),
    ("skyblue", "#87CEEB"),
    ("slateblue", "#6A5ACD"),
    ("slategray", "#708090"),
    ("slategrey", "#708090"),
    ("snow", "#FFFAFA"),
    ("springgreen", "#00FF7F"),
    ("steelblue", "#4682B4"),
    ("tan", "#D2B48C"),
    ("teal", "#008080"),
    ("teenagemutantninjaturtlesgreen", "#008000"),
    ("thistle", "#D8BFD8"),
    ("ticklemeelmored", "#FF3F3F"),
    ("tomato", "#FF6347"),
    ("transformerssilver", "#C0C0C0"),
    ("transparent", "#00000000"),
    ("trs80silver", "#C0C0C0"),
    ("turquoise", "#40E0D0"),
    ("violet", "#EE82EE"),
    ("volt", "#CEFF00"),
    ("wheat", "#F5DEB3"),
    ("white", "#FFFFFF"),
    ("whitesmoke", "#F5F5F5"),
    ("xamarinblue2011", "#5596D8"),
    ("yellow", "#FFFF00"),
    ("yellowgreen", "#9ACD32"),
    ("zxspectrumblack", "#000000"),
];

/// Normalize a color name: trim, lowercase, drop spaces
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| *c != ' ')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Look up a name, returning the hex string if known
pub fn lookup(name: &str) -> Option<&'static str> {
    let key = normalize_name(name);
    NAMED_COLORS
        .binary_search_by(|(entry, _)| (*entry).cmp(key.as_str()))
        .ok()
        .map(|idx| NAMED_COLORS[idx].1)
}

/// Resolve a name to its hex string, or return the trimmed input unchanged
pub fn resolve(name: &str) -> Cow<'_, str> {
    match lookup(name) {
        Some(hex) => Cow::Borrowed(hex),
        None => {
            log::trace!("no named color for '{}'", name.trim());
            Cow::Borrowed(name.trim())
        }
    }
}

/// Iterate over every `(name, hex)` entry in the table
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    NAMED_COLORS.iter().copied()
}

/// Number of entries in the table
pub fn len() -> usize {
    NAMED_COLORS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        for pair in NAMED_COLORS.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} >= {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn test_every_entry_is_hex() {
        for (name, hex) in entries() {
            assert!(hex.starts_with('#'), "{name}");
            let digits = &hex[1..];
            assert!(digits.len() == 6 || digits.len() == 8, "{name}");
            assert!(digits.chars().all(|c| c.is_ascii_hexdigit()), "{name}");
        }
    }

    #[test]
    fn test_only_clear_and_transparent_carry_alpha() {
        let with_alpha: Vec<_> = entries()
            .filter(|(_, hex)| hex.len() == 9)
            .map(|(name, _)| name)
            .collect();
        assert_eq!(with_alpha, ["clear", "transparent"]);
        assert_eq!(lookup("clear"), Some("#00000000"));
    }

    #[test]
    fn test_case_and_space_insensitive() {
        assert_eq!(resolve("Rebecca Purple"), "#663399");
        assert_eq!(resolve("  RED "), "#FF0000");
        assert_eq!(resolve("Dark Slate Grey"), "#2F4F4F");
        assert_eq!(resolve("Shrek Green"), "#009B00");
    }

    #[test]
    fn test_unknown_passes_through_trimmed() {
        assert_eq!(resolve("  NotAColor "), "NotAColor");
        assert_eq!(resolve("#FF0000"), "#FF0000");
        assert_eq!(resolve(""), "");
    }

    #[test]
    fn test_size() {
        assert_eq!(len(), 190);
    }
}
