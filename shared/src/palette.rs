use crate::constants::PALETTE;

/// Display colour for the item at `index`. Colours repeat every eight items.
pub fn item_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// `#RRGGBB` plus a two digit alpha suffix, used for tinted backgrounds.
pub fn with_alpha(color: &str, alpha_hex: &str) -> String {
    format!("{}{}", color, alpha_hex)
}
