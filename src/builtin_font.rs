//! Built-in 5x7 bitmap font
//!
//! Used when no TrueType font can be loaded. Each glyph is seven rows of five
//! bits, most significant bit on the left. Every set bit is drawn as a filled
//! square cell.

pub const GLYPH_COLUMNS: u32 = 5;
pub const GLYPH_ROWS: u32 = 7;

/// Horizontal advance in cells, including one column of spacing
pub const ADVANCE_COLUMNS: u32 = GLYPH_COLUMNS + 1;

const BLANK: [u8; 7] = [0; 7];

pub fn glyph(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        _ => BLANK,
    }
}

/// Cells set in `text`, as (column, row) with columns counted across the whole string
pub fn cells(text: &str) -> impl Iterator<Item = (u32, u32)> + '_ {
    text.chars().enumerate().flat_map(|(index, c)| {
        let rows = glyph(c);
        let origin = index as u32 * ADVANCE_COLUMNS;
        (0..GLYPH_ROWS).flat_map(move |row| {
            (0..GLYPH_COLUMNS).filter_map(move |col| {
                let bit = 1 << (GLYPH_COLUMNS - 1 - col);
                if rows[row as usize] & bit != 0 {
                    Some((origin + col, row))
                } else {
                    None
                }
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_digits_have_ink() {
        for c in ('A'..='Z').chain('0'..='9') {
            assert_ne!(glyph(c), BLANK, "glyph for {:?} is blank", c);
        }
    }

    #[test]
    fn test_lowercase_maps_to_uppercase() {
        assert_eq!(glyph('m'), glyph('M'));
    }

    #[test]
    fn test_unknown_chars_are_blank() {
        assert_eq!(glyph(' '), BLANK);
        assert_eq!(glyph('é'), BLANK);
    }

    #[test]
    fn test_glyphs_fit_five_columns() {
        for c in ('A'..='Z').chain('0'..='9') {
            assert!(glyph(c).iter().all(|row| *row < 0x20));
        }
    }

    #[test]
    fn test_cells_advance_per_character() {
        let cells: Vec<_> = cells("MC").collect();
        let max_col = cells.iter().map(|(col, _)| *col).max().unwrap();
        let max_row = cells.iter().map(|(_, row)| *row).max().unwrap();
        // C's rightmost ink is its last column
        assert_eq!(max_col, ADVANCE_COLUMNS + GLYPH_COLUMNS - 1);
        assert_eq!(max_row, GLYPH_ROWS - 1);
        assert!(cells.contains(&(0, 0)));
    }
}
