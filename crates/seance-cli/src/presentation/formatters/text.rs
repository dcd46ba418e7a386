/// Marker appended to cut cells
pub const ELLIPSIS: char = '…';

/// Fit `text` into `width` characters, replacing the tail with `…` when it is cut.
pub fn truncate_cell(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push(ELLIPSIS);
    cut
}

/// Left-align `text` in a column of `width` characters.
pub fn pad_cell(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}
