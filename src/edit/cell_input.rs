/// Interprets raw grid-cell text as a cell value.
///
/// Returns `Some(None)` for the empty string ("no value yet"), `Some(value)`
/// when the input parses as an integer after stripping non-digit characters
/// (a single leading `-` keeps its sign), and `None` when the edit must be
/// rejected.
#[must_use]
pub fn parse_cell_input(raw: &str) -> Option<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(None);
    }

    let negative = trimmed.starts_with('-');
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.parse::<i64>().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    Some(Some(value as f64))
}
