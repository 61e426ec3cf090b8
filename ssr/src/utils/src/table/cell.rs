use std::{cmp::Ordering, fmt};

/// Value a column extracts from a row, used for filtering and sorting.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    #[default]
    Empty,
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Ordering between two present values. Numbers sort before text.
    pub(crate) fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => natural_cmp(a, b),
            (CellValue::Number(_), CellValue::Text(_)) => Ordering::Less,
            (CellValue::Text(_), CellValue::Number(_)) => Ordering::Greater,
            (CellValue::Empty, CellValue::Empty) => Ordering::Equal,
            (CellValue::Empty, _) => Ordering::Greater,
            (_, CellValue::Empty) => Ordering::Less,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Empty => Ok(()),
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Number(value.into())
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Number(value.into())
    }
}

impl From<u64> for CellValue {
    fn from(value: u64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(value: Option<V>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Case-insensitive comparison where runs of digits compare by numeric value,
/// so "player10" sorts after "player9".
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let mut a_chunks = Chunks::new(&a);
    let mut b_chunks = Chunks::new(&b);

    loop {
        match (a_chunks.next(), b_chunks.next()) {
            (None, None) => return a.cmp(&b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (is_digits(x), is_digits(y)) {
                    (true, true) => cmp_digits(x, y),
                    _ => x.cmp(y),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn is_digits(chunk: &str) -> bool {
    chunk.starts_with(|c: char| c.is_ascii_digit())
}

fn cmp_digits(x: &str, y: &str) -> Ordering {
    let x = x.trim_start_matches('0');
    let y = y.trim_start_matches('0');
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}

/// Splits a string into alternating digit / non-digit runs.
struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .find(|c: char| c.is_ascii_digit() != digits)
            .unwrap_or(self.rest.len());
        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers_display_without_trailing_zero() {
        assert_eq!(CellValue::from(42u32).to_string(), "42");
        assert_eq!(CellValue::from(12.5).to_string(), "12.5");
        assert_eq!(CellValue::Empty.to_string(), "");
    }

    #[test]
    fn natural_order_compares_digit_runs_numerically() {
        assert_eq!(natural_cmp("player9", "player10"), Ordering::Less);
        assert_eq!(natural_cmp("Alice", "bob"), Ordering::Less);
        assert_eq!(natural_cmp("item007", "item7"), Ordering::Less);
        assert_eq!(natural_cmp("abc", "abc"), Ordering::Equal);
    }

    #[test]
    fn numbers_sort_before_text() {
        let n = CellValue::from(3u32);
        let t = CellValue::from("3");
        assert_eq!(n.compare(&t), Ordering::Less);
        assert_eq!(t.compare(&n), Ordering::Greater);
    }

    #[test]
    fn missing_option_is_empty() {
        assert!(CellValue::from(None::<u32>).is_empty());
        assert_eq!(CellValue::from(Some("x")), CellValue::Text("x".into()));
    }
}
