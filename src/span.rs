/// Display category assigned to a run of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Comment,
    String,
    Keyword,
    Operator,
    Symbol,
    Function,
    Number,
    Plain,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Comment => "comment",
            Category::String => "string",
            Category::Keyword => "keyword",
            Category::Operator => "operator",
            Category::Symbol => "symbol",
            Category::Function => "function",
            Category::Number => "number",
            Category::Plain => "plain",
        };
        f.write_str(name)
    }
}

/// Document coordinate: row and column, relative to the caller's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// A contiguous run of text tagged with one category and its coordinates.
///
/// `end` is exclusive: the coordinate the cursor holds after the last
/// character of the run. Concatenating the `text` of every span produced
/// for an input reconstructs that input exactly, whitespace included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub category: Category,
    pub text: String,
    pub start: Position,
    pub end: Position,
}

impl Span {
    #[must_use]
    pub fn new(category: Category, text: impl Into<String>, start: Position, end: Position) -> Self {
        Span { category, text: text.into(), start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_display() {
        assert_eq!(Position::new(3, 14).to_string(), "3:14");
    }

    #[test]
    fn category_display_names() {
        assert_eq!(Category::Keyword.to_string(), "keyword");
        assert_eq!(Category::Plain.to_string(), "plain");
    }
}
