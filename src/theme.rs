//! Styling: map span categories to output styles (ANSI, or plain).
//!
//! The engine never chooses colors; it emits abstract categories. A theme
//! turns each category into a prefix/suffix pair, and [`paint`] folds a
//! span sequence into one styled string.

use crate::span::{Category, Span};

/// Something that can wrap a category in a prefix/suffix (e.g. ANSI codes).
pub trait Theme {
    /// Prefix to emit before a span with this category (e.g. ANSI color).
    fn prefix(&self, category: Category) -> &str;
    /// Suffix to emit after the span (e.g. reset).
    fn suffix(&self, category: Category) -> &str;
}

/// ANSI terminal theme.
#[derive(Debug)]
pub struct AnsiTheme {
    reset: String,
    comment: String,
    string: String,
    keyword: String,
    operator: String,
    symbol: String,
    function: String,
    number: String,
    plain: String,
}

impl AnsiTheme {
    /// Richer colors (One Dark / Dracula–inspired) for dark backgrounds.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            reset: "\x1b[0m".into(),
            comment: "\x1b[38;5;246m".into(),  // gray
            string: "\x1b[38;5;113m".into(),   // green
            keyword: "\x1b[38;5;208m".into(),  // orange
            operator: "\x1b[38;5;81m".into(),  // cyan
            symbol: "\x1b[38;5;102m".into(),   // dim gray
            function: "\x1b[38;5;117m".into(), // light blue
            number: "\x1b[38;5;179m".into(),   // gold/amber
            plain: String::new(),
        }
    }

    /// No ANSI codes (plain text).
    #[must_use]
    pub fn none() -> Self {
        Self {
            reset: String::new(),
            comment: String::new(),
            string: String::new(),
            keyword: String::new(),
            operator: String::new(),
            symbol: String::new(),
            function: String::new(),
            number: String::new(),
            plain: String::new(),
        }
    }

    fn style(&self, category: Category) -> &str {
        match category {
            Category::Comment => self.comment.as_str(),
            Category::String => self.string.as_str(),
            Category::Keyword => self.keyword.as_str(),
            Category::Operator => self.operator.as_str(),
            Category::Symbol => self.symbol.as_str(),
            Category::Function => self.function.as_str(),
            Category::Number => self.number.as_str(),
            Category::Plain => self.plain.as_str(),
        }
    }
}

impl Theme for AnsiTheme {
    fn prefix(&self, category: Category) -> &str {
        self.style(category)
    }

    fn suffix(&self, category: Category) -> &str {
        // Unstyled spans get no reset either, so plain text stays byte-exact.
        if self.style(category).is_empty() {
            ""
        } else {
            self.reset.as_str()
        }
    }
}

/// Fold spans into a single styled string.
#[must_use]
pub fn paint<T: Theme>(spans: &[Span], theme: &T) -> String {
    let text_len: usize = spans.iter().map(|s| s.text.len()).sum();
    let mut out = String::with_capacity(text_len + spans.len() * 16); // rough ANSI overhead
    for span in spans {
        out.push_str(theme.prefix(span.category));
        out.push_str(&span.text);
        out.push_str(theme.suffix(span.category));
    }
    out
}
