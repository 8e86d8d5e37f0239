use ratatui::style::Color;

/// Colours for the viewer. Token colours are keyed by lexer kind, so a
/// lexical error looks different from a keyword even where the parser
/// accepted neither.
pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Brackets, rule names in the trace
    pub secondary: Color, // Line number of the selected token
    pub comment: Color,   // Line numbers, muted table columns
    pub success: Color,   // ACCEPTED
    pub error: Color,     // ERROR tokens and the failing line
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub operator: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub type_name: Color, // int, float, boolean, ...
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(203, 166, 247),  // Mauve, apart from brackets
    string: Color::Rgb(166, 227, 161),
    number: Color::Rgb(250, 179, 135),
    operator: Color::Rgb(245, 194, 231),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    current_line_bg: Color::Rgb(50, 50, 70),
    type_name: Color::Rgb(148, 226, 213),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_kinds_are_told_apart() {
        let t = &DEFAULT_THEME;
        assert_ne!(t.keyword, t.primary);
        assert_ne!(t.keyword, t.type_name);
        assert_ne!(t.error, t.fg);
        assert_ne!(t.operator, t.number);
    }
}
