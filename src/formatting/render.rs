//! Text and JSON rendering of [`Table`]s.

use crate::error::Result;

use super::table::{Row, RowKind, Table};

/// Bright green foreground.
pub const ANSI_HIGHLIGHT: &str = "\x1b[92m";
pub const ANSI_RESET: &str = "\x1b[0m";

/// Output format for rendered tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFormat {
    /// Labelled rows of centered cells.
    #[default]
    Text,
    /// The structured table as pretty-printed JSON.
    Json,
}

/// Markers written around a highlighted cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub start: String,
    pub end: String,
}

impl Highlight {
    pub fn ansi() -> Self {
        Self {
            start: ANSI_HIGHLIGHT.to_string(),
            end: ANSI_RESET.to_string(),
        }
    }
}

/// Separator, labels and highlight markers used for text output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStyle {
    separator: String,
    index_label: String,
    value_label: String,
    highlight: Option<Highlight>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderStyle {
    /// Two-space separator, `Index: `/`Value: ` labels and ANSI highlighting.
    pub fn new() -> Self {
        Self {
            separator: "  ".to_string(),
            index_label: "Index: ".to_string(),
            value_label: "Value: ".to_string(),
            highlight: Some(Highlight::ansi()),
        }
    }

    /// Same layout without any escape codes.
    pub fn plain() -> Self {
        Self::new().with_highlight(None)
    }

    /// ANSI highlighting unless disabled on the command line or the terminal
    /// does not take colors (`NO_COLOR`, `CLICOLOR=0`, not a TTY).
    pub fn for_terminal(no_color: bool) -> Self {
        if !no_color && console::colors_enabled() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_labels(mut self, index: impl Into<String>, value: impl Into<String>) -> Self {
        self.index_label = index.into();
        self.value_label = value.into();
        self
    }

    pub fn with_highlight(mut self, highlight: Option<Highlight>) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn highlight(&self) -> Option<&Highlight> {
        self.highlight.as_ref()
    }

    fn label(&self, kind: RowKind) -> &str {
        match kind {
            RowKind::Index => &self.index_label,
            RowKind::Value => &self.value_label,
        }
    }
}

/// Turns structured tables into output text.
#[derive(Debug, Clone, Default)]
pub struct TableRenderer {
    style: RenderStyle,
    format: TableFormat,
}

impl TableRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_format(mut self, format: TableFormat) -> Self {
        self.format = format;
        self
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Renders the table in the configured format, newline terminated.
    pub fn render(&self, table: &Table) -> Result<String> {
        match self.format {
            TableFormat::Text => {
                let mut output = String::new();
                for line in self.render_lines(table) {
                    output.push_str(&line);
                    output.push('\n');
                }
                Ok(output)
            }
            TableFormat::Json => {
                let mut output = serde_json::to_string_pretty(table)?;
                output.push('\n');
                Ok(output)
            }
        }
    }

    /// The header line followed by one line per value row.
    pub fn render_lines(&self, table: &Table) -> Vec<String> {
        std::iter::once(&table.header)
            .chain(&table.rows)
            .map(|row| self.render_row(row))
            .collect()
    }

    /// Label, a space, then the cells joined by the separator.
    pub fn render_row(&self, row: &Row) -> String {
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|cell| match (&self.style.highlight, cell.highlighted) {
                (Some(h), true) => format!("{}{}{}", h.start, cell.text, h.end),
                _ => cell.text.clone(),
            })
            .collect();

        format!(
            "{} {}",
            self.style.label(row.kind),
            cells.join(self.style.separator.as_str())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_token;

    fn single(token: &str) -> Table {
        Table::single(&parse_token(token).unwrap())
    }

    fn compare(tokens: &[&str]) -> Table {
        Table::compare_lines(tokens).unwrap()
    }

    #[test]
    fn test_single_text_layout() {
        let renderer = TableRenderer::new();
        let lines = renderer.render_lines(&single("255"));
        assert_eq!(lines, vec!["Index:  0   1 ", "Value:  F   F "]);
    }

    #[test]
    fn test_single_never_highlighted() {
        let renderer = TableRenderer::new();
        let text = renderer.render(&single("0xDEAD")).unwrap();
        assert!(!text.contains('\x1b'));
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_compare_ansi_highlight() {
        let renderer = TableRenderer::new();
        let lines = renderer.render_lines(&compare(&["0x1A", "0x1F"]));
        assert_eq!(
            lines,
            vec![
                "Index:  \x1b[92m0 \x1b[0m  1 ",
                "Value:  \x1b[92m1 \x1b[0m  A ",
                "Value:  \x1b[92m1 \x1b[0m  F ",
            ]
        );
    }

    #[test]
    fn test_compare_plain_style() {
        let renderer = TableRenderer::new().with_style(RenderStyle::plain());
        let lines = renderer.render_lines(&compare(&["1", "256"]));
        assert_eq!(
            lines,
            vec!["Index:  0   1   2 ", "Value:  0   0   1 ", "Value:  1   0   0 "]
        );
    }

    #[test]
    fn test_highlight_does_not_change_visible_width() {
        let table = compare(&["0xFF00", "0xFF11", "0x0F22"]);
        let colored = TableRenderer::new().render_lines(&table);
        let plain = TableRenderer::new()
            .with_style(RenderStyle::plain())
            .render_lines(&table);

        for (c, p) in colored.iter().zip(&plain) {
            assert_ne!(c, p);
            assert_eq!(console::measure_text_width(c), p.len());
        }
    }

    #[test]
    fn test_custom_style() {
        let style = RenderStyle::plain()
            .with_separator("|")
            .with_labels("i:", "v:")
            .with_highlight(Some(Highlight {
                start: "[".to_string(),
                end: "]".to_string(),
            }));
        let renderer = TableRenderer::new().with_style(style);
        let lines = renderer.render_lines(&compare(&["0xA1", "0xA2"]));
        assert_eq!(lines, vec!["i: [0 ]|1 ", "v: [A ]|1 ", "v: [A ]|2 "]);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let renderer = TableRenderer::new();
        let table = compare(&["4096", "0x1001", "ffff"]);
        assert_eq!(
            renderer.render(&table).unwrap(),
            renderer.render(&table).unwrap()
        );
    }

    #[test]
    fn test_json_format() {
        let renderer = TableRenderer::new().with_format(TableFormat::Json);
        let json = renderer.render(&compare(&["0x1A", "0x1F"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["width"], 2);
        assert_eq!(value["digits"], serde_json::json!(["1A", "1F"]));
        assert_eq!(value["agreement"], serde_json::json!([true, false]));
        assert_eq!(value["header"]["kind"], "index");
        assert_eq!(value["rows"][1]["cells"][1]["text"], "F ");
        assert_eq!(value["rows"][1]["cells"][0]["highlighted"], true);
    }

    #[test]
    fn test_json_single_omits_agreement() {
        let renderer = TableRenderer::new().with_format(TableFormat::Json);
        let json = renderer.render(&single("7")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("agreement").is_none());
    }
}
