#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN_WIDTH: usize = 4;
const SEPARATOR: &str = "  ";

/// A titled grid of string cells. Numeric-looking cells are right-aligned.
#[derive(Clone, Debug, Default)]
pub struct Table {
    title: Option<String>,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    #[must_use]
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: None,
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    #[must_use]
    pub fn render(&self, options: TableOptions) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 3);
        if let Some(title) = &self.title {
            lines.push(emphasize(title, options.color));
        }

        if self.rows.is_empty() {
            lines.push(String::from("(no rows)"));
            return lines.join("\n");
        }

        let widths = self.column_widths(options.max_width);

        let header_line = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(header, width)| pad(&truncate_text(header, *width), *width, false))
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        let divider = "-".repeat(header_line.chars().count());
        lines.push(emphasize(header_line.trim_end(), options.color));
        lines.push(divider);

        for row in &self.rows {
            let line = widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let cell = row.get(index).map_or("-", String::as_str);
                    let text = truncate_text(cell, *width);
                    pad(&text, *width, looks_numeric(&text))
                })
                .collect::<Vec<_>>()
                .join(SEPARATOR);
            lines.push(line.trim_end().to_string());
        }

        lines.join("\n")
    }

    fn column_widths(&self, max_width: Option<usize>) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(index))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        if let Some(max_width) = max_width {
            self.shrink_to(&mut widths, max_width);
        }
        widths
    }

    /// Narrow the widest column one step at a time until the row fits,
    /// never below its header or [`MIN_COLUMN_WIDTH`].
    fn shrink_to(&self, widths: &mut [usize], max_width: usize) {
        let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
        while widths.iter().sum::<usize>() + separators > max_width {
            let widest = widths
                .iter()
                .enumerate()
                .filter(|(index, width)| {
                    **width > self.headers[*index].chars().count().max(MIN_COLUMN_WIDTH)
                })
                .max_by_key(|(_, width)| **width)
                .map(|(index, _)| index);

            let Some(index) = widest else {
                break;
            };
            widths[index] -= 1;
        }
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed.chars().any(|ch| ch.is_ascii_digit())
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ',' | '%'))
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn emphasize(value: &str, color: bool) -> String {
    if color {
        format!("\u{1b}[1m{value}\u{1b}[0m")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Table, TableOptions, looks_numeric, truncate_text};

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    fn words() -> Table {
        let mut table = Table::new(["word", "count", "percentage"]);
        table.push_row(["the", "1,204", "6.02%"]);
        table.push_row(["vocabulary", "7", "-"]);
        table
    }

    #[test]
    fn aligns_columns_and_right_aligns_numbers() {
        let rendered = words().render(PLAIN);
        assert_eq!(
            rendered,
            [
                "word        count  percentage",
                "-----------------------------",
                "the         1,204       6.02%",
                "vocabulary      7  -",
            ]
            .join("\n")
        );
    }

    #[test]
    fn title_and_empty_marker() {
        let rendered = Table::new(["key"]).with_title("english").render(PLAIN);
        assert_eq!(rendered, "english\n(no rows)");
    }

    #[test]
    fn shrinks_widest_column_to_fit() {
        let mut table = Table::new(["word", "count"]);
        table.push_row(["antidisestablishmentarianism", "1"]);
        let rendered = table.render(TableOptions {
            max_width: Some(16),
            color: false,
        });
        let row = rendered.lines().nth(2).expect("data row");
        assert!(row.starts_with("antidise…  "));
        assert!(row.chars().count() <= 16);
    }

    #[test]
    fn color_emphasizes_header_only() {
        let rendered = words().render(TableOptions {
            max_width: None,
            color: true,
        });
        let mut lines = rendered.lines();
        assert!(lines.next().is_some_and(|line| line.starts_with("\u{1b}[1m")));
        assert!(lines.all(|line| !line.contains('\u{1b}')));
    }

    #[test]
    fn helpers() {
        assert_eq!(truncate_text("abcdef", 4), "abc…");
        assert_eq!(truncate_text("abc", 4), "abc");
        assert!(looks_numeric("1,234.5"));
        assert!(!looks_numeric("-"));
        assert!(!looks_numeric("english"));
    }
}
