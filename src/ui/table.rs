//! Table rendering for hotel listings.

use console::measure_text_width;

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// A box-drawn table.
///
/// Widths are measured in terminal columns, so star ratings and other
/// multi-byte glyphs line up.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    align: Vec<Align>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: Vec<&str>) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| measure_text_width(h)).collect();
        let align = vec![Align::Left; headers.len()];

        Self {
            headers,
            align,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Set the alignment of column `index`.
    pub fn align(mut self, index: usize, align: Align) -> Self {
        if let Some(slot) = self.align.get_mut(index) {
            *slot = align;
        }
        self
    }

    /// Add a row to the table. Cells beyond the header count are dropped.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (width, cell) in self.column_widths.iter_mut().zip(&row) {
            *width = (*width).max(measure_text_width(cell));
        }
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 4);

        lines.push(self.render_border('┌', '┬', '┐'));
        lines.push(self.render_row(&self.headers, false));
        lines.push(self.render_border('├', '┼', '┤'));
        for row in &self.rows {
            lines.push(self.render_row(row, true));
        }
        lines.push(self.render_border('└', '┴', '┘'));

        lines.join("\n")
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self
            .column_widths
            .iter()
            .map(|width| "─".repeat(width + 2))
            .collect();
        format!("{}{}{}", left, segments.join(&mid.to_string()), right)
    }

    fn render_row(&self, row: &[String], aligned: bool) -> String {
        let mut s = String::from("│");

        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let pad = " ".repeat(width.saturating_sub(measure_text_width(cell)));
            let right = aligned && self.align[i] == Align::Right;

            if right {
                s.push_str(&format!(" {}{} │", pad, cell));
            } else {
                s.push_str(&format!(" {}{} │", cell, pad));
            }
        }

        s
    }
}
