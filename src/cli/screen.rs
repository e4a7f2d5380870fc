//! Screen Buffer Module
//!
//! A single display row composed off-screen as colored cells, then handed
//! to the terminal in one paint so partial updates never show.

/// Color class of a cell. The terminal maps these to real colors using
/// the configured theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorClass {
    Blank,
    Label,
    Entry,
    Hint,
    Selected,
}

/// One cell of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub class: ColorClass,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            class: ColorClass::Blank,
        }
    }
}

/// Fixed-width row of cells with a write cursor
#[derive(Debug, Clone)]
pub struct ScreenBuffer {
    cells: Vec<Cell>,
    cursor: usize,
}

impl ScreenBuffer {
    /// Allocate a blank row `width` cells wide
    pub fn new_row(width: usize) -> Self {
        Self {
            cells: vec![Cell::default(); width],
            cursor: 0,
        }
    }

    /// Row width in cells
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Overwrite cells from `col` with `text`. Anything past the row end is
    /// dropped. The write cursor ends up just after the text.
    pub fn write_at(&mut self, col: usize, class: ColorClass, text: &str) {
        self.cursor = col;
        self.append(class, text);
    }

    /// Write `text` at the write cursor
    pub fn append(&mut self, class: ColorClass, text: &str) {
        for ch in text.chars() {
            if let Some(cell) = self.cells.get_mut(self.cursor) {
                *cell = Cell { ch, class };
            }
            self.cursor += 1;
        }
    }

    /// Paint `len` blank cells from `col` with a background class
    pub fn fill(&mut self, col: usize, len: usize, class: ColorClass) {
        let end = col.saturating_add(len).min(self.cells.len());
        if col >= end {
            return;
        }
        for cell in &mut self.cells[col..end] {
            *cell = Cell { ch: ' ', class };
        }
    }

    pub fn cell(&self, col: usize) -> Option<Cell> {
        self.cells.get(col).copied()
    }

    /// Coalesce adjacent cells of the same class into runs for painting
    pub fn spans(&self) -> Vec<(ColorClass, String)> {
        let mut spans: Vec<(ColorClass, String)> = Vec::new();
        for cell in &self.cells {
            match spans.last_mut() {
                Some((class, run)) if *class == cell.class => run.push(cell.ch),
                _ => spans.push((cell.class, cell.ch.to_string())),
            }
        }
        spans
    }

    /// The row's characters, without color
    pub fn text(&self) -> String {
        self.cells.iter().map(|c| c.ch).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_row_is_blank() {
        let buf = ScreenBuffer::new_row(4);
        assert_eq!(buf.width(), 4);
        assert_eq!(buf.text(), "    ");
        assert_eq!(buf.spans(), vec![(ColorClass::Blank, "    ".to_string())]);
    }

    #[test]
    fn test_write_at_truncates() {
        let mut buf = ScreenBuffer::new_row(6);
        buf.write_at(3, ColorClass::Label, "abcdef");
        assert_eq!(buf.text(), "   abc");
        assert_eq!(buf.cell(5).map(|c| c.class), Some(ColorClass::Label));
        buf.append(ColorClass::Entry, "zz");
        assert_eq!(buf.text(), "   abc");
    }

    #[test]
    fn test_label_box_and_selection_layout() {
        let mut buf = ScreenBuffer::new_row(16);
        buf.write_at(0, ColorClass::Label, "To:");
        buf.fill(5, 8, ColorClass::Entry);
        buf.write_at(5, ColorClass::Entry, "ab");
        buf.append(ColorClass::Selected, "cd");
        buf.append(ColorClass::Entry, "e");

        assert_eq!(buf.text(), "To:  abcde      ");
        assert_eq!(
            buf.spans(),
            vec![
                (ColorClass::Label, "To:".to_string()),
                (ColorClass::Blank, "  ".to_string()),
                (ColorClass::Entry, "ab".to_string()),
                (ColorClass::Selected, "cd".to_string()),
                (ColorClass::Entry, "e   ".to_string()),
                (ColorClass::Blank, "   ".to_string()),
            ]
        );
    }

    #[test]
    fn test_fill_past_end_is_clamped() {
        let mut buf = ScreenBuffer::new_row(3);
        buf.fill(1, 10, ColorClass::Entry);
        buf.fill(7, 2, ColorClass::Hint);
        assert_eq!(buf.cell(0).map(|c| c.class), Some(ColorClass::Blank));
        assert_eq!(buf.cell(2).map(|c| c.class), Some(ColorClass::Entry));
    }
}
