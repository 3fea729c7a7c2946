//! 16x2 character display model.
//!
//! Apps describe a whole [`Frame`]; [`Screen`] remembers what is on the glass
//! and turns the next frame into the fewest cursor-and-write calls, so stale
//! cells (a vacated cursor mark, a shorter total) are overwritten with blanks.

use heapless::{String, Vec};

/// Columns on the display.
pub const COLS: usize = 16;
/// Rows on the display.
pub const ROWS: usize = 2;

/// Character display collaborator.
///
/// Writes are absolute-position overwrites and never scroll. The core never
/// reads the display back.
pub trait CharDisplay {
    /// Moves the write cursor.
    fn set_cursor_position(&mut self, col: u8, row: u8);
    /// Writes ASCII text at the cursor.
    fn write_text(&mut self, text: &str);
}

impl<T: CharDisplay + ?Sized> CharDisplay for &mut T {
    fn set_cursor_position(&mut self, col: u8, row: u8) {
        (**self).set_cursor_position(col, row);
    }

    fn write_text(&mut self, text: &str) {
        (**self).write_text(text);
    }
}

fn ascii_or_placeholder(c: char) -> u8 {
    if c.is_ascii() && !c.is_ascii_control() {
        c as u8
    } else {
        b'?'
    }
}

fn as_text(cells: &[u8]) -> &str {
    // Cells only ever hold printable ASCII.
    core::str::from_utf8(cells).unwrap_or_default()
}

/// Full contents of the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    cells: [[u8; COLS]; ROWS],
}

impl Default for Frame {
    fn default() -> Self {
        Self::blank()
    }
}

impl Frame {
    /// A frame of spaces.
    #[must_use]
    pub const fn blank() -> Self {
        Self {
            cells: [[b' '; COLS]; ROWS],
        }
    }

    /// Writes text starting at `col`, clipping at the right edge.
    ///
    /// Out-of-range rows are ignored.
    pub fn put(&mut self, col: usize, row: usize, text: &str) {
        let Some(line) = self.cells.get_mut(row) else {
            return;
        };
        for (cell, c) in line.iter_mut().skip(col).zip(text.chars()) {
            *cell = ascii_or_placeholder(c);
        }
    }

    /// Writes text so that it ends just before `end_col`.
    pub fn put_right(&mut self, end_col: usize, row: usize, text: &str) {
        let len = text.chars().count();
        self.put(end_col.saturating_sub(len), row, text);
    }

    /// Returns one row as text.
    #[must_use]
    pub fn row(&self, row: usize) -> &str {
        self.cells.get(row).map_or("", |line| as_text(line))
    }
}

/// One cursor move plus write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOp {
    /// Column of the first written cell.
    pub col: u8,
    /// Row of the written cells.
    pub row: u8,
    /// Text to write.
    pub text: String<COLS>,
}

impl DrawOp {
    /// Sends the operation to a display.
    pub fn apply<D: CharDisplay>(&self, display: &mut D) {
        display.set_cursor_position(self.col, self.row);
        display.write_text(&self.text);
    }
}

/// Tracks what the display currently shows.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    shown: Option<Frame>,
}

impl Screen {
    /// Creates a tracker that assumes nothing about the display contents.
    #[must_use]
    pub const fn new() -> Self {
        Self { shown: None }
    }

    /// Forgets the display contents so the next frame is written in full.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Computes the writes that turn the shown frame into `next`.
    ///
    /// Each changed row yields one span from its first to its last differing
    /// cell. Nothing is known before the first frame, so it is written whole.
    #[must_use]
    pub fn diff(&self, next: &Frame) -> Vec<DrawOp, ROWS> {
        let mut ops = Vec::new();
        for (row, line) in next.cells.iter().enumerate() {
            let span = match &self.shown {
                None => Some((0, COLS)),
                Some(shown) => {
                    let old = &shown.cells[row];
                    let first = (0..COLS).find(|&i| old[i] != line[i]);
                    let last = (0..COLS).rev().find(|&i| old[i] != line[i]);
                    first.zip(last).map(|(first, last)| (first, last + 1))
                }
            };
            let Some((start, end)) = span else {
                continue;
            };

            let mut text = String::new();
            // The span is at most COLS cells, so it always fits.
            let _ = text.push_str(as_text(&line[start..end]));
            let _ = ops.push(DrawOp {
                col: start as u8,
                row: row as u8,
                text,
            });
        }
        ops
    }

    /// Brings the display in line with `next`; returns the number of writes.
    pub fn present<D: CharDisplay>(&mut self, next: &Frame, display: &mut D) -> usize {
        let ops = self.diff(next);
        for op in &ops {
            op.apply(display);
        }
        self.shown = Some(next.clone());
        ops.len()
    }
}

/// In-memory [`CharDisplay`] for tests and host demos.
#[derive(Debug, Clone)]
pub struct TextGrid {
    frame: Frame,
    col: usize,
    row: usize,
    writes: usize,
}

impl Default for TextGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl TextGrid {
    /// Creates a blank grid with the cursor home.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            frame: Frame::blank(),
            col: 0,
            row: 0,
            writes: 0,
        }
    }

    /// Returns one row as text.
    #[must_use]
    pub fn row(&self, row: usize) -> &str {
        self.frame.row(row)
    }

    /// Number of `write_text` calls so far.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl CharDisplay for TextGrid {
    fn set_cursor_position(&mut self, col: u8, row: u8) {
        self.col = usize::from(col);
        self.row = usize::from(row);
    }

    fn write_text(&mut self, text: &str) {
        self.frame.put(self.col, self.row, text);
        self.col = (self.col + text.chars().count()).min(COLS);
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_clips_at_right_edge() {
        let mut frame = Frame::blank();
        frame.put(12, 0, "Player");
        assert_eq!(frame.row(0), "            Play");
        frame.put(0, 5, "ignored");
        assert_eq!(frame.row(1), "                ");
    }

    #[test]
    fn put_right_aligns() {
        let mut frame = Frame::blank();
        frame.put_right(16, 1, "21");
        assert_eq!(frame.row(1), "              21");
    }

    #[test]
    fn first_present_writes_every_row() {
        let mut screen = Screen::new();
        let mut grid = TextGrid::new();
        let mut frame = Frame::blank();
        frame.put(0, 0, "Hello");
        assert_eq!(screen.present(&frame, &mut grid), 2);
        assert_eq!(grid.row(0), "Hello           ");
    }

    #[test]
    fn unchanged_frame_writes_nothing() {
        let mut screen = Screen::new();
        let mut grid = TextGrid::new();
        let frame = Frame::blank();
        screen.present(&frame, &mut grid);
        assert_eq!(screen.present(&frame, &mut grid), 0);
        assert_eq!(grid.writes(), 2);
    }

    #[test]
    fn moved_mark_rewrites_only_the_changed_span() {
        let mut screen = Screen::new();
        let mut grid = TextGrid::new();

        let mut before = Frame::blank();
        before.put(0, 1, ">Hit  Sit");
        screen.present(&before, &mut grid);

        let mut after = Frame::blank();
        after.put(0, 1, " Hit >Sit");
        let ops = screen.diff(&after);
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].col, 0);
        assert_eq!(ops[0].row, 1);
        assert_eq!(ops[0].text.as_str(), " Hit >");

        screen.present(&after, &mut grid);
        assert_eq!(grid.row(1), " Hit >Sit       ");
    }

    #[test]
    fn invalidate_forces_full_redraw() {
        let mut screen = Screen::new();
        let mut grid = TextGrid::new();
        let frame = Frame::blank();
        screen.present(&frame, &mut grid);
        screen.invalidate();
        assert_eq!(screen.present(&frame, &mut grid), 2);
    }

    #[test]
    fn non_ascii_is_replaced() {
        let mut frame = Frame::blank();
        frame.put(0, 0, "é");
        assert_eq!(frame.row(0).as_bytes()[0], b'?');
    }
}
