//! Terminal Transport Module
//!
//! The capabilities the edit modes need from the terminal, and their
//! crossterm implementation. Rows are counted from the row where editing
//! started, so a form can be drawn below whatever the shell printed.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{self, MoveTo},
    event::{self, Event, KeyEventKind},
    queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, ScrollUp},
};

use super::config::EditorConfig;
use super::keys::Key;
use super::screen::ScreenBuffer;

/// What the edit modes require of a terminal
pub trait Terminal {
    /// Current width in columns
    fn width(&self) -> usize;

    /// Block until one key arrives. An error means the input is unreadable.
    fn read_key(&mut self) -> io::Result<Key>;

    /// Put the caret at `col` on edit row `row`
    fn move_to(&mut self, col: usize, row: usize) -> io::Result<()>;

    fn clear_to_end_of_screen(&mut self) -> io::Result<()>;

    /// Render one composed row in a single operation
    fn paint(&mut self, row: usize, buf: &ScreenBuffer) -> io::Result<()>;

    /// Whether output is meant for a person rather than a script
    fn is_human_output(&self) -> bool;

    /// Make sure `rows` edit rows fit below the origin
    fn reserve_rows(&mut self, _rows: usize) -> io::Result<()> {
        Ok(())
    }
}

/// Crossterm-backed terminal on stdout. Expects raw mode to be enabled by
/// the caller.
pub struct CrosstermTerminal {
    out: Stdout,
    origin_row: u16,
    config: EditorConfig,
}

impl CrosstermTerminal {
    /// Anchor the edit area at the current cursor row
    pub fn new(config: EditorConfig) -> io::Result<Self> {
        let (_, origin_row) = cursor::position()?;
        Ok(Self {
            out: io::stdout(),
            origin_row,
            config,
        })
    }

    fn screen_row(&self, row: usize) -> u16 {
        self.origin_row.saturating_add(row as u16)
    }
}

impl Terminal for CrosstermTerminal {
    fn width(&self) -> usize {
        // A terminal that cannot report its size is drawn at 80 columns.
        terminal::size().map(|(w, _)| w as usize).unwrap_or(80)
    }

    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    return Ok(Key::from_event(key));
                }
                // A resize redraws like Ctrl-L.
                Event::Resize(_, _) => return Ok(Key::Ctrl('l')),
                _ => {}
            }
        }
    }

    fn move_to(&mut self, col: usize, row: usize) -> io::Result<()> {
        let row = self.screen_row(row);
        queue!(self.out, MoveTo(col as u16, row))?;
        self.out.flush()
    }

    fn clear_to_end_of_screen(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::FromCursorDown))?;
        self.out.flush()
    }

    fn paint(&mut self, row: usize, buf: &ScreenBuffer) -> io::Result<()> {
        let row = self.screen_row(row);
        queue!(self.out, MoveTo(0, row))?;
        for (class, run) in buf.spans() {
            let (fg, bg) = self.config.colors_for(class);
            queue!(self.out, ResetColor)?;
            if let Some(fg) = fg {
                queue!(self.out, SetForegroundColor(fg))?;
            }
            if let Some(bg) = bg {
                queue!(self.out, SetBackgroundColor(bg))?;
            }
            queue!(self.out, Print(run))?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    fn is_human_output(&self) -> bool {
        self.config.human_output
    }

    fn reserve_rows(&mut self, rows: usize) -> io::Result<()> {
        let (_, height) = terminal::size()?;
        let needed = self.origin_row as usize + rows;
        if needed > height as usize {
            let scroll = (needed - height as usize).min(self.origin_row as usize) as u16;
            queue!(self.out, ScrollUp(scroll))?;
            self.out.flush()?;
            self.origin_row -= scroll;
        }
        Ok(())
    }
}
