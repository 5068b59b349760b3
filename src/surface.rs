//! Rendering surface owned by a visualizer.
//!
//! A [`Surface`] wraps a ratatui [`Terminal`]. When it was acquired on stdout
//! it also holds the screen state (alternate screen, hidden cursor and
//! optionally raw mode) and restores it on drop.

use crate::error::Result;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend, TestBackend},
    layout::Size,
    Frame, Terminal,
};
use std::io::{self, Stdout};

/// A drawable terminal, plus whatever screen state it has to give back.
#[derive(Debug)]
pub struct Surface<B: Backend> {
    terminal: Terminal<B>,
    screen: Option<ScreenGuard>,
}

/// Restores the real terminal when dropped.
#[derive(Debug)]
struct ScreenGuard {
    raw_mode: bool,
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        if self.raw_mode {
            let _ = disable_raw_mode();
        }
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        tracing::debug!("Released terminal surface");
    }
}

impl<B: Backend> Surface<B> {
    /// Wrap an existing backend without touching the screen.
    pub fn new(backend: B) -> Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            screen: None,
        })
    }

    /// Draw one frame.
    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Current size of the drawable area.
    pub fn size(&self) -> Result<Size> {
        Ok(self.terminal.size()?)
    }

    /// The underlying backend.
    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    /// Whether this surface owns screen state it restores on drop.
    pub fn owns_screen(&self) -> bool {
        self.screen.is_some()
    }
}

impl Surface<CrosstermBackend<Stdout>> {
    /// Take over stdout: enter the alternate screen and hide the cursor.
    pub fn stdout() -> Result<Self> {
        Self::acquire(false)
    }

    /// Like [`Surface::stdout`], and also enable raw mode so the caller can
    /// poll single key presses.
    pub fn stdout_interactive() -> Result<Self> {
        Self::acquire(true)
    }

    fn acquire(raw_mode: bool) -> Result<Self> {
        if raw_mode {
            enable_raw_mode()?;
        }
        // Built before entering the alternate screen so a failure below still restores.
        let guard = ScreenGuard { raw_mode };

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        tracing::debug!(raw_mode, "Acquired terminal surface");

        Ok(Self {
            terminal,
            screen: Some(guard),
        })
    }
}

impl Surface<TestBackend> {
    /// An in-memory surface of the given size.
    pub fn headless(width: u16, height: u16) -> Result<Self> {
        Self::new(TestBackend::new(width, height))
    }

    /// The last drawn frame as text, one line per row, trailing spaces trimmed.
    pub fn snapshot(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let width = buffer.area.width as usize;
        if width == 0 {
            return String::new();
        }

        buffer
            .content
            .chunks(width)
            .map(|row| {
                let line: String = row.iter().map(|cell| cell.symbol()).collect();
                line.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn headless_surface_reports_its_size() {
        let surface = Surface::headless(40, 10).unwrap();
        let size = surface.size().unwrap();
        assert_eq!((size.width, size.height), (40, 10));
        assert!(!surface.owns_screen());
    }

    #[test]
    fn snapshot_reflects_last_draw() {
        let mut surface = Surface::headless(12, 2).unwrap();
        surface
            .draw(|f| f.render_widget(Paragraph::new("hello"), f.area()))
            .unwrap();
        assert_eq!(surface.snapshot(), "hello\n");
    }
}
