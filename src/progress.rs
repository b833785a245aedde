// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: In-place textual progress bar for the batch stages.
// Author: Lukas Bower

use std::io::{self, Write};

const BAR_WIDTH: usize = 20;

/// Counter for one looping stage, redrawn in place on `out`.
pub struct Progress<'a, W: Write> {
    out: &'a mut W,
    desc: &'static str,
    done: usize,
    total: usize,
}

impl<'a, W: Write> Progress<'a, W> {
    /// Start a bar for `total` items and draw it at zero.
    pub fn start(out: &'a mut W, desc: &'static str, total: usize) -> io::Result<Self> {
        let mut bar = Progress {
            out,
            desc,
            done: 0,
            total,
        };
        bar.draw()?;
        Ok(bar)
    }

    /// Record one finished item.
    pub fn tick(&mut self) -> io::Result<()> {
        self.done = (self.done + 1).min(self.total);
        self.draw()
    }

    /// Print `line` on its own line and redraw the bar below it.
    pub fn interrupt(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{line}")?;
        self.draw()
    }

    /// Terminate the bar line.
    pub fn finish(mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }

    fn draw(&mut self) -> io::Result<()> {
        write!(self.out, "\r{}", render(self.desc, self.done, self.total))?;
        self.out.flush()
    }
}

/// Render one bar line as `desc: pct%|bar| done/total files`.
pub fn render(desc: &str, done: usize, total: usize) -> String {
    let (pct, filled) = if total == 0 {
        (0, 0)
    } else {
        (done * 100 / total, done * BAR_WIDTH / total)
    };
    format!(
        "{desc}: {pct:>3}%|{}{}| {done}/{total} files",
        "#".repeat(filled),
        " ".repeat(BAR_WIDTH - filled),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_half() {
        assert_eq!(
            render("Moving csvs", 1, 2),
            "Moving csvs:  50%|##########          | 1/2 files"
        );
    }

    #[test]
    fn render_empty_stage() {
        assert_eq!(
            render("removing csvs", 0, 0),
            "removing csvs:   0%|                    | 0/0 files"
        );
    }

    #[test]
    fn tick_saturates_at_total() {
        let mut out = Vec::new();
        let mut bar = Progress::start(&mut out, "Running Fuzzcc", 1).unwrap();
        bar.tick().unwrap();
        bar.tick().unwrap();
        bar.finish().unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("100%|####################| 1/1 files\n"));
        assert!(!text.contains("2/1"));
    }
}
