//! Console score reporter
//!
//! Writes the startup banner and keeps a single score line that is
//! rewritten in place after every point.

use std::io::{self, Write};

use crate::Score;

const CLEAR_SCREEN: &str = "\x1b[H\x1b[J";
const CLEAR_LINE: &str = "\r\x1b[K";

pub struct ScoreReporter<W: Write> {
    out: W,
}

impl<W: Write> ScoreReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Clear the terminal and print the controls and the score header
    pub fn banner(&mut self) -> io::Result<()> {
        write!(self.out, "{}", CLEAR_SCREEN)?;
        writeln!(self.out, "Welcome to Pong")?;
        writeln!(self.out)?;
        writeln!(self.out, "Player 1: Up (W), Down (S)")?;
        writeln!(self.out, "Player 2: Up (O), Down (L)")?;
        writeln!(self.out, "Pong: Start Game (G)")?;
        writeln!(self.out)?;
        writeln!(self.out, "Score: Player 1    Player 2")?;
        self.out.flush()
    }

    /// Overwrite the score line with the current score
    pub fn report(&mut self, score: &Score) -> io::Result<()> {
        write!(self.out, "{}{:8} {:11}", CLEAR_LINE, score.left, score.right)?;
        self.out.flush()
    }

    /// Leave the score line behind on exit
    pub fn finish(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(reporter: ScoreReporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_banner_lists_controls() {
        let mut reporter = ScoreReporter::new(Vec::new());
        reporter.banner().unwrap();

        let text = output(reporter);
        assert!(text.starts_with(CLEAR_SCREEN));
        assert!(text.contains("Player 1: Up (W), Down (S)\n"));
        assert!(text.contains("Player 2: Up (O), Down (L)\n"));
        assert!(text.contains("Pong: Start Game (G)\n"));
        assert!(text.ends_with("Score: Player 1    Player 2\n"));
    }

    #[test]
    fn test_report_uses_fixed_columns() {
        let mut reporter = ScoreReporter::new(Vec::new());
        reporter.report(&Score { left: 3, right: 12 }).unwrap();

        assert_eq!(output(reporter), "\r\x1b[K       3          12");
    }

    #[test]
    fn test_each_report_overwrites_the_line() {
        let mut reporter = ScoreReporter::new(Vec::new());
        reporter.report(&Score { left: 1, right: 0 }).unwrap();
        reporter.report(&Score { left: 1, right: 1 }).unwrap();
        reporter.finish().unwrap();

        let text = output(reporter);
        assert_eq!(text.matches(CLEAR_LINE).count(), 2);
        assert!(!text.trim_end_matches('\n').contains('\n'), "Score stays on one line");
        assert!(text.ends_with("          1\n"));
    }
}
