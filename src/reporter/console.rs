use std::io::{self, IsTerminal, Stdout, Write};
use std::path::Path;

use colored::{Color, Colorize};

use crate::error::FuzzError;
use crate::models::MatchRecord;
use crate::scanner::{RunSummary, StopSignal};

/// Writes the tool's tagged, line-oriented console output.
pub struct ConsoleReporter<W: Write> {
    out: W,
    color: bool,
}

impl ConsoleReporter<Stdout> {
    pub fn stdout() -> Self {
        let color = io::stdout().is_terminal();
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn start(&mut self, wordlist: &Path, total: usize) -> io::Result<()> {
        let info = self.tag("[INFO]", Color::Cyan);
        writeln!(self.out, "{} Accessing wordlist: {}", info, wordlist.display())?;
        writeln!(self.out, "{} Total values to test: {}", info, total)?;
        writeln!(self.out, "{} Starting IDOR fuzzing...\n", info)
    }

    pub fn request(&mut self, url: &str) -> io::Result<()> {
        writeln!(self.out, "REQUEST: {}", url)
    }

    pub fn response(&mut self, status: u16, size: usize) -> io::Result<()> {
        writeln!(self.out, "RESPONSE: {} | Size: {} bytes", status, size)
    }

    pub fn not_found(&mut self, url: &str) -> io::Result<()> {
        let warning = self.tag("[WARNING]", Color::Yellow);
        writeln!(self.out, "{} {} returned 404 (Not Found).", warning, url)
    }

    pub fn server_error(&mut self, status: u16) -> io::Result<()> {
        let error = self.tag("[ERROR]", Color::Red);
        writeln!(self.out, "{} Server error ({}). Retrying...", error, status)
    }

    pub fn timeout(&mut self, url: &str) -> io::Result<()> {
        let error = self.tag("[ERROR]", Color::Red);
        writeln!(self.out, "{} Timeout while connecting to {}. Skipping...", error, url)
    }

    pub fn found(&mut self, record: &MatchRecord) -> io::Result<()> {
        let found = self.tag("[FOUND]", Color::Green);
        writeln!(self.out, "{} {}: {}", found, record.value, record.line)?;
        self.out.flush()
    }

    pub fn stopping(&mut self) -> io::Result<()> {
        self.info("Stopping fuzzing as result is found.")
    }

    pub fn complete(&mut self) -> io::Result<()> {
        self.info("IDOR fuzzing complete.")
    }

    pub fn interrupted(&mut self, signal: StopSignal) -> io::Result<()> {
        let info = self.tag("[INFO]", Color::Cyan);
        writeln!(self.out, "\n{} {}", info, signal.message())?;
        self.out.flush()
    }

    pub fn summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        self.info(&format!(
            "Requests sent: {} | Matches: {} | Skipped: {}",
            summary.requests, summary.matches, summary.skipped
        ))
    }

    fn info(&mut self, message: &str) -> io::Result<()> {
        let info = self.tag("[INFO]", Color::Cyan);
        writeln!(self.out, "{} {}", info, message)
    }

    fn tag(&self, tag: &str, color: Color) -> String {
        if self.color {
            tag.color(color).bold().to_string()
        } else {
            tag.to_string()
        }
    }
}

pub fn print_error(err: &FuzzError) {
    let tag = if io::stderr().is_terminal() {
        "[ERROR]".red().bold().to_string()
    } else {
        "[ERROR]".to_string()
    };
    eprintln!("{} {}", tag, err);
}
