use console::style;

pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green(), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn warning(&self, message: &str) {
        println!("{} {}", style("⚠").yellow(), message);
    }

    pub fn info(&self, message: &str) {
        println!("{} {}", style("ℹ").blue(), message);
    }

    pub fn header(&self, message: &str) {
        println!("\n{}", style(message).bold().underlined());
    }

    pub fn section(&self, message: &str) {
        println!("\n{}", style(message).bold());
        println!("{}", "─".repeat(40));
    }

    /// Final `passed / failed` line of a batch
    pub fn tally(&self, tally: &Tally) {
        self.section("Summary");
        let ok = style(format!("{} ok", tally.ok)).green();
        let failed = if tally.failed > 0 {
            style(format!("{} failed", tally.failed)).red()
        } else {
            style(format!("{} failed", tally.failed)).dim()
        };
        let mut line = format!("{}, {}", ok, failed);
        if tally.skipped > 0 {
            line.push_str(&format!(", {}", style(format!("{} skipped", tally.skipped)).yellow()));
        }
        println!("{} (total {})", line, tally.total());
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts reported at the end of a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub ok: usize,
    pub failed: usize,
    /// Units that neither passed nor failed, e.g. outputs already up to date
    pub skipped: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.ok + self.failed + self.skipped
    }
}
