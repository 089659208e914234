use std::io::{self, Write};

use crate::Stats;

/// Where a lookup puts what the user sees.
///
/// Methods take `&self` so one sink can be shared with an in-flight lookup;
/// implementations that keep state use interior mutability.
pub trait DisplaySink: Send + Sync {
    /// Render all four counts.
    fn show_stats(&self, stats: &Stats);
    /// Reset every count to the placeholder.
    fn clear_stats(&self);
    /// Show a user-facing message.
    fn show_error(&self, message: &str);
    /// Hide any previously shown message.
    fn clear_error(&self);
    /// Toggle the busy indicator.
    fn set_loading(&self, loading: bool);
}

/// Line-oriented sink for terminals: stats on stdout, messages on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalSink {
    json: bool,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print stats as one JSON object per line instead of a table.
    pub fn json(mut self, yes: bool) -> Self {
        self.json = yes;
        self
    }

    /// Writes `stats` to `out`, stopping at the first failed write.
    pub fn render(&self, out: &mut impl Write, stats: &Stats) -> io::Result<()> {
        if self.json {
            serde_json::to_writer(&mut *out, stats)?;
            return writeln!(out);
        }
        for (name, value) in stats.fields() {
            writeln!(out, "{name:<7} {}", Stats::display_field(value))?;
        }
        Ok(())
    }
}

impl DisplaySink for TerminalSink {
    fn show_stats(&self, stats: &Stats) {
        let mut out = io::stdout().lock();
        match self.render(&mut out, stats) {
            // reader went away (`| head`); nothing left to tell it
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
            Err(e) => eprintln!("failed to write stats: {e}"),
            Ok(()) => {}
        }
    }

    fn clear_stats(&self) {}

    fn show_error(&self, message: &str) {
        eprintln!("{message}");
    }

    fn clear_error(&self) {}

    fn set_loading(&self, loading: bool) {
        if loading && !self.json {
            eprintln!("fetching...");
        }
    }
}
