// ============================================================================
// Program Sink Interface
// Where generated machine programs are delivered
// ============================================================================

use std::io;

/// Destination for named program texts.
///
/// Generators call [`reset`](Self::reset) once before a batch, then
/// [`emit`](Self::emit) per program. Keeping persistence behind this trait
/// leaves the numeric code free of I/O; a file-backed sink lives with the
/// binary that needs it.
pub trait ProgramSink {
    /// Persist one program under `name`
    fn emit(&mut self, name: &str, text: &str) -> io::Result<()>;

    /// Clear previous output before a new batch (optional)
    fn reset(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Emit several programs, stopping at the first failure
    fn emit_all<'a, I>(&mut self, programs: I) -> io::Result<()>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
        Self: Sized,
    {
        for (name, text) in programs {
            self.emit(name, text)?;
        }
        Ok(())
    }
}

/// Sink that discards everything
pub struct NoOpSink;

impl ProgramSink for NoOpSink {
    fn emit(&mut self, _name: &str, _text: &str) -> io::Result<()> {
        // Do nothing
        Ok(())
    }
}

/// Sink that keeps programs in memory, in emission order
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    programs: Vec<(String, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the most recent program emitted under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.programs
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, text)| text.as_str())
    }

    /// Names in emission order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.programs.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

impl ProgramSink for MemorySink {
    fn emit(&mut self, name: &str, text: &str) -> io::Result<()> {
        self.programs.push((name.to_string(), text.to_string()));
        Ok(())
    }

    fn reset(&mut self) -> io::Result<()> {
        self.programs.clear();
        Ok(())
    }
}

/// Sink that only logs what it receives
pub struct LoggingSink;

impl ProgramSink for LoggingSink {
    fn emit(&mut self, name: &str, text: &str) -> io::Result<()> {
        tracing::info!(name, bytes = text.len(), lines = text.lines().count(), "program emitted");
        tracing::debug!("{}", text);
        Ok(())
    }
}
