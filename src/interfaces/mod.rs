// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod sink;

pub use sink::{LoggingSink, MemorySink, NoOpSink, ProgramSink};
