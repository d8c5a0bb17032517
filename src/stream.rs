use std::io::Write;

use memchr::memchr;

use crate::corrector;
use crate::error::RepairError;
use crate::log::{Logger, RepairLogEntry};
use crate::options::Options;
use crate::statement::{self, Depth, LineRecord};

/// Incremental repairer for input that arrives in chunks.
///
/// Feed arbitrary slices to [`push`](Self::push); each call returns the
/// repaired text for every line completed so far. [`flush`](Self::flush)
/// repairs the final unterminated line, appends closers for any blocks left
/// open, and resets the repairer for reuse.
///
/// Concatenating everything returned by `push` and `flush` yields exactly
/// the same bytes as [`repair_to_string_with_options`] on the whole input,
/// and [`take_log`](Self::take_log) the same entries in the same order.
///
/// [`repair_to_string_with_options`]: crate::repair_to_string_with_options
///
/// ```
/// use scriptrepair::{Options, StreamRepairer};
///
/// let mut sr = StreamRepairer::new(Options::default());
/// let mut out = sr.push("quest x ");
/// out.push_str(&sr.push("= 1\nconsole.log(x\n"));
/// out.push_str(&sr.flush());
/// assert_eq!(out, "const x = 1;\nconsole.log(x);\n");
/// ```
#[derive(Debug)]
pub struct StreamRepairer {
    opts: Options,
    buf: String,
    line_no: usize,
    depth: Depth,
    token_log: Logger,
    statement_log: Logger,
}

impl StreamRepairer {
    pub fn new(opts: Options) -> Self {
        Self {
            opts,
            buf: String::new(),
            line_no: 1,
            depth: Depth::ZERO,
            token_log: Logger::enabled(),
            statement_log: Logger::enabled(),
        }
    }

    /// Appends `chunk` to the pending input and returns the repaired text
    /// for every line the chunk completed. Partial trailing lines stay
    /// buffered until the next `push` or `flush`.
    pub fn push(&mut self, chunk: &str) -> String {
        self.buf.push_str(chunk);
        let mut out = String::new();
        while let Some(pos) = memchr(b'\n', self.buf.as_bytes()) {
            let line: String = self.buf.drain(..=pos).collect();
            let emitted = self.step(&line[..line.len() - 1]);
            out.push_str(&emitted);
            out.push('\n');
        }
        out
    }

    /// Repairs whatever is still buffered as the final line, appends terminal
    /// closers for blocks left open, and resets the line counter and depth so
    /// the repairer can be reused. Collected log entries survive the reset
    /// until [`take_log`](Self::take_log) drains them.
    pub fn flush(&mut self) -> String {
        let rest = std::mem::take(&mut self.buf);
        let mut out = self.step(&rest);
        if self.opts.close_open_blocks {
            let mut closers = Vec::new();
            statement::close_open_blocks(
                self.depth,
                &self.opts,
                &mut self.statement_log,
                &mut closers,
            );
            for line in closers {
                out.push('\n');
                out.push_str(&line);
            }
        }
        self.line_no = 1;
        self.depth = Depth::ZERO;
        out
    }

    /// [`push`](Self::push), but the repaired text goes straight to `out`.
    pub fn push_to_writer<W: Write>(
        &mut self,
        chunk: &str,
        out: &mut W,
    ) -> Result<(), RepairError> {
        let emitted = self.push(chunk);
        out.write_all(emitted.as_bytes())?;
        Ok(())
    }

    /// [`flush`](Self::flush), but the repaired text goes straight to `out`.
    pub fn flush_to_writer<W: Write>(&mut self, out: &mut W) -> Result<(), RepairError> {
        let emitted = self.flush();
        out.write_all(emitted.as_bytes())?;
        Ok(())
    }

    /// Edit log collected so far, token-pass entries first.
    pub fn log(&self) -> Vec<RepairLogEntry> {
        let mut entries = self.token_log.entries().to_vec();
        entries.extend_from_slice(self.statement_log.entries());
        entries
    }

    /// Drains the edit log, token-pass entries first.
    pub fn take_log(&mut self) -> Vec<RepairLogEntry> {
        let mut entries = self.token_log.take_entries();
        entries.append(&mut self.statement_log.take_entries());
        entries
    }

    fn step(&mut self, raw: &str) -> String {
        let number = self.line_no;
        self.line_no += 1;
        let corrected = corrector::correct_line(raw, number, &self.opts, &mut self.token_log);
        let rec = LineRecord::new(&corrected, number);
        let (emitted, next) =
            statement::repair_line(&rec, self.depth, &self.opts, &mut self.statement_log);
        self.depth = next;
        emitted
    }
}

/// Repairs input already split into chunks, as if the pieces had been pushed
/// through a [`StreamRepairer`] one by one.
pub fn repair_chunks_to_string<I, S>(chunks: I, opts: &Options) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sr = StreamRepairer::new(opts.clone());
    let mut out = String::new();
    for chunk in chunks {
        out.push_str(&sr.push(chunk.as_ref()));
    }
    out.push_str(&sr.flush());
    out
}
