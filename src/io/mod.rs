//! Destinations for the verbose progress table.
//!
//! With `verbose` set, a [`BarrierSolver`](crate::solver::BarrierSolver)
//! writes its banner, one line per barrier weight and a summary footer.
//! This output goes to stdout unless redirected through
//! [`ConfigurablePrintTarget`].

use std::fs::File;
use std::io::{stdout, Error, ErrorKind, Result, Stdout, Write};

/// Where progress lines are written
pub(crate) enum PrintTarget {
    Stdout(Stdout),
    File(File),
    Buffer(Vec<u8>),
    Stream(Box<dyn Write + Send + Sync>),
    Sink,
}

impl PrintTarget {
    fn name(&self) -> &'static str {
        match self {
            PrintTarget::Stdout(_) => "Stdout",
            PrintTarget::File(_) => "File",
            PrintTarget::Buffer(_) => "Buffer",
            PrintTarget::Stream(_) => "Stream",
            PrintTarget::Sink => "Sink",
        }
    }
}

impl std::fmt::Debug for PrintTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrintTarget::{}", self.name())
    }
}

impl Default for PrintTarget {
    fn default() -> Self {
        PrintTarget::Stdout(stdout())
    }
}

impl Write for PrintTarget {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        match self {
            PrintTarget::Stdout(out) => out.write(buf),
            PrintTarget::File(file) => file.write(buf),
            PrintTarget::Stream(stream) => stream.write(buf),
            PrintTarget::Buffer(bytes) => {
                bytes.extend_from_slice(buf);
                Ok(buf.len())
            }
            PrintTarget::Sink => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self {
            PrintTarget::Stdout(out) => out.flush(),
            PrintTarget::File(file) => file.flush(),
            PrintTarget::Stream(stream) => stream.flush(),
            PrintTarget::Buffer(_) | PrintTarget::Sink => Ok(()),
        }
    }
}

/// Redirection of the progress table.  Output is only produced when
/// the solver settings have `verbose` set.
pub trait ConfigurablePrintTarget {
    /// write progress to stdout (the default)
    fn print_to_stdout(&mut self);
    /// write progress to `file`
    fn print_to_file(&mut self, file: File);
    /// write progress to an arbitrary writer
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>);
    /// discard progress output, without switching off `verbose`
    fn print_to_sink(&mut self);
    /// collect progress in memory, replacing any earlier contents
    fn print_to_buffer(&mut self);
    /// The collected progress text.  Fails unless
    /// [`print_to_buffer`](Self::print_to_buffer) is in effect.
    fn get_print_buffer(&mut self) -> Result<String>;
}

impl ConfigurablePrintTarget for PrintTarget {
    fn print_to_stdout(&mut self) {
        *self = PrintTarget::Stdout(stdout());
    }

    fn print_to_file(&mut self, file: File) {
        *self = PrintTarget::File(file);
    }

    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        *self = PrintTarget::Stream(stream);
    }

    fn print_to_sink(&mut self) {
        *self = PrintTarget::Sink;
    }

    fn print_to_buffer(&mut self) {
        *self = PrintTarget::Buffer(Vec::new());
    }

    fn get_print_buffer(&mut self) -> Result<String> {
        match self {
            PrintTarget::Buffer(bytes) => Ok(String::from_utf8_lossy(bytes).into_owned()),
            other => Err(Error::new(
                ErrorKind::Other,
                format!("progress is printed to {}, not to a buffer", other.name()),
            )),
        }
    }
}
