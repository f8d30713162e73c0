use std::io;

use tally_diagnostic::source::Source;
use tally_diagnostic::termcolor::{ColorChoice, StandardStream, WriteColor};
use tally_diagnostic::{Config, Diagnostic};

pub trait DiagnosticEmitter {
    fn emit_diagnostic(&mut self, diagnostic: Diagnostic, source: &Source) -> io::Result<()>;
}

impl DiagnosticEmitter for Vec<Diagnostic> {
    fn emit_diagnostic(&mut self, diagnostic: Diagnostic, _source: &Source) -> io::Result<()> {
        self.push(diagnostic);
        Ok(())
    }
}

#[derive(Debug)]
pub struct PrettyDiagnosticEmitter<W: WriteColor = StandardStream> {
    pub stream: W,
    pub config: Config,
}

impl PrettyDiagnosticEmitter {
    pub fn stderr(color: ColorChoice) -> Self {
        Self::new(StandardStream::stderr(color))
    }
}

impl<W: WriteColor> PrettyDiagnosticEmitter<W> {
    pub fn new(stream: W) -> Self {
        Self {
            stream,
            config: Config::default(),
        }
    }
}

impl<W: WriteColor> DiagnosticEmitter for PrettyDiagnosticEmitter<W> {
    fn emit_diagnostic(&mut self, diagnostic: Diagnostic, source: &Source) -> io::Result<()> {
        diagnostic.write_to_stream(source, &self.config, &mut self.stream)
    }
}
