//! Source diagnostics printed to stderr.

use codespan_reporting::diagnostic::Diagnostic;
use codespan_reporting::files::Files;
use codespan_reporting::term::{self, Config};
use termcolor::{ColorChoice, StandardStream};

/// An error that points into one of `F`'s files.
pub trait Eprint<'a, F: Files<'a>> {
    fn diagnostic(&self) -> Diagnostic<F::FileId>;

    fn eprint<'f: 'a>(&self, files: &'f F) {
        let config = Config::default();
        let mut out = StandardStream::stderr(ColorChoice::Auto);
        if let Err(e) = term::emit(&mut out, &config, files, &self.diagnostic()) {
            eprintln!("Error while reporting error: {e}");
        }
    }
}
