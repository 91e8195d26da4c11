use log::debug;
use thiserror::Error;

use crate::error::{LexError, ParseError, RuntimeError};

/// One reported problem, tagged with the stage that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// Raised by the scanner. Scanning continues after it.
    #[error("Error on line {line}: LexicalError: {error}.")]
    Lexical {
        /// What the scanner ran into.
        error: LexError,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Raised by the parser. Parsing resumes at the next statement.
    #[error(transparent)]
    Syntax(#[from] ParseError),
    /// Raised by the interpreter. Execution stops.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Diagnostic {
    /// Returns `true` for lexical and syntax errors, which both prevent a
    /// program from running.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Lexical { .. } | Self::Syntax(_))
    }
}

/// Collects the diagnostics of one pipeline run.
///
/// A `Diagnostics` value is owned by the caller and handed to the scanner,
/// the parser and the interpreter in turn. Batch runs use one per file; the
/// interactive prompt clears it after every submitted block.
///
/// # Example
/// ```
/// use cde::error::{Diagnostics, RuntimeError};
///
/// let mut diagnostics = Diagnostics::new();
/// assert!(!diagnostics.has_runtime_error());
///
/// diagnostics.report(RuntimeError::DivisionByZero { line: 3 });
/// assert!(diagnostics.has_runtime_error());
/// assert!(!diagnostics.has_syntax_error());
/// assert_eq!(diagnostics.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Diagnostics {
    reported:      Vec<Diagnostic>,
    syntax_error:  bool,
    runtime_error: bool,
}

impl Diagnostics {
    /// Creates an empty collection with both error flags cleared.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic and raises the matching error flag.
    pub fn report(&mut self, diagnostic: impl Into<Diagnostic>) {
        let diagnostic = diagnostic.into();
        debug!("recorded diagnostic: {diagnostic}");

        if diagnostic.is_syntax() {
            self.syntax_error = true;
        } else {
            self.runtime_error = true;
        }
        self.reported.push(diagnostic);
    }

    /// Records a scanner error found on `line`.
    pub fn report_lexical(&mut self, error: LexError, line: usize) {
        self.report(Diagnostic::Lexical { error, line });
    }

    /// Whether a lexical or syntax error has been raised.
    #[must_use]
    pub const fn has_syntax_error(&self) -> bool {
        self.syntax_error
    }

    /// Whether a runtime error has been raised.
    #[must_use]
    pub const fn has_runtime_error(&self) -> bool {
        self.runtime_error
    }

    /// Forgets every recorded diagnostic and clears both flags.
    pub fn clear(&mut self) {
        self.reported.clear();
        self.syntax_error = false;
        self.runtime_error = false;
    }

    /// Iterates over the diagnostics in the order they were reported.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.reported.iter()
    }

    /// Number of recorded diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reported.len()
    }

    /// Whether nothing has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reported.is_empty()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type IntoIter = std::slice::Iter<'a, Diagnostic>;
    type Item = &'a Diagnostic;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
