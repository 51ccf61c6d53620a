use thiserror::Error;

/// Errors emitted by the generators.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A draw was requested from a lexicon with an empty backing table.
    #[error("lexicon has no entries to draw from")]
    EmptyLexicon,
}
