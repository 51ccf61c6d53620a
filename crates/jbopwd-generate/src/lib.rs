//! Constrained random generation over a parsed lexicon.
//!
//! Sentence assembly, compound-word (lujvo) synthesis, and the
//! operating-system entropy source behind them.

pub mod entropy;
pub mod errors;
pub mod lujvo;
pub mod sentence;

pub use entropy::{SystemEntropy, uniform};
pub use errors::GenerateError;
pub use lujvo::{Lujvo, generate_lujvo};
pub use sentence::{GeneratedSentence, SentenceGenerator, SentenceOptions};
