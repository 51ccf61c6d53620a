use jbopwd_core::{Gismu, Lexicon};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::errors::GenerateError;

/// Linking letter appended to a truncated leading component when its gismu
/// defines no rafsi.
const LINKING_LETTER: char = 'y';

/// A synthesized compound word and its gloss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lujvo {
    pub word: String,
    pub gloss: String,
}

/// Builds a compound word from two gismu drawn uniformly with replacement.
///
/// The two selected short forms are concatenated directly, leading form
/// first, with no separator. The gloss references both source keywords as
/// `lujvo(<keyword1> + <keyword2>)`.
pub fn generate_lujvo(lexicon: &Lexicon, rng: &mut impl Rng) -> Result<Lujvo, GenerateError> {
    let first = lexicon
        .gismu()
        .choose(rng)
        .ok_or(GenerateError::EmptyLexicon)?;
    let second = lexicon
        .gismu()
        .choose(rng)
        .ok_or(GenerateError::EmptyLexicon)?;

    let head = select_rafsi(first, false, rng);
    let tail = select_rafsi(second, true, rng);

    Ok(Lujvo {
        word: format!("{head}{tail}"),
        gloss: format!("lujvo({} + {})", first.keyword, second.keyword),
    })
}

/// Picks a bound short form for one compound component: uniform over the
/// rafsi the table defines, falling back to the full word for the final
/// component and to the first four bytes plus [`LINKING_LETTER`] for a
/// leading component whose word is long enough.
fn select_rafsi(entry: &Gismu, is_final: bool, rng: &mut impl Rng) -> String {
    let candidates: Vec<&str> = [&entry.rafsi_cvc, &entry.rafsi_ccv, &entry.rafsi_cvv]
        .into_iter()
        .map(String::as_str)
        .filter(|rafsi| !rafsi.is_empty())
        .collect();
    if let Some(rafsi) = candidates.choose(rng) {
        return (*rafsi).to_string();
    }

    if is_final {
        return entry.word.clone();
    }
    match entry.word.get(..4) {
        Some(head) => format!("{head}{LINKING_LETTER}"),
        None => entry.word.clone(),
    }
}
