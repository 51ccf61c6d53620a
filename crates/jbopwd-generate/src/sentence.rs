use std::cmp::Ordering;

use jbopwd_core::{APOSTROPHE, Lexicon};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;
use tracing::debug;

use crate::entropy::uniform;
use crate::errors::GenerateError;
use crate::lujvo::generate_lujvo;

/// Policy knobs for one sentence.
#[derive(Debug, Clone, Copy)]
pub struct SentenceOptions {
    /// Minimum number of word tokens before the random expansion.
    pub min_size: usize,
    /// Append exactly one terminal period.
    pub terminal_period: bool,
    /// Guarantee at least one apostrophe-bearing token.
    pub force_apostrophe: bool,
    /// Mix synthesized compound words into the sentence.
    pub include_lujvo: bool,
}

impl Default for SentenceOptions {
    fn default() -> Self {
        Self {
            min_size: 5,
            terminal_period: false,
            force_apostrophe: false,
            include_lujvo: false,
        }
    }
}

/// One generated pseudo-sentence with its gloss list.
///
/// Glosses cover every non-number token in order; the number token never
/// gets one.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedSentence {
    pub sentence: String,
    pub glosses: Vec<String>,
}

/// Assembles pseudo-sentences from a shared lexicon.
#[derive(Debug, Clone)]
pub struct SentenceGenerator<'a> {
    lexicon: &'a Lexicon,
    options: SentenceOptions,
}

impl<'a> SentenceGenerator<'a> {
    pub fn new(lexicon: &'a Lexicon, options: SentenceOptions) -> Self {
        Self { lexicon, options }
    }

    /// Generates one sentence.
    ///
    /// The sentence carries `length` word tokens plus one decimal number
    /// token at a uniform position, where `length` is `min_size` plus a
    /// uniform expansion in {0, 1, 2}. Word positions draw gismu and cmavo
    /// with equal probability; with lujvo injection enabled an independent
    /// one-in-five draw substitutes a synthesized compound word instead.
    pub fn generate(&self, rng: &mut impl Rng) -> Result<GeneratedSentence, GenerateError> {
        if self.lexicon.is_empty() {
            return Err(GenerateError::EmptyLexicon);
        }

        let length = self.options.min_size + uniform(rng, 3);
        let number_pos = uniform(rng, length + 1);

        let mut tokens: Vec<String> = Vec::with_capacity(length + 1);
        let mut glosses: Vec<String> = Vec::with_capacity(length);

        for i in 0..=length {
            if i == number_pos {
                tokens.push(uniform(rng, 100).to_string());
            }
            if i >= length {
                break;
            }

            let r = uniform(rng, 10);
            if self.options.include_lujvo && uniform(rng, 5) == 0 {
                let lujvo = generate_lujvo(self.lexicon, rng)?;
                glosses.push(format!("{}: {}", lujvo.word, lujvo.gloss));
                tokens.push(lujvo.word);
                continue;
            }

            if r < 5 {
                let entry = self
                    .lexicon
                    .gismu()
                    .choose(rng)
                    .ok_or(GenerateError::EmptyLexicon)?;
                tokens.push(entry.word.clone());
                glosses.push(format!("{}: {}", entry.word, entry.meaning));
            } else {
                let entry = self
                    .lexicon
                    .cmavo()
                    .choose(rng)
                    .ok_or(GenerateError::EmptyLexicon)?;
                tokens.push(entry.word.clone());
                glosses.push(format!("{}: {}", entry.word, entry.meaning));
            }
        }

        if self.options.force_apostrophe {
            self.force_apostrophe(&mut tokens, &mut glosses, number_pos, rng);
        }

        let mut sentence = tokens.join(" ");
        if self.options.terminal_period {
            sentence.push('.');
        }

        debug!(tokens = tokens.len(), "sentence assembled");
        Ok(GeneratedSentence { sentence, glosses })
    }

    /// Substitutes one token with an apostrophe-bearing entry when the
    /// assembled sentence has none. The number token is preserved whenever
    /// an alternative position exists; an empty apostrophe pool makes this
    /// a no-op.
    fn force_apostrophe(
        &self,
        tokens: &mut [String],
        glosses: &mut [String],
        number_pos: usize,
        rng: &mut impl Rng,
    ) {
        if tokens.is_empty() || tokens.iter().any(|token| token.contains(APOSTROPHE)) {
            return;
        }

        let pool_len = self.lexicon.apostrophe_pool_len();
        if pool_len == 0 {
            return;
        }
        let Some((word, meaning)) = self.lexicon.apostrophe_entry(uniform(rng, pool_len)) else {
            return;
        };

        let mut replace_idx = uniform(rng, tokens.len());
        if replace_idx == number_pos && tokens.len() > 1 {
            replace_idx = (replace_idx + 1) % tokens.len();
        }

        tokens[replace_idx] = word.to_string();
        if let Some(gloss_idx) = gloss_index(replace_idx, number_pos)
            && gloss_idx < glosses.len()
        {
            glosses[gloss_idx] = format!("{word}: {meaning}");
        }
    }
}

/// Maps a token position to its gloss position. The number token occupies
/// `number_pos` in the token list but has no gloss, so positions past it
/// shift down by one and the number position itself has no mapping.
fn gloss_index(token_idx: usize, number_pos: usize) -> Option<usize> {
    match token_idx.cmp(&number_pos) {
        Ordering::Less => Some(token_idx),
        Ordering::Equal => None,
        Ordering::Greater => Some(token_idx - 1),
    }
}
