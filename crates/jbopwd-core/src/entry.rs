use serde::{Deserialize, Serialize};

/// Root-word (gismu) entry from the fixed-column gismu table.
///
/// A gismu is a predicate-like vocabulary entry with numbered argument
/// slots. The three rafsi fields hold its bound short forms ranked by
/// shape; an empty string marks an absent form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gismu {
    pub word: String,
    /// CVC-shaped rafsi.
    pub rafsi_cvc: String,
    /// CCV-shaped rafsi.
    pub rafsi_ccv: String,
    /// CVV-shaped rafsi.
    pub rafsi_cvv: String,
    /// Short English gloss.
    pub keyword: String,
    /// Secondary gloss fragment.
    pub hint: String,
    /// Full definition text.
    pub meaning: String,
    /// Argument-slot markers (`x1`, `x2`, ...) in order of appearance.
    pub placements: Vec<String>,
    /// Cross-references from the `(cf. ...)` annotation.
    pub see_also: Vec<String>,
}

/// Particle (cmavo) entry from the fixed-column cmavo table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cmavo {
    pub word: String,
    /// Grammatical class (selma'o) tag.
    pub category: String,
    pub keyword: String,
    pub meaning: String,
    /// Cross-references from the `(cf. ...)` annotation.
    pub see_also: Vec<String>,
}
