use crate::entry::{Cmavo, Gismu};

/// The apostrophe glyph used by Lojban orthography.
pub const APOSTROPHE: char = '\'';

/// Immutable container over both parsed tables.
///
/// Construction clones out the apostrophe-bearing entries so that
/// apostrophe forcing never rescans the full tables. The container is
/// read-only afterwards and can be shared freely across generation calls.
#[derive(Debug, Clone)]
pub struct Lexicon {
    gismu: Vec<Gismu>,
    cmavo: Vec<Cmavo>,
    apostrophe_gismu: Vec<Gismu>,
    apostrophe_cmavo: Vec<Cmavo>,
}

impl Lexicon {
    pub fn new(gismu: Vec<Gismu>, cmavo: Vec<Cmavo>) -> Self {
        let apostrophe_gismu = gismu
            .iter()
            .filter(|entry| entry.word.contains(APOSTROPHE))
            .cloned()
            .collect();
        let apostrophe_cmavo = cmavo
            .iter()
            .filter(|entry| entry.word.contains(APOSTROPHE))
            .cloned()
            .collect();

        Self {
            gismu,
            cmavo,
            apostrophe_gismu,
            apostrophe_cmavo,
        }
    }

    pub fn gismu(&self) -> &[Gismu] {
        &self.gismu
    }

    pub fn cmavo(&self) -> &[Cmavo] {
        &self.cmavo
    }

    /// True when either backing table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.gismu.is_empty() || self.cmavo.is_empty()
    }

    /// Gismu whose word contains the apostrophe glyph, in table order.
    pub fn apostrophe_gismu(&self) -> &[Gismu] {
        &self.apostrophe_gismu
    }

    /// Cmavo whose word contains the apostrophe glyph, in table order.
    pub fn apostrophe_cmavo(&self) -> &[Cmavo] {
        &self.apostrophe_cmavo
    }

    /// Number of apostrophe-bearing entries across both tables.
    pub fn apostrophe_pool_len(&self) -> usize {
        self.apostrophe_gismu.len() + self.apostrophe_cmavo.len()
    }

    /// Word and meaning of the pooled apostrophe-bearing entry at `index`,
    /// with the gismu subset ordered before the cmavo subset.
    pub fn apostrophe_entry(&self, index: usize) -> Option<(&str, &str)> {
        if let Some(entry) = self.apostrophe_gismu.get(index) {
            return Some((entry.word.as_str(), entry.meaning.as_str()));
        }
        let entry = self
            .apostrophe_cmavo
            .get(index - self.apostrophe_gismu.len())?;
        Some((entry.word.as_str(), entry.meaning.as_str()))
    }
}
