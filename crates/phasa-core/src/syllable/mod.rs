//! Thai syllable grammar.
//!
//! `parse` splits a word into syllables of the form
//! `{lead vowel?, onset, nucleus, coda?, tone?, silent letters}` and keeps
//! anything it cannot decompose (Latin text, digits, stray marks) as
//! pass-through segments. Concatenating the written form of every segment
//! gives back the input exactly.

mod inventory;
mod parse;
#[cfg(test)]
mod tests;

pub use inventory::{vowel_keys, Closure};
pub use parse::parse;

use crate::unicode::{MAITAIKHU, SARA_A};

/// Key of the inherent short *a* (สะ in สวัสดี).
pub const INHERENT_A: &str = "-ะ";
/// Key of the inherent short *o* (นพ in นพพร).
pub const INHERENT_O: &str = "โ-ะ";
/// Key of ็ written alone, the short -อ of ก็.
const BARE_MAITAIKHU: &str = "-็";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nucleus {
    /// A written vowel pattern from the inventory, e.g. `เ-ือ`.
    Written(&'static str),
    /// Unwritten short *a* on an open syllable.
    InherentA,
    /// Unwritten short *o* on a closed syllable.
    InherentO,
    /// ฤ or ฦ standing alone, carrying its own vowel.
    Vocalic,
}

impl Nucleus {
    /// Mapping-table key for this nucleus, if any.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Nucleus::Written(k) => Some(k),
            Nucleus::InherentA => Some(INHERENT_A),
            Nucleus::InherentO => Some(INHERENT_O),
            Nucleus::Vocalic => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    pub lead: Option<char>,
    /// One consonant or a two-letter onset (cluster or leader pair).
    pub onset: String,
    pub nucleus: Nucleus,
    pub coda: Option<char>,
    pub tone: Option<char>,
    /// Written form after the onset up to the silent letters: vowel signs,
    /// tone mark and final.
    pub rhyme: String,
    /// Letters cancelled by ์, thanthakhat included.
    pub silent: String,
}

impl Syllable {
    /// The syllable exactly as written.
    pub fn text(&self) -> String {
        let mut s = String::new();
        s.extend(self.lead);
        s.push_str(&self.onset);
        s.push_str(&self.rhyme);
        s.push_str(&self.silent);
        s
    }

    /// The sounding final. A bare `-รร` closes with *n* (กรร → kan).
    pub fn effective_coda(&self) -> Option<char> {
        match (self.nucleus, self.coda) {
            (Nucleus::Written("-รร"), None) => Some('น'),
            (_, coda) => coda,
        }
    }

    /// Written form with the inherent *a* spelled out and silent letters
    /// dropped.
    pub fn spelled(&self) -> String {
        self.respell(&self.onset)
    }

    /// This syllable's vowel, tone and final placed on another onset. A bare
    /// ็ (ก็) only stands on its own onset; elsewhere it is written as -อ.
    pub fn respell(&self, onset: &str) -> String {
        let mut s = String::new();
        s.extend(self.lead);
        s.push_str(onset);
        if self.nucleus == Nucleus::Written(BARE_MAITAIKHU) && onset != self.onset {
            s.push_str(&self.rhyme.replace(MAITAIKHU, "อ"));
        } else {
            s.push_str(&self.rhyme);
        }
        if self.nucleus == Nucleus::InherentA {
            s.push(SARA_A);
        }
        s
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Syllable(Syllable),
    /// Text the grammar does not decompose, copied through as written.
    Other(String),
}

impl Segment {
    pub fn text(&self) -> String {
        match self {
            Segment::Syllable(s) => s.text(),
            Segment::Other(t) => t.clone(),
        }
    }

    pub fn as_syllable(&self) -> Option<&Syllable> {
        match self {
            Segment::Syllable(s) => Some(s),
            Segment::Other(_) => None,
        }
    }
}
