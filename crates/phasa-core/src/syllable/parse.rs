use tracing::trace;

use super::inventory::{is_onset_pair, vowel_trie, Closure};
use super::{Nucleus, Segment, Syllable};
use crate::unicode::{
    can_be_final, is_consonant, is_dependent_vowel, is_lead_vowel, is_thai, is_tone_mark,
    is_vocalic, THANTHAKHAT,
};

const LAKKHANGYAO: char = '\u{0E45}';

/// A base character with the tone marks written after it.
struct Glyph {
    base: char,
    marks: String,
}

impl Glyph {
    fn push_to(&self, s: &mut String) {
        s.push(self.base);
        s.push_str(&self.marks);
    }
}

fn glyphs(text: &str) -> Vec<Glyph> {
    let mut out: Vec<Glyph> = Vec::with_capacity(text.len() / 3 + 1);
    for c in text.chars() {
        match out.last_mut() {
            Some(prev) if is_tone_mark(c) && is_thai(prev.base) => prev.marks.push(c),
            _ => out.push(Glyph {
                base: c,
                marks: String::new(),
            }),
        }
    }
    out
}

/// Split `text` into syllables and pass-through segments.
pub fn parse(text: &str) -> Vec<Segment> {
    let glyphs = glyphs(text);
    let parser = Parser { g: &glyphs };
    let mut out: Vec<Segment> = Vec::new();
    let mut pos = 0;
    while pos < glyphs.len() {
        if let Some((syl, end)) = parser.syllable_at(pos) {
            out.push(Segment::Syllable(syl));
            pos = end;
        } else {
            match out.last_mut() {
                Some(Segment::Other(s)) => glyphs[pos].push_to(s),
                _ => {
                    let mut s = String::new();
                    glyphs[pos].push_to(&mut s);
                    out.push(Segment::Other(s));
                }
            }
            pos += 1;
        }
    }
    trace!(input = text, segments = out.len(), "syllable parse");
    out
}

struct Parser<'a> {
    g: &'a [Glyph],
}

impl Parser<'_> {
    fn base(&self, i: usize) -> Option<char> {
        self.g.get(i).map(|g| g.base)
    }

    fn unmarked(&self, i: usize) -> bool {
        self.g.get(i).is_some_and(|g| g.marks.is_empty())
    }

    fn text(&self, from: usize, to: usize) -> String {
        let mut s = String::new();
        for g in &self.g[from..to] {
            g.push_to(&mut s);
        }
        s
    }

    /// A consonant at `i` closes the current syllable unless a vowel sign,
    /// a tone mark or ์ shows it belongs to what follows.
    fn is_final_at(&self, i: usize) -> bool {
        let Some(c) = self.base(i) else {
            return false;
        };
        can_be_final(c)
            && self.unmarked(i)
            && !self
                .base(i + 1)
                .is_some_and(|n| is_dependent_vowel(n) || n == THANTHAKHAT)
    }

    /// Length of a silent run starting at `i`: `C์`, `Cิ์`, `Cุ์` or `CC์`.
    fn silent_len_at(&self, i: usize) -> Option<usize> {
        if !self.base(i).is_some_and(is_consonant) {
            return None;
        }
        match (self.base(i + 1), self.base(i + 2)) {
            (Some(THANTHAKHAT), _) => Some(2),
            (Some('ิ' | 'ุ'), Some(THANTHAKHAT)) => Some(3),
            (Some(c), Some(THANTHAKHAT)) if is_consonant(c) => Some(3),
            _ => None,
        }
    }

    /// Two-letter onsets only stand when a vowel shows the pair is spoken
    /// together; otherwise กร in พร is an onset and a final.
    fn takes_pair_onset(&self, i: usize, has_lead: bool) -> bool {
        let (Some(a), Some(b)) = (self.base(i), self.base(i + 1)) else {
            return false;
        };
        if !is_onset_pair(a, b) || !self.unmarked(i) {
            return false;
        }
        if has_lead {
            return true;
        }
        match self.base(i + 2) {
            Some(n) if is_dependent_vowel(n) => true,
            Some('อ') => true,
            Some('ว') => self.base(i + 3).is_some_and(is_consonant),
            _ => false,
        }
    }

    /// Longest vowel pattern for the onset ending before `j`, as
    /// `(key, closure, letters consumed after the onset)`.
    fn vowel_at(&self, lead: Option<char>, j: usize) -> Option<(&'static str, Closure, usize)> {
        let mut query = String::new();
        query.extend(lead);
        query.push('-');
        query.extend((j..j + 4).map_while(|x| self.base(x)));

        let mut matches: Vec<(usize, &(&'static str, Closure))> =
            vowel_trie().prefix_matches(&query).collect();
        matches.sort_unstable_by_key(|&(len, _)| std::cmp::Reverse(len));

        for (_, &(key, closure)) in matches {
            let body = key.chars().count() - 1 - usize::from(lead.is_some());
            let next = j + body;
            let ends_in_consonant = key.chars().last().is_some_and(is_consonant);
            if ends_in_consonant && self.base(next).is_some_and(is_dependent_vowel) {
                continue;
            }
            if closure == Closure::Required && !self.is_final_at(next) {
                continue;
            }
            return Some((key, closure, body));
        }
        None
    }

    fn syllable_at(&self, start: usize) -> Option<(Syllable, usize)> {
        let mut i = start;
        let lead = match self.base(i) {
            Some(c) if is_lead_vowel(c) => {
                if !self.unmarked(i) {
                    return None;
                }
                i += 1;
                Some(c)
            }
            _ => None,
        };

        let first = self.base(i).filter(|&c| is_consonant(c))?;

        if is_vocalic(first) && lead.is_none() {
            let mut end = i + 1;
            if self.base(end) == Some(LAKKHANGYAO) {
                end += 1;
            }
            let rhyme_start = self.g[i].marks.clone();
            let syl = Syllable {
                lead: None,
                onset: first.to_string(),
                nucleus: Nucleus::Vocalic,
                coda: None,
                tone: self.tone_in(start, end),
                rhyme: rhyme_start + &self.text(i + 1, end),
                silent: String::new(),
            };
            return Some((syl, end));
        }

        let onset_len = if self.takes_pair_onset(i, lead.is_some()) {
            2
        } else {
            1
        };
        let j = i + onset_len;
        let onset: String = self.g[i..j].iter().map(|g| g.base).collect();

        let mut coda = None;
        let (nucleus, mut end) = match self.vowel_at(lead, j) {
            Some((key, closure, body)) => {
                let mut k = j + body;
                if closure != Closure::Open && self.is_final_at(k) {
                    coda = self.base(k);
                    k += 1;
                }
                (Nucleus::Written(key), k)
            }
            None if lead.is_some() => return None,
            None if self.is_final_at(j) => {
                coda = self.base(j);
                (Nucleus::InherentO, j + 1)
            }
            None => (Nucleus::InherentA, j),
        };

        let rhyme_end = end;
        while let Some(len) = self.silent_len_at(end) {
            end += len;
        }

        let syl = Syllable {
            lead,
            onset,
            nucleus,
            coda,
            tone: self.tone_in(start, end),
            rhyme: self.g[j - 1].marks.clone() + &self.text(j, rhyme_end),
            silent: self.text(rhyme_end, end),
        };
        Some((syl, end))
    }

    fn tone_in(&self, from: usize, to: usize) -> Option<char> {
        self.g[from..to].iter().find_map(|g| g.marks.chars().next())
    }
}
