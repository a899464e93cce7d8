//! Static mapping tables for the three representations.
//!
//! Preeti entries are stored in structured form (full glyph, half-form
//! glyph, ligatures, signs) so the reorderer can pick a form by position;
//! the Preeti tokenizer table is derived from the same data.

use crate::config::ConfigError;
use crate::core::romanizer::PhoneticKeys;
use crate::core::tokenizer::tokenize;
use crate::core::trie::KeyTrie;
use crate::core::types::{Modifier, Symbol, Unit, Vowel, NUKTA, RA};
use std::collections::BTreeMap;
use tracing::debug;

pub const PHONETIC_VIRAMA: &str = "\\";
pub const PHONETIC_SEPARATOR: &str = "`";
/// Nukta keeps its Devanagari form in phonetic text.
pub const PHONETIC_NUKTA_SIGN: &str = "\u{093C}";

/// Phonetic consonant keys. Case matters: uppercase selects the retroflex
/// series. The first key for a letter is the one written back out.
pub static PHONETIC_CONSONANTS: &[(&str, char)] = &[
    ("k", 'क'),
    ("kh", 'ख'),
    ("g", 'ग'),
    ("gh", 'घ'),
    ("ng", 'ङ'),
    ("ch", 'च'),
    ("c", 'च'),
    ("chh", 'छ'),
    ("j", 'ज'),
    ("jh", 'झ'),
    ("NY", 'ञ'),
    ("T", 'ट'),
    ("Th", 'ठ'),
    ("D", 'ड'),
    ("Dh", 'ढ'),
    ("N", 'ण'),
    ("t", 'त'),
    ("th", 'थ'),
    ("d", 'द'),
    ("dh", 'ध'),
    ("n", 'न'),
    ("p", 'प'),
    ("ph", 'फ'),
    ("b", 'ब'),
    ("bh", 'भ'),
    ("m", 'म'),
    ("y", 'य'),
    ("r", 'र'),
    ("l", 'ल'),
    ("v", 'व'),
    ("w", 'व'),
    ("sh", 'श'),
    ("Sh", 'ष'),
    ("s", 'स'),
    ("h", 'ह'),
];

/// Borrowed sounds written as base consonant + nukta.
pub static PHONETIC_NUKTA: &[(&str, char)] = &[("q", 'क'), ("z", 'ज'), ("f", 'फ')];

pub static PHONETIC_CONJUNCTS: &[(&str, &[char])] = &[("x", &['क', 'ष']), ("GY", &['ज', 'ञ'])];

pub static PHONETIC_VOWELS: &[(&str, Vowel)] = &[
    ("a", Vowel::A),
    ("aa", Vowel::Aa),
    ("A", Vowel::Aa),
    ("i", Vowel::I),
    ("ii", Vowel::Ii),
    ("ee", Vowel::Ii),
    ("I", Vowel::Ii),
    ("u", Vowel::U),
    ("uu", Vowel::Uu),
    ("oo", Vowel::Uu),
    ("U", Vowel::Uu),
    ("R", Vowel::Ri),
    ("e", Vowel::E),
    ("ai", Vowel::Ai),
    ("E", Vowel::Ai),
    ("o", Vowel::O),
    ("au", Vowel::Au),
    ("O", Vowel::Au),
];

pub static PHONETIC_MODIFIERS: &[(&str, Modifier)] = &[
    ("M", Modifier::Anusvara),
    ("~", Modifier::Candrabindu),
    ("H", Modifier::Visarga),
];

pub static PHONETIC_SYMBOLS: &[(&str, Symbol)] =
    &[("|", Symbol::Danda), ("||", Symbol::DoubleDanda)];

/// Precomposed nukta letters; they tokenize as base + nukta.
pub static NUKTA_COMPOSED: &[(char, char)] = &[
    ('\u{0958}', 'क'),
    ('\u{0959}', 'ख'),
    ('\u{095A}', 'ग'),
    ('\u{095B}', 'ज'),
    ('\u{095C}', 'ड'),
    ('\u{095D}', 'ढ'),
    ('\u{095E}', 'फ'),
    ('\u{095F}', 'य'),
];

pub const PREETI_VIRAMA: &str = "\\";
/// Floating र् drawn over the following cluster.
pub const PREETI_REPH: &str = "{";
/// Post-consonant र joined below the preceding letter.
pub const PREETI_RAKAR: &str = "|";

/// Consonant → (full glyph, half-form glyph).
pub static PREETI_CONSONANTS: &[(char, &str, Option<&str>)] = &[
    ('क', "s", Some("S")),
    ('ख', "v", Some("V")),
    ('ग', "u", Some("U")),
    ('घ', "3", Some("£")),
    ('ङ', "ª", None),
    ('च', "r", Some("R")),
    ('छ', "5", None),
    ('ज', "h", Some("H")),
    ('झ', "em", None),
    ('ञ', "`", Some("~")),
    ('ट', "6", None),
    ('ठ', "7", None),
    ('ड', "8", None),
    ('ढ', "9", None),
    ('ण', "0f", Some("0")),
    ('त', "t", Some("T")),
    ('थ', "y", Some("Y")),
    ('द', "b", None),
    ('ध', "w", Some("W")),
    ('न', "g", Some("G")),
    ('प', "k", Some("K")),
    ('फ', "km", Some("Km")),
    ('ब', "a", Some("A")),
    ('भ', "e", Some("E")),
    ('म', "d", Some("D")),
    ('य', "o", None),
    ('र', "/", None),
    ('ल', "n", Some("N")),
    ('व', "j", Some("J")),
    ('श', "z", Some("Z")),
    ('ष', "if", Some("i")),
    ('स', ";", Some(":")),
    ('ह', "x", None),
];

/// Conjuncts the font draws as a single glyph.
pub static PREETI_LIGATURES: &[(&[char], &str, Option<&str>)] = &[
    (&['क', 'ष'], "If", Some("I")),
    (&['ज', 'ञ'], "1", None),
    (&['त', 'त'], "Q", Some("Œ")),
    (&['त', 'र'], "q", None),
    (&['द', 'द'], "2", None),
    (&['द', 'ध'], "4", None),
    (&['द', 'य'], "B", None),
    (&['श', 'र'], ">", None),
];

/// र with a below-base u/uu sign is one glyph.
pub static PREETI_SPECIAL: &[(char, Vowel, &str)] = &[(RA, Vowel::U, "?"), (RA, Vowel::Uu, "¿")];

pub static PREETI_SIGNS: &[(Vowel, &str)] = &[
    (Vowel::Aa, "f"),
    (Vowel::I, "l"),
    (Vowel::Ii, "L"),
    (Vowel::U, "'"),
    (Vowel::Uu, "\""),
    (Vowel::Ri, "["),
    (Vowel::E, "]"),
    (Vowel::Ai, "}"),
    (Vowel::O, "f]"),
    (Vowel::Au, "f}"),
];

pub static PREETI_VOWELS: &[(Vowel, &str)] = &[
    (Vowel::A, "c"),
    (Vowel::Aa, "cf"),
    (Vowel::I, "O"),
    (Vowel::Ii, "O{"),
    (Vowel::U, "p"),
    (Vowel::Uu, "pm"),
    (Vowel::Ri, "C"),
    (Vowel::E, "P"),
    (Vowel::Ai, "P]"),
    (Vowel::O, "cf]"),
    (Vowel::Au, "cf}"),
];

pub static PREETI_MODIFIERS: &[(Modifier, &str)] = &[
    (Modifier::Anusvara, "+"),
    (Modifier::Candrabindu, "F"),
    (Modifier::Visarga, "M"),
];

pub static PREETI_SYMBOLS: &[(Symbol, &str)] = &[
    (Symbol::Digit(0), ")"),
    (Symbol::Digit(1), "!"),
    (Symbol::Digit(2), "@"),
    (Symbol::Digit(3), "#"),
    (Symbol::Digit(4), "$"),
    (Symbol::Digit(5), "%"),
    (Symbol::Digit(6), "^"),
    (Symbol::Digit(7), "&"),
    (Symbol::Digit(8), "*"),
    (Symbol::Digit(9), "("),
    (Symbol::Danda, "."),
    (Symbol::Avagraha, "˜"),
];

pub fn preeti_consonant(ch: char) -> Option<(&'static str, Option<&'static str>)> {
    PREETI_CONSONANTS.iter().find(|(c, _, _)| *c == ch).map(|&(_, full, half)| (full, half))
}

pub fn preeti_sign(vowel: Vowel) -> Option<&'static str> {
    PREETI_SIGNS.iter().find(|(v, _)| *v == vowel).map(|&(_, glyph)| glyph)
}

pub fn preeti_vowel(vowel: Vowel) -> Option<&'static str> {
    PREETI_VOWELS.iter().find(|(v, _)| *v == vowel).map(|&(_, glyph)| glyph)
}

pub fn preeti_modifier(modifier: Modifier) -> Option<&'static str> {
    PREETI_MODIFIERS.iter().find(|(m, _)| *m == modifier).map(|&(_, glyph)| glyph)
}

pub fn preeti_symbol(symbol: Symbol) -> Option<&'static str> {
    PREETI_SYMBOLS.iter().find(|(s, _)| *s == symbol).map(|&(_, glyph)| glyph)
}

pub fn preeti_special(ch: char, vowel: Vowel) -> Option<&'static str> {
    PREETI_SPECIAL
        .iter()
        .find(|(c, v, _)| *c == ch && *v == vowel)
        .map(|&(_, _, glyph)| glyph)
}

/// Consonants joined by virama, as a tokenizer value.
fn joined(letters: &[char]) -> Vec<Unit> {
    let mut units = Vec::with_capacity(letters.len() * 2);
    for (i, &ch) in letters.iter().enumerate() {
        if i > 0 {
            units.push(Unit::Virama);
        }
        units.push(Unit::Consonant(ch));
    }
    units
}

pub fn phonetic_entries() -> Vec<(String, Vec<Unit>)> {
    let mut entries: Vec<(String, Vec<Unit>)> = Vec::new();
    for &(key, ch) in PHONETIC_CONSONANTS {
        entries.push((key.to_string(), vec![Unit::Consonant(ch)]));
    }
    for &(key, ch) in PHONETIC_NUKTA {
        entries.push((key.to_string(), vec![Unit::Consonant(ch), Unit::Nukta]));
    }
    for &(key, letters) in PHONETIC_CONJUNCTS {
        entries.push((key.to_string(), joined(letters)));
    }
    for &(key, vowel) in PHONETIC_VOWELS {
        entries.push((key.to_string(), vec![Unit::Vowel(vowel)]));
    }
    for &(key, modifier) in PHONETIC_MODIFIERS {
        entries.push((key.to_string(), vec![Unit::Modifier(modifier)]));
    }
    for &(key, symbol) in PHONETIC_SYMBOLS {
        entries.push((key.to_string(), vec![Unit::Symbol(symbol)]));
    }
    // Consonants with no romanized key are typed as themselves.
    for ch in '\u{0915}'..='\u{0939}' {
        if !PHONETIC_CONSONANTS.iter().any(|&(_, c)| c == ch) {
            entries.push((ch.to_string(), vec![Unit::Consonant(ch)]));
        }
    }
    entries.push((PHONETIC_NUKTA_SIGN.to_string(), vec![Unit::Nukta]));
    entries.push((PHONETIC_VIRAMA.to_string(), vec![Unit::Virama]));
    entries.push((PHONETIC_SEPARATOR.to_string(), vec![Unit::Separator]));
    entries
}

/// Every Devanagari codepoint the engine understands.
pub fn unicode_entries() -> Vec<(String, Vec<Unit>)> {
    let mut entries: Vec<(String, Vec<Unit>)> = Vec::new();
    for ch in '\u{0915}'..='\u{0939}' {
        entries.push((ch.to_string(), vec![Unit::Consonant(ch)]));
    }
    for &(composed, base) in NUKTA_COMPOSED {
        entries.push((composed.to_string(), vec![Unit::Consonant(base), Unit::Nukta]));
    }
    for vowel in Vowel::ALL {
        entries.push((vowel.independent().to_string(), vec![Unit::Independent(vowel)]));
        if let Some(sign) = vowel.sign() {
            entries.push((sign.to_string(), vec![Unit::Sign(vowel)]));
        }
    }
    for modifier in Modifier::ALL {
        entries.push((modifier.to_char().to_string(), vec![Unit::Modifier(modifier)]));
    }
    for d in 0..10u8 {
        let symbol = Symbol::Digit(d);
        entries.push((symbol.to_char().to_string(), vec![Unit::Symbol(symbol)]));
    }
    for symbol in [Symbol::Danda, Symbol::DoubleDanda, Symbol::Avagraha] {
        entries.push((symbol.to_char().to_string(), vec![Unit::Symbol(symbol)]));
    }
    entries.push((crate::core::types::VIRAMA.to_string(), vec![Unit::Virama]));
    entries.push((NUKTA.to_string(), vec![Unit::Nukta]));
    entries
}

pub fn preeti_entries() -> Vec<(String, Vec<Unit>)> {
    let mut entries: Vec<(String, Vec<Unit>)> = Vec::new();
    for &(ch, full, half) in PREETI_CONSONANTS {
        entries.push((full.to_string(), vec![Unit::Consonant(ch)]));
        if let Some(half) = half {
            entries.push((half.to_string(), vec![Unit::Consonant(ch), Unit::Virama]));
        }
    }
    for &(letters, full, half) in PREETI_LIGATURES {
        entries.push((full.to_string(), joined(letters)));
        if let Some(half) = half {
            let mut units = joined(letters);
            units.push(Unit::Virama);
            entries.push((half.to_string(), units));
        }
    }
    for &(ch, vowel, glyph) in PREETI_SPECIAL {
        entries.push((glyph.to_string(), vec![Unit::Consonant(ch), Unit::Sign(vowel)]));
    }
    for &(vowel, glyph) in PREETI_SIGNS {
        entries.push((glyph.to_string(), vec![Unit::Sign(vowel)]));
    }
    for &(vowel, glyph) in PREETI_VOWELS {
        entries.push((glyph.to_string(), vec![Unit::Independent(vowel)]));
    }
    for &(modifier, glyph) in PREETI_MODIFIERS {
        entries.push((glyph.to_string(), vec![Unit::Modifier(modifier)]));
    }
    for &(symbol, glyph) in PREETI_SYMBOLS {
        entries.push((glyph.to_string(), vec![Unit::Symbol(symbol)]));
    }
    entries.push((PREETI_VIRAMA.to_string(), vec![Unit::Virama]));
    entries.push((PREETI_REPH.to_string(), vec![Unit::Consonant(RA), Unit::Virama]));
    entries.push((PREETI_RAKAR.to_string(), vec![Unit::Virama, Unit::Consonant(RA)]));
    // The reorderer passes nukta through untouched; read it back the same way.
    entries.push((NUKTA.to_string(), vec![Unit::Nukta]));
    entries
}

/// The read-only lookup structures one converter works from.
#[derive(Clone)]
pub struct MappingTables {
    pub phonetic: KeyTrie,
    pub unicode: KeyTrie,
    pub preeti: KeyTrie,
    pub phonetic_keys: PhoneticKeys,
}

impl MappingTables {
    pub fn build() -> Self {
        let tables = Self {
            phonetic: KeyTrie::from_entries(phonetic_entries()),
            unicode: KeyTrie::from_entries(unicode_entries()),
            preeti: KeyTrie::from_entries(preeti_entries()),
            phonetic_keys: PhoneticKeys::from_tables(),
        };
        debug!(
            phonetic = tables.phonetic.len(),
            unicode = tables.unicode.len(),
            preeti = tables.preeti.len(),
            "mapping tables built"
        );
        tables
    }

    /// Adds or replaces phonetic keys. Values are Devanagari text and must
    /// tokenize completely against the Unicode table; if any value does not,
    /// no key is changed.
    pub fn apply_phonetic_overrides(
        &mut self,
        overrides: &BTreeMap<String, String>,
    ) -> Result<(), ConfigError> {
        let mut resolved = Vec::with_capacity(overrides.len());
        for (key, value) in overrides {
            let units = tokenize(value, &self.unicode);
            if units.iter().any(|u| matches!(u, Unit::Literal(_))) {
                return Err(ConfigError::UnmappedValue { key: key.clone(), value: value.clone() });
            }
            let units: Vec<Unit> = units
                .into_iter()
                .map(|u| match u {
                    Unit::Independent(v) | Unit::Sign(v) => Unit::Vowel(v),
                    other => other,
                })
                .collect();
            resolved.push((key, value, units));
        }
        for (key, value, units) in resolved {
            debug!(key = %key, value = %value, "phonetic override");
            self.phonetic.insert(key, units);
        }
        Ok(())
    }
}
