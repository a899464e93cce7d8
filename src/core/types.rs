// src/core/types.rs
use serde::{Deserialize, Serialize};

pub const VIRAMA: char = '\u{094D}';
pub const NUKTA: char = '\u{093C}';
pub const RA: char = 'र';
/// Phonetic cluster separator, kept as a literal when it separates nothing.
pub const SEPARATOR: char = '`';

/// Where a legacy visual-order font draws a sign relative to its consonant.
/// Unicode output ignores this; it is always logical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionClass {
    PreBase,
    PostBase,
    Above,
    Below,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vowel {
    A,
    Aa,
    I,
    Ii,
    U,
    Uu,
    Ri,
    E,
    Ai,
    O,
    Au,
}

impl Vowel {
    pub const ALL: [Vowel; 11] = [
        Vowel::A,
        Vowel::Aa,
        Vowel::I,
        Vowel::Ii,
        Vowel::U,
        Vowel::Uu,
        Vowel::Ri,
        Vowel::E,
        Vowel::Ai,
        Vowel::O,
        Vowel::Au,
    ];

    /// The freestanding vowel letter.
    pub fn independent(self) -> char {
        match self {
            Vowel::A => 'अ',
            Vowel::Aa => 'आ',
            Vowel::I => 'इ',
            Vowel::Ii => 'ई',
            Vowel::U => 'उ',
            Vowel::Uu => 'ऊ',
            Vowel::Ri => 'ऋ',
            Vowel::E => 'ए',
            Vowel::Ai => 'ऐ',
            Vowel::O => 'ओ',
            Vowel::Au => 'औ',
        }
    }

    /// The dependent matra. The inherent vowel has none.
    pub fn sign(self) -> Option<char> {
        match self {
            Vowel::A => None,
            Vowel::Aa => Some('\u{093E}'),
            Vowel::I => Some('\u{093F}'),
            Vowel::Ii => Some('\u{0940}'),
            Vowel::U => Some('\u{0941}'),
            Vowel::Uu => Some('\u{0942}'),
            Vowel::Ri => Some('\u{0943}'),
            Vowel::E => Some('\u{0947}'),
            Vowel::Ai => Some('\u{0948}'),
            Vowel::O => Some('\u{094B}'),
            Vowel::Au => Some('\u{094C}'),
        }
    }

    pub fn position(self) -> PositionClass {
        match self {
            Vowel::A => PositionClass::None,
            Vowel::I => PositionClass::PreBase,
            Vowel::Aa | Vowel::Ii | Vowel::O | Vowel::Au => PositionClass::PostBase,
            Vowel::U | Vowel::Uu | Vowel::Ri => PositionClass::Below,
            Vowel::E | Vowel::Ai => PositionClass::Above,
        }
    }
}

/// Nasalization and breath marks that close a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    Anusvara,
    Candrabindu,
    Visarga,
}

impl Modifier {
    pub const ALL: [Modifier; 3] = [Modifier::Anusvara, Modifier::Candrabindu, Modifier::Visarga];

    pub fn to_char(self) -> char {
        match self {
            Modifier::Anusvara => '\u{0902}',
            Modifier::Candrabindu => '\u{0901}',
            Modifier::Visarga => '\u{0903}',
        }
    }

    pub fn position(self) -> PositionClass {
        match self {
            Modifier::Anusvara | Modifier::Candrabindu => PositionClass::Above,
            Modifier::Visarga => PositionClass::PostBase,
        }
    }
}

/// Script-specific punctuation and numerals that stand on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Digit(u8),
    Danda,
    DoubleDanda,
    Avagraha,
}

impl Symbol {
    pub fn to_char(self) -> char {
        match self {
            Symbol::Digit(d) => char::from_u32(0x0966 + u32::from(d.min(9))).unwrap_or('०'),
            Symbol::Danda => '।',
            Symbol::DoubleDanda => '॥',
            Symbol::Avagraha => 'ऽ',
        }
    }
}

/// One graphemic unit produced by a tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Consonant(char),
    Nukta,
    Virama,
    /// Phonetic vowel: a matra after a consonant, a letter otherwise.
    Vowel(Vowel),
    Independent(Vowel),
    Sign(Vowel),
    Modifier(Modifier),
    Symbol(Symbol),
    Separator,
    Literal(char),
}

impl Unit {
    pub fn position(&self) -> PositionClass {
        match self {
            Unit::Sign(v) | Unit::Vowel(v) => v.position(),
            Unit::Modifier(m) => m.position(),
            Unit::Nukta | Unit::Virama => PositionClass::Below,
            _ => PositionClass::None,
        }
    }

    /// Whether the unit takes part in cluster assembly.
    pub fn is_script(&self) -> bool {
        !matches!(self, Unit::Symbol(_) | Unit::Separator | Unit::Literal(_))
    }

    /// The Unicode text for a unit rendered on its own.
    pub fn unicode_char(&self) -> Option<char> {
        match *self {
            Unit::Consonant(ch) | Unit::Literal(ch) => Some(ch),
            Unit::Nukta => Some(NUKTA),
            Unit::Virama => Some(VIRAMA),
            Unit::Vowel(v) | Unit::Independent(v) => Some(v.independent()),
            Unit::Sign(v) => v.sign(),
            Unit::Modifier(m) => Some(m.to_char()),
            Unit::Symbol(s) => Some(s.to_char()),
            Unit::Separator => Some(SEPARATOR),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Letter {
    pub ch: char,
    pub nukta: bool,
}

impl Letter {
    pub fn plain(ch: char) -> Self {
        Self { ch, nukta: false }
    }
}

/// A consonant cluster or a freestanding vowel.
///
/// `base` is the first consonant; `conjuncts` are the virama-joined members
/// after it, the last of which is the rendering consonant. `vowel` is the
/// matra for consonant clusters (`None` = inherent a) and the letter itself
/// for independent vowels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphemeCluster {
    pub base: Option<Letter>,
    pub conjuncts: Vec<Letter>,
    pub vowel: Option<Vowel>,
    pub modifier: Option<Modifier>,
    pub independent: bool,
    /// Explicit word-final virama on the last consonant.
    pub halanta: bool,
}

impl GraphemeCluster {
    pub fn consonant(ch: char) -> Self {
        Self {
            base: Some(Letter::plain(ch)),
            conjuncts: Vec::new(),
            vowel: None,
            modifier: None,
            independent: false,
            halanta: false,
        }
    }

    pub fn independent(vowel: Vowel) -> Self {
        Self {
            base: None,
            conjuncts: Vec::new(),
            vowel: Some(vowel),
            modifier: None,
            independent: true,
            halanta: false,
        }
    }

    pub fn letters(&self) -> impl Iterator<Item = &Letter> {
        self.base.iter().chain(self.conjuncts.iter())
    }

    pub fn last_letter_mut(&mut self) -> Option<&mut Letter> {
        match self.conjuncts.last_mut() {
            Some(letter) => Some(letter),
            None => self.base.as_mut(),
        }
    }

    pub fn has_nukta(&self) -> bool {
        self.letters().any(|l| l.nukta)
    }

    /// The matra attached to a consonant cluster, if any.
    pub fn vowel_sign(&self) -> Option<Vowel> {
        if self.independent {
            None
        } else {
            self.vowel.filter(|v| *v != Vowel::A)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cluster {
    Grapheme(GraphemeCluster),
    /// A nukta, virama, matra or modifier with nothing to attach to.
    Mark(Unit),
    Symbol(Symbol),
    Literal(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_short_i_is_pre_base() {
        let pre: Vec<Vowel> = Vowel::ALL
            .into_iter()
            .filter(|v| v.position() == PositionClass::PreBase)
            .collect();
        assert_eq!(pre, vec![Vowel::I]);
    }

    #[test]
    fn inherent_vowel_has_no_sign() {
        assert_eq!(Vowel::A.sign(), None);
        assert!(Vowel::ALL[1..].iter().all(|v| v.sign().is_some()));
    }

    #[test]
    fn digits_map_into_devanagari_block() {
        assert_eq!(Symbol::Digit(0).to_char(), '०');
        assert_eq!(Symbol::Digit(9).to_char(), '९');
    }

    #[test]
    fn cluster_letters_run_base_first() {
        let mut cluster = GraphemeCluster::consonant('स');
        cluster.conjuncts.push(Letter::plain('थ'));
        let chars: String = cluster.letters().map(|l| l.ch).collect();
        assert_eq!(chars, "सथ");
        cluster.last_letter_mut().unwrap().nukta = true;
        assert!(cluster.has_nukta());
        assert!(!cluster.base.unwrap().nukta);
    }
}
