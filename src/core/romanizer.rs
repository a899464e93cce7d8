use crate::core::tables::{
    PHONETIC_CONJUNCTS, PHONETIC_CONSONANTS, PHONETIC_MODIFIERS, PHONETIC_NUKTA,
    PHONETIC_NUKTA_SIGN, PHONETIC_SEPARATOR, PHONETIC_SYMBOLS, PHONETIC_VIRAMA, PHONETIC_VOWELS,
};
use crate::core::trie::KeyTrie;
use crate::core::types::{Cluster, Letter, Modifier, Symbol, Unit, Vowel};
use std::collections::HashMap;

/// Reverse phonetic lookup: the canonical key for each value.
#[derive(Debug, Clone)]
pub struct PhoneticKeys {
    consonants: HashMap<char, &'static str>,
    nukta: HashMap<char, &'static str>,
    conjuncts: Vec<(&'static [char], &'static str)>,
    vowels: HashMap<Vowel, &'static str>,
    modifiers: HashMap<Modifier, &'static str>,
    symbols: HashMap<Symbol, &'static str>,
}

impl PhoneticKeys {
    pub fn from_tables() -> Self {
        let mut consonants = HashMap::new();
        for &(key, ch) in PHONETIC_CONSONANTS {
            consonants.entry(ch).or_insert(key);
        }
        let mut nukta = HashMap::new();
        for &(key, ch) in PHONETIC_NUKTA {
            nukta.entry(ch).or_insert(key);
        }
        let mut conjuncts: Vec<(&'static [char], &'static str)> =
            PHONETIC_CONJUNCTS.iter().map(|&(key, letters)| (letters, key)).collect();
        conjuncts.sort_by_key(|(letters, _)| std::cmp::Reverse(letters.len()));
        let mut vowels = HashMap::new();
        for &(key, vowel) in PHONETIC_VOWELS {
            vowels.entry(vowel).or_insert(key);
        }
        let mut modifiers = HashMap::new();
        for &(key, modifier) in PHONETIC_MODIFIERS {
            modifiers.entry(modifier).or_insert(key);
        }
        let mut symbols = HashMap::new();
        for &(key, symbol) in PHONETIC_SYMBOLS {
            symbols.entry(symbol).or_insert(key);
        }
        Self { consonants, nukta, conjuncts, vowels, modifiers, symbols }
    }

    fn vowel(&self, vowel: Vowel) -> &'static str {
        self.vowels.get(&vowel).copied().unwrap_or("a")
    }

    fn conjunct_at(&self, letters: &[Letter]) -> Option<(usize, &'static str)> {
        self.conjuncts.iter().find_map(|&(chain, key)| {
            let matches = letters.len() >= chain.len()
                && letters.iter().zip(chain).all(|(l, c)| !l.nukta && l.ch == *c);
            matches.then_some((chain.len(), key))
        })
    }

    fn push_cluster(&self, cluster: &Cluster, pieces: &mut Vec<Piece>) {
        match cluster {
            Cluster::Grapheme(g) if g.independent => {
                pieces.push(Piece::key(self.vowel(g.vowel.unwrap_or(Vowel::A)), true, false));
                self.push_modifier(g.modifier, pieces);
            }
            Cluster::Grapheme(g) => {
                let letters: Vec<Letter> = g.letters().copied().collect();
                let mut i = 0;
                while i < letters.len() {
                    let opens = i == 0;
                    if let Some((len, key)) = self.conjunct_at(&letters[i..]) {
                        pieces.push(Piece::key(key, opens, true));
                        i += len;
                        continue;
                    }
                    let letter = letters[i];
                    match self.nukta.get(&letter.ch).filter(|_| letter.nukta) {
                        Some(key) => pieces.push(Piece::key(key, opens, true)),
                        None => {
                            match self.consonants.get(&letter.ch) {
                                Some(key) => pieces.push(Piece::key(key, opens, true)),
                                // typed as itself
                                None => {
                                    pieces.push(Piece::key(&letter.ch.to_string(), opens, true))
                                }
                            }
                            if letter.nukta {
                                pieces.push(Piece::key(PHONETIC_NUKTA_SIGN, false, false));
                            }
                        }
                    }
                    i += 1;
                }
                if g.halanta {
                    pieces.push(Piece::key(PHONETIC_VIRAMA, false, false));
                } else {
                    let vowel = g.vowel_sign().unwrap_or(Vowel::A);
                    pieces.push(Piece::key(self.vowel(vowel), false, false));
                }
                self.push_modifier(g.modifier, pieces);
            }
            Cluster::Mark(unit) => match *unit {
                Unit::Virama => pieces.push(Piece::key(PHONETIC_VIRAMA, true, false)),
                Unit::Sign(v) | Unit::Vowel(v) | Unit::Independent(v) => {
                    pieces.push(Piece::key(self.vowel(v), true, false))
                }
                Unit::Modifier(m) => match self.modifiers.get(&m) {
                    Some(key) => pieces.push(Piece::key(key, true, false)),
                    None => pieces.push(Piece::raw(m.to_char(), true)),
                },
                other => {
                    if let Some(ch) = other.unicode_char() {
                        pieces.push(Piece::raw(ch, true));
                    }
                }
            },
            Cluster::Symbol(Symbol::Digit(d)) => {
                pieces.push(Piece::raw(char::from(b'0' + (*d).min(9)), true))
            }
            Cluster::Symbol(symbol) => match self.symbols.get(symbol) {
                Some(key) => pieces.push(Piece::key(key, true, false)),
                None => pieces.push(Piece::raw(symbol.to_char(), true)),
            },
            Cluster::Literal(ch) => pieces.push(Piece::raw(*ch, true)),
        }
    }

    fn push_modifier(&self, modifier: Option<Modifier>, pieces: &mut Vec<Piece>) {
        if let Some(m) = modifier {
            match self.modifiers.get(&m) {
                Some(key) => pieces.push(Piece::key(key, false, false)),
                None => pieces.push(Piece::raw(m.to_char(), false)),
            }
        }
    }
}

/// One emitted key (or raw character) plus what the join step needs to
/// know about it.
#[derive(Debug)]
struct Piece {
    text: String,
    mapped: bool,
    opens_cluster: bool,
    consonant: bool,
}

impl Piece {
    fn key(text: &str, opens_cluster: bool, consonant: bool) -> Self {
        Self { text: text.to_string(), mapped: true, opens_cluster, consonant }
    }

    fn raw(ch: char, opens_cluster: bool) -> Self {
        Self { text: ch.to_string(), mapped: false, opens_cluster, consonant: false }
    }
}

/// Writes clusters back out as phonetic keys. Where two keys would
/// re-tokenize as a longer key, a virama (between conjunct members) or the
/// separator (anywhere else) is put between them.
pub fn compose_english(clusters: &[Cluster], keys: &PhoneticKeys, trie: &KeyTrie) -> String {
    let mut pieces = Vec::with_capacity(clusters.len() * 2);
    for cluster in clusters {
        keys.push_cluster(cluster, &mut pieces);
    }

    let mut out = String::with_capacity(pieces.len() * 2);
    for (i, piece) in pieces.iter().enumerate() {
        out.push_str(&piece.text);
        let Some(next) = pieces.get(i + 1) else {
            continue;
        };
        if !piece.mapped || !merges(piece, &pieces[i + 1..], trie) {
            continue;
        }
        if piece.consonant && next.consonant && !next.opens_cluster {
            out.push_str(PHONETIC_VIRAMA);
        } else {
            out.push_str(PHONETIC_SEPARATOR);
        }
    }
    out
}

fn merges(piece: &Piece, rest: &[Piece], trie: &KeyTrie) -> bool {
    let own = piece.text.chars().count();
    let mut window: Vec<char> = piece.text.chars().collect();
    for next in rest {
        if window.len() >= own + trie.max_key_len() {
            break;
        }
        window.extend(next.text.chars());
    }
    trie.longest_match(&window).is_some_and(|(len, _)| len > own)
}
