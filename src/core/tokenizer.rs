use crate::core::trie::KeyTrie;
use crate::core::types::{PositionClass, Unit};

/// Greedy maximal-munch scan. Characters with no table entry become
/// `Unit::Literal`, so every input tokenizes and the scan always advances.
pub fn tokenize(input: &str, trie: &KeyTrie) -> Vec<Unit> {
    let chars: Vec<char> = input.chars().collect();
    let mut units = Vec::with_capacity(chars.len());
    let mut pos = 0;
    while pos < chars.len() {
        match trie.longest_match(&chars[pos..]) {
            Some((len, entry)) => {
                units.extend_from_slice(&entry.units);
                pos += len;
            }
            None => {
                units.push(Unit::Literal(chars[pos]));
                pos += 1;
            }
        }
    }
    units
}

/// Tokenizes visual-order Preeti text and moves each pre-base sign back
/// behind the consonant group it is drawn in front of.
pub fn tokenize_preeti(input: &str, trie: &KeyTrie) -> Vec<Unit> {
    swap_pre_base(tokenize(input, trie))
}

fn swap_pre_base(units: Vec<Unit>) -> Vec<Unit> {
    let mut out = Vec::with_capacity(units.len());
    let mut i = 0;
    while i < units.len() {
        let unit = units[i];
        if matches!(unit, Unit::Sign(_)) && unit.position() == PositionClass::PreBase {
            if let Some(end) = consonant_group_end(&units, i + 1) {
                out.extend_from_slice(&units[i + 1..end]);
                out.push(unit);
                i = end;
                continue;
            }
        }
        out.push(unit);
        i += 1;
    }
    out
}

/// End (exclusive) of the consonant group starting at `start`: a consonant
/// followed by any nukta and virama-joined consonants.
fn consonant_group_end(units: &[Unit], start: usize) -> Option<usize> {
    if !matches!(units.get(start), Some(Unit::Consonant(_))) {
        return None;
    }
    let mut j = start + 1;
    loop {
        match units.get(j) {
            Some(Unit::Nukta) => j += 1,
            Some(Unit::Virama) if matches!(units.get(j + 1), Some(Unit::Consonant(_))) => j += 2,
            _ => break,
        }
    }
    Some(j)
}
