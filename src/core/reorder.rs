//! Visual-order serializer for the Preeti legacy font.
//!
//! Within a cluster the glyph order is: reph, pre-base sign, consonant
//! glyphs (ligature, half-form or full + virama for non-final members),
//! then post/above/below signs, then the modifier.

use crate::core::tables::{
    preeti_consonant, preeti_modifier, preeti_sign, preeti_special, preeti_symbol, preeti_vowel,
    PREETI_LIGATURES, PREETI_RAKAR, PREETI_REPH, PREETI_VIRAMA,
};
use crate::core::types::{Cluster, GraphemeCluster, Letter, PositionClass, Unit, NUKTA, RA};

pub fn reorder_preeti(clusters: &[Cluster]) -> String {
    let mut out = String::with_capacity(clusters.len() * 3);
    for cluster in clusters {
        match cluster {
            Cluster::Grapheme(g) => push_grapheme(g, &mut out),
            Cluster::Mark(unit) => push_mark(*unit, &mut out),
            Cluster::Symbol(symbol) => match preeti_symbol(*symbol) {
                Some(glyph) => out.push_str(glyph),
                None => out.push(symbol.to_char()),
            },
            Cluster::Literal(ch) => out.push(*ch),
        }
    }
    out
}

fn push_mark(unit: Unit, out: &mut String) {
    let glyph = match unit {
        Unit::Virama => Some(PREETI_VIRAMA),
        Unit::Sign(v) => preeti_sign(v),
        Unit::Modifier(m) => preeti_modifier(m),
        _ => None,
    };
    match glyph {
        Some(glyph) => out.push_str(glyph),
        None => {
            if let Some(ch) = unit.unicode_char() {
                out.push(ch);
            }
        }
    }
}

fn push_grapheme(g: &GraphemeCluster, out: &mut String) {
    if g.independent {
        if let Some(vowel) = g.vowel {
            match preeti_vowel(vowel) {
                Some(glyph) => out.push_str(glyph),
                None => out.push(vowel.independent()),
            }
        }
        push_modifier(g, out);
        return;
    }

    let mut letters: Vec<Letter> = g.letters().copied().collect();
    if letters.len() >= 2 && letters[0] == Letter::plain(RA) {
        out.push_str(PREETI_REPH);
        letters.remove(0);
    }

    let sign = g.vowel_sign();
    let pre_base = sign.filter(|v| v.position() == PositionClass::PreBase);
    if let Some(glyph) = pre_base.and_then(preeti_sign) {
        out.push_str(glyph);
    }

    let special = match (letters.as_slice(), sign) {
        ([only], Some(v)) if !only.nukta && !g.halanta => preeti_special(only.ch, v),
        _ => None,
    };
    match special {
        Some(glyph) => out.push_str(glyph),
        None => {
            push_chain(&letters, out);
            if g.halanta {
                out.push_str(PREETI_VIRAMA);
            }
            if let Some(v) = sign.filter(|_| pre_base.is_none()) {
                match preeti_sign(v) {
                    Some(glyph) => out.push_str(glyph),
                    None => out.extend(v.sign()),
                }
            }
        }
    }
    push_modifier(g, out);
}

fn push_modifier(g: &GraphemeCluster, out: &mut String) {
    if let Some(m) = g.modifier {
        match preeti_modifier(m) {
            Some(glyph) => out.push_str(glyph),
            None => out.push(m.to_char()),
        }
    }
}

fn ligature_at(letters: &[Letter]) -> Option<(usize, &'static str, Option<&'static str>)> {
    PREETI_LIGATURES.iter().find_map(|&(chain, full, half)| {
        let matches = letters.len() >= chain.len()
            && letters.iter().zip(chain).all(|(l, c)| !l.nukta && l.ch == *c);
        matches.then_some((chain.len(), full, half))
    })
}

/// Consonant glyphs in visual order. Non-final members take their
/// half-form; without one they fall back to full glyph + visible virama.
fn push_chain(letters: &[Letter], out: &mut String) {
    let n = letters.len();
    let mut i = 0;
    while i < n {
        if let Some((len, full, half)) = ligature_at(&letters[i..]) {
            let last = i + len == n;
            match (last, half) {
                (true, _) => out.push_str(full),
                (false, Some(half)) => out.push_str(half),
                (false, None) => {
                    out.push_str(full);
                    out.push_str(PREETI_VIRAMA);
                }
            }
            i += len;
            continue;
        }
        let letter = letters[i];
        if i + 2 == n && letters[n - 1] == Letter::plain(RA) && letter.ch != RA {
            push_letter(letter, true, out);
            out.push_str(PREETI_RAKAR);
            break;
        }
        push_letter(letter, i + 1 == n, out);
        i += 1;
    }
}

fn push_letter(letter: Letter, last: bool, out: &mut String) {
    let (full, half) = match preeti_consonant(letter.ch) {
        Some(forms) => forms,
        None => {
            out.push(letter.ch);
            if letter.nukta {
                out.push(NUKTA);
            }
            if !last {
                out.push_str(PREETI_VIRAMA);
            }
            return;
        }
    };
    match half.filter(|_| !last && !letter.nukta) {
        Some(half) => out.push_str(half),
        None => {
            out.push_str(full);
            if letter.nukta {
                out.push(NUKTA);
            }
            if !last {
                out.push_str(PREETI_VIRAMA);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assembler::{assemble, JoinPolicy};
    use crate::core::tables::MappingTables;
    use crate::core::tokenizer::tokenize;

    fn preeti(text: &str) -> String {
        let tables = MappingTables::build();
        reorder_preeti(&assemble(&tokenize(text, &tables.unicode), JoinPolicy::Explicit))
    }

    #[test]
    fn pre_base_sign_goes_first() {
        assert_eq!(preeti("कि"), "ls");
        assert_eq!(preeti("की"), "sL");
    }

    #[test]
    fn pre_base_sign_precedes_whole_conjunct() {
        assert_eq!(preeti("स्थिति"), "l:ylt");
    }

    #[test]
    fn common_words() {
        assert_eq!(preeti("नेपाल"), "g]kfn");
        assert_eq!(preeti("काठमाडौं"), "sf7df8f}+");
    }

    #[test]
    fn half_form_and_fallback() {
        assert_eq!(preeti("क्त"), "St");
        // no half-form for ट
        assert_eq!(preeti("ट्ट"), "6\\6");
    }

    #[test]
    fn ligatures_win_over_half_forms() {
        assert_eq!(preeti("क्ष"), "If");
        assert_eq!(preeti("क्ष्म"), "Id");
        assert_eq!(preeti("ज्ञान"), "1fg");
        assert_eq!(preeti("पत्र"), "kq");
    }

    #[test]
    fn reph_leads_the_cluster() {
        assert_eq!(preeti("र्क"), "{s");
        assert_eq!(preeti("र्कि"), "{ls");
        assert_eq!(preeti("कार्य"), "sf{o");
    }

    #[test]
    fn rakar_follows_consonant() {
        assert_eq!(preeti("प्र"), "k|");
        assert_eq!(preeti("क्रि"), "ls|");
    }

    #[test]
    fn ra_with_u_is_one_glyph() {
        assert_eq!(preeti("रु"), "?");
        assert_eq!(preeti("रू"), "¿");
        assert_eq!(preeti("रि"), "l/");
    }

    #[test]
    fn modifiers_follow_signs() {
        assert_eq!(preeti("कें"), "s]+");
        assert_eq!(preeti("दुःख"), "b'Mv");
    }

    #[test]
    fn independent_vowels_and_symbols() {
        assert_eq!(preeti("आमा"), "cfdf");
        assert_eq!(preeti("२०८०।"), "@)*).");
    }

    #[test]
    fn halanta_keeps_visible_virama() {
        assert_eq!(preeti("गर्छन्"), "u{5g\\");
    }

    #[test]
    fn unmapped_passes_through() {
        assert_eq!(preeti("abc 12"), "abc 12");
    }
}
