use crate::core::types::{Cluster, GraphemeCluster, Letter, NUKTA, VIRAMA};

/// Serializes clusters to logical-order Unicode Devanagari:
/// base, nukta?, (virama, member, nukta?)*, sign?, virama?, modifier?
pub fn compose_unicode(clusters: &[Cluster]) -> String {
    let mut out = String::with_capacity(clusters.len() * 3);
    for cluster in clusters {
        match cluster {
            Cluster::Grapheme(g) => push_grapheme(g, &mut out),
            Cluster::Mark(unit) => {
                if let Some(ch) = unit.unicode_char() {
                    out.push(ch);
                }
            }
            Cluster::Symbol(symbol) => out.push(symbol.to_char()),
            Cluster::Literal(ch) => out.push(*ch),
        }
    }
    out
}

fn push_letter(letter: &Letter, out: &mut String) {
    out.push(letter.ch);
    if letter.nukta {
        out.push(NUKTA);
    }
}

fn push_grapheme(g: &GraphemeCluster, out: &mut String) {
    if g.independent {
        if let Some(vowel) = g.vowel {
            out.push(vowel.independent());
        }
    } else {
        if let Some(base) = &g.base {
            push_letter(base, out);
        }
        for member in &g.conjuncts {
            out.push(VIRAMA);
            push_letter(member, out);
        }
        if let Some(sign) = g.vowel_sign().and_then(|v| v.sign()) {
            out.push(sign);
        }
        if g.halanta {
            out.push(VIRAMA);
        }
    }
    if let Some(modifier) = g.modifier {
        out.push(modifier.to_char());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Modifier, Symbol, Unit, Vowel};

    #[test]
    fn conjunct_is_virama_joined_in_logical_order() {
        let mut g = GraphemeCluster::consonant('स');
        g.conjuncts.push(Letter::plain('थ'));
        g.vowel = Some(Vowel::I);
        assert_eq!(compose_unicode(&[Cluster::Grapheme(g)]), "स्थि");
    }

    #[test]
    fn independent_vowel_is_never_consonant_plus_matra() {
        let mut g = GraphemeCluster::independent(Vowel::O);
        g.modifier = Some(Modifier::Anusvara);
        assert_eq!(compose_unicode(&[Cluster::Grapheme(g)]), "ओं");
    }

    #[test]
    fn nukta_follows_its_consonant() {
        let mut g = GraphemeCluster::consonant('ज');
        g.base = Some(Letter { ch: 'ज', nukta: true });
        g.vowel = Some(Vowel::Aa);
        assert_eq!(compose_unicode(&[Cluster::Grapheme(g)]), "\u{091C}\u{093C}\u{093E}");
    }

    #[test]
    fn halanta_and_passthrough() {
        let mut g = GraphemeCluster::consonant('न');
        g.halanta = true;
        let clusters = [
            Cluster::Grapheme(g),
            Cluster::Literal('!'),
            Cluster::Symbol(Symbol::Danda),
            Cluster::Mark(Unit::Sign(Vowel::E)),
        ];
        assert_eq!(compose_unicode(&clusters), "न्!।\u{0947}");
    }
}
