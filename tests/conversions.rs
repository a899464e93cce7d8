//! End-to-end checks of the four public conversions.

use convert_core::{
    english_to_unicode, preeti_to_unicode, unicode_to_english, unicode_to_preeti, Converter,
    Script,
};
use proptest::prelude::*;

const VIRAMA: char = '\u{094D}';

const CONSONANTS: &[char] = &[
    'क', 'ख', 'ग', 'घ', 'ङ', 'च', 'छ', 'ज', 'झ', 'ञ', 'ट', 'ठ', 'ड', 'ढ', 'ण', 'त', 'थ', 'द', 'ध',
    'न', 'प', 'फ', 'ब', 'भ', 'म', 'य', 'र', 'ल', 'व', 'श', 'ष', 'स', 'ह',
];

const SIGNS: &[char] = &[
    '\u{093E}', '\u{093F}', '\u{0940}', '\u{0941}', '\u{0942}', '\u{0943}', '\u{0947}', '\u{0948}',
    '\u{094B}', '\u{094C}',
];

// Nukta forms and ळ. Preeti has no glyphs for these.
const EXTRA_LETTERS: &[&str] = &[
    "क\u{093C}", "ख\u{093C}", "ग\u{093C}", "ज\u{093C}", "ड\u{093C}", "ढ\u{093C}", "फ\u{093C}",
    "य\u{093C}", "ळ",
];

const INDEPENDENT: &[char] = &['अ', 'आ', 'इ', 'ई', 'उ', 'ऊ', 'ऋ', 'ए', 'ऐ', 'ओ', 'औ'];

const MODIFIERS: &[char] = &['\u{0902}', '\u{0901}', '\u{0903}'];

#[test]
fn phonetic_sentences() {
    assert_eq!(english_to_unicode("mero naam raam ho"), "मेरो नाम राम हो");
    assert_eq!(english_to_unicode("haamro desh nepaal ho |"), "हाम्रो देश नेपाल हो ।");
    assert_eq!(english_to_unicode("kaaThmaaDauM"), "काठ्माडौं");
}

#[test]
fn case_sensitive_pairs() {
    let pairs = [("Ta", "ta"), ("Tha", "tha"), ("Da", "da"), ("Dha", "dha"), ("Na", "na")];
    for (upper, lower) in pairs {
        assert_ne!(english_to_unicode(upper), english_to_unicode(lower), "{upper} vs {lower}");
    }
}

#[test]
fn preeti_documents() {
    let unicode = "नेपाल सरकार, २०८० साल।";
    let legacy = unicode_to_preeti(unicode);
    assert_eq!(legacy, "g]kfn ;/sf/, @)*) ;fn.");
    assert_eq!(preeti_to_unicode(&legacy), unicode);
}

#[test]
fn pre_base_sign_is_moved_in_both_directions() {
    assert_eq!(unicode_to_preeti("किताब"), "lstfa");
    assert_eq!(preeti_to_unicode("lstfa"), "किताब");
}

#[test]
fn chained_conversions_go_through_unicode() {
    let converter = Converter::global();
    let preeti = converter.convert("kitaab", Script::English, Script::Preeti);
    assert_eq!(preeti, "lstfa");
    assert_eq!(converter.convert(&preeti, Script::Preeti, Script::English), "kitaaba");
}

#[test]
fn romanized_output_reads_back() {
    for word in ["सिंहदरबार", "पुस्तक", "छ", "गुरुङ", "ऋषि", "कृषि", "पढ\u{093C}ाइ", "बाळ"] {
        let roman = unicode_to_english(word);
        assert_eq!(english_to_unicode(&roman), word, "via {roman:?}");
    }
}

fn arb_cluster() -> impl Strategy<Value = String> {
    (
        prop::sample::select(CONSONANTS),
        prop::option::of(prop::sample::select(CONSONANTS)),
        prop::option::of(prop::sample::select(SIGNS)),
        prop::option::of(prop::sample::select(MODIFIERS)),
    )
        .prop_map(|(base, member, sign, modifier)| {
            let mut s = String::new();
            s.push(base);
            if let Some(member) = member {
                s.push(VIRAMA);
                s.push(member);
            }
            s.extend(sign);
            s.extend(modifier);
            s
        })
}

fn arb_letter() -> impl Strategy<Value = String> {
    prop_oneof![
        5 => prop::sample::select(CONSONANTS).prop_map(String::from),
        1 => prop::sample::select(EXTRA_LETTERS).prop_map(String::from),
    ]
}

fn arb_english_cluster() -> impl Strategy<Value = String> {
    (
        arb_letter(),
        prop::option::of(arb_letter()),
        prop::option::of(prop::sample::select(SIGNS)),
        prop::option::of(prop::sample::select(MODIFIERS)),
    )
        .prop_map(|(base, member, sign, modifier)| {
            let mut s = base;
            if let Some(member) = member {
                s.push(VIRAMA);
                s.push_str(&member);
            }
            s.extend(sign);
            s.extend(modifier);
            s
        })
}

fn arb_vowel_cluster() -> impl Strategy<Value = String> {
    (prop::sample::select(INDEPENDENT), prop::option::of(prop::sample::select(MODIFIERS))).prop_map(
        |(vowel, modifier)| {
            let mut s = String::new();
            s.push(vowel);
            s.extend(modifier);
            s
        },
    )
}

fn arb_word() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![4 => arb_english_cluster(), 1 => arb_vowel_cluster()], 1..6)
        .prop_map(|clusters| clusters.concat())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn conversions_are_total(s in any::<String>()) {
        let _ = english_to_unicode(&s);
        let _ = unicode_to_english(&s);
        let _ = unicode_to_preeti(&s);
        let _ = preeti_to_unicode(&s);
    }

    #[test]
    fn unmapped_text_passes_through(s in "[\u{4E00}-\u{4FFF} \n]{0,24}") {
        prop_assert_eq!(english_to_unicode(&s), s.clone());
        prop_assert_eq!(unicode_to_english(&s), s.clone());
        prop_assert_eq!(unicode_to_preeti(&s), s.clone());
        prop_assert_eq!(preeti_to_unicode(&s), s.clone());
    }

    #[test]
    fn preeti_round_trip(
        words in prop::collection::vec(prop::collection::vec(arb_cluster(), 1..5), 1..4),
    ) {
        let text = words.iter().map(|w| w.concat()).collect::<Vec<_>>().join(" ");
        let legacy = unicode_to_preeti(&text);
        prop_assert_eq!(preeti_to_unicode(&legacy), text, "via {:?}", legacy);
    }

    #[test]
    fn english_round_trip(words in prop::collection::vec(arb_word(), 1..4)) {
        let text = words.join(" ");
        let roman = unicode_to_english(&text);
        prop_assert_eq!(english_to_unicode(&roman), text, "via {:?}", roman);
    }
}
