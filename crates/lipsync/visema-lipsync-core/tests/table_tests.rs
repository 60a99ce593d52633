use visema_lipsync_core::table::{get, lookup};
use visema_lipsync_core::MouthPose;

#[test]
fn unknown_symbols_resolve_to_neutral() {
    for sym in ["", "zz", "ʘ", "42", "phoneme", "\u{1F600}"] {
        assert_eq!(lookup(sym), MouthPose::NEUTRAL, "symbol {sym:?}");
        assert!(get(sym).is_none(), "symbol {sym:?} unexpectedly present");
    }
}

#[test]
fn silence_markers_are_neutral() {
    for sym in ["sil", "sp", "_"] {
        assert_eq!(lookup(sym), MouthPose::NEUTRAL, "marker {sym:?}");
        assert!(get(sym).is_some(), "marker {sym:?} must be a real entry");
    }
}

/// it should map the IPA digraph and the internal shorthand to identical vectors
#[test]
fn diphthong_aliases_are_identical() {
    let pairs = [
        ("aɪ", "I"),
        ("aʊ", "W"),
        ("ɔɪ", "Y"),
        ("eɪ", "A"),
        ("oʊ", "O"),
    ];
    for (ipa, alias) in pairs {
        assert_eq!(lookup(ipa), lookup(alias), "{ipa} vs {alias}");
        assert_ne!(lookup(ipa), MouthPose::NEUTRAL, "{ipa} must not be neutral");
    }
}

#[test]
fn consonant_classes_share_vectors() {
    assert_eq!(lookup("p"), lookup("b"));
    assert_eq!(lookup("t"), lookup("d"));
    assert_eq!(lookup("k"), lookup("ɡ"));
    assert_eq!(lookup("ʃ"), lookup("tʃ"));
    // Nasal m closes the lips without the plosive puff
    assert!(lookup("p").cheek_puff > 0.0);
    assert!(lookup("m").cheek_puff == 0.0);
}

#[test]
fn vowel_openness_ordering_is_sane() {
    // Open vowels open the mouth more than close vowels
    assert!(lookup("ɑ").open_y > lookup("i").open_y);
    assert!(lookup("ɑ").jaw_open > lookup("u").jaw_open);
    // Rounded vowels pucker, front vowels widen
    assert!(lookup("u").pucker_widen < 0.0);
    assert!(lookup("i").pucker_widen > 0.0);
}

#[test]
fn all_entries_stay_in_nominal_ranges() {
    let symbols = [
        "sil", "p", "b", "m", "f", "v", "θ", "ð", "t", "d", "n", "k", "g", "ŋ", "s", "z", "ʃ",
        "ʒ", "tʃ", "dʒ", "h", "l", "ɹ", "r", "w", "j", "ɑ", "a", "æ", "ɔ", "ʌ", "ə", "ɛ", "ɪ",
        "i", "ʊ", "u", "e", "o", "ɚ", "ɝ", "ɒ", "ɜ", "ɐ", "aɪ", "aʊ", "ɔɪ", "eɪ", "oʊ",
    ];
    for sym in symbols {
        let p = lookup(sym);
        assert!(get(sym).is_some(), "{sym} missing from table");
        for v in [p.open_y, p.jaw_open, p.shrug, p.funnel, p.cheek_puff] {
            assert!((0.0..=1.0).contains(&v), "{sym}: unit channel {v}");
        }
        for v in [p.form, p.pucker_widen, p.press_lip_open, p.mouth_x] {
            assert!((-1.0..=1.0).contains(&v), "{sym}: signed channel {v}");
        }
    }
}
