use visema_lipsync_core::{EvenSpacingEstimator, LipSyncError, ProviderOptions, TimingProvider};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

#[test]
fn estimator_is_always_available() {
    assert!(EvenSpacingEstimator.is_available());
    assert_eq!(EvenSpacingEstimator.name(), "even-spacing-estimator");
}

#[test]
fn slots_are_contiguous_and_cover_the_duration() {
    let phonemes = EvenSpacingEstimator
        .timed_phonemes("hello", 1.0, &ProviderOptions::default())
        .unwrap();
    assert!(!phonemes.is_empty());

    approx(phonemes[0].start, 0.0, 1e-6);
    approx(phonemes.last().unwrap().end, 1.0, 1e-4);
    for pair in phonemes.windows(2) {
        approx(pair[0].end, pair[1].start, 1e-6);
        assert!(pair[0].start < pair[0].end);
    }
}

#[test]
fn digraphs_become_single_slots() {
    let phonemes = EvenSpacingEstimator
        .timed_phonemes("sh", 0.5, &ProviderOptions::default())
        .unwrap();
    assert_eq!(phonemes.len(), 1);
    assert_eq!(phonemes[0].symbol, "ʃ");
}

#[test]
fn whitespace_becomes_collapsed_silence() {
    let phonemes = EvenSpacingEstimator
        .timed_phonemes("a   b", 1.0, &ProviderOptions::default())
        .unwrap();
    let silences = phonemes.iter().filter(|p| p.symbol == "sil").count();
    assert_eq!(silences, 1, "runs of whitespace collapse to one marker");
}

#[test]
fn empty_or_symbolic_text_yields_no_phonemes() {
    for text in ["", "!!!", "…"] {
        let phonemes = EvenSpacingEstimator
            .timed_phonemes(text, 1.0, &ProviderOptions::default())
            .unwrap();
        assert!(phonemes.is_empty(), "text {text:?}");
    }
}

#[test]
fn non_positive_duration_is_rejected() {
    for bad in [0.0, -1.0, f32::NAN] {
        let err = EvenSpacingEstimator
            .timed_phonemes("hi", bad, &ProviderOptions::default())
            .unwrap_err();
        assert!(matches!(err, LipSyncError::InvalidTime { .. }));
    }
}
