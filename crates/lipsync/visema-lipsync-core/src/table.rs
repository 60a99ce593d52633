//! Static phoneme -> mouth pose table.
//!
//! Symbols are the labels the forced aligner emits: IPA letters, a few
//! multi-character clusters (affricates, diphthongs), and short internal
//! codes (silence, single-letter diphthong shorthand). Lookup is total:
//! unknown symbols resolve to the neutral pose rather than fail. Some
//! symbols are deliberate aliases of each other and map to identical
//! vectors.
//!
//! Channel order in `pose(..)`:
//!   open_y, jaw_open, form, shrug, funnel, pucker_widen,
//!   press_lip_open, mouth_x, cheek_puff

use hashbrown::HashMap;
use once_cell::sync::Lazy;

use crate::pose::MouthPose;

#[allow(clippy::too_many_arguments)]
const fn pose(
    open_y: f32,
    jaw_open: f32,
    form: f32,
    shrug: f32,
    funnel: f32,
    pucker_widen: f32,
    press_lip_open: f32,
    mouth_x: f32,
    cheek_puff: f32,
) -> MouthPose {
    MouthPose {
        open_y,
        jaw_open,
        form,
        shrug,
        funnel,
        pucker_widen,
        press_lip_open,
        mouth_x,
        cheek_puff,
    }
}

// Consonant classes. Bilabial plosives carry a cheek puff that the engine
// collapses quickly on release; nasals close the lips without one.
const SILENCE: MouthPose = MouthPose::NEUTRAL;
const BILABIAL_PLOSIVE: MouthPose = pose(0.0, 0.05, 0.0, 0.0, 0.0, 0.0, -0.6, 0.0, 0.35);
const BILABIAL_NASAL: MouthPose = pose(0.0, 0.05, 0.0, 0.0, 0.0, 0.0, -0.5, 0.0, 0.0);
const LABIODENTAL: MouthPose = pose(0.12, 0.1, 0.0, 0.3, 0.0, 0.1, 0.5, 0.0, 0.0);
const DENTAL: MouthPose = pose(0.2, 0.15, 0.0, 0.1, 0.0, 0.1, 0.4, 0.0, 0.0);
const ALVEOLAR: MouthPose = pose(0.25, 0.2, 0.0, 0.0, 0.0, 0.15, 0.2, 0.0, 0.0);
const VELAR: MouthPose = pose(0.3, 0.25, 0.0, 0.0, 0.05, 0.0, 0.0, 0.0, 0.0);
const POSTALVEOLAR: MouthPose = pose(0.25, 0.2, 0.0, 0.1, 0.55, -0.4, 0.1, 0.0, 0.0);
const SIBILANT: MouthPose = pose(0.15, 0.1, 0.1, 0.0, 0.0, 0.3, 0.35, 0.0, 0.0);
const RHOTIC: MouthPose = pose(0.2, 0.15, 0.0, 0.0, 0.4, -0.3, 0.0, 0.0, 0.0);
const LABIOVELAR: MouthPose = pose(0.15, 0.1, 0.0, 0.0, 0.7, -0.7, 0.0, 0.0, 0.0);
const PALATAL: MouthPose = pose(0.2, 0.15, 0.2, 0.0, 0.0, 0.5, 0.1, 0.0, 0.0);
const GLOTTAL: MouthPose = pose(0.3, 0.2, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
const LATERAL: MouthPose = pose(0.3, 0.2, 0.0, 0.0, 0.0, 0.1, 0.25, 0.0, 0.0);

// Monophthongs.
const OPEN_BACK: MouthPose = pose(0.9, 0.8, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
const OPEN_FRONT: MouthPose = pose(0.85, 0.75, 0.1, 0.0, 0.0, 0.15, 0.0, 0.0, 0.0);
const NEAR_OPEN_FRONT: MouthPose = pose(0.7, 0.6, 0.1, 0.0, 0.0, 0.4, 0.0, 0.0, 0.0);
const OPEN_MID_BACK: MouthPose = pose(0.65, 0.5, 0.0, 0.0, 0.4, -0.4, 0.0, 0.0, 0.0);
const OPEN_MID_CENTRAL: MouthPose = pose(0.5, 0.4, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
const SCHWA: MouthPose = pose(0.35, 0.25, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
const OPEN_MID_FRONT: MouthPose = pose(0.5, 0.35, 0.1, 0.0, 0.0, 0.3, 0.0, 0.0, 0.0);
const NEAR_CLOSE_FRONT: MouthPose = pose(0.35, 0.2, 0.15, 0.0, 0.0, 0.4, 0.0, 0.0, 0.0);
const CLOSE_FRONT: MouthPose = pose(0.3, 0.15, 0.3, 0.0, 0.0, 0.8, 0.1, 0.0, 0.0);
const NEAR_CLOSE_BACK: MouthPose = pose(0.3, 0.2, 0.0, 0.0, 0.5, -0.5, 0.0, 0.0, 0.0);
const CLOSE_BACK: MouthPose = pose(0.25, 0.15, 0.0, 0.0, 0.8, -0.8, 0.0, 0.0, 0.0);
const CLOSE_MID_FRONT: MouthPose = pose(0.45, 0.3, 0.15, 0.0, 0.0, 0.4, 0.0, 0.0, 0.0);
const CLOSE_MID_BACK: MouthPose = pose(0.5, 0.35, 0.0, 0.0, 0.6, -0.5, 0.0, 0.0, 0.0);
const MID_CENTRAL_RHOTIC: MouthPose = pose(0.35, 0.25, 0.0, 0.0, 0.35, -0.25, 0.0, 0.0, 0.0);

// Diphthongs hold the nucleus shape; the offglide is carried by timing,
// not by a separate table entry.
const DIPH_AI: MouthPose = pose(0.7, 0.6, 0.1, 0.0, 0.0, 0.2, 0.0, 0.0, 0.0);
const DIPH_AU: MouthPose = pose(0.7, 0.6, 0.0, 0.0, 0.4, -0.4, 0.0, 0.0, 0.0);
const DIPH_OI: MouthPose = pose(0.55, 0.45, 0.1, 0.0, 0.35, -0.2, 0.0, 0.0, 0.0);
const DIPH_EI: MouthPose = pose(0.5, 0.35, 0.2, 0.0, 0.0, 0.45, 0.0, 0.0, 0.0);
const DIPH_OU: MouthPose = pose(0.5, 0.35, 0.0, 0.0, 0.55, -0.45, 0.0, 0.0, 0.0);

static TABLE: Lazy<HashMap<&'static str, MouthPose>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // Silence markers.
    m.insert("sil", SILENCE);
    m.insert("sp", SILENCE);
    m.insert("_", SILENCE);

    // Plosives and nasals.
    m.insert("p", BILABIAL_PLOSIVE);
    m.insert("b", BILABIAL_PLOSIVE);
    m.insert("m", BILABIAL_NASAL);
    m.insert("t", ALVEOLAR);
    m.insert("d", ALVEOLAR);
    m.insert("n", ALVEOLAR);
    m.insert("k", VELAR);
    m.insert("g", VELAR);
    m.insert("ɡ", VELAR); // IPA script g, distinct codepoint
    m.insert("ŋ", VELAR);

    // Fricatives and affricates.
    m.insert("f", LABIODENTAL);
    m.insert("v", LABIODENTAL);
    m.insert("θ", DENTAL);
    m.insert("ð", DENTAL);
    m.insert("s", SIBILANT);
    m.insert("z", SIBILANT);
    m.insert("ʃ", POSTALVEOLAR);
    m.insert("ʒ", POSTALVEOLAR);
    m.insert("tʃ", POSTALVEOLAR);
    m.insert("dʒ", POSTALVEOLAR);
    m.insert("h", GLOTTAL);

    // Approximants and laterals.
    m.insert("l", LATERAL);
    m.insert("ɹ", RHOTIC);
    m.insert("r", RHOTIC);
    m.insert("w", LABIOVELAR);
    m.insert("j", PALATAL);

    // Monophthongs.
    m.insert("ɑ", OPEN_BACK);
    m.insert("a", OPEN_FRONT);
    m.insert("æ", NEAR_OPEN_FRONT);
    m.insert("ɔ", OPEN_MID_BACK);
    m.insert("ʌ", OPEN_MID_CENTRAL);
    m.insert("ə", SCHWA);
    m.insert("ɛ", OPEN_MID_FRONT);
    m.insert("ɪ", NEAR_CLOSE_FRONT);
    m.insert("i", CLOSE_FRONT);
    m.insert("ʊ", NEAR_CLOSE_BACK);
    m.insert("u", CLOSE_BACK);
    m.insert("e", CLOSE_MID_FRONT);
    m.insert("o", CLOSE_MID_BACK);
    m.insert("ɚ", MID_CENTRAL_RHOTIC);
    m.insert("ɝ", MID_CENTRAL_RHOTIC);

    // Regional variants.
    m.insert("ɒ", OPEN_MID_BACK); // British "lot"
    m.insert("ɜ", MID_CENTRAL_RHOTIC); // non-rhotic "nurse"
    m.insert("ɐ", OPEN_MID_CENTRAL);

    // Diphthongs: IPA digraph and single-letter internal shorthand alias
    // to identical vectors.
    m.insert("aɪ", DIPH_AI);
    m.insert("I", DIPH_AI);
    m.insert("aʊ", DIPH_AU);
    m.insert("W", DIPH_AU);
    m.insert("ɔɪ", DIPH_OI);
    m.insert("Y", DIPH_OI);
    m.insert("eɪ", DIPH_EI);
    m.insert("A", DIPH_EI);
    m.insert("oʊ", DIPH_OU);
    m.insert("O", DIPH_OU);

    m
});

/// Table lookup without the neutral fallback; `None` signals an unknown
/// symbol so the caller can emit a diagnostic.
#[inline]
pub fn get(symbol: &str) -> Option<&'static MouthPose> {
    TABLE.get(symbol)
}

/// Total lookup: unknown symbols resolve to the neutral pose.
#[inline]
pub fn lookup(symbol: &str) -> MouthPose {
    get(symbol).copied().unwrap_or(MouthPose::NEUTRAL)
}
