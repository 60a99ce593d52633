//! Engine: session ownership and the per-tick pose loop.
//!
//! Lifecycle: `prepare` (generate + arm a sequence) -> `confirm_start`
//! (stamp the clock, go live) -> `tick` per frame -> `confirm_end`.
//! Out-of-order lifecycle calls are no-ops; provider failure keeps the
//! prior session and the mouth simply stays where it was or returns to
//! neutral. Not reentrant: hosts serialize tick calls, which the single
//! animation-frame callback already guarantees.

use hashbrown::HashSet;
use log::{debug, warn};

use crate::config::Config;
use crate::interp::{approx_eq, blend_pose, converge_toward, ease_in_out_quad};
use crate::outputs::EngineEvent;
use crate::pose::MouthPose;
use crate::session::{PlaybackSession, SessionStatus};
use crate::table;
use crate::timing::{PhonemeSequence, ProviderOptions, TimingProvider};

/// Which timing-accuracy source the next `prepare` uses.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TimingTier {
    Accurate,
    FallbackEstimation,
}

/// Boxed provider handle. Send + Sync so the engine can live inside host
/// resources; the engine itself never shares it across threads.
pub type BoxedProvider = Box<dyn TimingProvider + Send + Sync>;

/// Owns current/target pose, the playback session, and the provider handles.
pub struct LipSyncEngine {
    cfg: Config,
    current: MouthPose,
    target: MouthPose,
    paused: bool,
    enabled: bool,

    tier: TimingTier,
    active_provider: BoxedProvider,
    fallback_provider: Option<BoxedProvider>,

    /// Sequence generated by `prepare`, waiting for the start event.
    armed: Option<PhonemeSequence>,
    /// Live playback; present exactly while in the Playing state.
    session: Option<PlaybackSession>,

    events: Vec<EngineEvent>,
    /// Symbols already reported as missing from the table, to keep the
    /// diagnostic to one line per symbol.
    unknown_symbols: HashSet<String>,
}

impl LipSyncEngine {
    /// Create an engine around a constructor-injected accurate provider.
    pub fn new(cfg: Config, active_provider: BoxedProvider) -> Self {
        Self {
            cfg,
            current: MouthPose::NEUTRAL,
            target: MouthPose::NEUTRAL,
            paused: false,
            enabled: true,
            tier: TimingTier::Accurate,
            active_provider,
            fallback_provider: None,
            armed: None,
            session: None,
            events: Vec::new(),
            unknown_symbols: HashSet::new(),
        }
    }

    pub fn set_fallback_provider(&mut self, provider: BoxedProvider) {
        self.fallback_provider = Some(provider);
    }

    /// Use the accurate tier for the next `prepare`. Never alters a
    /// sequence that is already armed or playing.
    pub fn use_accurate_timing(&mut self) {
        self.tier = TimingTier::Accurate;
    }

    /// Use the fallback-estimation tier for the next `prepare`.
    pub fn use_fallback_estimation(&mut self) {
        self.tier = TimingTier::FallbackEstimation;
    }

    #[inline]
    pub fn tier(&self) -> TimingTier {
        self.tier
    }

    /// Generate timings for an utterance and arm them for the next start
    /// event. The latest successful prepare wins; failures leave any prior
    /// armed sequence and live session untouched.
    pub fn prepare(&mut self, text: &str, audio_duration: f32, options: &ProviderOptions) {
        if !self.enabled {
            debug!("prepare while disabled, ignoring");
            return;
        }
        let provider = self.select_provider();
        let name = provider.name().to_string();

        let raw = match provider.timed_phonemes(text, audio_duration, options) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("timing provider '{name}' failed during prepare: {err}");
                self.events.push(EngineEvent::ProviderFailed {
                    provider: name,
                    reason: err.to_string(),
                });
                return;
            }
        };

        let sequence = match PhonemeSequence::new(raw) {
            Ok(seq) => seq,
            Err(err) => {
                warn!("timing provider '{name}' returned an invalid sequence: {err}");
                self.events.push(EngineEvent::ProviderFailed {
                    provider: name,
                    reason: err.to_string(),
                });
                return;
            }
        };

        if sequence.is_empty() {
            // Nothing to animate for this utterance.
            debug!("prepare produced an empty sequence for '{text}'");
            self.armed = None;
            return;
        }

        self.events.push(EngineEvent::SessionArmed {
            provider: name,
            phonemes: sequence.len(),
        });
        self.armed = Some(sequence);
    }

    fn select_provider(&self) -> &dyn TimingProvider {
        match self.tier {
            TimingTier::Accurate => {
                if self.active_provider.is_available() {
                    self.active_provider.as_ref()
                } else if let Some(fallback) = &self.fallback_provider {
                    warn!(
                        "timing provider '{}' unavailable, using fallback '{}'",
                        self.active_provider.name(),
                        fallback.name()
                    );
                    fallback.as_ref()
                } else {
                    self.active_provider.as_ref()
                }
            }
            TimingTier::FallbackEstimation => self
                .fallback_provider
                .as_deref()
                .unwrap_or(self.active_provider.as_ref()),
        }
    }

    /// Audio playback actually began: promote the armed sequence to a live
    /// session and stamp the clock. No-op when nothing is armed (never
    /// fabricates a session).
    pub fn confirm_start(&mut self) {
        match self.armed.take() {
            Some(sequence) => {
                let duration = sequence.duration();
                self.session = Some(PlaybackSession::start(sequence));
                self.events.push(EngineEvent::PlaybackStarted { duration });
            }
            None => {
                debug!("confirm_start with no armed sequence, ignoring");
            }
        }
    }

    /// Audio playback ended: drop the live session. A sequence armed for
    /// the next utterance survives. No-op when nothing is playing.
    pub fn confirm_end(&mut self) {
        if self.session.take().is_some() {
            self.events.push(EngineEvent::PlaybackEnded);
        } else {
            debug!("confirm_end with no live session, ignoring");
        }
    }

    /// Freeze the output pose (visibility-driven power saving). The
    /// playback clock keeps its alignment with the audio, which continues
    /// regardless; only pose computation stops.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Turn the whole subsystem on or off. Disabling drops the live session
    /// and any armed sequence; the mouth returns to neutral and `prepare`
    /// calls are ignored until re-enabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled && self.enabled {
            self.armed = None;
            if self.session.take().is_some() {
                self.events.push(EngineEvent::PlaybackEnded);
            }
        }
        self.enabled = enabled;
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn status(&self) -> SessionStatus {
        if self.session.is_some() {
            SessionStatus::Playing
        } else if self.armed.is_some() {
            SessionStatus::Armed
        } else {
            SessionStatus::Idle
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    #[inline]
    pub fn current_pose(&self) -> &MouthPose {
        &self.current
    }

    /// Drain semantic events accumulated since the last call.
    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance one animation frame and return the smoothed pose.
    ///
    /// While paused the held pose is returned unchanged (no smoothing, no
    /// target recomputation). Otherwise the target is recomputed from the
    /// active phoneme window (neutral when idle) and the current pose
    /// converges toward it.
    pub fn tick(&mut self, dt: f32) -> &MouthPose {
        // Hostile dt (negative, NaN) degrades to a zero-length frame.
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        // The audio keeps playing while we are paused, so the clock always
        // advances; only pose computation stops.
        if let Some(session) = &mut self.session {
            session.clock.advance(dt);
        }
        if self.paused {
            return &self.current;
        }

        let playing = self.session.is_some();
        self.target = match &self.session {
            Some(session) => {
                let elapsed = session.clock.elapsed();
                Self::target_at(&session.phonemes, elapsed, &mut self.unknown_symbols)
            }
            None => MouthPose::NEUTRAL,
        };

        let rate = if playing {
            self.cfg.active_rate
        } else {
            self.cfg.return_rate
        };
        self.current = converge_toward(
            &self.current,
            &self.target,
            rate,
            dt,
            Some(self.cfg.cheek_decay_rate),
            self.cfg.neutral_threshold,
        );
        // Snap when within tolerance so settled channels stop drifting by
        // sub-epsilon amounts every frame.
        if approx_eq(&self.current, &self.target, self.cfg.pose_epsilon) {
            self.current = self.target;
        }
        &self.current
    }

    /// Target pose for an elapsed time within a sequence.
    ///
    /// Before the first phoneme there is no current window, so the target
    /// is neutral. Past the end the last phoneme's pose is emitted verbatim
    /// (no extrapolation). In between, the current pose eases toward the
    /// next phoneme's with t = ease((elapsed - cur.start) / (next.start -
    /// cur.start)); the denominator intentionally spans silence gaps. A
    /// zero-width denominator falls through to the verbatim pose.
    fn target_at(
        phonemes: &PhonemeSequence,
        elapsed: f32,
        unknown: &mut HashSet<String>,
    ) -> MouthPose {
        let window = phonemes.window_at(elapsed);
        let cur = match window.current {
            Some(cur) => cur,
            None => return MouthPose::NEUTRAL,
        };
        let cur_pose = Self::lookup_reported(&cur.symbol, unknown);
        let next = match window.next {
            Some(next) => next,
            None => return cur_pose,
        };
        let denom = next.start - cur.start;
        if denom <= f32::EPSILON {
            return cur_pose;
        }
        let next_pose = Self::lookup_reported(&next.symbol, unknown);
        let t = ease_in_out_quad((elapsed - cur.start) / denom);
        blend_pose(&cur_pose, &next_pose, t)
    }

    fn lookup_reported(symbol: &str, unknown: &mut HashSet<String>) -> MouthPose {
        match table::get(symbol) {
            Some(pose) => *pose,
            None => {
                if unknown.insert(symbol.to_string()) {
                    debug!("phoneme '{symbol}' not in pose table, using neutral");
                }
                MouthPose::NEUTRAL
            }
        }
    }
}

impl std::fmt::Debug for LipSyncEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LipSyncEngine")
            .field("status", &self.status())
            .field("paused", &self.paused)
            .field("enabled", &self.enabled)
            .field("tier", &self.tier)
            .field("current", &self.current)
            .field("target", &self.target)
            .finish()
    }
}
