//! Playback transport for the podcast player.
//!
//! [`AudioTransport`] owns the [`PlaybackState`] for one audio source and
//! drives an underlying [`MediaElement`]. Progress is pulled from the media
//! element by [`AudioTransport::tick`], which the UI calls once per display
//! frame while [`AudioTransport::is_polling`] is true.

use thiserror::Error;

/// Volume restored on unmute when no earlier non-zero volume is known.
pub const FALLBACK_UNMUTE_VOLUME: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("no media element is mounted")]
    NoMediaElement,
    #[error("playback was rejected: {0}")]
    Rejected(String),
}

/// The operations the transport needs from the platform's media element.
pub trait MediaElement {
    /// Token handed back when playback starts; lets the platform report a
    /// late rejection (e.g. a pending promise).
    type PlayHandle;

    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);
    /// Total length in seconds; NaN or infinite until metadata is known.
    fn duration(&self) -> f64;
    fn play(&mut self) -> Result<Self::PlayHandle, PlaybackError>;
    fn pause(&mut self);
    fn apply_volume(&mut self, volume: f64, muted: bool);
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub is_ready: bool,
    pub duration: f64,
    pub current_time: f64,
    pub volume: f64,
    pub is_muted: bool,
    pub last_non_zero_volume: f64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            is_playing: false,
            is_ready: false,
            duration: 0.0,
            current_time: 0.0,
            volume: 1.0,
            is_muted: false,
            last_non_zero_volume: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportPhase {
    Unloaded,
    Ready,
    Playing,
    Paused,
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VolumeLevel {
    Muted,
    Low,
    High,
}

/// Outcome of [`AudioTransport::toggle_play_pause`].
#[derive(Debug)]
pub enum PlayToggle<H> {
    /// Not ready, closed, or the media element refused to start.
    Ignored,
    Paused,
    /// `session` identifies this play request when its handle settles later.
    Started { session: u32, handle: H },
}

pub struct AudioTransport<M: MediaElement> {
    media: M,
    state: PlaybackState,
    source: Option<String>,
    open: bool,
    has_played: bool,
    polling: bool,
    session: u32,
}

impl<M: MediaElement> AudioTransport<M> {
    pub fn new(media: M, open: bool) -> Self {
        Self {
            media,
            state: PlaybackState::default(),
            source: None,
            open,
            has_played: false,
            polling: false,
            session: 0,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    #[cfg(test)]
    pub fn media(&self) -> &M {
        &self.media
    }

    #[cfg(test)]
    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    /// True while the per-frame progress loop should keep rescheduling.
    pub fn is_polling(&self) -> bool {
        self.polling
    }

    /// Id of the latest play request; each start increments it.
    #[cfg(test)]
    pub fn session(&self) -> u32 {
        self.session
    }

    pub fn phase(&self) -> TransportPhase {
        if !self.open {
            TransportPhase::Closed
        } else if !self.state.is_ready {
            TransportPhase::Unloaded
        } else if self.state.is_playing {
            TransportPhase::Playing
        } else if self.has_played {
            TransportPhase::Paused
        } else {
            TransportPhase::Ready
        }
    }

    /// Switches to a new source. Playback stops and position, duration and
    /// readiness are reset; volume preferences carry over.
    pub fn load_source(&mut self, uri: &str) {
        if self.source.as_deref() == Some(uri) {
            return;
        }
        if self.state.is_playing {
            self.media.pause();
        }
        self.state = PlaybackState {
            volume: self.state.volume,
            is_muted: self.state.is_muted,
            last_non_zero_volume: self.state.last_non_zero_volume,
            ..PlaybackState::default()
        };
        self.source = Some(uri.to_string());
        self.has_played = false;
        self.polling = false;
        tracing::debug!(source = uri, "Audio source loaded");
    }

    /// Media reported its metadata. Only a finite duration makes the
    /// transport ready.
    pub fn metadata_loaded(&mut self) {
        let duration = self.media.duration();
        if !duration.is_finite() || duration < 0.0 {
            tracing::warn!(duration, "Ignoring non-finite media duration");
            return;
        }
        self.state.duration = duration;
        self.state.current_time = self.state.current_time.clamp(0.0, duration);
        self.state.is_ready = true;
        self.media
            .apply_volume(self.state.volume, self.state.is_muted);
        tracing::debug!(duration, "Audio metadata loaded");
    }

    pub fn toggle_play_pause(&mut self) -> PlayToggle<M::PlayHandle> {
        if !self.state.is_ready || !self.open {
            tracing::debug!(phase = ?self.phase(), "Play/pause ignored");
            return PlayToggle::Ignored;
        }

        if self.state.is_playing {
            self.pause_playback();
            return PlayToggle::Paused;
        }

        match self.media.play() {
            Ok(handle) => {
                self.state.is_playing = true;
                self.has_played = true;
                self.polling = true;
                self.session += 1;
                tracing::debug!(
                    session = self.session,
                    position = self.state.current_time,
                    "Playback started"
                );
                PlayToggle::Started {
                    session: self.session,
                    handle,
                }
            }
            Err(err) => {
                self.playback_failed(err);
                PlayToggle::Ignored
            }
        }
    }

    /// The platform rejected the play request `session` after it was issued.
    /// Only the latest request can stop playback; an older one was already
    /// superseded by a pause or a later play. Returns whether state changed.
    pub fn play_rejected(&mut self, session: u32, err: PlaybackError) -> bool {
        if session != self.session || !self.state.is_playing {
            tracing::debug!(session, current = self.session, error = %err, "Stale play rejection ignored");
            return false;
        }
        self.playback_failed(err);
        true
    }

    fn playback_failed(&mut self, err: PlaybackError) {
        tracing::error!(error = %err, "Playback could not start");
        if self.state.is_playing {
            self.media.pause();
        }
        self.state.is_playing = false;
        self.polling = false;
    }

    /// One progress poll. Returns whether another frame should be scheduled.
    pub fn tick(&mut self) -> bool {
        if !self.polling {
            return false;
        }
        if !self.state.is_playing || !self.open {
            self.polling = false;
            return false;
        }
        self.state.current_time = self.clamp_position(self.media.current_time());
        true
    }

    /// Media reached its end. The position stays where it stopped.
    pub fn ended(&mut self) {
        self.state.current_time = self.clamp_position(self.media.current_time());
        self.state.is_playing = false;
        self.polling = false;
        tracing::debug!(position = self.state.current_time, "Playback ended");
    }

    pub fn seek(&mut self, position: f64) {
        if !self.state.is_ready {
            tracing::debug!(position, "Seek ignored before metadata");
            return;
        }
        let position = self.clamp_position(position);
        self.media.set_current_time(position);
        self.state.current_time = position;
        tracing::debug!(position, "Seeked");
    }

    /// Relative seek; negative deltas rewind.
    pub fn skip(&mut self, delta_seconds: f64) {
        if !self.state.is_ready {
            tracing::debug!(delta_seconds, "Skip ignored before metadata");
            return;
        }
        let from = self.media.current_time();
        self.seek(from + delta_seconds);
    }

    pub fn set_volume(&mut self, volume: f64) {
        let volume = if volume.is_finite() { volume.clamp(0.0, 1.0) } else { 0.0 };
        self.state.volume = volume;
        self.state.is_muted = volume == 0.0;
        self.media.apply_volume(volume, self.state.is_muted);
    }

    pub fn toggle_mute(&mut self) {
        if self.state.is_muted {
            self.state.volume = if self.state.last_non_zero_volume > 0.0 {
                self.state.last_non_zero_volume
            } else {
                FALLBACK_UNMUTE_VOLUME
            };
            self.state.is_muted = false;
        } else {
            self.state.last_non_zero_volume = self.state.volume;
            self.state.volume = 0.0;
            self.state.is_muted = true;
        }
        self.media
            .apply_volume(self.state.volume, self.state.is_muted);
    }

    /// The player was hidden. Stops playback but keeps position and duration.
    pub fn close(&mut self) {
        if self.state.is_playing {
            self.media.pause();
        }
        self.state.is_playing = false;
        self.polling = false;
        self.open = false;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Volume actually audible, 0 while muted.
    pub fn effective_volume(&self) -> f64 {
        if self.state.is_muted {
            0.0
        } else {
            self.state.volume
        }
    }

    pub fn volume_level(&self) -> VolumeLevel {
        if self.state.is_muted || self.state.volume == 0.0 {
            VolumeLevel::Muted
        } else if self.state.volume < 0.5 {
            VolumeLevel::Low
        } else {
            VolumeLevel::High
        }
    }

    /// Elapsed share of the source in percent, for the progress fill.
    pub fn progress_percent(&self) -> f64 {
        if self.state.duration > 0.0 {
            self.state.current_time / self.state.duration * 100.0
        } else {
            0.0
        }
    }

    fn pause_playback(&mut self) {
        self.media.pause();
        self.state.current_time = self.clamp_position(self.media.current_time());
        self.state.is_playing = false;
        self.polling = false;
        tracing::debug!(position = self.state.current_time, "Playback paused");
    }

    fn clamp_position(&self, position: f64) -> f64 {
        if position.is_nan() {
            return 0.0;
        }
        position.clamp(0.0, self.state.duration)
    }
}

/// Renders seconds as `MM:SS`. NaN and zero render as `00:00`.
pub fn format_time(seconds: f64) -> String {
    if seconds.is_nan() || seconds <= 0.0 || seconds.is_infinite() {
        return "00:00".to_string();
    }
    let minutes = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{:02}:{:02}", minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Media element with a manually advanced clock.
    struct FakeMedia {
        clock: Rc<Cell<f64>>,
        position: f64,
        anchor: Option<f64>,
        duration: f64,
        reject_play: bool,
        volume: f64,
        muted: bool,
        pauses: u32,
    }

    impl FakeMedia {
        fn new(duration: f64, clock: Rc<Cell<f64>>) -> Self {
            Self {
                clock,
                position: 0.0,
                anchor: None,
                duration,
                reject_play: false,
                volume: 1.0,
                muted: false,
                pauses: 0,
            }
        }

        fn playing_position(&self) -> f64 {
            match self.anchor {
                Some(anchor) => (self.position + self.clock.get() - anchor).min(self.duration),
                None => self.position,
            }
        }
    }

    impl MediaElement for FakeMedia {
        type PlayHandle = ();

        fn current_time(&self) -> f64 {
            self.playing_position()
        }

        fn set_current_time(&mut self, seconds: f64) {
            self.position = seconds;
            if self.anchor.is_some() {
                self.anchor = Some(self.clock.get());
            }
        }

        fn duration(&self) -> f64 {
            self.duration
        }

        fn play(&mut self) -> Result<(), PlaybackError> {
            if self.reject_play {
                return Err(PlaybackError::Rejected("autoplay blocked".into()));
            }
            self.anchor = Some(self.clock.get());
            Ok(())
        }

        fn pause(&mut self) {
            self.position = self.playing_position();
            self.anchor = None;
            self.pauses += 1;
        }

        fn apply_volume(&mut self, volume: f64, muted: bool) {
            self.volume = volume;
            self.muted = muted;
        }
    }

    fn ready_transport(duration: f64) -> (AudioTransport<FakeMedia>, Rc<Cell<f64>>) {
        let clock = Rc::new(Cell::new(0.0));
        let mut transport = AudioTransport::new(FakeMedia::new(duration, clock.clone()), true);
        transport.load_source("/assets/podcast.mp3");
        transport.metadata_loaded();
        (transport, clock)
    }

    #[test]
    fn unloaded_until_metadata() {
        let clock = Rc::new(Cell::new(0.0));
        let mut transport = AudioTransport::new(FakeMedia::new(180.0, clock), true);
        assert_eq!(transport.phase(), TransportPhase::Unloaded);

        assert!(matches!(transport.toggle_play_pause(), PlayToggle::Ignored));
        transport.seek(30.0);
        transport.skip(10.0);
        assert_eq!(transport.state().current_time, 0.0);
        assert!(!transport.state().is_playing);

        transport.metadata_loaded();
        assert_eq!(transport.phase(), TransportPhase::Ready);
        assert_eq!(transport.state().duration, 180.0);
    }

    #[test]
    fn non_finite_duration_stays_unloaded() {
        let clock = Rc::new(Cell::new(0.0));
        let mut transport = AudioTransport::new(FakeMedia::new(f64::INFINITY, clock), true);
        transport.metadata_loaded();
        assert!(!transport.state().is_ready);
        assert_eq!(transport.phase(), TransportPhase::Unloaded);
    }

    #[test]
    fn seek_clamps_to_duration() {
        let (mut transport, _) = ready_transport(180.0);
        transport.seek(-5.0);
        assert_eq!(transport.state().current_time, 0.0);
        transport.seek(200.0);
        assert_eq!(transport.state().current_time, 180.0);
        transport.seek(90.0);
        assert_eq!(transport.state().current_time, 90.0);
        assert_eq!(transport.media().current_time(), 90.0);
    }

    #[test]
    fn skip_back_clamps_at_zero() {
        let (mut transport, _) = ready_transport(180.0);
        transport.seek(5.0);
        transport.skip(-10.0);
        assert_eq!(transport.state().current_time, 0.0);

        transport.seek(175.0);
        transport.skip(10.0);
        assert_eq!(transport.state().current_time, 180.0);
    }

    #[test]
    fn mute_round_trip_restores_volume() {
        let (mut transport, _) = ready_transport(180.0);
        transport.set_volume(0.8);

        transport.toggle_mute();
        assert_eq!(transport.state().volume, 0.0);
        assert!(transport.state().is_muted);
        assert_eq!(transport.effective_volume(), 0.0);
        assert!(transport.media().muted);

        transport.toggle_mute();
        assert_eq!(transport.state().volume, 0.8);
        assert!(!transport.state().is_muted);
        assert_eq!(transport.media().volume, 0.8);
    }

    #[test]
    fn slider_to_zero_keeps_last_non_zero_volume() {
        let (mut transport, _) = ready_transport(180.0);
        transport.set_volume(0.6);
        transport.toggle_mute();
        transport.toggle_mute();
        assert_eq!(transport.state().last_non_zero_volume, 0.6);

        transport.set_volume(0.0);
        assert!(transport.state().is_muted);
        assert_eq!(transport.state().last_non_zero_volume, 0.6);

        transport.toggle_mute();
        assert_eq!(transport.state().volume, 0.6);
        assert!(!transport.state().is_muted);
    }

    #[test]
    fn unmute_without_history_uses_fallback() {
        let (mut transport, _) = ready_transport(180.0);
        transport.toggle_mute();
        // Pretend the remembered volume was zero.
        transport.state.last_non_zero_volume = 0.0;
        transport.toggle_mute();
        assert_eq!(transport.state().volume, FALLBACK_UNMUTE_VOLUME);
    }

    #[test]
    fn positive_volume_clears_mute() {
        let (mut transport, _) = ready_transport(180.0);
        transport.toggle_mute();
        transport.set_volume(0.3);
        assert!(!transport.state().is_muted);
        assert_eq!(transport.volume_level(), VolumeLevel::Low);
        transport.set_volume(0.9);
        assert_eq!(transport.volume_level(), VolumeLevel::High);
        transport.set_volume(0.0);
        assert_eq!(transport.volume_level(), VolumeLevel::Muted);
    }

    #[test]
    fn close_stops_polling() {
        let (mut transport, clock) = ready_transport(180.0);
        assert!(matches!(transport.toggle_play_pause(), PlayToggle::Started { .. }));
        clock.set(12.0);
        assert!(transport.tick());
        assert_eq!(transport.state().current_time, 12.0);

        transport.close();
        assert!(!transport.state().is_playing);
        assert_eq!(transport.phase(), TransportPhase::Closed);

        clock.set(40.0);
        assert!(!transport.tick());
        assert_eq!(transport.state().current_time, 12.0);
        assert_eq!(transport.state().duration, 180.0);
        assert_eq!(transport.media().current_time(), 12.0);
    }

    #[test]
    fn closed_player_ignores_play_until_reopened() {
        let (mut transport, _) = ready_transport(180.0);
        transport.close();
        assert!(matches!(transport.toggle_play_pause(), PlayToggle::Ignored));
        transport.open();
        assert!(matches!(transport.toggle_play_pause(), PlayToggle::Started { .. }));
    }

    #[test]
    fn play_skip_pause_scenario() {
        let (mut transport, clock) = ready_transport(200.0);
        assert!(matches!(transport.toggle_play_pause(), PlayToggle::Started { .. }));
        assert_eq!(transport.phase(), TransportPhase::Playing);

        for second in 1..=50 {
            clock.set(second as f64);
            assert!(transport.tick());
        }
        assert!((transport.state().current_time - 50.0).abs() < 1e-9);

        transport.skip(10.0);
        assert!((transport.state().current_time - 60.0).abs() < 1e-9);

        assert!(matches!(transport.toggle_play_pause(), PlayToggle::Paused));
        assert_eq!(transport.phase(), TransportPhase::Paused);
        assert!(!transport.is_polling());

        clock.set(75.0);
        assert!(!transport.tick());
        assert!((transport.state().current_time - 60.0).abs() < 1e-9);
        assert_eq!(transport.session(), 1);
    }

    #[test]
    fn ended_keeps_final_position() {
        let (mut transport, clock) = ready_transport(30.0);
        transport.toggle_play_pause();
        clock.set(30.0);
        transport.ended();
        assert!(!transport.state().is_playing);
        assert_eq!(transport.state().current_time, 30.0);
        assert!(!transport.tick());
    }

    #[test]
    fn rejected_play_reconciles_to_paused() {
        let (mut transport, _) = ready_transport(180.0);
        transport.media_mut().reject_play = true;
        assert!(matches!(transport.toggle_play_pause(), PlayToggle::Ignored));
        assert!(!transport.state().is_playing);
        assert!(!transport.is_polling());
    }

    fn started_session(toggle: PlayToggle<()>) -> u32 {
        match toggle {
            PlayToggle::Started { session, .. } => session,
            other => panic!("expected playback to start, got {other:?}"),
        }
    }

    #[test]
    fn late_rejection_stops_loop() {
        let (mut transport, _) = ready_transport(180.0);
        let session = started_session(transport.toggle_play_pause());
        assert!(transport.play_rejected(session, PlaybackError::Rejected("NotAllowedError".into())));
        assert!(!transport.state().is_playing);
        assert!(!transport.tick());
        assert_eq!(transport.media().pauses, 1);
    }

    #[test]
    fn rejection_of_superseded_play_keeps_current_session() {
        let (mut transport, clock) = ready_transport(180.0);
        let first = started_session(transport.toggle_play_pause());
        assert!(matches!(transport.toggle_play_pause(), PlayToggle::Paused));
        let second = started_session(transport.toggle_play_pause());
        assert_ne!(first, second);

        // The first request settles late with AbortError after the replay.
        assert!(!transport.play_rejected(first, PlaybackError::Rejected("AbortError".into())));
        assert!(transport.state().is_playing);
        assert!(transport.is_polling());
        assert_eq!(transport.media().pauses, 1);

        clock.set(8.0);
        assert!(transport.tick());
        assert_eq!(transport.state().current_time, 8.0);
    }

    #[test]
    fn rejection_after_pause_is_ignored() {
        let (mut transport, _) = ready_transport(180.0);
        let session = started_session(transport.toggle_play_pause());
        transport.toggle_play_pause();
        assert!(!transport.play_rejected(session, PlaybackError::Rejected("AbortError".into())));
        assert_eq!(transport.phase(), TransportPhase::Paused);
        assert_eq!(transport.media().pauses, 1);
    }

    #[test]
    fn new_source_resets_position() {
        let (mut transport, _) = ready_transport(180.0);
        transport.set_volume(0.4);
        transport.seek(42.0);
        transport.load_source("/assets/episode-2.mp3");
        assert!(!transport.state().is_ready);
        assert_eq!(transport.state().current_time, 0.0);
        assert_eq!(transport.state().duration, 0.0);
        assert_eq!(transport.state().volume, 0.4);
    }

    #[test]
    fn progress_percent_tracks_position() {
        let (mut transport, _) = ready_transport(200.0);
        assert_eq!(transport.progress_percent(), 0.0);
        transport.seek(50.0);
        assert_eq!(transport.progress_percent(), 25.0);
    }

    #[test]
    fn formats_time() {
        assert_eq!(format_time(f64::NAN), "00:00");
        assert_eq!(format_time(0.0), "00:00");
        assert_eq!(format_time(5.4), "00:05");
        assert_eq!(format_time(65.0), "01:05");
        assert_eq!(format_time(600.99), "10:00");
    }
}
