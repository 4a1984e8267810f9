//! Broadcast controller - the live-feed lifecycle
//!
//! Manages a single logical "is the owner currently live" state: local
//! camera/microphone capture acquired through the [`CaptureDevice`] seam,
//! or an externally hosted stream resolved through the media resolver.
//!
//! Hardware handles are released synchronously and explicitly: switching
//! away from browser capture or stopping the broadcast stops every held
//! track immediately, never deferring to drop order, so the camera
//! indicator goes dark and the device is usable by other apps.
//!
//! Any number of viewers may be open at once; each resolves the same
//! persisted state independently and owns its own mute/volume. There is
//! deliberately no shared player, each viewer is independently
//! embeddable.

use tracing::{debug, info, warn};

use folio_core::{BroadcastSource, BroadcastState};
use folio_media::{resolve_playable_source, PlayableSource};

use crate::{
    error::Result,
    events::BroadcastEvent,
    volume::ViewerAudio,
};

/// Kind of a captured media track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    /// Camera video
    Video,
    /// Microphone audio
    Audio,
}

/// One live hardware media track
///
/// Platform implementations wrap the real capture handles; stopping a
/// track must release the underlying hardware lock.
pub trait MediaTrack: Send {
    /// Video or audio
    fn kind(&self) -> TrackKind;

    /// Whether the track is still capturing
    fn is_live(&self) -> bool;

    /// Stop capturing and release the hardware
    fn stop(&mut self);
}

/// Platform camera/microphone acquisition seam
///
/// Implementations request permission and open the capture pipeline.
/// Denial or hardware failure is returned as an error; the controller
/// never retries silently.
pub trait CaptureDevice: Send {
    /// Request camera + microphone access and open their tracks
    fn open_tracks(&mut self) -> Result<Vec<Box<dyn MediaTrack>>>;
}

/// What a playback surface should render for the current broadcast state
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerSurface {
    /// No broadcast; the hero slideshow owns the surface
    Idle,

    /// Local capture preview (the operator's own camera feed)
    LocalPreview,

    /// External source selected but no URL set; show the placeholder
    /// indefinitely until the operator corrects it
    WaitingForSignal,

    /// Resolved external player
    ExternalPlayer(PlayableSource),
}

/// The broadcast lifecycle controller
///
/// Created and mutated only by the admin editor; every visitor-facing
/// playback surface reads the resolved state.
pub struct BroadcastController {
    state: BroadcastState,
    tracks: Vec<Box<dyn MediaTrack>>,
    pending_events: Vec<BroadcastEvent>,
}

impl BroadcastController {
    /// Controller starting from a persisted broadcast state
    ///
    /// Capture hardware is never persisted; a restored "browser" broadcast
    /// comes back without tracks until the operator starts capture again.
    pub fn new(state: BroadcastState) -> Self {
        Self {
            state,
            tracks: Vec::new(),
            pending_events: Vec::new(),
        }
    }

    // ===== Operator controls =====

    /// Switch the capture mode
    ///
    /// Switching away from `Browser` releases any held camera/microphone
    /// tracks synchronously so no hardware lock dangles.
    pub fn set_source(&mut self, source: BroadcastSource) {
        if self.state.source == source {
            return;
        }
        if self.state.source == BroadcastSource::Browser {
            self.release_tracks();
        }
        self.state.source = source;
        debug!(?source, "broadcast source switched");
        self.pending_events
            .push(BroadcastEvent::SourceChanged { source });
    }

    /// Request camera + microphone and go live from the browser
    ///
    /// On success the returned tracks are held for the local preview and
    /// `is_broadcasting` flips on. On denial or hardware error the error
    /// is surfaced to the operator and ALL state is left unchanged; the
    /// flag never flips silently.
    pub fn start_browser_capture(&mut self, device: &mut dyn CaptureDevice) -> Result<()> {
        match device.open_tracks() {
            Ok(tracks) => {
                // A retried start replaces any previous acquisition
                self.release_tracks();

                info!(tracks = tracks.len(), "browser capture started");
                self.tracks = tracks;
                self.state.source = BroadcastSource::Browser;
                self.state.is_broadcasting = true;
                self.pending_events.push(BroadcastEvent::Started {
                    source: BroadcastSource::Browser,
                });
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "capture acquisition failed");
                self.pending_events.push(BroadcastEvent::CaptureFailed {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Go live from an external stream URL
    pub fn start_external(&mut self) {
        self.set_source(BroadcastSource::External);
        if !self.state.is_broadcasting {
            self.state.is_broadcasting = true;
            self.pending_events.push(BroadcastEvent::Started {
                source: BroadcastSource::External,
            });
        }
    }

    /// Stop broadcasting and release any held capture hardware
    ///
    /// Idempotent; calling it twice is safe.
    pub fn stop_broadcast(&mut self) {
        self.release_tracks();
        if self.state.is_broadcasting {
            self.state.is_broadcasting = false;
            info!("broadcast stopped");
            self.pending_events.push(BroadcastEvent::Stopped);
        }
    }

    /// Update external stream metadata
    ///
    /// Pure metadata; reachability of the URL is not validated. A broken
    /// URL manifests as an indefinite waiting-for-signal placeholder.
    pub fn set_external_stream(&mut self, url: impl Into<String>, title: impl Into<String>) {
        self.state.stream_url = url.into();
        self.state.stream_title = title.into();
        self.pending_events.push(BroadcastEvent::ExternalStreamUpdated {
            url: self.state.stream_url.clone(),
            title: self.state.stream_title.clone(),
        });
    }

    /// Internal: stop and drop every held track
    fn release_tracks(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        for track in &mut self.tracks {
            track.stop();
        }
        debug!(released = self.tracks.len(), "capture tracks released");
        self.tracks.clear();
    }

    // ===== Resolution =====

    /// Resolve the current state into what a viewer should render
    ///
    /// Pure with respect to the persisted fields; every open viewer calls
    /// this independently against the same state.
    pub fn viewer_surface(&self) -> ViewerSurface {
        if !self.state.is_broadcasting {
            return ViewerSurface::Idle;
        }
        match self.state.source {
            BroadcastSource::Browser => ViewerSurface::LocalPreview,
            BroadcastSource::External => {
                if self.state.has_signal() {
                    ViewerSurface::ExternalPlayer(resolve_playable_source(&self.state.stream_url))
                } else {
                    ViewerSurface::WaitingForSignal
                }
            }
        }
    }

    // ===== State queries =====

    /// Current broadcast state (for persisting into the content bundle)
    pub fn state(&self) -> &BroadcastState {
        &self.state
    }

    /// Number of live capture tracks currently held
    pub fn active_track_count(&self) -> usize {
        self.tracks.iter().filter(|t| t.is_live()).count()
    }

    /// Whether the owner is currently live
    pub fn is_broadcasting(&self) -> bool {
        self.state.is_broadcasting
    }

    /// Take all queued events for the UI to apply
    pub fn drain_events(&mut self) -> Vec<BroadcastEvent> {
        std::mem::take(&mut self.pending_events)
    }
}

impl Drop for BroadcastController {
    fn drop(&mut self) {
        // Hardware release must not depend on the embedder remembering
        // to call stop_broadcast before teardown
        self.release_tracks();
    }
}

/// One independently mounted playback surface
///
/// Snapshots the resolved surface and owns its audio; viewers showing the
/// same broadcast render independent snapshots and may be transiently
/// inconsistent until each one refreshes.
#[derive(Debug)]
pub struct BroadcastViewer {
    surface: ViewerSurface,
    audio: ViewerAudio,
}

impl BroadcastViewer {
    /// Open a viewer against the controller's current state, muted
    pub fn open(controller: &BroadcastController) -> Self {
        Self {
            surface: controller.viewer_surface(),
            audio: ViewerAudio::default(),
        }
    }

    /// Re-resolve the surface after a state change; local audio persists
    pub fn refresh(&mut self, controller: &BroadcastController) {
        self.surface = controller.viewer_surface();
    }

    /// What this viewer renders
    pub fn surface(&self) -> &ViewerSurface {
        &self.surface
    }

    /// This viewer's audio state
    pub fn audio(&self) -> &ViewerAudio {
        &self.audio
    }

    /// Mutable audio state (local unmute control)
    pub fn audio_mut(&mut self) -> &mut ViewerAudio {
        &mut self.audio
    }
}
