//! Per-viewer audio state with logarithmic scaling
//!
//! Every open playback surface (hero surface, navbar live modal, story
//! viewer) owns its own `ViewerAudio`; there is no shared video element,
//! so muting or unmuting one viewer never affects another. Viewers open
//! muted because unmuted autoplay is never assumed to succeed.
//!
//! Levels are human-perceptual: 0-100% mapped to -60 dB .. 0 dB.

/// Audio state for one playback surface
#[derive(Debug, Clone)]
pub struct ViewerAudio {
    /// Volume level (0-100)
    level: u8,

    /// Mute state (preserves volume level)
    muted: bool,

    /// Cached linear gain multiplier
    linear_gain: f32,
}

impl ViewerAudio {
    /// New viewer audio, muted on open
    ///
    /// # Arguments
    /// * `level` - Initial volume (0-100) applied once unmuted
    pub fn muted_on_open(level: u8) -> Self {
        let level = level.min(100);
        Self {
            level,
            muted: true,
            linear_gain: Self::calculate_linear_gain(level),
        }
    }

    /// Set volume level (0-100)
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
        self.linear_gain = Self::calculate_linear_gain(self.level);
    }

    /// Get current volume level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Mute (preserves volume level)
    pub fn mute(&mut self) {
        self.muted = true;
    }

    /// Unmute (restores previous volume)
    pub fn unmute(&mut self) {
        self.muted = false;
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Linear gain for the video element (0.0 when muted)
    pub fn gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.linear_gain
        }
    }

    /// Convert volume percentage to linear gain
    ///
    /// Formula: gain = 10^((level% - 100) * 0.6 / 20)
    /// - 0%   → silence
    /// - 50%  → -30 dB
    /// - 100% →   0 dB (unity)
    fn calculate_linear_gain(level: u8) -> f32 {
        if level == 0 {
            return 0.0;
        }
        let db = (f32::from(level) - 100.0) * 0.6;
        10.0_f32.powf(db / 20.0)
    }
}

impl Default for ViewerAudio {
    fn default() -> Self {
        Self::muted_on_open(80)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_muted() {
        let audio = ViewerAudio::default();
        assert!(audio.is_muted());
        assert_eq!(audio.gain(), 0.0);
        assert_eq!(audio.level(), 80);
    }

    #[test]
    fn unmute_restores_level() {
        let mut audio = ViewerAudio::muted_on_open(100);
        audio.unmute();
        assert!((audio.gain() - 1.0).abs() < 0.001);
    }

    #[test]
    fn level_clamps_to_100() {
        let mut audio = ViewerAudio::default();
        audio.set_level(150);
        assert_eq!(audio.level(), 100);
    }

    #[test]
    fn logarithmic_scaling() {
        let mut audio = ViewerAudio::muted_on_open(50);
        audio.unmute();
        // 50% is -30 dB, far below linear 0.5
        assert!((audio.gain() - 0.0316).abs() < 0.001);
    }

    #[test]
    fn toggle_round_trip() {
        let mut audio = ViewerAudio::default();
        audio.toggle_mute();
        assert!(!audio.is_muted());
        audio.toggle_mute();
        assert!(audio.is_muted());
        assert_eq!(audio.level(), 80);
    }
}
