//! Click beep envelope.
//!
//! A 900 Hz sine that decays exponentially from 0.12 to 0.001 over 60 ms
//! and is stopped at 70 ms. Times are offsets from the context's
//! `currentTime`, in seconds.

#[cfg(test)]
#[path = "audio_test.rs"]
mod audio_test;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeepEnvelope {
    pub frequency_hz: f32,
    pub start_gain: f32,
    /// Exponential ramps cannot reach zero; this is the floor.
    pub end_gain: f32,
    pub ramp_secs: f64,
    pub stop_secs: f64,
}

pub const CLICK_BEEP: BeepEnvelope =
    BeepEnvelope { frequency_hz: 900.0, start_gain: 0.12, end_gain: 0.001, ramp_secs: 0.06, stop_secs: 0.07 };

impl BeepEnvelope {
    /// Absolute `(ramp_end, stop)` times for a tone started at `now`.
    #[must_use]
    pub fn schedule(&self, now: f64) -> (f64, f64) {
        (now + self.ramp_secs, now + self.stop_secs)
    }
}
