//! Sound cues
//!
//! The simulation never plays audio. Each tick reports which cues fired and
//! the host hands them to whatever [`AudioSink`] it owns.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Flyer starts an ascent
    Wing,
    /// Score went up
    Point,
    /// Flyer struck an obstacle or the ground
    Hit,
    /// Run ended
    Die,
}

impl SoundEffect {
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Wing => "wing",
            SoundEffect::Point => "point",
            SoundEffect::Hit => "hit",
            SoundEffect::Die => "die",
        }
    }
}

/// Anything that can play a cue
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);

    fn play_all(&mut self, effects: &[SoundEffect]) {
        for &effect in effects {
            self.play(effect);
        }
    }
}

/// Sink for headless runs: logs every cue
#[derive(Debug, Default)]
pub struct LogAudio {
    pub played: usize,
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        self.played += 1;
        log::debug!("sfx: {}", effect.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_all_counts() {
        let mut sink = LogAudio::default();
        sink.play_all(&[SoundEffect::Hit, SoundEffect::Die]);
        assert_eq!(sink.played, 2);
    }
}
