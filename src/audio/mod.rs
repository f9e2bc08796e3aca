//! Fire-and-forget sound effects
//!
//! The simulation reports [`SoundCue`]s; a [`SoundSink`] turns them into noise.
//! Playback never blocks the game and never reports failure back to it.

pub mod bell;

pub use bell::TerminalBell;

/// Discrete events that have a sound attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    FoodEaten,
    BonusEaten,
    GameOver,
    GameStart,
}

/// Something that can play sound cues
pub trait SoundSink {
    fn play(&mut self, cue: SoundCue);
}

/// Sink used when sound is muted
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl SoundSink for Silent {
    fn play(&mut self, _cue: SoundCue) {}
}

impl<S: SoundSink + ?Sized> SoundSink for Box<S> {
    fn play(&mut self, cue: SoundCue) {
        (**self).play(cue);
    }
}
