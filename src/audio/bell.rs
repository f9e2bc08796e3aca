use log::trace;
use std::io::{Stderr, Write};

use super::{SoundCue, SoundSink};

const BEL: &[u8] = b"\x07";

/// Rings the terminal bell. Bonus food rings twice so it is distinguishable.
pub struct TerminalBell<W: Write = Stderr> {
    out: W,
}

impl TerminalBell<Stderr> {
    pub fn new() -> Self {
        Self {
            out: std::io::stderr(),
        }
    }
}

impl Default for TerminalBell<Stderr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn rings(cue: SoundCue) -> usize {
        match cue {
            SoundCue::BonusEaten => 2,
            SoundCue::FoodEaten | SoundCue::GameOver | SoundCue::GameStart => 1,
        }
    }
}

impl<W: Write> SoundSink for TerminalBell<W> {
    fn play(&mut self, cue: SoundCue) {
        trace!("sound cue {:?}", cue);
        for _ in 0..Self::rings(cue) {
            // Sound is best effort; a closed terminal must not stop the game.
            let _ = self.out.write_all(BEL);
        }
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::Silent;

    #[test]
    fn test_bell_rings_per_cue() {
        let mut bell = TerminalBell::with_writer(Vec::new());
        bell.play(SoundCue::FoodEaten);
        bell.play(SoundCue::BonusEaten);
        bell.play(SoundCue::GameOver);

        assert_eq!(bell.into_inner(), b"\x07\x07\x07\x07".to_vec());
    }

    #[test]
    fn test_boxed_sink() {
        let mut sink: Box<dyn SoundSink> = Box::new(Silent);
        sink.play(SoundCue::GameStart);
    }
}
