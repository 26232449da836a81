//! Sound cues for a terminal: each cue rings the bell and is logged.

use std::io::Write;

use crossterm::{style::Print, QueueableCommand};
use hunters_meal::entities::SoundCue;

const BELL: &str = "\x07";

/// Audio manager for the game
pub struct Audio {
    muted: bool,
}

impl Audio {
    pub fn new(muted: bool) -> Self {
        if muted {
            log::info!("audio cues muted");
        }
        Self { muted }
    }

    /// Queue every cue raised by the last step. Fire-and-forget.
    pub fn play_all<W: Write>(&self, out: &mut W, cues: &[SoundCue]) -> std::io::Result<()> {
        for &cue in cues {
            self.play(out, cue)?;
        }
        Ok(())
    }

    pub fn play<W: Write>(&self, out: &mut W, cue: SoundCue) -> std::io::Result<()> {
        log::debug!("sound cue: {:?}", cue);
        if self.muted {
            return Ok(());
        }
        // The victory fanfare is played twice back to back
        let rings = match cue {
            SoundCue::Win => 2,
            SoundCue::RoundStart | SoundCue::Damage | SoundCue::Lose => 1,
        };
        for _ in 0..rings {
            out.queue(Print(BELL))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bells(audio: &Audio, cue: SoundCue) -> usize {
        let mut out = Vec::new();
        audio.play(&mut out, cue).unwrap();
        out.iter().filter(|&&b| b == 0x07).count()
    }

    #[test]
    fn win_rings_twice_other_cues_once() {
        let audio = Audio::new(false);
        assert_eq!(bells(&audio, SoundCue::Win), 2);
        assert_eq!(bells(&audio, SoundCue::RoundStart), 1);
        assert_eq!(bells(&audio, SoundCue::Damage), 1);
        assert_eq!(bells(&audio, SoundCue::Lose), 1);
    }

    #[test]
    fn muted_audio_stays_silent() {
        let audio = Audio::new(true);
        let mut out = Vec::new();
        audio
            .play_all(&mut out, &[SoundCue::RoundStart, SoundCue::Damage, SoundCue::Win])
            .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn play_all_rings_for_every_cue() {
        let audio = Audio::new(false);
        let mut out = Vec::new();
        audio.play_all(&mut out, &[SoundCue::Damage, SoundCue::Win]).unwrap();
        assert_eq!(out.iter().filter(|&&b| b == 0x07).count(), 3);
    }
}
