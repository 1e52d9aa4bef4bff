//! Rotating typewriter headline.
//!
//! Cycles through a fixed list of phrases: type a phrase out character by
//! character, hold the full phrase for a while, delete it, move to the next,
//! and loop forever. [`Typewriter::tick`] advances exactly one step; the
//! caller decides the cadence.

/// What the machine does on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterPhase {
    Typing,
    /// Full phrase shown; counts down this many ticks before deleting.
    Holding(u32),
    Deleting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    phrase: usize,
    /// Number of characters of the current phrase on screen.
    shown: usize,
    phase: TypewriterPhase,
    hold_ticks: u32,
}

impl Typewriter {
    /// Creates a machine over `phrases`, holding each complete phrase for
    /// `hold_ticks` ticks before deleting it.
    ///
    /// Panics if `phrases` is empty; the phrase list is compiled-in content.
    pub fn new(phrases: &'static [&'static str], hold_ticks: u32) -> Self {
        assert!(!phrases.is_empty(), "typewriter needs at least one phrase");
        Self {
            phrases,
            phrase: 0,
            shown: 0,
            phase: TypewriterPhase::Typing,
            hold_ticks,
        }
    }

    /// Text currently on screen.
    pub fn text(&self) -> &'static str {
        let phrase = self.phrases[self.phrase];
        match phrase.char_indices().nth(self.shown) {
            Some((byte, _)) => &phrase[..byte],
            None => phrase,
        }
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    /// Advances one step: one character typed or deleted, or one hold tick.
    pub fn tick(&mut self) {
        let len = self.phrases[self.phrase].chars().count();
        match self.phase {
            TypewriterPhase::Typing => {
                self.shown += 1;
                if self.shown >= len {
                    self.shown = len;
                    self.phase = TypewriterPhase::Holding(self.hold_ticks);
                }
            }
            TypewriterPhase::Holding(0) => {
                self.phase = TypewriterPhase::Deleting;
            }
            TypewriterPhase::Holding(remaining) => {
                self.phase = TypewriterPhase::Holding(remaining - 1);
            }
            TypewriterPhase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phrase = (self.phrase + 1) % self.phrases.len();
                    self.phase = TypewriterPhase::Typing;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static PHRASES: &[&str] = &["ab", "xyz"];

    #[test]
    fn test_types_one_character_per_tick() {
        let mut tw = Typewriter::new(PHRASES, 2);
        assert_eq!(tw.text(), "");

        tw.tick();
        assert_eq!(tw.text(), "a");

        tw.tick();
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.phase(), TypewriterPhase::Holding(2));
    }

    #[test]
    fn test_holds_before_deleting() {
        let mut tw = Typewriter::new(PHRASES, 2);
        for _ in 0..2 {
            tw.tick(); // type "ab"
        }

        tw.tick(); // hold 2 -> 1
        tw.tick(); // hold 1 -> 0
        assert_eq!(tw.text(), "ab");

        tw.tick(); // hold 0 -> deleting
        assert_eq!(tw.phase(), TypewriterPhase::Deleting);
        assert_eq!(tw.text(), "ab");
    }

    #[test]
    fn test_deletes_then_advances_to_next_phrase() {
        let mut tw = Typewriter::new(PHRASES, 0);
        // Type "ab", burn the single hold tick, start deleting.
        for _ in 0..3 {
            tw.tick();
        }
        assert_eq!(tw.phase(), TypewriterPhase::Deleting);

        tw.tick();
        assert_eq!(tw.text(), "a");

        tw.tick();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phase(), TypewriterPhase::Typing);

        tw.tick();
        assert_eq!(tw.text(), "x");
    }

    #[test]
    fn test_loops_back_to_first_phrase() {
        let mut tw = Typewriter::new(PHRASES, 0);
        // One full cycle per phrase: len ticks typing, 1 hold tick, len
        // ticks deleting.
        for _ in 0..(2 + 1 + 2) + (3 + 1 + 3) {
            tw.tick();
        }
        assert_eq!(tw.phase(), TypewriterPhase::Typing);
        tw.tick();
        assert_eq!(tw.text(), "a");
    }
}
