//! Frame generator for the typed-text animation.
//!
//! A [`Typewriter`] walks a fixed sequence of lines forever: it types a line
//! one character at a time, holds it for the line's pause, erases back to the
//! prefix it shares with the next line, then types the next one. Each call to
//! [`Typewriter::step`] advances by one frame and returns how long to wait
//! before the next call. Timers live in the component; this type only knows
//! about frames.

use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(70);
pub const ERASE_DELAY: Duration = Duration::from_millis(35);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypedLine {
    pub text: &'static str,
    /// Hold time once the line is fully typed.
    pub pause: Duration,
}

impl TypedLine {
    pub const fn new(text: &'static str, pause: Duration) -> Self {
        Self { text, pause }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Erasing { keep: usize },
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    lines: &'static [TypedLine],
    index: usize,
    /// Visible characters of the current line.
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(lines: &'static [TypedLine]) -> Self {
        Self {
            lines,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    /// Text to display for the current frame.
    pub fn text(&self) -> &'static str {
        let Some(line) = self.lines.get(self.index) else {
            return "";
        };
        let end = line
            .text
            .char_indices()
            .nth(self.shown)
            .map_or(line.text.len(), |(i, _)| i);
        &line.text[..end]
    }

    /// The fully typed line while it is being held, `None` otherwise.
    #[cfg(test)]
    fn completed(&self) -> Option<&'static str> {
        match self.phase {
            Phase::Holding => self.lines.get(self.index).map(|l| l.text),
            _ => None,
        }
    }

    /// Advances one frame and returns the delay before the next step.
    pub fn step(&mut self) -> Duration {
        let Some(line) = self.lines.get(self.index).copied() else {
            return ERASE_DELAY;
        };

        match self.phase {
            Phase::Typing => {
                let len = line.text.chars().count();
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.phase = Phase::Holding;
                    line.pause
                } else {
                    TYPE_DELAY
                }
            }
            Phase::Holding => {
                let next = self.lines[self.next_index()].text;
                let keep = shared_prefix(line.text, next);
                self.phase = Phase::Erasing { keep };
                self.erase(keep)
            }
            Phase::Erasing { keep } => self.erase(keep),
        }
    }

    fn erase(&mut self, keep: usize) -> Duration {
        if self.shown > keep {
            self.shown -= 1;
        }
        if self.shown <= keep {
            self.index = self.next_index();
            self.phase = Phase::Typing;
        }
        ERASE_DELAY
    }

    fn next_index(&self) -> usize {
        (self.index + 1) % self.lines.len()
    }
}

/// Number of leading characters two lines have in common.
fn shared_prefix(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .count()
}
