//! One-shot text scramble for the hero heading.

use rand::Rng;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GlitchFrame {
    /// Still waiting for the start delay.
    Pending,
    /// Inside the window: show this scrambled text.
    Scrambled(String),
    /// Window just elapsed: restore this text. Reported exactly once.
    Restored(String),
    /// Finished; nothing more to do.
    Done,
}

#[derive(Clone, Debug)]
pub struct GlitchEffect {
    original: String,
    symbols: Vec<char>,
    delay: f32,
    window: f32,
    elapsed: f32,
    finished: bool,
}

impl GlitchEffect {
    /// `original` is trimmed the way the heading text is captured.
    pub fn new(original: &str, symbols: &str, delay: f32, window: f32) -> Self {
        Self {
            original: original.trim().to_string(),
            symbols: symbols.chars().collect(),
            delay,
            window,
            elapsed: 0.0,
            finished: false,
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn is_running(&self) -> bool {
        !self.finished && self.elapsed >= self.delay
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance by `dt` seconds and report what the heading should show.
    pub fn advance<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) -> GlitchFrame {
        if self.finished {
            return GlitchFrame::Done;
        }
        self.elapsed += dt.max(0.0);
        if self.elapsed < self.delay {
            return GlitchFrame::Pending;
        }
        if self.elapsed - self.delay < self.window {
            return GlitchFrame::Scrambled(scramble(&self.original, &self.symbols, rng));
        }
        self.finished = true;
        GlitchFrame::Restored(self.original.clone())
    }
}

/// Replace every non-space character with a random symbol.
pub fn scramble<R: Rng + ?Sized>(text: &str, symbols: &[char], rng: &mut R) -> String {
    if symbols.is_empty() {
        return text.to_string();
    }
    text.chars()
        .map(|c| {
            if c == ' ' {
                ' '
            } else {
                symbols[rng.gen_range(0..symbols.len())]
            }
        })
        .collect()
}
