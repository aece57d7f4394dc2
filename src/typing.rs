use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_TYPE_INTERVAL_MS: u64 = 100;
pub const DEFAULT_HOLD_MS: u64 = 2000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypingError {
    #[error("invalid typing effect config: {0}")]
    InvalidConfig(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingConfig {
    phrases: Vec<String>,
    type_interval: Duration,
    hold: Duration,
}

impl TypingConfig {
    pub fn new<I, S>(phrases: I, type_interval_ms: u64, hold_ms: u64) -> Result<Self, TypingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases = phrases.into_iter().map(Into::into).collect::<Vec<_>>();
        if phrases.is_empty() {
            return Err(TypingError::InvalidConfig("phrase list is empty"));
        }
        if type_interval_ms == 0 {
            return Err(TypingError::InvalidConfig("type interval must be positive"));
        }
        if hold_ms == 0 {
            return Err(TypingError::InvalidConfig("hold delay must be positive"));
        }
        Ok(Self {
            phrases,
            type_interval: Duration::from_millis(type_interval_ms),
            hold: Duration::from_millis(hold_ms),
        })
    }

    pub fn with_defaults<I, S>(phrases: I) -> Result<Self, TypingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(phrases, DEFAULT_TYPE_INTERVAL_MS, DEFAULT_HOLD_MS)
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn type_interval(&self) -> Duration {
        self.type_interval
    }

    pub fn delete_interval(&self) -> Duration {
        self.type_interval / 2
    }

    pub fn hold(&self) -> Duration {
        self.hold
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Typing,
    HoldingFull,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct TypingEffect {
    config: TypingConfig,
    phrase_index: usize,
    char_count: usize,
    mode: Mode,
    stopped: bool,
}

impl TypingEffect {
    pub fn new(config: TypingConfig) -> Self {
        let mut effect = Self {
            config,
            phrase_index: 0,
            char_count: 0,
            mode: Mode::Typing,
            stopped: false,
        };
        effect.skip_empty_phrase();
        effect
    }

    pub fn create<I, S>(phrases: I, type_interval_ms: u64, hold_ms: u64) -> Result<Self, TypingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TypingConfig::new(phrases, type_interval_ms, hold_ms).map(Self::new)
    }

    pub fn config(&self) -> &TypingConfig {
        &self.config
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn current_phrase(&self) -> &str {
        &self.config.phrases[self.phrase_index]
    }

    pub fn display_text(&self) -> &str {
        let phrase = self.current_phrase();
        let end = phrase
            .char_indices()
            .nth(self.char_count)
            .map_or(phrase.len(), |(i, _)| i);
        &phrase[..end]
    }

    // None once stopped
    pub fn next_delay(&self) -> Option<Duration> {
        if self.stopped {
            return None;
        }
        Some(match self.mode {
            Mode::Typing => self.config.type_interval(),
            Mode::HoldingFull => self.config.hold(),
            Mode::Deleting => self.config.delete_interval(),
        })
    }

    /// Advances one step, returning the new text only when it changed.
    pub fn tick(&mut self) -> Option<String> {
        if self.stopped {
            return None;
        }
        // Length is read at decision time; phrases differ in length.
        let len = self.phrase_len();
        match self.mode {
            Mode::Typing => {
                if self.char_count >= len {
                    self.mode = Mode::HoldingFull;
                    return None;
                }
                self.char_count += 1;
                if self.char_count == len {
                    self.mode = Mode::HoldingFull;
                }
                Some(self.display_text().to_owned())
            }
            Mode::HoldingFull => {
                self.mode = Mode::Deleting;
                None
            }
            Mode::Deleting => {
                if self.char_count == 0 {
                    self.advance_phrase();
                    return None;
                }
                self.char_count -= 1;
                let text = self.display_text().to_owned();
                if self.char_count == 0 {
                    self.advance_phrase();
                }
                Some(text)
            }
        }
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    fn phrase_len(&self) -> usize {
        self.current_phrase().chars().count()
    }

    fn advance_phrase(&mut self) {
        self.phrase_index = (self.phrase_index + 1) % self.config.phrases.len();
        self.char_count = 0;
        self.mode = Mode::Typing;
        self.skip_empty_phrase();
    }

    // An empty phrase has nothing to type.
    fn skip_empty_phrase(&mut self) {
        if self.mode == Mode::Typing && self.phrase_len() == 0 {
            self.mode = Mode::HoldingFull;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    // virtual clock: every emitted text with its emission time
    fn run_until(effect: &mut TypingEffect, until: Duration) -> Vec<(Duration, String)> {
        let mut now = Duration::ZERO;
        let mut emitted = Vec::new();
        while let Some(delay) = effect.next_delay() {
            if now + delay > until {
                break;
            }
            now += delay;
            if let Some(text) = effect.tick() {
                emitted.push((now, text));
            }
        }
        emitted
    }

    fn texts(emitted: &[(Duration, String)]) -> Vec<&str> {
        emitted.iter().map(|(_, s)| s.as_str()).collect()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let empty: Vec<String> = vec![];
        assert_eq!(
            TypingEffect::create(empty, 100, 2000).unwrap_err(),
            TypingError::InvalidConfig("phrase list is empty")
        );
        assert!(matches!(
            TypingEffect::create(["x"], 0, 2000),
            Err(TypingError::InvalidConfig(_))
        ));
        assert!(matches!(
            TypingEffect::create(["x"], 100, 0),
            Err(TypingError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_defaults_and_delete_interval() {
        let config = TypingConfig::with_defaults(["a"]).unwrap();
        assert_eq!(config.type_interval(), ms(100));
        assert_eq!(config.delete_interval(), ms(50));
        assert_eq!(config.hold(), ms(2000));

        let fast = TypingConfig::new(["a"], 1, 1).unwrap();
        assert_eq!(fast.delete_interval(), Duration::from_micros(500));
    }

    #[test]
    fn test_initial_state() {
        let effect = TypingEffect::create(["Go", "Rust"], 100, 500).unwrap();
        assert_eq!(effect.mode(), Mode::Typing);
        assert_eq!(effect.phrase_index(), 0);
        assert_eq!(effect.char_count(), 0);
        assert_eq!(effect.display_text(), "");
        assert_eq!(effect.next_delay(), Some(ms(100)));
    }

    #[test]
    fn test_go_rust_trace() {
        let mut effect = TypingEffect::create(["Go", "Rust"], 100, 500).unwrap();
        let emitted = run_until(&mut effect, ms(2000));
        let expected = [
            (100, "G"),
            (200, "Go"),
            // hold 500ms, then delete at 50ms spacing
            (750, "G"),
            (800, ""),
            (900, "R"),
            (1000, "Ru"),
            (1100, "Rus"),
            (1200, "Rust"),
            (1750, "Rus"),
            (1800, "Ru"),
            (1850, "R"),
            (1900, ""),
            (2000, "G"),
        ]
        .into_iter()
        .map(|(t, s)| (ms(t), s.to_string()))
        .collect::<Vec<_>>();
        assert_eq!(emitted, expected);
        assert_eq!(effect.phrase_index(), 0);
    }

    #[test]
    fn test_hold_emits_nothing() {
        let mut effect = TypingEffect::create(["ab"], 100, 2000).unwrap();
        effect.tick();
        effect.tick();
        assert_eq!(effect.mode(), Mode::HoldingFull);
        assert_eq!(effect.next_delay(), Some(ms(2000)));
        assert_eq!(effect.tick(), None);
        assert_eq!(effect.mode(), Mode::Deleting);
        assert_eq!(effect.display_text(), "ab");
    }

    #[test]
    fn test_full_phrase_emitted_once_before_hold() {
        let phrase = "Full Stack Developer";
        let mut effect = TypingEffect::create([phrase, "Other"], 120, 2500).unwrap();
        let len = phrase.chars().count() as u32;
        let emitted = run_until(&mut effect, ms(120) * len);
        assert_eq!(emitted.len(), len as usize);
        let full = emitted.iter().filter(|(_, s)| s == phrase).count();
        assert_eq!(full, 1);
        assert_eq!(emitted.last().map(|(t, _)| *t), Some(ms(120) * len));
        assert_eq!(effect.mode(), Mode::HoldingFull);
    }

    #[test]
    fn test_delete_takes_one_step_per_char() {
        let mut effect = TypingEffect::create(["hello", "x"], 100, 300).unwrap();
        for _ in 0..5 {
            effect.tick();
        }
        assert_eq!(effect.tick(), None); // hold expires
        let mut steps = Vec::new();
        while effect.phrase_index() == 0 {
            assert_eq!(effect.next_delay(), Some(ms(50)));
            steps.push(effect.tick().expect("every delete step emits"));
        }
        assert_eq!(steps, vec!["hell", "hel", "he", "h", ""]);
        assert_eq!(effect.mode(), Mode::Typing);
        assert_eq!(effect.char_count(), 0);
    }

    #[test]
    fn test_display_never_exceeds_phrase() {
        let mut effect = TypingEffect::create(["a", "longer phrase", "", "mid"], 10, 30).unwrap();
        for _ in 0..500 {
            effect.tick();
            let shown = effect.display_text().chars().count();
            assert!(shown <= effect.current_phrase().chars().count());
            assert_eq!(shown, effect.char_count());
            assert!(effect.current_phrase().starts_with(effect.display_text()));
        }
    }

    #[test]
    fn test_cycle_is_periodic() {
        let phrases = ["one", "three", "x"];
        let mut effect = TypingEffect::create(phrases, 100, 200).unwrap();
        let mut seen = vec![effect.phrase_index()];
        for _ in 0..phrases.len() {
            let start = effect.phrase_index();
            while effect.phrase_index() == start {
                effect.tick();
            }
            seen.push(effect.phrase_index());
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_single_phrase_keeps_cycling() {
        let mut effect = TypingEffect::create(["ab"], 100, 200).unwrap();
        let emitted = run_until(&mut effect, ms(1000));
        assert_eq!(
            texts(&emitted),
            vec!["a", "ab", "a", "", "a", "ab", "a", ""]
        );
    }

    #[test]
    fn test_empty_phrase_holds_and_loops() {
        let mut effect = TypingEffect::create([""], 100, 500).unwrap();
        assert_eq!(effect.mode(), Mode::HoldingFull);
        assert_eq!(effect.display_text(), "");
        assert_eq!(effect.next_delay(), Some(ms(500)));

        assert_eq!(effect.tick(), None);
        assert_eq!(effect.mode(), Mode::Deleting);
        assert_eq!(effect.tick(), None);
        // back around to the same empty phrase, skipping straight to hold
        assert_eq!(effect.phrase_index(), 0);
        assert_eq!(effect.mode(), Mode::HoldingFull);

        let emitted = run_until(&mut effect, ms(10_000));
        assert!(emitted.is_empty());
    }

    #[test]
    fn test_empty_phrase_between_others() {
        let mut effect = TypingEffect::create(["a", "", "b"], 100, 200).unwrap();
        let emitted = run_until(&mut effect, ms(1000));
        // "a" typed/held/deleted (100 + 200 + 50), "" held/advanced (200 + 50), "b" at 700
        assert_eq!(texts(&emitted), vec!["a", "", "b", ""]);
        assert_eq!(emitted[2].0, ms(700));
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let mut effect = TypingEffect::create(["Café ☕"], 100, 200).unwrap();
        let mut typed = Vec::new();
        while effect.mode() == Mode::Typing {
            typed.extend(effect.tick());
        }
        assert_eq!(typed, vec!["C", "Ca", "Caf", "Café", "Café ", "Café ☕"]);
    }

    #[test]
    fn test_stop_silences_effect() {
        let mut effect = TypingEffect::create(["Go", "Rust"], 100, 500).unwrap();
        effect.tick();
        effect.stop();
        assert!(effect.is_stopped());
        assert_eq!(effect.next_delay(), None);
        assert_eq!(effect.tick(), None);
        assert_eq!(effect.display_text(), "G");

        effect.stop();
        assert_eq!(effect.tick(), None);
        assert!(run_until(&mut effect, ms(10_000)).is_empty());
    }
}
