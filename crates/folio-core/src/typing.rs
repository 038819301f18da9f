/// Typewriter for the hero subtitle: `Idle -> Typing(i) -> Done`.
///
/// Text is captured once; each [`Typewriter::advance`] reveals one more
/// character. There is no restart and no cancellation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypingState {
    Idle,
    Typing(usize),
    Done,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    state: TypingState,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            state: TypingState::Idle,
        }
    }

    pub fn state(&self) -> &TypingState {
        &self.state
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn full_text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Reveal the next character and return the visible prefix. Returns
    /// `None` once everything has been typed.
    pub fn advance(&mut self) -> Option<String> {
        let shown = match self.state {
            TypingState::Done => return None,
            TypingState::Idle => 0,
            TypingState::Typing(i) => i,
        };
        if shown >= self.chars.len() {
            self.state = TypingState::Done;
            return None;
        }
        let shown = shown + 1;
        self.state = if shown == self.chars.len() {
            TypingState::Done
        } else {
            TypingState::Typing(shown)
        };
        Some(self.chars[..shown].iter().collect())
    }
}
