use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CounterParseError {
    #[error("counter text {0:?} has no leading number")]
    NotANumber(String),
}

/// Counter text split into the number to count up to and the unit shown
/// after it ("50+" -> 50 and "+").
#[derive(Clone, Debug, PartialEq)]
pub struct CounterTarget {
    pub original: String,
    pub value: f64,
    pub suffix: String,
    pub decimals: usize,
}

impl CounterTarget {
    pub fn parse(text: &str) -> Result<Self, CounterParseError> {
        let value = parse_leading_number(text)
            .ok_or_else(|| CounterParseError::NotANumber(text.to_string()))?;
        let suffix = text
            .chars()
            .filter(|c| !c.is_ascii_digit() && *c != '.')
            .collect();
        let decimals = if text.contains('.') { 2 } else { 0 };
        Ok(Self {
            original: text.to_string(),
            value,
            suffix,
            decimals,
        })
    }

    pub fn format(&self, current: f64) -> String {
        format!("{}{}", to_fixed(current, self.decimals), self.suffix)
    }
}

/// Longest numeric prefix after optional whitespace: sign, digits and at
/// most one decimal point. At least one digit is required.
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let mut digits = 0;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if digits == 0 {
        return None;
    }
    s[..end].trim_end_matches('.').parse().ok()
}

/// Fixed-point formatting with halves rounded away from zero.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.decimals$}")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterStep {
    Running,
    Finished,
}

/// Count-up animation for one counter element.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    pub target: CounterTarget,
    pub current_value: f64,
    pub has_completed: bool,
    increment: f64,
}

impl CounterAnimation {
    pub fn new(target: CounterTarget, steps: f64) -> Self {
        let increment = target.value / steps.max(1.0);
        Self {
            target,
            current_value: 0.0,
            has_completed: false,
            increment,
        }
    }

    pub fn target_value(&self) -> f64 {
        self.target.value
    }

    /// Advance one interval. Returns the text to display and whether the
    /// animation finished; the final text is exactly the original.
    pub fn step(&mut self) -> (String, CounterStep) {
        if self.has_completed {
            return (self.target.original.clone(), CounterStep::Finished);
        }
        self.current_value += self.increment;
        if self.current_value >= self.target.value {
            self.current_value = self.target.value;
            self.has_completed = true;
            (self.target.original.clone(), CounterStep::Finished)
        } else {
            (self.target.format(self.current_value), CounterStep::Running)
        }
    }
}

/// Counters of the stats block. Starts at most once per page lifetime.
#[derive(Debug, Default)]
pub struct StatsAnimation {
    texts: Vec<String>,
    counters: Vec<Option<CounterAnimation>>,
    started: bool,
}

impl StatsAnimation {
    pub fn new(texts: Vec<String>) -> Self {
        Self {
            texts,
            counters: Vec::new(),
            started: false,
        }
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn counter(&self, index: usize) -> Option<&CounterAnimation> {
        self.counters.get(index).and_then(Option::as_ref)
    }

    /// Parse every counter text and return the indices that will animate.
    /// Texts without a leading number are skipped. Later calls return
    /// nothing.
    pub fn start(&mut self, steps: f64) -> Vec<usize> {
        if self.started {
            return Vec::new();
        }
        self.started = true;
        self.counters = self
            .texts
            .iter()
            .enumerate()
            .map(|(i, text)| match CounterTarget::parse(text) {
                Ok(target) => Some(CounterAnimation::new(target, steps)),
                Err(e) => {
                    log::debug!("[stats] skipping counter {i}: {e}");
                    None
                }
            })
            .collect();
        self.counters
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_ref().map(|_| i))
            .collect()
    }

    pub fn step(&mut self, index: usize) -> Option<(String, CounterStep)> {
        self.counters
            .get_mut(index)
            .and_then(Option::as_mut)
            .map(CounterAnimation::step)
    }
}
