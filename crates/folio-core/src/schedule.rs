//! Virtual-clock timer queue.
//!
//! Replaces `setTimeout`/`setInterval` chains: the host asks for
//! [`Scheduler::next_deadline`], arms one real timer, and feeds the current
//! time back. Tests feed time directly.

/// Milliseconds since controller start.
pub type Millis = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    RevealFallback,
    HeroFadeIn,
    StartTyping,
    TypeNextChar,
    CounterStep(usize),
    GradientShift,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Clone, Debug)]
struct Entry {
    id: TimerId,
    due: Millis,
    period: Option<Millis>,
    kind: TimerKind,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_once(&mut self, now: Millis, delay: Millis, kind: TimerKind) -> TimerId {
        self.insert(now + delay, None, kind)
    }

    /// First firing is one `period` after `now`. A zero period is clamped to
    /// 1 ms so a periodic timer can never starve the queue.
    pub fn schedule_every(&mut self, now: Millis, period: Millis, kind: TimerKind) -> TimerId {
        let period = period.max(1);
        self.insert(now + period, Some(period), kind)
    }

    fn insert(&mut self, due: Millis, period: Option<Millis>, kind: TimerKind) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            due,
            period,
            kind,
        });
        id
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        before != self.entries.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        self.entries.iter().map(|e| e.due).min()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove and return the earliest timer due at or before `now`.
    ///
    /// Ties resolve in scheduling order. Periodic timers are re-queued on the
    /// first period boundary after `now`: a late host gets one firing per
    /// wake and the missed periods are dropped, as with `setInterval`.
    pub fn pop_due(&mut self, now: Millis) -> Option<(TimerId, TimerKind)> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= now)
            .min_by_key(|(_, e)| (e.due, e.id.0))
            .map(|(i, _)| i)?;
        let entry = &mut self.entries[idx];
        let fired = (entry.id, entry.kind);
        match entry.period {
            Some(period) => entry.due += period * ((now - entry.due) / period + 1),
            None => {
                self.entries.swap_remove(idx);
            }
        }
        Some(fired)
    }
}
