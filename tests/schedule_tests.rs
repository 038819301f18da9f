// Host-side tests for the virtual-clock timer queue.

use folio_core::schedule::*;

#[test]
fn empty_scheduler_has_no_deadline() {
    let mut s = Scheduler::new();
    assert!(s.is_empty());
    assert_eq!(s.next_deadline(), None);
    assert_eq!(s.pop_due(10_000), None);
}

#[test]
fn one_shot_fires_once_at_its_deadline() {
    let mut s = Scheduler::new();
    s.schedule_once(100, 500, TimerKind::StartTyping);
    assert_eq!(s.next_deadline(), Some(600));
    assert_eq!(s.pop_due(599), None);
    assert!(matches!(s.pop_due(600), Some((_, TimerKind::StartTyping))));
    assert_eq!(s.pop_due(10_000), None);
    assert!(s.is_empty());
}

#[test]
fn due_timers_pop_in_deadline_then_insertion_order() {
    let mut s = Scheduler::new();
    s.schedule_once(0, 300, TimerKind::RevealFallback);
    s.schedule_once(0, 100, TimerKind::HeroFadeIn);
    s.schedule_once(0, 100, TimerKind::StartTyping);
    let fired: Vec<TimerKind> = std::iter::from_fn(|| s.pop_due(1000).map(|(_, k)| k)).collect();
    assert_eq!(
        fired,
        vec![TimerKind::HeroFadeIn, TimerKind::StartTyping, TimerKind::RevealFallback]
    );
}

#[test]
fn late_periodic_timer_fires_once_and_skips_missed_periods() {
    let mut s = Scheduler::new();
    let id = s.schedule_every(0, 30, TimerKind::CounterStep(0));
    let mut count = 0;
    while s.pop_due(95).is_some() {
        count += 1;
    }
    // 30, 60 and 90 were all due; only one firing, next on the 120 boundary.
    assert_eq!(count, 1);
    assert_eq!(s.next_deadline(), Some(120));
    assert!(s.is_pending(id));
}

#[test]
fn punctual_periodic_timer_keeps_its_phase() {
    let mut s = Scheduler::new();
    s.schedule_every(5, 100, TimerKind::GradientShift);
    assert!(s.pop_due(105).is_some());
    assert_eq!(s.next_deadline(), Some(205));
    // Exactly on a later boundary: fire once, move to the next one.
    assert!(s.pop_due(405).is_some());
    assert_eq!(s.pop_due(405), None);
    assert_eq!(s.next_deadline(), Some(505));
}

#[test]
fn cancel_removes_periodic_timer() {
    let mut s = Scheduler::new();
    let id = s.schedule_every(0, 100, TimerKind::GradientShift);
    assert!(s.cancel(id));
    assert!(!s.cancel(id));
    assert_eq!(s.pop_due(1_000), None);
}

#[test]
fn zero_period_is_clamped() {
    let mut s = Scheduler::new();
    s.schedule_every(5, 0, TimerKind::GradientShift);
    assert_eq!(s.next_deadline(), Some(6));
}
