//! Staggered entrance of navigation items
//!
//! Item `i` is revealed `i × STAGGER` after mount; the sequence finishes
//! `SETTLE` after the last slot so the final item's fade can complete.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Delay between two consecutive reveals
pub const STAGGER: Duration = Duration::from_millis(80);
/// Extra time after the last reveal slot before the sequence ends
pub const SETTLE: Duration = Duration::from_millis(300);
/// Per-item fade/slide duration
pub const ITEM_FADE: Duration = Duration::from_millis(300);
/// Vertical offset of an item that has not been revealed yet
pub const ITEM_OFFSET: f32 = 12.0;

/// One step of the entrance sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntranceStep {
    /// Reveal the item at this index
    Reveal(usize),
    /// End of the first-mount phase
    Finish,
}

/// A step together with its delay from mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledStep {
    pub at: Duration,
    pub step: EntranceStep,
}

/// Full timeline for `item_count` items: one reveal per item, then finish
pub fn schedule(item_count: usize) -> Vec<ScheduledStep> {
    (0..item_count)
        .map(|i| ScheduledStep {
            at: STAGGER * i as u32,
            step: EntranceStep::Reveal(i),
        })
        .chain(std::iter::once(ScheduledStep {
            at: total_duration(item_count),
            step: EntranceStep::Finish,
        }))
        .collect()
}

/// Time from mount until the first-mount phase ends
pub fn total_duration(item_count: usize) -> Duration {
    STAGGER * item_count as u32 + SETTLE
}

/// Steps whose delay has fully elapsed after `elapsed`
pub fn due(steps: &[ScheduledStep], elapsed: Duration) -> impl Iterator<Item = EntranceStep> + '_ {
    steps
        .iter()
        .filter(move |s| s.at <= elapsed)
        .map(|s| s.step)
}

/// Presentation of a single item during the entrance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemPresence {
    pub opacity: f32,
    /// Downward offset in logical pixels
    pub offset: f32,
}

impl ItemPresence {
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        offset: ITEM_OFFSET,
    };
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        offset: 0.0,
    };

    fn at(progress: f32) -> Self {
        let progress = progress.clamp(0.0, 1.0);
        Self {
            opacity: progress,
            offset: ITEM_OFFSET * (1.0 - progress),
        }
    }
}

fn fade_easing() -> Easing {
    Easing::EASE_OUT.with_duration(ITEM_FADE)
}

/// Fade-in animations for every item of the sequence
#[derive(Debug)]
pub struct ItemFades {
    fades: Vec<Animated<f32>>,
}

impl ItemFades {
    pub fn new(item_count: usize) -> Self {
        Self {
            fades: (0..item_count)
                .map(|_| Animated::transition(0.0, fade_easing()))
                .collect(),
        }
    }

    /// Start the fade of item `index`
    pub fn reveal(&mut self, index: usize) {
        if let Some(fade) = self.fades.get_mut(index) {
            fade.update(1.0.into());
        }
    }

    /// Current presence of item `index`
    pub fn presence(&self, index: usize) -> ItemPresence {
        self.fades
            .get(index)
            .map(|fade| ItemPresence::at(*fade.value()))
            .unwrap_or(ItemPresence::VISIBLE)
    }

    /// Whether item `index` has been told to appear
    #[cfg(test)]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.fades.get(index).is_some_and(|fade| *fade.target() > 0.0)
    }

    pub fn is_animating(&self) -> bool {
        self.fades.iter().any(|fade| fade.is_animating())
    }

    pub fn tick(&mut self, now: Instant) {
        for fade in &mut self.fades {
            fade.tick(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn schedule_staggers_reveals_then_finishes() {
        let steps = schedule(3);
        assert_eq!(
            steps,
            vec![
                ScheduledStep { at: ms(0), step: EntranceStep::Reveal(0) },
                ScheduledStep { at: ms(80), step: EntranceStep::Reveal(1) },
                ScheduledStep { at: ms(160), step: EntranceStep::Reveal(2) },
                ScheduledStep { at: ms(540), step: EntranceStep::Finish },
            ]
        );
    }

    #[test]
    fn all_reveals_due_one_ms_after_last_slot() {
        let n = 8;
        let steps = schedule(n);
        let elapsed = STAGGER * (n as u32 - 1) + ms(1);
        let revealed: Vec<_> = due(&steps, elapsed)
            .filter_map(|s| match s {
                EntranceStep::Reveal(i) => Some(i),
                EntranceStep::Finish => None,
            })
            .collect();
        assert_eq!(revealed, (0..n).collect::<Vec<_>>());
        assert!(!due(&steps, elapsed).any(|s| s == EntranceStep::Finish));
    }

    #[test]
    fn finish_due_at_total_duration() {
        let steps = schedule(8);
        assert_eq!(total_duration(8), ms(940));
        assert!(!due(&steps, ms(939)).any(|s| s == EntranceStep::Finish));
        assert!(due(&steps, ms(940)).any(|s| s == EntranceStep::Finish));
    }

    #[test]
    fn empty_sequence_only_finishes() {
        assert_eq!(
            schedule(0),
            vec![ScheduledStep { at: SETTLE, step: EntranceStep::Finish }]
        );
    }

    #[test]
    fn unrevealed_items_are_hidden_and_offset() {
        let fades = ItemFades::new(2);
        assert_eq!(fades.presence(0), ItemPresence::HIDDEN);
        assert!(!fades.is_revealed(1));
    }

    #[test]
    fn reveal_targets_full_opacity() {
        let mut fades = ItemFades::new(2);
        fades.reveal(1);
        assert!(fades.is_revealed(1));
        assert!(!fades.is_revealed(0));
        // Out-of-range reveals are ignored
        fades.reveal(7);
        assert_eq!(fades.presence(7), ItemPresence::VISIBLE);
    }

    #[test]
    fn presence_interpolates_offset() {
        let half = ItemPresence::at(0.5);
        assert_eq!(half.opacity, 0.5);
        assert_eq!(half.offset, ITEM_OFFSET / 2.0);
    }
}
