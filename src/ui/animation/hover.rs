//! Exclusive hover tracking
//!
//! At most one sidebar element is under the cursor, so only two animations
//! are ever alive: the element being hovered (fading in) and the one that was
//! just left (fading out).

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Hover transition duration
const HOVER_DURATION: Duration = Duration::from_millis(200);

fn hover_easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

#[derive(Debug)]
struct Slot<K> {
    key: K,
    anim: Animated<f32>,
}

/// Hover progress for a set of mutually exclusive elements
#[derive(Debug)]
pub struct HoverAnimations<K: Eq + Copy> {
    entering: Option<Slot<K>>,
    leaving: Option<Slot<K>>,
}

impl<K: Eq + Copy> Default for HoverAnimations<K> {
    fn default() -> Self {
        Self {
            entering: None,
            leaving: None,
        }
    }
}

impl<K: Eq + Copy> HoverAnimations<K> {
    /// Move the hover to `key`, or clear it with `None`
    pub fn hover(&mut self, key: Option<K>) {
        if self.entering.as_ref().map(|s| s.key) == key {
            return;
        }

        if let Some(previous) = self.entering.take() {
            let mut anim = Animated::transition(*previous.anim.value(), hover_easing());
            anim.update(0.0.into());
            self.leaving = Some(Slot {
                key: previous.key,
                anim,
            });
        }

        self.entering = key.map(|key| {
            // Re-entering the element that is still fading out resumes from its value
            let start = match &self.leaving {
                Some(slot) if slot.key == key => *slot.anim.value(),
                _ => 0.0,
            };
            let mut anim = Animated::transition(start, hover_easing());
            anim.update(1.0.into());
            Slot { key, anim }
        });

        if let (Some(entering), Some(leaving)) = (&self.entering, &self.leaving) {
            if entering.key == leaving.key {
                self.leaving = None;
            }
        }
    }

    /// Hover progress in `[0, 1]`
    pub fn progress(&self, key: K) -> f32 {
        [&self.entering, &self.leaving]
            .into_iter()
            .flatten()
            .find(|slot| slot.key == key)
            .map(|slot| *slot.anim.value())
            .unwrap_or(0.0)
    }

    /// Element currently under the cursor
    pub fn hovered(&self) -> Option<K> {
        self.entering.as_ref().map(|s| s.key)
    }

    pub fn is_animating(&self) -> bool {
        [&self.entering, &self.leaving]
            .into_iter()
            .flatten()
            .any(|slot| slot.anim.is_animating())
    }

    /// Advance both animations and drop a finished fade-out
    pub fn tick(&mut self, now: Instant) {
        if let Some(slot) = &mut self.entering {
            slot.anim.tick(now);
        }
        if let Some(slot) = &mut self.leaving {
            slot.anim.tick(now);
            if !slot.anim.is_animating() {
                self.leaving = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_hovered_by_default() {
        let anims: HoverAnimations<u8> = HoverAnimations::default();
        assert_eq!(anims.hovered(), None);
        assert_eq!(anims.progress(1), 0.0);
        assert!(!anims.is_animating());
    }

    #[test]
    fn hover_is_exclusive() {
        let mut anims: HoverAnimations<u8> = HoverAnimations::default();
        anims.hover(Some(1));
        assert_eq!(anims.hovered(), Some(1));
        anims.hover(Some(2));
        assert_eq!(anims.hovered(), Some(2));
        anims.hover(None);
        assert_eq!(anims.hovered(), None);
    }

    #[test]
    fn progress_stays_in_range() {
        let mut anims: HoverAnimations<u8> = HoverAnimations::default();
        anims.hover(Some(3));
        anims.tick(Instant::now() + Duration::from_millis(100));
        let p = anims.progress(3);
        assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn returning_to_leaving_element_keeps_single_slot() {
        let mut anims: HoverAnimations<u8> = HoverAnimations::default();
        anims.hover(Some(1));
        anims.hover(Some(2));
        anims.hover(Some(1));
        assert_eq!(anims.hovered(), Some(1));
        assert!(anims.leaving.as_ref().is_some_and(|s| s.key == 2));
    }
}
