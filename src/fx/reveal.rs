//! Hero reveal scheduling
//!
//! Once the loader hands off, hero words get the `revealed` class on a
//! linear stagger and every animated element inside the hero section gets
//! `in-view` after its own delay attribute.

use super::attr::parse_delay;

/// Class added to hero words
pub const REVEALED_CLASS: &str = "revealed";
/// Class added to animated elements
pub const IN_VIEW_CLASS: &str = "in-view";

/// Which hero element a reveal applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTarget {
    /// Index into the hero words, in document order
    Word(usize),
    /// Index into the animated elements inside the hero section
    Animated(usize),
}

/// A class to add after a delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub target: RevealTarget,
    pub class: &'static str,
    pub delay_ms: u32,
}

/// Stagger delays for `count` hero words
pub fn word_delays(count: usize, step_ms: u32) -> impl Iterator<Item = u32> {
    (0..count).map(move |i| (i as u32).saturating_mul(step_ms))
}

/// Full reveal plan for the hero section.
///
/// `animated_delays` holds the raw delay attribute of each animated hero
/// element, in document order.
pub fn hero_reveal_schedule(
    word_count: usize,
    step_ms: u32,
    animated_delays: &[Option<&str>],
) -> Vec<Reveal> {
    let words = word_delays(word_count, step_ms)
        .enumerate()
        .map(|(i, delay_ms)| Reveal {
            target: RevealTarget::Word(i),
            class: REVEALED_CLASS,
            delay_ms,
        });

    let animated = animated_delays.iter().enumerate().map(|(i, raw)| Reveal {
        target: RevealTarget::Animated(i),
        class: IN_VIEW_CLASS,
        delay_ms: parse_delay(*raw),
    });

    words.chain(animated).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_delays_linear() {
        let delays: Vec<u32> = word_delays(4, 180).collect();
        assert_eq!(delays, vec![0, 180, 360, 540]);
    }

    #[test]
    fn test_schedule_uses_literal_delays() {
        let plan = hero_reveal_schedule(2, 180, &[Some("400"), None, Some("fast")]);
        assert_eq!(plan.len(), 5);
        assert_eq!(
            plan[1],
            Reveal {
                target: RevealTarget::Word(1),
                class: REVEALED_CLASS,
                delay_ms: 180
            }
        );
        assert_eq!(plan[2].target, RevealTarget::Animated(0));
        assert_eq!(plan[2].delay_ms, 400);
        assert_eq!(plan[3].delay_ms, 0);
        assert_eq!(plan[4].delay_ms, 0);
        assert!(plan[2..].iter().all(|r| r.class == IN_VIEW_CLASS));
    }
}
