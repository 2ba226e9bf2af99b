//! Letter-by-letter text reveal
//!
//! Splits a string into characters and reveals each one with a spring
//! entrance, staggered in time. The container fades in with a short tween
//! while its letters start `0.03s` apart after an initial
//! `delay × multiplier`. The reveal starts the first time the text enters
//! the viewport and never replays.
//!
//! ```
//! use folio_core::{Rect, Viewport};
//! use folio_layout::LetterReveal;
//!
//! let mut reveal = LetterReveal::new("Hi").delay(0.5);
//! assert_eq!(reveal.len(), 2);
//! assert!((reveal.delay_for(1) - 0.53).abs() < 1e-6);
//!
//! let viewport = Viewport::new(800.0, 600.0);
//! assert!(reveal.observe(&Rect::new(0.0, 100.0, 200.0, 40.0), &viewport, 0.0));
//! let frame = reveal.sample(5.0);
//! assert!(frame.settled);
//! ```

use folio_animation::{MotionProps, StaggerConfig, Variants, LETTER_STAGGER};
use folio_core::{Rect, Viewport};
use serde::Serialize;

use crate::element::{span, Element, WhiteSpace};
use crate::in_view::InViewTrigger;

/// Rendered in place of a literal space so it keeps its width
pub const NBSP: char = '\u{00A0}';

/// One character of the revealed text
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Letter {
    /// Position in the source text; stable identity for the letter
    pub index: usize,
    pub ch: char,
}

impl Letter {
    pub fn is_space(&self) -> bool {
        self.ch == ' '
    }

    /// The character as displayed
    pub fn display(&self) -> char {
        if self.is_space() {
            NBSP
        } else {
            self.ch
        }
    }

    pub fn white_space(&self) -> WhiteSpace {
        if self.is_space() {
            WhiteSpace::Pre
        } else {
            WhiteSpace::Normal
        }
    }
}

/// Sampled state of a reveal at one instant
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RevealFrame {
    pub container: MotionProps,
    pub letters: Vec<MotionProps>,
    /// Every transition has finished
    pub settled: bool,
}

#[derive(Clone, Debug)]
pub struct LetterReveal {
    text: String,
    letters: Vec<Letter>,
    delay: f32,
    multiplier: f32,
    container: Variants,
    letter: Variants,
    trigger: InViewTrigger,
}

impl LetterReveal {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let letters = text
            .chars()
            .enumerate()
            .map(|(index, ch)| Letter { index, ch })
            .collect();

        Self {
            text,
            letters,
            delay: 0.0,
            multiplier: 1.0,
            container: Variants::container(),
            letter: Variants::letter(),
            trigger: InViewTrigger::once(),
        }
    }

    /// Base delay before the first letter, in seconds
    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Scale applied to the base delay
    pub fn multiplier(mut self, multiplier: f32) -> Self {
        self.multiplier = multiplier.max(0.0);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Stagger applied to the letters
    pub fn stagger(&self) -> StaggerConfig {
        StaggerConfig::new(LETTER_STAGGER).delay_children(self.delay * self.multiplier)
    }

    /// Start offset of a letter relative to the trigger
    pub fn delay_for(&self, index: usize) -> f32 {
        self.stagger().delay_for_index(index)
    }

    /// Check viewport entry; returns true when this call starts the reveal
    pub fn observe(&mut self, bounds: &Rect, viewport: &Viewport, now: f32) -> bool {
        let fired = self.trigger.observe(bounds, viewport, now);
        if fired {
            tracing::debug!(text = %self.text, at = now, "letter reveal triggered");
        }
        fired
    }

    pub fn is_triggered(&self) -> bool {
        self.trigger.is_triggered()
    }

    pub fn triggered_at(&self) -> Option<f32> {
        self.trigger.triggered_at()
    }

    /// Sample the container and every letter at time `now`
    pub fn sample(&self, now: f32) -> RevealFrame {
        let elapsed = self.trigger.elapsed(now);
        let container = self.container.sample(elapsed, 0.0);

        let mut settled = self.container.is_settled(elapsed, 0.0);
        let letters = self
            .letters
            .iter()
            .map(|letter| {
                let extra_delay = self.delay_for(letter.index);
                settled &= self.letter.is_settled(elapsed, extra_delay);
                self.letter.sample(elapsed, extra_delay)
            })
            .collect();

        RevealFrame {
            container,
            letters,
            settled,
        }
    }

    pub fn render(&self, now: f32) -> Element {
        let frame = self.sample(now);

        let letters = self.letters.iter().zip(frame.letters).map(|(letter, props)| {
            span()
                .class("letter")
                .inline_block()
                .white_space(letter.white_space())
                .motion(props)
                .child(letter.display().to_string())
        });

        span()
            .class("letter-reveal")
            .attr("aria-label", self.text.as_str())
            .inline_block()
            .opacity(frame.container.display_opacity())
            .children(letters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_animation::HIDDEN_OFFSET_Y;

    fn visible_bounds() -> Rect {
        Rect::new(0.0, 10.0, 400.0, 60.0)
    }

    #[test]
    fn test_preserves_order_and_count() {
        let reveal = LetterReveal::new("Hello, wörld 👋");
        let rebuilt: String = reveal.letters().iter().map(|l| l.ch).collect();
        assert_eq!(rebuilt, "Hello, wörld 👋");
        assert_eq!(reveal.len(), "Hello, wörld 👋".chars().count());
    }

    #[test]
    fn test_space_renders_as_nbsp() {
        let reveal = LetterReveal::new("a b");
        let el = reveal.render(0.0);
        let units: Vec<&Element> = el.child_elements().collect();

        assert_eq!(units.len(), 3);
        assert_eq!(units[0].text_content(), "a");
        assert_eq!(units[1].text_content(), "\u{00A0}");
        assert_eq!(units[1].style.white_space, Some(WhiteSpace::Pre));
        assert_eq!(units[2].text_content(), "b");
        assert_eq!(units[2].style.white_space, Some(WhiteSpace::Normal));
    }

    #[test]
    fn test_empty_text_renders_nothing() {
        let mut reveal = LetterReveal::new("");
        assert!(reveal.is_empty());
        assert_eq!(reveal.render(0.0).children.len(), 0);

        let viewport = Viewport::new(800.0, 600.0);
        reveal.observe(&visible_bounds(), &viewport, 0.0);
        assert!(reveal.sample(1.0).settled);
    }

    #[test]
    fn test_stagger_delays() {
        let reveal = LetterReveal::new("Hi");
        assert_eq!(reveal.delay_for(0), 0.0);
        assert!((reveal.delay_for(1) - 0.03).abs() < 1e-6);

        let scaled = LetterReveal::new("abcdef").delay(0.5).multiplier(2.0);
        assert_eq!(scaled.delay_for(0), 1.0);
        assert!((scaled.delay_for(5) - 1.15).abs() < 1e-5);

        let delays: Vec<f32> = (0..scaled.len()).map(|i| scaled.delay_for(i)).collect();
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_hidden_until_triggered() {
        let reveal = LetterReveal::new("Hi");
        let frame = reveal.sample(10.0);
        assert_eq!(frame.container.opacity, 0.0);
        for props in &frame.letters {
            assert_eq!(*props, MotionProps::new(0.0, HIDDEN_OFFSET_Y));
        }
        assert!(!frame.settled);
    }

    #[test]
    fn test_triggers_once() {
        let viewport = Viewport::new(800.0, 600.0);
        viewport.set_document_height(2000.0);
        let bounds = visible_bounds();
        let mut reveal = LetterReveal::new("Hi");

        assert!(reveal.observe(&bounds, &viewport, 0.25));
        viewport.scroll_to(1000.0);
        assert!(!reveal.observe(&bounds, &viewport, 1.0));
        viewport.scroll_to(0.0);
        assert!(!reveal.observe(&bounds, &viewport, 2.0));

        assert_eq!(reveal.triggered_at(), Some(0.25));
    }

    #[test]
    fn test_later_letters_lag_behind() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut reveal = LetterReveal::new("abcdefghij");
        reveal.observe(&visible_bounds(), &viewport, 0.0);

        let frame = reveal.sample(0.1);
        assert!(frame.letters[0].opacity > frame.letters[9].opacity);
        assert_eq!(frame.letters[9], MotionProps::new(0.0, HIDDEN_OFFSET_Y));
    }

    #[test]
    fn test_settles_visible() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut reveal = LetterReveal::new("Skills").delay(0.5);
        reveal.observe(&visible_bounds(), &viewport, 1.0);

        let frame = reveal.sample(10.0);
        assert!(frame.settled);
        assert_eq!(frame.container.opacity, 1.0);
        for props in &frame.letters {
            assert!((props.opacity - 1.0).abs() < 1e-2);
            assert!(props.translate_y.abs() < 0.5);
        }

        let el = reveal.render(10.0);
        assert_eq!(el.style.opacity, Some(1.0));
        assert_eq!(el.get_attr("aria-label"), Some("Skills"));
    }
}
