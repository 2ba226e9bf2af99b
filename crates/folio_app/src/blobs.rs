//! Floating decorative circles behind the hero
//!
//! Sizes, positions and scroll speeds are drawn from a seeded generator
//! once per mount, so repeated renders of a page are identical.

use folio_core::Color;
use folio_layout::{div, Element, Length};

pub const BLOB_OPACITY: f32 = 0.7;

/// One decorative circle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Blob {
    /// Pixels, 50..150
    pub width: f32,
    pub height: f32,
    /// Percent of the hero, 0..100
    pub left: f32,
    pub top: f32,
    /// Fraction of the scroll position it drifts by, 0.1..0.3
    pub speed: f32,
}

impl Blob {
    fn random(rng: &mut fastrand::Rng) -> Self {
        Self {
            width: rng.f32() * 100.0 + 50.0,
            height: rng.f32() * 100.0 + 50.0,
            left: rng.f32() * 100.0,
            top: rng.f32() * 100.0,
            speed: 0.1 + rng.f32() * 0.2,
        }
    }

    /// Vertical drift in pixels for a scroll position
    pub fn offset(&self, scroll_y: f32) -> f32 {
        scroll_y * self.speed
    }

    pub fn render(&self, scroll_y: f32, fill: Color) -> Element {
        div()
            .class("blob")
            .absolute()
            .rounded_full()
            .w(Length::Px(self.width))
            .h(Length::Px(self.height))
            .left(Length::Percent(self.left))
            .top(Length::Percent(self.top))
            .bg(fill)
            .opacity(BLOB_OPACITY)
            .translate_y(Length::Px(self.offset(scroll_y)))
    }
}

/// The full set of blobs for one mount
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlobField {
    blobs: Vec<Blob>,
}

impl BlobField {
    pub fn generate(count: usize, seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        let blobs = (0..count).map(|_| Blob::random(&mut rng)).collect();
        Self { blobs }
    }

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    pub fn render(&self, scroll_y: f32, fill: Color) -> Element {
        div()
            .class("blobs")
            .attr("aria-hidden", "true")
            .absolute()
            .overflow_hidden()
            .children(self.blobs.iter().map(|b| b.render(scroll_y, fill)))
    }
}
