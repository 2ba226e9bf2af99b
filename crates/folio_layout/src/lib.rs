//! Folio render tree and animated components
//!
//! Components render into a plain [`Element`] tree sampled at a point in
//! time; [`html`] turns that tree into an HTML or JSON snapshot.
//!
//! - [`LetterReveal`]: staggered per-character spring entrance, once in view
//! - [`ParallaxSection`]: content translated 0% to 30% with scroll progress
//! - [`Motion`]: single-element entrance on mount or in view

pub mod element;
pub mod html;
pub mod in_view;
pub mod letter_reveal;
pub mod motion;
pub mod parallax;

pub use element::{
    div, el, icon, span, text, Display, Element, Length, Node, Position, Style, Tag, WhiteSpace,
};
pub use html::{render_html, to_json, HtmlRenderer};
pub use in_view::InViewTrigger;
pub use letter_reveal::{Letter, LetterReveal, RevealFrame, NBSP};
pub use motion::{Motion, MotionStart};
pub use parallax::{ParallaxSection, PARALLAX_RANGE};

/// Common imports for building pages
pub mod prelude {
    pub use crate::element::{div, el, icon, span, text, Element, Length, Node, Tag};
    pub use crate::letter_reveal::LetterReveal;
    pub use crate::motion::Motion;
    pub use crate::parallax::ParallaxSection;
}
