//! Page shell
//!
//! Owns the page-level state (theme, scroll position, mounted flag), the
//! animated components, and the listener registrations that keep them in
//! sync with the viewport. Every registration is taken on [`PageShell::mount`]
//! and released on [`PageShell::unmount`].

use std::cell::Cell;
use std::rc::{Rc, Weak};

use chrono::Datelike;
use folio_animation::{Clock, SharedClock, Variants};
use folio_core::{
    event_types, shared_graph, DirtyFlag, Effect, ListenerGuard, SharedReactiveGraph,
    SharedViewport, Size, State, Viewport,
};
use folio_layout::{
    div, el, icon, span, Element, Length, LetterReveal, Motion, ParallaxSection, Tag,
};
use folio_theme::{ColorScheme, ThemePreference, ThemeState};

use crate::blobs::BlobField;
use crate::config::SiteConfig;
use crate::error::Result;
use crate::sections::PageLayout;

/// Duration of the hero entrance
const HERO_ENTRANCE: f32 = 0.8;
/// Delay and duration of the links row fade
const LINKS_DELAY: f32 = 1.0;
const LINKS_FADE: f32 = 0.8;
/// Per-badge delay step and duration
const BADGE_STAGGER: f32 = 0.1;
const BADGE_ENTRANCE: f32 = 0.5;
const ICON_SIZE: f32 = 20.0;

/// Current calendar year (UTC)
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

pub struct PageShell {
    config: Rc<SiteConfig>,
    preference: Rc<dyn ThemePreference>,
    graph: SharedReactiveGraph,
    dirty: DirtyFlag,
    clock: SharedClock,

    theme: State<ColorScheme>,
    scroll_y: State<f32>,
    mounted: State<bool>,

    greeting: LetterReveal,
    tagline: LetterReveal,
    skills_title: LetterReveal,
    hero_entrance: Motion,
    links_entrance: Motion,
    badges: Vec<Motion>,
    about: ParallaxSection,
    blobs: BlobField,
    year: i32,

    viewport: Option<SharedViewport>,
    scroll_listener: Option<ListenerGuard>,
    resize_listener: Option<ListenerGuard>,
    theme_logger: Option<Effect>,
    /// Theme changes seen by the logger effect
    theme_changes: Rc<Cell<u32>>,
}

impl PageShell {
    /// Create an unmounted page; the initial theme comes from `preference`
    pub fn new(config: SiteConfig, preference: Rc<dyn ThemePreference>) -> Self {
        let graph = shared_graph();
        let dirty: DirtyFlag = Rc::default();

        let theme = State::create(&graph, &dirty, preference.get_theme());
        let scroll_y = State::create(&graph, &dirty, 0.0f32);
        let mounted = State::create(&graph, &dirty, false);

        let profile = &config.profile;
        let greeting = LetterReveal::new(profile.greeting.as_str());
        let tagline =
            LetterReveal::new(profile.tagline.as_str()).delay(config.layout.tagline_delay);
        let skills_title = LetterReveal::new(profile.skills_title.as_str());

        let badges = (0..config.skills.len())
            .map(|i| {
                Motion::in_view(
                    Variants::fade_up(BADGE_ENTRANCE).with_delay(i as f32 * BADGE_STAGGER),
                )
            })
            .collect();

        let about = ParallaxSection::new(&graph, scroll_y.signal());
        let year = config.layout.year.unwrap_or_else(current_year);

        Self {
            config: Rc::new(config),
            preference,
            graph,
            dirty,
            clock: Clock::shared(),
            theme,
            scroll_y,
            mounted,
            greeting,
            tagline,
            skills_title,
            hero_entrance: Motion::on_mount(Variants::fade_up(HERO_ENTRANCE)),
            links_entrance: Motion::on_mount(Variants::fade(LINKS_FADE).with_delay(LINKS_DELAY)),
            badges,
            about,
            blobs: BlobField::default(),
            year,
            viewport: None,
            scroll_listener: None,
            resize_listener: None,
            theme_logger: None,
            theme_changes: Rc::default(),
        }
    }

    /// Override the footer year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Attach to a viewport and start tracking it
    pub fn mount(&mut self, viewport: &SharedViewport) {
        if self.is_mounted() {
            self.unmount();
        }
        self.viewport = Some(Rc::clone(viewport));

        let layout = self.layout();
        viewport.set_document_height(layout.document_height);
        self.scroll_y.set(viewport.scroll_y());

        let scroll = self.scroll_y.clone();
        self.scroll_listener = Some(viewport.add_listener(event_types::SCROLL, move |ctx| {
            scroll.set(ctx.scroll_y);
        }));

        let config = Rc::clone(&self.config);
        let weak_viewport = Rc::downgrade(viewport);
        self.resize_listener = Some(viewport.add_listener(event_types::RESIZE, move |ctx| {
            let layout = PageLayout::compute(&config, ctx.viewport_width, ctx.viewport_height);
            if let Some(viewport) = weak_viewport.upgrade() {
                viewport.set_document_height(layout.document_height);
            }
        }));

        // The about section starts right below the full-height hero.
        self.about.mount(viewport, hero_bottom(Rc::downgrade(viewport)));

        let theme_signal = self.theme.signal();
        let changes = Rc::clone(&self.theme_changes);
        let mut last_theme: Option<ColorScheme> = None;
        let effect = self.graph.borrow_mut().create_effect(move |g| {
            let scheme = g.get(theme_signal).unwrap_or_default();
            if last_theme.is_some_and(|last| last != scheme) {
                changes.set(changes.get() + 1);
                tracing::info!(theme = %scheme, "changing theme");
            }
            last_theme = Some(scheme);
        });
        self.theme_logger = Some(effect);

        let layout_config = &self.config.layout;
        self.blobs = BlobField::generate(layout_config.blob_count, layout_config.blob_seed);

        let now = self.clock.now();
        self.hero_entrance.mount(now);
        self.links_entrance.mount(now);
        self.mounted.set_rebuild(true);
        tracing::debug!(
            width = viewport.width(),
            height = viewport.height(),
            document_height = layout.document_height,
            "page mounted"
        );

        self.observe();
    }

    /// Detach from the viewport, releasing every listener
    pub fn unmount(&mut self) {
        if !self.is_mounted() {
            return;
        }
        self.scroll_listener = None;
        self.resize_listener = None;
        self.about.unmount();
        if let Some(effect) = self.theme_logger.take() {
            self.graph.borrow_mut().dispose_effect(effect);
        }
        self.viewport = None;
        self.mounted.set_rebuild(false);
        tracing::debug!("page unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    /// Advance animation time and re-check viewport entry
    pub fn tick(&mut self, dt: f32) {
        self.clock.tick(dt);
        self.observe();
    }

    fn observe(&mut self) {
        let Some(viewport) = self.viewport.clone() else {
            return;
        };
        let layout = self.layout();
        let now = self.clock.now();

        self.greeting.observe(&layout.greeting, &viewport, now);
        self.tagline.observe(&layout.tagline, &viewport, now);
        self.skills_title.observe(&layout.skills_title, &viewport, now);
        for (i, (badge, bounds)) in self.badges.iter_mut().zip(&layout.badges).enumerate() {
            if badge.observe(bounds, &viewport, now) {
                tracing::trace!(index = i, "skill badge entering");
            }
        }
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Flip between light and dark and persist the choice
    pub fn toggle_theme(&mut self) -> Result<ColorScheme> {
        let next = self.theme().toggle();
        self.preference.set_theme(next)?;
        self.theme.set_rebuild(next);
        Ok(next)
    }

    pub fn theme(&self) -> ColorScheme {
        self.theme.get()
    }

    pub fn theme_state(&self) -> ThemeState {
        ThemeState::new(self.theme())
    }

    /// Number of theme changes logged while mounted
    pub fn theme_changes(&self) -> u32 {
        self.theme_changes.get()
    }

    /// Last scroll position reported by the viewport
    pub fn scroll_y(&self) -> f32 {
        self.scroll_y.get()
    }

    /// Animation time in seconds
    pub fn now(&self) -> f32 {
        self.clock.now()
    }

    /// Whether a state change since the last call altered tree structure
    pub fn take_rebuild(&self) -> bool {
        self.dirty.replace(false)
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport
            .as_ref()
            .map_or_else(Size::default, |v| v.size())
    }

    /// Section bounds for the current viewport size
    pub fn layout(&self) -> PageLayout {
        let size = self.viewport_size();
        PageLayout::compute(&self.config, size.width, size.height)
    }

    pub fn greeting(&self) -> &LetterReveal {
        &self.greeting
    }

    pub fn tagline(&self) -> &LetterReveal {
        &self.tagline
    }

    pub fn skills_title(&self) -> &LetterReveal {
        &self.skills_title
    }

    pub fn badges(&self) -> &[Motion] {
        &self.badges
    }

    pub fn about(&self) -> &ParallaxSection {
        &self.about
    }

    pub fn blobs(&self) -> &BlobField {
        &self.blobs
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render the whole page at the current animation time
    pub fn render(&self) -> Element {
        let theme = self.theme_state();
        let colors = theme.colors();
        let now = self.clock.now();

        el(Tag::Main)
            .class("page")
            .class(theme.scheme().as_str())
            .relative()
            .overflow_hidden()
            .bg(colors.background)
            .color(colors.text_primary)
            .child(self.render_header())
            .child(self.render_hero(now))
            .child(self.render_about())
            .child(self.render_skills(now))
            .child(self.render_footer())
    }

    fn render_header(&self) -> Element {
        let header = el(Tag::Header).class("page-header").absolute();
        if !self.is_mounted() {
            return header;
        }

        // Sun offers the way back to light; moon offers dark.
        let symbol = match self.theme() {
            ColorScheme::Dark => "sun",
            ColorScheme::Light => "moon",
        };
        header.child(
            el(Tag::Button)
                .id("theme-toggle")
                .class("theme-toggle")
                .attr("aria-label", "Toggle theme")
                .rounded_full()
                .child(icon(symbol, ICON_SIZE)),
        )
    }

    fn render_hero(&self, now: f32) -> Element {
        let colors = *self.theme_state().colors();
        let height = self.viewport_size().height;

        let heading = self.hero_entrance.apply(
            div()
                .class("hero-heading")
                .child(el(Tag::H1).id("greeting").child(self.greeting.render(now)))
                .child(
                    el(Tag::P)
                        .id("tagline")
                        .color(colors.text_muted)
                        .child(self.tagline.render(now)),
                ),
            now,
        );

        let links = self.config.links.iter().map(|link| {
            el(Tag::A)
                .external_link(link.url.as_str())
                .attr("aria-label", link.label.as_str())
                .child(
                    el(Tag::Button)
                        .class("icon-button")
                        .child(icon(&link.icon, ICON_SIZE)),
                )
        });
        let links_row = self
            .links_entrance
            .apply(div().id("links").class("links").flex().children(links), now);

        el(Tag::Section)
            .id("hero")
            .relative()
            .overflow_hidden()
            .h(Length::Px(height))
            .child(div().class("hero-content").child(heading).child(links_row))
            .child(self.blobs.render(self.scroll_y(), colors.primary_subtle))
    }

    fn render_about(&self) -> Element {
        let profile = &self.config.profile;
        let colors = *self.theme_state().colors();

        let title = match &profile.about_url {
            Some(url) => el(Tag::A)
                .external_link(url.as_str())
                .color(colors.text_link)
                .child(profile.about_title.as_str()),
            None => span().child(profile.about_title.as_str()),
        };
        let heading = el(Tag::H2)
            .class("about-title")
            .relative()
            .inline_block()
            .child(title)
            .child(
                span()
                    .class("underline")
                    .absolute()
                    .bg(colors.primary_highlight),
            );

        let paragraphs = profile.about.iter().map(|paragraph| {
            el(Tag::P)
                .class("about-text")
                .color(colors.text_muted)
                .child(paragraph.as_str())
        });

        let mut outro = el(Tag::P)
            .class("about-outro")
            .color(colors.text_muted)
            .child(format!("{} ", profile.outro));
        outro = match &profile.outro_url {
            Some(url) => outro.child(
                el(Tag::A)
                    .external_link(url.as_str())
                    .color(colors.text_link)
                    .child(profile.outro_link_label.as_str()),
            ),
            None => outro.child(profile.outro_link_label.as_str()),
        };

        let content = div()
            .id("about")
            .class("about")
            .child(heading)
            .children(paragraphs)
            .child(outro.child("."));

        self.about.render(content)
    }

    fn render_skills(&self, now: f32) -> Element {
        let colors = *self.theme_state().colors();

        let badges = self.config.skills.iter().zip(&self.badges).map(|(skill, motion)| {
            motion.apply(
                div().class("badge-slot").child(
                    span()
                        .class("badge")
                        .bg(colors.badge_bg)
                        .color(colors.badge_text)
                        .child(skill.as_str()),
                ),
                now,
            )
        });

        el(Tag::Section)
            .id("skills")
            .relative()
            .child(el(Tag::H2).id("skills-title").child(self.skills_title.render(now)))
            .child(div().class("badges").flex().children(badges))
    }

    fn render_footer(&self) -> Element {
        let colors = *self.theme_state().colors();
        el(Tag::Footer).id("footer").child(
            el(Tag::P)
                .color(colors.text_muted)
                .child(format!("\u{00A9} {} {}", self.year, self.config.profile.footer)),
        )
    }
}

/// Offset provider for the about section: the bottom of the hero, which
/// is one viewport height tall
fn hero_bottom(viewport: Weak<Viewport>) -> impl Fn() -> f32 {
    move || viewport.upgrade().map_or(0.0, |v| v.height())
}

impl Drop for PageShell {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl std::fmt::Debug for PageShell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageShell")
            .field("mounted", &self.is_mounted())
            .field("theme", &self.theme())
            .field("scroll_y", &self.scroll_y())
            .field("now", &self.now())
            .finish()
    }
}
