//! Section geometry
//!
//! The page is a fixed vertical sequence: a full-viewport hero, the about
//! section, the skills section and the footer. Bounds are in document
//! coordinates and feed the in-view triggers and the document height.

use folio_core::Rect;
use serde::Serialize;

use crate::config::SiteConfig;

/// Horizontal cap on content width
const MAX_CONTENT_WIDTH: f32 = 896.0;
const CONTENT_PADDING: f32 = 16.0;
const SECTION_PADDING: f32 = 96.0;

const GREETING_HEIGHT: f32 = 72.0;
const TAGLINE_HEIGHT: f32 = 36.0;
const LINKS_HEIGHT: f32 = 40.0;
const HEADING_HEIGHT: f32 = 40.0;
const HEADING_GAP: f32 = 48.0;

const BADGE_HEIGHT: f32 = 44.0;
const BADGE_GAP: f32 = 12.0;
const BADGE_PADDING: f32 = 32.0;
const BADGE_CHAR_WIDTH: f32 = 9.0;

/// Bounds of every observed region of the page
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PageLayout {
    pub hero: Rect,
    pub greeting: Rect,
    pub tagline: Rect,
    pub links: Rect,
    pub about: Rect,
    pub skills: Rect,
    pub skills_title: Rect,
    /// One per skill, in order
    pub badges: Vec<Rect>,
    pub footer: Rect,
    pub document_height: f32,
}

impl PageLayout {
    pub fn compute(config: &SiteConfig, width: f32, height: f32) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let layout = &config.layout;

        let content_width = (width.min(MAX_CONTENT_WIDTH) - 2.0 * CONTENT_PADDING).max(0.0);
        let content_left = (width - content_width) / 2.0;
        let centered = |y: f32, h: f32| Rect::new(content_left, y.max(0.0), content_width, h);

        let hero = Rect::new(0.0, 0.0, width, height);
        let mid = height / 2.0;
        let greeting = centered(mid - 100.0, GREETING_HEIGHT);
        let tagline = centered(mid - 12.0, TAGLINE_HEIGHT);
        let links = centered(mid + 56.0, LINKS_HEIGHT);

        let about = Rect::new(0.0, hero.bottom(), width, layout.about_height.max(0.0));

        let skills_top = about.bottom();
        let skills_title = centered(skills_top + SECTION_PADDING, HEADING_HEIGHT);
        let badges = flow_badges(
            &config.skills,
            content_left,
            content_width,
            skills_title.bottom() + HEADING_GAP,
        );
        let badges_bottom = badges
            .iter()
            .map(Rect::bottom)
            .fold(skills_title.bottom(), f32::max);
        let skills_height = layout
            .skills_height
            .max(badges_bottom + SECTION_PADDING - skills_top);
        let skills = Rect::new(0.0, skills_top, width, skills_height);

        let footer = Rect::new(0.0, skills.bottom(), width, layout.footer_height.max(0.0));

        Self {
            hero,
            greeting,
            tagline,
            links,
            about,
            skills,
            skills_title,
            badges,
            footer,
            document_height: footer.bottom(),
        }
    }
}

/// Lay badges out left to right, wrapping at the content width
fn flow_badges(skills: &[String], left: f32, width: f32, top: f32) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(skills.len());
    let (mut x, mut y) = (left, top);

    for skill in skills {
        let badge_width = BADGE_PADDING + BADGE_CHAR_WIDTH * skill.chars().count() as f32;
        if x > left && x + badge_width > left + width {
            x = left;
            y += BADGE_HEIGHT + BADGE_GAP;
        }
        rects.push(Rect::new(x, y, badge_width, BADGE_HEIGHT));
        x += badge_width + BADGE_GAP;
    }

    rects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_stack_vertically() {
        let config = SiteConfig::default();
        let layout = PageLayout::compute(&config, 1280.0, 800.0);

        assert_eq!(layout.hero, Rect::new(0.0, 0.0, 1280.0, 800.0));
        assert_eq!(layout.about.y(), 800.0);
        assert_eq!(layout.skills.y(), layout.about.bottom());
        assert_eq!(layout.footer.y(), layout.skills.bottom());
        assert_eq!(layout.document_height, layout.footer.bottom());
        assert_eq!(layout.badges.len(), config.skills.len());
    }

    #[test]
    fn test_hero_content_inside_hero() {
        let layout = PageLayout::compute(&SiteConfig::default(), 1280.0, 800.0);
        for rect in [layout.greeting, layout.tagline, layout.links] {
            assert!(rect.intersects(&layout.hero));
        }
    }

    #[test]
    fn test_badges_wrap_on_narrow_viewports() {
        let config = SiteConfig::default();
        let wide = PageLayout::compute(&config, 1280.0, 800.0);
        let narrow = PageLayout::compute(&config, 320.0, 640.0);

        let rows = |l: &PageLayout| {
            let mut ys: Vec<f32> = l.badges.iter().map(|r| r.y()).collect();
            ys.dedup();
            ys.len()
        };
        assert_eq!(rows(&wide), 1);
        assert!(rows(&narrow) > 1);
        assert!(narrow.skills.height() >= config.layout.skills_height);
        for badge in &narrow.badges {
            assert!(badge.bottom() <= narrow.skills.bottom());
        }
    }

    #[test]
    fn test_zero_size_viewport() {
        let layout = PageLayout::compute(&SiteConfig::default(), 0.0, 0.0);
        assert_eq!(layout.hero.height(), 0.0);
        assert_eq!(layout.about.y(), 0.0);
    }
}
