use crate::dom;
use crate::selectors::*;
use folio_core::nav::SectionDescriptor;
use folio_core::{Layout, PageSnapshot, Target};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Element handles discovered once at startup. Anything the page lacks is
/// `None` or an empty list, and patches aimed at it are dropped.
pub struct PageElements {
    pub body: Option<web::HtmlElement>,
    pub navbar: Option<web::HtmlElement>,
    pub nav_menu: Option<web::HtmlElement>,
    pub hamburger: Option<web::HtmlElement>,
    pub hamburger_bars: Vec<web::HtmlElement>,
    pub nav_links: Vec<web::HtmlElement>,
    pub sections: Vec<web::HtmlElement>,
    /// Link for each entry of `sections`, same index.
    pub section_links: Vec<Option<web::HtmlElement>>,
    pub anchors: Vec<web::HtmlElement>,
    pub animatables: Vec<web::HtmlElement>,
    pub stats: Vec<web::HtmlElement>,
    pub stats_section: Option<web::HtmlElement>,
    pub cards: Vec<web::HtmlElement>,
    pub skill_tags: Vec<web::HtmlElement>,
    pub timeline_contents: Vec<Option<web::HtmlElement>>,
    pub hero: Option<web::HtmlElement>,
    pub hero_text: Option<web::HtmlElement>,
    pub hero_image: Option<web::HtmlElement>,
    pub hero_subtitle: Option<web::HtmlElement>,
    pub gradient_text: Option<web::HtmlElement>,
    pub footer_year: Option<web::HtmlElement>,
    pub back_to_top: Option<web::HtmlElement>,
}

impl PageElements {
    pub fn discover(document: &web::Document) -> Self {
        let hamburger = by_id(document, HAMBURGER_ID);
        let hamburger_bars = hamburger
            .as_ref()
            .map(|h| dom::element_query_all(h, HAMBURGER_BARS))
            .unwrap_or_default();
        let sections = dom::query_all(document, SECTIONS);
        let section_links = sections
            .iter()
            .map(|s| dom::doc_query_one(document, &nav_link_for(&s.id())))
            .collect();
        let timeline_contents = dom::query_all(document, TIMELINE_ITEMS)
            .iter()
            .map(|item| dom::query_one(item, TIMELINE_CONTENT))
            .collect();
        Self {
            body: document.body(),
            navbar: by_id(document, NAVBAR_ID),
            nav_menu: by_id(document, NAV_MENU_ID),
            hamburger,
            hamburger_bars,
            nav_links: dom::query_all(document, NAV_LINKS),
            sections,
            section_links,
            anchors: dom::query_all(document, SAME_PAGE_ANCHORS),
            animatables: dom::query_all(document, ANIMATABLE),
            stats: dom::query_all(document, STAT_VALUES),
            stats_section: dom::doc_query_one(document, STATS_SECTION),
            cards: dom::query_all(document, PROJECT_CARDS),
            skill_tags: dom::query_all(document, SKILL_TAGS),
            timeline_contents,
            hero: dom::doc_query_one(document, HERO),
            hero_text: dom::doc_query_one(document, HERO_TEXT),
            hero_image: dom::doc_query_one(document, HERO_IMAGE),
            hero_subtitle: dom::doc_query_one(document, HERO_SUBTITLE),
            gradient_text: dom::doc_query_one(document, GRADIENT_TEXT),
            footer_year: dom::doc_query_one(document, FOOTER_YEAR),
            back_to_top: None,
        }
    }

    pub fn snapshot(&self, current_year: Option<i32>) -> PageSnapshot {
        PageSnapshot {
            animatable_count: self.animatables.len(),
            stat_texts: self
                .stats
                .iter()
                .map(|s| s.text_content().unwrap_or_default())
                .collect(),
            skill_tag_count: self.skill_tags.len(),
            timeline_count: self.timeline_contents.len(),
            subtitle_text: self
                .hero_subtitle
                .as_ref()
                .map(|s| s.text_content().unwrap_or_default()),
            has_gradient_text: self.gradient_text.is_some(),
            current_year,
        }
    }

    /// Fresh measurement; section geometry is never cached.
    pub fn layout(&self, window: &web::Window) -> Layout {
        Layout {
            scroll_offset: dom::scroll_offset(window),
            sections: self
                .sections
                .iter()
                .map(|s| {
                    SectionDescriptor::new(s.id(), s.offset_top() as f64, s.offset_height() as f64)
                })
                .collect(),
            hero_height: self.hero.as_ref().map(|h| h.offset_height() as f64),
        }
    }

    /// Viewport-relative top of every section, for keyboard stepping.
    pub fn section_viewport_tops(&self) -> Vec<f64> {
        self.sections
            .iter()
            .map(|s| s.get_bounding_client_rect().top())
            .collect()
    }

    /// Position of `node` among the animatable elements, by identity.
    pub fn animatable_index(&self, node: &web::Node) -> Option<usize> {
        self.animatables
            .iter()
            .position(|el| el.is_same_node(Some(node)))
    }

    pub fn resolve(&self, target: Target) -> Option<&web::HtmlElement> {
        match target {
            Target::Body => self.body.as_ref(),
            Target::Navbar => self.navbar.as_ref(),
            Target::NavMenu => self.nav_menu.as_ref(),
            Target::HamburgerBar(i) => self.hamburger_bars.get(i),
            Target::NavLink(i) => self.section_links.get(i).and_then(Option::as_ref),
            Target::Section(i) => self.sections.get(i),
            Target::Animatable(i) => self.animatables.get(i),
            Target::Stat(i) => self.stats.get(i),
            Target::Card(i) => self.cards.get(i),
            Target::SkillTag(i) => self.skill_tags.get(i),
            Target::TimelineContent(i) => self.timeline_contents.get(i).and_then(Option::as_ref),
            Target::BackToTop => self.back_to_top.as_ref(),
            Target::Hero => self.hero.as_ref(),
            Target::HeroText => self.hero_text.as_ref(),
            Target::HeroImage => self.hero_image.as_ref(),
            Target::HeroSubtitle => self.hero_subtitle.as_ref(),
            Target::GradientText => self.gradient_text.as_ref(),
            Target::FooterYear => self.footer_year.as_ref(),
        }
    }
}

fn by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}
