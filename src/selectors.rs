// DOM contract: selectors the controller binds to at startup, plus the
// markup it injects. Kept free of web-sys so host tests can include it.

pub const HAMBURGER_ID: &str = "hamburger";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const NAVBAR_ID: &str = "navbar";

pub const HAMBURGER_BARS: &str = "span";
pub const NAV_LINKS: &str = ".nav-link";
pub const SECTIONS: &str = "section[id]";
pub const SAME_PAGE_ANCHORS: &str = "a[href^=\"#\"]";
pub const ANIMATABLE: &str =
    ".stat-card, .timeline-item, .project-card, .skill-category, .education-card, .contact-item";
pub const STAT_VALUES: &str = ".stat-card h3";
pub const STATS_SECTION: &str = ".about-stats";
pub const PROJECT_CARDS: &str = ".project-card";
pub const SKILL_TAGS: &str = ".skill-tag";
pub const TIMELINE_ITEMS: &str = ".timeline-item";
pub const TIMELINE_CONTENT: &str = ".timeline-content";
pub const HERO: &str = ".hero";
pub const HERO_TEXT: &str = ".hero-text";
pub const HERO_IMAGE: &str = ".hero-image";
pub const HERO_SUBTITLE: &str = ".hero-subtitle";
pub const GRADIENT_TEXT: &str = ".gradient-text";
pub const FOOTER_YEAR: &str = ".footer-content p";
pub const LINKS_WITH_HREF: &str = "a[href]";
pub const IMAGES: &str = "img";

pub const BACK_TO_TOP_CLASS: &str = "back-to-top";
pub const BACK_TO_TOP_HTML: &str = "<i class=\"fas fa-arrow-up\"></i>";
pub const BACK_TO_TOP_STYLE: &str = "position: fixed; bottom: 30px; right: 30px; \
width: 50px; height: 50px; border-radius: 50%; \
background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; \
border: none; cursor: pointer; opacity: 0; visibility: hidden; transition: all 0.3s; \
box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); z-index: 999; font-size: 1.2rem;";

/// Selector for the navigation link that targets section `id`.
pub fn nav_link_for(section_id: &str) -> String {
    format!(".nav-link[href=\"#{section_id}\"]")
}

/// Console greeting, one line per entry.
pub const BANNER: [&str; 4] = [
    "👋 Hi there!",
    "Looking at the code? Let's connect! 🚀",
    "📧 priyankay@iitbhilai.ac.in",
    "💼 https://github.com/Priyankay151",
];
