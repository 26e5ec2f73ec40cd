//! Attachment points and the measured page layout.
//!
//! [`MountPoints`] is the static contract with the page markup. The platform
//! layer resolves it into a [`PageLayout`] of target handles and measures a
//! [`Geometry`]; the controller only ever sees those two values.

use crate::header::HeaderTargets;
use crate::style::TargetId;
use crate::trigger::Span;

/// Named page regions, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Home,
    About,
    Work,
    Services,
    Education,
    Certificates,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Work,
        Section::Services,
        Section::Education,
        Section::Certificates,
        Section::Contact,
    ];

    /// Element id of the section container.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Work => "work",
            Section::Services => "services",
            Section::Education => "education",
            Section::Certificates => "certificates",
            Section::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// How an attachment point is located in the markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector {
    Id(&'static str),
    Class(&'static str),
    /// Presence of a boolean attribute.
    Attr(&'static str),
}

impl Selector {
    pub fn css(&self) -> String {
        match self {
            Selector::Id(id) => format!("#{id}"),
            Selector::Class(class) => format!(".{class}"),
            Selector::Attr(attr) => format!("[{attr}]"),
        }
    }
}

/// The markup contract for one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MountPoints {
    pub cursor: Selector,
    pub cursor_label: Selector,
    pub header: Selector,
    pub header_initial: [Selector; 2],
    pub header_scrolled: [Selector; 2],
    pub sections: Vec<Section>,
    pub interactive: Selector,
    pub anchors: &'static str,
    pub fade_up: Selector,
    pub section_title: Selector,
    pub hero: Selector,
    pub glitch_class: &'static str,
    pub footer_chars: Selector,
}

impl MountPoints {
    /// Attachment points of the portfolio page.
    pub fn portfolio() -> Self {
        Self {
            cursor: Selector::Class("cursor-dot"),
            cursor_label: Selector::Class("cursor-text"),
            header: Selector::Id("main-header"),
            header_initial: [
                Selector::Id("header-initial-left"),
                Selector::Id("header-initial-right"),
            ],
            header_scrolled: [
                Selector::Id("header-scrolled-left"),
                Selector::Id("header-scrolled-right"),
            ],
            sections: Section::ALL.to_vec(),
            interactive: Selector::Attr("data-cursor-view"),
            anchors: "a[href^=\"#\"]",
            fade_up: Selector::Class("gsap-fade-up"),
            section_title: Selector::Class("gsap-section-title"),
            hero: Selector::Id("hero-name"),
            glitch_class: "glitch",
            footer_chars: Selector::Class("footer-char-fill"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorTargets {
    pub dot: TargetId,
    pub label: TargetId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionTargets {
    pub section: Section,
    pub fade_up: Vec<TargetId>,
    pub titles: Vec<TargetId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroTarget {
    pub target: TargetId,
    pub text: String,
    /// Class applied while the heading is scrambled.
    pub glitch_class: &'static str,
}

/// Attachment points that were found, as target handles. Anything absent
/// is `None` or empty and its feature is skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageLayout {
    pub cursor: Option<CursorTargets>,
    pub header: Option<HeaderTargets>,
    pub sections: Vec<SectionTargets>,
    pub hero: Option<HeroTarget>,
    pub footer_chars: Vec<TargetId>,
}

impl PageLayout {
    pub fn section(&self, section: Section) -> Option<&SectionTargets> {
        self.sections.iter().find(|s| s.section == section)
    }
}

/// Measurements in CSS pixels; document-space spans of each section.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    pub viewport_height: f32,
    pub max_scroll: f32,
    pub scroll_y: f32,
    pub sections: Vec<(Section, Span)>,
}

impl Geometry {
    pub fn span(&self, section: Section) -> Option<Span> {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, span)| *span)
    }
}
