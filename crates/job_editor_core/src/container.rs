use serde::{Deserialize, Serialize};

use crate::section::{JobEditorSection, SectionCounts};

/// Narrowest width, in layout units, that gets the tab layout.
pub const WIDE_VIEWPORT_MIN_WIDTH: u16 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Viewport {
    Narrow,
    #[default]
    Wide,
}

impl Viewport {
    pub fn from_width(width: u16, wide_min_width: u16) -> Self {
        if width >= wide_min_width {
            Viewport::Wide
        } else {
            Viewport::Narrow
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerLayout {
    /// Single-open accordion, used on narrow viewports.
    Accordion,
    Tabs,
}

/// One body per section, supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBodies<B> {
    pub basic: B,
    pub location: B,
    pub salary: B,
    pub content: B,
}

impl<B> SectionBodies<B> {
    pub fn into_ordered(self) -> [(JobEditorSection, B); 4] {
        [
            (JobEditorSection::Basic, self.basic),
            (JobEditorSection::Location, self.location),
            (JobEditorSection::Salary, self.salary),
            (JobEditorSection::Content, self.content),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPane<B> {
    pub section: JobEditorSection,
    pub label: &'static str,
    /// Error count, omitted when zero.
    pub badge: Option<usize>,
    /// Selected tab, or the open accordion item.
    pub active: bool,
    pub body: B,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionContainerView<B> {
    pub layout: ContainerLayout,
    pub panes: Vec<SectionPane<B>>,
}

impl<B> SectionContainerView<B> {
    pub fn active_pane(&self) -> Option<&SectionPane<B>> {
        self.panes.iter().find(|pane| pane.active)
    }
}

/// Lays out the sections for `viewport`.
///
/// Both layouts are views of the same `current` selection; the container
/// keeps no selection of its own, so switching layouts never loses it.
pub fn section_container<B>(
    current: JobEditorSection,
    viewport: Viewport,
    counts: &SectionCounts,
    bodies: SectionBodies<B>,
) -> SectionContainerView<B> {
    let layout = match viewport {
        Viewport::Narrow => ContainerLayout::Accordion,
        Viewport::Wide => ContainerLayout::Tabs,
    };
    let panes = bodies
        .into_ordered()
        .into_iter()
        .map(|(section, body)| {
            let count = counts.get(section);
            SectionPane {
                section,
                label: section.label(),
                badge: (count > 0).then_some(count),
                active: section == current,
                body,
            }
        })
        .collect();
    SectionContainerView { layout, panes }
}
