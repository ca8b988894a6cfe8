//! Slides and the renderer that materializes them from items.

use crate::core::item::Item;

/// Bookkeeping tag driving the transition between slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionTag {
    /// The slide on screen.
    Active,
    /// A slide waiting its turn.
    Next,
    /// The slide that just left, one step behind the active one.
    Last,
}

impl PositionTag {
    /// Class name used in exported markup.
    pub fn class_name(self) -> &'static str {
        match self {
            PositionTag::Active => "active",
            PositionTag::Next => "next",
            PositionTag::Last => "last",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    index: usize,
    item: Item,
    pub(crate) tag: PositionTag,
}

impl Slide {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn tag(&self) -> PositionTag {
        self.tag
    }
}

/// Builds one slide per item, cloning the items.
///
/// The first slide is `Active`, the final one `Last`, the rest `Next`. A lone
/// slide stays `Active`.
pub fn render(items: &[Item]) -> Vec<Slide> {
    let last_index = items.len().saturating_sub(1);
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let tag = if index == 0 {
                PositionTag::Active
            } else if index == last_index {
                PositionTag::Last
            } else {
                PositionTag::Next
            };
            Slide {
                index,
                item: item.clone(),
                tag,
            }
        })
        .collect()
}
