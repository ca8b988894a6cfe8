use tracing::debug;

use crate::core::item::Item;
use crate::core::pagination::Pagination;
use crate::core::slide::{self, PositionTag, Slide};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Owns the slides, their position tags and the pagination row.
///
/// The active and last positions are tracked here instead of being recovered
/// from the tags on every move. Every `advance` leaves exactly one `Active`
/// and, with two or more slides, exactly one `Last`.
#[derive(Debug, Default)]
pub struct NavigationManager {
    slides: Vec<Slide>,
    pagination: Pagination,
    active: Option<usize>,
    last: Option<usize>,
}

impl NavigationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current slides with freshly rendered ones.
    pub fn render(&mut self, items: &[Item]) {
        self.slides = slide::render(items);
        self.pagination = Pagination::new(self.slides.len());
        self.active = self.position_of(PositionTag::Active);
        self.last = self.position_of(PositionTag::Last);
        self.pagination.sync(self.active);
    }

    fn position_of(&self, tag: PositionTag) -> Option<usize> {
        self.slides.iter().position(|s| s.tag == tag)
    }

    /// Moves one step in `direction`. Returns false when there is nothing to
    /// move between: an empty carousel or a single slide.
    pub fn advance(&mut self, direction: Direction) -> bool {
        let (Some(active), Some(last)) = (self.active, self.last) else {
            return false;
        };

        match direction {
            Direction::Forward => self.step_forward(active, last),
            Direction::Backward => self.step_backward(active, last),
        }
        self.pagination.sync(self.active);

        debug!(
            ?direction,
            active = ?self.active,
            last = ?self.last_index(),
            total = self.slides.len(),
            "carousel advanced"
        );
        true
    }

    fn step_forward(&mut self, active: usize, last: usize) {
        let successor = (active + 1) % self.slides.len();

        self.slides[last].tag = PositionTag::Next;
        self.slides[active].tag = PositionTag::Last;
        self.slides[successor].tag = PositionTag::Active;

        self.active = Some(successor);
        self.last = Some(active);
    }

    fn step_backward(&mut self, active: usize, last: usize) {
        let len = self.slides.len();
        let new_last = (last + len - 1) % len;

        self.slides[active].tag = PositionTag::Next;
        self.slides[last].tag = PositionTag::Active;

        if last != 0 {
            self.slides[0].tag = PositionTag::Next;
        }
        if let Some(after) = self.slides.get_mut(last + 1) {
            after.tag = PositionTag::Next;
        }

        self.slides[new_last].tag = PositionTag::Last;

        self.active = Some(last);
        self.last = Some(new_last);
    }

    pub fn can_navigate(&self) -> bool {
        self.slides.len() > 1
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn last_index(&self) -> Option<usize> {
        self.last
    }

    pub fn active_slide(&self) -> Option<&Slide> {
        self.active.and_then(|i| self.slides.get(i))
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}
