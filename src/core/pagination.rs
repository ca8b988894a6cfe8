/// One indicator per slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationDot {
    pub current: bool,
}

/// Row of indicators kept index-aligned with the slides.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pagination {
    dots: Vec<PaginationDot>,
}

impl Pagination {
    pub fn new(count: usize) -> Self {
        Self {
            dots: vec![PaginationDot::default(); count],
        }
    }

    /// Clears every dot, then flags the one at `index` if it exists.
    pub fn sync(&mut self, index: Option<usize>) {
        for dot in &mut self.dots {
            dot.current = false;
        }
        if let Some(dot) = index.and_then(|i| self.dots.get_mut(i)) {
            dot.current = true;
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.dots.iter().position(|d| d.current)
    }

    pub fn dots(&self) -> &[PaginationDot] {
        &self.dots
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// "current / total", one-based, or `None` when no dot is current.
    pub fn position_label(&self) -> Option<String> {
        self.current_index()
            .map(|i| format!("{} / {}", i + 1, self.len()))
    }
}
