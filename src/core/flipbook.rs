/// Page state of the memory flipbook.
///
/// Pages flip in order: flipping a page also flips every page before it, and
/// turning a page back also turns back every page after it.
#[derive(Clone, Debug, Default)]
pub struct Flipbook {
    flipped: Vec<bool>,
    open: bool,
}

impl Flipbook {
    pub fn new(pages: usize) -> Self {
        Self {
            flipped: vec![false; pages],
            open: false,
        }
    }

    /// Handle a click on page `index`. The cover (page 0) also opens the book.
    pub fn click(&mut self, index: usize) {
        if index >= self.flipped.len() {
            return;
        }
        if index == 0 {
            self.open = true;
        }
        if self.flipped[index] {
            for f in &mut self.flipped[index..] {
                *f = false;
            }
        } else {
            for f in &mut self.flipped[..=index] {
                *f = true;
            }
        }
    }

    #[inline]
    pub fn is_flipped(&self, index: usize) -> bool {
        self.flipped.get(index).copied().unwrap_or(false)
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }
}
