/// Wrap-around position over a fixed number of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Starts at `index`, wrapped into range.
    pub fn at(len: usize, index: usize) -> Self {
        let mut carousel = Self::new(len);
        carousel.select(index);
        carousel
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn select(&mut self, index: usize) {
        self.index = if self.len == 0 { 0 } else { index % self.len };
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    pub fn next_index(&self) -> usize {
        let mut peek = *self;
        peek.next()
    }

    pub fn prev_index(&self) -> usize {
        let mut peek = *self;
        peek.prev()
    }
}
