//! Gallery filtering and the lightbox over the filtered images.

use crate::carousel::Carousel;
use crate::content::{GalleryItem, GALLERY_ITEMS};

pub const ALL_CATEGORY: &str = "tutti";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category {
        id: ALL_CATEGORY,
        label: "Tutti",
    },
    Category {
        id: "taglio",
        label: "Taglio",
    },
    Category {
        id: "colore",
        label: "Colore",
    },
    Category {
        id: "spa",
        label: "Trattamenti Spa",
    },
];

/// Known category id, or `tutti` for anything else.
pub fn resolve_category(id: Option<&str>) -> &'static Category {
    id.and_then(|id| CATEGORIES.iter().find(|category| category.id == id))
        .unwrap_or(&CATEGORIES[0])
}

pub fn filter(category: &Category) -> Vec<&'static GalleryItem> {
    GALLERY_ITEMS
        .iter()
        .filter(|item| category.id == ALL_CATEGORY || item.category == category.id)
        .collect()
}

pub fn count(category: &Category) -> usize {
    filter(category).len()
}

/// Lightbox state over a list of `len` images. Closed when `index` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lightbox {
    position: Option<Carousel>,
    len: usize,
}

impl Lightbox {
    /// Opens on `index`; an index outside the list leaves the lightbox closed.
    pub fn open(len: usize, index: Option<usize>) -> Self {
        let position = index
            .filter(|index| *index < len)
            .map(|index| Carousel::at(len, index));
        Self { position, len }
    }

    pub fn index(&self) -> Option<usize> {
        self.position.map(|position| position.index())
    }

    pub fn is_open(&self) -> bool {
        self.position.is_some()
    }

    /// Navigation is only offered with more than one image.
    pub fn can_navigate(&self) -> bool {
        self.is_open() && self.len > 1
    }

    pub fn next(&mut self) -> Option<usize> {
        self.position.as_mut().map(Carousel::next)
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.position.as_mut().map(Carousel::prev)
    }

    pub fn next_index(&self) -> Option<usize> {
        self.position.map(|position| position.next_index())
    }

    pub fn prev_index(&self) -> Option<usize> {
        self.position.map(|position| position.prev_index())
    }

    pub fn close(&mut self) {
        self.position = None;
    }

    /// Index shown after `command`, `None` once closed.
    pub fn apply(&mut self, command: LightboxCommand) -> Option<usize> {
        match command {
            LightboxCommand::Close => {
                self.close();
                None
            }
            LightboxCommand::Next if self.can_navigate() => self.next(),
            LightboxCommand::Prev if self.can_navigate() => self.prev(),
            LightboxCommand::Next | LightboxCommand::Prev => self.index(),
        }
    }
}

/// Minimum horizontal travel, in pixels, for a touch to count as a swipe.
/// Swiping left shows the next image.
pub const SWIPE_THRESHOLD_PX: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxCommand {
    Close,
    Next,
    Prev,
}

impl LightboxCommand {
    pub const KEYS: [&'static str; 3] = ["Escape", "ArrowLeft", "ArrowRight"];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}
