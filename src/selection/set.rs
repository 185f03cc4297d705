//! Selected rows

use crate::types::{Artwork, ArtworkId};
use std::collections::HashSet;

/// State of the header checkbox relative to the loaded rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckbox {
    /// No loaded row is selected (or nothing is loaded)
    Empty,
    /// Some but not all loaded rows are selected
    Mixed,
    /// Every loaded row is selected
    Full,
}

/// Selected artworks in selection order, unique by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    rows: Vec<Artwork>,
    ids: HashSet<ArtworkId>,
}

impl SelectionSet {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the artwork with `id` is selected
    pub fn contains(&self, id: ArtworkId) -> bool {
        self.ids.contains(&id)
    }

    /// Selected rows in selection order
    pub fn as_slice(&self) -> &[Artwork] {
        &self.rows
    }

    /// Iterate over selected rows
    pub fn iter(&self) -> std::slice::Iter<'_, Artwork> {
        self.rows.iter()
    }

    /// Selected ids in selection order
    pub fn ids(&self) -> Vec<ArtworkId> {
        self.rows.iter().map(|a| a.id).collect()
    }

    /// Add `artwork`; returns false if it was already selected
    pub fn insert(&mut self, artwork: Artwork) -> bool {
        if !self.ids.insert(artwork.id) {
            return false;
        }
        self.rows.push(artwork);
        true
    }

    /// Remove the artwork with `id`
    pub fn remove(&mut self, id: ArtworkId) -> Option<Artwork> {
        if !self.ids.remove(&id) {
            return None;
        }
        let index = self.rows.iter().position(|a| a.id == id)?;
        Some(self.rows.remove(index))
    }

    /// Flip the selection of `artwork`; returns whether it is now selected
    pub fn toggle(&mut self, artwork: &Artwork) -> bool {
        if self.remove(artwork.id).is_some() {
            false
        } else {
            self.insert(artwork.clone())
        }
    }

    /// Append rows, skipping ones already selected; returns how many were added
    pub fn extend<'a, I>(&mut self, rows: I) -> usize
    where
        I: IntoIterator<Item = &'a Artwork>,
    {
        rows.into_iter()
            .filter(|a| self.insert(Artwork::clone(a)))
            .count()
    }

    /// Remove every row
    pub fn clear(&mut self) {
        self.rows.clear();
        self.ids.clear();
    }

    /// Header checkbox state for the `loaded` rows
    pub fn header_state(&self, loaded: &[Artwork]) -> HeaderCheckbox {
        let selected = loaded.iter().filter(|a| self.contains(a.id)).count();
        if selected == 0 {
            HeaderCheckbox::Empty
        } else if selected == loaded.len() {
            HeaderCheckbox::Full
        } else {
            HeaderCheckbox::Mixed
        }
    }

    /// Header checkbox click: deselect all loaded rows when every one is
    /// selected, otherwise select all of them. Rows not in `loaded` are kept.
    pub fn toggle_all(&mut self, loaded: &[Artwork]) -> HeaderCheckbox {
        match self.header_state(loaded) {
            HeaderCheckbox::Full => {
                for artwork in loaded {
                    self.remove(artwork.id);
                }
            }
            HeaderCheckbox::Empty | HeaderCheckbox::Mixed => {
                self.extend(loaded);
            }
        }
        self.header_state(loaded)
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a Artwork;
    type IntoIter = std::slice::Iter<'a, Artwork>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
