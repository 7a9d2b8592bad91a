use super::media::MediaItem;

/// An ordered sequence of [`MediaItem`] produced by acquisition or by the
/// review gallery. Order is acquisition order unless the gallery reorders it.
#[derive(Debug, Clone, Default)]
pub struct SelectionBatch {
    items: Vec<MediaItem>,
}

impl SelectionBatch {
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MediaItem> {
        self.items.iter()
    }

    pub fn into_inner(self) -> Vec<MediaItem> {
        self.items
    }
}

impl From<Vec<MediaItem>> for SelectionBatch {
    fn from(items: Vec<MediaItem>) -> Self {
        Self::new(items)
    }
}

impl FromIterator<MediaItem> for SelectionBatch {
    fn from_iter<I: IntoIterator<Item = MediaItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for SelectionBatch {
    type Item = MediaItem;
    type IntoIter = std::vec::IntoIter<MediaItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
