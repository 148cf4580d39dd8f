use std::collections::BTreeMap;

use crate::model::question::OptionKey;

/// Selected option per question index.
///
/// Entries are only added by explicit selection and only cleared as a whole
/// on reset. Selecting again for the same index overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerMap {
    entries: BTreeMap<usize, OptionKey>,
}

impl AnswerMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a selection and returns the one it replaced, if any.
    pub fn record(&mut self, index: usize, key: OptionKey) -> Option<OptionKey> {
        self.entries.insert(index, key)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<OptionKey> {
        self.entries.get(&index).copied()
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, OptionKey)> + '_ {
        self.entries.iter().map(|(index, key)| (*index, *key))
    }
}

impl FromIterator<(usize, OptionKey)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (usize, OptionKey)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
