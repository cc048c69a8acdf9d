//! # Selection
//!
//! Seats the user has picked so far, in click order. Ids and labels are
//! kept in two parallel vectors that always have the same length; entry
//! `i` of `labels` is the label of the seat `ids[i]`.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
    labels: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|s| s == id)
    }

    /// Append a seat. Returns false (and changes nothing) if it is already present.
    pub fn push(&mut self, id: &str, label: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        self.labels.push(label.to_string());
        true
    }

    /// Remove a seat and the label at the same index.
    ///
    /// Labels are removed by position, not by value, so two seats that
    /// share a display label never take each other out.
    pub fn remove(&mut self, id: &str) -> Option<(String, String)> {
        let idx = self.position(id)?;
        Some((self.ids.remove(idx), self.labels.remove(idx)))
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// `(id, label)` pairs in click order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.ids
            .iter()
            .zip(self.labels.iter())
            .map(|(id, label)| (id.as_str(), label.as_str()))
    }
}
