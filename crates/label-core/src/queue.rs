//! Print queue

use crate::label::Label;
use serde::{Deserialize, Serialize};

/// Ordered labels waiting to be printed; insertion order is print order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrintQueue {
    labels: Vec<Label>,
}

impl PrintQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one label
    pub fn push(&mut self, label: Label) {
        self.labels.push(label);
    }

    /// Append labels in order
    pub fn extend<I: IntoIterator<Item = Label>>(&mut self, labels: I) {
        self.labels.extend(labels);
    }

    /// Remove the label at `index`, if present
    pub fn remove(&mut self, index: usize) -> Option<Label> {
        if index < self.labels.len() {
            Some(self.labels.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.labels.clear();
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn get(&self, index: usize) -> Option<&Label> {
        self.labels.get(index)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Label> {
        self.labels.iter()
    }
}

impl<'a> IntoIterator for &'a PrintQueue {
    type Item = &'a Label;
    type IntoIter = std::slice::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FormState, PlywoodType};
    use crate::label::finalize_label;
    use chrono::NaiveDate;

    fn label(thickness: &str) -> Label {
        let form = FormState {
            thickness: thickness.to_string(),
            plywood_type: Some(PlywoodType::Ext),
            ..Default::default()
        };
        finalize_label(&form, NaiveDate::from_ymd_opt(2026, 1, 2).unwrap()).unwrap()
    }

    #[test]
    fn test_append_order() {
        let mut queue = PrintQueue::new();
        queue.push(label("9"));
        queue.extend(vec![label("12"), label("18")]);
        let order: Vec<&str> = queue.iter().map(|l| l.thickness()).collect();
        assert_eq!(order, vec!["9", "12", "18"]);
    }

    #[test]
    fn test_remove_by_position() {
        let mut queue = PrintQueue::new();
        queue.extend(vec![label("9"), label("12"), label("18")]);
        assert_eq!(queue.remove(1).unwrap().thickness(), "12");
        assert!(queue.remove(5).is_none());
        let order: Vec<&str> = queue.iter().map(|l| l.thickness()).collect();
        assert_eq!(order, vec!["9", "18"]);
    }
}
