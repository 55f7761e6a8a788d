use crate::domain::ports::{ElementId, ViewHost};
use std::collections::{BTreeMap, BTreeSet};

/// Last known state of one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    pub text: String,
    pub value: String,
    pub classes: BTreeSet<String>,
    pub image_source: Option<String>,
}

/// An in-memory page: every write lands in a map keyed by element.
///
/// Used as the host for scripted runs and as the observable view in tests.
/// Elements spring into existence on first write.
#[derive(Debug, Default, Clone)]
pub struct RecordingView {
    elements: BTreeMap<ElementId, ElementState>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(&self, id: ElementId) -> Option<&ElementState> {
        self.elements.get(&id)
    }

    pub fn text(&self, id: ElementId) -> &str {
        self.elements.get(&id).map_or("", |e| e.text.as_str())
    }

    pub fn value(&self, id: ElementId) -> &str {
        self.elements.get(&id).map_or("", |e| e.value.as_str())
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.elements
            .get(&id)
            .is_some_and(|e| e.classes.contains(class))
    }

    pub fn image_source(&self, id: ElementId) -> Option<&str> {
        self.elements.get(&id)?.image_source.as_deref()
    }

    /// All elements in a stable order.
    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &ElementState)> {
        self.elements.iter().map(|(id, state)| (*id, state))
    }

    fn entry(&mut self, id: ElementId) -> &mut ElementState {
        self.elements.entry(id).or_default()
    }
}

impl ViewHost for RecordingView {
    fn set_text(&mut self, id: ElementId, text: &str) {
        tracing::trace!(element = %id, text, "set text");
        self.entry(id).text = text.to_string();
    }

    fn set_value(&mut self, id: ElementId, value: &str) {
        tracing::trace!(element = %id, value, "set value");
        self.entry(id).value = value.to_string();
    }

    fn add_class(&mut self, id: ElementId, class: &str) {
        tracing::trace!(element = %id, class, "add class");
        self.entry(id).classes.insert(class.to_string());
    }

    fn remove_class(&mut self, id: ElementId, class: &str) {
        tracing::trace!(element = %id, class, "remove class");
        self.entry(id).classes.remove(class);
    }

    fn set_image_source(&mut self, id: ElementId, src: &str) {
        tracing::trace!(element = %id, src, "set image source");
        self.entry(id).image_source = Some(src.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_are_recorded() {
        let mut view = RecordingView::new();
        view.set_text(ElementId::ActionButton, "Далее");
        view.set_value(ElementId::PhoneInput, "061329999");
        view.add_class(ElementId::CardOption(0), "selected");
        view.set_image_source(ElementId::Body, "x.png");

        assert_eq!(view.text(ElementId::ActionButton), "Далее");
        assert_eq!(view.value(ElementId::PhoneInput), "061329999");
        assert!(view.has_class(ElementId::CardOption(0), "selected"));
        assert_eq!(view.image_source(ElementId::Body), Some("x.png"));
    }

    #[test]
    fn test_unknown_element_reads_empty() {
        let view = RecordingView::new();
        assert_eq!(view.text(ElementId::AmountInput), "");
        assert!(!view.has_class(ElementId::Body, "modal-open"));
        assert!(view.image_source(ElementId::Body).is_none());
        assert!(view.element(ElementId::Body).is_none());
    }

    #[test]
    fn test_remove_class() {
        let mut view = RecordingView::new();
        view.add_class(ElementId::Body, "modal-open");
        view.remove_class(ElementId::Body, "modal-open");
        view.remove_class(ElementId::Body, "never-added");
        assert!(!view.has_class(ElementId::Body, "modal-open"));
    }

    #[test]
    fn test_elements_are_ordered() {
        let mut view = RecordingView::new();
        view.set_text(ElementId::CardOption(1), "b");
        view.set_text(ElementId::Body, "a");

        let ids: Vec<ElementId> = view.elements().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![ElementId::Body, ElementId::CardOption(1)]);
    }
}
