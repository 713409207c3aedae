use log::debug;
use uuid::Uuid;

use crate::element::{Element, ElementId};
use crate::layer::{self, LayerOp, Layered};

impl Layered for Element {
    fn layer_id(&self) -> Uuid {
        self.id
    }

    fn z_index(&self) -> u32 {
        self.z_index
    }

    fn set_z_index(&mut self, z_index: u32) {
        self.z_index = z_index;
    }
}

/// The committed annotation list, kept sorted by z-index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an arbitrary element list, normalizing the z-order
    pub fn from_elements(mut elements: Vec<Element>) -> Self {
        layer::normalize(&mut elements);
        Self { elements }
    }

    /// Append on top of the stack. Returns the assigned z-index.
    pub fn add_element(&mut self, mut element: Element) -> u32 {
        let z_index = layer::next_z_index(&self.elements);
        element.z_index = z_index;
        debug!("Adding {} element {} at z {}", element.type_name(), element.id, z_index);
        self.elements.push(element);
        z_index
    }

    pub fn remove_element(&mut self, id: ElementId) -> Option<Element> {
        layer::remove(&mut self.elements, id)
    }

    pub fn find(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|element| element.id == id)
    }

    pub fn find_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|element| element.id == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.find(id).is_some()
    }

    /// Overwrite the element with the same id, keeping its z-index
    pub fn replace(&mut self, element: Element) -> bool {
        match self.find_mut(element.id) {
            Some(slot) => {
                let z_index = slot.z_index;
                *slot = element;
                slot.z_index = z_index;
                true
            }
            None => false,
        }
    }

    /// Swap in a whole element list, e.g. a history snapshot
    pub fn replace_all(&mut self, elements: Vec<Element>) {
        *self = Self::from_elements(elements);
    }

    pub fn reorder(&mut self, id: ElementId, op: LayerOp) -> bool {
        op.apply(&mut self.elements, id)
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Elements in ascending z-order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{factory, Style};
    use egui::Pos2;

    fn line() -> Element {
        factory::create_line(Pos2::new(10.0, 10.0), Pos2::new(40.0, 40.0), &Style::default())
    }

    #[test]
    fn add_assigns_next_z_index() {
        let mut document = Document::new();
        assert_eq!(document.add_element(line()), 1);
        assert_eq!(document.add_element(line()), 2);
        assert!(layer::is_dense(document.elements()));
    }

    #[test]
    fn remove_renormalizes() {
        let mut document = Document::new();
        let first = line();
        let first_id = first.id;
        document.add_element(first);
        document.add_element(line());
        document.add_element(line());

        assert!(document.remove_element(first_id).is_some());
        assert_eq!(document.len(), 2);
        assert!(layer::is_dense(document.elements()));
        assert!(document.remove_element(first_id).is_none());
    }

    #[test]
    fn replace_keeps_stacking_position() {
        let mut document = Document::new();
        let element = line();
        document.add_element(line());
        document.add_element(element.clone());

        let mut edited = element.clone();
        edited.color = "#000000".into();
        edited.z_index = 0;
        assert!(document.replace(edited));
        let stored = document.find(element.id).unwrap();
        assert_eq!(stored.z_index, 2);
        assert_eq!(stored.color, "#000000");
    }
}
