use super::{CommandError, CommandResult};
use crate::document::Document;
use crate::element::{Element, ElementId};
use crate::layer::LayerOp;

/// Mutations of the committed element list.
///
/// Every successful command is followed by exactly one history entry, labeled
/// with [`Command::label`] unless the caller supplies a more specific one.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a validated element on top of the stack
    AddElement(Element),
    /// Remove an element and close the z-order gap
    RemoveElement(ElementId),
    /// Replace an element's content, keeping its stacking position
    UpdateElement(Element),
    /// Restack one element
    Reorder { id: ElementId, op: LayerOp },
    /// Remove every element
    Clear,
}

impl Command {
    /// Execute the command against the document
    pub fn execute(&self, document: &mut Document) -> CommandResult {
        match self {
            Command::AddElement(element) => {
                if !element.is_valid() {
                    return Err(CommandError::InvalidElement(element.type_name()));
                }
                if document.contains(element.id) {
                    return Err(CommandError::Unchanged);
                }
                document.add_element(element.clone());
                Ok(())
            }

            Command::RemoveElement(id) => document
                .remove_element(*id)
                .map(|_| ())
                .ok_or(CommandError::ElementNotFound(*id)),

            Command::UpdateElement(element) => {
                if !element.is_valid() {
                    return Err(CommandError::InvalidElement(element.type_name()));
                }
                if document.replace(element.clone()) {
                    Ok(())
                } else {
                    Err(CommandError::ElementNotFound(element.id))
                }
            }

            Command::Reorder { id, op } => {
                if !document.contains(*id) {
                    return Err(CommandError::ElementNotFound(*id));
                }
                if document.reorder(*id, *op) {
                    Ok(())
                } else {
                    Err(CommandError::Unchanged)
                }
            }

            Command::Clear => {
                if document.is_empty() {
                    return Err(CommandError::Unchanged);
                }
                document.clear();
                Ok(())
            }
        }
    }

    /// Default history label for this command
    pub fn label(&self) -> String {
        match self {
            Command::AddElement(element) => format!("Add {}", element.type_name()),
            Command::RemoveElement(_) => "Delete element".to_string(),
            Command::UpdateElement(_) => "Update element".to_string(),
            Command::Reorder { op, .. } => op.label().to_string(),
            Command::Clear => "Clear canvas".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{factory, Style};
    use egui::Pos2;

    #[test]
    fn add_rejects_invalid_elements() {
        let mut document = Document::new();
        let dot = factory::create_freehand(vec![Pos2::new(5.0, 5.0)], &Style::default());
        assert_eq!(
            Command::AddElement(dot).execute(&mut document),
            Err(CommandError::InvalidElement("freehand"))
        );
        assert!(document.is_empty());
    }

    #[test]
    fn remove_reports_missing_element() {
        let mut document = Document::new();
        let id = uuid::Uuid::new_v4();
        assert_eq!(
            Command::RemoveElement(id).execute(&mut document),
            Err(CommandError::ElementNotFound(id))
        );
    }

    #[test]
    fn clear_on_empty_document_is_unchanged() {
        let mut document = Document::new();
        assert_eq!(Command::Clear.execute(&mut document), Err(CommandError::Unchanged));
    }

    #[test]
    fn labels_name_the_element_type() {
        let line = factory::create_line(Pos2::new(0.0, 0.0), Pos2::new(10.0, 0.0), &Style::default());
        assert_eq!(Command::AddElement(line).label(), "Add line");
        assert_eq!(Command::Clear.label(), "Clear canvas");
    }
}
