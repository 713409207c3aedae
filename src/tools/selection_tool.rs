use egui::{Pos2, Vec2};
use log::debug;

use crate::element::{Element, ElementKind, MIN_IMAGE_SIZE};
use crate::geometry::resize::resize_from_corner;
use crate::geometry::Corner;

/// `original` moved by the total pointer travel since the drag began.
///
/// The element is clamped so its box stays on the canvas; the second value is
/// the displacement that was actually applied.
pub fn drag_to(original: &Element, origin: Pos2, pointer: Pos2) -> (Element, Vec2) {
    let mut moved = original.clone();
    let applied = moved.translate(pointer - origin);
    (moved, applied)
}

/// `original` image with `corner` dragged to `pointer`.
/// Returns `None` for elements without resize handles.
pub fn resize_image(original: &Element, corner: Corner, pointer: Pos2) -> Option<Element> {
    let image = original.as_image()?;
    let rect = resize_from_corner(
        image.rect(),
        corner,
        pointer,
        image.maintain_aspect_ratio,
        MIN_IMAGE_SIZE,
    );
    let mut resized = original.clone();
    if let ElementKind::Image(image) = &mut resized.kind {
        image.set_rect(rect);
        debug!(
            "Resized image {} via {} to {:.1}x{:.1}",
            resized.id,
            corner.as_str(),
            image.width,
            image.height
        );
    }
    Some(resized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{factory, Style};

    #[test]
    fn drag_uses_total_delta_from_origin() {
        let rect = factory::create_rectangle(10.0, 10.0, 20.0, 20.0, false, &Style::default());
        let (moved, applied) = drag_to(&rect, Pos2::new(20.0, 10.0), Pos2::new(25.0, 13.0));
        assert_eq!(applied, Vec2::new(5.0, 3.0));
        assert_eq!(moved.extent().min, Pos2::new(15.0, 13.0));
    }

    #[test]
    fn drag_is_clamped_at_canvas_edge() {
        let rect = factory::create_rectangle(70.0, 10.0, 20.0, 20.0, false, &Style::default());
        let (moved, applied) = drag_to(&rect, Pos2::new(80.0, 10.0), Pos2::new(100.0, 10.0));
        assert_eq!(applied.x, 10.0);
        assert_eq!(moved.extent().max.x, 100.0);
    }

    #[test]
    fn only_images_resize() {
        let image = factory::create_image("a.png", Pos2::new(50.0, 50.0), 20.0, 10.0, &Style::default());
        let resized = resize_image(&image, Corner::BottomRight, Pos2::new(80.0, 60.0)).unwrap();
        let rect = resized.as_image().unwrap().rect();
        assert_eq!(rect.min, Pos2::new(40.0, 45.0));
        assert!((rect.width() / rect.height() - 2.0).abs() < 1e-4);

        let rect = factory::create_rectangle(10.0, 10.0, 20.0, 20.0, false, &Style::default());
        assert!(resize_image(&rect, Corner::BottomRight, Pos2::new(50.0, 50.0)).is_none());
    }
}
