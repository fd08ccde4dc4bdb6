use ratatui::{
    buffer::Buffer,
    layout::{Constraint as RatatuiConstraint, Direction, Layout as RatatuiLayout, Rect},
};

use super::component::{Constraint, ContainerLayout, Element};
use crate::config::DisplayConfig;

/// Renders virtual element tree to ratatui buffer
///
/// The Renderer takes a virtual Element tree produced by components
/// and paints it into a frame buffer. Every frame is drawn in full.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Render an element tree to the given area in the buffer
    pub fn render(&mut self, element: Element, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        self.render_element(&element, area, buf, config);
    }

    /// Calculate layout constraints and split the area
    fn calculate_layout(&self, layout: &ContainerLayout, area: Rect) -> Vec<Rect> {
        let (direction, constraints) = match layout {
            ContainerLayout::Vertical(constraints) => (Direction::Vertical, constraints),
            ContainerLayout::Horizontal(constraints) => (Direction::Horizontal, constraints),
        };

        let ratatui_constraints = constraints
            .iter()
            .map(|c| self.convert_constraint(*c))
            .collect::<Vec<_>>();

        RatatuiLayout::default()
            .direction(direction)
            .constraints(ratatui_constraints)
            .split(area)
            .to_vec()
    }

    /// Convert our Constraint type to ratatui's Constraint
    fn convert_constraint(&self, constraint: Constraint) -> RatatuiConstraint {
        match constraint {
            Constraint::Length(n) => RatatuiConstraint::Length(n),
            Constraint::Min(n) => RatatuiConstraint::Min(n),
        }
    }

    fn render_element(&self, element: &Element, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        match element {
            Element::Widget(widget) => widget.render(area, buf, config),

            Element::Container { children, layout } => {
                let chunks = self.calculate_layout(layout, area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    self.render_element(child, *chunk, buf, config);
                }
            }

            // Fragment children share the area; later ones draw on top
            Element::Fragment(children) => {
                for child in children {
                    self.render_element(child, area, buf, config);
                }
            }

            Element::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::component::ElementWidget;
    use crate::tui::testing::buffer_lines;
    use ratatui::{
        text::Text,
        widgets::{Paragraph, Widget},
    };

    #[derive(Clone)]
    struct TestWidget {
        text: String,
    }

    impl ElementWidget for TestWidget {
        fn render(&self, area: Rect, buf: &mut Buffer, _config: &DisplayConfig) {
            Paragraph::new(Text::from(self.text.clone())).render(area, buf);
        }

        fn clone_box(&self) -> Box<dyn ElementWidget> {
            Box::new(self.clone())
        }
    }

    fn text(s: &str) -> Element {
        Element::Widget(Box::new(TestWidget { text: s.to_string() }))
    }

    fn render(element: Element, width: u16, height: u16) -> Vec<String> {
        let mut buffer = Buffer::empty(Rect::new(0, 0, width, height));
        Renderer::new().render(element, buffer.area, &mut buffer, &DisplayConfig::default());
        buffer_lines(&buffer)
    }

    #[test]
    fn test_render_none() {
        let lines = render(Element::None, 10, 3);
        assert!(lines.iter().all(|l| l.trim().is_empty()));
    }

    #[test]
    fn test_render_widget() {
        let lines = render(text("Hello"), 10, 3);
        assert!(lines[0].starts_with("Hello"));
    }

    #[test]
    fn test_render_container_vertical() {
        let element = Element::Container {
            layout: ContainerLayout::Vertical(vec![Constraint::Length(3), Constraint::Length(3)]),
            children: vec![text("TOP"), text("BOTTOM")],
        };
        let lines = render(element, 10, 6);
        assert!(lines[0].starts_with("TOP"));
        assert!(lines[3].starts_with("BOTTOM"));
    }

    #[test]
    fn test_render_container_horizontal() {
        let element = Element::Container {
            layout: ContainerLayout::Horizontal(vec![Constraint::Length(10), Constraint::Length(10)]),
            children: vec![text("LEFT"), text("RIGHT")],
        };
        let lines = render(element, 20, 3);
        assert_eq!(lines[0].trim_end(), "LEFT      RIGHT");
    }

    #[test]
    fn test_render_fragment_overlays() {
        let element = Element::Fragment(vec![text("First"), text("Second")]);
        let lines = render(element, 10, 3);
        assert!(lines[0].starts_with("Second"));
    }
}
