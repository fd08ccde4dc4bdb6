use ratatui::{buffer::Buffer, layout::Rect};
use std::future::Future;
use std::pin::Pin;

use super::action::Action;
use crate::config::DisplayConfig;

/// Core component trait
///
/// Components are pure: given props they build an Element tree. All state
/// lives in `AppState` and reaches a component through its props.
pub trait Component {
    /// Props type for this component
    type Props;

    /// Render component given props (pure function)
    fn view(&self, props: &Self::Props) -> Element;
}

/// Element in virtual component tree
#[derive(Clone)]
pub enum Element {
    /// A widget that can be directly rendered to ratatui buffer
    Widget(Box<dyn ElementWidget>),

    /// A container with layout and children
    Container {
        children: Vec<Element>,
        layout: ContainerLayout,
    },

    /// A fragment (just groups children, no layout)
    Fragment(Vec<Element>),

    /// Nothing to render
    None,
}

/// Layout for container elements
#[derive(Clone, Debug, PartialEq)]
pub enum ContainerLayout {
    Vertical(Vec<Constraint>),
    Horizontal(Vec<Constraint>),
}

/// Constraint for layout
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Constraint {
    Length(u16),
    Min(u16),
}

/// Side effects to run after reducing an action
pub enum Effect {
    None,
    Batch(Vec<Effect>),
    Async(Pin<Box<dyn Future<Output = Action> + Send>>),
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::None => write!(f, "Effect::None"),
            Effect::Batch(effects) => f.debug_tuple("Effect::Batch").field(effects).finish(),
            Effect::Async(_) => write!(f, "Effect::Async(<future>)"),
        }
    }
}

/// Trait for widgets that can be wrapped in the Element tree
pub trait ElementWidget: Send + Sync {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, box chars, etc.)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Clone this widget into a boxed trait object
    fn clone_box(&self) -> Box<dyn ElementWidget>;

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}

impl Clone for Box<dyn ElementWidget> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Helper to create a container with vertical layout
pub fn vertical<const N: usize>(constraints: [Constraint; N], children: Vec<Element>) -> Element {
    Element::Container {
        children,
        layout: ContainerLayout::Vertical(constraints.to_vec()),
    }
}
