// Component trait system
//
// Component gives every UI element identity and rendering; Interactive
// adds key handling for the elements that take focus.

pub mod component;
pub mod interactive;

pub use component::{Component, ComponentId, RenderContext};
pub use interactive::{Handled, Interactive};
