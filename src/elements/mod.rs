//! Structural entities

mod bar;
mod material;
mod node;
mod section;
mod support;

pub use bar::{Bar, BarReleases};
pub use material::Material;
pub use node::Node;
pub use section::Section;
pub use support::{Restraint, Support};
