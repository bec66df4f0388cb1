pub mod actions;
pub mod camera;
pub mod config;
pub mod constants;
pub mod decode;
pub mod error;
pub mod feed;
pub mod focus;
pub mod geometry;
pub mod interaction;
pub mod layout;
pub mod lighting;
pub mod mesh;
pub mod movement;
pub mod panel;
pub mod picking;
pub mod room;
pub mod scene;
pub mod session;
pub mod spiral;
pub mod store;
pub mod tween;

pub static GALLERY_WGSL: &str = include_str!("../shaders/gallery.wgsl");

pub use actions::*;
pub use camera::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use feed::*;
pub use focus::*;
pub use geometry::*;
pub use interaction::*;
pub use layout::*;
pub use lighting::*;
pub use mesh::*;
pub use panel::*;
pub use picking::*;
pub use scene::*;
pub use session::*;
pub use spiral::SpiralParams;
pub use store::*;
pub use tween::*;
