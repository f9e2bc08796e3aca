pub mod renderer;

pub use renderer::{CellKind, Hud, LastResult, Renderer};
