pub mod app;
pub mod input;
pub mod list;
pub mod render;
pub mod theme;

pub use app::run;
