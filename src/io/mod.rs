pub mod config_io;
pub mod pack_io;
pub mod state;
pub mod watcher;
