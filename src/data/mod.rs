pub mod history;
pub mod hotkeys;
pub mod measurement;
pub mod scene;
pub mod session;
pub mod view;
