pub mod app;
pub mod theme;
pub mod view;
pub mod widget;
pub mod window;
