use crate::config::{Config, Mode};
use gtk::prelude::*;
use gtk4 as gtk;
use gtk4_layer_shell::{KeyboardMode, Layer, LayerShell};

/// Floats the window above everything else. Without anchors the compositor
/// centers it on the output.
pub fn init_layer_shell(window: &gtk::ApplicationWindow) {
    window.init_layer_shell();
    window.set_layer(Layer::Overlay);
    window.set_namespace(Some("blizzard"));
    window.set_exclusive_zone(-1);
    window.set_keyboard_mode(KeyboardMode::OnDemand);
}

pub fn apply_config(window: &gtk::ApplicationWindow, config: &Config) {
    window.set_default_size(config.width, config.height);
    match config.mode {
        Mode::Overlay if gtk4_layer_shell::is_supported() => {
            window.add_css_class("blizzard-overlay");
            init_layer_shell(window);
        }
        Mode::Overlay => {
            log::warn!("Layer shell not supported by the compositor, using a regular window");
        }
        Mode::Window => {}
    }
}
