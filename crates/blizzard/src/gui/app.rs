use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::theme;
use crate::gui::widget::BlizzardView;
use crate::gui::window;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;

pub struct AppModel {
    pub view: BlizzardView,
    pub config: Config,
}

#[derive(Debug)]
pub enum AppMsg {
    Show,
    Stop,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Show => AppMsg::Show,
            AppEvent::Stop => AppMsg::Stop,
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Blizzard"),
            add_css_class: "blizzard-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Stop);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[local_ref]
            drawing_area -> gtk::DrawingArea {
                add_controller = gtk::GestureClick {
                    connect_released[sender] => move |_, _, _, _| {
                        sender.input(AppMsg::Show);
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, rx) = init;

        theme::load_css();
        window::apply_config(&root, &config);

        let model = AppModel {
            view: BlizzardView::new(config.density),
            config,
        };
        let drawing_area = model.view.drawing_area();

        let widgets = view_output!();

        // the tree is built: start spinning
        model.view.show();

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Show => {
                self.view.show();
                log::info!("Indicator (re)started");
            }
            AppMsg::Stop => {
                self.view.stop();
                log::info!("Indicator stopped");
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    if self.config.requires_restart(&new_config) {
                        log::warn!(
                            "Mode {} at {}x{} takes effect after a restart",
                            new_config.mode,
                            new_config.width,
                            new_config.height
                        );
                    }
                    self.view.set_density(new_config.density);
                    self.config = new_config;
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}
