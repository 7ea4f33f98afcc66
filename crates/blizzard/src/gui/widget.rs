use crate::gui::view;
use blizzard_core::anim::FrameDriver;
use blizzard_core::container::BlizzardContainer;
use gtk::prelude::*;
use gtk4 as gtk;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

type Container = BlizzardContainer<FrameDriver>;

/// Drawing area hosting the three rings, ticked by the widget's frame clock.
#[derive(Clone)]
pub struct BlizzardView {
    area: gtk::DrawingArea,
    container: Rc<RefCell<Container>>,
}

impl BlizzardView {
    pub fn new(density: f64) -> Self {
        let area = gtk::DrawingArea::new();
        area.set_hexpand(true);
        area.set_vexpand(true);
        area.add_css_class("blizzard-view");

        let container = Rc::new(RefCell::new(Container::new(FrameDriver::new(), density)));

        let on_resize = container.clone();
        area.connect_resize(move |_, width, height| {
            on_resize
                .borrow_mut()
                .resize(width as f64, height as f64);
        });

        let on_draw = container.clone();
        area.set_draw_func(move |_, cr, _, _| {
            if let Err(e) = view::draw(cr, &on_draw.borrow()) {
                log::error!("Drawing error: {}", e);
            }
        });

        let on_tick = container.clone();
        area.add_tick_callback(move |area, clock| {
            let now = Duration::from_micros(clock.frame_time().max(0) as u64);
            let mut container = on_tick.borrow_mut();
            container.advance(now);
            if container.is_running() {
                area.queue_draw();
            }
            glib::ControlFlow::Continue
        });

        Self { area, container }
    }

    pub fn with_css_class(density: f64, class: &str) -> Self {
        let view = Self::new(density);
        view.area.add_css_class(class);
        view
    }

    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.area
    }

    /// Attaches the rings if needed and restarts their animations.
    pub fn show(&self) {
        self.container.borrow_mut().show();
        self.area.queue_draw();
    }

    pub fn stop(&self) {
        self.container.borrow_mut().stop();
        self.area.queue_draw();
    }

    pub fn is_running(&self) -> bool {
        self.container.borrow().is_running()
    }

    pub fn set_density(&self, density: f64) {
        self.container.borrow_mut().set_density(density);
        self.area.queue_draw();
    }
}
