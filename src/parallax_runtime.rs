use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_core::{ContainerBounds, ParallaxFrame, ParallaxRig};
use gloo::render::{request_animation_frame, AnimationFrame};
use web_sys::{Element, MouseEvent};

pub(crate) type FrameSubscriber = Rc<dyn Fn(ParallaxFrame)>;

/// Drives the parallax springs from animation frames. Frames are only
/// requested while a spring is still moving.
pub(crate) struct ParallaxRuntime {
    rig: RefCell<ParallaxRig>,
    frame_handle: RefCell<Option<AnimationFrame>>,
    last_timestamp: Cell<Option<f64>>,
    subscriber: RefCell<Option<FrameSubscriber>>,
}

impl ParallaxRuntime {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self {
            rig: RefCell::new(ParallaxRig::new()),
            frame_handle: RefCell::new(None),
            last_timestamp: Cell::new(None),
            subscriber: RefCell::new(None),
        })
    }

    pub(crate) fn set_subscriber(&self, subscriber: Option<FrameSubscriber>) {
        *self.subscriber.borrow_mut() = subscriber;
    }

    pub(crate) fn frame(&self) -> ParallaxFrame {
        self.rig.borrow().frame()
    }

    pub(crate) fn on_pointer_move(self: &Rc<Self>, container: &Element, event: &MouseEvent) {
        let rect = container.get_bounding_client_rect();
        let bounds = ContainerBounds {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        };
        self.rig.borrow_mut().on_pointer_move(
            bounds,
            f64::from(event.client_x()),
            f64::from(event.client_y()),
        );
        self.queue_frame();
    }

    fn queue_frame(self: &Rc<Self>) {
        if self.frame_handle.borrow().is_some() {
            return;
        }
        let runtime = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| {
            runtime.frame_handle.borrow_mut().take();
            runtime.tick(timestamp);
        });
        *self.frame_handle.borrow_mut() = Some(handle);
    }

    fn tick(self: &Rc<Self>, timestamp_ms: f64) {
        let dt = match self.last_timestamp.replace(Some(timestamp_ms)) {
            Some(previous) => (timestamp_ms - previous) / 1000.0,
            None => 1.0 / 60.0,
        };
        let moving = self.rig.borrow_mut().step(dt);
        let frame = self.frame();
        let subscriber = self.subscriber.borrow().clone();
        if let Some(subscriber) = subscriber {
            subscriber(frame);
        }
        if moving {
            self.queue_frame();
        } else {
            self.last_timestamp.set(None);
        }
    }

    pub(crate) fn stop(&self) {
        self.frame_handle.borrow_mut().take();
        self.last_timestamp.set(None);
    }
}
