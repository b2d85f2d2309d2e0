use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::render::{request_animation_frame, AnimationFrame};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, MouseEvent};
use yew::prelude::*;

use super::{prefers_reduced_motion, viewport_size};
use crate::parallax::{
    neutral_transform_css, Bounds, ParallaxConfig, ParallaxState, Phase, DEFAULT_MAX_SCALE,
    DEFAULT_SCROLL_ZOOM,
};

fn apply_transform(image: &HtmlElement, css: &str) {
    let _ = image.style().set_property("transform", css);
}

fn element_bounds(element: &Element) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

struct DriverInner {
    state: RefCell<ParallaxState>,
    container: Element,
    image: HtmlElement,
    frame: RefCell<Option<AnimationFrame>>,
}

impl DriverInner {
    fn wake_if(self: &Rc<Self>, woke: bool) {
        if woke {
            self.schedule_frame();
        }
    }

    fn schedule_frame(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }

        let inner = Rc::clone(self);
        let handle = request_animation_frame(move |_timestamp| inner.run_frame());
        *self.frame.borrow_mut() = Some(handle);
    }

    fn run_frame(self: &Rc<Self>) {
        self.frame.borrow_mut().take();

        let (phase, css) = {
            let mut state = self.state.borrow_mut();
            let phase = state.step();
            (phase, state.transform_css())
        };
        apply_transform(&self.image, &css);

        if phase == Phase::Animating {
            self.schedule_frame();
        }
    }

    fn sample_scroll(self: &Rc<Self>) {
        let top = self.container.get_bounding_client_rect().top();
        let (_, viewport_height) = viewport_size();
        let woke = self.state.borrow_mut().scroll(top, viewport_height);
        self.wake_if(woke);
    }
}

/// Connects a [`ParallaxState`] to a container and its image.
///
/// Dropping the driver removes every listener and cancels the pending frame.
pub struct ParallaxDriver {
    inner: Rc<DriverInner>,
    _listeners: Vec<EventListener>,
}

impl ParallaxDriver {
    /// Returns `None` when reduced motion is requested; the image then keeps
    /// the neutral transform and nothing is attached.
    pub fn mount(
        container: Element,
        image: HtmlElement,
        config: ParallaxConfig,
        reduced_motion: bool,
    ) -> Option<Self> {
        if reduced_motion {
            apply_transform(&image, &neutral_transform_css());
            return None;
        }

        let window = web_sys::window()?;
        let inner = Rc::new(DriverInner {
            state: RefCell::new(ParallaxState::new(config)),
            container: container.clone(),
            image,
            frame: RefCell::new(None),
        });

        let mut listeners = Vec::with_capacity(4);

        let move_inner = Rc::clone(&inner);
        listeners.push(EventListener::new(&container, "mousemove", move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let bounds = element_bounds(&move_inner.container);
            let woke = move_inner.state.borrow_mut().pointer_move(
                &bounds,
                f64::from(event.client_x()),
                f64::from(event.client_y()),
            );
            move_inner.wake_if(woke);
        }));

        let enter_inner = Rc::clone(&inner);
        listeners.push(EventListener::new(&container, "mouseenter", move |_| {
            let woke = enter_inner.state.borrow_mut().pointer_enter();
            enter_inner.wake_if(woke);
        }));

        let leave_inner = Rc::clone(&inner);
        listeners.push(EventListener::new(&container, "mouseleave", move |_| {
            let woke = leave_inner.state.borrow_mut().pointer_leave();
            leave_inner.wake_if(woke);
        }));

        let scroll_inner = Rc::clone(&inner);
        listeners.push(EventListener::new_with_options(
            &window,
            "scroll",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: true,
            },
            move |_| scroll_inner.sample_scroll(),
        ));

        inner.sample_scroll();

        Some(Self {
            inner,
            _listeners: listeners,
        })
    }

    pub fn frame_pending(&self) -> bool {
        self.inner.frame.borrow().is_some()
    }
}

impl Drop for ParallaxDriver {
    fn drop(&mut self) {
        let pending = self.inner.frame.borrow_mut().take();
        drop(pending);
    }
}

#[derive(Properties, PartialEq)]
pub struct ImageParallaxProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or(DEFAULT_MAX_SCALE)]
    pub max_scale: f64,
    #[prop_or(DEFAULT_SCROLL_ZOOM)]
    pub scroll_zoom: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ImageParallax)]
pub fn image_parallax(props: &ImageParallaxProps) -> Html {
    let container_ref = use_node_ref();
    let image_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        let image_ref = image_ref.clone();
        use_effect_with(
            (props.max_scale, props.scroll_zoom),
            move |&(max_scale, scroll_zoom)| {
                let driver = match (container_ref.cast::<Element>(), image_ref.cast::<HtmlElement>()) {
                    (Some(container), Some(image)) => ParallaxDriver::mount(
                        container,
                        image,
                        ParallaxConfig::new(max_scale, scroll_zoom),
                        prefers_reduced_motion(),
                    ),
                    _ => None,
                };

                move || drop(driver)
            },
        );
    }

    html! {
        <div ref={container_ref} class={classes!("parallax-frame", props.class.clone())}>
            <img
                ref={image_ref}
                class="parallax-image"
                src={props.src.clone()}
                alt={props.alt.clone()}
                loading="lazy"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fixture() -> (Element, HtmlElement) {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let body = document.body().expect("body available");
        let container = document.create_element("div").expect("create container");
        container
            .set_attribute("style", "width: 400px; height: 300px;")
            .expect("style container");
        let image = document
            .create_element("img")
            .expect("create image")
            .dyn_into::<HtmlElement>()
            .expect("image is an html element");
        container.append_child(&image).expect("append image");
        body.append_child(&container).expect("append container");
        (container, image)
    }

    fn transform_of(image: &HtmlElement) -> String {
        image
            .style()
            .get_property_value("transform")
            .unwrap_or_default()
    }

    fn browser_serialized(css: &str) -> String {
        let (container, image) = fixture();
        apply_transform(&image, css);
        let serialized = transform_of(&image);
        container.remove();
        serialized
    }

    #[wasm_bindgen_test(async)]
    async fn reduced_motion_applies_neutral_transform_and_listens_to_nothing() {
        let (container, image) = fixture();

        let driver = ParallaxDriver::mount(
            container.clone(),
            image.clone(),
            ParallaxConfig::default(),
            true,
        );

        assert!(driver.is_none());
        let neutral = transform_of(&image);
        assert_eq!(neutral, browser_serialized(&neutral_transform_css()));
        assert!(neutral.contains("(0px, 0px"), "zero translation in {neutral}");
        assert!(neutral.ends_with("scale(1)"), "identity scale in {neutral}");

        container
            .dispatch_event(&Event::new("mouseenter").expect("event"))
            .expect("dispatch");
        TimeoutFuture::new(100).await;

        assert_eq!(transform_of(&image), neutral);
        container.remove();
    }

    #[wasm_bindgen_test(async)]
    async fn hovering_animates_the_image() {
        let (container, image) = fixture();
        let driver = ParallaxDriver::mount(
            container.clone(),
            image.clone(),
            ParallaxConfig::default(),
            false,
        )
        .expect("driver mounts");

        container
            .dispatch_event(&Event::new("mouseenter").expect("event"))
            .expect("dispatch");
        assert!(driver.frame_pending());
        TimeoutFuture::new(100).await;

        assert!(transform_of(&image).contains("scale"));
        drop(driver);
        container.remove();
    }

    #[wasm_bindgen_test(async)]
    async fn dropping_the_driver_cancels_the_pending_frame() {
        let (container, image) = fixture();
        let driver = ParallaxDriver::mount(
            container.clone(),
            image.clone(),
            ParallaxConfig::default(),
            false,
        )
        .expect("driver mounts");

        container
            .dispatch_event(&Event::new("mouseenter").expect("event"))
            .expect("dispatch");
        assert!(driver.frame_pending());
        let before = transform_of(&image);

        drop(driver);
        container
            .dispatch_event(&Event::new("mouseleave").expect("event"))
            .expect("dispatch");
        TimeoutFuture::new(100).await;

        assert_eq!(transform_of(&image), before);
        container.remove();
    }
}
