use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::effects::listener::{viewport_height, WindowListener};
use crate::error::PageError;

/// Sections play their entry animation once their top edge is 80% down the viewport.
pub const ENTRY_THRESHOLD: f64 = 0.8;
pub const ENTERED_CLASS: &str = "entered";
/// Set on `<html>` once sections are being watched; until then they render visible.
pub const ACTIVE_CLASS: &str = "entry-animations";
const ANIMATED_SELECTOR: &str = "[data-animate]";

pub trait TriggerTarget {
    /// Top edge relative to the viewport, in CSS pixels.
    fn top_edge(&self) -> f64;
}

impl TriggerTarget for Element {
    fn top_edge(&self) -> f64 {
        self.get_bounding_client_rect().top()
    }
}

pub trait ViewportObserver<T> {
    fn observe(&mut self, target: T, threshold_ratio: f64, on_enter: Callback<()>, on_exit: Callback<()>);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EntryState {
    #[default]
    Waiting,
    Entered,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crossing {
    Enter,
    Exit,
}

impl EntryState {
    pub fn next(self, top: f64, viewport_height: f64, threshold_ratio: f64) -> (EntryState, Option<Crossing>) {
        let inside = top < viewport_height * threshold_ratio;
        match (self, inside) {
            (EntryState::Waiting, true) => (EntryState::Entered, Some(Crossing::Enter)),
            (EntryState::Entered, false) => (EntryState::Waiting, Some(Crossing::Exit)),
            (state, _) => (state, None),
        }
    }
}

struct Watched<T> {
    target: T,
    threshold_ratio: f64,
    state: EntryState,
    on_enter: Callback<()>,
    on_exit: Callback<()>,
}

/// Scroll-polled entry trigger: call `poll` from scroll and resize handlers.
pub struct ScrollTrigger<T> {
    watched: Vec<Watched<T>>,
}

impl<T> Default for ScrollTrigger<T> {
    fn default() -> Self {
        Self { watched: Vec::new() }
    }
}

impl<T: TriggerTarget> ScrollTrigger<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.watched.is_empty()
    }

    pub fn poll(&mut self, viewport_height: f64) {
        for w in self.watched.iter_mut() {
            let (state, crossing) = w.state.next(w.target.top_edge(), viewport_height, w.threshold_ratio);
            w.state = state;
            match crossing {
                Some(Crossing::Enter) => w.on_enter.emit(()),
                Some(Crossing::Exit) => w.on_exit.emit(()),
                None => {}
            }
        }
    }
}

impl<T: TriggerTarget> ViewportObserver<T> for ScrollTrigger<T> {
    fn observe(&mut self, target: T, threshold_ratio: f64, on_enter: Callback<()>, on_exit: Callback<()>) {
        self.watched.push(Watched {
            target,
            threshold_ratio,
            state: EntryState::Waiting,
            on_enter,
            on_exit,
        });
    }
}

fn class_toggle(element: &Element, add: bool) -> Callback<()> {
    let element = element.clone();
    Callback::from(move |_| {
        let classes = element.class_list();
        let result = if add {
            classes.add_1(ENTERED_CLASS)
        } else {
            classes.remove_1(ENTERED_CLASS)
        };
        if let Err(e) = result {
            warn!("Failed to toggle entry class: {:?}", e);
        }
    })
}

fn watch_animated_sections() -> Result<Vec<WindowListener>, PageError> {
    let window = web_sys::window().ok_or(PageError::NoWindow)?;
    let document = window.document().ok_or(PageError::NoDocument)?;
    let nodes = document.query_selector_all(ANIMATED_SELECTOR)?;

    let mut trigger = ScrollTrigger::new();
    for i in 0..nodes.length() {
        let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let on_enter = class_toggle(&element, true);
        let on_exit = class_toggle(&element, false);
        trigger.observe(element, ENTRY_THRESHOLD, on_enter, on_exit);
    }
    if trigger.is_empty() {
        return Err(PageError::MissingElement(ANIMATED_SELECTOR.to_string()));
    }

    document
        .document_element()
        .ok_or(PageError::NoDocument)?
        .class_list()
        .add_1(ACTIVE_CLASS)?;

    let trigger = Rc::new(RefCell::new(trigger));
    let poll = {
        let trigger = trigger.clone();
        move || match viewport_height() {
            Ok(height) => trigger.borrow_mut().poll(height),
            Err(e) => warn!("Skipping entry poll: {}", e),
        }
    };

    // Sections already in view animate straight away.
    poll();

    let on_scroll = {
        let poll = poll.clone();
        Closure::wrap(Box::new(poll) as Box<dyn FnMut()>)
    };
    let on_resize = Closure::wrap(Box::new(poll) as Box<dyn FnMut()>);
    Ok(vec![
        WindowListener::attach("scroll", on_scroll)?,
        WindowListener::attach("resize", on_resize)?,
    ])
}

/// Plays the fade/slide entry on every `[data-animate]` section as it scrolls
/// into view and reverses it when scrolled back out.
#[hook]
pub fn use_entry_animations() {
    use_effect_with_deps(
        |_| {
            let listeners = match watch_animated_sections() {
                Ok(listeners) => listeners,
                Err(e) => {
                    warn!("Entry animations disabled: {}", e);
                    Vec::new()
                }
            };
            move || drop(listeners)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeSection {
        top: Rc<Cell<f64>>,
    }

    impl TriggerTarget for FakeSection {
        fn top_edge(&self) -> f64 {
            self.top.get()
        }
    }

    fn counter() -> (Rc<Cell<u32>>, Callback<()>) {
        let count = Rc::new(Cell::new(0));
        let callback = {
            let count = count.clone();
            Callback::from(move |_| count.set(count.get() + 1))
        };
        (count, callback)
    }

    #[test]
    fn state_flips_only_on_crossings() {
        let (state, crossing) = EntryState::Waiting.next(900.0, 1000.0, 0.8);
        assert_eq!((state, crossing), (EntryState::Waiting, None));

        let (state, crossing) = state.next(700.0, 1000.0, 0.8);
        assert_eq!((state, crossing), (EntryState::Entered, Some(Crossing::Enter)));

        let (state, crossing) = state.next(100.0, 1000.0, 0.8);
        assert_eq!((state, crossing), (EntryState::Entered, None));

        let (state, crossing) = state.next(800.0, 1000.0, 0.8);
        assert_eq!((state, crossing), (EntryState::Waiting, Some(Crossing::Exit)));
    }

    #[test]
    fn trigger_plays_once_per_direction() {
        let top = Rc::new(Cell::new(1200.0));
        let (entered, on_enter) = counter();
        let (exited, on_exit) = counter();

        let mut trigger = ScrollTrigger::new();
        assert!(trigger.is_empty());
        trigger.observe(FakeSection { top: top.clone() }, ENTRY_THRESHOLD, on_enter, on_exit);
        assert!(!trigger.is_empty());

        trigger.poll(1000.0);
        assert_eq!((entered.get(), exited.get()), (0, 0));

        for position in [750.0, 500.0, 100.0, -400.0] {
            top.set(position);
            trigger.poll(1000.0);
        }
        assert_eq!((entered.get(), exited.get()), (1, 0));

        top.set(950.0);
        trigger.poll(1000.0);
        trigger.poll(1000.0);
        assert_eq!((entered.get(), exited.get()), (1, 1));

        top.set(600.0);
        trigger.poll(1000.0);
        assert_eq!((entered.get(), exited.get()), (2, 1));
    }

    #[test]
    fn sections_are_tracked_independently() {
        let first = Rc::new(Cell::new(300.0));
        let second = Rc::new(Cell::new(1500.0));
        let (first_in, on_first) = counter();
        let (second_in, on_second) = counter();

        let mut trigger = ScrollTrigger::new();
        trigger.observe(FakeSection { top: first }, ENTRY_THRESHOLD, on_first, Callback::from(|_| ()));
        trigger.observe(FakeSection { top: second.clone() }, ENTRY_THRESHOLD, on_second, Callback::from(|_| ()));

        trigger.poll(1000.0);
        assert_eq!((first_in.get(), second_in.get()), (1, 0));

        second.set(790.0);
        trigger.poll(1000.0);
        assert_eq!((first_in.get(), second_in.get()), (1, 1));
    }

    #[test]
    fn resize_can_cross_the_threshold() {
        let (entered, on_enter) = counter();
        let mut trigger = ScrollTrigger::new();
        trigger.observe(FakeSection { top: Rc::new(Cell::new(700.0)) }, ENTRY_THRESHOLD, on_enter, Callback::from(|_| ()));

        trigger.poll(800.0);
        assert_eq!(entered.get(), 0);
        trigger.poll(1000.0);
        assert_eq!(entered.get(), 1);
    }
}
