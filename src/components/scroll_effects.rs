use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Node,
};
use yew::prelude::*;

use crate::config;
use crate::timing::Debounce;

/// Elements primed for the one-shot fade-in.
const ANIMATED_SELECTOR: &str =
    ".service-card, .team-card, .testimonial-card, .feature-card, .contact-item";

/// Grid cards additionally cascade with a per-sibling delay.
const STAGGERED_CLASSES: [&str; 3] = ["service-card", "team-card", "feature-card"];

fn section_revealed(section_top: f64, viewport_height: f64) -> bool {
    section_top < viewport_height - config::SECTION_REVEAL_MARGIN
}

fn card_speed(index: usize) -> f64 {
    config::FLOATING_CARD_PARALLAX_BASE + config::FLOATING_CARD_PARALLAX_STEP * index as f64
}

fn parallax_shift(scrolled: f64, speed: f64) -> String {
    format!("translateY({}px)", scrolled * speed)
}

fn stagger_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * config::CARD_STAGGER_STEP_SECS)
}

/// Marks every section whose top edge has entered the viewport (minus the
/// reveal margin). Classes are only ever added, so a section never
/// un-reveals when scrolling back up.
fn reveal_sections() {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let document = match window.document() {
        Some(document) => document,
        None => return,
    };
    let viewport = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    if let Ok(sections) = document.query_selector_all("section") {
        for i in 0..sections.length() {
            if let Some(section) = sections.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                if section_revealed(section.get_bounding_client_rect().top(), viewport) {
                    let _ = section.class_list().add_1("revealed");
                }
            }
        }
    }
}

/// Depth illusion for the hero: runs on every raw scroll event, unlike the
/// coalesced and debounced pipelines.
fn apply_parallax() {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let document = match window.document() {
        Some(document) => document,
        None => return,
    };
    let scrolled = window.page_y_offset().unwrap_or(0.0);

    if let Ok(Some(hero)) = document.query_selector(".hero-image") {
        if let Ok(hero) = hero.dyn_into::<HtmlElement>() {
            let _ = hero.style().set_property(
                "transform",
                &parallax_shift(scrolled, config::HERO_PARALLAX_SPEED),
            );
        }
    }

    if let Ok(cards) = document.query_selector_all(".hero-floating-card") {
        for i in 0..cards.length() {
            if let Some(card) = cards.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                let _ = card.style().set_property(
                    "transform",
                    &parallax_shift(scrolled, card_speed(i as usize)),
                );
            }
        }
    }
}

fn sibling_index(target: &Element) -> usize {
    if let Some(parent) = target.parent_element() {
        let children = parent.children();
        for i in 0..children.length() {
            if let Some(child) = children.item(i) {
                let node: &Node = target.as_ref();
                if child.is_same_node(Some(node)) {
                    return i as usize;
                }
            }
        }
    }
    0
}

fn wants_stagger(target: &Element) -> bool {
    let classes = target.class_list();
    STAGGERED_CLASSES.iter().any(|class| classes.contains(class))
}

fn fade_in(target: &Element, observer: &IntersectionObserver) {
    if let Some(card) = target.dyn_ref::<HtmlElement>() {
        let style = card.style();
        if wants_stagger(target) {
            let _ = style.set_property("transition-delay", &stagger_delay(sibling_index(target)));
        }
        let _ = style.set_property("opacity", "1");
        let _ = style.set_property("transform", "translateY(0)");
    }
    // One-shot: each element transitions at most once.
    observer.unobserve(target);
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Primes the card-like elements (hidden, offset) and watches them with a
/// one-shot observer. The closure is returned alongside the observer so it
/// outlives the subscription.
fn observe_animated(document: &Document) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    if entry.is_intersecting() {
                        fade_in(&entry.target(), &observer);
                    }
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(0.1));
    options.set_root_margin("0px 0px -50px 0px");
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

    if let Ok(cards) = document.query_selector_all(ANIMATED_SELECTOR) {
        for i in 0..cards.length() {
            if let Some(card) = cards.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                let style = card.style();
                let _ = style.set_property("opacity", "0");
                let _ = style.set_property("transform", "translateY(30px)");
                let _ = style.set_property(
                    "transition",
                    "opacity 0.6s ease-out, transform 0.6s ease-out",
                );
                observer.observe(&card);
            }
        }
    }

    Some((observer, callback))
}

fn preload_critical_images() {
    for src in config::CRITICAL_IMAGES {
        if let Ok(image) = web_sys::HtmlImageElement::new() {
            image.set_src(src);
        }
    }
}

fn mark_loaded(document: &Document) {
    if let Some(body) = document.body() {
        let _ = body.class_list().add_1("loaded");
    }
}

/// Renderless component wiring the scroll-driven presentation: section
/// reveals (debounced), parallax (raw), staggered card fade-ins (one-shot
/// observer), critical image preload and the body `loaded` flag.
#[function_component(ScrollEffects)]
pub fn scroll_effects() -> Html {
    use_effect_with_deps(
        |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            preload_critical_images();

            // First pass before any scrolling happens.
            reveal_sections();

            let reveal = Debounce::new(config::REVEAL_DEBOUNCE_MS, reveal_sections);
            let reveal_cb = Closure::wrap(Box::new(move || reveal.trigger()) as Box<dyn FnMut()>);
            window
                .add_event_listener_with_callback("scroll", reveal_cb.as_ref().unchecked_ref())
                .unwrap();

            let parallax_cb = Closure::wrap(Box::new(apply_parallax) as Box<dyn FnMut()>);
            window
                .add_event_listener_with_callback("scroll", parallax_cb.as_ref().unchecked_ref())
                .unwrap();

            let observing = observe_animated(&document);

            let loaded_document = document.clone();
            let load_cb =
                Closure::wrap(Box::new(move || mark_loaded(&loaded_document)) as Box<dyn FnMut()>);
            if document.ready_state() == "complete" {
                mark_loaded(&document);
            } else {
                window
                    .add_event_listener_with_callback("load", load_cb.as_ref().unchecked_ref())
                    .unwrap();
            }

            move || {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    reveal_cb.as_ref().unchecked_ref(),
                );
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    parallax_cb.as_ref().unchecked_ref(),
                );
                let _ = window.remove_event_listener_with_callback(
                    "load",
                    load_cb.as_ref().unchecked_ref(),
                );
                if let Some((observer, _callback)) = &observing {
                    observer.disconnect();
                }
            }
        },
        (),
    );

    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_reveal_past_the_margin() {
        let viewport = 900.0;
        assert!(section_revealed(0.0, viewport));
        assert!(section_revealed(749.9, viewport));
        assert!(!section_revealed(750.0, viewport));
        assert!(!section_revealed(2000.0, viewport));
    }

    #[test]
    fn floating_cards_speed_up_with_their_index() {
        assert_eq!(card_speed(0), 0.05);
        assert_eq!(card_speed(1), 0.07);
        assert!((card_speed(2) - 0.09).abs() < 1e-12);
    }

    #[test]
    fn parallax_translates_vertically() {
        assert_eq!(parallax_shift(300.0, 0.1), "translateY(30px)");
        assert_eq!(parallax_shift(0.0, 0.1), "translateY(0px)");
    }

    #[test]
    fn stagger_grows_by_a_tenth_per_sibling() {
        assert_eq!(stagger_delay(0), "0.0s");
        assert_eq!(stagger_delay(1), "0.1s");
        assert_eq!(stagger_delay(4), "0.4s");
    }
}
