use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::timing::FrameCoalescer;

/// Inline style for one hamburger bar; the three bars fold into an "X"
/// while the mobile menu is open.
fn hamburger_line_style(index: usize, open: bool) -> &'static str {
    if !open {
        return "transform: none; opacity: 1;";
    }
    match index {
        0 => "transform: rotate(45deg) translate(5px, 5px); opacity: 1;",
        1 => "opacity: 0;",
        _ => "transform: rotate(-45deg) translate(7px, -6px); opacity: 1;",
    }
}

/// Picks the section whose box straddles the probe point. Sections come in
/// document order and the last match wins; with no match the first section
/// is reported, which covers the top-of-page state.
fn current_section<'a>(sections: &[(&'a str, f64, f64)], probe: f64) -> Option<&'a str> {
    let mut current = sections.first().map(|&(id, _, _)| id);
    for &(id, top, bottom) in sections {
        if top <= probe && bottom >= probe {
            current = Some(id);
        }
    }
    current
}

fn scroll_target(element_top: f64, page_y: f64, nav_height: f64) -> f64 {
    element_top + page_y - nav_height - config::SCROLL_MARGIN
}

fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAVBAR_SCROLL_THRESHOLD
}

fn navbar_height(document: &Document) -> f64 {
    document
        .query_selector(".navbar")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0)
}

/// Smooth-scrolls so `section_id` lands just below the navbar. Unknown ids
/// are skipped without complaint.
pub fn scroll_to_section(section_id: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(element) = document.get_element_by_id(section_id) {
                let top = element.get_bounding_client_rect().top();
                let page_y = window.page_y_offset().unwrap_or(0.0);
                let options = web_sys::ScrollToOptions::new();
                options.set_top(scroll_target(top, page_y, navbar_height(&document)));
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let active_section = use_state_eq(|| config::SECTIONS[0].0);
    let is_scrolled = use_state_eq(|| false);

    // Active section + navbar background, coalesced to one pass per frame.
    {
        let active_section = active_section.clone();
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || {
                    let window = match web_sys::window() {
                        Some(window) => window,
                        None => return,
                    };
                    let document = match window.document() {
                        Some(document) => document,
                        None => return,
                    };
                    let probe = navbar_height(&document) + config::SECTION_PROBE_OFFSET;
                    let mut boxes = Vec::with_capacity(config::SECTIONS.len());
                    for (id, _) in config::SECTIONS {
                        if let Some(element) = document.get_element_by_id(id) {
                            let rect = element.get_bounding_client_rect();
                            boxes.push((id, rect.top(), rect.bottom()));
                        }
                    }
                    if let Some(id) = current_section(&boxes, probe) {
                        active_section.set(id);
                    }
                    is_scrolled.set(navbar_scrolled(window.scroll_y().unwrap_or(0.0)));
                };
                update();

                let coalescer = FrameCoalescer::new(update);
                let scroll_cb =
                    Closure::wrap(Box::new(move || coalescer.trigger()) as Box<dyn FnMut()>);
                let window = web_sys::window().unwrap();
                window
                    .add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_cb.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    // Escape closes the menu; re-registered whenever the open state flips.
    {
        let menu_open = menu_open.clone();
        let currently_open = *menu_open;
        use_effect_with_deps(
            move |open: &bool| {
                let open = *open;
                let key_cb = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
                    if open && event.key() == "Escape" {
                        menu_open.set(false);
                    }
                }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);
                let document = web_sys::window().unwrap().document().unwrap();
                document
                    .add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    let _ = document.remove_event_listener_with_callback(
                        "keydown",
                        key_cb.as_ref().unchecked_ref(),
                    );
                }
            },
            currently_open,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_link = {
        let menu_open = menu_open.clone();
        move |section_id: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                scroll_to_section(section_id);
                menu_open.set(false);
            })
        }
    };

    let desktop_links = config::SECTIONS
        .iter()
        .map(|&(id, label)| {
            html! {
                <a
                    href={format!("#{}", id)}
                    class={classes!("nav-link", (*active_section == id).then(|| "active"))}
                    onclick={nav_link(id)}
                >
                    { label }
                </a>
            }
        })
        .collect::<Html>();

    let mobile_links = config::SECTIONS
        .iter()
        .map(|&(id, label)| {
            html! {
                <a
                    href={format!("#{}", id)}
                    class={classes!("mobile-nav-link", (*active_section == id).then(|| "active"))}
                    onclick={nav_link(id)}
                >
                    { label }
                </a>
            }
        })
        .collect::<Html>();

    html! {
        <nav class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-container">
                <a href="#inicio" class="nav-logo" onclick={nav_link("inicio")}>
                    { "Nexia Consultores" }
                </a>
                <div class="nav-links">
                    { desktop_links }
                </div>
                <button class="mobile-menu-btn" aria-label="Abrir menú" onclick={toggle_menu}>
                    <span class="hamburger-line" style={hamburger_line_style(0, *menu_open)}></span>
                    <span class="hamburger-line" style={hamburger_line_style(1, *menu_open)}></span>
                    <span class="hamburger-line" style={hamburger_line_style(2, *menu_open)}></span>
                </button>
            </div>
            <div id="mobile-menu" class={classes!("mobile-menu", (*menu_open).then(|| "active"))}>
                { mobile_links }
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hamburger_bars_rest_when_closed() {
        for index in 0..3 {
            assert_eq!(hamburger_line_style(index, false), "transform: none; opacity: 1;");
        }
    }

    #[test]
    fn hamburger_bars_fold_into_x_when_open() {
        assert!(hamburger_line_style(0, true).contains("rotate(45deg)"));
        assert_eq!(hamburger_line_style(1, true), "opacity: 0;");
        assert!(hamburger_line_style(2, true).contains("rotate(-45deg)"));
    }

    #[test]
    fn probe_point_selects_containing_section() {
        let boxes = [
            ("inicio", -500.0, 100.0),
            ("servicios", 100.0, 700.0),
            ("nosotros", 700.0, 1300.0),
        ];
        assert_eq!(current_section(&boxes, 164.0), Some("servicios"));
        assert_eq!(current_section(&boxes, 800.0), Some("nosotros"));
    }

    #[test]
    fn probe_point_falls_back_to_first_section() {
        // Top of page: every section still below the probe.
        let boxes = [
            ("inicio", 800.0, 1400.0),
            ("servicios", 1400.0, 2000.0),
        ];
        assert_eq!(current_section(&boxes, 164.0), Some("inicio"));
        assert_eq!(current_section(&[], 164.0), None);
    }

    #[test]
    fn probe_selection_is_stable_for_a_fixed_offset() {
        let boxes = [("inicio", 0.0, 600.0), ("servicios", 600.0, 1200.0)];
        let first = current_section(&boxes, 164.0);
        assert_eq!(current_section(&boxes, 164.0), first);
    }

    #[test]
    fn scroll_target_accounts_for_navbar_and_margin() {
        // Element 400px down the viewport, page scrolled 200px, 64px navbar.
        assert_eq!(scroll_target(400.0, 200.0, 64.0), 516.0);
    }

    #[test]
    fn navbar_swaps_background_strictly_past_threshold() {
        assert!(!navbar_scrolled(0.0));
        assert!(!navbar_scrolled(50.0));
        assert!(navbar_scrolled(50.1));
        assert!(navbar_scrolled(400.0));
    }
}
