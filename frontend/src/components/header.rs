use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::{content, Language};
use crate::currency::Currency;

/// Scroll offset after which the header gets its solid background.
const SCROLLED_AFTER_PX: f64 = 10.0;

/// Smoothly scrolls the section with the given `#id` into view.
pub fn scroll_to_section(href: &str) {
    let id = href.trim_start_matches('#');
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::warn!("No section with id {}", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub language: Language,
    pub currency: Currency,
    pub on_language: Callback<Language>,
    pub on_currency: Callback<Currency>,
    pub on_podcast: Callback<()>,
    pub on_case_study: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let text = content(props.language);
    let menu_open = use_bool_toggle(false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = window().map(|window| {
                    let scroll_window = window.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        if let Ok(scroll_y) = scroll_window.scroll_y() {
                            is_scrolled.set(scroll_y > SCROLLED_AFTER_PX);
                        }
                    }) as Box<dyn FnMut()>);
                    if let Err(err) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        log::error!("Could not listen for scroll: {:?}", err);
                    }
                    (window, callback)
                });

                move || {
                    if let Some((window, callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let close_menu = {
        let menu_open = menu_open.clone();
        move || {
            if *menu_open {
                menu_open.toggle();
            }
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.toggle();
        })
    };

    let nav_links = text.nav.iter().map(|(label, href)| {
        let close_menu = close_menu.clone();
        let href = *href;
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            close_menu();
            scroll_to_section(href);
        });
        html! {
            <a class="nav-link" href={href} {onclick}>{ *label }</a>
        }
    }).collect::<Html>();

    let currency_button = |currency: Currency, label: &'static str| {
        let on_currency = props.on_currency.clone();
        html! {
            <button
                class={classes!((props.currency == currency).then_some("active"))}
                title={currency.code()}
                onclick={Callback::from(move |_| on_currency.emit(currency))}
            >
                { label }
            </button>
        }
    };

    let language_button = |language: Language, label: &'static str| {
        let on_language = props.on_language.clone();
        html! {
            <button
                class={classes!((props.language == language).then_some("active"))}
                onclick={Callback::from(move |_| on_language.emit(language))}
            >
                { label }
            </button>
        }
    };

    let print = Callback::from(|_: MouseEvent| {
        if let Some(window) = window() {
            if let Err(err) = window.print() {
                log::error!("Print failed: {:?}", err);
            }
        }
    });

    let on_podcast = {
        let on_podcast = props.on_podcast.clone();
        let close_menu = close_menu.clone();
        Callback::from(move |_: MouseEvent| {
            close_menu();
            on_podcast.emit(());
        })
    };

    let on_case_study = {
        let on_case_study = props.on_case_study.clone();
        Callback::from(move |_: MouseEvent| {
            close_menu();
            on_case_study.emit(());
        })
    };

    let scroll_top = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Some(window) = window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    html! {
        <nav class={classes!("top-nav", "no-print", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo" onclick={scroll_top}>{"Part2Car.ae"}</a>

                <button class="burger-menu" aria-label={text.toggle_menu} onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>

                <div class={classes!("nav-links", (*menu_open).then_some("mobile-menu-open"))}>
                    { nav_links }
                    <button class="nav-link" onclick={on_case_study}>{ text.case_study }</button>
                    <button class="nav-link" onclick={on_podcast}>{"🎧 "}{ text.podcast }</button>
                    <button class="nav-link" onclick={print}>{ text.print }</button>
                    <div class="toggle-group">
                        { currency_button(Currency::Usd, "$") }
                        { currency_button(Currency::Aed, "AED") }
                    </div>
                    <div class="toggle-group">
                        { language_button(Language::En, "EN") }
                        { language_button(Language::Ar, "ع") }
                    </div>
                </div>
            </div>
        </nav>
    }
}
