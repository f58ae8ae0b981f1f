use std::rc::Rc;

use log::{error, info, warn, Level};
use web_sys::window;
use yew::prelude::*;

mod components;
mod config;
mod content;
mod currency;
mod data;
mod engine;
mod hooks;
mod pages;
mod styles;

use components::{CookiePopup, Header, PodcastPlayer};
use config::DeckConfig;
use content::Language;
use currency::Currency;
use pages::{CaseStudy, Financials, Pitch};

/// Which top-level view is showing. A plain state switch, not a router.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Pitch,
    Financials,
    CaseStudy,
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<DeckConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let language = use_state(|| Language::En);
    let currency = use_state(|| Currency::Usd);
    let page = use_state(|| Page::Pitch);
    let podcast_open = use_state(|| false);
    let consented = use_state(|| config.investor_consent);
    let _global_style = use_memo(|_| styles::global_style(), ());

    use_effect_with_deps(
        |language: &Language| {
            if let Some(root) = window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                for (name, value) in language.root_attributes() {
                    if let Err(err) = root.set_attribute(name, value) {
                        warn!("Setting {} on the root element failed: {:?}", name, err);
                    }
                }
            }
            || ()
        },
        *language,
    );

    // Every page change, including the first render, starts at the top.
    use_effect_with_deps(
        |page: &Page| {
            info!("Showing {:?} page", page);
            if let Some(window) = window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        *page,
    );

    let show_page = |target: Page| {
        let page = page.clone();
        Callback::from(move |_: ()| page.set(target))
    };

    let on_language = {
        let language = language.clone();
        Callback::from(move |next: Language| language.set(next))
    };
    let on_currency = {
        let currency = currency.clone();
        Callback::from(move |next: Currency| currency.set(next))
    };
    let open_podcast = {
        let podcast_open = podcast_open.clone();
        Callback::from(move |_: ()| podcast_open.set(true))
    };
    let close_podcast = {
        let podcast_open = podcast_open.clone();
        Callback::from(move |_: ()| podcast_open.set(false))
    };
    let on_consent = {
        let consented = consented.clone();
        Callback::from(move |_: ()| {
            info!("Investor notice accepted");
            consented.set(true);
        })
    };

    let body = match *page {
        Page::Pitch => html! {
            <>
                <Header
                    language={*language}
                    currency={*currency}
                    on_language={on_language}
                    on_currency={on_currency}
                    on_podcast={open_podcast}
                    on_case_study={show_page(Page::CaseStudy)}
                />
                <Pitch
                    language={*language}
                    currency={*currency}
                    on_view_financials={show_page(Page::Financials)}
                    on_case_study={show_page(Page::CaseStudy)}
                />
            </>
        },
        Page::Financials => html! {
            <Financials language={*language} currency={*currency} on_back={show_page(Page::Pitch)} />
        },
        Page::CaseStudy => html! {
            <CaseStudy language={*language} currency={*currency} on_back={show_page(Page::Pitch)} />
        },
    };

    html! {
        <ContextProvider<Rc<DeckConfig>> context={config.clone()}>
            { body }
            <PodcastPlayer
                is_open={*podcast_open}
                on_close={close_podcast}
                audio_src={config.podcast_src.clone()}
                title={config.podcast_title.clone()}
                language={*language}
                skip_seconds={config.skip_seconds}
            />
            <CookiePopup
                language={*language}
                consented={*consented}
                delay_ms={config.consent_delay_ms}
                on_accept={on_consent}
            />
        </ContextProvider<Rc<DeckConfig>>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(tracing::Level::DEBUG)
            .build(),
    );

    let config = DeckConfig::from_document().unwrap_or_else(|err| {
        error!("Falling back to default deck config: {}", err);
        DeckConfig::default()
    });

    info!("Starting deck");
    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
