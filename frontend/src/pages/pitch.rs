use std::rc::Rc;

use chrono::Datelike;
use yew::prelude::*;

use crate::components::{AnimatedCounter, ChartCanvas, ChartKind, FadeInSection, SectionTitle};
use crate::config::DeckConfig;
use crate::content::{content, Language};
use crate::currency::{format_currency, Currency, Unit};
use crate::data::{
    MARKET_STATS, PROJECTIONS, ROUND_EQUITY_PERCENT, ROUND_MIN_TICKET_K, ROUND_SEEKING_M,
    ROUND_VALUATION_M, USE_OF_FUNDS_SHARES,
};
use crate::hooks::use_number_format;

pub const USE_OF_FUNDS_COLORS: [&str; 3] = ["#517AE5", "#10B981", "#F59E0B"];

#[derive(Properties, PartialEq)]
pub struct PitchProps {
    pub language: Language,
    pub currency: Currency,
    pub on_view_financials: Callback<()>,
    pub on_case_study: Callback<()>,
}

#[function_component(Pitch)]
pub fn pitch(props: &PitchProps) -> Html {
    let config = use_context::<Rc<DeckConfig>>().unwrap_or_default();
    let format = use_number_format();
    let text = content(props.language);
    let currency = props.currency;
    let rate = config.usd_to_aed_rate;
    let counter_ms = config.counter_duration_ms;
    let money = |value: f64, unit: Unit| format_currency(value, unit, currency, rate, &format);

    let active_year = use_state(|| 0usize);
    let year = PROJECTIONS[(*active_year).min(PROJECTIONS.len() - 1)];

    let year_tabs = text.year_labels.iter().enumerate().map(|(i, label)| {
        let active_year = active_year.clone();
        html! {
            <button
                class={classes!((*active_year == i).then_some("active"))}
                onclick={Callback::from(move |_| active_year.set(i))}
            >
                { *label }
            </button>
        }
    }).collect::<Html>();

    // (label, end, prefix, suffix)
    let projection_stats: [(&str, f64, String, String); 6] = [
        (
            text.projected_revenue,
            currency.from_usd(year.revenue, rate),
            currency.prefix().to_string(),
            format!("M{}", currency.suffix()),
        ),
        (text.active_customers, year.customers, String::new(), String::new()),
        (text.monthly_orders, year.orders, String::new(), String::new()),
        (text.gross_margin, year.margin, String::new(), "%".to_string()),
        (text.virtual_shelves, year.virtual_shelves, String::new(), String::new()),
        (text.partners, year.partners, String::new(), String::new()),
    ];

    let market_stats = MARKET_STATS.iter().zip(text.market_stat_labels.iter()).map(|(stat, label)| {
        let is_money = stat.unit == Unit::Billions;
        let end = if is_money { currency.from_usd(stat.value, rate) } else { stat.value };
        let prefix = if !stat.prefix.is_empty() {
            stat.prefix
        } else if is_money {
            currency.prefix()
        } else {
            ""
        };
        let suffix = if stat.is_percent {
            "%".to_string()
        } else {
            format!("{}{}", stat.unit.symbol(), if is_money { currency.suffix() } else { "" })
        };
        html! {
            <div class="glass" style="text-align: center;">
                <p class="stat-value" style="color: #517ae5;">
                    <AnimatedCounter end={end} duration_ms={counter_ms} prefix={prefix} suffix={suffix} />
                </p>
                <h3 class="stat-label">{ *label }</h3>
            </div>
        }
    }).collect::<Html>();

    let view_financials = {
        let on_view_financials = props.on_view_financials.clone();
        Callback::from(move |_: MouseEvent| on_view_financials.emit(()))
    };
    let case_study = {
        let on_case_study = props.on_case_study.clone();
        Callback::from(move |_: MouseEvent| on_case_study.emit(()))
    };
    let contact_href = config.contact_href(text.contact_us);

    html! {
        <main>
            <section id="hero" class="section" style="min-height: 100vh; display: flex; align-items: center;">
                <div class="container" style="text-align: center;">
                    <FadeInSection>
                        <p style="color: #517ae5; font-weight: 600;">{ text.hero_pre_title }</p>
                        <h1 style="font-size: clamp(2.25rem, 5vw, 4.5rem); line-height: 1.1;">{ text.hero_title }</h1>
                        <p style="max-width: 760px; margin: 0 auto 40px; color: #cbd5e1; font-size: 1.2rem;">
                            { text.hero_subtitle }
                        </p>
                        <div class="no-print" style="display: flex; justify-content: center; gap: 16px;">
                            <a class="button" href={config.meeting_url.clone()} target="_blank" rel="noopener noreferrer">
                                { text.schedule_meeting }
                            </a>
                            <a class="button outline" href={contact_href.clone()}>{ text.contact_us }</a>
                        </div>
                    </FadeInSection>
                </div>
            </section>

            <section id="about" class="section">
                <div class="container" style="max-width: 900px; text-align: center;">
                    <FadeInSection>
                        <SectionTitle title={text.about_title} />
                        <p style="font-size: 1.6rem; line-height: 1.6; color: #e2e8f0;">{ text.about_subtitle }</p>
                    </FadeInSection>
                </div>
            </section>

            <section id="features" class="section">
                <div class="container">
                    <FadeInSection>
                        <SectionTitle title={text.features_title} />
                        <div class="grid grid-3">
                            { for text.features.iter().map(|feature| html! {
                                <div class="glass" style="text-align: center;">
                                    <div style="font-size: 3rem;">{ feature.icon }</div>
                                    <h3>
                                        { feature.title }
                                        if feature.is_new {
                                            <span class="badge">{ text.new_feature }</span>
                                        }
                                    </h3>
                                    <p class="stat-label">{ feature.desc }</p>
                                </div>
                            }) }
                        </div>
                    </FadeInSection>
                </div>
            </section>

            <section id="projections" class="section">
                <div class="container">
                    <FadeInSection>
                        <SectionTitle title={text.projections_title} subtitle={Some(AttrValue::from(text.projections_subtitle))} />
                        <div class="tabs no-print">{ year_tabs }</div>
                        <div class="grid grid-3" style="text-align: center; margin-bottom: 48px;">
                            { for projection_stats.into_iter().map(|(label, end, prefix, suffix)| html! {
                                <div class="glass">
                                    <p class="stat-label">{ label }</p>
                                    <p class={classes!("stat-value", (end < 0.0).then_some("negative"))}>
                                        <AnimatedCounter end={end} duration_ms={counter_ms} prefix={prefix} suffix={suffix} />
                                    </p>
                                </div>
                            }) }
                        </div>
                        <div class="glass">
                            <ChartCanvas
                                kind={ChartKind::RevenueArea}
                                currency={currency}
                                usd_to_aed_rate={rate}
                                language={props.language}
                            />
                        </div>
                        <div class="no-print" style="text-align: center; margin-top: 48px;">
                            <button class="button" onclick={view_financials}>{ text.view_financials }</button>
                        </div>
                    </FadeInSection>
                </div>
            </section>

            <section id="market" class="section">
                <div class="container">
                    <FadeInSection>
                        <SectionTitle title={text.market_title} subtitle={Some(AttrValue::from(text.market_subtitle))} />
                        <div class="grid grid-4">{ market_stats }</div>
                    </FadeInSection>
                </div>
            </section>

            <section id="investment" class="section">
                <div class="container">
                    <FadeInSection>
                        <SectionTitle
                            title={text.investment_title}
                            pre_title={Some(AttrValue::from(text.investment_pre_title))}
                            subtitle={Some(AttrValue::from(text.investment_subtitle))}
                        />
                        <div class="grid grid-2">
                            <div class="glass">
                                <h3>{ text.round_details }</h3>
                                <dl class="terms">
                                    <dt>{ text.seeking }</dt>
                                    <dd>{ money(ROUND_SEEKING_M, Unit::Millions) }</dd>
                                    <dt>{ text.valuation }</dt>
                                    <dd>{ money(ROUND_VALUATION_M, Unit::Millions) }{" "}{ text.pre_money }</dd>
                                    <dt>{ text.equity_offered }</dt>
                                    <dd>{ format!("{}%", format.format(ROUND_EQUITY_PERCENT, 1)) }</dd>
                                    <dt>{ text.min_investment }</dt>
                                    <dd>{ money(ROUND_MIN_TICKET_K, Unit::Thousands) }</dd>
                                </dl>
                            </div>
                            <div class="glass">
                                <h3>{ text.use_of_funds }</h3>
                                <UseOfFunds language={props.language} />
                            </div>
                        </div>
                    </FadeInSection>
                </div>
            </section>

            <section id="cta" class="section">
                <div class="container" style="max-width: 760px; text-align: center;">
                    <FadeInSection>
                        <h2 style="font-size: 2.5rem;">{ text.cta_title }</h2>
                        <p class="stat-label" style="font-size: 1.1rem;">{ text.cta_subtitle }</p>
                        <div class="no-print" style="display: flex; justify-content: center; gap: 16px; margin-top: 32px;">
                            <a class="button" href={config.meeting_url.clone()} target="_blank" rel="noopener noreferrer">
                                { text.schedule_meeting }
                            </a>
                            <a class="button outline" href={contact_href}>{ text.contact_us }</a>
                        </div>
                    </FadeInSection>
                </div>
            </section>

            <footer>
                <div class="container">
                    <p class="no-print">
                        <button class="nav-link" onclick={case_study}>{ text.case_study }</button>
                    </p>
                    <p>{ format!("© {} Part2Car.ae. {}", chrono::Local::now().year(), text.footer_text) }</p>
                </div>
            </footer>
        </main>
    }
}

#[derive(Properties, PartialEq)]
pub struct UseOfFundsProps {
    pub language: Language,
}

/// Horizontal share bars for the Series A use-of-funds split.
#[function_component(UseOfFunds)]
pub fn use_of_funds(props: &UseOfFundsProps) -> Html {
    let text = content(props.language);
    html! {
        <div>
            { for text.use_of_funds_items.iter().zip(USE_OF_FUNDS_SHARES).zip(USE_OF_FUNDS_COLORS).map(
                |(((name, desc), share), color)| html! {
                    <div style="margin-bottom: 20px;">
                        <div style="display: flex; justify-content: space-between;">
                            <span>{ *name }</span>
                            <strong>{ format!("{}%", share) }</strong>
                        </div>
                        <div class="fund-bar">
                            <div style={format!("width: {}%; background: {};", share, color)} />
                        </div>
                        <small class="stat-label">{ *desc }</small>
                    </div>
                }
            ) }
        </div>
    }
}
