use std::rc::Rc;

use yew::prelude::*;

use crate::components::{ChartCanvas, ChartKind, FadeInSection};
use crate::config::DeckConfig;
use crate::content::{content, Language};
use crate::currency::{format_currency, Currency, Unit};
use crate::data::{headline_growth, FIVE_YEAR_PLAN};
use crate::hooks::use_number_format;

#[derive(Properties, PartialEq)]
pub struct FinancialsProps {
    pub language: Language,
    pub currency: Currency,
    pub on_back: Callback<()>,
}

fn sign_class(value: f64) -> &'static str {
    if value < 0.0 {
        "negative"
    } else {
        "positive"
    }
}

/// Five-year projections: headline cards, four charts and the detail table.
#[function_component(Financials)]
pub fn financials(props: &FinancialsProps) -> Html {
    let config = use_context::<Rc<DeckConfig>>().unwrap_or_default();
    let format = use_number_format();
    let copy = &content(props.language).financials;
    let currency = props.currency;
    let rate = config.usd_to_aed_rate;
    let money = |millions: f64| format_currency(millions, Unit::Millions, currency, rate, &format);

    let first = FIVE_YEAR_PLAN[0];
    let last = FIVE_YEAR_PLAN[FIVE_YEAR_PLAN.len() - 1];
    let cards = [
        (
            copy.agent_growth,
            format!("+{}%", format.format(headline_growth(first.agents, last.agents), 0)),
            format!("{} → {}", format.format(first.agents, 0), format.format(last.agents, 0)),
        ),
        (
            copy.revenue_growth,
            format!("+{}%", format.format(headline_growth(first.global_revenue, last.global_revenue), 0)),
            format!("{} → {}", money(first.global_revenue), money(last.global_revenue)),
        ),
        (
            copy.final_roi,
            format!("{}%", format.format(last.roi, 0)),
            copy.final_roi_note.to_string(),
        ),
        (copy.profit_2030, money(last.profit), copy.profit_2030_note.to_string()),
    ];

    let charts = [
        (copy.chart_revenue_vs_expenses, ChartKind::RevenueVsExpenses),
        (copy.chart_revenue_streams, ChartKind::RevenueStreams),
        (copy.chart_agent_growth, ChartKind::AgentGrowth),
        (copy.chart_roi, ChartKind::Roi),
    ];

    let rows = FIVE_YEAR_PLAN.iter().map(|year| html! {
        <tr>
            <td><strong>{ year.year }</strong></td>
            <td>{ format.format(year.agents, 0) }</td>
            <td>{ money(year.agent_revenue) }</td>
            <td>{ money(year.other_revenue) }</td>
            <td><strong>{ money(year.global_revenue) }</strong></td>
            <td>{ money(year.expenses) }</td>
            <td class={sign_class(year.profit)}>{ money(year.profit) }</td>
            <td class={sign_class(year.gross_margin)}>{ format!("{}%", format.format(year.gross_margin, 1)) }</td>
            <td class={sign_class(year.roi)}>{ format!("{}%", format.format(year.roi, 0)) }</td>
        </tr>
    }).collect::<Html>();

    let back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    html! {
        <main class="section">
            <div class="container">
                <button class="nav-link no-print" onclick={back}>{ copy.back }</button>
                <div class="section-title">
                    <h2>{ copy.title }</h2>
                    <p>{ copy.subtitle }</p>
                </div>

                <FadeInSection>
                    <div class="grid grid-4" style="margin-bottom: 48px;">
                        { for cards.into_iter().map(|(label, value, note)| html! {
                            <div class="glass">
                                <p class="stat-label">{ label }</p>
                                <p class="stat-value">{ value }</p>
                                <small class="stat-label">{ note }</small>
                            </div>
                        }) }
                    </div>
                </FadeInSection>

                <div class="grid grid-2" style="margin-bottom: 48px;">
                    { for charts.into_iter().map(|(title, kind)| html! {
                        <FadeInSection class={classes!("glass")}>
                            <h3>{ title }</h3>
                            <ChartCanvas
                                kind={kind}
                                currency={currency}
                                usd_to_aed_rate={rate}
                                language={props.language}
                            />
                        </FadeInSection>
                    }) }
                </div>

                <FadeInSection class={classes!("glass")}>
                    <h3>{ copy.table_title }</h3>
                    <div style="overflow-x: auto;">
                        <table class="data-table">
                            <thead>
                                <tr>
                                    { for copy.table_headers.iter().map(|header| html! { <th>{ *header }</th> }) }
                                </tr>
                            </thead>
                            <tbody>{ rows }</tbody>
                        </table>
                    </div>
                    <p class="stat-label">
                        <strong>{ copy.note_title }</strong>{" "}{ copy.note_body }
                    </p>
                </FadeInSection>
            </div>
        </main>
    }
}
