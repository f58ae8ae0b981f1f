use std::rc::Rc;

use yew::prelude::*;

use crate::components::{FadeInSection, SectionTitle};
use crate::config::DeckConfig;
use crate::content::{content, Language};
use crate::currency::{format_currency, Currency, Unit};
use crate::data::{FIVE_YEAR_PLAN, MARKET_STATS, PROJECTIONS, ROUND_SEEKING_M};
use crate::hooks::use_number_format;

use super::pitch::UseOfFunds;

#[derive(Properties, PartialEq)]
pub struct CaseStudyProps {
    pub language: Language,
    pub currency: Currency,
    pub on_back: Callback<()>,
}

#[function_component(CaseStudy)]
pub fn case_study(props: &CaseStudyProps) -> Html {
    let config = use_context::<Rc<DeckConfig>>().unwrap_or_default();
    let format = use_number_format();
    let copy = &content(props.language).case_study_page;
    let rate = config.usd_to_aed_rate;
    let money = |value: f64, unit: Unit| format_currency(value, unit, props.currency, rate, &format);

    let gcc_market = MARKET_STATS[1];
    let year_three = PROJECTIONS[PROJECTIONS.len() - 1];
    let final_roi = FIVE_YEAR_PLAN[FIVE_YEAR_PLAN.len() - 1].roi;
    let metrics = [
        (copy.metric_market, money(gcc_market.value, gcc_market.unit)),
        (copy.metric_revenue, money(year_three.revenue, Unit::Millions)),
        (copy.metric_ask, money(ROUND_SEEKING_M, Unit::Millions)),
        (copy.metric_roi, format!("{}%", format.format(final_roi, 0))),
    ];

    let back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    html! {
        <main class="section">
            <div class="container" style="max-width: 1000px;">
                <button class="nav-link no-print" onclick={back}>{ copy.back }</button>
                <SectionTitle title={copy.title} subtitle={Some(AttrValue::from(copy.subtitle))} />

                <FadeInSection class={classes!("glass")}>
                    <h3>{ copy.exec_summary_title }</h3>
                    <p>{ copy.exec_summary_body }</p>
                    <div class="grid grid-4" style="margin-top: 24px;">
                        { for metrics.into_iter().map(|(title, value)| html! {
                            <div class="glass" style="text-align: center; border-top: 4px solid #517ae5;">
                                <p class="stat-label">{ title }</p>
                                <p class="stat-value">{ value }</p>
                            </div>
                        }) }
                    </div>
                </FadeInSection>

                <FadeInSection class={classes!("glass")}>
                    <h3>{ copy.funds_title }</h3>
                    <UseOfFunds language={props.language} />
                </FadeInSection>

                <FadeInSection class={classes!("glass")}>
                    <h3>{ copy.risk_title }</h3>
                    <div style="overflow-x: auto;">
                        <table class="data-table">
                            <thead>
                                <tr>
                                    { for copy.risk_headers.iter().map(|header| html! { <th>{ *header }</th> }) }
                                </tr>
                            </thead>
                            <tbody>
                                { for copy.risks.iter().map(|risk| html! {
                                    <tr>
                                        <td><strong>{ risk.category }</strong></td>
                                        <td>{ risk.desc }</td>
                                        <td>
                                            <span class={classes!("risk-chip", risk.likelihood.class())}>
                                                { risk.likelihood.label(copy) }
                                            </span>
                                        </td>
                                        <td>
                                            <span class={classes!("risk-chip", risk.impact.class())}>
                                                { risk.impact.label(copy) }
                                            </span>
                                        </td>
                                        <td>{ risk.mitigation }</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                </FadeInSection>

                <FadeInSection class={classes!("glass")}>
                    <h3>{ copy.conclusion_title }</h3>
                    <p>{ copy.conclusion_body }</p>
                    <div class="no-print" style="text-align: center; margin-top: 24px;">
                        <a class="button" href={config.meeting_url.clone()} target="_blank" rel="noopener noreferrer">
                            { copy.cta }
                        </a>
                    </div>
                </FadeInSection>
            </div>
        </main>
    }
}
