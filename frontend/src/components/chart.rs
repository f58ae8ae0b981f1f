//! Canvas charts for the projections, drawn with plotters.

use std::error::Error;

use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::content::{content, Language};
use crate::engine::number::NumberFormat;
use crate::currency::{format_converted, Currency, Unit};
use crate::data::{FinancialYear, FIVE_YEAR_PLAN, REVENUE_CURVE};
use crate::hooks::use_number_format;

const CANVAS_WIDTH: u32 = 600;
const CANVAS_HEIGHT: u32 = 320;

const BACKGROUND: RGBColor = RGBColor(30, 41, 59);
const AXIS: RGBColor = RGBColor(148, 163, 184);
const ACCENT: RGBColor = RGBColor(81, 122, 229);
const GREEN: RGBColor = RGBColor(74, 222, 128);
const AMBER: RGBColor = RGBColor(245, 158, 11);
const LOSS: RGBColor = RGBColor(248, 113, 113);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    RevenueArea,
    RevenueVsExpenses,
    RevenueStreams,
    AgentGrowth,
    Roi,
}

#[derive(Properties, PartialEq)]
pub struct ChartCanvasProps {
    pub kind: ChartKind,
    pub currency: Currency,
    pub usd_to_aed_rate: f64,
    pub language: Language,
}

/// Everything a draw routine needs besides the canvas.
struct ChartContext {
    currency: Currency,
    rate: f64,
    format: NumberFormat,
    language: Language,
}

impl ChartContext {
    fn money(&self, millions_usd: f64) -> f64 {
        self.currency.from_usd(millions_usd, self.rate)
    }

    /// Axis label for a value already converted to the display currency.
    fn money_label(&self, converted: f64) -> String {
        format_converted(converted, Unit::Millions, self.currency, &self.format)
    }
}

#[function_component(ChartCanvas)]
pub fn chart_canvas(props: &ChartCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let format = use_number_format();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |(kind, currency, rate, language)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    let ctx = ChartContext {
                        currency: *currency,
                        rate: *rate,
                        format,
                        language: *language,
                    };
                    if let Err(err) = draw(canvas, *kind, &ctx) {
                        log::error!("Drawing {:?} chart failed: {}", kind, err);
                    }
                }
                || ()
            },
            (props.kind, props.currency, props.usd_to_aed_rate, props.language),
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            class="chart-canvas"
            width={CANVAS_WIDTH.to_string()}
            height={CANVAS_HEIGHT.to_string()}
        />
    }
}

fn draw(canvas: HtmlCanvasElement, kind: ChartKind, ctx: &ChartContext) -> Result<(), Box<dyn Error>> {
    canvas.set_width(CANVAS_WIDTH);
    canvas.set_height(CANVAS_HEIGHT);
    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas has no 2d context")?;
    let root = backend.into_drawing_area();
    root.fill(&BACKGROUND)?;

    match kind {
        ChartKind::RevenueArea => draw_revenue_area(&root, ctx)?,
        ChartKind::RevenueVsExpenses => draw_revenue_vs_expenses(&root, ctx)?,
        ChartKind::RevenueStreams => draw_revenue_streams(&root, ctx)?,
        ChartKind::AgentGrowth => draw_agent_growth(&root, ctx)?,
        ChartKind::Roi => draw_roi(&root, ctx)?,
    }

    root.present()?;
    Ok(())
}

type Area = DrawingArea<CanvasBackend, plotters::coord::Shift>;

fn label_style() -> TextStyle<'static> {
    ("sans-serif", 13).into_font().color(&AXIS)
}

fn year_label(index: usize) -> String {
    FIVE_YEAR_PLAN
        .get(index)
        .map(|year| year.year.to_string())
        .unwrap_or_default()
}

/// Series captions and swatch colours, in drawing order.
fn legend(kind: ChartKind, language: Language) -> Vec<(&'static str, RGBColor)> {
    let text = content(language);
    let copy = &text.financials;
    match kind {
        ChartKind::RevenueArea => vec![(text.chart_revenue_label, ACCENT)],
        ChartKind::RevenueVsExpenses => vec![
            (copy.legend_global_revenue, ACCENT),
            (copy.legend_expenses, LOSS),
            (copy.legend_profit, GREEN),
        ],
        ChartKind::RevenueStreams => vec![
            (copy.legend_agent_revenue, ACCENT),
            (copy.legend_other_revenue, AMBER),
        ],
        ChartKind::AgentGrowth => vec![(copy.legend_agents, GREEN)],
        ChartKind::Roi => vec![(copy.legend_net_roi, ACCENT)],
    }
}

const MISSING_CAPTION: &str = "chart legend has fewer captions than series";

/// Upper bound with 10% headroom so the tallest point is not clipped.
fn headroom(max: f64) -> f64 {
    if max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

fn draw_revenue_area(root: &Area, ctx: &ChartContext) -> Result<(), Box<dyn Error>> {
    let text = content(ctx.language);
    let mut captions = legend(ChartKind::RevenueArea, ctx.language).into_iter();
    let (label, color) = captions.next().ok_or(MISSING_CAPTION)?;
    let points: Vec<(f64, f64)> = REVENUE_CURVE
        .iter()
        .map(|(month, revenue)| (*month, ctx.money(*revenue)))
        .collect();
    let max = points.iter().map(|(_, v)| *v).fold(0.0, f64::max);

    let mut chart = ChartBuilder::on(root)
        .margin(16)
        .x_label_area_size(36)
        .y_label_area_size(72)
        .build_cartesian_2d(0.0..36.0, 0.0..headroom(max))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .axis_style(AXIS)
        .light_line_style(RGBColor(51, 65, 85))
        .label_style(label_style())
        .x_desc(text.chart_months_label)
        .y_label_formatter(&|v: &f64| ctx.money_label(*v))
        .draw()?;

    chart
        .draw_series(AreaSeries::new(points, 0.0, color.mix(0.35)).border_style(color.stroke_width(2)))?
        .label(label)
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));

    chart
        .configure_series_labels()
        .label_font(label_style())
        .border_style(AXIS)
        .draw()?;
    Ok(())
}

fn draw_revenue_vs_expenses(root: &Area, ctx: &ChartContext) -> Result<(), Box<dyn Error>> {
    let copy = &content(ctx.language).financials;
    let series = |pick: fn(&FinancialYear) -> f64| -> Vec<(f64, f64)> {
        FIVE_YEAR_PLAN
            .iter()
            .enumerate()
            .map(|(i, year)| (i as f64, ctx.money(pick(year))))
            .collect()
    };
    let revenue = series(|y| y.global_revenue);
    let expenses = series(|y| y.expenses);
    let profit = series(|y| y.profit);

    let min = profit.iter().map(|(_, v)| *v).fold(0.0, f64::min);
    let max = revenue.iter().map(|(_, v)| *v).fold(0.0, f64::max);

    let mut chart = ChartBuilder::on(root)
        .margin(16)
        .x_label_area_size(32)
        .y_label_area_size(72)
        .build_cartesian_2d(-0.2..4.2, min * 1.1..headroom(max))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .axis_style(AXIS)
        .light_line_style(RGBColor(51, 65, 85))
        .label_style(label_style())
        .x_labels(FIVE_YEAR_PLAN.len())
        .x_label_formatter(&|x: &f64| year_label(x.round() as usize))
        .y_desc(copy.y_axis_amount)
        .y_label_formatter(&|v: &f64| ctx.money_label(*v))
        .draw()?;

    let captions = legend(ChartKind::RevenueVsExpenses, ctx.language);
    for ((label, color), points) in captions.into_iter().zip([revenue, expenses, profit]) {
        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], color.stroke_width(2)));
        chart.draw_series(points.into_iter().map(|p| Circle::new(p, 3, color.filled())))?;
    }

    chart
        .configure_series_labels()
        .label_font(label_style())
        .border_style(AXIS)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;
    Ok(())
}

fn draw_revenue_streams(root: &Area, ctx: &ChartContext) -> Result<(), Box<dyn Error>> {
    let mut captions = legend(ChartKind::RevenueStreams, ctx.language).into_iter();
    let (agent_label, agent_color) = captions.next().ok_or(MISSING_CAPTION)?;
    let (other_label, other_color) = captions.next().ok_or(MISSING_CAPTION)?;
    let max = FIVE_YEAR_PLAN
        .iter()
        .map(|year| ctx.money(year.agent_revenue + year.other_revenue))
        .fold(0.0, f64::max);

    let mut chart = ChartBuilder::on(root)
        .margin(16)
        .x_label_area_size(32)
        .y_label_area_size(72)
        .build_cartesian_2d((0..FIVE_YEAR_PLAN.len()).into_segmented(), 0.0..headroom(max))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .axis_style(AXIS)
        .light_line_style(RGBColor(51, 65, 85))
        .label_style(label_style())
        .x_label_formatter(&|segment: &SegmentValue<usize>| match segment {
            SegmentValue::CenterOf(i) => year_label(*i),
            _ => String::new(),
        })
        .y_label_formatter(&|v: &f64| ctx.money_label(*v))
        .draw()?;

    chart
        .draw_series(FIVE_YEAR_PLAN.iter().enumerate().map(|(i, year)| {
            let top = ctx.money(year.agent_revenue);
            let mut bar = Rectangle::new(
                [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), top)],
                agent_color.filled(),
            );
            bar.set_margin(0, 0, 12, 12);
            bar
        }))?
        .label(agent_label)
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], agent_color.filled()));

    chart
        .draw_series(FIVE_YEAR_PLAN.iter().enumerate().map(|(i, year)| {
            let bottom = ctx.money(year.agent_revenue);
            let top = bottom + ctx.money(year.other_revenue);
            let mut bar = Rectangle::new(
                [(SegmentValue::Exact(i), bottom), (SegmentValue::Exact(i + 1), top)],
                other_color.filled(),
            );
            bar.set_margin(0, 0, 12, 12);
            bar
        }))?
        .label(other_label)
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], other_color.filled()));

    chart
        .configure_series_labels()
        .label_font(label_style())
        .border_style(AXIS)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;
    Ok(())
}

fn draw_agent_growth(root: &Area, ctx: &ChartContext) -> Result<(), Box<dyn Error>> {
    let mut captions = legend(ChartKind::AgentGrowth, ctx.language).into_iter();
    let (label, color) = captions.next().ok_or(MISSING_CAPTION)?;
    let max = FIVE_YEAR_PLAN.iter().map(|year| year.agents).fold(0.0, f64::max);

    let mut chart = ChartBuilder::on(root)
        .margin(16)
        .x_label_area_size(32)
        .y_label_area_size(56)
        .build_cartesian_2d((0..FIVE_YEAR_PLAN.len()).into_segmented(), 0.0..headroom(max))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .axis_style(AXIS)
        .light_line_style(RGBColor(51, 65, 85))
        .label_style(label_style())
        .x_label_formatter(&|segment: &SegmentValue<usize>| match segment {
            SegmentValue::CenterOf(i) => year_label(*i),
            _ => String::new(),
        })
        .y_label_formatter(&|v: &f64| ctx.format.format(*v, 0))
        .draw()?;

    chart
        .draw_series(FIVE_YEAR_PLAN.iter().enumerate().map(|(i, year)| {
            let mut bar = Rectangle::new(
                [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), year.agents)],
                color.filled(),
            );
            bar.set_margin(0, 0, 12, 12);
            bar
        }))?
        .label(label)
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));

    chart
        .configure_series_labels()
        .label_font(label_style())
        .border_style(AXIS)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;
    Ok(())
}

fn draw_roi(root: &Area, ctx: &ChartContext) -> Result<(), Box<dyn Error>> {
    let copy = &content(ctx.language).financials;
    let mut captions = legend(ChartKind::Roi, ctx.language).into_iter();
    let (label, color) = captions.next().ok_or(MISSING_CAPTION)?;
    let min = FIVE_YEAR_PLAN.iter().map(|year| year.roi).fold(0.0, f64::min);
    let max = FIVE_YEAR_PLAN.iter().map(|year| year.roi).fold(0.0, f64::max);

    let mut chart = ChartBuilder::on(root)
        .margin(16)
        .x_label_area_size(32)
        .y_label_area_size(56)
        .build_cartesian_2d(
            (0..FIVE_YEAR_PLAN.len()).into_segmented(),
            (min - 1.0)..headroom(max),
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .axis_style(AXIS)
        .light_line_style(RGBColor(51, 65, 85))
        .label_style(label_style())
        .x_label_formatter(&|segment: &SegmentValue<usize>| match segment {
            SegmentValue::CenterOf(i) => year_label(*i),
            _ => String::new(),
        })
        .y_desc(copy.y_axis_roi)
        .y_label_formatter(&|v: &f64| format!("{}%", ctx.format.format(*v, 0)))
        .draw()?;

    chart
        .draw_series(FIVE_YEAR_PLAN.iter().enumerate().map(|(i, year)| {
            let fill = if year.roi < 0.0 { LOSS } else { color };
            let mut bar = Rectangle::new(
                [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), year.roi)],
                fill.filled(),
            );
            bar.set_margin(0, 0, 12, 12);
            bar
        }))?
        .label(label)
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));

    chart
        .configure_series_labels()
        .label_font(label_style())
        .border_style(AXIS)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_chart_has_captions_in_both_languages() {
        let kinds = [
            ChartKind::RevenueArea,
            ChartKind::RevenueVsExpenses,
            ChartKind::RevenueStreams,
            ChartKind::AgentGrowth,
            ChartKind::Roi,
        ];
        for kind in kinds {
            let en = legend(kind, Language::En);
            let ar = legend(kind, Language::Ar);
            assert!(!en.is_empty(), "{kind:?} has no legend");
            assert_eq!(en.len(), ar.len(), "{kind:?} legends differ in length");
            for ((en_label, _), (ar_label, _)) in en.iter().zip(ar.iter()) {
                assert!(!en_label.is_empty() && !ar_label.is_empty());
                assert_ne!(en_label, ar_label, "{kind:?} caption is untranslated");
            }
        }
    }

    #[test]
    fn agent_and_roi_charts_are_captioned() {
        assert_eq!(legend(ChartKind::AgentGrowth, Language::En), vec![("Agents", GREEN)]);
        assert_eq!(legend(ChartKind::Roi, Language::En), vec![("Net ROI", ACCENT)]);
        assert_eq!(legend(ChartKind::AgentGrowth, Language::Ar)[0].0, "الوكلاء");
    }

    #[test]
    fn comparison_captions_follow_series_order() {
        let labels: Vec<_> = legend(ChartKind::RevenueVsExpenses, Language::En)
            .into_iter()
            .map(|(label, _)| label)
            .collect();
        assert_eq!(labels, ["Global Revenue", "Expenses", "Profit"]);
    }
}
