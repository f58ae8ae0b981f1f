//! Projection figures behind the deck. Money values are USD millions unless
//! noted otherwise; conversion happens at render time.

use crate::currency::Unit;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionYear {
    pub revenue: f64,
    pub customers: f64,
    pub orders: f64,
    pub margin: f64,
    pub virtual_shelves: f64,
    pub partners: f64,
}

pub const PROJECTIONS: [ProjectionYear; 3] = [
    ProjectionYear { revenue: 0.8, customers: 1200.0, orders: 50_000.0, margin: -12.5, virtual_shelves: 360_000.0, partners: 20.0 },
    ProjectionYear { revenue: 2.3, customers: 3500.0, orders: 150_000.0, margin: 52.2, virtual_shelves: 1_000_000.0, partners: 80.0 },
    ProjectionYear { revenue: 6.2, customers: 8000.0, orders: 350_000.0, margin: 79.0, virtual_shelves: 2_000_000.0, partners: 200.0 },
];

/// (month, revenue) points for the 36-month revenue curve.
pub const REVENUE_CURVE: [(f64, f64); 7] = [
    (0.0, 0.0),
    (6.0, 0.4),
    (12.0, 0.8),
    (18.0, 1.5),
    (24.0, 2.3),
    (30.0, 4.0),
    (36.0, 6.2),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FinancialYear {
    pub year: &'static str,
    pub agents: f64,
    pub agent_revenue: f64,
    pub other_revenue: f64,
    pub global_revenue: f64,
    pub expenses: f64,
    pub roi: f64,
    pub profit: f64,
    pub gross_margin: f64,
}

pub const FIVE_YEAR_PLAN: [FinancialYear; 5] = [
    FinancialYear { year: "2026", agents: 35.0, agent_revenue: 0.52, other_revenue: 0.28, global_revenue: 0.80, expenses: 0.90, roi: -1.0, profit: -0.10, gross_margin: -12.5 },
    FinancialYear { year: "2027", agents: 75.0, agent_revenue: 0.76, other_revenue: 1.54, global_revenue: 2.30, expenses: 1.10, roi: 3.0, profit: 1.20, gross_margin: 52.2 },
    FinancialYear { year: "2028", agents: 125.0, agent_revenue: 1.88, other_revenue: 4.32, global_revenue: 6.20, expenses: 1.30, roi: 8.0, profit: 4.90, gross_margin: 79.0 },
    FinancialYear { year: "2029", agents: 175.0, agent_revenue: 2.62, other_revenue: 4.90, global_revenue: 7.52, expenses: 1.50, roi: 13.0, profit: 6.02, gross_margin: 80.1 },
    FinancialYear { year: "2030", agents: 225.0, agent_revenue: 3.38, other_revenue: 5.20, global_revenue: 8.58, expenses: 1.70, roi: 18.0, profit: 6.88, gross_margin: 80.2 },
];

/// Headline market figure. Only money-valued stats (unit B) are converted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarketStat {
    pub value: f64,
    pub unit: Unit,
    pub is_percent: bool,
    pub prefix: &'static str,
}

pub const MARKET_STATS: [MarketStat; 4] = [
    MarketStat { value: 4.8, unit: Unit::Billions, is_percent: false, prefix: "" },
    MarketStat { value: 12.0, unit: Unit::Billions, is_percent: false, prefix: "" },
    MarketStat { value: 7.5, unit: Unit::None, is_percent: true, prefix: "" },
    MarketStat { value: 5.0, unit: Unit::None, is_percent: true, prefix: "<" },
];

/// Share of the Series A round per use-of-funds bucket, in percent.
pub const USE_OF_FUNDS_SHARES: [f64; 3] = [40.0, 30.0, 30.0];

/// Series A terms, USD.
pub const ROUND_SEEKING_M: f64 = 2.0;
pub const ROUND_VALUATION_M: f64 = 12.0;
pub const ROUND_EQUITY_PERCENT: f64 = 15.0;
pub const ROUND_MIN_TICKET_K: f64 = 50.0;

/// Growth of the last plan year over the first, in percent.
pub fn growth_percent(first: f64, last: f64) -> f64 {
    if first == 0.0 {
        return 0.0;
    }
    (last - first) / first * 100.0
}

/// Headline growth shown on the financials cards, rounded half up.
pub fn headline_growth(first: f64, last: f64) -> f64 {
    (growth_percent(first, last) + 1e-9).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_totals_are_consistent() {
        for year in FIVE_YEAR_PLAN {
            let sum = year.agent_revenue + year.other_revenue;
            assert!((sum - year.global_revenue).abs() < 0.011, "{}", year.year);
            let profit = year.global_revenue - year.expenses;
            assert!((profit - year.profit).abs() < 0.011, "{}", year.year);
        }
    }

    #[test]
    fn headline_growth_matches_cards() {
        let first = FIVE_YEAR_PLAN[0];
        let last = FIVE_YEAR_PLAN[4];
        assert_eq!(headline_growth(first.agents, last.agents), 543.0);
        assert_eq!(headline_growth(first.global_revenue, last.global_revenue), 973.0);
        assert_eq!(growth_percent(0.0, 5.0), 0.0);
    }

    #[test]
    fn use_of_funds_adds_up() {
        assert_eq!(USE_OF_FUNDS_SHARES.iter().sum::<f64>(), 100.0);
    }
}
