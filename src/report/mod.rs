//! Derived views over the expense summary: chart shares and the budget
//! verdict. Pure functions, no store access.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// One chart segment: a category's expense total and its share of the whole,
/// in percent. Shares over a full summary sum to 100.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ChartSlice {
    pub(crate) category: String,
    pub(crate) amount: Decimal,
    pub(crate) share: f64,
}

/// Turn an expense summary into chart segments. An empty summary (or one
/// whose totals do not add up to anything positive) yields no segments; the
/// caller shows a placeholder instead of a chart.
pub(crate) fn chart_shares(summary: &[(String, Decimal)]) -> Vec<ChartSlice> {
    let total: Decimal = summary.iter().map(|(_, amount)| *amount).sum();
    if total <= Decimal::ZERO {
        return Vec::new();
    }
    summary
        .iter()
        .map(|(category, amount)| ChartSlice {
            category: category.clone(),
            amount: *amount,
            share: (*amount / total).to_f64().unwrap_or(0.0) * 100.0,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BudgetStatus {
    pub(crate) total_expense: Decimal,
    pub(crate) budget: Decimal,
    pub(crate) over: bool,
    /// `total_expense - budget` when over, zero otherwise.
    pub(crate) overspend: Decimal,
}

/// A budget of exactly zero is "unset" and never triggers the over state,
/// regardless of spend.
pub(crate) fn budget_status(summary: &[(String, Decimal)], budget: Decimal) -> BudgetStatus {
    let total_expense: Decimal = summary.iter().map(|(_, amount)| *amount).sum();
    let over = total_expense > budget && budget > Decimal::ZERO;
    let overspend = if over {
        total_expense - budget
    } else {
        Decimal::ZERO
    };
    BudgetStatus {
        total_expense,
        budget,
        over,
        overspend,
    }
}

impl BudgetStatus {
    pub(crate) fn verdict(&self) -> String {
        if self.over {
            format!(
                "You are ${:.2} over your monthly budget. Time to rein in the spending.",
                self.overspend
            )
        } else {
            "Spending is within budget. Keep up the good habits.".to_string()
        }
    }
}
