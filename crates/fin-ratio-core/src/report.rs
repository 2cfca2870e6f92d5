use crate::types::{FinancialInputs, FinancialReport, Money, Percent};
use crate::{RatioError, RatioResult};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Express `numerator` as a percentage of `denominator`.
///
/// Exact IEEE-754 double division after widening from the integer currency
/// amounts; no rounding. A zero denominator yields ±inf or NaN.
pub fn percent(numerator: Money, denominator: Money) -> Percent {
    numerator as f64 * 100.0 / denominator as f64
}

impl FinancialInputs {
    /// Net profit with one-off items removed; the sustainable-earnings base
    /// for return-on-equity and cash-conversion ratios. Wraps at the `i64`
    /// extremes.
    pub fn regular_profit(&self) -> Money {
        self.net_profit.wrapping_sub(self.irregular_profit)
    }
}

/// Compute the full ratio report from one year's figures.
///
/// Total over all inputs: arithmetic anomalies from zero denominators
/// propagate into the report as inf/NaN rather than failing, and the integer
/// intermediates (the doubled numerators, the expense sum, the equity base)
/// wrap near the `i64` extremes instead of panicking. Callers that need
/// degenerate inputs rejected should use [`compute_strict`].
pub fn compute(inputs: &FinancialInputs) -> FinancialReport {
    let regular_profit = inputs.regular_profit();

    // Annualized (x2) regular profit over an averaged equity base.
    let weighted_roe = percent(
        regular_profit.wrapping_mul(2),
        inputs
            .total_assets
            .wrapping_sub(inputs.total_liabilities)
            .wrapping_add(inputs.total_equity_previously),
    );

    FinancialReport {
        operating_revenue: percent(inputs.operating_revenue, inputs.revenue),
        cost_of_revenue: percent(inputs.cost_of_revenue, inputs.revenue),
        sales_expense: percent(inputs.cost_of_sales, inputs.revenue),
        admin_expense: percent(inputs.cost_of_administrative, inputs.revenue),
        dev_expense: percent(inputs.cost_of_research_and_development, inputs.revenue),
        financing_expense: percent(inputs.cost_of_financing, inputs.revenue),
        three_expenses: percent(
            inputs
                .cost_of_sales
                .wrapping_add(inputs.cost_of_administrative)
                .wrapping_add(inputs.cost_of_research_and_development)
                .wrapping_add(inputs.cost_of_financing),
            inputs.revenue,
        ),
        net_profit: percent(inputs.net_profit, inputs.revenue),
        liabilities_to_assets: percent(inputs.total_liabilities, inputs.total_assets),
        receivable: percent(inputs.accounts_receivable, inputs.total_assets),
        fixed_assets: percent(inputs.fixed_assets, inputs.total_assets),
        weighted_roe,
        // No documented formula for WACC and ROIC; left at the zero default.
        weighted_average_cost_of_capital: 0.0,
        return_on_invested_capital: 0.0,
        assets_turnover_ratio: percent(
            inputs.revenue.wrapping_mul(2),
            inputs
                .total_assets
                .wrapping_add(inputs.total_assets_previously),
        ),
        operating_net_cash_to_net_profit: percent(inputs.operating_net_cash, inputs.net_profit),
        operating_net_cash_to_regular_profit: percent(inputs.operating_net_cash, regular_profit),
    }
}

/// Like [`compute`], but reject degenerate inputs instead of emitting
/// inf/NaN or wrapping: the first zero denominator in the formula set is
/// reported as a [`RatioError::DivisionByZero`], and any integer
/// intermediate that would overflow as a [`RatioError::Overflow`], each
/// naming the offending ratio base.
pub fn compute_strict(inputs: &FinancialInputs) -> RatioResult<FinancialReport> {
    let regular_profit = checked(
        "regular profit",
        inputs.net_profit.checked_sub(inputs.irregular_profit),
    )?;
    checked("annualized regular profit", regular_profit.checked_mul(2))?;
    checked("annualized revenue", inputs.revenue.checked_mul(2))?;
    checked(
        "three-expense sum",
        inputs
            .cost_of_sales
            .checked_add(inputs.cost_of_administrative)
            .and_then(|v| v.checked_add(inputs.cost_of_research_and_development))
            .and_then(|v| v.checked_add(inputs.cost_of_financing)),
    )?;
    let equity_base = checked(
        "weighted RoE equity base",
        inputs
            .total_assets
            .checked_sub(inputs.total_liabilities)
            .and_then(|v| v.checked_add(inputs.total_equity_previously)),
    )?;
    let average_assets = checked(
        "average total assets",
        inputs
            .total_assets
            .checked_add(inputs.total_assets_previously),
    )?;

    let denominators = [
        ("revenue", inputs.revenue),
        ("total assets", inputs.total_assets),
        ("weighted RoE equity base", equity_base),
        ("average total assets", average_assets),
        ("net profit", inputs.net_profit),
        ("regular profit", regular_profit),
    ];

    for (context, denominator) in denominators {
        if denominator == 0 {
            return Err(RatioError::DivisionByZero {
                context: context.to_string(),
            });
        }
    }

    Ok(compute(inputs))
}

fn checked(context: &str, value: Option<Money>) -> RatioResult<Money> {
    value.ok_or_else(|| RatioError::Overflow {
        context: context.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> FinancialInputs {
        FinancialInputs {
            year: 2023,
            revenue: 10_000,
            cost_of_revenue: 6_000,
            operating_revenue: 9_500,
            cost_of_sales: 800,
            cost_of_administrative: 500,
            cost_of_research_and_development: 400,
            cost_of_financing: 300,
            operating_profit: 1_500,
            net_profit: 1_200,
            irregular_profit: 200,
            total_assets: 20_000,
            total_assets_previously: 16_000,
            total_liabilities: 8_000,
            accounts_receivable: 2_000,
            fixed_assets: 5_000,
            operating_net_cash: 1_500,
            total_equity_previously: 10_000,
        }
    }

    #[test]
    fn test_revenue_margins() {
        let r = compute(&sample_input());

        // 9_500 / 10_000 = 95%
        assert_eq!(r.operating_revenue, 95.0);
        // 6_000 / 10_000 = 60%
        assert_eq!(r.cost_of_revenue, 60.0);
        assert_eq!(r.sales_expense, 8.0);
        assert_eq!(r.admin_expense, 5.0);
        assert_eq!(r.dev_expense, 4.0);
        assert_eq!(r.financing_expense, 3.0);
        // (800 + 500 + 400 + 300) / 10_000 = 20%
        assert_eq!(r.three_expenses, 20.0);
        assert_eq!(r.net_profit, 12.0);
    }

    #[test]
    fn test_balance_sheet_ratios() {
        let r = compute(&sample_input());

        assert_eq!(r.liabilities_to_assets, 40.0);
        assert_eq!(r.receivable, 10.0);
        assert_eq!(r.fixed_assets, 25.0);
    }

    #[test]
    fn test_weighted_roe() {
        let input = sample_input();
        let r = compute(&input);

        // regular profit = 1_200 - 200 = 1_000
        assert_eq!(input.regular_profit(), 1_000);
        // 2_000 * 100 / (20_000 - 8_000 + 10_000)
        assert_eq!(r.weighted_roe, 200_000.0 / 22_000.0);
    }

    #[test]
    fn test_assets_turnover() {
        let r = compute(&sample_input());
        // 20_000 * 100 / (20_000 + 16_000)
        assert_eq!(r.assets_turnover_ratio, 2_000_000.0 / 36_000.0);
    }

    #[test]
    fn test_cash_conversion() {
        let r = compute(&sample_input());

        // 1_500 / 1_200 = 125%
        assert_eq!(r.operating_net_cash_to_net_profit, 125.0);
        // 1_500 / 1_000 = 150%
        assert_eq!(r.operating_net_cash_to_regular_profit, 150.0);
    }

    #[test]
    fn test_unassigned_fields_are_zero() {
        let r = compute(&sample_input());
        assert_eq!(r.weighted_average_cost_of_capital, 0.0);
        assert_eq!(r.return_on_invested_capital, 0.0);
    }

    #[test]
    fn test_strict_accepts_valid_input() {
        let r = compute_strict(&sample_input()).unwrap();
        assert_eq!(r.cost_of_revenue, 60.0);
    }

    #[test]
    fn test_strict_rejects_zero_revenue() {
        let mut input = sample_input();
        input.revenue = 0;
        let err = compute_strict(&input).unwrap_err();
        match err {
            RatioError::DivisionByZero { context } => assert_eq!(context, "revenue"),
            other => panic!("Expected DivisionByZero, got {other:?}"),
        }
    }

    #[test]
    fn test_strict_rejects_zero_regular_profit() {
        let mut input = sample_input();
        input.irregular_profit = input.net_profit;
        let err = compute_strict(&input).unwrap_err();
        match err {
            RatioError::DivisionByZero { context } => assert_eq!(context, "regular profit"),
            other => panic!("Expected DivisionByZero, got {other:?}"),
        }
    }

    #[test]
    fn test_strict_rejects_overflowing_regular_profit() {
        let mut input = sample_input();
        input.net_profit = i64::MIN;
        input.irregular_profit = 1;
        let err = compute_strict(&input).unwrap_err();
        match err {
            RatioError::Overflow { context } => assert_eq!(context, "regular profit"),
            other => panic!("Expected Overflow, got {other:?}"),
        }
    }

    #[test]
    fn test_strict_rejects_overflowing_doubled_revenue() {
        let mut input = sample_input();
        input.revenue = i64::MAX;
        let err = compute_strict(&input).unwrap_err();
        match err {
            RatioError::Overflow { context } => assert_eq!(context, "annualized revenue"),
            other => panic!("Expected Overflow, got {other:?}"),
        }
    }
}
