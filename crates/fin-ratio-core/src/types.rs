use serde::{Deserialize, Serialize};

/// All monetary figures. One consistent unit across every field, since the
/// ratios mix income-statement, balance-sheet and cash-flow amounts.
pub type Money = i64;

/// Derived ratio values. Most are percentages (already multiplied by 100).
pub type Percent = f64;

/// One fiscal year's financial figures, as loaded from the configuration file.
///
/// Missing keys deserialize to zero; no field is individually validated.
/// Several fields are used as divisors downstream and produce inf/NaN ratios
/// when zero — see [`crate::report::compute_strict`] for the checked path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialInputs {
    pub year: i64,
    pub revenue: Money,
    #[serde(rename = "costOfRevenue")]
    pub cost_of_revenue: Money,
    #[serde(rename = "opRevenue")]
    pub operating_revenue: Money,
    #[serde(rename = "costOfSales")]
    pub cost_of_sales: Money,
    #[serde(rename = "costOfAdmin")]
    pub cost_of_administrative: Money,
    #[serde(rename = "costOfR&D")]
    pub cost_of_research_and_development: Money,
    #[serde(rename = "costOfFinancing")]
    pub cost_of_financing: Money,
    #[serde(rename = "opProfit")]
    pub operating_profit: Money,
    #[serde(rename = "netProfit")]
    pub net_profit: Money,
    #[serde(rename = "irregularProfit")]
    pub irregular_profit: Money,
    #[serde(rename = "assets")]
    pub total_assets: Money,
    #[serde(rename = "assetsFromLastTime")]
    pub total_assets_previously: Money,
    #[serde(rename = "liabilities")]
    pub total_liabilities: Money,
    #[serde(rename = "receivable")]
    pub accounts_receivable: Money,
    #[serde(rename = "fixedAssets")]
    pub fixed_assets: Money,
    #[serde(rename = "opNetCash")]
    pub operating_net_cash: Money,
    #[serde(rename = "equityFromLastTime")]
    pub total_equity_previously: Money,
}

impl FinancialInputs {
    /// Field names and values in declaration order, for rendering.
    ///
    /// The field set is closed, so an explicit ordered list replaces any
    /// runtime introspection of the struct.
    pub fn fields(&self) -> [(&'static str, Money); 18] {
        [
            ("Year", self.year),
            ("Revenue", self.revenue),
            ("CostOfRevenue", self.cost_of_revenue),
            ("OperatingRevenue", self.operating_revenue),
            ("CostOfSales", self.cost_of_sales),
            ("CostOfAdministrative", self.cost_of_administrative),
            (
                "CostOfResearchAndDevelopment",
                self.cost_of_research_and_development,
            ),
            ("CostOfFinancing", self.cost_of_financing),
            ("OperatingProfit", self.operating_profit),
            ("NetProfit", self.net_profit),
            ("IrregularProfit", self.irregular_profit),
            ("TotalAssets", self.total_assets),
            ("TotalAssetsPreviously", self.total_assets_previously),
            ("TotalLiabilities", self.total_liabilities),
            ("AccountsReceivable", self.accounts_receivable),
            ("FixedAssets", self.fixed_assets),
            ("OperatingNetCash", self.operating_net_cash),
            ("TotalEquityPreviously", self.total_equity_previously),
        ]
    }
}

/// Derived ratios for one [`FinancialInputs`] instance.
///
/// Declaration order is output order. Values may be infinite or NaN when a
/// denominator in the source figures is zero.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FinancialReport {
    pub operating_revenue: Percent,
    pub cost_of_revenue: Percent,
    pub sales_expense: Percent,
    pub admin_expense: Percent,
    pub dev_expense: Percent,
    pub financing_expense: Percent,
    pub three_expenses: Percent,
    pub net_profit: Percent,
    pub liabilities_to_assets: Percent,
    pub receivable: Percent,
    pub fixed_assets: Percent,
    #[serde(rename = "WeightedRoE")]
    pub weighted_roe: Percent,
    /// No documented formula; reported as zero.
    pub weighted_average_cost_of_capital: Percent,
    /// No documented formula; reported as zero.
    pub return_on_invested_capital: Percent,
    pub assets_turnover_ratio: Percent,
    pub operating_net_cash_to_net_profit: Percent,
    pub operating_net_cash_to_regular_profit: Percent,
}

impl FinancialReport {
    /// Field names and values in declaration order, for rendering.
    pub fn fields(&self) -> [(&'static str, Percent); 17] {
        [
            ("OperatingRevenue", self.operating_revenue),
            ("CostOfRevenue", self.cost_of_revenue),
            ("SalesExpense", self.sales_expense),
            ("AdminExpense", self.admin_expense),
            ("DevExpense", self.dev_expense),
            ("FinancingExpense", self.financing_expense),
            ("ThreeExpenses", self.three_expenses),
            ("NetProfit", self.net_profit),
            ("LiabilitiesToAssets", self.liabilities_to_assets),
            ("Receivable", self.receivable),
            ("FixedAssets", self.fixed_assets),
            ("WeightedRoE", self.weighted_roe),
            (
                "WeightedAverageCostOfCapital",
                self.weighted_average_cost_of_capital,
            ),
            ("ReturnOnInvestedCapital", self.return_on_invested_capital),
            ("AssetsTurnoverRatio", self.assets_turnover_ratio),
            (
                "OperatingNetCashToNetProfit",
                self.operating_net_cash_to_net_profit,
            ),
            (
                "OperatingNetCashToRegularProfit",
                self.operating_net_cash_to_regular_profit,
            ),
        ]
    }
}
