/// The two dashboard labels added alongside the spending-ratio widget.
#[derive(Debug, Copy, Clone)]
pub struct DashboardLabels {
    pub spending_ratio: &'static str,
    pub of_income: &'static str,
}

pub const DASHBOARD: &[(&str, DashboardLabels)] = &[
    (
        "en",
        DashboardLabels {
            spending_ratio: "Spending Ratio",
            of_income: "of income",
        },
    ),
    (
        "es",
        DashboardLabels {
            spending_ratio: "Ratio de Gastos",
            of_income: "de ingresos",
        },
    ),
    (
        "fr",
        DashboardLabels {
            spending_ratio: "Ratio de Dépenses",
            of_income: "du revenu",
        },
    ),
    (
        "de",
        DashboardLabels {
            spending_ratio: "Ausgabenverhältnis",
            of_income: "des Einkommens",
        },
    ),
    (
        "pt-BR",
        DashboardLabels {
            spending_ratio: "Taxa de Gastos",
            of_income: "da renda",
        },
    ),
    (
        "zh-CN",
        DashboardLabels {
            spending_ratio: "支出比例",
            of_income: "占收入",
        },
    ),
    (
        "ja",
        DashboardLabels {
            spending_ratio: "支出比率",
            of_income: "収入の",
        },
    ),
    (
        "hi",
        DashboardLabels {
            spending_ratio: "खर्च अनुपात",
            of_income: "आय का",
        },
    ),
    (
        "ru",
        DashboardLabels {
            spending_ratio: "Коэффициент расходов",
            of_income: "от дохода",
        },
    ),
    (
        "ar",
        DashboardLabels {
            spending_ratio: "نسبة الإنفاق",
            of_income: "من الدخل",
        },
    ),
];
