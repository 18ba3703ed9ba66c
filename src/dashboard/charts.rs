//! The category chart on the dashboard.
//!
//! The chart is generated as JSON configuration for the ECharts library and
//! rendered with an HTML container and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{AxisPointer, AxisPointerType, AxisType, ItemStyle, JsFunction, Tooltip, Trigger},
    series::bar,
};
use maud::{Markup, PreEscaped, html};

use crate::{
    dashboard::aggregation::{CategoryTotal, log_scale},
    html::HeadElement,
};

/// Where the browser loads ECharts from.
pub(super) const ECHARTS_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML container for a dashboard chart.
pub(super) fn chart_view(chart: &DashboardChart) -> Markup {
    html!(
        div
            id=(chart.id)
            class="min-h-[380px] w-full rounded dark:bg-gray-100"
        {}
    )
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id,
                escape_for_script(&chart.options)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// Keep `options` from ending the inline `<script>` it is written into.
///
/// Category labels reach the options verbatim from the expense API. Inside a
/// JavaScript string `<\/` and `<\!` read the same as `</` and `<!`.
fn escape_for_script(options: &str) -> String {
    options.replace("</", "<\\/").replace("<!", "<\\!")
}

/// A bar per category with log scaled heights.
///
/// Hovering a bar shows the category's raw total rather than the scaled value.
pub(super) fn category_totals_chart(totals: &[CategoryTotal]) -> Chart {
    let labels: Vec<String> = totals
        .iter()
        .map(|total| total.category.label().to_owned())
        .collect();
    let scaled_totals: Vec<f64> = totals.iter().map(|total| log_scale(total.total)).collect();
    let raw_totals: Vec<f64> = totals.iter().map(|total| total.total).collect();

    Chart::new()
        .title(
            Title::new()
                .text("Expenses by Category (Last 30 Days)")
                .subtext("Bar heights use a logarithmic scale"),
        )
        .tooltip(raw_total_tooltip(&raw_totals))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .top(80)
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(
            bar::Bar::new()
                .name("Total")
                .item_style(ItemStyle::new().color("#2196F3"))
                .data(scaled_totals),
        )
}

/// Creates a tooltip that looks up the raw total for the hovered bar.
fn raw_total_tooltip(raw_totals: &[f64]) -> Tooltip {
    let raw_totals =
        serde_json::to_string(raw_totals).unwrap_or_else(|_| "[]".to_owned());

    Tooltip::new()
        .trigger(Trigger::Axis)
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
        .value_formatter(JsFunction::new_with_args(
            "value, dataIndex",
            &format!(
                "const rawTotals = {raw_totals};
                const currencyFormatter = new Intl.NumberFormat('en-US', {{
                    style: 'currency',
                    currency: 'USD'
                }});
                const total = rawTotals[dataIndex];
                return (total === undefined) ? \"-\" : currencyFormatter.format(total);"
            ),
        ))
}
