use crate::dashboards::d400_overview::summary::{
    bar_heights, earnings_summary, product_stock, recent_transactions,
};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{format_money, format_number_int};
use crate::shared::config::use_config;
use crate::shared::date_utils::format_datetime;
use crate::shared::list_view_model::use_reference_list;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a004_order::aggregate::Order;
use contracts::domain::a005_invoice::aggregate::Invoice;
use leptos::prelude::*;

/// Overview: earnings against expenses, latest orders and product stock
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let limit = use_config().recent_transactions_limit;
    let orders = use_reference_list::<Order>();
    let invoices = use_reference_list::<Invoice>();
    let products = use_reference_list::<Product>();

    let summary = Memo::new(move |_| {
        orders.with(|o| invoices.with(|i| earnings_summary(o, i)))
    });
    let recent = Memo::new(move |_| orders.with(|o| recent_transactions(o, limit)));

    let earnings = Signal::derive(move || Some(format_money(summary.with(|s| s.total_earnings))));
    let expenses = Signal::derive(move || Some(format_money(summary.with(|s| s.total_expenses))));
    let balance = Signal::derive(move || Some(format_money(summary.with(|s| s.balance()))));
    let balance_tone = Signal::derive(move || {
        if summary.with(|s| s.balance()) < 0.0 {
            "error".to_string()
        } else {
            "success".to_string()
        }
    });

    view! {
        <div class="page dashboard">
            <PageHeader title="Overview" />

            <div class="dashboard__cards">
                <StatCard label="Earnings" icon_name="earnings" value=earnings />
                <StatCard label="Expenses" icon_name="expenses" value=expenses />
                <StatCard label="Balance" icon_name="dashboard" value=balance tone=balance_tone />
            </div>

            <div class="dashboard__grid">
                <section class="dashboard__panel">
                    <h2 class="dashboard__panel-title">"Earnings summary"</h2>
                    <SeriesChart
                        title="Earnings"
                        class="chart__bar--earnings"
                        values=Signal::derive(move || summary.with(|s| s.earnings_series.clone()))
                    />
                    <SeriesChart
                        title="Expenses"
                        class="chart__bar--expenses"
                        values=Signal::derive(move || summary.with(|s| s.expenses_series.clone()))
                    />
                </section>

                <section class="dashboard__panel">
                    <h2 class="dashboard__panel-title">"Recent transactions"</h2>
                    <div class="table">
                        <table class="table__data">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Date"</th>
                                    <th class="table__header-cell">"Client"</th>
                                    <th class="table__header-cell table__header-cell--right">"Total"</th>
                                    <th class="table__header-cell">"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || recent.get().into_iter().map(|order| {
                                    let (status, class) = if order.paid {
                                        ("Paid", "badge badge--success")
                                    } else {
                                        ("Unpaid", "badge badge--warning")
                                    };
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{format_datetime(&order.date)}</td>
                                            <td class="table__cell">{order.client_name().to_string()}</td>
                                            <td class="table__cell table__cell--right">{format_money(order.price_in_total)}</td>
                                            <td class="table__cell"><span class=class>{status}</span></td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                </section>

                <section class="dashboard__panel">
                    <h2 class="dashboard__panel-title">"Product stock"</h2>
                    <ul class="stock-list">
                        {move || products.with(|p| product_stock(p)).into_iter().map(|(name, stock)| {
                            view! {
                                <li class="stock-list__item">
                                    <span class="stock-list__name">{name}</span>
                                    <span class="stock-list__value">{format_number_int(stock as f64)}</span>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </section>
            </div>
        </div>
    }
}

/// One bar per value, scaled to the largest
#[component]
fn SeriesChart(
    title: &'static str,
    class: &'static str,
    #[prop(into)]
    values: Signal<Vec<f64>>,
) -> impl IntoView {
    view! {
        <div class="chart">
            <div class="chart__title">{title}</div>
            <div class="chart__bars">
                {move || {
                    let values = values.get();
                    bar_heights(&values)
                        .into_iter()
                        .zip(values)
                        .map(|(height, value)| {
                            view! {
                                <div
                                    class=format!("chart__bar {}", class)
                                    style=format!("height: {:.1}%", height)
                                    title=format_money(value)
                                ></div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
