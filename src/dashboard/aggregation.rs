//! Summaries of recent spending for the dashboard.
//!
//! Category totals are summed from the raw amounts. Bars and chart values use
//! a logarithmic scale, `log10(total + 1) * 50`, so that one large category
//! does not flatten the rest.

use std::cmp::Ordering;

use time::{Date, Duration, OffsetDateTime};

use crate::expense::{Category, Expense};

/// How far back, in days, the dashboard summary looks.
pub(super) const SUMMARY_WINDOW_DAYS: i64 = 30;

const LOG_SCALE_FACTOR: f64 = 50.0;

/// The summed amount of every expense in a category.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct CategoryTotal {
    pub category: Category,
    pub total: f64,
}

/// The number of days between `now` and the start of `date`, rounded up.
///
/// The distance is absolute, so dates in the future count the same as dates
/// in the past. Dates are treated as midnight UTC.
pub(super) fn days_between(now: OffsetDateTime, date: Date) -> i64 {
    let difference = (now - date.midnight().assume_utc()).abs();
    let whole_days = difference.whole_days();

    if difference > Duration::days(whole_days) {
        whole_days + 1
    } else {
        whole_days
    }
}

/// Get the expenses dated within `window_days` of `now`, keeping their order.
pub(super) fn filter_recent(
    expenses: &[Expense],
    now: OffsetDateTime,
    window_days: i64,
) -> Vec<&Expense> {
    expenses
        .iter()
        .filter(|expense| days_between(now, expense.date) <= window_days)
        .collect()
}

/// Sum the expenses by category.
///
/// Categories are listed in the order they first appear in `expenses`.
pub(super) fn sum_by_category<'a>(
    expenses: impl IntoIterator<Item = &'a Expense>,
) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        match totals
            .iter_mut()
            .find(|total| total.category == expense.category)
        {
            Some(total) => total.total += expense.amount,
            None => totals.push(CategoryTotal {
                category: expense.category.clone(),
                total: expense.amount,
            }),
        }
    }

    totals
}

/// Order category totals from largest to smallest.
///
/// Categories with equal totals keep their relative order.
pub(super) fn rank_by_total(totals: &[CategoryTotal]) -> Vec<CategoryTotal> {
    let mut ranked = totals.to_vec();
    ranked.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));
    ranked
}

pub(super) fn log_scale(total: f64) -> f64 {
    (total + 1.0).log10() * LOG_SCALE_FACTOR
}

/// The width of a category's bar as a percentage of the largest bar.
///
/// Both totals are log scaled before comparing. Returns zero when the largest
/// total scales to zero.
pub(super) fn bar_width_percent(total: f64, max_total: f64) -> f64 {
    let max_scaled = log_scale(max_total);

    if max_scaled > 0.0 {
        log_scale(total) / max_scaled * 100.0
    } else {
        0.0
    }
}

/// The expense shown as the most recent: the last one the collection returned.
pub(super) fn most_recent(expenses: &[Expense]) -> Option<&Expense> {
    expenses.last()
}

#[cfg(test)]
mod tests {
    use time::{Duration, OffsetDateTime, macros::datetime};

    use crate::expense::{Category, Expense, NewExpense};

    use super::{
        CategoryTotal, LOG_SCALE_FACTOR, SUMMARY_WINDOW_DAYS, bar_width_percent, days_between,
        filter_recent, log_scale, most_recent, rank_by_total, sum_by_category,
    };

    const NOW: OffsetDateTime = datetime!(2024-06-15 12:00 UTC);

    fn expense(id: i64, category: Category, amount: f64, days_ago: i64) -> Expense {
        NewExpense {
            category,
            amount,
            date: (NOW - Duration::days(days_ago)).date(),
        }
        .with_id(id)
    }

    fn inverse_log_scale(scaled: f64) -> f64 {
        10f64.powf(scaled / LOG_SCALE_FACTOR) - 1.0
    }

    #[test]
    fn excludes_expenses_older_than_thirty_days() {
        let expenses = vec![
            expense(1, Category::FoodAndGroceries, 10.0, 0),
            expense(2, Category::FoodAndGroceries, 20.0, 40),
        ];

        let recent = filter_recent(&expenses, NOW, SUMMARY_WINDOW_DAYS);
        let totals = sum_by_category(recent);

        assert_eq!(
            totals,
            [CategoryTotal {
                category: Category::FoodAndGroceries,
                total: 10.0
            }]
        );
        assert!((log_scale(10.0) - 52.07).abs() < 0.01);
    }

    #[test]
    fn five_day_old_expense_counts_and_forty_day_old_expense_does_not() {
        let expenses = vec![
            expense(1, Category::from("Food"), 10.0, 5),
            expense(2, Category::from("Food"), 5.0, 40),
        ];

        let totals = sum_by_category(filter_recent(&expenses, NOW, SUMMARY_WINDOW_DAYS));

        assert_eq!(
            totals,
            [CategoryTotal {
                category: Category::FoodAndGroceries,
                total: 10.0
            }]
        );
    }

    #[test]
    fn scaled_totals_recover_the_raw_sum() {
        let expenses = vec![
            expense(1, Category::FoodAndGroceries, 12.5, 1),
            expense(2, Category::Utilities, 80.0, 2),
            expense(3, Category::FoodAndGroceries, 7.25, 3),
            expense(4, Category::Shopping, 199.99, 4),
            expense(5, Category::Utilities, 0.01, 5),
        ];
        let raw_sum: f64 = expenses.iter().map(|expense| expense.amount).sum();

        let recovered: f64 = sum_by_category(filter_recent(&expenses, NOW, SUMMARY_WINDOW_DAYS))
            .iter()
            .map(|total| inverse_log_scale(log_scale(total.total)))
            .sum();

        assert!(
            (recovered - raw_sum).abs() < 1e-6,
            "want {raw_sum}, got {recovered}"
        );
    }

    #[test]
    fn window_boundary_rounds_partial_days_up() {
        let now = datetime!(2024-06-30 00:00 UTC);
        let exactly_thirty_days = datetime!(2024-05-31 00:00 UTC).date();
        let now_plus_a_bit = now + Duration::hours(2);

        assert_eq!(days_between(now, exactly_thirty_days), 30);
        assert_eq!(days_between(now_plus_a_bit, exactly_thirty_days), 31);
    }

    #[test]
    fn includes_dates_in_the_future() {
        let expenses = vec![expense(1, Category::Utilities, 5.0, -3)];

        let recent = filter_recent(&expenses, NOW, SUMMARY_WINDOW_DAYS);

        assert_eq!(recent.len(), 1);
    }

    #[test]
    fn sums_by_category_in_first_seen_order() {
        let expenses = vec![
            expense(1, Category::Utilities, 5.0, 1),
            expense(2, Category::FoodAndGroceries, 10.0, 2),
            expense(3, Category::Utilities, 2.5, 3),
            expense(4, Category::from("Food"), 1.0, 4),
        ];

        let totals = sum_by_category(&expenses);

        assert_eq!(
            totals,
            [
                CategoryTotal {
                    category: Category::Utilities,
                    total: 7.5
                },
                CategoryTotal {
                    category: Category::FoodAndGroceries,
                    total: 11.0
                },
            ]
        );
    }

    #[test]
    fn inverse_of_log_scale_recovers_sum() {
        for total in [0.0, 0.5, 10.0, 42.5, 1234.56] {
            let recovered = inverse_log_scale(log_scale(total));

            assert!(
                (recovered - total).abs() < 1e-9 * total.max(1.0),
                "want {total}, got {recovered}"
            );
        }
    }

    #[test]
    fn ranks_totals_from_largest_to_smallest() {
        let totals = vec![
            CategoryTotal {
                category: Category::Utilities,
                total: 5.0,
            },
            CategoryTotal {
                category: Category::Shopping,
                total: 50.0,
            },
            CategoryTotal {
                category: Category::Education,
                total: 5.0,
            },
        ];

        let ranked = rank_by_total(&totals);

        let categories: Vec<Category> = ranked.into_iter().map(|total| total.category).collect();
        assert_eq!(
            categories,
            [Category::Shopping, Category::Utilities, Category::Education]
        );
    }

    #[test]
    fn largest_bar_is_full_width() {
        assert_eq!(bar_width_percent(50.0, 50.0), 100.0);
        assert!(bar_width_percent(5.0, 50.0) < 100.0);
        assert!(bar_width_percent(5.0, 50.0) > 0.0);
    }

    #[test]
    fn bar_width_is_zero_when_every_total_is_zero() {
        assert_eq!(bar_width_percent(0.0, 0.0), 0.0);
    }

    #[test]
    fn most_recent_is_last_in_fetch_order() {
        let expenses = vec![
            expense(1, Category::Utilities, 5.0, 0),
            expense(2, Category::Shopping, 7.0, 10),
        ];

        assert_eq!(most_recent(&expenses).map(|expense| expense.id), Some(2));
        assert_eq!(most_recent(&[]), None);
    }
}
