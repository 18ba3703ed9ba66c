//! Carries the history page's view state in the URL query string.
//!
//! The page is rendered on the server, so the sorts, page and edit selection
//! travel with each link and request, e.g.
//! `?sort=date,-category&ascending=true&page=2&edit=7`. Each entry in `sort`
//! is a column that was sorted by, oldest first, with a leading `-` when the
//! sort was descending.

use serde::{Deserialize, Deserializer, de::Error as _};

use crate::{
    expense::{Expense, ExpenseId},
    history::state::{HistoryState, SortField, SortKey},
};

/// The history view state as it appears in a URL query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HistoryQuery {
    /// The sorts that produced the displayed order, oldest first.
    #[serde(default, deserialize_with = "parse_sorts")]
    pub sort: Vec<SortKey>,
    /// The direction the next sort will use.
    pub ascending: Option<bool>,
    /// The 1-indexed page to show.
    pub page: Option<usize>,
    /// The ID of the expense being edited.
    pub edit: Option<ExpenseId>,
}

fn parse_sorts<'de, D>(deserializer: D) -> Result<Vec<SortKey>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;

    text.split(',')
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (ascending, name) = match entry.strip_prefix('-') {
                Some(name) => (false, name),
                None => (true, entry),
            };

            SortField::from_query_value(name)
                .map(|field| SortKey { field, ascending })
                .ok_or_else(|| D::Error::custom(format!("unknown sort column \"{name}\"")))
        })
        .collect()
}

fn format_sorts(sorts: &[SortKey]) -> String {
    sorts
        .iter()
        .map(|key| {
            let prefix = if key.ascending { "" } else { "-" };
            format!("{prefix}{}", key.field.as_query_value())
        })
        .collect::<Vec<_>>()
        .join(",")
}

impl HistoryQuery {
    /// Capture the view state of `history`.
    pub(crate) fn of(history: &HistoryState) -> Self {
        Self {
            sort: history.sorts().to_vec(),
            ascending: Some(history.is_ascending()),
            page: Some(history.current_page()),
            edit: history.editing_id(),
        }
    }

    fn is_ascending(&self) -> bool {
        self.ascending.unwrap_or(true)
    }

    /// Rebuild the history from freshly fetched `expenses`.
    ///
    /// Every recorded sort is replayed in order, so expenses that tie on the
    /// last column keep the order the earlier sorts gave them.
    pub(crate) fn restore(&self, expenses: Vec<Expense>, page_size: usize) -> HistoryState {
        let mut history =
            HistoryState::new(expenses, page_size).with_direction(self.is_ascending());

        for key in &self.sort {
            history.apply_sort(*key);
        }

        history.go_to_page(self.page.unwrap_or(1));

        if let Some(id) = self.edit {
            history.begin_edit(id);
        }

        history
    }

    /// The view state after clicking the header for `field`.
    pub(crate) fn sorted_by(&self, field: SortField) -> Self {
        let mut sort: Vec<SortKey> = self
            .sort
            .iter()
            .copied()
            .filter(|key| key.field != field)
            .collect();
        sort.push(SortKey {
            field,
            ascending: self.is_ascending(),
        });

        Self {
            sort,
            ascending: Some(!self.is_ascending()),
            ..self.clone()
        }
    }

    pub(crate) fn with_page(&self, page: usize) -> Self {
        Self {
            page: Some(page),
            ..self.clone()
        }
    }

    pub(crate) fn with_edit(&self, edit: Option<ExpenseId>) -> Self {
        Self {
            edit,
            ..self.clone()
        }
    }

    /// Append this view state to `route` as a query string.
    pub(crate) fn to_url(&self, route: &str) -> String {
        let mut parameters = Vec::new();

        if !self.sort.is_empty() {
            parameters.push(format!("sort={}", format_sorts(&self.sort)));
        }
        if let Some(ascending) = self.ascending {
            parameters.push(format!("ascending={ascending}"));
        }
        if let Some(page) = self.page {
            parameters.push(format!("page={page}"));
        }
        if let Some(edit) = self.edit {
            parameters.push(format!("edit={edit}"));
        }

        if parameters.is_empty() {
            route.to_owned()
        } else {
            format!("{route}?{}", parameters.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use time::{Duration, macros::date};

    use crate::{
        expense::{Category, Expense, NewExpense},
        history::state::{HistoryState, SortField, SortKey},
    };

    use super::HistoryQuery;

    const PAGE_SIZE: usize = 15;

    fn expenses(count: i64) -> Vec<Expense> {
        (1..=count)
            .map(|id| {
                NewExpense {
                    category: Category::Utilities,
                    amount: (count - id) as f64,
                    date: date!(2024 - 01 - 01) + Duration::days(id),
                }
                .with_id(id)
            })
            .collect()
    }

    fn ids(history: &HistoryState) -> Vec<i64> {
        history.expenses().iter().map(|expense| expense.id).collect()
    }

    #[test]
    fn parses_query_string() {
        let query: HistoryQuery =
            serde_html_form::from_str("sort=date,-amount&ascending=false&page=2&edit=7").unwrap();

        assert_eq!(
            query,
            HistoryQuery {
                sort: vec![
                    SortKey {
                        field: SortField::Date,
                        ascending: true,
                    },
                    SortKey {
                        field: SortField::Amount,
                        ascending: false,
                    },
                ],
                ascending: Some(false),
                page: Some(2),
                edit: Some(7),
            }
        );
    }

    #[test]
    fn rejects_unknown_sort_column() {
        let query = serde_html_form::from_str::<HistoryQuery>("sort=colour");

        assert!(query.is_err());
    }

    #[test]
    fn writes_query_string() {
        let query = HistoryQuery {
            sort: vec![
                SortKey {
                    field: SortField::Category,
                    ascending: false,
                },
                SortKey {
                    field: SortField::Date,
                    ascending: true,
                },
            ],
            ascending: Some(false),
            page: Some(3),
            edit: None,
        };

        assert_eq!(
            query.to_url("/history"),
            "/history?sort=-category,date&ascending=false&page=3"
        );
        assert_eq!(HistoryQuery::default().to_url("/history"), "/history");
    }

    #[test]
    fn restores_the_state_it_was_captured_from() {
        let mut history = HistoryState::new(expenses(20), PAGE_SIZE);
        history.sort(SortField::Amount);
        history.go_to_page(2);
        history.begin_edit(3);

        let restored = HistoryQuery::of(&history).restore(expenses(20), PAGE_SIZE);

        assert_eq!(restored, history);
    }

    #[test]
    fn header_click_sorts_in_current_direction() {
        let history = HistoryState::new(expenses(3), PAGE_SIZE);

        let query = HistoryQuery::of(&history).sorted_by(SortField::Amount);
        let restored = query.restore(expenses(3), PAGE_SIZE);

        let amounts: Vec<f64> = restored.expenses().iter().map(|e| e.amount).collect();
        assert_eq!(amounts, [0.0, 1.0, 2.0]);
        assert!(!restored.is_ascending());

        let restored = HistoryQuery::of(&restored)
            .sorted_by(SortField::Amount)
            .restore(expenses(3), PAGE_SIZE);

        let amounts: Vec<f64> = restored.expenses().iter().map(|e| e.amount).collect();
        assert_eq!(amounts, [2.0, 1.0, 0.0]);
        assert!(restored.is_ascending());
    }

    #[test]
    fn following_header_links_matches_sorting_in_place() {
        let fetched = || {
            vec![
                NewExpense {
                    category: Category::Utilities,
                    amount: 1.0,
                    date: date!(2024 - 01 - 04),
                }
                .with_id(1),
                NewExpense {
                    category: Category::Shopping,
                    amount: 2.0,
                    date: date!(2024 - 01 - 03),
                }
                .with_id(2),
                NewExpense {
                    category: Category::Utilities,
                    amount: 3.0,
                    date: date!(2024 - 01 - 02),
                }
                .with_id(3),
                NewExpense {
                    category: Category::Shopping,
                    amount: 4.0,
                    date: date!(2024 - 01 - 01),
                }
                .with_id(4),
            ]
        };
        let mut in_place = HistoryState::new(fetched(), PAGE_SIZE);
        in_place.sort(SortField::Date);
        in_place.sort(SortField::Category);

        let query = HistoryQuery::default()
            .sorted_by(SortField::Date)
            .sorted_by(SortField::Category);
        let restored = query.restore(fetched(), PAGE_SIZE);

        assert_eq!(ids(&in_place), [3, 1, 4, 2]);
        assert_eq!(ids(&restored), ids(&in_place));
        assert_eq!(restored, in_place);
        assert_eq!(
            query.to_url("/history"),
            "/history?sort=date,-category&ascending=true"
        );
    }

    #[test]
    fn resorting_a_column_keeps_one_entry_per_column() {
        let query = HistoryQuery::default()
            .sorted_by(SortField::Date)
            .sorted_by(SortField::Amount)
            .sorted_by(SortField::Date);

        let fields: Vec<SortField> = query.sort.iter().map(|key| key.field).collect();
        assert_eq!(fields, [SortField::Amount, SortField::Date]);
    }

    #[test]
    fn restore_clamps_page() {
        let query = HistoryQuery {
            page: Some(10),
            ..Default::default()
        };

        let restored = query.restore(expenses(20), PAGE_SIZE);

        assert_eq!(restored.current_page(), 2);
    }
}
