//! The sorted, paged and editable list of expenses shown on the history page.

use std::cmp::Ordering;

use time::Date;

use crate::{
    Error,
    api::ExpenseApi,
    expense::{Category, Expense, ExpenseId, NewExpense},
    pagination::{clamp_page, page_count, page_slice},
};

/// A column the history table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Date,
    Category,
    Amount,
}

impl SortField {
    pub(crate) fn from_query_value(value: &str) -> Option<Self> {
        match value {
            "date" => Some(SortField::Date),
            "category" => Some(SortField::Category),
            "amount" => Some(SortField::Amount),
            _ => None,
        }
    }

    pub(crate) fn as_query_value(self) -> &'static str {
        match self {
            SortField::Date => "date",
            SortField::Category => "category",
            SortField::Amount => "amount",
        }
    }

    /// Compare two expenses in ascending order of this field.
    fn compare(self, a: &Expense, b: &Expense) -> Ordering {
        match self {
            SortField::Date => a.date.cmp(&b.date),
            SortField::Category => {
                let (a, b) = (a.category.label(), b.category.label());

                a.to_lowercase()
                    .cmp(&b.to_lowercase())
                    .then_with(|| a.cmp(b))
            }
            SortField::Amount => a.amount.total_cmp(&b.amount),
        }
    }
}

/// One sort applied to the list: the column and the direction it used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub ascending: bool,
}

/// A change to one field of the expense being edited.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ExpenseEdit {
    Category(Category),
    Amount(f64),
    Date(Date),
}

/// The expense being edited and the values it had before editing started.
#[derive(Debug, Clone, PartialEq)]
struct EditSession {
    original: Expense,
}

/// The history page's list of expenses.
///
/// Sorting uses a single direction flag shared by every column. Each sort
/// uses the current direction and then flips it, so sorting by one column and
/// then another sorts the second column in the opposite direction.
///
/// Sorts are stable, so expenses that tie on the sorted column keep the order
/// earlier sorts left them in.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct HistoryState {
    expenses: Vec<Expense>,
    sorts: Vec<SortKey>,
    is_ascending: bool,
    current_page: usize,
    page_size: usize,
    edit_session: Option<EditSession>,
}

impl HistoryState {
    /// Create the history from the fetched expenses, unsorted and on page 1.
    pub(crate) fn new(expenses: Vec<Expense>, page_size: usize) -> Self {
        Self {
            expenses,
            sorts: Vec::new(),
            is_ascending: true,
            current_page: 1,
            page_size,
            edit_session: None,
        }
    }

    /// Set the direction the next sort will use.
    pub(crate) fn with_direction(mut self, is_ascending: bool) -> Self {
        self.is_ascending = is_ascending;
        self
    }

    pub(crate) fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The column of the most recent sort.
    pub(crate) fn sorted_by(&self) -> Option<SortField> {
        self.sorts.last().map(|key| key.field)
    }

    /// The sorts that produced the current order, oldest first.
    ///
    /// Only the latest sort of each column is kept. An earlier sort by the
    /// same column cannot change the order of expenses that tie on it.
    pub(crate) fn sorts(&self) -> &[SortKey] {
        &self.sorts
    }

    /// The direction the next sort will use.
    pub(crate) fn is_ascending(&self) -> bool {
        self.is_ascending
    }

    pub(crate) fn current_page(&self) -> usize {
        self.current_page
    }

    pub(crate) fn page_count(&self) -> usize {
        page_count(self.expenses.len(), self.page_size)
    }

    /// The expenses on the current page.
    pub(crate) fn displayed(&self) -> &[Expense] {
        page_slice(&self.expenses, self.current_page, self.page_size)
    }

    pub(crate) fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub(crate) fn has_next_page(&self) -> bool {
        self.current_page < self.page_count()
    }

    /// Move to `page`, clamped to the pages that exist.
    pub(crate) fn go_to_page(&mut self, page: usize) {
        self.current_page = clamp_page(page, self.page_count());
    }

    /// Sort the whole list by `field` in the current direction, then flip the
    /// direction.
    pub(crate) fn sort(&mut self, field: SortField) {
        let is_ascending = self.is_ascending;

        self.apply_sort(SortKey {
            field,
            ascending: is_ascending,
        });
        self.is_ascending = !is_ascending;
    }

    /// Sort the whole list by `key` without touching the direction flag.
    pub(crate) fn apply_sort(&mut self, key: SortKey) {
        self.expenses.sort_by(|a, b| {
            let ordering = key.field.compare(a, b);

            if key.ascending {
                ordering
            } else {
                ordering.reverse()
            }
        });

        self.sorts.retain(|sort| sort.field != key.field);
        self.sorts.push(key);
    }

    pub(crate) fn editing_id(&self) -> Option<ExpenseId> {
        self.edit_session
            .as_ref()
            .map(|session| session.original.id)
    }

    /// Start editing the expense `id`.
    ///
    /// Only one expense is edited at a time. Unsaved changes to the expense
    /// that was being edited are discarded.
    pub(crate) fn begin_edit(&mut self, id: ExpenseId) {
        if let Some(session) = self.edit_session.take() {
            if let Some(expense) = self.find_mut(session.original.id) {
                *expense = session.original;
            }
        }

        self.edit_session = self
            .expenses
            .iter()
            .find(|expense| expense.id == id)
            .cloned()
            .map(|original| EditSession { original });
    }

    /// Change a field of the expense being edited. Does nothing when no
    /// expense is being edited.
    pub(crate) fn edit_field(&mut self, edit: ExpenseEdit) {
        let Some(id) = self.editing_id() else {
            return;
        };
        let Some(expense) = self.find_mut(id) else {
            return;
        };

        match edit {
            ExpenseEdit::Category(category) => expense.category = category,
            ExpenseEdit::Amount(amount) => expense.amount = amount,
            ExpenseEdit::Date(date) => expense.date = date,
        }
    }

    /// Send the expense being edited to `expense_api` and replace it with the
    /// stored result.
    ///
    /// # Errors
    /// Returns an error if the update fails, in which case the expense stays
    /// in edit mode with its changes.
    pub(crate) async fn save(&mut self, expense_api: &dyn ExpenseApi) -> Result<(), Error> {
        let Some(id) = self.editing_id() else {
            return Ok(());
        };
        let Some(changes) = self
            .expenses
            .iter()
            .find(|expense| expense.id == id)
            .map(NewExpense::from)
        else {
            return Ok(());
        };

        let stored = expense_api.update(id, &changes).await?;

        if let Some(expense) = self.find_mut(id) {
            *expense = stored;
        }
        self.edit_session = None;

        Ok(())
    }

    /// Delete the expense `id` through `expense_api` and remove it from the list.
    ///
    /// If the current page no longer exists, move back one page.
    ///
    /// # Errors
    /// Returns an error if the delete fails, in which case the list is unchanged.
    pub(crate) async fn delete(
        &mut self,
        expense_api: &dyn ExpenseApi,
        id: ExpenseId,
    ) -> Result<(), Error> {
        expense_api.delete_by_id(id).await?;

        self.expenses.retain(|expense| expense.id != id);

        if self.editing_id() == Some(id) {
            self.edit_session = None;
        }

        if self.current_page > 1 && self.current_page > self.page_count() {
            self.current_page -= 1;
        }

        Ok(())
    }

    fn find_mut(&mut self, id: ExpenseId) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|expense| expense.id == id)
    }
}
