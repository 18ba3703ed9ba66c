//! The expense record shared by every view, and the canonical category list.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

/// The ID the remote expense collection assigns to an expense.
pub type ExpenseId = i64;

/// The format used to send dates to, and read dates from, the expense API and
/// HTML date inputs.
const ISO_DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// An amount of money spent on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID assigned by the expense API. Never changes once assigned.
    pub id: ExpenseId,
    /// What the money was spent on.
    pub category: Category,
    /// The amount of money spent in dollars.
    pub amount: f64,
    /// The day the money was spent.
    #[serde(with = "iso_date")]
    pub date: Date,
}

/// The fields of an [Expense] sent to the expense API when creating or
/// replacing an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    /// What the money was spent on.
    pub category: Category,
    /// The amount of money spent in dollars.
    pub amount: f64,
    /// The day the money was spent.
    #[serde(with = "iso_date")]
    pub date: Date,
}

impl NewExpense {
    /// Attach the ID the expense API assigned to this expense.
    pub fn with_id(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            category: self.category,
            amount: self.amount,
            date: self.date,
        }
    }
}

impl From<&Expense> for NewExpense {
    fn from(expense: &Expense) -> Self {
        Self {
            category: expense.category.clone(),
            amount: expense.amount,
            date: expense.date,
        }
    }
}

/// Parse the text of an amount input, rejecting text that is not a finite number.
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

/// Parse the value of a date input (`YYYY-MM-DD`).
pub fn parse_date(text: &str) -> Option<Date> {
    Date::parse(text.trim(), ISO_DATE_FORMAT).ok()
}

/// The category of an expense.
///
/// Both the add form and the history editor offer [Category::ALL]. Labels
/// from the older, shorter category list ("Food", "Travel" and "Other") are
/// read as their canonical counterparts. Any other label the expense API
/// returns is kept as-is in [Category::Unlisted] so the record is neither
/// dropped nor rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// "Food & Groceries", also read from "Food".
    FoodAndGroceries,
    /// "Travel & Transportation", also read from "Travel".
    TravelAndTransportation,
    /// "Utilities"
    Utilities,
    /// "Entertainment"
    Entertainment,
    /// "Healthcare"
    Healthcare,
    /// "Rent/Mortgage"
    RentOrMortgage,
    /// "Insurance"
    Insurance,
    /// "Education"
    Education,
    /// "Shopping"
    Shopping,
    /// "Miscellaneous", also read from "Other".
    Miscellaneous,
    /// A label that is not in the canonical category list.
    Unlisted(String),
}

impl Category {
    /// The categories a user can pick from, in display order.
    pub const ALL: [Category; 10] = [
        Category::FoodAndGroceries,
        Category::TravelAndTransportation,
        Category::Utilities,
        Category::Entertainment,
        Category::Healthcare,
        Category::RentOrMortgage,
        Category::Insurance,
        Category::Education,
        Category::Shopping,
        Category::Miscellaneous,
    ];

    /// The label shown to users and sent to the expense API.
    pub fn label(&self) -> &str {
        match self {
            Category::FoodAndGroceries => "Food & Groceries",
            Category::TravelAndTransportation => "Travel & Transportation",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Healthcare => "Healthcare",
            Category::RentOrMortgage => "Rent/Mortgage",
            Category::Insurance => "Insurance",
            Category::Education => "Education",
            Category::Shopping => "Shopping",
            Category::Miscellaneous => "Miscellaneous",
            Category::Unlisted(label) => label,
        }
    }

    /// Whether the category is one of [Category::ALL].
    pub fn is_listed(&self) -> bool {
        !matches!(self, Category::Unlisted(_))
    }

    /// The background colour class for this category's bar on the dashboard.
    pub fn bar_class(&self) -> &'static str {
        match self {
            Category::FoodAndGroceries => "bg-green-500",
            Category::TravelAndTransportation => "bg-blue-500",
            Category::Utilities => "bg-yellow-500",
            Category::Entertainment => "bg-purple-500",
            Category::Healthcare => "bg-pink-500",
            Category::RentOrMortgage => "bg-red-500",
            Category::Insurance => "bg-indigo-500",
            Category::Education => "bg-orange-500",
            Category::Shopping => "bg-teal-500",
            Category::Miscellaneous => "bg-gray-500",
            Category::Unlisted(_) => "bg-gray-400",
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Food & Groceries" | "Food" => Category::FoodAndGroceries,
            "Travel & Transportation" | "Travel" => Category::TravelAndTransportation,
            "Utilities" => Category::Utilities,
            "Entertainment" => Category::Entertainment,
            "Healthcare" => Category::Healthcare,
            "Rent/Mortgage" => Category::RentOrMortgage,
            "Insurance" => Category::Insurance,
            "Education" => Category::Education,
            "Shopping" => Category::Shopping,
            "Miscellaneous" | "Other" => Category::Miscellaneous,
            _ => Category::Unlisted(label),
        }
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Category::from(label.to_owned())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Unlisted(label) => label,
            category => category.label().to_owned(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
