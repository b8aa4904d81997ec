//! Editing/applied filter lifecycle.
//!
//! A [`Session`] is the one piece of state the caller holds: the active
//! view, the draft criteria being edited, and a decoupled applied snapshot.
//! Typing into the draft never changes what is rendered; only an explicit
//! [`Session::apply`] copies the draft over the applied snapshot. The
//! filter and stats functions stay pure, taking the applied snapshot by
//! reference.

use crate::criteria::{FilterCriteria, FilterField};
use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Books,
    Customers,
    Transactions,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Books => "books",
            View::Customers => "customers",
            View::Transactions => "transactions",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for View {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "books" => Ok(View::Books),
            "customers" => Ok(View::Customers),
            "transactions" => Ok(View::Transactions),
            other => Err(ShelfError::Api(format!("Unknown view: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    view: View,
    draft: FilterCriteria,
    applied: FilterCriteria,
}

impl Session {
    pub fn new(view: View) -> Self {
        Self {
            view,
            ..Self::default()
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn draft(&self) -> &FilterCriteria {
        &self.draft
    }

    pub fn applied(&self) -> &FilterCriteria {
        &self.applied
    }

    /// Edit one draft field. The applied snapshot is left alone so the
    /// rendered lists hold still while the user types.
    pub fn set_field(&mut self, field: FilterField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Copy the draft wholesale over the applied snapshot.
    pub fn apply(&mut self) {
        self.applied = self.draft.clone();
    }

    /// Switch the active view. Both criteria reset to empty; filters never
    /// carry over between views, and re-selecting the current view resets
    /// just the same.
    pub fn switch_view(&mut self, view: View) {
        self.view = view;
        self.reset();
    }

    /// Clear both the draft and the applied snapshot.
    pub fn reset(&mut self) {
        self.draft = FilterCriteria::default();
        self.applied = FilterCriteria::default();
    }
}
