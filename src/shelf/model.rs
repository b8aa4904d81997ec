use serde::{Deserialize, Serialize};

/// Author of a book, stored inline on the book record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// "first last" with a single separating space, trimmed. A missing half
    /// collapses away instead of leaving a stray space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Genre of a book, stored inline on the book record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub name: String,
}

impl Genre {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub book_id: u32,
    pub title: String,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub genre: Option<Genre>,
    /// Calendar date in `%Y-%m-%d` form, kept as the formatted string.
    pub published_date: String,
    /// Missing or malformed prices deserialize to `None` rather than failing
    /// the whole snapshot; aggregation treats them as zero.
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: Option<f64>,
    pub availability: bool,
}

impl Book {
    /// Author display/match name, empty when no author is assigned.
    pub fn author_name(&self) -> String {
        self.author.as_ref().map(Author::full_name).unwrap_or_default()
    }

    /// Genre name, empty when no genre is assigned.
    pub fn genre_name(&self) -> &str {
        self.genre.as_ref().map(|g| g.name.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Customer {
    /// "first last" with a single separating space, trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: u32,
    pub book_id: u32,
    pub customer_id: u32,
    /// `%Y-%m-%d`, always present.
    pub date_borrowed: String,
    /// Absent while the book is still out.
    #[serde(default)]
    pub date_returned: Option<String>,
}

impl Transaction {
    pub fn is_returned(&self) -> bool {
        self.date_returned.is_some()
    }
}

/// Full snapshot of the record collections. Loaded and replaced wholesale;
/// nothing mutates a snapshot in place across loads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Library {
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Library {
    pub fn book(&self, id: u32) -> Option<&Book> {
        self.books.iter().find(|b| b.book_id == id)
    }

    pub fn book_mut(&mut self, id: u32) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.book_id == id)
    }

    pub fn customer(&self, id: u32) -> Option<&Customer> {
        self.customers.iter().find(|c| c.customer_id == id)
    }

    pub fn customer_mut(&mut self, id: u32) -> Option<&mut Customer> {
        self.customers.iter_mut().find(|c| c.customer_id == id)
    }

    pub fn transaction(&self, id: u32) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.transaction_id == id)
    }

    pub fn transaction_mut(&mut self, id: u32) -> Option<&mut Transaction> {
        self.transactions.iter_mut().find(|t| t.transaction_id == id)
    }

    /// Next identifiers follow rowid behavior: highest existing id plus one.
    pub fn allocate_book_id(&self) -> u32 {
        self.books.iter().map(|b| b.book_id).max().unwrap_or(0) + 1
    }

    pub fn allocate_customer_id(&self) -> u32 {
        self.customers.iter().map(|c| c.customer_id).max().unwrap_or(0) + 1
    }

    pub fn allocate_transaction_id(&self) -> u32 {
        self.transactions
            .iter()
            .map(|t| t.transaction_id)
            .max()
            .unwrap_or(0)
            + 1
    }
}

/// Accepts a JSON number, a numeric string, or anything else (mapped to
/// `None`). Old exports carried prices as strings; a bad value should not
/// poison the rest of the snapshot.
fn lenient_price<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}
