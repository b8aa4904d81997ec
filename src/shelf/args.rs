use clap::{Args, Parser, Subcommand};
use once_cell::sync::Lazy;
use shelf::criteria::{bool_text, FilterField};
use shelf::session::{Session, View};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for dev builds.
/// Format: "0.3.2" when built outside git, "0.3.2@abc1234 2024-01-15" otherwise.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    static VERSION_STRING: Lazy<String> = Lazy::new(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    });

    &VERSION_STRING
}

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version = get_version())]
#[command(about = "A filterable library manager for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding library.json and config.json
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

/// One shared set of filter flags across all three views; a flag left off
/// places no constraint. Identifier flags take partial ids ("4" finds #4,
/// #14, #40); date flags want a whole `%Y-%m-%d` day.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Filter by (partial) book id
    #[arg(long = "book", value_name = "ID")]
    pub book_id: Option<String>,

    /// Filter by title substring
    #[arg(long)]
    pub title: Option<String>,

    /// Filter by author name substring ("jane", "austen", "jane austen")
    #[arg(long)]
    pub author: Option<String>,

    /// Filter by genre substring
    #[arg(long)]
    pub genre: Option<String>,

    /// Keep only available (true) or checked-out (false) books
    #[arg(long, value_name = "BOOL")]
    pub available: Option<bool>,

    /// Filter by (partial) customer id
    #[arg(long = "customer", value_name = "ID")]
    pub customer_id: Option<String>,

    /// Filter by customer name substring
    #[arg(long = "name")]
    pub customer_name: Option<String>,

    /// Filter by email substring
    #[arg(long)]
    pub email: Option<String>,

    /// Filter by (partial) transaction id
    #[arg(long = "transaction", value_name = "ID")]
    pub transaction_id: Option<String>,

    /// Keep transactions borrowed on exactly this day
    #[arg(long = "borrowed", value_name = "DATE")]
    pub date_borrowed: Option<String>,

    /// Keep transactions returned on exactly this day
    #[arg(long = "returned", value_name = "DATE")]
    pub date_returned: Option<String>,
}

impl FilterArgs {
    /// Build an applied session for one listing: every present flag lands
    /// in the draft, then the draft is applied in one step.
    pub fn session(&self, view: View) -> Session {
        let mut session = Session::new(view);
        let fields = [
            (FilterField::BookId, self.book_id.as_deref()),
            (FilterField::Title, self.title.as_deref()),
            (FilterField::Author, self.author.as_deref()),
            (FilterField::Genre, self.genre.as_deref()),
            (
                FilterField::Availability,
                self.available.map(bool_text),
            ),
            (FilterField::CustomerId, self.customer_id.as_deref()),
            (FilterField::CustomerName, self.customer_name.as_deref()),
            (FilterField::Email, self.email.as_deref()),
            (FilterField::TransactionId, self.transaction_id.as_deref()),
            (FilterField::DateBorrowed, self.date_borrowed.as_deref()),
            (FilterField::DateReturned, self.date_returned.as_deref()),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                session.set_field(field, value);
            }
        }
        session.apply();
        session
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List books
    #[command(alias = "b")]
    Books {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// List customers
    #[command(alias = "c")]
    Customers {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// List borrowing transactions
    #[command(alias = "t")]
    Transactions {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Statistics for one view (books, customers, transactions)
    #[command(alias = "st")]
    Stats {
        /// View to aggregate
        view: View,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Add a book
    #[command(alias = "ab")]
    AddBook {
        /// Title of the book
        title: String,

        /// Author's first name
        #[arg(long = "first")]
        author_first: Option<String>,

        /// Author's last name
        #[arg(long = "last")]
        author_last: Option<String>,

        /// Genre name
        #[arg(long)]
        genre: Option<String>,

        /// Published date (defaults to today)
        #[arg(long, value_name = "DATE")]
        published: Option<String>,

        /// Price
        #[arg(long)]
        price: Option<f64>,

        /// Start the book checked out instead of on the shelf
        #[arg(long)]
        checked_out: bool,
    },

    /// Edit a book; flags left off keep their current value
    #[command(alias = "eb")]
    EditBook {
        /// Book id
        id: u32,

        #[arg(long)]
        title: Option<String>,

        #[arg(long = "first")]
        author_first: Option<String>,

        #[arg(long = "last")]
        author_last: Option<String>,

        /// Genre name (empty string clears the genre)
        #[arg(long)]
        genre: Option<String>,

        #[arg(long, value_name = "DATE")]
        published: Option<String>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long, value_name = "BOOL")]
        available: Option<bool>,
    },

    /// Remove a book
    #[command(alias = "rb")]
    RemoveBook {
        /// Book id
        id: u32,
    },

    /// Add a customer
    #[command(alias = "ac")]
    AddCustomer {
        /// First name
        first: String,

        /// Last name
        last: String,

        /// Email address
        #[arg(long)]
        email: String,
    },

    /// Edit a customer; flags left off keep their current value
    #[command(alias = "ec")]
    EditCustomer {
        /// Customer id
        id: u32,

        #[arg(long)]
        first: Option<String>,

        #[arg(long)]
        last: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Remove a customer
    #[command(alias = "rc")]
    RemoveCustomer {
        /// Customer id
        id: u32,
    },

    /// Check a book out to a customer
    #[command(alias = "co")]
    Checkout {
        /// Book id
        book: u32,

        /// Customer id
        customer: u32,

        /// Borrow date (defaults to today)
        #[arg(long, value_name = "DATE")]
        on: Option<String>,
    },

    /// Return a borrowed book
    #[command(alias = "ret")]
    Return {
        /// Transaction id
        transaction: u32,

        /// Return date (defaults to today)
        #[arg(long, value_name = "DATE")]
        on: Option<String>,
    },

    /// Edit a transaction; flags left off keep their current value
    #[command(alias = "et")]
    EditTransaction {
        /// Transaction id
        id: u32,

        #[arg(long, value_name = "ID")]
        book: Option<u32>,

        #[arg(long, value_name = "ID")]
        customer: Option<u32>,

        #[arg(long, value_name = "DATE")]
        borrowed: Option<String>,

        #[arg(long, value_name = "DATE")]
        returned: Option<String>,

        /// Reopen the borrow by clearing the return date
        #[arg(long, conflicts_with = "returned")]
        clear_returned: bool,
    },

    /// Remove a transaction
    #[command(alias = "rt")]
    RemoveTransaction {
        /// Transaction id
        id: u32,
    },

    /// Archive the data directory to a .tar.gz
    Backup {
        /// Destination path (defaults to shelf-<date>.tar.gz)
        dest: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (line-width, date-format)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
