use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::{filter_books, filter_customers, filter_transactions};
use crate::session::{Session, View};
use crate::stats::{average_price, genre_tally, returned_counts, GenreTally, ReturnedCounts};
use crate::store::DataStore;

/// Statistics for one view, always computed over the records the session's
/// applied criteria let through, never the raw collection.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsReport {
    Books {
        count: usize,
        genres: GenreTally,
        average_price: f64,
    },
    Customers {
        count: usize,
    },
    Transactions {
        counts: ReturnedCounts,
    },
}

pub fn run<S: DataStore>(store: &S, session: &Session) -> Result<CmdResult> {
    let library = store.load()?;
    let criteria = session.applied();

    let report = match session.view() {
        View::Books => {
            let filtered = filter_books(&library.books, criteria);
            StatsReport::Books {
                count: filtered.len(),
                genres: genre_tally(&filtered),
                average_price: average_price(&filtered),
            }
        }
        View::Customers => StatsReport::Customers {
            count: filter_customers(&library.customers, criteria).len(),
        },
        View::Transactions => StatsReport::Transactions {
            counts: returned_counts(&filter_transactions(&library.transactions, criteria)),
        },
    };

    Ok(CmdResult::default().with_stats(report))
}
