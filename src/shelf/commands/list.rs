use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::{filter_books, filter_customers, filter_transactions};
use crate::session::{Session, View};
use crate::store::DataStore;

/// List the session's active view, filtered by its applied criteria. The
/// snapshot is reloaded on every call; nothing from a previous listing is
/// kept around.
pub fn run<S: DataStore>(store: &S, session: &Session) -> Result<CmdResult> {
    let library = store.load()?;
    let criteria = session.applied();

    let result = match session.view() {
        View::Books => CmdResult::default().with_books(filter_books(&library.books, criteria)),
        View::Customers => {
            CmdResult::default().with_customers(filter_customers(&library.customers, criteria))
        }
        View::Transactions => CmdResult::default()
            .with_transactions(filter_transactions(&library.transactions, criteria)),
    };
    Ok(result)
}
