use chrono::Local;
use clap::Parser;
use directories::ProjectDirs;
use shelf::api::{NewBook, NewCustomer, NewTransaction, ShelfApi};
use shelf::config::ShelfConfig;
use shelf::error::{Result, ShelfError};
use shelf::model::{Author, Genre};
use shelf::session::View;
use shelf::store::fs::FileStore;
use std::path::PathBuf;

mod args;
mod cli;

use args::{Cli, Commands, FilterArgs};
use cli::print::{print_books, print_customers, print_messages, print_stats, print_transactions};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ShelfApi<FileStore>,
    config: ShelfConfig,
    root: PathBuf,
}

impl AppContext {
    /// Today in the configured date format, for checkout/return stamping.
    fn today(&self) -> String {
        Local::now().format(&self.config.date_format).to_string()
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Books { filter }) => handle_list(&mut ctx, View::Books, &filter),
        Some(Commands::Customers { filter }) => handle_list(&mut ctx, View::Customers, &filter),
        Some(Commands::Transactions { filter }) => {
            handle_list(&mut ctx, View::Transactions, &filter)
        }
        Some(Commands::Stats { view, filter }) => handle_stats(&mut ctx, view, &filter),
        Some(Commands::AddBook {
            title,
            author_first,
            author_last,
            genre,
            published,
            price,
            checked_out,
        }) => handle_add_book(
            &mut ctx,
            title,
            author_first,
            author_last,
            genre,
            published,
            price,
            checked_out,
        ),
        Some(Commands::EditBook {
            id,
            title,
            author_first,
            author_last,
            genre,
            published,
            price,
            available,
        }) => handle_edit_book(
            &mut ctx,
            id,
            title,
            author_first,
            author_last,
            genre,
            published,
            price,
            available,
        ),
        Some(Commands::RemoveBook { id }) => {
            let result = ctx.api.remove_book(id)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::AddCustomer { first, last, email }) => {
            let result = ctx.api.add_customer(NewCustomer {
                first_name: first,
                last_name: last,
                email,
            })?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::EditCustomer {
            id,
            first,
            last,
            email,
        }) => handle_edit_customer(&mut ctx, id, first, last, email),
        Some(Commands::RemoveCustomer { id }) => {
            let result = ctx.api.remove_customer(id)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Checkout { book, customer, on }) => {
            let date_borrowed = on.unwrap_or_else(|| ctx.today());
            let result = ctx.api.checkout(NewTransaction {
                book_id: book,
                customer_id: customer,
                date_borrowed,
                date_returned: None,
            })?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Return { transaction, on }) => {
            let returned_on = on.unwrap_or_else(|| ctx.today());
            let result = ctx.api.return_book(transaction, &returned_on)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::EditTransaction {
            id,
            book,
            customer,
            borrowed,
            returned,
            clear_returned,
        }) => handle_edit_transaction(&mut ctx, id, book, customer, borrowed, returned, clear_returned),
        Some(Commands::RemoveTransaction { id }) => {
            let result = ctx.api.remove_transaction(id)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Backup { dest }) => {
            let result = ctx.api.backup(dest)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, View::Books, &FilterArgs::default()),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let root = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => match std::env::var_os("SHELF_HOME") {
            Some(dir) => PathBuf::from(dir),
            None => ProjectDirs::from("com", "shelf", "shelf")
                .ok_or_else(|| ShelfError::Store("Could not determine data dir".to_string()))?
                .data_dir()
                .to_path_buf(),
        },
    };

    let config = ShelfConfig::load(&root).unwrap_or_default();
    let api = ShelfApi::new(FileStore::new(root.clone()));

    Ok(AppContext { api, config, root })
}

fn handle_list(ctx: &mut AppContext, view: View, filter: &FilterArgs) -> Result<()> {
    let session = filter.session(view);
    let result = ctx.api.list(&session)?;

    match view {
        View::Books => print_books(&result.books, ctx.config.line_width),
        View::Customers => print_customers(&result.customers, ctx.config.line_width),
        View::Transactions => print_transactions(&result.transactions, ctx.config.line_width),
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &mut AppContext, view: View, filter: &FilterArgs) -> Result<()> {
    let session = filter.session(view);
    let result = ctx.api.stats(&session)?;

    if let Some(report) = &result.stats {
        print_stats(report);
    }
    print_messages(&result.messages);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_add_book(
    ctx: &mut AppContext,
    title: String,
    author_first: Option<String>,
    author_last: Option<String>,
    genre: Option<String>,
    published: Option<String>,
    price: Option<f64>,
    checked_out: bool,
) -> Result<()> {
    let author = build_author(None, author_first, author_last);
    let result = ctx.api.add_book(NewBook {
        title,
        author,
        genre: genre.filter(|g| !g.is_empty()).map(Genre::new),
        published_date: published.unwrap_or_else(|| ctx.today()),
        price,
        availability: !checked_out,
    })?;
    print_messages(&result.messages);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_edit_book(
    ctx: &mut AppContext,
    id: u32,
    title: Option<String>,
    author_first: Option<String>,
    author_last: Option<String>,
    genre: Option<String>,
    published: Option<String>,
    price: Option<f64>,
    available: Option<bool>,
) -> Result<()> {
    let library = ctx.api.library()?;
    let book = library
        .book(id)
        .cloned()
        .ok_or(ShelfError::BookNotFound(id))?;

    let genre = match genre {
        None => book.genre,
        Some(name) if name.is_empty() => None,
        Some(name) => Some(Genre::new(name)),
    };

    let result = ctx.api.update_book(
        id,
        NewBook {
            title: title.unwrap_or(book.title),
            author: build_author(book.author, author_first, author_last),
            genre,
            published_date: published.unwrap_or(book.published_date),
            price: price.or(book.price),
            availability: available.unwrap_or(book.availability),
        },
    )?;
    print_messages(&result.messages);
    Ok(())
}

/// Merge author-name flags over an existing author, if any. With neither
/// flag given the existing author is kept as is.
fn build_author(
    existing: Option<Author>,
    first: Option<String>,
    last: Option<String>,
) -> Option<Author> {
    if first.is_none() && last.is_none() {
        return existing;
    }
    let base = existing.unwrap_or_else(|| Author::new("", ""));
    Some(Author::new(
        first.unwrap_or(base.first_name),
        last.unwrap_or(base.last_name),
    ))
}

fn handle_edit_customer(
    ctx: &mut AppContext,
    id: u32,
    first: Option<String>,
    last: Option<String>,
    email: Option<String>,
) -> Result<()> {
    let library = ctx.api.library()?;
    let customer = library
        .customer(id)
        .cloned()
        .ok_or(ShelfError::CustomerNotFound(id))?;

    let result = ctx.api.update_customer(
        id,
        NewCustomer {
            first_name: first.unwrap_or(customer.first_name),
            last_name: last.unwrap_or(customer.last_name),
            email: email.unwrap_or(customer.email),
        },
    )?;
    print_messages(&result.messages);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_edit_transaction(
    ctx: &mut AppContext,
    id: u32,
    book: Option<u32>,
    customer: Option<u32>,
    borrowed: Option<String>,
    returned: Option<String>,
    clear_returned: bool,
) -> Result<()> {
    let library = ctx.api.library()?;
    let tx = library
        .transaction(id)
        .cloned()
        .ok_or(ShelfError::TransactionNotFound(id))?;

    let date_returned = if clear_returned {
        None
    } else {
        returned.or(tx.date_returned)
    };

    let result = ctx.api.update_transaction(
        id,
        NewTransaction {
            book_id: book.unwrap_or(tx.book_id),
            customer_id: customer.unwrap_or(tx.customer_id),
            date_borrowed: borrowed.unwrap_or(tx.date_borrowed),
            date_returned,
        },
    )?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            println!("line-width = {}", ctx.config.line_width);
            println!("date-format = {}", ctx.config.date_format);
            Ok(())
        }
        (Some(key), None) => {
            match key.as_str() {
                "line-width" => println!("{}", ctx.config.line_width),
                "date-format" => println!("{}", ctx.config.date_format),
                other => {
                    return Err(ShelfError::Api(format!("Unknown config key: {}", other)));
                }
            }
            Ok(())
        }
        (Some(key), Some(value)) => {
            match key.as_str() {
                "line-width" => {
                    ctx.config.line_width = value
                        .parse()
                        .map_err(|_| ShelfError::Api(format!("Invalid line width: {}", value)))?;
                }
                "date-format" => ctx.config.date_format = value,
                other => {
                    return Err(ShelfError::Api(format!("Unknown config key: {}", other)));
                }
            }
            ctx.config.save(&ctx.root)?;
            Ok(())
        }
    }
}
