use chrono::{Local, NaiveDate};
use colored::Colorize;
use shelf::api::{CmdMessage, MessageLevel, StatsReport};
use shelf::model::{Book, Customer, Transaction};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TIME_WIDTH: usize = 16;
const GENRE_WIDTH: usize = 14;
const PRICE_WIDTH: usize = 9;
const OUT_MARKER: &str = "✗";

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_books(books: &[Book], line_width: usize) {
    if books.is_empty() {
        println!("No books found.");
        return;
    }

    for book in books {
        let idx_str = format!("{:>4}. ", book.book_id);

        let marker = if book.availability {
            "  ".normal()
        } else {
            format!("{} ", OUT_MARKER).red()
        };

        let author = book.author_name();
        let title_author = if author.is_empty() {
            book.title.clone()
        } else {
            format!("{}  {}", book.title, author)
        };

        let genre = truncate_to_width(book.genre_name(), GENRE_WIDTH);
        let price = match book.price {
            Some(p) => format!("{:>width$.2}", p, width = PRICE_WIDTH),
            None => format!("{:>width$}", "-", width = PRICE_WIDTH),
        };

        let fixed_width = idx_str.width() + 2 + GENRE_WIDTH + PRICE_WIDTH;
        let available_width = line_width.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&title_author, available_width);
        let padding = available_width.saturating_sub(title_display.width());

        println!(
            "{}{}{}{}{}{}",
            idx_str,
            marker,
            title_display,
            " ".repeat(padding),
            format!("{:<width$}", genre, width = GENRE_WIDTH).dimmed(),
            price
        );
    }
}

pub(crate) fn print_customers(customers: &[Customer], line_width: usize) {
    if customers.is_empty() {
        println!("No customers found.");
        return;
    }

    for customer in customers {
        let idx_str = format!("{:>4}. ", customer.customer_id);
        let name = customer.full_name();
        let email = &customer.email;

        let available_width = line_width.saturating_sub(idx_str.width() + email.width());
        let name_display = truncate_to_width(&name, available_width);
        let padding = available_width.saturating_sub(name_display.width());

        println!(
            "{}{}{}{}",
            idx_str,
            name_display,
            " ".repeat(padding),
            email.dimmed()
        );
    }
}

pub(crate) fn print_transactions(transactions: &[Transaction], line_width: usize) {
    if transactions.is_empty() {
        println!("No transactions found.");
        return;
    }

    for tx in transactions {
        let idx_str = format!("{:>4}. ", tx.transaction_id);
        let detail = format!(
            "book #{}  customer #{}  borrowed {}",
            tx.book_id, tx.customer_id, tx.date_borrowed
        );

        let (status, status_colored) = match &tx.date_returned {
            Some(date) => {
                let s = format!("returned {}", date);
                let colored = s.clone().green();
                (s, colored)
            }
            None => {
                let s = format!("out{}", format_borrowed_ago(&tx.date_borrowed));
                let colored = s.clone().yellow();
                (s, colored)
            }
        };

        let available_width = line_width.saturating_sub(idx_str.width() + status.width());
        let detail_display = truncate_to_width(&detail, available_width);
        let padding = available_width.saturating_sub(detail_display.width());

        println!(
            "{}{}{}{}",
            idx_str,
            detail_display,
            " ".repeat(padding),
            status_colored
        );
    }
}

pub(crate) fn print_stats(report: &StatsReport) {
    match report {
        StatsReport::Books {
            count,
            genres,
            average_price,
        } => {
            println!("{}", format!("{} books", count).bold());
            println!("Average price: {:.2}", average_price);
            for (genre, genre_count) in genres.named_counts() {
                println!("  {:<12}{:>4}", genre, genre_count);
            }
        }
        StatsReport::Customers { count } => {
            println!("{}", format!("{} customers", count).bold());
        }
        StatsReport::Transactions { counts } => {
            println!("{}", format!("{} transactions", counts.total()).bold());
            println!("  {:<12}{:>4}", "returned", counts.returned);
            println!("  {:<12}{:>4}", "unreturned", counts.unreturned);
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

/// " (3 weeks ago)" for a well-formed borrow date, empty otherwise.
fn format_borrowed_ago(date_borrowed: &str) -> String {
    let Ok(date) = NaiveDate::parse_from_str(date_borrowed, "%Y-%m-%d") else {
        return String::new();
    };
    let days = Local::now()
        .date_naive()
        .signed_duration_since(date)
        .num_days();
    if days < 0 {
        return String::new();
    }

    let formatter = Formatter::new();
    let time_str = formatter.convert(std::time::Duration::from_secs(days as u64 * 86_400));
    let padded = format!(" ({})", time_str);
    format!("{:<width$}", padded, width = TIME_WIDTH)
}
