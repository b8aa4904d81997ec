//! Terminal output for the shelf binary. The only code that writes to
//! stdout; everything below the API hands back structured results.

pub mod print;
