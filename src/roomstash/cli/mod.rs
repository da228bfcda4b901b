//! Terminal front end: argument parsing, rendering, and the menu loop.

mod print;
pub mod setup;
pub mod shell;
