pub mod config;
pub mod count;
pub mod csv;
pub mod discover;
pub mod extract;
pub mod slug;
pub mod store;
pub mod table;
pub mod text;

pub use count::{TermCounter, TermTally, Vocabulary};
pub use table::ResultTable;

pub fn print_banner() {
    println!(
        r#"
  _
 | |_ ___ _ _ _ __  ___ __ __ _ _ _
 |  _/ -_) '_| '  \(_-</ _/ _` | ' \
  \__\___|_| |_|_|_/__/\__\__,_|_||_|
"#
    );
    println!("  term-incidence crawler v{}", env!("CARGO_PKG_VERSION"));
    println!();
}
