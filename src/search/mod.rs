mod debouncer;
mod filter;
mod proximity;

pub use debouncer::Debouncer;
pub use filter::filter;
pub use proximity::sort;
