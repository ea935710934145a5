//! Round outcomes and the counters that accumulate them.
mod ledger;
mod outcome;
mod report;
mod tally;

pub use ledger::*;
pub use outcome::*;
pub use report::*;
pub use tally::*;
