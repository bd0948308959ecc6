//! Statistics command

use crate::output::print_stats;
use crate::stats::{Stats, StatsLedger};
use colored::Colorize;

/// Show the ledger, zeroing it first when `reset` is set
pub fn run_stats(ledger: &mut StatsLedger, reset: bool) -> Stats {
    let stats = if reset {
        let stats = ledger.reset();
        println!("{}", "✓ Statistics reset".green());
        stats
    } else {
        ledger.current()
    };
    print_stats(stats);
    stats
}
