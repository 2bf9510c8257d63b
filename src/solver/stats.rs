use prettytable::{Cell, Row, Table};

/// Counters collected over a single solve attempt.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Words removed by the unary length filter.
    pub node_consistency_removals: u64,
    /// Calls to `revise` during propagation.
    pub revise_calls: u64,
    /// Revise calls that removed at least one word.
    pub prunings: u64,
    /// Words removed across all revisions.
    pub words_pruned: u64,
    /// Search tree nodes entered.
    pub nodes_visited: u64,
    /// Candidate values abandoned during search.
    pub backtracks: u64,
}

/// Renders the per-solve counters as a table for the CLI's `--stats` flag.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Count")]));

    let rows: [(&str, u64); 6] = [
        (
            "Node consistency removals",
            stats.node_consistency_removals,
        ),
        ("Revise calls", stats.revise_calls),
        ("Pruning revisions", stats.prunings),
        ("Words pruned", stats.words_pruned),
        ("Search nodes visited", stats.nodes_visited),
        ("Backtracks", stats.backtracks),
    ];
    for (name, count) in rows {
        table.add_row(Row::new(vec![
            Cell::new(name),
            Cell::new(&count.to_string()),
        ]));
    }

    table.to_string()
}
