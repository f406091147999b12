use super::GroupingOutcome;

/// Print the cluster report: each populated cluster id followed by its
/// member paths, blank line between clusters
pub fn print_grouping(outcome: &GroupingOutcome) {
    for (id, members) in &outcome.grouping.clusters {
        println!("Cluster {id}:");
        for path in members {
            println!("  - {}", path.display());
        }
        println!();
    }

    if !outcome.skipped.is_empty() {
        println!("Skipped {} document(s):", outcome.skipped.len());
        for skip in &outcome.skipped {
            println!("  - {}: {}", skip.path.display(), skip.reason);
        }
        println!();
    }
}
