//! Terminal progress chart.
//!
//! A read-only consumer of [`Stats`]: renders completion progress as a
//! fixed-width horizontal bar with a legend. Produces nothing when there
//! are no tasks to chart.

use crate::model::Stats;

const BAR_WIDTH: usize = 40;
const DONE_CELL: &str = "█";
const PENDING_CELL: &str = "░";

/// Render the completion bar, or `None` when the collection is empty.
pub fn render(stats: &Stats) -> Option<String> {
    if stats.total == 0 {
        return None;
    }

    let done_cells = ((stats.completed as f64 / stats.total as f64) * BAR_WIDTH as f64)
        .round() as usize;
    let bar = format!(
        "{}{}",
        DONE_CELL.repeat(done_cells),
        PENDING_CELL.repeat(BAR_WIDTH - done_cells)
    );

    Some(format!(
        "[{}] {:.1}% done ({} of {} tasks)",
        bar, stats.completion_rate, stats.completed, stats.total
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(total: usize, completed: usize) -> Stats {
        Stats {
            total,
            completed,
            pending: total - completed,
            completion_rate: completed as f64 / total as f64 * 100.0,
        }
    }

    #[test]
    fn empty_stats_render_nothing() {
        assert_eq!(render(&Stats::default()), None);
    }

    #[test]
    fn half_done_splits_the_bar_evenly() {
        let chart = render(&stats(2, 1)).unwrap();
        assert!(chart.contains(&DONE_CELL.repeat(20)));
        assert!(chart.contains(&PENDING_CELL.repeat(20)));
        assert!(chart.contains("50.0% done (1 of 2 tasks)"));
    }

    #[test]
    fn all_done_fills_the_bar() {
        let chart = render(&stats(3, 3)).unwrap();
        assert!(chart.contains(&DONE_CELL.repeat(BAR_WIDTH)));
        assert!(!chart.contains(PENDING_CELL));
        assert!(chart.contains("100.0% done"));
    }

    #[test]
    fn nothing_done_leaves_the_bar_empty() {
        let chart = render(&stats(5, 0)).unwrap();
        assert!(chart.contains(&PENDING_CELL.repeat(BAR_WIDTH)));
        assert!(!chart.contains(DONE_CELL));
    }
}
