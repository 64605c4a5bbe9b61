//! Lines for the learning path accordion shown under the learning view.

use guide_engine::{KeyValueStore, ProgressTracker};
use ratatui::text::{Line, Span};

use crate::app::{learning_rows, LearningRow};
use crate::ui::theme::{progress_bar, Styles, Symbols};

const BAR_WIDTH: usize = 20;

/// Overall progress, then one line per row with `cursor` marking the selection.
///
/// Progress that cannot be read from the store shows as not done.
pub fn learning_lines<S: KeyValueStore + ?Sized>(
    tracker: &ProgressTracker,
    store: &S,
    cursor: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Ok(summary) = tracker.summary(store) {
        lines.push(Line::from(vec![
            Span::styled(progress_bar(summary.ratio(), BAR_WIDTH), Styles::highlight()),
            Span::styled(
                format!(" {}/{} topics", summary.done, summary.total),
                Styles::dim(),
            ),
        ]));
        lines.push(Line::default());
    }

    for (i, row) in learning_rows(tracker).into_iter().enumerate() {
        let marker = if i == cursor { Symbols::CURSOR } else { "  " };
        let marker = Span::styled(marker, Styles::highlight());

        match row {
            LearningRow::Card(c) => {
                let card = &tracker.path().cards[c];
                let open = if tracker.expanded() == Some(c) {
                    Symbols::EXPANDED
                } else {
                    Symbols::COLLAPSED
                };
                let tally = tracker.card_tally(store, c).ok();
                let style = if tally.is_some_and(|t| t.is_complete()) {
                    Styles::success()
                } else {
                    Styles::title()
                };
                let count = tally.map_or_else(String::new, |t| format!("  {}/{}", t.done, t.total));

                lines.push(Line::from(vec![
                    marker,
                    Span::styled(format!("{open} {}", card.title), style),
                    Span::styled(count, Styles::dim()),
                ]));
            }
            LearningRow::Item { card, item } => {
                let label = &tracker.path().cards[card].items[item];
                let done = tracker.is_done(store, label).unwrap_or(false);
                let (check, style) = if done {
                    (Symbols::DONE, Styles::success())
                } else {
                    (Symbols::TODO, Styles::default())
                };

                lines.push(Line::from(vec![
                    marker,
                    Span::raw("  "),
                    Span::styled(format!("{check} {label}"), style),
                ]));
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use guide_engine::{DisabledStore, LearningPath, MemoryStore};

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_collapsed_cards() {
        let tracker = ProgressTracker::new(LearningPath::builtin());
        let text = plain(&learning_lines(&tracker, &MemoryStore::new(), 0));

        assert!(text[0].ends_with(" 0/12 topics"));
        assert_eq!(text[2], "> > Basics  0/3");
        assert_eq!(text[3], "  > Digital I/O  0/3");
        assert_eq!(text.len(), 6);
    }

    #[test]
    fn test_expanded_card_lists_items() {
        let mut tracker = ProgressTracker::new(LearningPath::builtin());
        let mut store = MemoryStore::new();
        tracker.toggle_expanded(1).unwrap();
        tracker.toggle(&mut store, 1, 0).unwrap();

        let text = plain(&learning_lines(&tracker, &store, 2));
        assert!(text[0].ends_with(" 1/12 topics"));
        assert_eq!(text[3], "  v Digital I/O  1/3");
        assert_eq!(text[4], ">   [x] Blink LED");
        assert_eq!(text[5], "    [ ] Button input");
    }

    #[test]
    fn test_unreadable_store_hides_counts() {
        let tracker = ProgressTracker::new(LearningPath::builtin());
        let text = plain(&learning_lines(&tracker, &DisabledStore, 0));
        assert_eq!(text[0], "> > Basics");
        assert_eq!(text.len(), 4);
    }
}
