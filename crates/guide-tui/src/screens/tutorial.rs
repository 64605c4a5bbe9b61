//! Lines for the tutorial stepper shown under the tutorial view.

use guide_engine::Stepper;
use ratatui::text::{Line, Span};

use crate::text::MarkdownStyles;
use crate::ui::theme::Styles;

/// Heading, illustration, instructions, optional sketch and the counter.
pub fn stepper_lines(stepper: &Stepper, styles: &MarkdownStyles) -> Vec<Line<'static>> {
    let step = stepper.step();
    let mut lines = vec![
        Line::from(Span::styled(stepper.heading(), Styles::title())),
        Line::from(Span::styled(format!("[image: {}]", step.image), Styles::dim())),
        Line::default(),
        Line::from(Span::styled(step.text.clone(), styles.text)),
    ];

    if let Some(code) = &step.code {
        lines.push(Line::default());
        lines.extend(
            code.lines()
                .map(|l| Line::from(Span::styled(format!("  {l}"), styles.code_block))),
        );
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(stepper.counter(), Styles::highlight()),
        Span::styled("   p previous  n next", Styles::dim()),
    ]));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use guide_engine::TutorialCatalog;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_first_step_has_no_sketch() {
        let stepper = Stepper::load(&TutorialCatalog::builtin(), "led").unwrap();
        let text = plain(&stepper_lines(&stepper, &MarkdownStyles::default()));

        assert_eq!(text[0], "Blink LED – Step 1");
        assert!(text[1].starts_with("[image: "));
        assert!(text.last().unwrap().starts_with("Step 1 / 4"));
        assert!(!text.iter().any(|l| l.contains("pinMode")));
    }

    #[test]
    fn test_last_step_shows_sketch() {
        let mut stepper = Stepper::load(&TutorialCatalog::builtin(), "led").unwrap();
        stepper.go_to(3);
        let text = plain(&stepper_lines(&stepper, &MarkdownStyles::default()));

        assert_eq!(text[0], "Blink LED – Step 4");
        assert!(text.iter().any(|l| l == "    pinMode(13, OUTPUT);"));
        assert!(text.last().unwrap().starts_with("Step 4 / 4"));
    }
}
