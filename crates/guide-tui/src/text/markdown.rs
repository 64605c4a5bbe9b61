//! Markdown rendering using pulldown-cmark.
//!
//! View bodies are written in a small subset of markdown: headings,
//! paragraphs, lists, emphasis, inline code and fenced code blocks.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::styles::MarkdownStyles;

/// Render markdown text to styled ratatui Lines.
pub fn render_markdown(input: &str, styles: &MarkdownStyles) -> Vec<Line<'static>> {
    let mut renderer = MarkdownRenderer::new(styles.clone());
    renderer.run(Parser::new(input));
    renderer.lines
}

struct MarkdownRenderer {
    lines: Vec<Line<'static>>,
    styles: MarkdownStyles,
    /// Nested inline styles.
    style_stack: Vec<Style>,
    current_spans: Vec<Span<'static>>,
    list_depth: usize,
    in_code_block: bool,
    pending_list_marker: Option<String>,
}

impl MarkdownRenderer {
    fn new(styles: MarkdownStyles) -> Self {
        Self {
            lines: Vec::new(),
            styles,
            style_stack: Vec::new(),
            current_spans: Vec::new(),
            list_depth: 0,
            in_code_block: false,
            pending_list_marker: None,
        }
    }

    fn run<'a>(&mut self, parser: impl Iterator<Item = Event<'a>>) {
        for event in parser {
            self.handle_event(event);
        }
        self.flush_line();

        // No trailing blank line after the last paragraph
        while self.lines.last().is_some_and(|l| l.spans.is_empty()) {
            self.lines.pop();
        }
    }

    fn handle_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                self.flush_line();
                self.style_stack.push(self.heading_style(level));
            }
            Event::End(TagEnd::Heading(_)) => {
                self.flush_line();
                self.style_stack.pop();
                self.lines.push(Line::default());
            }

            Event::Start(Tag::Emphasis) => self.style_stack.push(self.styles.emphasis),
            Event::Start(Tag::Strong) => self.style_stack.push(self.styles.strong),
            Event::Start(Tag::Link { .. }) => self.style_stack.push(self.styles.link),
            Event::End(TagEnd::Emphasis | TagEnd::Strong | TagEnd::Link) => {
                self.style_stack.pop();
            }

            Event::Start(Tag::CodeBlock(_)) => {
                self.flush_line();
                self.in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                self.flush_line();
                self.in_code_block = false;
                self.lines.push(Line::default());
            }

            Event::Start(Tag::List(_)) => {
                self.flush_line();
                self.list_depth += 1;
            }
            Event::End(TagEnd::List(_)) => {
                self.list_depth = self.list_depth.saturating_sub(1);
                if self.list_depth == 0 {
                    self.lines.push(Line::default());
                }
            }
            Event::Start(Tag::Item) => {
                self.flush_line();
                let indent = "  ".repeat(self.list_depth.saturating_sub(1));
                self.pending_list_marker = Some(format!("{indent}• "));
            }
            Event::End(TagEnd::Item) => self.flush_line(),

            Event::End(TagEnd::Paragraph) => {
                self.flush_line();
                if self.list_depth == 0 {
                    self.lines.push(Line::default());
                }
            }

            Event::Text(text) => self.add_text(&text),
            Event::Code(code) => {
                self.take_list_marker();
                self.current_spans
                    .push(Span::styled(code.to_string(), self.styles.code));
            }
            Event::SoftBreak => self.add_text(" "),
            Event::HardBreak => self.flush_line(),

            _ => {}
        }
    }

    fn add_text(&mut self, text: &str) {
        if self.in_code_block {
            for line in text.lines() {
                self.current_spans
                    .push(Span::styled(format!("  {line}"), self.styles.code_block));
                self.flush_line();
            }
            return;
        }

        self.take_list_marker();
        let style = self.current_style();
        self.current_spans.push(Span::styled(text.to_string(), style));
    }

    fn take_list_marker(&mut self) {
        if let Some(marker) = self.pending_list_marker.take() {
            self.current_spans
                .push(Span::styled(marker, self.styles.list_marker));
        }
    }

    fn current_style(&self) -> Style {
        self.style_stack
            .iter()
            .fold(self.styles.text, |style, s| style.patch(*s))
    }

    fn heading_style(&self, level: HeadingLevel) -> Style {
        match level {
            HeadingLevel::H1 => self.styles.h1,
            HeadingLevel::H2 => self.styles.h2,
            _ => self.styles.h3,
        }
    }

    fn flush_line(&mut self) {
        if !self.current_spans.is_empty() {
            let spans = std::mem::take(&mut self.current_spans);
            self.lines.push(Line::from(spans));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Modifier;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn render(md: &str) -> Vec<Line<'static>> {
        render_markdown(md, &MarkdownStyles::default())
    }

    #[test]
    fn test_render_empty() {
        assert!(render("").is_empty());
    }

    #[test]
    fn test_heading_then_paragraph() {
        let lines = render("# Tutorial\n\nFollow the steps.");
        assert_eq!(plain(&lines), vec!["Tutorial", "", "Follow the steps."]);
        assert!(lines[0].spans[0].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_list_items_get_bullets() {
        let lines = render("- Blink LED\n- Button input");
        assert_eq!(plain(&lines), vec!["• Blink LED", "• Button input"]);
    }

    #[test]
    fn test_list_item_starting_with_code() {
        let lines = render("- `millis` for timers");
        assert_eq!(plain(&lines), vec!["• millis for timers"]);
    }

    #[test]
    fn test_code_block_lines_are_indented() {
        let lines = render("```\npinMode(13, OUTPUT);\ndelay(1000);\n```");
        assert_eq!(
            plain(&lines),
            vec!["  pinMode(13, OUTPUT);", "  delay(1000);"]
        );
    }

    #[test]
    fn test_soft_break_joins_lines() {
        let lines = render("first\nsecond");
        assert_eq!(plain(&lines), vec!["first second"]);
    }

    #[test]
    fn test_builtin_bodies_render() {
        for spec in guide_engine::view::builtin_specs() {
            let lines = render(&spec.body);
            assert!(!lines.is_empty(), "{} rendered nothing", spec.id);
        }
    }
}
