//! Wrapping of styled lines.
//!
//! textwrap decides the break points on the plain text (first fit, so a
//! line takes every word that fits); the styles are then laid back over the
//! wrapped pieces character by character.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::width::visual_width;

/// Wrap every line to `width` cells. A width of 0 leaves lines untouched.
pub fn wrap_lines(lines: Vec<Line<'static>>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return lines;
    }
    lines
        .into_iter()
        .flat_map(|line| wrap_line(line, width))
        .collect()
}

fn line_width(line: &Line<'_>) -> usize {
    line.spans.iter().map(|s| visual_width(&s.content)).sum()
}

fn wrap_line(line: Line<'static>, width: usize) -> Vec<Line<'static>> {
    if line_width(&line) <= width {
        return vec![line];
    }

    let styled: Vec<(char, Style)> = line
        .spans
        .iter()
        .flat_map(|span| span.content.chars().map(move |c| (c, span.style)))
        .collect();
    let plain: String = styled.iter().map(|(c, _)| *c).collect();

    let mut result = Vec::new();
    let mut pos = 0;

    let options = textwrap::Options::new(width).wrap_algorithm(textwrap::WrapAlgorithm::FirstFit);
    for piece in textwrap::wrap(&plain, options) {
        // Whitespace textwrap dropped at the break
        while pos < styled.len() && styled[pos].0.is_whitespace() && !piece.starts_with(styled[pos].0)
        {
            pos += 1;
        }

        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut run = String::new();
        let mut run_style: Option<Style> = None;

        for expected in piece.chars() {
            let (ch, style) = styled.get(pos).copied().unwrap_or((expected, Style::default()));
            pos += 1;

            if run_style.is_some_and(|s| s != style) {
                spans.push(Span::styled(std::mem::take(&mut run), run_style.unwrap_or_default()));
            }
            run_style = Some(style);
            run.push(ch);
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, run_style.unwrap_or_default()));
        }

        result.push(Line::from(spans));
    }

    if result.is_empty() {
        result.push(Line::default());
    }
    result
}
