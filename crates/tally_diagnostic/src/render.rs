use std::io;

use termcolor::{ColorSpec, WriteColor};
use unicode_width::UnicodeWidthStr;

use crate::source::Source;
use crate::span::Span;
use crate::{Config, Diagnostic, Severity, SnippetKind};

const TAB: &str = "    ";

impl Diagnostic {
    pub fn write_to_stream(
        &self,
        source: &Source,
        config: &Config,
        stream: &mut impl WriteColor,
    ) -> io::Result<()> {
        DiagnosticWriter {
            diagnostic: self,
            source,
            stream,
            config,
        }
        .draw_all()
    }
}

struct DiagnosticWriter<'stream, 'a, W: WriteColor> {
    diagnostic: &'a Diagnostic,
    source: &'a Source,

    stream: &'stream mut W,
    config: &'a Config,
}

impl<'a, W: WriteColor> DiagnosticWriter<'_, 'a, W> {
    fn draw_all(mut self) -> io::Result<()> {
        self.draw_header()?;

        let snippets = self.snippet_datas();
        if snippets.is_empty() {
            writeln!(self.stream)?;
        }

        let num_lines = self.source.num_lines();
        for (group, mut lines) in get_overlapping_groups(snippets, |s| s.lines) {
            lines.start = lines.start.saturating_sub(self.config.context_size);
            lines.end = (lines.end + self.config.context_size).min(num_lines);

            self.draw_group(&group, lines)?;
        }

        Ok(())
    }

    fn draw_header(&mut self) -> io::Result<()> {
        self.stream.set_color(self.primary_color())?;

        if let Some(id) = &self.diagnostic.id {
            write!(self.stream, "[{id}] ")?;
        }

        write!(self.stream, "{}:", self.diagnostic.severity.as_str())?;

        self.stream.reset()?;

        match &self.diagnostic.message {
            Some(message) => writeln!(self.stream, " {message}"),
            None => writeln!(self.stream),
        }
    }

    fn draw_group(&mut self, snippets: &[SnippetData], lines: Span) -> io::Result<()> {
        let source = self.source;

        let last_line = source.line_number(lines.end.saturating_sub(1));
        let line_num_width = 1 + last_line.ilog10() as usize;

        // all groups have at least one snippet
        let (line_num, col_num) = source
            .byte_to_line_col(snippets[0].bytes.start)
            .unwrap_or((1, 1));

        self.stream.set_color(&self.config.subtle)?;
        writeln!(self.stream, "In {}:{line_num}:{col_num}", source.name())?;
        self.stream.reset()?;

        for line in lines.start..lines.end {
            let Some(line_str) = source.line_str(line) else {
                break;
            };

            self.draw_gutter(Some(source.line_number(line)), line_num_width)?;
            writeln!(self.stream, "{}", line_str.replace('\t', TAB))?;

            let line_start = source.line_to_byte(line).unwrap_or(0);
            let line_end = line_start + line_str.len();

            for snippet in snippets.iter().filter(|s| s.lines.start == line) {
                self.draw_gutter(None, line_num_width)?;

                let before = &source.text()[line_start..snippet.bytes.start];
                let offset = str_width(before);

                // snippets running past the end of the line are cut off there
                let end = snippet.bytes.end.min(line_end).max(snippet.bytes.start);
                let underlined = &source.text()[snippet.bytes.start..end];
                let width = str_width(underlined).max(1);

                self.stream.set_color(self.snippet_color(snippet.kind))?;

                write!(self.stream, "{:<offset$}", "")?;
                for _ in 0..width {
                    write!(self.stream, "{}", self.config.underline)?;
                }
                write!(self.stream, "{}{}", self.config.underline_after, snippet.label)?;

                self.stream.reset()?;
                writeln!(self.stream)?;
            }
        }

        writeln!(self.stream)?;

        Ok(())
    }

    fn draw_gutter(&mut self, line: Option<usize>, line_num_width: usize) -> io::Result<()> {
        self.stream.set_color(&self.config.subtle)?;

        match line {
            Some(line) => write!(self.stream, "{line:>line_num_width$}")?,
            None => write!(self.stream, "{:>line_num_width$}", "")?,
        }

        write!(self.stream, " {} ", self.config.gutter)?;

        self.stream.reset()
    }

    fn snippet_datas(&self) -> Vec<SnippetData<'a>> {
        let text = self.source.text();

        self.diagnostic
            .snippets
            .iter()
            .map(|snippet| {
                // clamp to the source so bad spans still render something
                let start = floor_char_boundary(text, snippet.span.start.min(text.len()));
                let end = floor_char_boundary(text, snippet.span.end.clamp(start, text.len()));

                let line = self.source.byte_to_line_index(start).unwrap_or(0);

                SnippetData {
                    label: &snippet.label,
                    kind: snippet.kind,

                    bytes: Span::new(start, end),
                    lines: Span::new(line, line + 1),
                }
            })
            .collect()
    }

    fn primary_color(&self) -> &'a ColorSpec {
        match self.diagnostic.severity {
            Severity::Warning => &self.config.warning_color,
            Severity::Error => &self.config.error_color,
        }
    }

    fn snippet_color(&self, kind: SnippetKind) -> &'a ColorSpec {
        match kind {
            SnippetKind::Primary => self.primary_color(),
            SnippetKind::Secondary => &self.config.emphasis,
        }
    }
}

#[derive(Clone)]
struct SnippetData<'a> {
    label: &'a str,
    kind: SnippetKind,

    bytes: Span,
    lines: Span,
}

fn get_overlapping_groups<T, F>(mut items: Vec<T>, get_range: F) -> Vec<(Vec<T>, Span)>
where
    F: Fn(&T) -> Span,
{
    items.sort_by_key(|item| get_range(item).start);

    let mut groups = vec![];

    let mut group = vec![];
    let mut group_start = 0;
    let mut group_end = 0;

    for item in items {
        let range = get_range(&item);

        if range.start > group_end {
            if !group.is_empty() {
                groups.push((
                    std::mem::take(&mut group),
                    Span::new(group_start, group_end),
                ));
            }

            group_start = range.start;
        }

        group_end = group_end.max(range.end);
        group.push(item);
    }

    if !group.is_empty() {
        groups.push((group, Span::new(group_start, group_end)));
    }

    groups
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn str_width(s: &str) -> usize {
    let num_tabs = s.chars().filter(|&ch| ch == '\t').count();
    s.width() + num_tabs * TAB.len()
}

#[cfg(test)]
mod tests {
    use termcolor::NoColor;

    use super::get_overlapping_groups;
    use crate::source::Source;
    use crate::span::Span;
    use crate::{Config, Diagnostic, Snippet};

    #[must_use]
    fn render(diagnostic: &Diagnostic, source: &Source) -> String {
        let mut stream = NoColor::new(vec![]);

        diagnostic
            .write_to_stream(source, &Config::default(), &mut stream)
            .unwrap();

        String::from_utf8(stream.into_inner()).unwrap()
    }

    #[test]
    fn overlapping_groups() {
        let ranges = vec![
            Span::new(5, 7),
            Span::new(0, 1),
            Span::new(0, 10),
            Span::new(11, 12),
        ];

        assert_eq!(
            get_overlapping_groups(ranges, |&r| r),
            vec![
                (
                    vec![Span::new(0, 1), Span::new(0, 10), Span::new(5, 7)],
                    Span::new(0, 10)
                ),
                (vec![Span::new(11, 12)], Span::new(11, 12)),
            ]
        );
    }

    #[test]
    fn header_only() {
        let diagnostic = Diagnostic::warning()
            .with_id("W01")
            .with_message("nothing to see");

        assert_eq!(
            render(&diagnostic, &Source::new("<stdin>", "")),
            "[W01] Warning: nothing to see\n\n"
        );
    }

    #[test]
    fn single_line_snippet() {
        let source = Source::new("<stdin>", "1 + 99999999999999999999");
        let diagnostic = Diagnostic::error()
            .with_message("syntax error")
            .with_snippet(Snippet::primary("too large", 4..24));

        let expected = [
            "Error: syntax error",
            "In <stdin>:1:5",
            "1 │ 1 + 99999999999999999999",
            "  │     ^^^^^^^^^^^^^^^^^^^^  too large",
            "",
            "",
        ]
        .join("\n");

        assert_eq!(render(&diagnostic, &source), expected);
    }

    #[test]
    fn snippets_on_separate_lines() {
        let source = Source::new("input", "1 +\n\n\n\n\n\n2 -");
        let diagnostic = Diagnostic::error()
            .with_snippet(Snippet::primary("here", 2..3))
            .with_snippet(Snippet::secondary("and here", 11..12));

        let rendered = render(&diagnostic, &source);

        assert!(rendered.starts_with("Error:\nIn input:1:3\n"));
        assert!(rendered.contains("1 │ 1 +\n  │   ^  here\n"));
        assert!(rendered.contains("In input:7:3\n"));
        assert!(rendered.contains("7 │ 2 -\n  │   ^  and here\n"));
    }

    #[test]
    fn line_offset_widens_the_gutter() {
        let source = Source::new("<stdin>", "2 +").with_line_offset(9);
        let diagnostic = Diagnostic::error().with_snippet(Snippet::primary("here", 2..3));

        let rendered = render(&diagnostic, &source);

        assert!(rendered.starts_with("Error:\nIn <stdin>:10:3\n"));
        assert!(rendered.contains("10 │ 2 +\n   │   ^  here\n"));
    }

    #[test]
    fn out_of_range_snippet_is_clamped() {
        let source = Source::new("<stdin>", "12");
        let diagnostic = Diagnostic::error().with_snippet(Snippet::primary("end", 5..9));

        let rendered = render(&diagnostic, &source);
        assert!(rendered.contains("1 │ 12\n  │   ^  end\n"));
    }
}
