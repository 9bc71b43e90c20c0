//! output/error reporting and formatting

use std::fmt;
use std::iter;
use std::fmt::Formatter;
use crate::utils;
use crate::lexer::Span;
use crate::parser::ParserError;
use crate::runtime::RuntimeError;


pub fn render_parser_error<'a>(error: &'a ParserError, source: &'a str) -> impl fmt::Display + 'a {
    utils::delegate_fmt(move |fmt| fmt_parser_error(fmt, error, source))
}

pub fn fmt_parser_error(fmt: &mut Formatter<'_>, error: &ParserError, source: &str) -> fmt::Result {
    // Write error message
    let message = utils::title_case_string(&error.to_string());
    write!(fmt, "{}.\n\n", message)?;

    // Write source line
    fmt_source_line(fmt, source, error.span())
}

pub fn render_runtime_error(error: &RuntimeError) -> impl fmt::Display + '_ {
    utils::delegate_fmt(move |fmt| utils::format_error(fmt, "Runtime error", Some(error.message()), None))
}

// the line containing the start of `span`, with a marker under the spanned text
fn fmt_source_line(fmt: &mut Formatter<'_>, source: &str, span: &Span) -> fmt::Result {
    let index = span.index.min(source.len());

    let line_start = source[..index].rfind('\n').map_or(0, |idx| idx + 1);
    let line_end = source[index..].find('\n').map_or(source.len(), |idx| index + idx);
    let lineno = source[..line_start].matches('\n').count() + 1;

    let source_line = source[line_start..line_end].trim_end();

    let start_col = source[line_start..index].chars().count();
    let span_end = span.end().min(line_end).max(index);
    let marker_len = source[index..span_end].chars().count().max(1);

    let margin = format!("{: >3}", lineno);

    let mut marker = String::new();
    marker.extend(iter::repeat(' ').take(margin.len()));
    marker.push_str("     ");

    marker.extend(iter::repeat(' ').take(start_col));
    marker.extend(iter::repeat('^').take(marker_len));

    writeln!(fmt, "{}|    {}", margin, source_line)?;
    writeln!(fmt, "{}", marker)?;

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    fn parser_error(source: &str) -> ParserError {
        match Parser::new(source).parse_program() {
            Ok(program) => panic!("expected syntax error, got: {}", program),
            Err(error) => error,
        }
    }

    #[test]
    fn renders_parser_error_with_marker() {
        let source = "let = 5;";
        let error = parser_error(source);
        let rendered = render_parser_error(&error, source).to_string();

        let expected = concat!(
            "Syntax error: expected identifier, found '='.\n",
            "\n",
            "  1|    let = 5;\n",
            "            ^\n",
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn renders_error_on_later_line() {
        let source = "let x = 1;\nlet y = (x + 2;\n";
        let error = parser_error(source);
        let rendered = render_parser_error(&error, source).to_string();

        let expected = concat!(
            "Syntax error: expected ')', found ';'.\n",
            "\n",
            "  2|    let y = (x + 2;\n",
            "                      ^\n",
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn renders_unexpected_eof_after_last_char() {
        let source = "foo(1";
        let error = parser_error(source);
        let rendered = render_parser_error(&error, source).to_string();

        let expected = concat!(
            "Syntax error: unexpected end of input, expected ')'.\n",
            "\n",
            "  1|    foo(1\n",
            "             ^\n",
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn renders_runtime_error() {
        let error = RuntimeError::divide_by_zero();
        assert_eq!(render_runtime_error(&error).to_string(), "Runtime error: division by zero");
    }
}
