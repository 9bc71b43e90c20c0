use core::fmt;


pub fn title_case_string(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
    }
}


// Formats each item with Display, separated by `sep`, without building an intermediate Vec<String>
pub fn fmt_join<'a, T>(sep: &'a str, items: &'a [T]) -> impl fmt::Display + 'a where T: fmt::Display {
    delegate_fmt(move |fmt| {
        if let Some((first, rest)) = items.split_first() {
            write!(fmt, "{}", first)?;
            for item in rest.iter() {
                write!(fmt, "{}{}", sep, item)?;
            }
        }
        Ok(())
    })
}


// Formatter that uses a closure
// Useful to avoid a lot of boilerplate when there are multiple ways to Display a struct

pub fn delegate_fmt<F>(fmt_func: F) -> impl fmt::Display where F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result {
    FnFormatter { fmt_func }
}

struct FnFormatter<F> where F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result {
    fmt_func: F,
}

impl<F> fmt::Display for FnFormatter<F> where F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.fmt_func)(fmt)
    }
}


// Formats an error that may have a message and/or a source error
pub fn format_error(fmt: &mut fmt::Formatter<'_>, title: &str, message: Option<&str>, source: Option<&dyn std::error::Error>) -> fmt::Result {
    // empty messages are formatted the same as no message
    let message =
        if let Some("") = message { None }
        else { message };

    match (message, source) {
        (None, None) => fmt.write_str(title),
        (None, Some(error)) => write!(fmt, "{}: {}", title, error),
        (Some(message), None) => write!(fmt, "{}: {}", title, message),
        (Some(message), Some(error)) => write!(fmt, "{}: {}: {}", title, message, error),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_join_separates_items() {
        let items = [1, 2, 3];
        assert_eq!(fmt_join(", ", &items).to_string(), "1, 2, 3");

        let empty: [i32; 0] = [];
        assert_eq!(fmt_join(", ", &empty).to_string(), "");
    }

    #[test]
    fn title_case_capitalizes_first_char() {
        assert_eq!(title_case_string("syntax error"), "Syntax error");
        assert_eq!(title_case_string(""), "");
    }
}
