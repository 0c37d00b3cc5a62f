//! Line-oriented prompting over any reader/writer pair.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

pub const POSITIVE_NUMBER_ERROR: &str = "Invalid input. Please enter a positive number.";
pub const NON_NEGATIVE_NUMBER_ERROR: &str =
    "Invalid input. Please enter a number greater than or equal to zero.";
pub const WHOLE_NUMBER_ERROR: &str =
    "Invalid input. Please enter a whole number greater than or equal to zero.";
pub const POSITIVE_COUNT_ERROR: &str = "Invalid input. Please enter a whole number greater than zero.";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Next input line without its terminator, or `None` once input is
    /// exhausted.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    pub fn prompt_line(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Re-prompts with `error_message` until the line parses and `accept`
    /// holds.
    pub fn prompt_parsed<T, F>(
        &mut self,
        message: &str,
        error_message: &str,
        accept: F,
    ) -> io::Result<Option<T>>
    where
        T: FromStr,
        F: Fn(&T) -> bool,
    {
        loop {
            let Some(line) = self.prompt_line(message)? else {
                return Ok(None);
            };

            match line.trim().parse::<T>() {
                Ok(value) if accept(&value) => return Ok(Some(value)),
                _ => writeln!(self.output, "{}", error_message)?,
            }
        }
    }

    pub fn prompt_positive(&mut self, message: &str) -> io::Result<Option<f64>> {
        self.prompt_parsed(message, POSITIVE_NUMBER_ERROR, |value: &f64| {
            value.is_finite() && *value > 0.0
        })
    }

    pub fn prompt_non_negative(&mut self, message: &str) -> io::Result<Option<f64>> {
        self.prompt_parsed(message, NON_NEGATIVE_NUMBER_ERROR, |value: &f64| {
            value.is_finite() && *value >= 0.0
        })
    }

    pub fn prompt_whole_number(&mut self, message: &str) -> io::Result<Option<i32>> {
        self.prompt_parsed(message, WHOLE_NUMBER_ERROR, |value: &i32| *value >= 0)
    }

    pub fn prompt_count(&mut self, message: &str) -> io::Result<Option<u32>> {
        self.prompt_parsed(message, POSITIVE_COUNT_ERROR, |value: &u32| *value > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_read_line_strips_terminator() {
        let mut console = console("Washing machine\r\nsecond\n");
        assert_eq!(
            console.read_line().unwrap(),
            Some("Washing machine".to_string())
        );
        assert_eq!(console.read_line().unwrap(), Some("second".to_string()));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_prompt_positive_reprompts() {
        let mut console = console("abc\n-4\n0\ninf\n12.5\n");
        let value = console.prompt_positive("Watts: ").unwrap();
        assert_eq!(value, Some(12.5));

        let text = output(console);
        assert_eq!(text.matches(POSITIVE_NUMBER_ERROR).count(), 4);
        assert_eq!(text.matches("Watts: ").count(), 5);
    }

    #[test]
    fn test_prompt_non_negative_accepts_zero() {
        let mut console = console("-1\n0\n");
        assert_eq!(console.prompt_non_negative("Minutes: ").unwrap(), Some(0.0));
        assert!(output(console).contains(NON_NEGATIVE_NUMBER_ERROR));
    }

    #[test]
    fn test_prompt_whole_number_rejects_fractions() {
        let mut console = console("2.5\n-3\n 7 \n");
        assert_eq!(console.prompt_whole_number("Days: ").unwrap(), Some(7));
        assert_eq!(output(console).matches(WHOLE_NUMBER_ERROR).count(), 2);
    }

    #[test]
    fn test_prompt_count_rejects_zero() {
        let mut console = console("0\n3\n");
        assert_eq!(console.prompt_count("How many? ").unwrap(), Some(3));
    }

    #[test]
    fn test_exhausted_input_returns_none() {
        let mut console = console("nope\n");
        assert_eq!(console.prompt_positive("Budget: ").unwrap(), None);
    }
}
