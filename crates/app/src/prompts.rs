//! Line-oriented console and the re-prompting input helpers

use std::io::{self, BufRead, ErrorKind, Write};
use std::str::FromStr;

use duproprio_core::models::{validate_price, validate_price_range};
use duproprio_core::{City, PropertyType};

/// Terminal input/output, generic so tests can drive it from memory
pub struct Console<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Write a line
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Write text as-is
    pub fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())
    }

    /// Show a prompt and read one trimmed line; `None` at end of input
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like [`Console::read_line`] but end of input is an error
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        self.read_line(prompt)?
            .ok_or_else(|| io::Error::new(ErrorKind::UnexpectedEof, "input closed"))
    }

    /// Ask until the answer parses. Blank answers yield `None` when optional.
    fn ask_parsed<T, F>(&mut self, prompt: &str, optional: bool, mut parse: F) -> io::Result<Option<T>>
    where
        F: FnMut(&str) -> Result<T, String>,
    {
        loop {
            let answer = self.ask(prompt)?;
            if optional && answer.is_empty() {
                return Ok(None);
            }
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(message) => self.say(&message)?,
            }
        }
    }

    pub fn ask_city(&mut self, optional: bool) -> io::Result<Option<City>> {
        self.say(&format!("Choose a city from: {}", names(City::ALL)))?;
        self.ask_parsed(&prompt_label("City", optional), optional, |s| {
            City::from_str(s)
                .map_err(|_| format!("Invalid city. Choose from: {}", names(City::ALL)))
        })
    }

    pub fn ask_property_type(&mut self, optional: bool) -> io::Result<Option<PropertyType>> {
        self.say(&format!(
            "Choose a property type from: {}",
            names(PropertyType::ALL)
        ))?;
        self.ask_parsed(&prompt_label("Property type", optional), optional, |s| {
            PropertyType::from_str(s).map_err(|_| {
                format!(
                    "Invalid property type. Choose from: {}",
                    names(PropertyType::ALL)
                )
            })
        })
    }

    /// Non-negative whole number
    pub fn ask_count(&mut self, label: &str, optional: bool) -> io::Result<Option<u32>> {
        self.ask_parsed(&prompt_label(label, optional), optional, |s| {
            s.parse::<u32>()
                .map_err(|_| "Invalid value. Please enter a whole number.".to_string())
        })
    }

    /// Non-negative amount in dollars
    pub fn ask_price(&mut self, label: &str, optional: bool) -> io::Result<Option<f64>> {
        self.ask_parsed(&prompt_label(label, optional), optional, |s| {
            let price = s
                .parse::<f64>()
                .map_err(|_| "Invalid value. Please enter a number.".to_string())?;
            validate_price(price).map_err(|e| e.to_string())?;
            Ok(price)
        })
    }

    /// Optional min/max pair, asked again until min <= max
    pub fn ask_price_range(&mut self) -> io::Result<(Option<f64>, Option<f64>)> {
        loop {
            let min = self.ask_price("Minimum price", true)?;
            let max = self.ask_price("Maximum price", true)?;
            match validate_price_range(min, max) {
                Ok(()) => return Ok((min, max)),
                Err(e) => self.say(&e.to_string())?,
            }
        }
    }
}

fn prompt_label(label: &str, optional: bool) -> String {
    if optional {
        format!("{label} (leave blank to skip): ")
    } else {
        format!("{label}: ")
    }
}

fn names<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    #[test]
    fn test_read_line_trims_and_detects_eof() {
        let mut c = console("  hello \n");
        assert_eq!(c.read_line("> ").unwrap().as_deref(), Some("hello"));
        assert_eq!(c.read_line("> ").unwrap(), None);
        assert_eq!(
            c.ask("> ").unwrap_err().kind(),
            ErrorKind::UnexpectedEof
        );
    }

    #[test]
    fn test_city_reprompts() {
        let mut c = console("Paris\nMontréal\n");
        assert_eq!(c.ask_city(false).unwrap(), Some(City::Montreal));
        assert!(printed(&c).contains("Invalid city"));
    }

    #[test]
    fn test_optional_blank_is_none() {
        let mut c = console("\n\n\n");
        assert_eq!(c.ask_city(true).unwrap(), None);
        assert_eq!(c.ask_property_type(true).unwrap(), None);
        assert_eq!(c.ask_count("Bedrooms", true).unwrap(), None);
    }

    #[test]
    fn test_required_blank_reprompts() {
        let mut c = console("\nCondo\n");
        assert_eq!(c.ask_property_type(false).unwrap(), Some(PropertyType::Condo));
    }

    #[test]
    fn test_count_rejects_garbage() {
        let mut c = console("two\n-1\n2\n");
        assert_eq!(c.ask_count("Bedrooms", false).unwrap(), Some(2));
        assert_eq!(printed(&c).matches("whole number").count(), 2);
    }

    #[test]
    fn test_price_rejects_negative() {
        let mut c = console("-5\nabc\n0\n");
        assert_eq!(c.ask_price("Price", false).unwrap(), Some(0.0));
        let out = printed(&c);
        assert!(out.contains("must not be negative"));
        assert!(out.contains("enter a number"));
    }

    #[test]
    fn test_price_range() {
        let mut c = console("500\n100\n100\n\n");
        assert_eq!(c.ask_price_range().unwrap(), (Some(100.0), None));
        assert!(printed(&c).contains("less than or equal"));
    }
}
