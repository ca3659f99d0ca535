//! Console frontend
//!
//! Line-oriented rendition of the two screens. Generic over its reader and
//! writer so tests can drive it with in-memory buffers.

use crate::error::AppError;
use crate::flow::{Frontend, InputEvent, ResultEvent};
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};
use std::path::PathBuf;

pub struct ConsoleFrontend<R, W> {
    input: R,
    output: W,
}

impl ConsoleFrontend<BufReader<Stdin>, Stdout> {
    /// Frontend wired to the process stdio.
    pub fn stdio() -> Self {
        Self {
            input: BufReader::new(std::io::stdin()),
            output: std::io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> ConsoleFrontend<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompt and read one trimmed line. None on EOF.
    fn prompt(&mut self, message: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Frontend for ConsoleFrontend<R, W> {
    fn input_screen(&mut self, languages: &[&str]) -> Result<InputEvent, AppError> {
        let path = match self.prompt("Image file (blank to quit): ")? {
            None => return Ok(InputEvent::Close),
            Some(line) if line.is_empty() => return Ok(InputEvent::Close),
            Some(line) => PathBuf::from(line),
        };

        writeln!(self.output, "Languages:")?;
        for (i, name) in languages.iter().enumerate() {
            writeln!(self.output, "  {}. {}", i + 1, name)?;
        }

        loop {
            let choice = match self.prompt("Language [1]: ")? {
                None => return Ok(InputEvent::Close),
                Some(line) => line,
            };

            // Blank accepts the default; otherwise a number or an exact name
            let language = if choice.is_empty() {
                Some(languages[0])
            } else if let Ok(n) = choice.parse::<usize>() {
                (n >= 1).then(|| languages.get(n - 1).copied()).flatten()
            } else {
                languages.iter().find(|name| **name == choice).copied()
            };

            match language {
                Some(name) => {
                    return Ok(InputEvent::Submit {
                        path,
                        language: name.to_string(),
                    })
                }
                None => writeln!(self.output, "Unknown language: {}", choice)?,
            }
        }
    }

    fn result_screen(&mut self, text: &str) -> Result<ResultEvent, AppError> {
        writeln!(self.output, "---- Result ----")?;
        writeln!(self.output, "{}", text)?;
        writeln!(self.output, "----------------")?;

        loop {
            let choice = match self
                .prompt("[t] translate  [k] translate, keep line breaks  [c] close: ")?
            {
                None => return Ok(ResultEvent::Close),
                Some(line) => line.to_lowercase(),
            };

            match choice.as_str() {
                "t" => {
                    return Ok(ResultEvent::Translate {
                        strip_line_breaks: true,
                    })
                }
                "k" => {
                    return Ok(ResultEvent::Translate {
                        strip_line_breaks: false,
                    })
                }
                "c" | "" => return Ok(ResultEvent::Close),
                other => writeln!(self.output, "Unknown choice: {}", other)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_screen_with(input: &str) -> (InputEvent, String) {
        let mut out = Vec::new();
        let event = {
            let mut frontend = ConsoleFrontend::new(input.as_bytes(), &mut out);
            frontend.input_screen(&["English", "日本語"]).unwrap()
        };
        (event, String::from_utf8(out).unwrap())
    }

    fn result_screen_with(input: &str, text: &str) -> (ResultEvent, String) {
        let mut out = Vec::new();
        let event = {
            let mut frontend = ConsoleFrontend::new(input.as_bytes(), &mut out);
            frontend.result_screen(text).unwrap()
        };
        (event, String::from_utf8(out).unwrap())
    }

    #[test]
    fn blank_path_closes_the_input_screen() {
        let (event, _) = input_screen_with("\n");
        assert!(matches!(event, InputEvent::Close));
    }

    #[test]
    fn eof_closes_the_input_screen() {
        let (event, _) = input_screen_with("");
        assert!(matches!(event, InputEvent::Close));
    }

    #[test]
    fn blank_language_choice_picks_the_default() {
        let (event, _) = input_screen_with("shot.png\n\n");
        match event {
            InputEvent::Submit { path, language } => {
                assert_eq!(path, PathBuf::from("shot.png"));
                assert_eq!(language, "English");
            }
            other => panic!("Expected Submit, got {:?}", other),
        }
    }

    #[test]
    fn numeric_language_choice_is_accepted() {
        let (event, _) = input_screen_with("shot.png\n2\n");
        match event {
            InputEvent::Submit { language, .. } => assert_eq!(language, "日本語"),
            other => panic!("Expected Submit, got {:?}", other),
        }
    }

    #[test]
    fn exact_name_language_choice_is_accepted() {
        let (event, _) = input_screen_with("shot.png\n日本語\n");
        match event {
            InputEvent::Submit { language, .. } => assert_eq!(language, "日本語"),
            other => panic!("Expected Submit, got {:?}", other),
        }
    }

    #[test]
    fn unknown_language_choice_reprompts() {
        let (event, out) = input_screen_with("shot.png\nKlingon\n1\n");
        assert!(out.contains("Unknown language: Klingon"));
        assert!(matches!(event, InputEvent::Submit { .. }));
    }

    #[test]
    fn result_screen_shows_the_text() {
        let (_, out) = result_screen_with("c\n", "hello\nworld");
        assert!(out.contains("hello\nworld"));
    }

    #[test]
    fn translate_choice_strips_line_breaks_by_default() {
        let (event, _) = result_screen_with("t\n", "hi");
        assert!(matches!(
            event,
            ResultEvent::Translate {
                strip_line_breaks: true
            }
        ));
    }

    #[test]
    fn keep_choice_preserves_line_breaks() {
        let (event, _) = result_screen_with("k\n", "hi");
        assert!(matches!(
            event,
            ResultEvent::Translate {
                strip_line_breaks: false
            }
        ));
    }

    #[test]
    fn close_and_eof_dismiss_the_result_screen() {
        let (event, _) = result_screen_with("c\n", "hi");
        assert!(matches!(event, ResultEvent::Close));
        let (event, _) = result_screen_with("", "hi");
        assert!(matches!(event, ResultEvent::Close));
    }
}
