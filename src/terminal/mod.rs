pub mod commands;

use tracing::debug;

pub use commands::Command;

pub const BANNER: [&str; 3] = [
    "Welcome to CyberSec Terminal v1.0",
    "Type \"help\" for available commands",
    "",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Appended(usize),
    Cleared,
    Closed,
}

pub struct Terminal<'a> {
    scrollback: Vec<String>,
    input: String,
    on_close: Box<dyn FnMut() + 'a>,
}

impl<'a> Terminal<'a> {
    pub fn new(on_close: impl FnMut() + 'a) -> Self {
        Self {
            scrollback: banner(),
            input: String::new(),
            on_close: Box::new(on_close),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.scrollback
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn enter(&mut self) -> Outcome {
        let raw = std::mem::take(&mut self.input);
        let start = self.scrollback.len();
        match raw.parse::<Command>() {
            Ok(Command::Clear) => {
                self.scrollback = banner();
                self.scrollback.push(format!("> {}", raw));
                Outcome::Cleared
            }
            Ok(Command::Exit) => {
                self.scrollback.push(format!("> {}", raw));
                (self.on_close)();
                Outcome::Closed
            }
            Ok(cmd) => {
                debug!(command = cmd.name(), "terminal_command");
                self.scrollback.push(format!("> {}", raw));
                self.scrollback.extend(cmd.output());
                Outcome::Appended(start)
            }
            Err(()) => {
                self.scrollback.push(format!("> {}", raw));
                self.scrollback.push(format!("Command not found: {}", raw));
                self.scrollback
                    .push("Type \"help\" for available commands".to_string());
                self.scrollback.push(String::new());
                Outcome::Appended(start)
            }
        }
    }

    pub fn submit(&mut self, text: &str) -> Outcome {
        self.set_input(text);
        self.enter()
    }
}

fn banner() -> Vec<String> {
    BANNER.iter().map(|s| s.to_string()).collect()
}
