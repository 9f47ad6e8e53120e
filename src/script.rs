//! Replay scripts: line-oriented host event streams for driving the engine
//! without a window.
//!
//! ```text
//! # comments and blank lines are ignored
//! new 10 10 white
//! tool line
//! size 2
//! fg red
//! press 0 0
//! release 0 0
//! motion 9 9
//! press 9 9 left
//! leave
//! ```
//!
//! Pointer lines become [`HostPointerEvent`]s and pass through an
//! [`InputAdapter`], so `motion` is a drag exactly when a button is held.

use std::str::FromStr;

use log::{debug, info};
use thiserror::Error;

use crate::draw::{Color, PixelSurface};
use crate::error::PaintError;
use crate::input::adapter::{BTN_LEFT, BTN_MIDDLE, BTN_RIGHT};
use crate::input::{HostPointerEvent, InputAdapter, Tool, ToolEngine};
use crate::util;

/// Errors from parsing or replaying a script. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' is missing its {argument} argument")]
    MissingArgument {
        line: usize,
        command: String,
        argument: &'static str,
    },

    #[error("line {line}: unexpected extra argument '{extra}'")]
    ExtraArgument { line: usize, extra: String },

    #[error("line {line}: '{value}' is not a valid {expected}")]
    InvalidValue {
        line: usize,
        value: String,
        expected: &'static str,
    },

    #[error("line {line}: {source}")]
    Engine {
        line: usize,
        #[source]
        source: PaintError,
    },
}

/// One parsed script line.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    /// Replace the image with a blank one
    New {
        width: u32,
        height: u32,
        color: Color,
    },
    Tool(Tool),
    /// Kept signed so the engine can reject negative sizes itself
    Size(i32),
    Foreground(Color),
    Background(Color),
    Pointer(HostPointerEvent),
}

/// A parsed script: commands paired with their source line numbers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    pub commands: Vec<(usize, ScriptCommand)>,
}

impl Script {
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let mut commands = Vec::new();
        for (index, raw) in source.lines().enumerate() {
            let line = index + 1;
            let text = strip_comment(raw).trim();
            if text.is_empty() {
                continue;
            }
            commands.push((line, parse_line(line, text)?));
        }
        Ok(Script { commands })
    }
}

/// Cuts a trailing `# comment`. A `#` glued to a word (`#ff0000`) is a value.
fn strip_comment(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b != b'#' {
            continue;
        }
        let starts_word = i == 0 || bytes[i - 1].is_ascii_whitespace();
        let ends_word = bytes.get(i + 1).is_none_or(|next| next.is_ascii_whitespace());
        if starts_word && (ends_word || raw[..i].trim().is_empty()) {
            return &raw[..i];
        }
    }
    raw
}

struct Args<'a> {
    line: usize,
    command: &'a str,
    rest: std::str::SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn next(&mut self, argument: &'static str) -> Result<&'a str, ScriptError> {
        self.rest.next().ok_or_else(|| ScriptError::MissingArgument {
            line: self.line,
            command: self.command.to_string(),
            argument,
        })
    }

    fn number<T: FromStr>(&mut self, argument: &'static str) -> Result<T, ScriptError> {
        let value = self.next(argument)?;
        value.parse().map_err(|_| ScriptError::InvalidValue {
            line: self.line,
            value: value.to_string(),
            expected: argument,
        })
    }

    fn color(&mut self) -> Result<Color, ScriptError> {
        let value = self.next("color")?;
        util::parse_color(value).map_err(|source| ScriptError::Engine {
            line: self.line,
            source,
        })
    }

    fn button(&mut self) -> Result<u32, ScriptError> {
        let Some(value) = self.rest.next() else {
            return Ok(BTN_LEFT);
        };
        match value.to_lowercase().as_str() {
            "left" | "primary" => Ok(BTN_LEFT),
            "right" | "secondary" => Ok(BTN_RIGHT),
            "middle" => Ok(BTN_MIDDLE),
            _ => Err(ScriptError::InvalidValue {
                line: self.line,
                value: value.to_string(),
                expected: "button (left, right or middle)",
            }),
        }
    }

    fn finish(mut self) -> Result<(), ScriptError> {
        match self.rest.next() {
            Some(extra) => Err(ScriptError::ExtraArgument {
                line: self.line,
                extra: extra.to_string(),
            }),
            None => Ok(()),
        }
    }
}

fn parse_line(line: usize, text: &str) -> Result<ScriptCommand, ScriptError> {
    let mut words = text.split_whitespace();
    let command = words.next().unwrap_or_default();
    let mut args = Args {
        line,
        command,
        rest: words,
    };

    let parsed = match command.to_lowercase().as_str() {
        "new" => ScriptCommand::New {
            width: args.number("width")?,
            height: args.number("height")?,
            color: args.color()?,
        },
        "tool" => {
            let name = args.next("tool name")?;
            let tool = name
                .parse()
                .map_err(|source| ScriptError::Engine { line, source })?;
            ScriptCommand::Tool(tool)
        }
        "size" => ScriptCommand::Size(args.number("size")?),
        "fg" => ScriptCommand::Foreground(args.color()?),
        "bg" => ScriptCommand::Background(args.color()?),
        "press" => ScriptCommand::Pointer(HostPointerEvent::Press {
            x: args.number("x")?,
            y: args.number("y")?,
            button: args.button()?,
        }),
        "release" => ScriptCommand::Pointer(HostPointerEvent::Release {
            x: args.number("x")?,
            y: args.number("y")?,
            button: args.button()?,
        }),
        "motion" => ScriptCommand::Pointer(HostPointerEvent::Motion {
            x: args.number("x")?,
            y: args.number("y")?,
        }),
        "enter" => ScriptCommand::Pointer(HostPointerEvent::Enter {
            x: args.number("x")?,
            y: args.number("y")?,
        }),
        "leave" => ScriptCommand::Pointer(HostPointerEvent::Leave),
        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: command.to_string(),
            });
        }
    };

    args.finish()?;
    Ok(parsed)
}

/// Feeds script commands to a [`ToolEngine`] through an [`InputAdapter`].
pub struct ScriptRunner {
    engine: ToolEngine,
    adapter: InputAdapter,
}

impl ScriptRunner {
    pub fn new(engine: ToolEngine) -> Self {
        Self {
            engine,
            adapter: InputAdapter::new(),
        }
    }

    pub fn engine(&self) -> &ToolEngine {
        &self.engine
    }

    pub fn into_engine(self) -> ToolEngine {
        self.engine
    }

    /// Runs every command in order, stopping at the first engine error.
    pub fn run(&mut self, script: &Script) -> Result<(), ScriptError> {
        info!("Replaying {} script commands", script.len());
        for (line, command) in &script.commands {
            self.apply(command)
                .map_err(|source| ScriptError::Engine {
                    line: *line,
                    source,
                })?;
        }
        Ok(())
    }

    /// Applies a single command.
    pub fn apply(&mut self, command: &ScriptCommand) -> Result<(), PaintError> {
        debug!("Script command: {command:?}");
        match *command {
            ScriptCommand::New {
                width,
                height,
                color,
            } => self.engine.new_blank_image(width, height, color),
            ScriptCommand::Tool(tool) => {
                self.engine.set_active_tool(tool);
                Ok(())
            }
            ScriptCommand::Size(size) => self.engine.set_tool_size(size),
            ScriptCommand::Foreground(color) => self.engine.set_foreground_color(color),
            ScriptCommand::Background(color) => self.engine.set_background_color(color),
            ScriptCommand::Pointer(event) => {
                if let Some(event) = self.adapter.translate(event) {
                    self.engine.handle_pointer_event(event);
                }
                Ok(())
            }
        }
    }
}

/// Renders a surface as text rows: `.` for `background`, `#` for anything else.
pub fn ascii_art(surface: &PixelSurface, background: Color) -> String {
    let width = surface.width() as usize;
    let mut out = String::with_capacity((width + 1) * surface.height() as usize);
    for (x, _, color) in surface.pixels() {
        out.push(if color == background { '.' } else { '#' });
        if x as usize + 1 == width {
            out.push('\n');
        }
    }
    out
}
