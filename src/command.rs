//! Numbered menu and the commands it produces.
//!
//! The menu is a two-state machine: it either waits for a menu number or
//! for the parameter line of the chosen action. A completed action becomes
//! a [`Command`], which the front end pushes onto the application queue.

use crate::data::{MathFunction, Range, TrigKind};
use crate::error::{PlotError, Result};
use crate::util::parse_numbers;
use std::path::PathBuf;

/// A fully-parsed user action.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Replace the collection with this function.
    Plot(MathFunction),
    /// Set the visible ranges and resample.
    ChangeRange {
        /// New x range.
        x: Range,
        /// New y range.
        y: Range,
    },
    /// Remove every curve.
    Clear,
    /// Write curves to a file.
    Save(PathBuf),
    /// Replace curves with the contents of a file.
    Load(PathBuf),
    /// Quit the application.
    Exit,
}

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Draw a polynomial.
    Polynomial,
    /// Draw a sine or cosine.
    Trigonometric,
    /// Draw an exponential.
    Exponential,
    /// Draw a logarithm.
    Logarithmic,
    /// Change the visible range.
    ChangeRange,
    /// Clear all curves.
    Clear,
    /// Save curves to a file.
    Save,
    /// Load curves from a file.
    Load,
    /// Quit.
    Exit,
}

impl MenuAction {
    /// All actions in menu order.
    pub const ALL: [MenuAction; 9] = [
        MenuAction::Polynomial,
        MenuAction::Trigonometric,
        MenuAction::Exponential,
        MenuAction::Logarithmic,
        MenuAction::ChangeRange,
        MenuAction::Clear,
        MenuAction::Save,
        MenuAction::Load,
        MenuAction::Exit,
    ];

    /// Look up an action by its 1-based menu number.
    pub fn from_choice(choice: usize) -> Option<Self> {
        choice
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// The 1-based menu number.
    pub fn choice(self) -> usize {
        Self::ALL.iter().position(|a| *a == self).unwrap_or(0) + 1
    }

    /// Get the menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Polynomial => "Plot polynomial",
            Self::Trigonometric => "Plot trigonometric function",
            Self::Exponential => "Plot exponential function",
            Self::Logarithmic => "Plot logarithmic function",
            Self::ChangeRange => "Change range",
            Self::Clear => "Clear plots",
            Self::Save => "Save plots to file",
            Self::Load => "Load plots from file",
            Self::Exit => "Exit",
        }
    }

    /// Parameter prompt, or `None` if the action takes no parameters.
    pub fn prompt(self) -> Option<&'static str> {
        match self {
            Self::Polynomial => Some("Coefficients, constant term first (c0 c1 c2 ...)"),
            Self::Trigonometric => Some("[sin|cos] amplitude frequency phase"),
            Self::Exponential => Some("coefficient base"),
            Self::Logarithmic => Some("a base c"),
            Self::ChangeRange => Some("xmin xmax ymin ymax"),
            Self::Save => Some("File to save to"),
            Self::Load => Some("File to load from"),
            Self::Clear | Self::Exit => None,
        }
    }

    fn parse_parameters(self, line: &str) -> Result<Command> {
        match self {
            Self::Polynomial => {
                let coefficients = parse_numbers(line)?;
                if coefficients.is_empty() {
                    return Err(PlotError::invalid_input("at least one coefficient is required"));
                }
                Ok(Command::Plot(MathFunction::polynomial(coefficients)))
            },
            Self::Trigonometric => {
                let line = line.trim();
                let (kind, rest) = match line.split_once(|c: char| c.is_whitespace() || c == ',') {
                    Some((first, rest)) if first.parse::<f64>().is_err() => {
                        (TrigKind::parse(first), rest)
                    },
                    _ => (TrigKind::Sin, line),
                };
                let [amplitude, frequency, phase] = exact::<3>(rest, "amplitude frequency phase")?;
                Ok(Command::Plot(MathFunction::trigonometric(
                    kind, amplitude, frequency, phase,
                )))
            },
            Self::Exponential => {
                let [coefficient, base] = exact::<2>(line, "coefficient base")?;
                Ok(Command::Plot(MathFunction::exponential(coefficient, base)))
            },
            Self::Logarithmic => {
                let [a, base, c] = exact::<3>(line, "a base c")?;
                Ok(Command::Plot(MathFunction::logarithmic(a, base, c)?))
            },
            Self::ChangeRange => {
                let [x_min, x_max, y_min, y_max] = exact::<4>(line, "xmin xmax ymin ymax")?;
                let x = checked_range("x", x_min, x_max)?;
                let y = checked_range("y", y_min, y_max)?;
                Ok(Command::ChangeRange { x, y })
            },
            Self::Save => Ok(Command::Save(PathBuf::from(line.trim()))),
            Self::Load => Ok(Command::Load(PathBuf::from(line.trim()))),
            Self::Clear => Ok(Command::Clear),
            Self::Exit => Ok(Command::Exit),
        }
    }
}

fn exact<const N: usize>(line: &str, expected: &str) -> Result<[f64; N]> {
    let values = parse_numbers(line)?;
    let count = values.len();
    <[f64; N]>::try_from(values).map_err(|_| {
        PlotError::invalid_input(format!(
            "expected {} numbers ({}), got {}",
            N, expected, count
        ))
    })
}

fn checked_range(axis: &str, min: f64, max: f64) -> Result<Range> {
    let range = Range::new(min, max);
    if !range.is_finite() {
        return Err(PlotError::invalid_argument(format!(
            "{} range bounds must be finite",
            axis
        )));
    }
    if range.is_reversed() {
        return Err(PlotError::invalid_argument(format!(
            "{} range minimum {} is greater than maximum {}",
            axis, min, max
        )));
    }
    Ok(range)
}

/// What the menu did with a submitted line.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuReply {
    /// An action was chosen and now needs its parameters.
    Prompt(&'static str),
    /// A command is ready.
    Command(Command),
    /// The parameter prompt was left empty; back at the main menu.
    Cancelled,
}

/// Menu state.
#[derive(Debug, Default)]
pub struct Menu {
    pending: Option<MenuAction>,
}

impl Menu {
    /// Create a menu waiting for a choice.
    pub fn new() -> Self {
        Self::default()
    }

    /// The action waiting for parameters, if any.
    pub fn pending(&self) -> Option<MenuAction> {
        self.pending
    }

    /// Whether the menu is waiting for a menu number.
    pub fn is_awaiting_choice(&self) -> bool {
        self.pending.is_none()
    }

    /// Text to show next to the input line.
    pub fn prompt(&self) -> &'static str {
        self.pending
            .and_then(MenuAction::prompt)
            .unwrap_or("Choice")
    }

    /// Drop any pending action.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Feed one input line.
    ///
    /// Every error leaves the menu at the main prompt.
    pub fn submit(&mut self, line: &str) -> Result<MenuReply> {
        match self.pending.take() {
            None => {
                let trimmed = line.trim();
                let choice: usize = trimmed.parse().map_err(|_| {
                    PlotError::invalid_input(format!("'{}' is not a menu number", trimmed))
                })?;
                let action = MenuAction::from_choice(choice).ok_or_else(|| {
                    PlotError::invalid_input(format!(
                        "choose a number between 1 and {}",
                        MenuAction::ALL.len()
                    ))
                })?;

                match action.prompt() {
                    Some(prompt) => {
                        self.pending = Some(action);
                        Ok(MenuReply::Prompt(prompt))
                    },
                    None => action.parse_parameters("").map(MenuReply::Command),
                }
            },
            Some(_) if line.trim().is_empty() => Ok(MenuReply::Cancelled),
            Some(action) => action.parse_parameters(line).map(MenuReply::Command),
        }
    }

    /// The main menu as display lines.
    pub fn lines() -> Vec<String> {
        MenuAction::ALL
            .iter()
            .map(|a| format!("{}. {}", a.choice(), a.label()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(lines: &[&str]) -> Result<MenuReply> {
        let mut menu = Menu::new();
        let mut reply = Ok(MenuReply::Cancelled);
        for line in lines {
            reply = menu.submit(line);
        }
        reply
    }

    #[test]
    fn rejects_non_numeric_and_out_of_range_choices() {
        let mut menu = Menu::new();
        for input in ["abc", "42", "0", "-1", ""] {
            assert!(matches!(menu.submit(input), Err(PlotError::InvalidInput(_))));
            assert!(menu.is_awaiting_choice());
        }
    }

    #[test]
    fn choice_then_parameters() {
        let mut menu = Menu::new();
        assert_eq!(
            menu.submit("1").unwrap(),
            MenuReply::Prompt("Coefficients, constant term first (c0 c1 c2 ...)")
        );
        assert_eq!(menu.pending(), Some(MenuAction::Polynomial));
        assert_eq!(
            menu.submit("1 0 -1").unwrap(),
            MenuReply::Command(Command::Plot(MathFunction::polynomial(vec![1.0, 0.0, -1.0])))
        );
        assert!(menu.is_awaiting_choice());
    }

    #[test]
    fn trig_kind_is_optional() {
        assert_eq!(
            run(&["2", "1 2 0.5"]).unwrap(),
            MenuReply::Command(Command::Plot(MathFunction::trigonometric(
                TrigKind::Sin,
                1.0,
                2.0,
                0.5
            )))
        );
        assert_eq!(
            run(&["2", "cos 3, 1, 0"]).unwrap(),
            MenuReply::Command(Command::Plot(MathFunction::trigonometric(
                TrigKind::Cos,
                3.0,
                1.0,
                0.0
            )))
        );
    }

    #[test]
    fn wrong_parameter_count_returns_to_menu() {
        let mut menu = Menu::new();
        menu.submit("3").unwrap();
        assert!(matches!(menu.submit("1"), Err(PlotError::InvalidInput(_))));
        assert!(menu.is_awaiting_choice());
    }

    #[test]
    fn logarithm_base_is_validated() {
        assert!(matches!(run(&["4", "1 1 0"]), Err(PlotError::InvalidArgument(_))));
        assert!(matches!(
            run(&["4", "1 10 0"]).unwrap(),
            MenuReply::Command(Command::Plot(MathFunction::Logarithmic(_)))
        ));
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert!(matches!(
            run(&["5", "5 -5 -1 1"]),
            Err(PlotError::InvalidArgument(_))
        ));
        assert_eq!(
            run(&["5", "0 5 -1 1"]).unwrap(),
            MenuReply::Command(Command::ChangeRange {
                x: Range::new(0.0, 5.0),
                y: Range::new(-1.0, 1.0),
            })
        );
    }

    #[test]
    fn empty_parameters_cancel() {
        let mut menu = Menu::new();
        menu.submit("7").unwrap();
        assert_eq!(menu.submit("  ").unwrap(), MenuReply::Cancelled);
        assert!(menu.is_awaiting_choice());
    }

    #[test]
    fn immediate_actions() {
        assert_eq!(run(&["6"]).unwrap(), MenuReply::Command(Command::Clear));
        assert_eq!(run(&["9"]).unwrap(), MenuReply::Command(Command::Exit));
        assert_eq!(
            run(&["8", " plots.curves "]).unwrap(),
            MenuReply::Command(Command::Load(PathBuf::from("plots.curves")))
        );
    }

    #[test]
    fn menu_lines_are_numbered() {
        let lines = Menu::lines();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "1. Plot polynomial");
        assert_eq!(lines[8], "9. Exit");
    }
}
