//! Parametrized real function family.
//!
//! The set of plottable functions is closed, so it is modelled as an enum
//! and dispatched with `match`.

use crate::error::{PlotError, Result};
use std::fmt;

/// Which trigonometric function to evaluate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrigKind {
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
    /// Any other name; evaluates to zero everywhere.
    Unknown(String),
}

impl TrigKind {
    /// Parse a kind name (case-insensitive).
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            _ => Self::Unknown(name.trim().to_string()),
        }
    }

    /// Get the kind name.
    pub fn name(&self) -> &str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Unknown(name) => name,
        }
    }

    /// Whether this kind is recognized.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

/// Parameters of `a * log_base(x) + c`.
///
/// Fields are private so `base > 1` holds for every value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogParams {
    a: f64,
    base: f64,
    c: f64,
}

impl LogParams {
    /// Validate and build, rejecting bases that are not above 1.
    pub fn new(a: f64, base: f64, c: f64) -> Result<Self> {
        // `!(base > 1.0)` also catches NaN
        if !(base > 1.0) {
            return Err(PlotError::invalid_argument(format!(
                "logarithm base must be greater than 1 (got {})",
                base
            )));
        }
        Ok(Self { a, base, c })
    }

    /// Multiplier.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Logarithm base, always greater than 1.
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Offset.
    pub fn c(&self) -> f64 {
        self.c
    }
}

/// A plottable function.
#[derive(Debug, Clone, PartialEq)]
pub enum MathFunction {
    /// `Σ coefficients[i] * x^i`.
    Polynomial {
        /// Coefficients, constant term first.
        coefficients: Vec<f64>,
    },
    /// `amplitude * kind(frequency * x + phase)`.
    Trigonometric {
        /// Sine or cosine.
        kind: TrigKind,
        /// Peak value.
        amplitude: f64,
        /// Angular frequency.
        frequency: f64,
        /// Phase shift in radians.
        phase: f64,
    },
    /// `coefficient * base^x`.
    Exponential {
        /// Multiplier.
        coefficient: f64,
        /// Base of the power.
        base: f64,
    },
    /// `a * log_base(x) + c`.
    Logarithmic(LogParams),
}

impl MathFunction {
    /// Create a polynomial from its coefficients (constant term first).
    pub fn polynomial(coefficients: Vec<f64>) -> Self {
        Self::Polynomial { coefficients }
    }

    /// Create a trigonometric function.
    pub fn trigonometric(kind: TrigKind, amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self::Trigonometric {
            kind,
            amplitude,
            frequency,
            phase,
        }
    }

    /// Create an exponential function. Any base is accepted.
    pub fn exponential(coefficient: f64, base: f64) -> Self {
        Self::Exponential { coefficient, base }
    }

    /// Create a logarithmic function, rejecting bases that are not above 1.
    pub fn logarithmic(a: f64, base: f64, c: f64) -> Result<Self> {
        LogParams::new(a, base, c).map(Self::Logarithmic)
    }

    /// Evaluate the function at `x`.
    ///
    /// Only the logarithm can fail, for `x <= 0`.
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        match self {
            Self::Polynomial { coefficients } => Ok(coefficients
                .iter()
                .enumerate()
                .map(|(i, c)| c * x.powi(i as i32))
                .sum::<f64>()),
            Self::Trigonometric {
                kind,
                amplitude,
                frequency,
                phase,
            } => {
                let arg = frequency * x + phase;
                Ok(match kind {
                    TrigKind::Sin => amplitude * arg.sin(),
                    TrigKind::Cos => amplitude * arg.cos(),
                    TrigKind::Unknown(_) => 0.0,
                })
            },
            Self::Exponential { coefficient, base } => Ok(coefficient * base.powf(x)),
            Self::Logarithmic(LogParams { a, base, c }) => {
                if !(x > 0.0) {
                    return Err(PlotError::invalid_argument(format!(
                        "logarithm is undefined for x = {}",
                        x
                    )));
                }
                Ok(a * x.ln() / base.ln() + c)
            },
        }
    }

    /// Short family name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Polynomial { .. } => "polynomial",
            Self::Trigonometric { .. } => "trigonometric",
            Self::Exponential { .. } => "exponential",
            Self::Logarithmic(_) => "logarithmic",
        }
    }

    /// Human-readable formula.
    pub fn describe(&self) -> String {
        match self {
            Self::Polynomial { coefficients } => describe_polynomial(coefficients),
            Self::Trigonometric {
                kind,
                amplitude,
                frequency,
                phase,
            } => match kind {
                TrigKind::Unknown(name) => format!("0 (unknown kind '{}')", name),
                _ => format!(
                    "{} * {}({}x {} {})",
                    amplitude,
                    kind.name(),
                    frequency,
                    sign(*phase),
                    phase.abs()
                ),
            },
            Self::Exponential { coefficient, base } => format!("{} * {}^x", coefficient, base),
            Self::Logarithmic(LogParams { a, base, c }) => {
                format!("{} * log_{}(x) {} {}", a, base, sign(*c), c.abs())
            },
        }
    }
}

impl fmt::Display for MathFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

fn sign(val: f64) -> char {
    if val.is_sign_negative() {
        '-'
    } else {
        '+'
    }
}

fn describe_polynomial(coefficients: &[f64]) -> String {
    let mut text = String::new();

    for (power, &coeff) in coefficients.iter().enumerate() {
        if coeff == 0.0 {
            continue;
        }

        let magnitude = coeff.abs();
        let body = match (power, magnitude == 1.0) {
            (0, _) => magnitude.to_string(),
            (1, true) => "x".to_string(),
            (1, false) => format!("{}x", magnitude),
            (_, true) => format!("x^{}", power),
            (_, false) => format!("{}x^{}", magnitude, power),
        };

        if text.is_empty() {
            if coeff < 0.0 {
                text.push('-');
            }
        } else {
            text.push_str(if coeff < 0.0 { " - " } else { " + " });
        }
        text.push_str(&body);
    }

    if text.is_empty() {
        "0".to_string()
    } else {
        text
    }
}
