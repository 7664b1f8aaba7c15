// SPDX-FileCopyrightText: 2026 Semroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reference handlers matching the default catalog.
//!
//! Except for arithmetic, which is evaluated for real, these produce
//! deterministic templated responses: the execution layer is an external
//! collaborator and stands outside the routing core proper.

use std::sync::LazyLock;

use regex::Regex;

use semroute_core::{Handler, SemrouteError};

use crate::table::HandlerTable;

/// Register the four reference handlers under the default catalog ids.
pub fn register_builtins(table: &mut HandlerTable) -> Result<(), SemrouteError> {
    table.register("arithmetic", Box::new(ArithmeticHandler))?;
    table.register("reasoning", Box::new(ReasoningHandler))?;
    table.register("explainer", Box::new(ExplainerHandler))?;
    table.register("creative", Box::new(CreativeHandler))?;
    Ok(())
}

/// First binary arithmetic expression in a query: two signed numeric
/// operands joined by `+ - * /`.
static EXPRESSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(-?\d+(?:\.\d+)?)\s*([+\-*/])\s*(-?\d+(?:\.\d+)?)")
        .expect("expression pattern is a valid literal regex")
});

/// Evaluates a single binary arithmetic expression.
pub struct ArithmeticHandler;

impl Handler for ArithmeticHandler {
    fn execute(&self, query: &str) -> Result<String, SemrouteError> {
        let captures = EXPRESSION.captures(query).ok_or_else(|| SemrouteError::Handler {
            message: "no arithmetic expression found; expected the form `a <op> b`".to_string(),
            source: None,
        })?;

        let parse = |i: usize| -> Result<f64, SemrouteError> {
            captures[i].parse().map_err(|e| SemrouteError::Handler {
                message: format!("operand `{}` is not a number: {e}", &captures[i]),
                source: None,
            })
        };
        let lhs = parse(1)?;
        let rhs = parse(3)?;

        let result = match &captures[2] {
            "+" => lhs + rhs,
            "-" => lhs - rhs,
            "*" => lhs * rhs,
            "/" => {
                if rhs == 0.0 {
                    return Err(SemrouteError::Handler {
                        message: "division by zero".to_string(),
                        source: None,
                    });
                }
                lhs / rhs
            }
            op => {
                return Err(SemrouteError::Handler {
                    message: format!("unsupported operator `{op}`"),
                    source: None,
                })
            }
        };

        Ok(format!("Result: {}", format_number(result)))
    }
}

/// Render integral results without a trailing `.0`.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Templated step-by-step reasoning response.
pub struct ReasoningHandler;

impl Handler for ReasoningHandler {
    fn execute(&self, query: &str) -> Result<String, SemrouteError> {
        Ok(format!(
            "Problem: {query}\n\
             Step 1: identify the kind of problem and the approach it needs.\n\
             Step 2: apply the relevant principles and break the problem down.\n\
             Step 3: carry out the computation and verify intermediate results.\n\
             Step 4: check the answer against the problem constraints."
        ))
    }
}

/// Templated in-depth explanation response.
pub struct ExplainerHandler;

impl Handler for ExplainerHandler {
    fn execute(&self, query: &str) -> Result<String, SemrouteError> {
        Ok(format!(
            "Topic: {query}\n\
             Overview: a structured, in-depth treatment of the topic.\n\
             Background: the context and terminology needed to follow it.\n\
             Details: the mechanisms involved and how they interact.\n\
             Summary: the key points worth remembering."
        ))
    }
}

/// Templated creative/humorous response.
pub struct CreativeHandler;

impl Handler for CreativeHandler {
    fn execute(&self, query: &str) -> Result<String, SemrouteError> {
        Ok(format!(
            "You asked: {query}\n\
             Bold of you to bring that to a router. Routing it was the easy \
             part; making it funny is where budgets go to die."
        ))
    }
}
