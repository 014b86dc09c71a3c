use std::{io::Write, path::PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::{
    apps::{self, Hanoi},
    binary_tree::BinarySearchTree,
    config::Settings,
    priority_queue::PriorityQueue,
};

#[derive(Debug, Parser)]
#[command(name = "adt")]
#[command(version, about = "Stacks, queues, lists and trees at work on small problems")]
pub struct Cli {
    /// TOML settings file (defaults to ./adt.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check (), [] and {} nesting
    Balance { text: String },
    /// Check <tag></tag> nesting
    Html { text: String },
    /// Check whether the text reads the same backwards
    Palindrome { text: String },
    /// Print the text backwards
    Reverse { text: String },
    /// Evaluate a postfix expression, e.g. "3 4 + 2 *"
    Rpn { expr: String },
    /// Convert an infix expression to postfix
    Infix {
        expr: String,
        /// Also print the value
        #[arg(long)]
        eval: bool,
    },
    /// Print the moves that solve the Towers of Hanoi
    Hanoi { disks: u32 },
    /// Sort integers with a binary search tree (or a heap)
    Sort {
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,
        /// Use the priority queue instead of the tree
        #[arg(long)]
        heap: bool,
    },
    /// Print the effective settings as TOML
    Config,
}

/// Prints `value` with at most `precision` decimals, without trailing zeros.
pub fn format_number(value: f64, precision: usize) -> String {
    let text = format!("{value:.precision$}");
    if !text.contains('.') {
        return text;
    }
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn verdict(ok: bool) -> &'static str {
    if ok { "yes" } else { "no" }
}

pub fn run(cli: &Cli, settings: &Settings, out: &mut impl Write) -> anyhow::Result<()> {
    let precision = settings.expression.precision;

    match &cli.command {
        Command::Balance { text } => {
            writeln!(out, "balanced: {}", verdict(apps::is_balanced(text)))?;
        }
        Command::Html { text } => {
            writeln!(out, "balanced: {}", verdict(apps::is_balanced_html(text)))?;
        }
        Command::Palindrome { text } => {
            writeln!(out, "palindrome: {}", verdict(apps::is_palindrome(text)))?;
        }
        Command::Reverse { text } => {
            writeln!(out, "{}", apps::reverse(text))?;
        }
        Command::Rpn { expr } => {
            let value = apps::eval_postfix(expr)
                .with_context(|| format!("evaluating postfix `{expr}`"))?;
            writeln!(out, "{}", format_number(value, precision))?;
        }
        Command::Infix { expr, eval } => {
            let postfix = apps::infix_to_postfix(expr)
                .with_context(|| format!("converting infix `{expr}`"))?;
            writeln!(out, "{postfix}")?;
            if *eval {
                let value = apps::eval_postfix(&postfix)
                    .with_context(|| format!("evaluating `{expr}`"))?;
                writeln!(out, "= {}", format_number(value, precision))?;
            }
        }
        Command::Hanoi { disks } => {
            let max = settings.hanoi.max_disks;
            if *disks > max {
                bail!("{disks} disks is more than the configured maximum of {max}");
            }
            // Streamed: 32 disks is over four billion moves.
            let mut number = 0u64;
            Hanoi::new(*disks).solve_with(|step| {
                number += 1;
                writeln!(out, "{number:>4}. {step}")?;
                Ok(())
            })?;
        }
        Command::Sort { numbers, heap } => {
            let sorted: Vec<i64> = if *heap {
                let queue: PriorityQueue<i64> = numbers.iter().copied().collect();
                queue.into_sorted_vec()
            } else {
                // The position breaks ties so repeated values all survive.
                let tree: BinarySearchTree<(i64, usize)> =
                    numbers.iter().copied().zip(0..).collect();
                tree.iter().map(|&(n, _)| n).collect()
            };
            let line: Vec<String> = sorted.iter().map(i64::to_string).collect();
            writeln!(out, "{}", line.join(" "))?;
        }
        Command::Config => {
            let text = toml::to_string(settings).context("serializing settings")?;
            write!(out, "{text}")?;
        }
    }

    info!(command = ?cli.command, "done");
    Ok(())
}
