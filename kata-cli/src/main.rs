//! Demo CLI for the exercise crates.
//!
//! Builds CSS selectors and rectangle reports from the command line.

use anyhow::{Result, bail};
use kata_geometry::Rect;
use kata_json::to_json;
use kata_selector::{Selector, by_element};
use owo_colors::OwoColorize as _;
use std::env;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("rect") => run_rect(&args[1..]),
        Some("selector") => run_selector(&args[1..]),
        _ => {
            eprintln!("Usage: kata rect <width> <height>");
            eprintln!("       kata selector <element> [--id ID] [--class C]...");
            eprintln!("                     [--attr A]... [--pseudo P]... [--pseudo-element P]");
            std::process::exit(1);
        }
    }
}

/// Build a rectangle, print its area and its JSON form.
fn run_rect(args: &[String]) -> Result<()> {
    let [width, height] = args else {
        bail!("rect takes exactly two arguments: <width> <height>");
    };
    let rect = Rect::new(width.parse()?, height.parse()?);

    println!("{}", "=== Rect ===".yellow());
    println!("area: {}", rect.area());
    println!("json: {}", to_json(&rect)?);
    Ok(())
}

/// Build a selector from flag arguments, in the order given.
fn run_selector(args: &[String]) -> Result<()> {
    let Some((element, flags)) = args.split_first() else {
        bail!("selector requires an element name");
    };

    let mut selector = by_element(element);
    let mut flags = flags.iter();
    while let Some(flag) = flags.next() {
        let Some(value) = flags.next() else {
            bail!("flag {flag} requires a value");
        };
        selector = append_part(selector, flag, value)?;
    }

    println!("{}", "=== Selector ===".yellow());
    println!("{selector}");
    Ok(())
}

/// Dispatch one `--flag value` pair to the matching builder method.
fn append_part(selector: Selector, flag: &str, value: &str) -> Result<Selector> {
    let selector = match flag {
        "--id" => selector.id(value)?,
        "--class" => selector.class(value)?,
        "--attr" => selector.attribute(value)?,
        "--pseudo" => selector.pseudo_class(value)?,
        "--pseudo-element" => selector.pseudo_element(value)?,
        _ => bail!("unknown flag: {flag}"),
    };
    Ok(selector)
}
