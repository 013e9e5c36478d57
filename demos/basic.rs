//! Basic styling: chained calls and a small theme.
//!
//! Run with: `cargo run --example basic`

use tinge::{paint, Paint, Theme};

fn main() -> Result<(), tinge::StyleError> {
    println!("{}", paint("Some bold red text").red()?.bold()?);
    println!("{}", paint("Some reversed blue text").blue()?.reverse()?);
    println!("{}", paint("Some underlined text").underline()?);

    let mut color = Paint::new("");
    color.set_theme(
        Theme::new()
            .add("error", "red")
            .add("warning", ["bg_yellow", "white"]),
    )?;

    println!("{}", color.set_text("Error...").apply("error")?);
    println!("{}", color.set_text("Warning...").apply("warning")?.bold()?);

    println!("{}", color.set_text("Also works <error>inline</error>").colorize()?);

    Ok(())
}
