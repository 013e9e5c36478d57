//! Renders the 256-color palette: system colors, the 6x6x6 cube, and the
//! grayscale ramp.
//!
//! Run with: `cargo run --example palette`

use tinge::Paint;

fn main() -> Result<(), tinge::StyleError> {
    let c = Paint::new("");

    println!("System colors:");
    for i in 0..16 {
        print!("{}", c.apply_to(&format!("bg_color[{}]", i), "  ")?);
    }
    println!();
    println!();

    println!("Color cube, 6x6x6:");
    for g in 0..6 {
        for r in 0..6 {
            for b in 0..6 {
                let color = 16 + r * 36 + g * 6 + b;
                print!("{}", c.apply_to(&format!("bg_color[{}]", color), "  ")?);
            }
            print!(" ");
        }
        println!();
    }

    println!();
    println!("Grayscale ramp:");
    for i in 232..256 {
        print!("{}", c.apply_to(&format!("bg_color[{}]", i), "  ")?);
    }
    println!();

    Ok(())
}
