use egg_decode::{Rot13Codec, util};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <text>", args[0]);
        std::process::exit(1);
    }
    let codec = Rot13Codec;

    let text = String::from_utf8(util::input_source(&args[1])?)?;
    println!("[Rotated Text] {}", codec.encode(text.trim_end()));

    Ok(())
}
