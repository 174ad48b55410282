use egg_decode::util;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <plaintext>", args[0]);
        std::process::exit(1);
    }
    let plaintext = String::from_utf8(util::input_source(&args[1])?)?;
    println!("[Encoded Text] {}", egg_decode::conceal(plaintext.trim_end()));

    Ok(())
}
