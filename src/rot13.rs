/// ROT13 over the Latin alphabet. Anything that is not an ASCII letter is
/// left alone, so encoding and decoding are the same operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rot13Codec;

impl Rot13Codec {
    pub fn encode(&self, input: impl AsRef<str>) -> String {
        input.as_ref().chars().map(rotate).collect()
    }

    pub fn decode(&self, input: impl AsRef<str>) -> String {
        self.encode(input)
    }
}

pub fn rot13(input: &str) -> String {
    Rot13Codec.encode(input)
}

fn rotate(c: char) -> char {
    let base = match c {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return c,
    };
    char::from((c as u8 - base + 13) % 26 + base)
}
