use dotdash::{Codec, SeparatorMode};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(code) = std::str::from_utf8(data) {
                for mode in [SeparatorMode::Slash, SeparatorMode::SevenSpace] {
                    let text = Codec::new(mode).decode(code);
                    assert!(!text.chars().any(|c| c.is_uppercase()));
                }
            }
        });
    }
}
