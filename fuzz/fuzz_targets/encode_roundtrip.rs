use dotdash::{Codec, SeparatorMode};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let Ok(text) = std::str::from_utf8(data) else {
                return;
            };
            for mode in [SeparatorMode::Slash, SeparatorMode::SevenSpace] {
                let codec = Codec::new(mode);
                let code = codec.encode(text);
                // Re-encoding the decoded text must give the same Morse.
                let decoded = codec.decode(&code);
                assert_eq!(codec.encode(&decoded), code);
            }
        });
    }
}
