#![no_main]
use huffman_verifier::{compute_huffman, Placement};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (String, bool)| {
    let (text, high) = data;
    let placement = if high { Placement::High } else { Placement::Low };

    let analysis = match compute_huffman(&text, placement) {
        Ok(a) => a,
        Err(_) => {
            assert!(text.is_empty());
            return;
        }
    };

    assert_eq!(analysis.root.weight() as usize, text.chars().count());
    assert_eq!(analysis.codes.len(), analysis.frequencies.len());
    assert!(analysis.codes.is_prefix_free());

    let m = analysis.metrics;
    assert!(m.entropy <= m.average_length + 1e-9);
    assert!(m.average_length < m.entropy + 1.0 + 1e-9 || analysis.frequencies.len() == 1);
});
