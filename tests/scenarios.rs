use std::sync::Once;

use huffman_verifier::report::encoding_table;
use huffman_verifier::{analyze_name, compute_huffman, derive_text, Error, Placement};
use tracing_subscriber::EnvFilter;

static TEST_SETUP: Once = Once::new();

fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

#[test]
fn test_skewed_four_symbols_high() {
    init_test_setup();
    let analysis = compute_huffman("AAAABBBCCD", Placement::High).unwrap();

    assert_eq!(analysis.root.weight(), 10);
    let a = analysis.codes.get('A').unwrap();
    let d = analysis.codes.get('D').unwrap();
    assert!(d.len() >= a.len());
    assert!((analysis.metrics.entropy - 1.8464).abs() < 1e-4);
}

#[test]
fn test_single_symbol() {
    init_test_setup();
    let analysis = compute_huffman("ZZZZ", Placement::Low).unwrap();

    let codes: Vec<_> = analysis.codes.iter().collect();
    assert_eq!(codes, vec![('Z', "0")]);
    assert_eq!(analysis.metrics.entropy, 0.0);
    assert_eq!(analysis.metrics.average_length, 1.0);
    assert_eq!(analysis.metrics.efficiency, 0.0);
    assert_eq!(analysis.trace.lines(), vec![
        "STEP 1: List symbols in DECREASING probability:".to_string(),
        "  Z:4(1.000)".to_string(),
        String::new(),
    ]);
}

#[test]
fn test_names_with_one_vowel_are_rejected() {
    init_test_setup();
    for name in ["Henry", "Tan"] {
        match derive_text(name) {
            Err(Error::InsufficientVowels { found, .. }) => assert_eq!(found, 1),
            other => panic!("{name}: expected InsufficientVowels, got {other:?}"),
        }
    }
}

#[test]
fn test_empty_text_rejected() {
    init_test_setup();
    assert!(matches!(compute_huffman("", Placement::High), Err(Error::EmptyInput)));
}

#[test]
fn test_group_member_name() {
    init_test_setup();
    let report = analyze_name("Henry David Kee", Placement::High).unwrap();
    assert_eq!(report.input.text, "AERIOUSEA");
    assert_eq!(report.input.vowels, ['E', 'A']);

    let analysis = &report.analysis;
    assert_eq!(analysis.frequencies.total(), 9);
    assert_eq!(analysis.frequencies.get('A'), Some(2));
    assert_eq!(analysis.frequencies.get('E'), Some(2));
    assert!(analysis.codes.is_prefix_free());

    // Frequent symbols never get longer codewords than rarer ones.
    let rows = encoding_table(analysis);
    for pair in rows.windows(2) {
        if pair[0].frequency > pair[1].frequency {
            assert!(pair[0].bit_length <= pair[1].bit_length);
        }
    }

    // Five symbols of weight 1 and two of weight 2 over N = 9.
    let expected_entropy = 2.0 * (2.0 / 9.0) * (9.0f64 / 2.0).log2() + 5.0 * (1.0 / 9.0) * 9.0f64.log2();
    assert!((analysis.metrics.entropy - expected_entropy).abs() < 1e-12);
}

#[test]
fn test_placement_changes_tree_not_cost() {
    init_test_setup();
    let high = compute_huffman("AAAABBBCCD", Placement::High).unwrap();
    let low = compute_huffman("AAAABBBCCD", Placement::Low).unwrap();

    assert_ne!(high.root, low.root);
    assert_ne!(high.trace.lines(), low.trace.lines());
    assert_eq!(high.metrics.average_length, low.metrics.average_length);
}
