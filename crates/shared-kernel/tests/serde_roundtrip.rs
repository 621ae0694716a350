// crates/shared-kernel/tests/serde_roundtrip.rs
use chandas_shared_kernel::{Average, SyllableCount, WordCount};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Wrapper {
    guru: SyllableCount,
    words: WordCount,
    average: Average,
}

#[test]
fn json_roundtrip() {
    let original = Wrapper {
        guru: SyllableCount::from(42),
        words: WordCount::from(7),
        average: Average::of(7, 3),
    };
    let json = serde_json::to_string(&original).expect("serializes");
    assert_eq!(json, r#"{"guru":42,"words":7,"average":2.33}"#);
    let decoded: Wrapper = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}
