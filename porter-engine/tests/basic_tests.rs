//! Basic integration tests for porter-engine

use porter_engine::{
    text, BatchStemmer, EngineConfig, EngineError, ExecutionMode, StemError, Stemmer,
};

const WORDS: &[(&str, &str)] = &[
    ("caresses", "caress"),
    ("ponies", "poni"),
    ("motoring", "motor"),
    ("conflated", "conflat"),
    ("hopping", "hop"),
    ("filing", "file"),
    ("happy", "happi"),
    ("relational", "relat"),
    ("vietnamization", "vietnam"),
    ("triplicate", "triplic"),
    ("revival", "reviv"),
    ("controll", "control"),
];

fn inputs() -> Vec<&'static str> {
    WORDS.iter().map(|(word, _)| *word).collect()
}

fn expected() -> Vec<&'static str> {
    WORDS.iter().map(|(_, stem)| *stem).collect()
}

#[test]
fn test_sequential_batch() {
    let stemmer = BatchStemmer::new(EngineConfig::sequential()).unwrap();
    let output = stemmer.stem_words(&inputs()).unwrap();

    assert_eq!(output.stems, expected());
    assert_eq!(output.metadata.words_processed, WORDS.len());
    assert_eq!(output.metadata.execution_mode, ExecutionMode::Sequential);
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_batch_matches_sequential() {
    let words: Vec<String> = inputs()
        .iter()
        .cycle()
        .take(WORDS.len() * 200)
        .map(|w| w.to_string())
        .collect();

    let sequential = BatchStemmer::new(EngineConfig::sequential())
        .unwrap()
        .stem_words(&words)
        .unwrap();
    let parallel = BatchStemmer::builder()
        .execution_mode(ExecutionMode::Parallel)
        .threads(Some(3))
        .initial_capacity(1)
        .build()
        .unwrap()
        .stem_words(&words)
        .unwrap();

    assert_eq!(parallel.stems, sequential.stems);
    assert_eq!(parallel.metadata.execution_mode, ExecutionMode::Parallel);
}

#[test]
fn test_empty_batch() {
    let stemmer = BatchStemmer::default();
    let words: Vec<String> = Vec::new();
    let output = stemmer.stem_words(&words).unwrap();

    assert!(output.stems.is_empty());
    assert_eq!(output.metadata.words_processed, 0);
}

#[test]
fn test_empty_word_in_batch_stems_to_empty() {
    let stemmer = BatchStemmer::default();
    let output = stemmer.stem_words(&["", "cats"]).unwrap();
    assert_eq!(output.stems, vec!["", "cat"]);
}

#[test]
fn test_uppercase_word_is_rejected() {
    let stemmer = BatchStemmer::default();
    let err = stemmer.stem_words(&["cats", "Dogs"]).unwrap_err();

    match err {
        EngineError::Stem { word, source } => {
            assert_eq!(word, "Dogs");
            assert_eq!(
                source,
                StemError::InvalidByte {
                    byte: b'D',
                    position: 0
                }
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_stem_text_over_document() {
    let mut stemmer = Stemmer::with_capacity(2);
    let mut out = String::new();
    let document = "Generalizations about HOPPING rabbits.\nIt's sensible!";

    let count = text::stem_text(&mut stemmer, document, &mut out).unwrap();

    assert_eq!(out, "gener about hop rabbit.\nit's sensibl!");
    assert_eq!(count, 7);
}

#[test]
fn test_text_words_feed_batches() {
    let words = text::words("Hopeful, hopefulness; HOPES");
    let output = BatchStemmer::default().stem_words(&words).unwrap();
    assert_eq!(words, vec!["hopeful", "hopefulness", "hopes"]);
    assert_eq!(output.stems, vec!["hope", "hope", "hope"]);
}
