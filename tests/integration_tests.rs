//! Integration tests for rapid_textsum

use rapid_textsum::*;

/// Sample text for testing
const SAMPLE_TEXT: &str = r#"
Machine learning is a subset of artificial intelligence (AI) that provides systems
the ability to automatically learn and improve from experience without being explicitly
programmed. Machine learning focuses on the development of computer programs that can
access data and use it to learn for themselves.

The process of learning begins with observations or data, such as examples, direct
experience, or instruction, in order to look for patterns in data and make better
decisions in the future based on the examples that we provide. The primary aim is to
allow the computers to learn automatically without human intervention or assistance
and adjust actions accordingly.

Deep learning is a subset of machine learning that uses artificial neural networks
with representation learning. The learning can be supervised, semi-supervised or
unsupervised.
"#;

const ANIMALS: &str = "Cats are mammals. Dogs are mammals. The stock market rose today.";

#[test]
fn test_full_pipeline() {
    // Segment
    let spans = nlp::segmenter::UnicodeSegmenter::new()
        .segment(SAMPLE_TEXT)
        .unwrap();
    assert_eq!(spans.len(), 6);

    // Normalize and tokenize
    let sets: Vec<WordSet> = spans
        .iter()
        .map(|span| tokenize(&normalize(&span.text, None)).0)
        .collect();
    assert!(sets.iter().all(|s| !s.is_empty()));

    // Build graph
    let graph = SimilarityGraph::from_word_sets(&sets);
    assert_eq!(graph.num_nodes(), 6);
    assert_eq!(graph.num_edges(), 15);

    // Rank
    let result = SentenceRanker::new().run(&graph);
    assert!(result.iterations <= 30);
    assert!(result.scores.iter().all(|&s| s >= 0.15 - 1e-12));

    // The document API runs the same stages
    let doc = Document::new(SAMPLE_TEXT, None).unwrap();
    assert_eq!(doc.len(), 6);
    for (a, b) in doc.scores().iter().zip(&result.scores) {
        assert!((a - b).abs() < 1e-12);
    }

    let summary = doc.summary(0.3).unwrap();
    assert!(!summary.selected.is_empty());
    assert!(summary.selected.windows(2).all(|w| w[0] < w[1]));
    assert!(!summary.text.contains('\n'));
}

#[test]
fn test_related_sentences_rank_first() {
    let doc = Document::new(ANIMALS, None).unwrap();
    let scores = doc.scores();

    assert!(scores[0] > scores[2]);
    assert!(scores[1] > scores[2]);

    let summary = doc.summary(0.34).unwrap();
    assert_eq!(summary.budget, 4);
    assert_eq!(summary.text, "Cats are mammals.");
}

#[test]
fn test_single_sentence_is_returned_verbatim() {
    let text = "A lone sentence stands here without company.";
    for fraction in [0.0, 0.01, 0.5, 1.0, 10.0] {
        assert_eq!(summarize(text, fraction, None).unwrap(), text);
    }
}

#[test]
fn test_empty_input_is_not_an_error() {
    assert_eq!(summarize("", 0.5, None).unwrap(), "");
    assert_eq!(summarize("\n\n   \t", 0.5, None).unwrap(), "");
}

#[test]
fn test_summary_is_idempotent() {
    let doc = Document::new(SAMPLE_TEXT, None).unwrap();
    for fraction in [0.1, 0.25, 0.5, 0.9] {
        assert_eq!(doc.summarize(fraction).unwrap(), doc.summarize(fraction).unwrap());
    }
}

#[test]
fn test_longer_fraction_never_shortens_summary() {
    let doc = Document::new(SAMPLE_TEXT, None).unwrap();
    let mut last = 0;
    for step in 0..=20 {
        let summary = doc.summary(step as f64 / 20.0).unwrap();
        assert!(summary.word_count >= last);
        last = summary.word_count;
    }
    assert_eq!(last, doc.total_word_count());
}

#[test]
fn test_punctuation_only_sentence_is_safe() {
    let spans = vec![
        SentenceSpan::new("Cats are mammals.", 0, 17),
        SentenceSpan::new("... !!!", 18, 25),
        SentenceSpan::new("Dogs are mammals.", 26, 43),
    ];
    let doc = Document::from_spans(spans, None, SummaryConfig::default()).unwrap();
    assert_eq!(doc.sentences()[1].word_count, 0);

    for sentence in doc.sentences() {
        assert!(sentence.score.is_finite());
        assert!(sentence.score >= 0.15 - 1e-12);
        if sentence.word_count == 0 {
            assert!((sentence.score - 0.15).abs() < 1e-12);
        }
    }
    assert!(doc.summarize(0.5).is_ok());
}

#[test]
fn test_graph_weights_symmetric() {
    let doc = Document::new(SAMPLE_TEXT, None).unwrap();
    let graph = doc.graph();

    for i in 0..graph.num_nodes() as u32 {
        assert_eq!(graph.weight(i, i), 0.0);
        for j in 0..graph.num_nodes() as u32 {
            assert_eq!(graph.weight(i, j), graph.weight(j, i));
        }
    }
}

#[test]
fn test_lemma_list_from_file() {
    let path = std::env::temp_dir().join(format!(
        "rapid_textsum_lemmas_{}.txt",
        std::process::id()
    ));
    std::fs::write(&path, "cat\tcats\nsleep\tsleeps\nsleep\tsleeping\n").unwrap();
    let dict = LemmaDict::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(dict.len(), 3);

    let text = "The cats are sleeping. A cat sleeps. Markets rose.";
    let doc = Document::new(text, Some(&dict)).unwrap();
    assert!(doc.graph().weight(0, 1) > 0.0);
    assert_eq!(doc.sentences()[0].normalized, "the cat are sleep");
}

#[test]
fn test_custom_segmenter() {
    let by_line = |text: &str| -> Result<Vec<SentenceSpan>> {
        let mut spans = Vec::new();
        let mut offset = 0;
        for line in text.split('\n') {
            spans.push(SentenceSpan::new(line, offset, offset + line.len()));
            offset += line.len() + 1;
        }
        Ok(spans)
    };

    let text = "cats are mammals\ndogs are mammals\nthe stock market rose";
    let doc = Document::with_segmenter(text, None, SummaryConfig::default(), &by_line).unwrap();

    assert_eq!(doc.len(), 3);
    assert_eq!(doc.summarize(0.3).unwrap(), "cats are mammals");
}

#[test]
fn test_segmentation_failure_aborts() {
    let err = Document::from_bytes(&[0x43, 0x61, 0x74, 0xc3], None, SummaryConfig::default())
        .unwrap_err();
    assert!(err.is_segmentation_failure());
}

#[test]
fn test_batch_pipeline() {
    let texts = [SAMPLE_TEXT, ANIMALS, ""];
    let results = summarize_batch(&texts, 0.3, None).unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(
        results[0].as_ref().unwrap(),
        &Document::new(SAMPLE_TEXT, None).unwrap().summarize(0.3).unwrap()
    );
    assert_eq!(results[2].as_ref().unwrap(), "");
}

#[test]
fn test_json_pipeline() {
    let input = serde_json::json!({
        "text": SAMPLE_TEXT,
        "target_fraction": 0.5,
        "config": { "budget": "sentences" }
    });
    let output = summarize_json(&input.to_string()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    // floor(0.5 * 6) = 3 sentences
    let selected = value["sentences"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|s| s["selected"] == true)
        .count();
    assert_eq!(selected, 3);
    assert_eq!(value["budget"], 3);
}
