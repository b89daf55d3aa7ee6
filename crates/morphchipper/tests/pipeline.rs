#![allow(missing_docs)]

use std::sync::Arc;

use morphchipper::{
    codec::{ExtendedCodec, TokenCodec},
    errors::MorphchipperError,
    segmentation::{LexiconSegmenter, MorphemeSegmenter, StemSegmenter, WordContext},
    tokenizer::{AffixMergePolicy, EngineKind, TextTokenizer, TokenizerConfig, TokenizerEngine},
    training::VocabTrainerOptions,
    vocab::{
        SpecialTokens,
        SpecialTokensConfig,
        Vocabulary,
        io::{load_vocab_path, save_vocab_path, write_vocab},
    },
};

type T = u32;

const CORPUS: &[&str] = &[
    "kitaplarım evde.",
    "evlerde kitaplar var.",
    "kitaplarım ve defterlerim evde.",
    "defterlerim kitaplar.",
];

fn segmenter() -> Arc<dyn MorphemeSegmenter> {
    Arc::new(
        LexiconSegmenter::new()
            .with_entry("kitaplarım", ["kitap", "lar", "ım"])
            .with_entry("kitaplar", ["kitap", "lar"])
            .with_entry("defterlerim", ["defter", "ler", "im"])
            .with_entry("evlerde", ["ev", "ler", "de"])
            .with_entry("evde", ["ev", "de"]),
    )
}

fn config(policy: AffixMergePolicy) -> TokenizerConfig {
    TokenizerConfig::default()
        .with_min_freq(1)
        .with_vocab_size(1000)
        .with_policy(policy)
        .with_word_pattern(r"\w+|[^\w\s]+")
}

fn train(config: &TokenizerConfig) -> (Vocabulary<T>, TokenizerEngine) {
    config.validate::<T>().unwrap();
    let engine = TokenizerEngine::from_config(config, Some(segmenter())).unwrap();

    let mut trainer = VocabTrainerOptions::from_config(config).init(engine.clone());
    trainer.update_from_samples(CORPUS);
    let vocab = trainer
        .train(config.special_tokens.build().unwrap())
        .unwrap();
    (vocab, engine)
}

fn vocab_bytes(vocab: &Vocabulary<T>) -> Vec<u8> {
    let mut buf = Vec::new();
    write_vocab(vocab, &mut buf).unwrap();
    buf
}

#[test]
fn training_is_deterministic() {
    let config = config(AffixMergePolicy::All);
    let (first, _) = train(&config);
    let (second, _) = train(&config);

    assert_eq!(vocab_bytes(&first), vocab_bytes(&second));
    assert_eq!(first, second);
}

#[test]
fn training_respects_vocab_size() {
    for vocab_size in [4, 5, 8, 12, 1000] {
        let config = config(AffixMergePolicy::All).with_vocab_size(vocab_size);
        let (vocab, _) = train(&config);
        assert!(vocab.size() <= vocab_size);
        for (id, _) in vocab.iter() {
            assert!((id as usize) < vocab_size);
        }
    }

    // The most frequent token wins the single free slot.
    let config = config(AffixMergePolicy::All).with_vocab_size(5);
    let (vocab, _) = train(&config);
    assert_eq!(vocab.reverse(4), "kitap");
}

#[test]
fn empty_corpus_yields_specials_only() {
    let config = config(AffixMergePolicy::All);
    let engine = TokenizerEngine::from_config(&config, Some(segmenter())).unwrap();
    let trainer = VocabTrainerOptions::from_config(&config).init(engine);

    let vocab: Vocabulary<T> = trainer.train(SpecialTokens::default()).unwrap();
    assert_eq!(vocab.size(), 4);
    assert_eq!(vocab.ordinary_len(), 0);
}

#[test]
fn all_and_combined_are_decode_equivalent() {
    let (all_vocab, all_engine) = train(&config(AffixMergePolicy::All));
    let (combined_vocab, combined_engine) = train(&config(AffixMergePolicy::Combined));

    let all = TokenCodec::new(all_vocab, all_engine);
    let combined = TokenCodec::new(combined_vocab, combined_engine);

    let text = "kitaplarım ve defterlerim evde.";
    assert_eq!(
        all.tokenize("kitaplarım"),
        vec!["kitap", "#lar", "#ım"]
    );
    assert_eq!(combined.tokenize("kitaplarım"), vec!["kitap", "#larım"]);

    let all_ids = all.encode(text);
    let combined_ids = combined.encode(text);
    assert!(all_ids.len() > combined_ids.len());

    let decoded = all.decode(&all_ids);
    assert_eq!(decoded, " kitaplarım ve defterlerim evde .");
    assert_eq!(combined.decode(&combined_ids), decoded);
    assert_eq!(
        all.decode_trimmed(&all_ids).unwrap(),
        "kitaplarım ve defterlerim evde ."
    );
}

#[test]
fn lookup_reverse_round_trip() {
    let (vocab, _) = train(&config(AffixMergePolicy::LastOnly));
    for (id, word) in vocab.iter() {
        assert_eq!(vocab.lookup(vocab.reverse(id)), id);
        assert_eq!(vocab.lookup(word), id);
    }
    assert!(vocab.contains("#ım"));
    assert!(vocab.contains("#lar"));
    assert!(!vocab.contains("#ler"));
}

#[test]
fn sparse_specials_are_never_reassigned() {
    let mut specials = SpecialTokensConfig::default();
    specials.start.id = 5;
    specials.end.id = 6;
    let config = config(AffixMergePolicy::All).with_special_tokens(specials);
    let (vocab, _) = train(&config);

    assert_eq!(vocab.lookup("[SOS]"), 5);
    assert_eq!(vocab.lookup("[EOS]"), 6);
    for (id, word) in vocab.iter() {
        if id == 5 || id == 6 {
            assert!(vocab.special_tokens().contains_text(word));
        }
    }
}

#[test]
fn saved_vocab_encodes_identically() {
    let config = config(AffixMergePolicy::All);
    let (vocab, engine) = train(&config);

    tempdir::TempDir::new("pipeline_test")
        .and_then(|dir| {
            let path = dir.path().join("model").join("vocab.txt");
            save_vocab_path(&vocab, &path, false).unwrap();

            let loaded: Vocabulary<T> = load_vocab_path(&path, &config.special_tokens).unwrap();
            assert_eq!(loaded, vocab);

            let before = TokenCodec::new(vocab.clone(), engine.clone());
            let after = TokenCodec::new(loaded, engine.clone());
            for line in CORPUS {
                assert_eq!(before.encode(line), after.encode(line));
            }

            assert!(matches!(
                save_vocab_path(&vocab, &path, false),
                Err(MorphchipperError::ModelExists(_))
            ));
            Ok(())
        })
        .unwrap();
}

#[test]
fn pointer_encoding_end_to_end() {
    let (vocab, engine) = train(&config(AffixMergePolicy::All));
    let size = vocab.size() as T;
    let unk = vocab.unk_id();
    let codec = ExtendedCodec::new(TokenCodec::new(vocab, engine));

    let source = codec
        .encode_source("kitaplarım kalem silgi kalem")
        .unwrap();
    assert_eq!(source.oovs.words(), &["kalem".to_string(), "silgi".to_string()]);
    assert_eq!(&source.plain_ids[3..], &[unk, unk, unk]);
    assert_eq!(&source.extended_ids[3..], &[size, size + 1, size]);

    let target = codec.encode_target("silgi cetvel", &source.oovs).unwrap();
    assert_eq!(target.plain_ids, vec![unk, unk]);
    assert_eq!(target.extended_ids, vec![size + 1, unk]);

    assert_eq!(
        codec
            .decode_extended(&target.extended_ids, &source.oovs)
            .unwrap(),
        " silgi [UNK]"
    );
}

#[test]
fn stem_segmenter_engine() {
    let stem = |word: &str| -> String {
        word.strip_suffix("ing")
            .or_else(|| word.strip_suffix("s"))
            .unwrap_or(word)
            .to_string()
    };
    let segmenter: Arc<dyn MorphemeSegmenter> = Arc::new(StemSegmenter::new(stem));
    assert_eq!(
        segmenter.segment("walking", WordContext::default()),
        vec!["walk", "ing"]
    );

    let config = TokenizerConfig::default();
    let engine = TokenizerEngine::from_config(&config, Some(segmenter)).unwrap();
    assert_eq!(
        engine.tokenize("cats walking home"),
        vec!["cat", "#s", "walk", "#ing", "home"]
    );
}

#[test]
fn whitespace_engine_round_trip() {
    let config = TokenizerConfig::default()
        .with_min_freq(1)
        .with_engine(EngineKind::Whitespace);
    let engine = TokenizerEngine::from_config(&config, None).unwrap();

    let mut trainer = VocabTrainerOptions::from_config(&config).init(engine.clone());
    trainer.update_from_samples(["#etiket güzel gün"]);
    let vocab: Vocabulary<T> = trainer.train(SpecialTokens::default()).unwrap();

    let codec = TokenCodec::new(vocab, engine);
    let ids = codec.encode("güzel #etiket");
    assert_eq!(codec.decode_trimmed(&ids).unwrap(), "güzel #etiket");
}
