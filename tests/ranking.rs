// Integration tests for the vectorize → compare → rank pipeline.
//
// Exercises the public surface only: reference alphabet invariants,
// cosine properties, and ranking scenarios on the demo corpus.

use std::sync::Arc;

use charvec::{similarity, Alphabet, Ranker, ReferenceCorpus, Similarity, Vectorizer};

// ============================================================
// Vectorizer
// ============================================================

#[test]
fn vector_length_is_alphabet_size() {
    let v = Vectorizer::reference();
    for text in ["", "x", "home", "Ativação do Cartão 2024", "asdhfu asd ofaisd foias dfj asdf asd fasd f"] {
        assert_eq!(v.vectorize(text).len(), 27);
    }
}

#[test]
fn empty_text_is_all_zero() {
    let v = Vectorizer::reference();
    let zero = v.vectorize("");
    assert!(zero.is_zero());
    assert_eq!(zero.total(), 0);
}

#[test]
fn counts_sum_to_text_length() {
    let v = Vectorizer::reference();
    let text = "the quick brown fox jumps over the lazy dog";
    assert_eq!(v.vectorize(text).total(), text.len() as u64);
}

// ============================================================
// similarity
// ============================================================

#[test]
fn self_similarity_is_one() {
    let v = Vectorizer::reference();
    for text in ["home", "ativar cartao", "zzz", " "] {
        let vec = v.vectorize(text);
        assert_eq!(similarity(&vec, &vec), Similarity::Defined(1.0), "text {text:?}");
    }
}

#[test]
fn similarity_is_symmetric() {
    let v = Vectorizer::reference();
    let texts = ["home", "atualizar dados cadastrais", "ativacao", "", "qwerty"];
    for a in texts {
        for b in texts {
            let (va, vb) = (v.vectorize(a), v.vectorize(b));
            assert_eq!(similarity(&va, &vb), similarity(&vb, &va), "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn similarity_ignores_character_order() {
    let v = Vectorizer::reference();
    let pairs = [
        ("ativar cartao", "oatrac ravita"),
        ("texto de teste", "etset ed otxet"),
        ("home", "emoh"),
    ];
    for (text, permuted) in pairs {
        assert_eq!(
            similarity(&v.vectorize(text), &v.vectorize(permuted)),
            Similarity::Defined(1.0)
        );
    }
}

#[test]
fn similarity_with_empty_text_is_undefined() {
    let v = Vectorizer::reference();
    let s = similarity(&v.vectorize(""), &v.vectorize("home"));
    assert!(s.is_undefined());
    assert!(s.value().is_nan());
}

#[test]
fn similarity_across_alphabets_is_undefined() {
    let reference = Vectorizer::reference().vectorize("ab");
    let short = Vectorizer::new(Arc::new(Alphabet::new("ab".chars()).unwrap())).vectorize("ab");
    assert_eq!(similarity(&reference, &short), Similarity::Undefined);
    assert_eq!(similarity(&short, &reference), Similarity::Undefined);
}

// ============================================================
// Ranker scenarios
// ============================================================

#[test]
fn rank_home_is_exact_self_match() {
    let ranker = Ranker::default();
    let result = ranker.rank("home");
    assert_eq!(result.list[0].0.as_ref(), "home");
    assert_eq!(result.list[0].1, Similarity::Defined(1.0));
}

#[test]
fn rank_empty_query_is_undefined_for_every_label() {
    let result = Ranker::default().rank("");
    assert_eq!(result.len(), 4);
    assert!(result.iter().all(|(_, s)| s.is_undefined()));
}

#[test]
fn ativacao_prefers_ativar_cartao_over_home() {
    let corpus = ReferenceCorpus::from_labels(Arc::new(Alphabet::reference()), ["home", "ativar cartao"]).unwrap();
    let result = Ranker::new(Arc::new(corpus)).rank("ativacao");
    assert_eq!(result.labels().collect::<Vec<_>>(), ["ativar cartao", "home"]);
    let top = result.score_of("ativar cartao").unwrap().value();
    let low = result.score_of("home").unwrap().value();
    assert!(top > low, "{top} <= {low}");
}

#[test]
fn demo_queries_rank_full_corpus() {
    let ranker = Ranker::default();
    let cadastro = ranker.rank("cadastro");
    assert_eq!(cadastro.best().map(|(l, _)| l), Some("atualizar dados cadastrais"));
    assert_eq!(cadastro.len(), 4);

    let ativacao = ranker.rank("ativacao");
    assert_eq!(ativacao.best().map(|(l, _)| l), Some("ativar cartao"));

    let noise = ranker.rank("asdhfu asd ofaisd foias dfj asdf asd fasd f");
    assert_eq!(noise.len(), 4);
    assert!(noise.iter().all(|(_, s)| !s.is_undefined()));
}

#[test]
fn ranker_is_shareable_across_threads() {
    let ranker = Ranker::default();
    let handles: Vec<_> = ["home", "cadastro", "ativacao"]
        .into_iter()
        .map(|q| {
            let ranker = ranker.clone();
            std::thread::spawn(move || ranker.rank(q))
        })
        .collect();
    for (handle, q) in handles.into_iter().zip(["home", "cadastro", "ativacao"]) {
        assert_eq!(handle.join().unwrap(), ranker.rank(q));
    }
}

// ============================================================
// Snapshot
// ============================================================

#[test]
fn snapshot_keeps_rankings() {
    let corpus = ReferenceCorpus::demo();
    let restored = ReferenceCorpus::from_cbor(&corpus.to_cbor().unwrap()).unwrap();
    let before = Ranker::new(Arc::new(corpus)).rank("cadastro");
    let after = Ranker::new(Arc::new(restored)).rank("cadastro");
    assert_eq!(before, after);
}
