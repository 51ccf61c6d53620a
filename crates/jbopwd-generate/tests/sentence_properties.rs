use jbopwd_core::{Cmavo, Gismu, Lexicon};
use jbopwd_generate::{
    GenerateError, SentenceGenerator, SentenceOptions, generate_lujvo,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn gismu(word: &str, meaning: &str) -> Gismu {
    Gismu {
        word: word.to_string(),
        rafsi_cvc: String::new(),
        rafsi_ccv: String::new(),
        rafsi_cvv: String::new(),
        keyword: word.to_string(),
        hint: String::new(),
        meaning: meaning.to_string(),
        placements: Vec::new(),
        see_also: Vec::new(),
    }
}

fn gismu_with_rafsi(word: &str, cvc: &str) -> Gismu {
    let mut entry = gismu(word, "meaning");
    entry.rafsi_cvc = cvc.to_string();
    entry
}

fn cmavo(word: &str, meaning: &str) -> Cmavo {
    Cmavo {
        word: word.to_string(),
        category: String::new(),
        keyword: word.to_string(),
        meaning: meaning.to_string(),
        see_also: Vec::new(),
    }
}

fn lexicon() -> Lexicon {
    Lexicon::new(
        vec![
            gismu("gismu", "root word"),
            gismu("broda", "predicate variable"),
            gismu("prami", "love"),
        ],
        vec![
            cmavo("mi", "I"),
            cmavo("do", "you"),
            cmavo("ta'e", "habitually"),
            cmavo("la'o", "the quote"),
        ],
    )
}

/// Lexicon with no apostrophe-bearing entry in either table.
fn plain_lexicon() -> Lexicon {
    Lexicon::new(
        vec![gismu("gismu", "root word"), gismu("broda", "predicate variable")],
        vec![cmavo("mi", "I"), cmavo("do", "you")],
    )
}

fn count_tokens(sentence: &str) -> usize {
    sentence.split(' ').count()
}

#[test]
fn token_count_stays_within_bounds() {
    let lexicon = lexicon();
    let generator = SentenceGenerator::new(
        &lexicon,
        SentenceOptions {
            min_size: 5,
            ..SentenceOptions::default()
        },
    );

    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let result = generator.generate(&mut rng).expect("generates");
        let tokens = count_tokens(&result.sentence);
        // 5..=7 word tokens plus the mandatory number token.
        assert!((6..=8).contains(&tokens), "got {tokens}: {}", result.sentence);
        assert_eq!(result.glosses.len(), tokens - 1);
    }
}

#[test]
fn every_sentence_carries_exactly_one_number_token() {
    let lexicon = lexicon();
    let generator = SentenceGenerator::new(&lexicon, SentenceOptions::default());

    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let result = generator.generate(&mut rng).expect("generates");
        let numbers: Vec<&str> = result
            .sentence
            .split(' ')
            .filter(|token| token.chars().all(|c| c.is_ascii_digit()))
            .collect();
        assert_eq!(numbers.len(), 1, "sentence: {}", result.sentence);
        let value: u32 = numbers[0].parse().expect("decimal number");
        assert!(value < 100);
    }
}

#[test]
fn zero_min_size_is_legal() {
    let lexicon = lexicon();
    let generator = SentenceGenerator::new(
        &lexicon,
        SentenceOptions {
            min_size: 0,
            ..SentenceOptions::default()
        },
    );

    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let result = generator.generate(&mut rng).expect("generates");
        let tokens = count_tokens(&result.sentence);
        assert!((1..=3).contains(&tokens), "got {tokens}: {}", result.sentence);
    }
}

#[test]
fn terminal_period_is_applied_exactly_once() {
    let lexicon = lexicon();
    let generator = SentenceGenerator::new(
        &lexicon,
        SentenceOptions {
            terminal_period: true,
            force_apostrophe: true,
            ..SentenceOptions::default()
        },
    );

    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let result = generator.generate(&mut rng).expect("generates");
        assert!(result.sentence.ends_with('.'), "sentence: {}", result.sentence);
        assert!(!result.sentence.ends_with(".."), "sentence: {}", result.sentence);
    }
}

#[test]
fn forcing_guarantees_an_apostrophe() {
    let lexicon = lexicon();
    let generator = SentenceGenerator::new(
        &lexicon,
        SentenceOptions {
            force_apostrophe: true,
            ..SentenceOptions::default()
        },
    );

    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let result = generator.generate(&mut rng).expect("generates");
        assert!(result.sentence.contains('\''), "sentence: {}", result.sentence);
    }
}

#[test]
fn forcing_replaces_a_lone_number_token() {
    let lexicon = lexicon();
    let generator = SentenceGenerator::new(
        &lexicon,
        SentenceOptions {
            min_size: 0,
            force_apostrophe: true,
            ..SentenceOptions::default()
        },
    );

    // min_size 0 can collapse to a single number token; with no other
    // position available the number itself is replaced and the gloss list
    // stays empty.
    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let result = generator.generate(&mut rng).expect("generates");
        if count_tokens(&result.sentence) == 1 {
            assert!(result.sentence.contains('\''));
            assert!(result.glosses.is_empty());
        }
    }
}

#[test]
fn forcing_without_candidates_is_a_noop() {
    let lexicon = plain_lexicon();
    let forced = SentenceGenerator::new(
        &lexicon,
        SentenceOptions {
            force_apostrophe: true,
            ..SentenceOptions::default()
        },
    );
    let unforced = SentenceGenerator::new(&lexicon, SentenceOptions::default());

    for seed in 0..20 {
        let mut forced_rng = ChaCha8Rng::seed_from_u64(seed);
        let mut unforced_rng = ChaCha8Rng::seed_from_u64(seed);
        let with_flag = forced.generate(&mut forced_rng).expect("generates");
        let without_flag = unforced.generate(&mut unforced_rng).expect("generates");
        assert_eq!(with_flag.sentence, without_flag.sentence);
        assert!(!with_flag.sentence.contains('\''));
    }
}

#[test]
fn empty_lexicon_is_rejected() {
    let empty = Lexicon::new(Vec::new(), vec![cmavo("mi", "I")]);
    let generator = SentenceGenerator::new(&empty, SentenceOptions::default());
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert!(matches!(
        generator.generate(&mut rng),
        Err(GenerateError::EmptyLexicon)
    ));
}

#[test]
fn lujvo_concatenates_the_selected_short_forms() {
    let lexicon = Lexicon::new(
        vec![
            gismu_with_rafsi("klama", "kla"),
            gismu_with_rafsi("bajra", "baj"),
        ],
        vec![cmavo("mi", "I")],
    );

    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let lujvo = generate_lujvo(&lexicon, &mut rng).expect("generates");
        // Both components resolve to a three-letter rafsi.
        assert_eq!(lujvo.word.len(), 6, "word: {}", lujvo.word);
        assert!(lujvo.gloss.starts_with("lujvo("), "gloss: {}", lujvo.gloss);
        assert!(lujvo.gloss.ends_with(')'));
    }
}

#[test]
fn lujvo_fallback_truncates_head_and_keeps_full_tail() {
    let lexicon = Lexicon::new(
        vec![gismu("gismu", "root word"), gismu("broda", "predicate variable")],
        vec![cmavo("mi", "I")],
    );

    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let lujvo = generate_lujvo(&lexicon, &mut rng).expect("generates");
        // Head: first four bytes plus the linking letter; tail: full word.
        assert_eq!(lujvo.word.len(), 10, "word: {}", lujvo.word);
        assert!(
            ["gismy", "brody"].iter().any(|head| lujvo.word.starts_with(head)),
            "word: {}",
            lujvo.word
        );
        assert!(
            ["gismu", "broda"].iter().any(|tail| lujvo.word.ends_with(tail)),
            "word: {}",
            lujvo.word
        );
    }
}

#[test]
fn lujvo_injection_only_happens_when_enabled() {
    let lexicon = lexicon();
    let disabled = SentenceGenerator::new(&lexicon, SentenceOptions::default());
    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let result = disabled.generate(&mut rng).expect("generates");
        assert!(result.glosses.iter().all(|gloss| !gloss.contains("lujvo(")));
    }

    let enabled = SentenceGenerator::new(
        &lexicon,
        SentenceOptions {
            include_lujvo: true,
            ..SentenceOptions::default()
        },
    );
    let mut seen_lujvo = false;
    for seed in 0..200 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let result = enabled.generate(&mut rng).expect("generates");
        if result.glosses.iter().any(|gloss| gloss.contains("lujvo(")) {
            seen_lujvo = true;
            break;
        }
    }
    assert!(seen_lujvo, "no lujvo injected across 200 sentences");
}
