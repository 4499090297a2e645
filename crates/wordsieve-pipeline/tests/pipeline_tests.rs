use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use wordsieve_core::config::{NormalizeSettings, VocabularySettings};
use wordsieve_core::types::{FileOutcome, MatchMode};
use wordsieve_pipeline::{claim_marker, run_normalize, run_vocabulary_extract, write_marker, LEMMATIZED_SUBDIR};

struct Dirs {
    _tmp: TempDir,
    input: PathBuf,
    blocklist: PathBuf,
    filtered: PathBuf,
    output: PathBuf,
    marker: PathBuf,
}

fn setup(inputs: &[(&str, &str)], blocklist: &str) -> Dirs {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();
    let dirs = Dirs {
        input: root.join("to_lemmatize"),
        blocklist: root.join("blocklist"),
        filtered: root.join("filtered"),
        output: root.join("vocabulary"),
        marker: root.join("done.txt"),
        _tmp: tmp,
    };
    fs::create_dir_all(&dirs.input).unwrap();
    fs::create_dir_all(&dirs.blocklist).unwrap();
    for (name, text) in inputs {
        fs::write(dirs.input.join(name), text).unwrap();
    }
    fs::write(dirs.blocklist.join("stop.txt"), blocklist).unwrap();
    dirs
}

fn normalize(dirs: &Dirs, match_mode: MatchMode) -> wordsieve_pipeline::Completion {
    let settings = NormalizeSettings { workers: 4, match_mode };
    run_normalize(&dirs.input, &dirs.blocklist, &dirs.filtered, &settings).unwrap()
}

fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn end_to_end_example() {
    let dirs = setup(&[("a.txt", "Cats are running fast. The cat runs.")], "the\n");

    let completion = normalize(&dirs, MatchMode::Token);
    assert_eq!(completion.written(), 1);
    assert_eq!(completion.removal_set_size, 1);
    assert_eq!(fs::read_to_string(dirs.filtered.join("a.txt")).unwrap(), "cat be run fast . cat run .");
    assert!(!dirs.filtered.join(LEMMATIZED_SUBDIR).exists());

    let report = run_vocabulary_extract(&completion, &dirs.output, &VocabularySettings::default()).unwrap();
    assert_eq!(report.total_raw(), 6);
    assert_eq!(report.total_unique(), 4);
    assert_eq!(report.total_chunk_files(), 1);
    assert_eq!(
        fs::read_to_string(dirs.output.join("a_lowercase_unique_words_part1.txt")).unwrap(),
        "cat\nbe\nrun\nfast\n"
    );
    assert!(!dirs.filtered.exists());
}

#[test]
fn alternation_mode_gives_the_same_result_on_plain_words() {
    let dirs = setup(&[("a.txt", "Cats are running fast. The cat runs.")], "the\n");
    normalize(&dirs, MatchMode::Alternation);
    assert_eq!(fs::read_to_string(dirs.filtered.join("a.txt")).unwrap(), "cat be run fast . cat run .");
}

#[test]
fn documents_emptied_by_removal_are_skipped() {
    let dirs = setup(&[("keep.txt", "Dogs bark."), ("gone.txt", "The the\nTHE")], "the\n");

    let completion = normalize(&dirs, MatchMode::Token);
    assert_eq!(completion.written(), 1);
    assert_eq!(completion.skipped(), 1);
    let skipped = completion
        .outcomes
        .iter()
        .find(|o| matches!(o, FileOutcome::SkippedEmpty { .. }))
        .unwrap();
    assert_eq!(skipped.path(), dirs.input.join("gone.txt"));
    assert_eq!(listing(&dirs.filtered), vec!["keep.txt"]);
}

#[test]
fn lines_are_lemmatized_then_whitespace_collapsed() {
    let dirs = setup(&[("m.txt", "Dogs bark.\r\n\n   Birds sing.  ")], "");
    let completion = normalize(&dirs, MatchMode::Token);
    assert_eq!(completion.removal_set_size, 0);
    assert_eq!(fs::read_to_string(dirs.filtered.join("m.txt")).unwrap(), "dog bark . bird sing .");
}

#[test]
fn missing_blocklist_directory_removes_nothing() {
    let dirs = setup(&[("a.txt", "The cat")], "");
    fs::remove_dir_all(&dirs.blocklist).unwrap();
    let completion = normalize(&dirs, MatchMode::Token);
    assert_eq!(completion.removal_set_size, 0);
    assert_eq!(fs::read_to_string(dirs.filtered.join("a.txt")).unwrap(), "the cat");
}

#[test]
fn invalid_utf8_input_is_read_leniently() {
    let dirs = setup(&[], "");
    fs::write(dirs.input.join("bad.txt"), b"dogs \xff bark").unwrap();
    let completion = normalize(&dirs, MatchMode::Token);
    assert_eq!(completion.failed(), 0);
    assert_eq!(completion.written(), 1);
}

#[test]
fn outcomes_follow_input_order() {
    let dirs = setup(&[("c.txt", "cats"), ("a.txt", "the"), ("b.txt", "dogs")], "the");
    let completion = normalize(&dirs, MatchMode::Token);
    let names: Vec<String> = completion
        .outcomes
        .iter()
        .map(|o| o.path().file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
}

#[test]
fn large_vocabularies_are_split_into_parts() {
    let words: Vec<String> = (0..12).map(|i| format!("word{}", char::from(b'a' + i))).collect();
    let dirs = setup(&[], "");
    fs::create_dir_all(&dirs.filtered).unwrap();
    fs::write(dirs.filtered.join("big.txt"), words.join(" ")).unwrap();

    let completion = wordsieve_pipeline::Completion::from_directory(&dirs.filtered);
    let settings = VocabularySettings { chunk_size: 5, min_word_len: 2 };
    let report = run_vocabulary_extract(&completion, &dirs.output, &settings).unwrap();
    assert_eq!(report.files[0].chunk_files, 3);
    assert_eq!(
        listing(&dirs.output),
        vec![
            "big_lowercase_unique_words_part1.txt",
            "big_lowercase_unique_words_part2.txt",
            "big_lowercase_unique_words_part3.txt",
        ]
    );
    let rebuilt: Vec<String> = (1..=3)
        .flat_map(|n| {
            fs::read_to_string(dirs.output.join(format!("big_lowercase_unique_words_part{n}.txt")))
                .unwrap()
                .lines()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect();
    assert_eq!(rebuilt, words);
}

#[test]
fn filtered_directory_with_other_files_is_kept() {
    let dirs = setup(&[], "");
    fs::create_dir_all(&dirs.filtered).unwrap();
    fs::write(dirs.filtered.join("a.txt"), "alpha beta").unwrap();
    fs::write(dirs.filtered.join("notes.md"), "keep").unwrap();

    let completion = wordsieve_pipeline::Completion::from_directory(&dirs.filtered);
    run_vocabulary_extract(&completion, &dirs.output, &VocabularySettings::default()).unwrap();
    assert_eq!(listing(&dirs.filtered), vec!["notes.md"]);
}

#[test]
fn marker_handoff_between_processes() {
    let dirs = setup(&[("a.txt", "Dogs bark.")], "");
    let completion = normalize(&dirs, MatchMode::Token);
    write_marker(&dirs.marker).unwrap();

    let claimed = claim_marker(&dirs.marker, &completion.filtered_dir).unwrap().expect("marker present");
    let report = run_vocabulary_extract(&claimed, &dirs.output, &VocabularySettings::default()).unwrap();
    assert_eq!(report.files.len(), 1);
    assert!(!dirs.marker.exists());
}

#[test]
fn without_marker_nothing_is_touched() {
    let dirs = setup(&[("a.txt", "Dogs bark.")], "");
    normalize(&dirs, MatchMode::Token);
    let before = listing(&dirs.filtered);

    assert!(claim_marker(&dirs.marker, &dirs.filtered).unwrap().is_none());
    assert_eq!(listing(&dirs.filtered), before);
    assert!(!dirs.output.exists());
}

#[test]
fn invalid_bytes_are_dropped_not_split() {
    let dirs = setup(&[], "");
    fs::write(dirs.input.join("cafe.txt"), b"caf\xffe time").unwrap();
    let completion = normalize(&dirs, MatchMode::Token);
    assert_eq!(fs::read_to_string(dirs.filtered.join("cafe.txt")).unwrap(), "cafe time");

    run_vocabulary_extract(&completion, &dirs.output, &VocabularySettings::default()).unwrap();
    assert_eq!(
        fs::read_to_string(dirs.output.join("cafe_lowercase_unique_words_part1.txt")).unwrap(),
        "cafe\ntime\n"
    );
}

#[test]
fn a_failing_file_does_not_stop_the_others_in_normalize() {
    let dirs = setup(&[("a.txt", "Dogs bark."), ("b.txt", "Birds sing.")], "");
    // a directory in the way makes writing filtered/a.txt fail
    fs::create_dir_all(dirs.filtered.join("a.txt")).unwrap();

    let completion = normalize(&dirs, MatchMode::Token);
    assert_eq!(completion.failed(), 1);
    assert_eq!(completion.written(), 1);
    match &completion.outcomes[0] {
        FileOutcome::Failed { path, error } => {
            assert_eq!(path, &dirs.input.join("a.txt"));
            assert!(error.contains("a.txt"), "{error}");
        }
        other => panic!("expected a failure, got {other:?}"),
    }
    assert!(matches!(&completion.outcomes[1], FileOutcome::Written { path } if path == &dirs.filtered.join("b.txt")));
    assert_eq!(fs::read_to_string(dirs.filtered.join("b.txt")).unwrap(), "bird sing .");
    assert!(!dirs.filtered.join(LEMMATIZED_SUBDIR).exists());
}

#[test]
fn a_failing_file_is_reported_with_zero_counts_in_vocab() {
    let dirs = setup(&[], "");
    fs::create_dir_all(&dirs.filtered).unwrap();
    fs::write(dirs.filtered.join("a.txt"), "alpha beta").unwrap();
    fs::write(dirs.filtered.join("b.txt"), "gamma delta gamma").unwrap();
    fs::create_dir_all(dirs.output.join("a_lowercase_unique_words_part1.txt")).unwrap();

    let completion = wordsieve_pipeline::Completion::from_directory(&dirs.filtered);
    let report = run_vocabulary_extract(&completion, &dirs.output, &VocabularySettings::default()).unwrap();

    assert_eq!(report.files.len(), 2);
    assert_eq!(report.failed(), 1);
    let failed = &report.files[0];
    assert_eq!(failed.name, "a.txt");
    assert_eq!((failed.raw_count, failed.unique_count, failed.chunk_files), (0, 0, 0));
    assert!(failed.error.is_some());
    assert_eq!((report.files[1].raw_count, report.files[1].unique_count), (3, 2));
    assert_eq!(report.total_chunk_files(), 1);
    assert_eq!(
        fs::read_to_string(dirs.output.join("b_lowercase_unique_words_part1.txt")).unwrap(),
        "gamma\ndelta\n"
    );
    assert!(!dirs.filtered.exists());
}
