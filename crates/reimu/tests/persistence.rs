//! Save/load fidelity and rejection of malformed files.

use std::fs;

use reimu::{Error, Lexicon, build, from_json};

#[test]
fn test_save_load_preserves_lookups() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.lex");

    let dict = [("a", 1), ("ab", 2), ("abc", 3), ("cat", 10), ("dog", 30)];
    let lexicon = build(dict).unwrap();
    lexicon.save(&path).unwrap();
    let reloaded = Lexicon::read(&path).unwrap();

    assert_eq!(lexicon, reloaded);
    for (key, value) in dict {
        assert_eq!(reloaded.get(key.as_bytes()), Some(value));
    }
    for probe in [&b"ac"[..], b"cats", b"d", b"zzz"] {
        assert_eq!(reloaded.get(probe), lexicon.get(probe));
    }
}

#[test]
fn test_empty_lexicon_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.lex");

    let lexicon = build(Vec::<(&str, i32)>::new()).unwrap();
    lexicon.save(&path).unwrap();
    let reloaded = Lexicon::read(&path).unwrap();

    assert_eq!(lexicon, reloaded);
    assert!(reloaded.is_empty());
    assert_eq!(reloaded.get(b"x"), None);
}

#[test]
fn test_json_lexicon_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("json.lex");

    let lexicon = from_json(r#"{"cat": 10, "car": 20, "dog": 30}"#).unwrap();
    lexicon.save(&path).unwrap();
    let reloaded = Lexicon::read(&path).unwrap();

    assert_eq!(reloaded.get(b"car"), Some(20));
    assert_eq!(reloaded.get(b"ca"), None);
}

#[test]
fn test_foreign_headers_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("foreign.lex");

    let lexicon = build([("a", 1)]).unwrap();
    lexicon.save(&path).unwrap();
    let good = fs::read(&path).unwrap();

    for header in [
        &b"REIMU_Lex.v2"[..],
        b"REIMU_LEX.v1",
        b"reimu_lex.v1",
        b"TRIE_File.v1",
        b"\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00",
    ] {
        let mut bytes = good.clone();
        bytes[..12].copy_from_slice(header);
        fs::write(&path, &bytes).unwrap();

        assert!(
            matches!(Lexicon::read(&path), Err(Error::Corrupted { .. })),
            "header {header:?} was accepted"
        );
    }
}

#[test]
fn test_truncated_and_padded_files_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mangled.lex");

    let lexicon = build([("cat", 10), ("dog", 30)]).unwrap();
    lexicon.save(&path).unwrap();
    let good = fs::read(&path).unwrap();

    // Cut anywhere: before the counts, mid-slots, mid-tail.
    for cut in [4, 20, 100, good.len() - 1] {
        fs::write(&path, &good[..cut]).unwrap();
        assert!(
            matches!(Lexicon::read(&path), Err(Error::Corrupted { .. })),
            "file truncated to {cut} bytes was accepted"
        );
    }

    // Extra bytes after the declared sections.
    let mut padded = good.clone();
    padded.extend_from_slice(b"tail");
    fs::write(&path, &padded).unwrap();
    assert!(matches!(Lexicon::read(&path), Err(Error::Corrupted { .. })));
}
