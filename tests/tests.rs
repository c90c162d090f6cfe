use std::collections::HashMap;
use std::fs;
use std::io::Cursor;

use tempfile::TempDir;
use word_count::{count, Sequential};

#[test]
fn test_all() {
    pretty_env_logger::init();

    let temp_dir = TempDir::new().expect("unable to create temporary working directory");
    let a = temp_dir.path().join("a.txt");
    let b = temp_dir.path().join("b.txt");
    fs::write(&a, "The quick, quick fox!\nit's It's\n").unwrap();
    fs::write(&b, "Fox and hound\n\nthe end's end\n").unwrap();

    let out = temp_dir.path().join("wc-out");
    Sequential {
        files: vec![a.clone(), b.clone()],
        output: Some(out.clone()),
    }
    .launch()
    .unwrap();

    // Collect output listing
    let listing = fs::read_to_string(&out).unwrap();
    let result = {
        let mut result = HashMap::<String, u64>::new();
        for l in listing.lines() {
            let kv: Vec<&str> = l.split('\t').collect();
            assert!(kv.len() == 2);
            assert!(result.get(kv[0]).is_none());
            result.insert(kv[0].to_owned(), kv[1].parse().unwrap());
        }
        result
    };

    let expected: HashMap<String, u64> = vec![
        ("the", 2),
        ("quick", 2),
        ("fox", 2),
        ("it's", 2),
        ("and", 1),
        ("hound", 1),
        ("end's", 1),
        ("end", 1),
    ]
    .into_iter()
    .map(|(w, n)| (w.to_owned(), n))
    .collect();

    assert!(result.len() == expected.len());
    for (w, n) in expected.iter() {
        assert!(result.get(w).unwrap() == n);
    }

    // Listing is sorted by word
    let words: Vec<&str> = listing.lines().map(|l| l.split('\t').next().unwrap()).collect();
    let mut sorted = words.clone();
    sorted.sort();
    assert!(words == sorted);

    // Check that the result is identical to counting the concatenated input
    let contents = fs::read_to_string(&a).unwrap() + &fs::read_to_string(&b).unwrap();
    let seq_result = count(Cursor::new(contents)).unwrap();
    assert!(seq_result.len() == result.len());
    for (w, n) in seq_result.iter() {
        assert!(result.get(w).unwrap() == n);
    }
}
