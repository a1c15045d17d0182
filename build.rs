use std::collections::HashSet;
use std::io::prelude::*;

const DICTIONARY: &str = include_str!("dictionary.txt");

fn main() {
    println!("cargo:rerun-if-changed=dictionary.txt");

    let out_dir = std::path::PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let mut f = std::fs::File::create(out_dir.join("dictionary.rs"))
        .expect("could not create file in OUT_DIR");

    let words = Vec::from_iter(DICTIONARY.lines().map(str::trim).filter(|w| !w.is_empty()));
    for word in &words {
        assert!(
            word.bytes().all(|c| c.is_ascii_lowercase()),
            "dictionary entry '{}' is not lowercase a-z",
            word
        );
    }

    writeln!(f, "/// Every word in the built-in dictionary, in file order.").unwrap();
    writeln!(f, "pub const DICTIONARY: [&str; {}] = [", words.len()).unwrap();
    for word in &words {
        writeln!(f, "\"{}\",", word).unwrap();
    }
    writeln!(f, "];").unwrap();

    // phf_codegen panics on duplicate keys.
    let mut seen = HashSet::new();
    let mut set = phf_codegen::Set::new();
    for &word in &words {
        if seen.insert(word) {
            set.entry(word);
        }
    }
    writeln!(f, "/// Constant-time membership test for the built-in dictionary.").unwrap();
    write!(
        f,
        "pub static WORDS: phf::Set<&'static str> = {};",
        set.build()
    )
    .unwrap();
}
