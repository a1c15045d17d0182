use anyhow::Context;
use rayon::prelude::*;
use std::io::prelude::*;
use std::io::BufReader;

/// Reads every whitespace-separated token from `file`, gunzipping it first if its name ends in
/// `.gz`, and keeps the purely alphabetic ones in lowercase.
fn words(file: &str) -> anyhow::Result<Vec<String>> {
    let f = std::fs::File::open(file).with_context(|| format!("could not open file '{}'", file))?;
    let f = BufReader::new(f);
    let mut reader: Box<dyn BufRead> = if file.ends_with(".gz") {
        Box::new(BufReader::new(flate2::bufread::GzDecoder::new(f)))
    } else {
        Box::new(f)
    };

    let mut words = Vec::new();
    let mut line = String::new();
    loop {
        line.clear();
        if reader
            .read_line(&mut line)
            .with_context(|| format!("could not read from '{}'", file))?
            == 0
        {
            break;
        }
        for token in line.split_whitespace() {
            if !token.bytes().all(|c| c.is_ascii_alphabetic()) {
                continue;
            }
            words.push(token.to_ascii_lowercase());
        }
    }
    Ok(words)
}

fn main() -> anyhow::Result<()> {
    let files: Vec<_> = std::env::args().skip(1).collect();
    if files.is_empty() {
        anyhow::bail!("usage: corpus <word list>...");
    }

    let lists = files
        .par_iter()
        .map(|file| words(file))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    let mut total = 0;
    for word in lists.iter().flatten() {
        writeln!(out, "{}", word)?;
        total += 1;
    }
    out.flush()?;
    eprintln!("wrote {} words from {} files", total, files.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::words;
    use std::io::Write;

    #[test]
    fn keeps_alphabetic_lowercased() {
        let path = std::env::temp_dir().join(format!("corpus-test-{}.txt", std::process::id()));
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "Apple\nit's\nbanana cherry2\n\nZEBRA").unwrap();
        drop(f);

        let out = words(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(out, ["apple", "banana", "zebra"]);
    }

    #[test]
    fn missing_file() {
        assert!(words("/definitely/not/a/real/file.txt").is_err());
    }
}
