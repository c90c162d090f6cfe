//! In-process run-loop composing the mapper and reducer: map every line,
//! group pairs by word, reduce each word exactly once, write the listing.
//! Stands in for an external framework's driver; no scheduling, no
//! distribution, no recovery.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use atomicwrites::{AllowOverwrite, AtomicFile};
use log::{info, trace};

use crate::app::wc;

/// Sequential word-count job over a set of input files. With no files the
/// job reads stdin; with no output path the listing goes to stdout.
pub struct Sequential {
    pub files: Vec<PathBuf>,
    pub output: Option<PathBuf>,
}

impl Sequential {
    pub fn launch(&self) -> Result<()> {
        let mut groups = HashMap::<String, Vec<u64>>::new();
        if self.files.is_empty() {
            trace!("mapping stdin");
            let stdin = io::stdin();
            collect_groups("-", stdin.lock(), &mut groups)?;
        } else {
            for fname in self.files.iter() {
                trace!("mapping {:?}", fname);
                let file = File::open(fname)
                    .with_context(|| format!("Error on opening {:?}", fname))?;
                collect_groups(&fname.to_string_lossy(), BufReader::new(file), &mut groups)?;
            }
        }
        let result = aggregate(groups);
        info!("{} distinct words", result.len());

        match &self.output {
            Some(path) => {
                let af = AtomicFile::new(path, AllowOverwrite);
                af.write(|f| write_listing(f, &result))
                    .with_context(|| format!("Error on writing {:?}", path))?;
                trace!("output {:?}", path);
            }
            None => {
                let stdout = io::stdout();
                write_listing(stdout.lock(), &result).context("Error on writing stdout")?;
            }
        }
        Ok(())
    }
}

/// Map-group-reduce over one reader, one mapper call per line. Returns one
/// `(word, total)` pair per distinct word, sorted by word.
pub fn count<R: BufRead>(reader: R) -> Result<Vec<(String, u64)>> {
    let mut groups = HashMap::<String, Vec<u64>>::new();
    collect_groups("-", reader, &mut groups)?;
    Ok(aggregate(groups))
}

fn collect_groups<R: BufRead>(
    key: &str,
    reader: R,
    groups: &mut HashMap<String, Vec<u64>>,
) -> Result<()> {
    for line in reader.lines() {
        let line = line.with_context(|| format!("Error on reading line of {}", key))?;
        for (w, c) in wc::map(key, &line) {
            if let Some(cs) = groups.get_mut(&w) {
                cs.push(c);
            } else {
                groups.insert(w, Vec::from([c]));
            }
        }
    }
    Ok(())
}

fn aggregate(groups: HashMap<String, Vec<u64>>) -> Vec<(String, u64)> {
    let mut result: Vec<(String, u64)> = groups
        .into_iter()
        .map(|(w, cs)| wc::reduce(&w, cs))
        .collect();
    result.sort_by(|a, b| a.cmp(b));
    result
}

fn write_listing<W: Write>(mut out: W, result: &[(String, u64)]) -> io::Result<()> {
    for (word, total) in result.iter() {
        writeln!(out, "{}\t{}", word, total)?;
    }
    Ok(())
}
