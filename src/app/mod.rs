//! MapReduce applications. Each one is a pair of free functions: a mapper
//! `(key, value) -> pairs` and a reducer `(key, values) -> pair`.

pub mod wc;
