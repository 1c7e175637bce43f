use compressed_trie::trie::{Insertion, Trie};
use tracing_subscriber::EnvFilter;

// Try `RUST_LOG=compressed_trie=trace cargo run --example words -- car cart card`
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let words: Vec<&str> = if args.is_empty() {
        "the quick brown fox jumps over the lazy dog then the fox sleeps"
            .split_whitespace()
            .collect()
    } else {
        args.iter().map(String::as_str).collect()
    };

    // Create our trie and store every word
    let mut trie = Trie::new();
    for w in &words {
        match trie.insert(w) {
            Ok(Insertion::Inserted) => println!("inserted: {}", w),
            Ok(Insertion::AlreadyExists) => println!("duplicate: {}", w),
            Err(e) => println!("rejected {:?}: {}", w, e),
        }
    }

    // Every word is now present, but its strict prefixes generally are not
    for w in &words {
        let prefix: String = w.chars().take(w.chars().count().saturating_sub(1)).collect();
        println!(
            "{}: exists={}, {:?}: exists={}, prefix={}",
            w,
            trie.exists(w),
            prefix,
            trie.exists(&prefix),
            trie.starts_with(&prefix)
        );
    }

    println!("keys: {}", trie.len());
    println!("{:?}", trie.stats());
}
