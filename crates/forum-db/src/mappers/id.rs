//! Resource id generation

use rand::distributions::Alphanumeric;
use rand::Rng;

const SUFFIX_LEN: usize = 16;

/// Generate an id such as `thread-h3Xq9LmP0aZr1b7K`
pub fn generate_id(prefix: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(char::from)
        .collect();

    format!("{prefix}-{suffix}")
}
