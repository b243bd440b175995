//! Interactive yes/no confirmation on stdin.
//!
//! The core setup/teardown logic takes confirmation as an injected
//! callback; this is the interactive implementation the binary wires in.

use std::io::{self, BufRead, Write};

/// Ask on stdout, read one line from stdin. Only a literal `yes`
/// (case-insensitive) confirms.
pub fn stdin_confirm(prompt: &str) -> bool {
    print!("{prompt} (yes/no): ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    answer.trim().eq_ignore_ascii_case("yes")
}
