//! Output formatting helpers for the CLI

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:16} {}", format!("{key}:"), value);
}

/// Format a move list like "1, 4, 7", or a placeholder when empty
pub fn format_moves(moves: &[usize]) -> String {
    if moves.is_empty() {
        "(none)".to_string()
    } else {
        moves
            .iter()
            .map(|pos| pos.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
