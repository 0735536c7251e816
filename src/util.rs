//! Small utility helpers used across modules.

/// True if the string is empty once surrounding whitespace is removed.
/// Form rows with only whitespace count as blank.
pub fn is_blank(s: &str) -> bool {
  s.trim().is_empty()
}

/// Case-insensitive substring test used by the dashboard search.
/// An empty needle matches everything.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
  haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Split a comma-separated list into trimmed, non-empty items.
pub fn split_csv(s: &str) -> Vec<String> {
  s.split(',')
    .map(|t| t.trim())
    .filter(|t| !t.is_empty())
    .map(str::to_string)
    .collect()
}

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge request/response payloads.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    return s.to_string();
  }
  let mut cut = max;
  while !s.is_char_boundary(cut) { cut -= 1; }
  format!("{}… ({} bytes total)", &s[..cut], s.len())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn blank_ignores_whitespace() {
    assert!(is_blank(""));
    assert!(is_blank("  \t\n"));
    assert!(!is_blank(" x "));
  }

  #[test]
  fn contains_ci_matches_across_case() {
    assert!(contains_ci("Linked List", "list"));
    assert!(contains_ci("Two Sum", "TWO"));
    assert!(contains_ci("anything", ""));
    assert!(!contains_ci("Array", "hash"));
  }

  #[test]
  fn split_csv_drops_empty_items() {
    assert_eq!(
      split_csv(" HashMap, Sliding Window,, String ,"),
      vec!["HashMap", "Sliding Window", "String"]
    );
    assert!(split_csv(" , ").is_empty());
  }

  #[test]
  fn trunc_for_log_respects_char_boundaries() {
    assert_eq!(trunc_for_log("short", 10), "short");
    let out = trunc_for_log("héllo world", 2);
    assert!(out.starts_with('h'));
    assert!(out.ends_with("(12 bytes total)"));
  }
}
