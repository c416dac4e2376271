// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;
use unicode_normalization::UnicodeNormalization;

/// NFKC + Unicode lowercase, the folding shared by tags and exam codes.
#[must_use]
pub fn fold(input: &str) -> String {
    input.nfkc().collect::<String>().to_lowercase()
}

/// Folds free-text tags into a set: trimmed, case-folded, blanks dropped.
#[must_use]
pub fn normalize_tags<S: AsRef<str>>(tags: &[S]) -> BTreeSet<String> {
    tags.iter()
        .map(|tag| fold(tag.as_ref().trim()))
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Loose exam-code form used for substring search: `AZ-104 ` and `az104` agree.
#[must_use]
pub fn normalize_exam_code(input: &str) -> String {
    fold(input)
        .chars()
        .filter(|c| *c != '-')
        .collect::<String>()
        .trim()
        .to_string()
}
