//! Low-confidence text heuristics.
//!
//! Agents shape unstructured provider text into report fields by checking a
//! fixed keyword list for case-insensitive substring hits. This is a stand-in
//! for real extraction: no ranking, overlapping keywords can both match, and
//! the output follows the keyword list's order rather than the text's.
//! Call sites depend on [`CandidateExtractor`] only, so a real classifier
//! can replace [`KeywordHeuristic`] without touching them.

/// Turns free text into a short list of candidate statements.
pub trait CandidateExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Vec<String>;
}

/// Substring matching against a keyword list, rendered through a template
/// where `{keyword}` is replaced by the matched keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordHeuristic {
    keywords: &'static [&'static str],
    template: &'static str,
    limit: usize,
}

impl KeywordHeuristic {
    pub const fn new(keywords: &'static [&'static str], template: &'static str, limit: usize) -> Self {
        Self {
            keywords,
            template,
            limit,
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        self.keywords
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Keywords found in `text`, in keyword-list order, before truncation.
    pub fn matches(&self, text: &str) -> Vec<&'static str> {
        let haystack = text.to_lowercase();
        self.keywords
            .iter()
            .copied()
            .filter(|keyword| haystack.contains(&keyword.to_lowercase()))
            .collect()
    }

    fn render(&self, keyword: &str) -> String {
        self.template.replace("{keyword}", keyword)
    }
}

impl CandidateExtractor for KeywordHeuristic {
    fn extract(&self, text: &str) -> Vec<String> {
        self.matches(text)
            .into_iter()
            .take(self.limit)
            .map(|keyword| self.render(keyword))
            .collect()
    }
}

/// Naive comma split used for list-like string parameters: trims each
/// entry, keeps order and duplicates. `""` yields `[""]`.
pub fn split_list(input: &str) -> Vec<String> {
    input.split(',').map(|item| item.trim().to_string()).collect()
}

/// Case-insensitive "any keyword is a substring of text".
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let haystack = text.to_lowercase();
    keywords
        .iter()
        .any(|keyword| haystack.contains(&keyword.to_lowercase()))
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the
/// rest, so `"e-commerce"` becomes `"E-Commerce"`.
pub fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut previous_is_letter = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                output.extend(ch.to_lowercase());
            } else {
                output.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            output.push(ch);
            previous_is_letter = false;
        }
    }
    output
}
