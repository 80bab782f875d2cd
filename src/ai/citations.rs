//! Citation collation for knowledge-base answers
//!
//! A retrieve-and-generate call returns a list of citations, each a generated
//! text fragment plus the source excerpts that justified it. Collation merges
//! repeated sources, numbers each distinct source on first occurrence, and
//! appends inline reference markers to the assembled answer.

use crate::models::review::stars_display;

use super::{Citation, SourceReference};

/// Fixed answer when the retrieval step found no relevant source material.
/// A designed outcome, not an error.
pub const NO_ANSWER_MESSAGE: &str = "Sorry, I don't have enough reviews for this location.";

/// Assembled answer text plus the deduplicated reference list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollatedAnswer {
    /// Answer text with inline `<sup>[n]</sup>` reference markers
    pub output: String,
    /// Human-readable reference strings, in first-appearance order
    pub reviews: Vec<String>,
}

/// Insertion-ordered mapping from source URI to its 1-based reference number
/// and display string. Reference numbering depends on first-appearance order,
/// so the table iterates in insertion order, never key order.
#[derive(Debug, Default)]
struct ReferenceTable {
    entries: Vec<(String, String)>,
}

impl ReferenceTable {
    /// Reference number for a source, assigning the next sequential number on
    /// first occurrence. A repeated URI keeps its originally assigned number.
    fn number_for(&mut self, reference: &SourceReference) -> usize {
        if let Some(position) = self
            .entries
            .iter()
            .position(|(uri, _)| uri == &reference.uri)
        {
            return position + 1;
        }

        self.entries
            .push((reference.uri.clone(), display_string(reference)));
        self.entries.len()
    }

    fn into_reviews(self) -> Vec<String> {
        self.entries
            .into_iter()
            .map(|(_, display)| display)
            .collect()
    }
}

/// Human-readable reference string: star indicator followed by the excerpt.
/// Star counts outside 1-5 are not validated; zero or negative counts
/// degenerate to an empty indicator.
fn display_string(reference: &SourceReference) -> String {
    format!("{} {}", stars_display(reference.stars), reference.excerpt)
}

/// Collate a citation list into one answer string and its reference list.
///
/// Fragments are appended verbatim in input order. Each source reference
/// appends an inline marker with that source's number; the same source
/// referenced again reuses its existing number, even within one citation, so
/// a single source may be marked multiple times. The reference list length
/// equals the count of distinct source URIs.
#[must_use]
pub fn collate(citations: &[Citation]) -> CollatedAnswer {
    if citations.is_empty() {
        return CollatedAnswer {
            output: NO_ANSWER_MESSAGE.to_string(),
            reviews: Vec::new(),
        };
    }

    let mut table = ReferenceTable::default();
    let mut output = String::new();

    for citation in citations {
        output.push_str(&citation.text);
        for reference in &citation.references {
            let number = table.number_for(reference);
            output.push_str(&format!("<sup>[{number}]</sup>"));
        }
    }

    CollatedAnswer {
        output,
        reviews: table.into_reviews(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(uri: &str, stars: i64, excerpt: &str) -> SourceReference {
        SourceReference {
            uri: uri.into(),
            stars,
            excerpt: excerpt.into(),
        }
    }

    fn citation(text: &str, references: Vec<SourceReference>) -> Citation {
        Citation {
            text: text.into(),
            references,
        }
    }

    #[test]
    fn test_single_citation_single_source() {
        let citations = vec![citation(
            "Answer text",
            vec![reference("s3://reviews/a.txt", 4, "Review text")],
        )];

        let answer = collate(&citations);
        assert_eq!(answer.output, "Answer text<sup>[1]</sup>");
        assert_eq!(answer.reviews, vec!["⭐️⭐️⭐️⭐️ Review text"]);
    }

    #[test]
    fn test_empty_citations_short_circuit() {
        let answer = collate(&[]);
        assert_eq!(answer.output, NO_ANSWER_MESSAGE);
        assert!(answer.reviews.is_empty());
    }

    #[test]
    fn test_repeated_source_across_citations_reuses_number() {
        let citations = vec![
            citation("First part. ", vec![reference("s3://r/a.txt", 5, "Great")]),
            citation("Second part.", vec![reference("s3://r/a.txt", 5, "Great")]),
        ];

        let answer = collate(&citations);
        assert_eq!(
            answer.output,
            "First part. <sup>[1]</sup>Second part.<sup>[1]</sup>"
        );
        assert_eq!(answer.reviews.len(), 1);
    }

    #[test]
    fn test_repeated_source_within_one_citation() {
        let citations = vec![citation(
            "Text",
            vec![
                reference("s3://r/a.txt", 3, "A"),
                reference("s3://r/a.txt", 3, "A"),
            ],
        )];

        let answer = collate(&citations);
        assert_eq!(answer.output, "Text<sup>[1]</sup><sup>[1]</sup>");
        assert_eq!(answer.reviews.len(), 1);
    }

    #[test]
    fn test_numbers_follow_first_appearance_order() {
        let citations = vec![
            citation(
                "One",
                vec![
                    reference("s3://r/b.txt", 2, "B"),
                    reference("s3://r/a.txt", 1, "A"),
                ],
            ),
            citation(
                "Two",
                vec![
                    reference("s3://r/c.txt", 3, "C"),
                    reference("s3://r/b.txt", 2, "B"),
                ],
            ),
        ];

        let answer = collate(&citations);
        assert_eq!(
            answer.output,
            "One<sup>[1]</sup><sup>[2]</sup>Two<sup>[3]</sup><sup>[1]</sup>"
        );
        assert_eq!(answer.reviews, vec!["⭐️⭐️ B", "⭐️ A", "⭐️⭐️⭐️ C"]);
    }

    #[test]
    fn test_citation_without_sources_contributes_text_only() {
        let citations = vec![
            citation("No sources here. ", vec![]),
            citation("Backed.", vec![reference("s3://r/a.txt", 5, "A")]),
        ];

        let answer = collate(&citations);
        assert_eq!(answer.output, "No sources here. Backed.<sup>[1]</sup>");
        assert_eq!(answer.reviews.len(), 1);
    }

    #[test]
    fn test_out_of_range_stars_are_not_validated() {
        let citations = vec![citation(
            "Text",
            vec![
                reference("s3://r/zero.txt", 0, "zero"),
                reference("s3://r/neg.txt", -2, "negative"),
                reference("s3://r/many.txt", 7, "seven"),
            ],
        )];

        let answer = collate(&citations);
        assert_eq!(
            answer.reviews,
            vec![" zero", " negative", "⭐️⭐️⭐️⭐️⭐️⭐️⭐️ seven"]
        );
    }
}
