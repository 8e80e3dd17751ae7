//! Seeded heading text for the window banner.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const KEYWORDS: [&str; 5] = ["Rust", "day", "number", "probability", "checker"];

const TEMPLATES: [&str; 5] = [
    "{0} Day Number Probability Checker",
    "{0} {1} Probability — Number Checker",
    "Smart {0} {2} Probability Checker",
    "{2} {1} {0} Probability Tool",
    "{0} {1} → {2}: Probability Checker",
];

/// Pick a heading for `seed`: one template filled with a shuffle of the keywords.
pub fn pick_heading(seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let template = TEMPLATES.choose(&mut rng).copied().unwrap_or(TEMPLATES[0]);

    let mut words = KEYWORDS;
    words.shuffle(&mut rng);

    template
        .replace("{0}", words[0])
        .replace("{1}", words[1])
        .replace("{2}", words[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_heading() {
        assert_eq!(pick_heading(42), pick_heading(42));
        assert_eq!(pick_heading(0), pick_heading(0));
    }

    #[test]
    fn keywords_are_each_used_at_most_once() {
        for seed in 0..200 {
            let heading = pick_heading(seed);
            for word in ["Rust", "checker"] {
                assert!(heading.matches(word).count() <= 1, "repeated {word}: {heading}");
            }
        }
    }

    #[test]
    fn placeholders_are_filled() {
        for seed in 0..200 {
            let heading = pick_heading(seed);
            assert!(!heading.contains('{'), "unfilled template: {heading}");
            assert!(heading.contains("Probability") || heading.contains("probability"));
        }
    }

    #[test]
    fn seeds_produce_variety() {
        let headings: std::collections::HashSet<String> = (0..200).map(pick_heading).collect();
        assert!(headings.len() > 5);
    }
}
