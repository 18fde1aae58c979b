//! String similarity for fuzzy resolution.
//!
//! The default scorer is the Ratcliff/Obershelp "gestalt" ratio: find the
//! longest common block, recurse on the pieces to its left and right, and
//! report `2 * matched / (len(a) + len(b))`. Long shared runs therefore
//! count for more than the same number of scattered characters.

/// Scores two strings in `[0.0, 1.0]`.
pub trait SimilarityScorer {
    fn similarity(&self, a: &str, b: &str) -> f64;
}

impl<F> SimilarityScorer for F
where
    F: Fn(&str, &str) -> f64,
{
    fn similarity(&self, a: &str, b: &str) -> f64 {
        self(a, b)
    }
}

/// Case-insensitive Ratcliff/Obershelp scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceRatio;

impl SimilarityScorer for SequenceRatio {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        similarity(a, b)
    }
}

/// Ratcliff/Obershelp similarity of the lowercased inputs.
///
/// Two empty strings are identical and score `1.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_characters(&a, &b) as f64 / total as f64
}

#[derive(Debug, Clone, Copy)]
struct Block {
    a: usize,
    b: usize,
    len: usize,
}

/// Total size of all matching blocks.
fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut queue = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        let block = longest_match(a, b, alo, ahi, blo, bhi);
        if block.len == 0 {
            continue;
        }
        matched += block.len;
        if alo < block.a && blo < block.b {
            queue.push((alo, block.a, blo, block.b));
        }
        let (a_end, b_end) = (block.a + block.len, block.b + block.len);
        if a_end < ahi && b_end < bhi {
            queue.push((a_end, ahi, b_end, bhi));
        }
    }
    matched
}

/// Longest common block of `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Ties go to the block starting earliest in `a`, then earliest in `b`.
fn longest_match(a: &[char], b: &[char], alo: usize, ahi: usize, blo: usize, bhi: usize) -> Block {
    let mut best = Block {
        a: alo,
        b: blo,
        len: 0,
    };
    let width = bhi - blo;
    // run length of the match ending at (i - 1, j - 1), offset by one column
    let mut previous = vec![0usize; width + 1];
    let mut current = vec![0usize; width + 1];
    for i in alo..ahi {
        for j in blo..bhi {
            let col = j - blo + 1;
            if a[i] == b[j] {
                let run = previous[col - 1] + 1;
                current[col] = run;
                if run > best.len {
                    best = Block {
                        a: i + 1 - run,
                        b: j + 1 - run,
                        len: run,
                    };
                }
            } else {
                current[col] = 0;
            }
        }
        std::mem::swap(&mut previous, &mut current);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-4
    }

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(similarity("GBI", "GBI"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(similarity("abc", "xyz"), 0.0);
        assert_eq!(similarity("", "xyz"), 0.0);
    }

    #[test]
    fn ignores_case() {
        assert_eq!(similarity("TaftElectric", "taftelectric"), 1.0);
    }

    #[test]
    fn matches_reference_ratios() {
        assert!(close(similarity("abcd", "bcde"), 0.75));
        assert!(close(similarity("Taft Electric", "TaftElectric"), 0.96));
        assert!(close(
            similarity(
                "BluSky Restoration Contractors",
                "BluSky Restoration Contractors, LLC"
            ),
            0.923_077
        ));
        assert!(close(similarity("Acme", "Acme Co"), 0.727_273));
        assert!(close(
            similarity("Document Processing Error", "Document Processing Failures"),
            0.792_453
        ));
        assert!(close(
            similarity("Vendor Prediction Problem", "Incorrect Vendor Prediction"),
            0.653_846
        ));
    }

    #[test]
    fn long_runs_beat_scattered_characters() {
        // same four shared characters, in order vs reversed
        let contiguous = similarity("abcdxyz", "abcd");
        let scattered = similarity("dcbaxyz", "abcd");
        assert!(close(contiguous, 0.727_273));
        assert!(close(scattered, 0.181_818));
    }

    #[test]
    fn closures_are_scorers() {
        let fixed = |_: &str, _: &str| 0.42;
        assert_eq!(fixed.similarity("a", "b"), 0.42);
        assert_eq!(SequenceRatio.similarity("abcd", "bcde"), 0.75);
    }
}
