//! Dotted version-string comparison.
//!
//! Decides whether the running extension is newer than the version whose
//! changelog the user last saw.

/// Returns true if `candidate` is strictly newer than `baseline`.
///
/// Versions are dot-separated non-negative integer components compared
/// numerically left to right; the shorter version is padded with zero
/// components, so `"1.1"` and `"1.1.0"` compare equal. Components that
/// fail to parse are treated as 0. Equal versions are not newer.
pub fn is_newer_version(candidate: &str, baseline: &str) -> bool {
    let parse = |v: &str| -> Vec<u64> {
        v.split('.')
            .map(|s| s.trim().parse().unwrap_or(0))
            .collect()
    };
    let c = parse(candidate);
    let b = parse(baseline);

    let len = c.len().max(b.len());
    for i in 0..len {
        let cv = c.get(i).copied().unwrap_or(0);
        let bv = b.get(i).copied().unwrap_or(0);
        if cv != bv {
            return cv > bv;
        }
    }
    false
}
