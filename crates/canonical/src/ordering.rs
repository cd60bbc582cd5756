use std::cmp::Ordering;

/// Orders two dotted/colon-delimited code strings by numeric segment value,
/// so `3601.2` sorts before `3601.10` where plain string order would not.
///
/// Both strings split on `.` and `:`; segments compare as base-10 integers
/// with missing or non-numeric segments counting as `0`. The first unequal
/// pair decides. When every compared pair is numerically equal the codes
/// are equal, regardless of any remaining textual difference: `10A` and
/// `10B` compare equal. Callers that need a total order over such inputs
/// must apply their own tiebreak.
///
/// ```rust
/// use std::cmp::Ordering;
/// use canonical::compare_codes;
///
/// assert_eq!(compare_codes("3601.2", "3601.10"), Ordering::Less);
/// assert_eq!(compare_codes("3601.001:04", "3601.001:4"), Ordering::Equal);
/// ```
pub fn compare_codes(a: &str, b: &str) -> Ordering {
    let a_segments: Vec<&str> = a.split(['.', ':']).collect();
    let b_segments: Vec<&str> = b.split(['.', ':']).collect();
    let len = a_segments.len().max(b_segments.len());
    for i in 0..len {
        let left = segment_value(a_segments.get(i).copied());
        let right = segment_value(b_segments.get(i).copied());
        match left.cmp(&right) {
            Ordering::Equal => continue,
            unequal => return unequal,
        }
    }
    Ordering::Equal
}

/// Numeric value of one segment. Missing and non-numeric segments are 0.
fn segment_value(segment: Option<&str>) -> u64 {
    segment
        .map(str::trim)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0)
}

/// Stable in-place natural sort for downstream listings of codes/systems.
pub fn sort_codes(codes: &mut [String]) {
    codes.sort_by(|a, b| compare_codes(a, b));
}
