//! The identifier matching rule shared by the match engine and the dedup cache

/// Decide whether a stored identifier pair corresponds to an incoming one.
///
/// The rule is a logical OR over the two identifier kinds with exact,
/// case-sensitive string equality:
///
/// - the study UIDs are equal and the incoming study UID is non-empty, or
/// - the accession numbers are equal and the incoming accession number is
///   non-empty.
///
/// The non-empty guard is on the incoming side: an incoming record that
/// carries only an accession number must never match a candidate purely
/// because both study UIDs happen to be empty.
///
/// # Examples
///
/// ```
/// use wlpurge_domain::identifiers_match;
///
/// assert!(identifiers_match("1.2.3", "", "1.2.3", "ACC9"));
/// assert!(identifiers_match("", "ACC9", "1.2.3", "ACC9"));
/// assert!(!identifiers_match("", "", "", ""));
/// assert!(!identifiers_match("1.2.3", "", "9.9.9", ""));
/// ```
pub fn identifiers_match(
    incoming_study: &str,
    incoming_accession: &str,
    candidate_study: &str,
    candidate_accession: &str,
) -> bool {
    (!incoming_study.is_empty() && incoming_study == candidate_study)
        || (!incoming_accession.is_empty() && incoming_accession == candidate_accession)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: an all-empty incoming pair matches nothing.
        #[test]
        fn test_empty_incoming_matches_nothing(study in ".*", accession in ".*") {
            prop_assert!(!identifiers_match("", "", &study, &accession));
        }

        /// Property: the rule is reflexive for any non-empty study UID.
        #[test]
        fn test_reflexive_on_study(study in ".+") {
            prop_assert!(identifiers_match(&study, "", &study, ""));
        }

        /// Property: equality on either non-empty identifier is sufficient.
        #[test]
        fn test_or_semantics(study in ".+", accession in ".+", other in ".*") {
            prop_assert!(identifiers_match(&study, &accession, &study, &other));
            prop_assert!(identifiers_match(&study, &accession, &other, &accession));
        }
    }
}
