use progforge_model::Programme;
use progforge_validate::{validate_programme, Flag, Severity, WizardStep};

fn find<'a>(flags: &'a [Flag], message: &str) -> Option<&'a Flag> {
    flags.iter().find(|f| f.message == message)
}

#[test]
fn blank_title_is_an_error_routed_to_identity() {
    let mut programme = Programme::new("   ");
    programme.nfq_level = 8;
    let flags = validate_programme(&programme);
    let flag = find(&flags, "Programme title is missing.").expect("title flag");
    assert_eq!(flag.severity, Severity::Error);
    assert_eq!(flag.step, WizardStep::Identity);
}

#[test]
fn nfq_level_zero_reads_as_missing() {
    let programme = Programme::new("BSc Computing");
    let flags = validate_programme(&programme);
    assert!(find(&flags, "NFQ level is missing.").is_some());
    assert!(find(&flags, "NFQ level must be between 6 and 9.").is_none());
}

#[test]
fn nfq_level_out_of_range_swaps_missing_for_range_error() {
    for level in [1, 5, 10, 11] {
        let mut programme = Programme::new("BSc Computing");
        programme.nfq_level = level;
        let flags = validate_programme(&programme);
        assert!(
            find(&flags, "NFQ level must be between 6 and 9.").is_some(),
            "level {level} should be rejected"
        );
        assert!(find(&flags, "NFQ level is missing.").is_none());
    }
}

#[test]
fn nfq_level_in_range_produces_no_nfq_flags() {
    for level in 6..=9 {
        let mut programme = Programme::new("BSc Computing");
        programme.nfq_level = level;
        let flags = validate_programme(&programme);
        assert!(find(&flags, "NFQ level is missing.").is_none());
        assert!(find(&flags, "NFQ level must be between 6 and 9.").is_none());
    }
}

#[test]
fn blank_award_type_is_advisory_only() {
    let mut programme = Programme::new("BSc Computing");
    programme.nfq_level = 8;
    let flags = validate_programme(&programme);
    let flag = find(&flags, "Award type is missing.").expect("award type flag");
    assert_eq!(flag.severity, Severity::Warn);
    assert_eq!(flag.step, WizardStep::Identity);

    programme.award_type = "Honours Bachelor Degree".to_string();
    let flags = validate_programme(&programme);
    assert!(find(&flags, "Award type is missing.").is_none());
}
