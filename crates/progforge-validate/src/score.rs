use progforge_model::Programme;

pub const COMPLETION_CHECK_COUNT: u32 = 10;

/// Coarse readiness score: ten independent checks, one unit each, rounded to
/// a whole percent. Deliberately not derived from `validate_programme` — the
/// two rule sets diverge (completion ignores duplicate labels, elective
/// consistency, and everything else flag-shaped).
#[must_use]
pub fn completion_percent(programme: &Programme) -> u8 {
    let checks = [
        !programme.title.trim().is_empty(),
        programme.nfq_level != 0,
        !programme.award_type.trim().is_empty(),
        !programme.school.trim().is_empty(),
        programme.total_credits > 0.0,
        !programme.modules.is_empty(),
        programme.plos.len() >= 6,
        !programme.plo_to_mimlos.is_empty(),
        !programme.versions.is_empty(),
        programme
            .versions
            .first()
            .is_some_and(|v| !v.stages.is_empty()),
    ];
    let done = checks.iter().filter(|&&passed| passed).count() as u32;
    let percent = (f64::from(done * 100) / f64::from(COMPLETION_CHECK_COUNT)).round();
    percent as u8
}
