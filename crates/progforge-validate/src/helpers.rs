use progforge_model::{DeliveryPattern, Modality, Module, StageModuleRef};

/// Sum of credits for the modules a stage references. Dangling references
/// contribute zero.
#[must_use]
pub fn sum_stage_credits(all_modules: &[Module], stage_modules: &[StageModuleRef]) -> f64 {
    stage_modules
        .iter()
        .filter_map(|entry| {
            all_modules
                .iter()
                .find(|m| m.id == entry.module_id)
                .map(|m| m.credits)
        })
        .sum()
}

#[must_use]
pub fn sum_pattern(pattern: &DeliveryPattern) -> f64 {
    pattern.sync_online_pct + pattern.async_directed_pct + pattern.on_campus_pct
}

/// Canonical starting pattern per modality, used wherever a version has a
/// selected modality but no stored pattern yet.
#[must_use]
pub const fn default_pattern_for(modality: Modality) -> DeliveryPattern {
    match modality {
        Modality::F2f => DeliveryPattern::new(0.0, 0.0, 100.0),
        Modality::Online => DeliveryPattern::new(40.0, 60.0, 0.0),
        Modality::Blended => DeliveryPattern::new(30.0, 40.0, 30.0),
    }
}
