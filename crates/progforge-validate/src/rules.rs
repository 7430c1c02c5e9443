use crate::flag::{Flag, WizardStep};
use crate::helpers::{sum_pattern, sum_stage_credits};
use progforge_model::{ProctoredExams, Programme};
use std::collections::BTreeSet;

/// Walks the programme and returns every finding, in rule-evaluation order:
/// identity, credits/structure, electives, versions/stages, outcomes/mapping.
/// Messages are shown verbatim in the flags panel and asserted on in tests.
#[must_use]
pub fn validate_programme(programme: &Programme) -> Vec<Flag> {
    let mut flags = Vec::new();
    identity_flags(programme, &mut flags);
    structure_flags(programme, &mut flags);
    version_flags(programme, &mut flags);
    outcome_flags(programme, &mut flags);
    flags
}

fn identity_flags(programme: &Programme, flags: &mut Vec<Flag>) {
    if programme.title.trim().is_empty() {
        flags.push(Flag::error(
            "Programme title is missing.",
            WizardStep::Identity,
        ));
    }
    if programme.nfq_level == 0 {
        flags.push(Flag::error("NFQ level is missing.", WizardStep::Identity));
    } else if !(6..=9).contains(&programme.nfq_level) {
        flags.push(Flag::error(
            "NFQ level must be between 6 and 9.",
            WizardStep::Identity,
        ));
    }
    if programme.award_type.trim().is_empty() {
        flags.push(Flag::warn("Award type is missing.", WizardStep::Identity));
    }
}

fn structure_flags(programme: &Programme, flags: &mut Vec<Flag>) {
    if programme.total_credits <= 0.0 {
        flags.push(Flag::error(
            "Total programme credits are missing/zero.",
            WizardStep::Structure,
        ));
    }

    let sum_credits: f64 = programme.modules.iter().map(|m| m.credits).sum();
    let mandatory_credits: f64 = programme
        .modules
        .iter()
        .filter(|m| !m.is_elective)
        .map(|m| m.credits)
        .sum();

    if programme.elective_definitions.is_empty() {
        // Traditional all-mandatory reconciliation.
        if programme.total_credits > 0.0 && sum_credits != programme.total_credits {
            flags.push(Flag::error(
                format!(
                    "Credits mismatch: totalCredits={} but modules sum to {}.",
                    programme.total_credits, sum_credits
                ),
                WizardStep::Structure,
            ));
        }
        return;
    }

    // With electives the traditional check is replaced by per-definition and
    // per-group reconciliation.
    let mut group_memberships: Vec<(String, Vec<String>)> = Vec::new();

    for (def_index, definition) in programme.elective_definitions.iter().enumerate() {
        let def_label = definition.display_label(def_index);
        if definition.groups.is_empty() {
            flags.push(Flag::warn(
                format!("{def_label}: no groups defined (students need at least one option)."),
                WizardStep::Identity,
            ));
        }
        if definition.credits == 0.0 && !definition.groups.is_empty() {
            flags.push(Flag::warn(
                format!("{def_label}: has groups but no credit value set."),
                WizardStep::Identity,
            ));
        }

        for (group_index, group) in definition.groups.iter().enumerate() {
            let full_label = format!("{def_label} → {}", group.display_label(group_index));
            if group.module_ids.is_empty() {
                flags.push(Flag::warn(
                    format!("{full_label}: no modules assigned."),
                    WizardStep::Electives,
                ));
            } else {
                let mut group_credits = 0.0_f64;
                let mut non_elective_count = 0_usize;
                for module_id in &group.module_ids {
                    if let Some(module) = programme.module(module_id) {
                        group_credits += module.credits;
                        if !module.is_elective {
                            non_elective_count += 1;
                        }
                    }
                    if let Some(position) = group_memberships
                        .iter()
                        .position(|(id, _)| id == module_id)
                    {
                        group_memberships[position].1.push(full_label.clone());
                    } else {
                        group_memberships.push((module_id.clone(), vec![full_label.clone()]));
                    }
                }
                if non_elective_count > 0 {
                    flags.push(Flag::warn(
                        format!("{full_label}: contains {non_elective_count} mandatory module(s)."),
                        WizardStep::Electives,
                    ));
                }
                if group_credits != definition.credits {
                    flags.push(Flag::warn(
                        format!(
                            "{full_label}: module credits ({}) don't match definition requirement ({}).",
                            group_credits, definition.credits
                        ),
                        WizardStep::Electives,
                    ));
                }
            }
        }
    }

    for (module_id, labels) in &group_memberships {
        if labels.len() > 1 {
            let handle = programme
                .module(module_id)
                .map_or(module_id.as_str(), |m| m.display_handle());
            flags.push(Flag::warn(
                format!(
                    "Module \"{handle}\" is assigned to {} groups: {}.",
                    labels.len(),
                    labels.join(", ")
                ),
                WizardStep::Electives,
            ));
        }
    }

    let definition_credits: f64 = programme
        .elective_definitions
        .iter()
        .map(|d| d.credits)
        .sum();
    if definition_credits > 0.0
        && mandatory_credits + definition_credits != programme.total_credits
    {
        flags.push(Flag::warn(
            format!(
                "Credit check: mandatory ({}) + elective definitions ({}) = {}, but programme total is {}.",
                mandatory_credits,
                definition_credits,
                mandatory_credits + definition_credits,
                programme.total_credits
            ),
            WizardStep::Structure,
        ));
    }
}

fn version_flags(programme: &Programme, flags: &mut Vec<Flag>) {
    if programme.versions.is_empty() {
        flags.push(Flag::error(
            "At least one Programme Version is required (e.g., FT/PT/Online).",
            WizardStep::Versions,
        ));
        return;
    }

    let mut seen_labels: BTreeSet<String> = BTreeSet::new();
    for (index, version) in programme.versions.iter().enumerate() {
        let prefix = format!("Version {}", index + 1);

        if version.label.trim().is_empty() {
            flags.push(Flag::warn(
                format!("{prefix}: label is missing."),
                WizardStep::Versions,
            ));
        } else {
            let normalized = version.label.trim().to_lowercase();
            if seen_labels.contains(&normalized) {
                flags.push(Flag::warn(
                    format!("{prefix}: duplicate label (\"{}\").", version.label),
                    WizardStep::Versions,
                ));
            }
            seen_labels.insert(normalized);
        }

        if let Some(modality) = version.delivery_modality {
            match version.delivery_patterns.get(&modality) {
                None => flags.push(Flag::error(
                    format!("{prefix}: missing delivery pattern for {modality}."),
                    WizardStep::Versions,
                )),
                Some(pattern) => {
                    let total = sum_pattern(pattern);
                    if total != 100.0 {
                        flags.push(Flag::error(
                            format!(
                                "{prefix}: {modality} delivery pattern must total 100% (currently {total}%)."
                            ),
                            WizardStep::Versions,
                        ));
                    }
                }
            }
        }

        if version.online_proctored_exams == ProctoredExams::Yes
            && version.online_proctored_exams_notes.trim().is_empty()
        {
            flags.push(Flag::warn(
                format!("{prefix}: online proctored exams marked YES but notes are empty."),
                WizardStep::Versions,
            ));
        }

        if version.target_cohort_size == 0 {
            flags.push(Flag::warn(
                format!("{prefix}: cohort size is missing/zero."),
                WizardStep::Versions,
            ));
        }

        if version.stages.is_empty() {
            flags.push(Flag::warn(
                format!("{prefix}: no stages defined yet."),
                WizardStep::Stages,
            ));
            continue;
        }

        let stage_target_sum: f64 = version.stages.iter().map(|s| s.credits_target).sum();
        if programme.total_credits > 0.0
            && stage_target_sum > 0.0
            && stage_target_sum != programme.total_credits
        {
            flags.push(Flag::warn(
                format!(
                    "{prefix}: sum of stage credit targets ({stage_target_sum}) does not match programme total credits ({}).",
                    programme.total_credits
                ),
                WizardStep::Stages,
            ));
        }

        for (stage_index, stage) in version.stages.iter().enumerate() {
            let stage_name = stage.display_name(stage_index);
            let credit_sum = sum_stage_credits(&programme.modules, &stage.modules);
            if stage.credits_target > 0.0 && credit_sum != stage.credits_target {
                flags.push(Flag::warn(
                    format!(
                        "{prefix}: {stage_name} module credits sum to {credit_sum} but target is {}.",
                        stage.credits_target
                    ),
                    WizardStep::Stages,
                ));
            }
            if stage.exit_award.enabled && stage.exit_award.award_title.trim().is_empty() {
                flags.push(Flag::warn(
                    format!(
                        "{prefix}: {stage_name} has an exit award enabled but no award title entered."
                    ),
                    WizardStep::Stages,
                ));
            }
        }
    }
}

fn outcome_flags(programme: &Programme, flags: &mut Vec<Flag>) {
    if programme.plos.len() < 6 {
        flags.push(Flag::warn(
            "PLOs: fewer than 6 (usually aim for ~6–12).",
            WizardStep::Outcomes,
        ));
    }
    if programme.plos.len() > 12 {
        flags.push(Flag::warn(
            "PLOs: more than 12 (consider tightening).",
            WizardStep::Outcomes,
        ));
    }

    let modules_without_mimlos = programme
        .modules
        .iter()
        .filter(|m| m.mimlos.is_empty())
        .count();
    if modules_without_mimlos > 0 {
        flags.push(Flag::warn(
            format!("Some modules have no MIMLOs yet ({modules_without_mimlos})."),
            WizardStep::Mimlos,
        ));
    }

    let unmapped_plos = programme
        .plos
        .iter()
        .filter(|plo| {
            programme
                .plo_to_mimlos
                .get(&plo.id)
                .is_none_or(|mimlos| mimlos.is_empty())
        })
        .count();
    if unmapped_plos > 0 {
        flags.push(Flag::error(
            format!("Some PLOs are not mapped to any MIMLO ({unmapped_plos})."),
            WizardStep::Mapping,
        ));
    }
}
