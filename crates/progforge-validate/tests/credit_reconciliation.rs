use progforge_model::{ElectiveDefinition, ElectiveGroup, Module, Programme};
use progforge_validate::{validate_programme, Flag, Severity, WizardStep};

fn base_programme(total_credits: f64) -> Programme {
    let mut programme = Programme::new("BSc Computing");
    programme.nfq_level = 8;
    programme.award_type = "Honours Bachelor Degree".to_string();
    programme.total_credits = total_credits;
    programme
}

fn elective_module(id: &str, code: &str, credits: f64) -> Module {
    let mut module = Module::new(id, code, "", credits);
    module.is_elective = true;
    module
}

fn find<'a>(flags: &'a [Flag], message: &str) -> Option<&'a Flag> {
    flags.iter().find(|f| f.message == message)
}

fn find_containing<'a>(flags: &'a [Flag], fragment: &str) -> Option<&'a Flag> {
    flags.iter().find(|f| f.message.contains(fragment))
}

#[test]
fn zero_total_credits_is_an_error() {
    let programme = base_programme(0.0);
    let flags = validate_programme(&programme);
    let flag = find(&flags, "Total programme credits are missing/zero.").expect("credits flag");
    assert_eq!(flag.severity, Severity::Error);
    assert_eq!(flag.step, WizardStep::Structure);
}

#[test]
fn module_sum_mismatch_without_electives_is_an_error() {
    let mut programme = base_programme(90.0);
    programme.modules.push(Module::new("m1", "C1", "", 30.0));
    programme.modules.push(Module::new("m2", "C2", "", 30.0));
    let flags = validate_programme(&programme);
    let flag = find(&flags, "Credits mismatch: totalCredits=90 but modules sum to 60.")
        .expect("mismatch flag");
    assert_eq!(flag.severity, Severity::Error);
    assert_eq!(flag.step, WizardStep::Structure);
}

#[test]
fn matching_module_sum_produces_no_mismatch() {
    let mut programme = base_programme(60.0);
    programme.modules.push(Module::new("m1", "C1", "", 30.0));
    programme.modules.push(Module::new("m2", "C2", "", 30.0));
    let flags = validate_programme(&programme);
    assert!(find_containing(&flags, "Credits mismatch").is_none());
}

#[test]
fn elective_definitions_replace_the_traditional_check() {
    let mut programme = base_programme(90.0);
    programme.modules.push(Module::new("m1", "C1", "", 30.0));
    programme
        .elective_definitions
        .push(ElectiveDefinition::new("def-1", "Streams", 10.0));
    let flags = validate_programme(&programme);
    assert!(find_containing(&flags, "Credits mismatch").is_none());
}

#[test]
fn definition_without_groups_warns_with_its_label() {
    let mut programme = base_programme(90.0);
    let mut definition = ElectiveDefinition::new("def-1", "Streams", 10.0);
    definition.code = "EL1".to_string();
    programme.elective_definitions.push(definition);
    programme
        .elective_definitions
        .push(ElectiveDefinition::new("def-2", "", 10.0));

    let flags = validate_programme(&programme);
    let flag = find(
        &flags,
        "[EL1] Streams: no groups defined (students need at least one option).",
    )
    .expect("labelled definition flag");
    assert_eq!(flag.severity, Severity::Warn);
    assert_eq!(flag.step, WizardStep::Identity);
    assert!(find(
        &flags,
        "Definition 2: no groups defined (students need at least one option)."
    )
    .is_some());
}

#[test]
fn definition_with_groups_but_no_credits_warns() {
    let mut programme = base_programme(90.0);
    let mut definition = ElectiveDefinition::new("def-1", "Streams", 0.0);
    definition.groups.push(ElectiveGroup::new("grp-1", "A"));
    programme.elective_definitions.push(definition);
    let flags = validate_programme(&programme);
    assert!(find(&flags, "Streams: has groups but no credit value set.").is_some());
}

#[test]
fn empty_group_warns_on_the_electives_step() {
    let mut programme = base_programme(90.0);
    let mut definition = ElectiveDefinition::new("def-1", "Streams", 10.0);
    definition.groups.push(ElectiveGroup::new("grp-1", ""));
    programme.elective_definitions.push(definition);
    let flags = validate_programme(&programme);
    let flag = find(&flags, "Streams → Group 1: no modules assigned.").expect("group flag");
    assert_eq!(flag.step, WizardStep::Electives);
}

#[test]
fn group_credit_sum_must_match_definition_requirement() {
    let mut programme = base_programme(90.0);
    programme.modules.push(elective_module("m1", "E1", 10.0));
    programme.modules.push(elective_module("m2", "E2", 5.0));
    let mut definition = ElectiveDefinition::new("def-1", "Streams", 10.0);
    let mut group = ElectiveGroup::new("grp-1", "Data");
    group.module_ids = vec!["m1".to_string(), "m2".to_string()];
    definition.groups.push(group);
    programme.elective_definitions.push(definition);

    let flags = validate_programme(&programme);
    assert!(find(
        &flags,
        "Streams → Data: module credits (15) don't match definition requirement (10)."
    )
    .is_some());
}

#[test]
fn mandatory_modules_inside_a_group_are_reported() {
    let mut programme = base_programme(90.0);
    programme.modules.push(Module::new("m1", "C1", "", 10.0));
    let mut definition = ElectiveDefinition::new("def-1", "Streams", 10.0);
    let mut group = ElectiveGroup::new("grp-1", "Data");
    group.module_ids = vec!["m1".to_string()];
    definition.groups.push(group);
    programme.elective_definitions.push(definition);

    let flags = validate_programme(&programme);
    assert!(find(&flags, "Streams → Data: contains 1 mandatory module(s).").is_some());
}

#[test]
fn module_shared_between_groups_is_reported_once_with_all_labels() {
    let mut programme = base_programme(90.0);
    programme.modules.push(elective_module("m1", "COMP101", 10.0));
    let mut definition = ElectiveDefinition::new("def-1", "Streams", 10.0);
    let mut group_a = ElectiveGroup::new("grp-1", "Data");
    group_a.module_ids = vec!["m1".to_string()];
    let mut group_b = ElectiveGroup::new("grp-2", "Software");
    group_b.module_ids = vec!["m1".to_string()];
    definition.groups.push(group_a);
    definition.groups.push(group_b);
    programme.elective_definitions.push(definition);

    let flags = validate_programme(&programme);
    let flag = find(
        &flags,
        "Module \"COMP101\" is assigned to 2 groups: Streams → Data, Streams → Software.",
    )
    .expect("duplicate membership flag");
    assert_eq!(flag.step, WizardStep::Electives);
    assert_eq!(
        flags
            .iter()
            .filter(|f| f.message.contains("is assigned to"))
            .count(),
        1
    );
}

#[test]
fn mandatory_plus_definition_credits_must_reach_the_programme_total() {
    let mut programme = base_programme(90.0);
    programme.modules.push(Module::new("m1", "C1", "", 60.0));
    programme
        .elective_definitions
        .push(ElectiveDefinition::new("def-1", "Streams", 20.0));

    let flags = validate_programme(&programme);
    let flag = find(
        &flags,
        "Credit check: mandatory (60) + elective definitions (20) = 80, but programme total is 90.",
    )
    .expect("credit check flag");
    assert_eq!(flag.severity, Severity::Warn);
    assert_eq!(flag.step, WizardStep::Structure);
}

#[test]
fn consistent_elective_structure_is_quiet() {
    let mut programme = base_programme(70.0);
    programme.modules.push(Module::new("m1", "C1", "", 60.0));
    programme.modules.push(elective_module("m2", "E1", 10.0));
    programme.modules.push(elective_module("m3", "E2", 10.0));
    let mut definition = ElectiveDefinition::new("def-1", "Streams", 10.0);
    let mut group_a = ElectiveGroup::new("grp-1", "Data");
    group_a.module_ids = vec!["m2".to_string()];
    let mut group_b = ElectiveGroup::new("grp-2", "Software");
    group_b.module_ids = vec!["m3".to_string()];
    definition.groups.push(group_a);
    definition.groups.push(group_b);
    programme.elective_definitions.push(definition);

    let flags = validate_programme(&programme);
    assert!(flags
        .iter()
        .all(|f| f.step != WizardStep::Electives && f.step != WizardStep::Structure));
}
