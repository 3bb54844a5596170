use super::*;
use pretty_assertions::assert_eq;

#[test]
fn string_enum_members_and_docs() {
    let file = sample();
    let color = enumeration(&file, "Color");
    assert!(color.is_exported);
    assert!(!color.is_const);
    assert!(!color.is_declare);
    assert_eq!(description(color.doc_comment.as_ref()), "Primary colors.");
    assert_eq!(names(&color.members), vec!["RED", "GREEN", "BLUE"]);

    let red = find_by_name(&color.members, "RED");
    assert_eq!(red.value.as_deref(), Some("\"red\""));
    assert!(!red.is_computed_value);
    assert_eq!(description(red.doc_comment.as_ref()), "Red color");

    let green = find_by_name(&color.members, "GREEN");
    assert!(green.doc_comment.is_none());

    let blue = find_by_name(&color.members, "BLUE");
    assert_eq!(description(blue.doc_comment.as_ref()), "Blue color");
}

#[test]
fn const_enum_ordinals() {
    let file = sample();
    let direction = enumeration(&file, "Direction");
    assert!(direction.is_const);
    assert!(!direction.is_exported);
    assert_eq!(
        description(direction.doc_comment.as_ref()),
        "Cardinal directions."
    );
    for member in &direction.members {
        assert_eq!(member.value, None);
        assert!(!member.is_computed_value);
    }
}

#[test]
fn declare_enum_members_have_no_value() {
    let file = sample();
    let external = enumeration(&file, "ExternalEnum");
    assert!(external.is_declare);
    assert!(external.is_exported);
    assert!(external.doc_comment.is_none());
    assert_eq!(names(&external.members), vec!["FIRST", "SECOND"]);
    assert!(external.members.iter().all(|m| m.value.is_none()));
}

#[test]
fn computed_members() {
    let file = sample();
    let permission = enumeration(&file, "Permission");
    let computed: Vec<(&str, bool)> = permission
        .members
        .iter()
        .map(|m| (m.name.as_str(), m.is_computed_value))
        .collect();
    assert_eq!(
        computed,
        vec![("READ", true), ("WRITE", true), ("ADMIN", true), ("NONE", false)]
    );
    assert_eq!(
        find_by_name(&permission.members, "ADMIN").value.as_deref(),
        Some("READ | WRITE")
    );
}

#[test]
fn boolean_and_negative_values() {
    let file = parse_and_extract("enum Flags { On = true, Off = false, Neg = -1 }");
    let flags = enumeration(&file, "Flags");
    let computed: Vec<bool> = flags.members.iter().map(|m| m.is_computed_value).collect();
    assert_eq!(computed, vec![false, false, true]);
}
