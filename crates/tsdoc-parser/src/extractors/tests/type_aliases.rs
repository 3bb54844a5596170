use super::*;
use pretty_assertions::assert_eq;

#[test]
fn exported_union_alias() {
    let file = sample();
    let id = type_alias(&file, "Id");
    assert!(id.is_exported);
    assert_eq!(id.type_definition, "string | number");
    assert!(id.type_parameters.is_empty());
    assert_eq!(description(id.doc_comment.as_ref()), "Identifier type.");
}

#[test]
fn generic_alias() {
    let file = sample();
    let mapper = type_alias(&file, "Mapper");
    assert!(!mapper.is_exported);
    assert_eq!(mapper.type_definition, "(value: In) => Out");
    assert_eq!(
        mapper.type_parameters,
        vec!["In".to_string(), "Out = In".to_string()]
    );
    assert_eq!(
        description(mapper.doc_comment.as_ref()),
        "Maps one value to another."
    );
}
