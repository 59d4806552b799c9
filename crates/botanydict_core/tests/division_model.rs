use botanydict_core::Division;

#[test]
fn new_division_is_unpersisted() {
    let division = Division::new("PLN", "Plants", "");

    assert_eq!(division.id, None);
    assert!(!division.is_persisted());
    assert_eq!(division.code, "PLN");
    assert_eq!(division.name, "Plants");
    assert_eq!(division.comments, "");
}

#[test]
fn with_id_carries_external_identity() {
    let division = Division::with_id(4, "PLN", "Plants", "plants and fungi");

    assert_eq!(division.id, Some(4));
    assert!(division.is_persisted());
}

#[test]
fn rename_overwrites_previous_name() {
    let mut division = Division::with_id(4, "PLN", "Plants", "");

    division.rename("Plants and Fungi");

    assert_eq!(division.name, "Plants and Fungi");
    assert_eq!(division.code, "PLN");
}

#[test]
fn set_comments_overwrites_previous_comments() {
    let mut division = Division::new("UNA", "Unannotated", "no species nodes");

    division.set_comments("no species nodes; plastid sequences");

    assert_eq!(division.comments, "no species nodes; plastid sequences");
}

#[test]
fn serialization_uses_external_schema_field_names() {
    let division = Division::with_id(7, "FAM", "Families", "note");

    let json = serde_json::to_value(&division).unwrap();
    assert_eq!(json["division_id"], 7);
    assert_eq!(json["division_code"], "FAM");
    assert_eq!(json["division_name"], "Families");
    assert_eq!(json["comments"], "note");

    let decoded: Division = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, division);
}
