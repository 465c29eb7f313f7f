//! End-to-end synthesis tests over the public API.

use serde_json::json;
use typesynth::codegen::go::{go_default_value, go_literal};
use typesynth::prelude::*;

fn required(names: &[&str]) -> RequiredSet {
    names.iter().map(|n| (*n).to_string()).collect()
}

fn cellar() -> Design {
    let mut design = Design::new("cellar");
    let account = design
        .add_type(
            NamedType::user(
                "account",
                Object::new()
                    .field("id", Primitive::Integer)
                    .field("user_name", Primitive::String),
            )
            .with_required(["id"]),
        )
        .expect("account");
    design
        .add_type(
            NamedType::media(
                "bottle",
                "application/vnd.bottle+json",
                Object::new()
                    .field("owner", DataType::named(&account))
                    .field("ratings", DataType::map(Primitive::String, Primitive::Integer))
                    .field("type", Attribute::new(Primitive::String).required()),
            )
            .with_versions(["1.0"]),
        )
        .expect("bottle");
    design
}

#[test]
fn test_end_to_end_scenario() {
    let object: DataType = Object::new()
        .field("id", Attribute::new(Primitive::Integer).required())
        .field("tags", DataType::array(Primitive::String))
        .into();
    let def = go_type_def(&object, &RequiredSet::new(), false, "", 0, true).expect("def");
    assert_eq!(
        def,
        "struct {\n\
         \tID int `json:\"id\" xml:\"id\"`\n\
         \tTags []string `json:\"tags,omitempty\" xml:\"tags,omitempty\"`\n\
         }"
    );
}

#[test]
fn test_required_set_from_call_site() {
    let object: DataType = Object::new()
        .field("id", Primitive::Integer)
        .field("name", Primitive::String)
        .into();
    let def = go_type_def(&object, &required(&["id"]), false, "", 0, true).expect("def");
    assert!(def.contains("ID int `json:\"id\" xml:\"id\"`"));
    assert!(def.contains("Name string `json:\"name,omitempty\" xml:\"name,omitempty\"`"));
}

#[test]
fn test_field_order_ignores_insertion_order() {
    let forward: DataType = Object::new()
        .field("a", Primitive::String)
        .field("b", Primitive::String)
        .field("c", Primitive::String)
        .into();
    let backward: DataType = Object::new()
        .field("c", Primitive::String)
        .field("b", Primitive::String)
        .field("a", Primitive::String)
        .into();
    let forward_def = go_type_def(&forward, &RequiredSet::new(), false, "", 0, true).expect("def");
    let backward_def =
        go_type_def(&backward, &RequiredSet::new(), false, "", 0, true).expect("def");
    assert_eq!(forward_def, backward_def);

    let a = forward_def.find("\tA ").expect("a");
    let b = forward_def.find("\tB ").expect("b");
    let c = forward_def.find("\tC ").expect("c");
    assert!(a < b && b < c);
}

#[test]
fn test_identifier_special_cases() {
    assert_eq!(goify("ok", true), "OK");
    assert_eq!(goify("id", true), "ID");
    assert_eq!(goify("user_name", true), "UserName");
    assert_eq!(goify("_", true), "_v");
    assert_ne!(goify("type", false), "type");
    assert_ne!(goify("type", true), "type");
}

#[test]
fn test_indirection() {
    let design = cellar();
    let account = DataType::named(design.get_type("account").expect("account"));
    assert!(go_type_ref(&account, &RequiredSet::new(), 0)
        .expect("ref")
        .starts_with('*'));

    for direct in [
        DataType::from(Primitive::Integer),
        DataType::array(account.clone()),
        DataType::map(Primitive::String, account),
    ] {
        let r = go_type_ref(&direct, &RequiredSet::new(), 0).expect("ref");
        assert!(!r.starts_with('*'), "{r}");
    }
}

#[test]
fn test_array_element_matches_standalone_definition() {
    let elem = Object::new()
        .field("name", Attribute::new(Primitive::String).required())
        .field("size", Attribute::new(Primitive::Integer).forced_pointer());
    let standalone =
        go_type_def(&elem.clone().into(), &RequiredSet::new(), false, "", 0, true).expect("elem");
    let list = go_type_def(&DataType::array(elem), &RequiredSet::new(), false, "", 0, true)
        .expect("list");
    assert_eq!(list.strip_prefix("[]*"), Some(standalone.as_str()));
}

#[test]
fn test_map_keys_follow_indirection() {
    let design = cellar();
    let account = DataType::named(design.get_type("account").expect("account"));
    let by_account = DataType::map(account, Primitive::Integer);
    assert_eq!(
        go_type_ref(&by_account, &RequiredSet::new(), 0).expect("ref"),
        "map[*Account]int"
    );

    let key = Object::new().field("id", Attribute::new(Primitive::Integer).required());
    let standalone =
        go_type_def(&key.clone().into(), &RequiredSet::new(), false, "", 0, true).expect("key");
    let map = go_type_def(
        &DataType::map(key, Primitive::String),
        &RequiredSet::new(),
        false,
        "",
        0,
        true,
    )
    .expect("map");
    assert_eq!(map, format!("map[*{standalone}]string"));
}

#[test]
fn test_version_package_qualification() {
    let design = cellar();
    let generator = TypeGenerator::new(&design, RenderOptions::new().for_version("1.0", "app"));
    let output = generator.generate().expect("generate");
    assert!(output.contains("type Bottle struct {\n"));
    assert!(output.contains("\tOwner *app.Account\n"));
    assert!(output.contains("\tRatings map[string]int\n"));
    assert!(output.contains("\tType string\n"));
}

#[test]
fn test_default_package_generation_is_deterministic() {
    let design = cellar();
    let options = RenderOptions::new().json_tags(true);
    let first = TypeGenerator::new(&design, options.clone())
        .generate()
        .expect("first");
    let second = TypeGenerator::new(&design, options).generate().expect("second");
    assert_eq!(first, second);
    assert_eq!(
        first,
        "// Account user type.\n\
         type Account struct {\n\
         \tID int `json:\"id\" xml:\"id\"`\n\
         \tUserName string `json:\"user_name,omitempty\" xml:\"user_name,omitempty\"`\n\
         }\n"
    );
}

#[test]
fn test_collision_is_reported() {
    let object: DataType = Object::new()
        .field("user-name", Primitive::String)
        .field("username", Primitive::String)
        .into();
    let err = go_type_def(&object, &RequiredSet::new(), false, "", 0, false).expect_err("err");
    assert_eq!(
        err.to_string(),
        "fields 'user-name' and 'username' both map to identifier 'Username'"
    );
}

#[test]
fn test_native_types_and_defaults() {
    let design = cellar();
    let bottle = DataType::named(design.get_type("bottle").expect("bottle"));
    assert_eq!(go_native_type(&bottle), "map[string]interface{}");
    assert_eq!(
        go_native_type(&DataType::map(Primitive::String, Primitive::DateTime)),
        "map[string]time.Time"
    );

    let att = Attribute::new(DataType::array(Primitive::Integer)).with_default(json!([1, 2]));
    assert_eq!(go_default_value(&att).as_deref(), Some("[]int{1, 2}"));
    assert_eq!(go_literal(&json!([1, "a"])), "[]interface{}{1, \"a\"}");
}

#[test]
fn test_temp_counter_injected() {
    let counter = TempCounter::new();
    let names: Vec<_> = (0..3).map(|_| counter.tempvar()).collect();
    assert_eq!(names, vec!["tmp1", "tmp2", "tmp3"]);
}
