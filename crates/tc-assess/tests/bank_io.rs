use tc_assess::{
    AssessError, QuestionBank, builtin_bank, load_json, load_yaml, save_json, save_yaml,
};

#[test]
fn roundtrip_yaml_builtin_bank() {
    let bank = builtin_bank();
    let path = std::env::temp_dir().join("tc_assess_roundtrip_bank.yaml");

    save_yaml(&path, &bank).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(bank, loaded);
}

#[test]
fn roundtrip_json_builtin_bank() {
    let bank = builtin_bank();
    let path = std::env::temp_dir().join("tc_assess_roundtrip_bank.json");

    save_json(&path, &bank).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(bank, loaded);
}

#[test]
fn invalid_bank_is_not_loaded() {
    let path = std::env::temp_dir().join("tc_assess_invalid_bank.yaml");
    std::fs::write(
        &path,
        "items:\n  - id: 1\n    topic: hess\n    prompt: x\n    \
         key: { type: single_choice, index: 2 }\n",
    )
    .unwrap();

    let err = load_yaml(&path).unwrap_err();
    assert!(matches!(err, AssessError::Validation(_)));
}

#[test]
fn empty_bank_is_not_saved() {
    let bank = QuestionBank {
        title: "empty".into(),
        items: vec![],
    };
    let path = std::env::temp_dir().join("tc_assess_empty_bank.yaml");
    assert!(save_yaml(&path, &bank).is_err());
}
