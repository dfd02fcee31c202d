use models::BuiltInSave;

#[test]
fn parses_line_with_description() {
    let save =
        BuiltInSave::from_line("CUSA12345 SAVEDATA00 gta_100   fully   completed story")
            .unwrap();

    assert_eq!(save.title_id(), "CUSA12345");
    assert_eq!(save.save_dir(), "SAVEDATA00");
    assert_eq!(save.name(), "gta_100");
    assert_eq!(save.description(), "fully completed story");
    assert_eq!(save.location(), ("CUSA12345", "SAVEDATA00"));
}

#[test]
fn description_may_be_empty() {
    let save: BuiltInSave = "CUSA00001 DATA0001 blank".parse().unwrap();
    assert_eq!(save.description(), "");
    assert_eq!(save.to_string(), "CUSA00001 DATA0001 blank");
}

#[test]
fn display_rebuilds_normalized_line() {
    let save = BuiltInSave::from_line("  CUSA12345\tSAVEDATA00 name  a  b ").unwrap();
    assert_eq!(save.to_string(), "CUSA12345 SAVEDATA00 name a b");
}

#[test]
fn rejects_short_lines() {
    assert!(BuiltInSave::from_line("").is_err());
    assert!(BuiltInSave::from_line("CUSA12345").is_err());
    let err = BuiltInSave::from_line("CUSA12345 SAVEDATA00").unwrap_err();
    assert!(err.to_string().contains("TITLEID SAVEDIR unique_name"));
}

#[test]
fn rejects_bad_title_id() {
    let err = BuiltInSave::from_line("FAKE78699 SAVEDATA00 name").unwrap_err();
    assert!(err.to_string().contains("FAKE78699"));
}

#[test]
fn serializes_fields_by_name() {
    let save = BuiltInSave::from_line("CUSA12345 SAVEDATA00 name some text").unwrap();
    let json = serde_json::to_value(&save).unwrap();
    assert_eq!(json["title_id"], "CUSA12345");
    assert_eq!(json["save_dir"], "SAVEDATA00");
    assert_eq!(json["description"], "some text");
}

#[test]
fn rebuilding_from_display_goes_through_line_checks() {
    let save = BuiltInSave::from_line("CUSA12345 SAVEDATA00 name some text").unwrap();
    let rebuilt: BuiltInSave = save.to_string().parse().unwrap();
    assert_eq!(rebuilt, save);

    assert!("NOTCUSA01 SAVEDATA00 name".parse::<BuiltInSave>().is_err());
}
