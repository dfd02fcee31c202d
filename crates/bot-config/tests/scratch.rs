use bot_config::ScratchDir;

#[test]
fn scratch_dir_is_removed_on_drop() {
    let parent = tempfile::tempdir().unwrap();
    let scratch = ScratchDir::init_in(parent.path()).unwrap();
    let path = scratch.path().to_path_buf();

    assert!(path.is_dir());
    assert!(path.starts_with(parent.path()));

    drop(scratch);
    assert!(!path.exists());
}

#[test]
fn subdir_names_are_sanitized() {
    let parent = tempfile::tempdir().unwrap();
    let scratch = ScratchDir::init_in(parent.path()).unwrap();

    let sub = scratch.subdir("some user/../save 1").unwrap();
    assert!(sub.is_dir());
    assert_eq!(sub.parent(), Some(scratch.path()));
    assert_eq!(sub.file_name().unwrap(), "some_user__save_1");

    let fallback = scratch.subdir("???").unwrap();
    assert_eq!(fallback.file_name().unwrap(), "no_name");
}
