use {
    super::{ensure_output_dir, run},
    anyhow::Result,
    std::{collections::BTreeSet, fs},
};

fn file_names(dir: &std::path::Path) -> Result<BTreeSet<String>> {
    let mut names = BTreeSet::new();
    for entry in fs::read_dir(dir)? {
        names.insert(entry?.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

#[test]
fn creates_missing_directory_and_all_files() -> Result<()> {
    let root = tempfile::tempdir()?;
    let out = root.path().join("content").join("images");
    assert!(!out.exists());

    let written = run(&out)?;
    assert_eq!(written.len(), 4);
    assert!(out.is_dir());

    let expected = ["mbti_enfp.png", "mbti_infj.png", "mbti_intj.png", "mbti_entp.png"]
        .iter()
        .map(|s| s.to_string())
        .collect::<BTreeSet<_>>();
    assert_eq!(file_names(&out)?, expected);

    for path in &written {
        let img = image::open(path)?.to_rgb8();
        assert_eq!(img.dimensions(), (800, 1000));
    }
    Ok(())
}

#[test]
fn rerun_overwrites_with_same_bytes() -> Result<()> {
    let root = tempfile::tempdir()?;

    let first = run(root.path())?
        .iter()
        .map(fs::read)
        .collect::<Result<Vec<_>, _>>()?;
    let second = run(root.path())?
        .iter()
        .map(fs::read)
        .collect::<Result<Vec<_>, _>>()?;

    assert_eq!(first, second);
    assert_eq!(file_names(root.path())?.len(), 4);
    Ok(())
}

#[test]
fn existing_directory_is_fine() -> Result<()> {
    let root = tempfile::tempdir()?;
    ensure_output_dir(root.path())?;
    ensure_output_dir(root.path())?;
    Ok(())
}

#[test]
fn output_path_pointing_at_file_aborts() -> Result<()> {
    let root = tempfile::tempdir()?;
    let blocker = root.path().join("content");
    fs::write(&blocker, b"not a directory")?;

    let err = run(&blocker.join("images")).unwrap_err();
    assert!(format!("{:#}", err).contains("failed to create output directory"));

    // nothing besides the blocking file was written
    assert_eq!(file_names(root.path())?.len(), 1);
    assert_eq!(fs::read(&blocker)?, b"not a directory");

    assert!(run(&blocker).is_err());
    Ok(())
}
