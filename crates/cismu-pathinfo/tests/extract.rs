use cismu_pathinfo::{Extractor, Info, Tag, Tags, Vocabulary, extract};

fn tags(list: &[Tag]) -> Tags {
    list.iter().copied().collect()
}

#[test]
fn test_extract_is_idempotent() {
    let path = "a b/c/02. d & e/03 - author - work name (radio edit live original mix).mp3";
    assert_eq!(extract(path), extract(path));
}

#[test]
fn test_dot_work() {
    let info = extract("a b/c/02. d & e/02. work name.mp3");
    assert_eq!(
        info,
        Info {
            work: Some("work name".to_string()),
            file_extension: ".mp3".to_string(),
            ..Info::default()
        }
    );
}

#[test]
fn test_dot_dash_work() {
    let info = extract("a b/c/02. d & e/02. - work name.mp3");
    assert_eq!(info.author, None);
    assert_eq!(info.work.as_deref(), Some("work name"));
    assert!(info.tags.is_empty());
}

#[test]
fn test_author_and_work() {
    let info = extract("a b/c/02. d & e/03 - author - work name.mp3");
    assert_eq!(info.author.as_deref(), Some("author"));
    assert_eq!(info.album, None);
    assert_eq!(info.work.as_deref(), Some("work name"));
    assert!(info.tags.is_empty());
    assert_eq!(info.file_extension, ".mp3");
}

#[test]
fn test_original_mix_is_stripped_and_clears_remix() {
    let info = extract("a b/c/02. d & e/03 - author - work name (original mix).mp3");
    assert_eq!(info.author.as_deref(), Some("author"));
    assert_eq!(info.work.as_deref(), Some("work name"));
    assert!(!info.tags.has(Tag::Remix));
}

#[test]
fn test_mix_by_beats_original_mix() {
    let info = extract("music/05 - author - work (original mix) mix by dj.flac");
    assert!(info.tags.has(Tag::Remix));
}

#[test]
fn test_parenthetical_tags() {
    let info = extract("track (radio edit live)");
    assert_eq!(info.tags, tags(&[Tag::Radio, Tag::Live]));
    assert!(!info.tags.has(Tag::Remix));
    assert_eq!(info.work.as_deref(), Some("track"));
}

#[test]
fn test_extension_defaulting() {
    assert_eq!(extract("no extension here").file_extension, ".");
    assert_eq!(extract("dir/song.mp3").file_extension, ".mp3");
}

#[test]
fn test_directory_aggregation() {
    let info = extract("author - live at club/track.mp3");
    assert_eq!(info.author, None);
    assert_eq!(info.work.as_deref(), Some("track"));
    assert_eq!(info.tags, tags(&[Tag::Live]));
    assert_eq!(info.file_extension, ".mp3");
}

#[test]
fn test_directory_order_does_not_matter() {
    let a = extract("x (demo)/y [bonus]/z - cover by w/song.mp3");
    let b = extract("z - cover by w/y [bonus]/x (demo)/song.mp3");
    assert_eq!(a.tags, b.tags);
    assert_eq!(a.tags, tags(&[Tag::Demo, Tag::Cover, Tag::Bonus]));
}

#[test]
fn test_degenerate_paths() {
    assert_eq!(
        extract("/"),
        Info {
            file_extension: ".".to_string(),
            ..Info::default()
        }
    );
    assert_eq!(extract(""), Info::default());
}

#[test]
fn test_cyrillic_paths() {
    let info = extract("Музыка/Ария - Концерт в Лужниках/07 - Ария - Беспечный ангел (акапелла).mp3");
    assert_eq!(info.author.as_deref(), Some("Ария"));
    assert_eq!(info.work.as_deref(), Some("Беспечный ангел"));
    assert_eq!(info.tags, tags(&[Tag::Live, Tag::Capella]));
}

#[test]
fn test_custom_vocabulary_from_toml() {
    let vocabulary = Vocabulary::from_toml_str(
        r#"
        [groups]
        Demo = ["maqueta"]
        "#,
    )
    .unwrap();
    let extractor = Extractor::new(&vocabulary).unwrap();

    assert_eq!(extractor.extract("Grupo/Canción (Maqueta).mp3").tags, tags(&[Tag::Demo]));
    assert!(extractor.extract("Grupo/Song (demo).mp3").tags.is_empty());
}

#[test]
fn test_serialized_form() {
    let info = extract("Band/01 - Band - Song [Remastered].flac");
    let json = serde_json::to_string(&info).unwrap();
    assert_eq!(
        json,
        r#"{"author":"Band","work":"Song","tags":["Remaster"],"file_extension":".flac"}"#
    );
}

#[test]
fn test_singular_concert_recording_is_live() {
    assert_eq!(extract("Ария - концертная запись.mp3").tags, tags(&[Tag::Live]));
    assert_eq!(extract("Ария/Ария - концертная запись/01 - song.mp3").tags, tags(&[Tag::Live]));
    assert_eq!(extract("Ария - концертные записи.mp3").tags, tags(&[Tag::Live]));
}

#[test]
fn test_underscore_track_numbers() {
    let info = extract("Album/01_Intro.mp3");
    assert_eq!(info.author, None);
    assert_eq!(info.work.as_deref(), Some("Intro"));

    let info = extract("Album/07_Artist - Song.mp3");
    assert_eq!(info.author.as_deref(), Some("Artist"));
    assert_eq!(info.work.as_deref(), Some("Song"));

    assert_eq!(extract("Album/01Intro.mp3").work.as_deref(), Some("01Intro"));
}
