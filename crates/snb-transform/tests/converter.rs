//! End-to-end tests for per-prefix conversion.

use std::fs;
use std::path::Path;

use snb_model::{PREFIXES, PrefixSpec};
use snb_transform::{ConvertConfig, ConvertError, Converter};
use tempfile::TempDir;

struct Fixture {
    input: TempDir,
    output: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            input: TempDir::new().unwrap(),
            output: TempDir::new().unwrap(),
        }
    }

    fn shard(&self, prefix: &str, shard: &str, contents: &str) -> &Self {
        let path = self.input.path().join(format!("{prefix}_{shard}.csv"));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
        self
    }

    fn converter(&self) -> Converter {
        Converter::new(ConvertConfig::new(self.input.path(), self.output.path()))
    }

    fn read(&self, name: &str) -> String {
        read(self.output.path(), name)
    }
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap_or_else(|e| panic!("read {name}: {e}"))
}

const COMMENT_HEADER: &str = "id|creationDate|locationIP|browserUsed|content|length|creator|place|replyOfPost|replyOfComment\n";

#[test]
fn tagclass_without_parent_writes_no_derived_row() {
    let fixture = Fixture::new();
    fixture.shard(
        "static/tagclass",
        "0_0",
        "id|name|url|isSubclassOf\n1|Country|http://x|\n",
    );

    let summary = fixture.converter().convert_named("static/tagclass").unwrap();

    assert_eq!(fixture.read("tagclass.csv"), "1,Country,http://x,\n");
    assert_eq!(fixture.read("tagclass_isSubclassOf_tagclass.csv"), "");
    assert_eq!(summary.records, 1);
    assert_eq!(summary.primary.rows, 1);
    assert_eq!(summary.derived_rows(), 0);
}

#[test]
fn place_hierarchy_is_derived_from_last_field() {
    let fixture = Fixture::new();
    fixture.shard(
        "static/place",
        "0_0",
        "id|name|url|type|isPartOf\n\
         1|Europe|http://e|continent|\n\
         2|Germany|http://g|country|1\n\
         3|Berlin, Mitte|http://b|city|2\n",
    );

    let summary = fixture.converter().convert_named("static/place").unwrap();

    insta::assert_snapshot!(fixture.read("place.csv"), @r#"
    1,Europe,http://e,continent,
    2,Germany,http://g,country,1
    3,"Berlin, Mitte",http://b,city,2
    "#);
    assert_eq!(fixture.read("place_isPartOf_place.csv"), "2,1\n3,2\n");
    assert!(summary.derived_rows() <= summary.primary.rows);
}

#[test]
fn comments_split_into_post_and_comment_replies() {
    let fixture = Fixture::new();
    fixture
        .shard(
            "dynamic/comment",
            "0_0",
            &format!(
                "{COMMENT_HEADER}\
                 10|2010-01-01|1.1.1.1|Firefox|hello, world|12|4|9|100|\n\
                 11|2010-01-02|1.1.1.2|Chrome| padded |8|5|9||10\n"
            ),
        )
        .shard(
            "dynamic/comment",
            "1_0",
            &format!("{COMMENT_HEADER}12|2010-01-03|1.1.1.3|Safari|ok|2|6|9|101|\n"),
        );

    let summary = fixture.converter().convert_named("dynamic/comment").unwrap();

    insta::assert_snapshot!(fixture.read("comment.csv"), @r#"
    10,2010-01-01,1.1.1.1,Firefox,"hello, world",12,4,9,100,
    11,2010-01-02,1.1.1.2,Chrome," padded ",8,5,9,,10
    12,2010-01-03,1.1.1.3,Safari,ok,2,6,9,101,
    "#);
    assert_eq!(
        fixture.read("comment_replyOf_post.csv"),
        "10,100,2010-01-01\n12,101,2010-01-03\n"
    );
    assert_eq!(fixture.read("comment_replyOf_comment.csv"), "11,10,2010-01-02\n");

    assert_eq!(summary.shards.len(), 2);
    assert_eq!(summary.records, 3);
    assert_eq!(summary.derived_rows(), summary.primary.rows);
    assert_eq!(summary.derived[0].rows, 2);
    assert_eq!(summary.derived[1].rows, 1);
}

#[test]
fn knows_edges_get_zero_weight() {
    let fixture = Fixture::new();
    fixture.shard(
        "dynamic/person_knows_person",
        "0_0",
        "Person.id|Person.id|creationDate\n1|2|2010-01-01\n1|3|2010-02-01\n",
    );

    fixture
        .converter()
        .convert_named("dynamic/person_knows_person")
        .unwrap();

    let contents = fixture.read("person_knows_person.csv");
    assert_eq!(contents, "1,2,2010-01-01,0\n1,3,2010-02-01,0\n");
    assert!(contents.lines().all(|line| line.ends_with(",0")));
}

#[test]
fn forum_membership_repeats_forum_id() {
    let fixture = Fixture::new();
    fixture.shard(
        "dynamic/forum_hasMember_person",
        "0_0",
        "Forum.id|Person.id|joinDate\n7|1|2010-01-01\n8|2|2010-01-02\n",
    );

    fixture
        .converter()
        .convert_named("dynamic/forum_hasMember_person")
        .unwrap();

    let contents = fixture.read("forum_hasMember_person.csv");
    assert_eq!(contents, "7,1,2010-01-01,0,7\n8,2,2010-01-02,0,8\n");
    for line in contents.lines() {
        let first = line.split(',').next().unwrap();
        assert!(line.ends_with(&format!(",0,{first}")));
    }
}

#[test]
fn plain_prefix_concatenates_all_shards() {
    let fixture = Fixture::new();
    fixture
        .shard("dynamic/person", "0_0", "id|firstName\n1|Ann\n2|Bo\n")
        .shard("dynamic/person", "1_0", "id|firstName\n3|Cy\n")
        .shard("dynamic/person", "0_1", "id|firstName\n")
        .shard("dynamic/person_knows_person", "0_0", "a|b|c\n1|2|3\n");

    let summary = fixture.converter().convert_named("dynamic/person").unwrap();

    assert_eq!(summary.shards.len(), 3);
    assert_eq!(summary.records, 3);
    assert_eq!(fixture.read("person.csv"), "1,Ann\n2,Bo\n3,Cy\n");
    assert!(summary.derived.is_empty());
}

#[test]
fn missing_shards_produce_empty_outputs() {
    let fixture = Fixture::new();

    let summary = fixture.converter().convert_named("dynamic/comment").unwrap();

    assert_eq!(summary.records, 0);
    assert_eq!(fixture.read("comment.csv"), "");
    assert_eq!(fixture.read("comment_replyOf_post.csv"), "");
    assert_eq!(fixture.read("comment_replyOf_comment.csv"), "");
}

#[test]
fn short_comment_record_fails_with_location() {
    let fixture = Fixture::new();
    fixture.shard(
        "dynamic/comment",
        "0_0",
        &format!("{COMMENT_HEADER}10|2010|a|b|c|1|2|3|4|\n99\n"),
    );

    let error = fixture
        .converter()
        .convert_named("dynamic/comment")
        .unwrap_err();

    match error {
        ConvertError::MissingField {
            path,
            line,
            needed,
            found,
        } => {
            assert!(path.ends_with("comment_0_0.csv"));
            assert_eq!(line, 3);
            assert_eq!(needed, 2);
            assert_eq!(found, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_prefix_is_rejected() {
    let fixture = Fixture::new();

    let error = fixture.converter().convert_named("dynamic/nope").unwrap_err();

    assert!(matches!(error, ConvertError::UnknownPrefix(name) if name == "dynamic/nope"));
}

#[test]
fn existing_outputs_are_truncated_and_others_kept() {
    let fixture = Fixture::new();
    fs::write(fixture.output.path().join("tag.csv"), "stale\n").unwrap();
    fs::write(fixture.output.path().join("notes.txt"), "keep\n").unwrap();
    fixture.shard("static/tag", "0_0", "id|name|url\n1|Rust|http://r\n");

    fixture.converter().convert_named("static/tag").unwrap();

    assert_eq!(fixture.read("tag.csv"), "1,Rust,http://r\n");
    assert_eq!(fixture.read("notes.txt"), "keep\n");
}

#[test]
fn repeated_runs_are_byte_identical() {
    let fixture = Fixture::new();
    fixture
        .shard(
            "dynamic/comment",
            "1_0",
            &format!("{COMMENT_HEADER}12|d|ip|b|x, y|2|6|9||11\n"),
        )
        .shard(
            "dynamic/comment",
            "0_0",
            &format!("{COMMENT_HEADER}11|d|ip|b|z|2|6|9|100|\n"),
        );
    let second = TempDir::new().unwrap();

    let spec = PrefixSpec::lookup("dynamic/comment").unwrap();
    fixture.converter().convert(spec).unwrap();
    Converter::new(ConvertConfig::new(fixture.input.path(), second.path()))
        .convert(spec)
        .unwrap();

    for name in [
        "comment.csv",
        "comment_replyOf_post.csv",
        "comment_replyOf_comment.csv",
    ] {
        assert_eq!(
            fs::read(fixture.output.path().join(name)).unwrap(),
            fs::read(second.path().join(name)).unwrap(),
            "{name}"
        );
    }
    assert_eq!(
        fixture.read("comment.csv").lines().next(),
        Some("11,d,ip,b,z,2,6,9,100,")
    );
}

#[test]
fn every_registered_prefix_converts_with_no_input() {
    let fixture = Fixture::new();
    let converter = fixture.converter();

    for spec in &PREFIXES {
        let summary = converter.convert(spec).unwrap();
        assert_eq!(summary.records, 0, "{}", spec.name);
        assert!(fixture.output.path().join(spec.primary_output()).is_file());
    }
}

#[test]
fn blank_line_in_plain_prefix_becomes_empty_row() {
    let fixture = Fixture::new();
    fixture.shard("dynamic/person", "0_0", "id|name\n1|a\n\n   \n2|b\n");

    let summary = fixture.converter().convert_named("dynamic/person").unwrap();

    assert_eq!(summary.records, 4);
    assert_eq!(summary.primary.rows, 4);
    assert_eq!(fixture.read("person.csv"), "1,a\n\n\n2,b\n");
}

#[test]
fn blank_line_in_comment_shard_fails() {
    let fixture = Fixture::new();
    fixture.shard("dynamic/comment", "0_0", "id|d|p|c\n1|x|5|\n\n2|y||1\n");

    let error = fixture
        .converter()
        .convert_named("dynamic/comment")
        .unwrap_err();

    assert!(matches!(
        error,
        ConvertError::MissingField {
            line: 3,
            needed: 2,
            found: 1,
            ..
        }
    ));
}
