use pathclass::emit::{generate_from_source, EmitOptions};
use pathclass::paths::ResolvedInput;
use pathclass::types::EmitStrategy;

use crate::integration::support::{declared_folder_numbers, member_lines, MemorySource};

fn options() -> EmitOptions {
    EmitOptions::default()
}

#[test]
fn file_url_uses_root_relative_path_and_trimmed_base() {
    let source = MemorySource::new("/data").file("/data/img/logo.png");
    let input = ResolvedInput::new("/data", "https://cdn.x/");

    let unit = generate_from_source(&source, &input, &options()).unwrap();
    let members = member_lines(&unit.to_text());
    assert_eq!(
        members,
        vec![
            "public readonly string logo_png = \"https://cdn.x/img/logo.png\";".to_string(),
            "public readonly folder_001 img = new folder_001();".to_string(),
        ]
    );
}

#[test]
fn empty_directory_is_invisible() {
    let source = MemorySource::new("/proj")
        .file("/proj/a.txt")
        .dir("/proj/empty_dir");
    let input = ResolvedInput::new("/proj", "https://x");

    let unit = generate_from_source(&source, &input, &options()).unwrap();
    let text = unit.to_text();
    assert_eq!(
        member_lines(&text),
        vec!["public readonly string a_txt = \"https://x/a.txt\";".to_string()]
    );
    assert!(!text.contains("empty_dir"));
    assert!(!text.contains("folder_"));
    assert_eq!(unit.stats.pruned, 1);
}

#[test]
fn subtree_of_only_empty_directories_is_pruned() {
    let source = MemorySource::new("/r")
        .dir("/r/x/y/z")
        .dir("/r/x/w")
        .file("/r/keep/f.txt");
    let input = ResolvedInput::new("/r", "https://x");

    let unit = generate_from_source(&source, &input, &options()).unwrap();
    let text = unit.to_text();
    assert_eq!(declared_folder_numbers(&text), vec![1]);
    assert!(text.contains("public readonly folder_001 keep = new folder_001();"));
    assert!(!text.contains(" x "));
}

#[test]
fn folder_ids_strictly_increase_in_declaration_order() {
    let source = MemorySource::new("/t")
        .file("/t/a/a1/a11/f.txt")
        .file("/t/a/a2/f.txt")
        .file("/t/b/f.txt")
        .file("/t/c/c1/f.txt")
        .file("/t/c/c2/c21/c211/f.txt")
        .file("/t/c/f.txt");
    let input = ResolvedInput::new("/t", "https://x");

    let unit = generate_from_source(&source, &input, &options()).unwrap();
    let numbers = declared_folder_numbers(&unit.to_text());
    assert_eq!(numbers, (1..=10).collect::<Vec<u32>>());
    assert_eq!(unit.stats.containers, 10);
    assert_eq!(unit.folders.len(), 10);
}

#[test]
fn depth_first_minting_follows_sorted_order() {
    let source = MemorySource::new("/t")
        .file("/t/b/f.txt")
        .file("/t/a/inner/f.txt");
    let input = ResolvedInput::new("/t", "https://x");

    let unit = generate_from_source(&source, &input, &options()).unwrap();
    assert_eq!(
        unit.folders,
        vec![
            ("a".to_string(), "folder_001".to_string()),
            ("a/inner".to_string(), "folder_002".to_string()),
            ("b".to_string(), "folder_003".to_string()),
        ]
    );
}

#[test]
fn subdirectory_members_precede_file_members() {
    let source = MemorySource::new("/s")
        .file("/s/a.txt")
        .file("/s/zzz/b.txt");
    let input = ResolvedInput::new("/s", "https://x");

    let unit = generate_from_source(&source, &input, &options()).unwrap();
    let text = unit.to_text();
    let folder_member = text.find("folder_001 zzz").unwrap();
    let file_member = text.find("string a_txt").unwrap();
    assert!(folder_member < file_member);
}

#[test]
fn output_is_byte_identical_across_runs() {
    let build = || {
        MemorySource::new("/d")
            .file("/d/z.png")
            .file("/d/a.png")
            .file("/d/m/q.css")
            .file("/d/m/b.css")
            .dir("/d/e")
    };
    let input = ResolvedInput::new("/d", "https://x");

    let first = generate_from_source(&build(), &input, &options()).unwrap();
    let second = generate_from_source(&build(), &input, &options()).unwrap();
    assert_eq!(first.to_text(), second.to_text());
}

#[test]
fn braces_balance_and_indent_by_four() {
    let source = MemorySource::new("/d")
        .file("/d/a/b/c/d.txt")
        .file("/d/a/e.txt");
    let input = ResolvedInput::new("/d", "https://x");

    let text = generate_from_source(&source, &input, &options())
        .unwrap()
        .to_text();
    let opens = text.lines().filter(|l| l.trim() == "{").count();
    let closes = text.lines().filter(|l| l.trim() == "}").count();
    assert_eq!(opens, closes);
    assert!(text.contains("\n                    public readonly string d_txt"));
    for line in text.lines() {
        let indent = line.len() - line.trim_start().len();
        assert_eq!(indent % 4, 0, "bad indent: {line:?}");
    }
}

#[test]
fn very_deep_tree_does_not_exhaust_the_stack() {
    let depth = 300;
    let mut path = String::from("/deep");
    for _ in 0..depth {
        path.push_str("/d");
    }
    let leaf = format!("{}/leaf.txt", path);
    let source = MemorySource::new("/deep").file(&leaf);
    let input = ResolvedInput::new("/deep", "https://x");

    let unit = generate_from_source(&source, &input, &options()).unwrap();
    assert_eq!(unit.stats.containers, depth);
    assert_eq!(unit.stats.file_members, 1);
    assert!(unit
        .to_text()
        .contains(&format!("= \"https://x{}/leaf.txt\";", &path["/deep".len()..])));
}

#[test]
fn root_named_like_a_minted_class_is_never_reused() {
    for root in ["/folder_001", "/folder-001"] {
        let source = MemorySource::new(root).file(&format!("{root}/img/a.png"));
        let input = ResolvedInput::new(root, "https://x");

        let unit = generate_from_source(&source, &input, &options()).unwrap();
        let text = unit.to_text();
        assert!(text.contains(
            "    public class folder_001\n    {\n        public class folder_002\n        {\n            public readonly string a_png = \"https://x/img/a.png\";\n        }\n        public readonly folder_002 img = new folder_002();\n    }\n"
        ));
        assert_eq!(declared_folder_numbers(&text), vec![1, 2]);
        assert_eq!(unit.folders, vec![("img".to_string(), "folder_002".to_string())]);
    }
}

#[test]
fn control_characters_in_names_stay_on_one_line() {
    let source = MemorySource::new("/d").file("/d/a\nb.txt");
    let input = ResolvedInput::new("/d", "https://x");

    for strategy in [EmitStrategy::Nested, EmitStrategy::Flat] {
        let options = EmitOptions {
            strategy,
            ..EmitOptions::default()
        };
        let unit = generate_from_source(&source, &input, &options).unwrap();
        let text = unit.to_text();
        assert_eq!(text.lines().count(), unit.lines.len());
        assert_eq!(
            member_lines(&text),
            vec!["public readonly string a_b_txt = \"https://x/a\\nb.txt\";".to_string()]
        );
    }
}
