use pathclass::emit::{generate_from_source, EmitOptions};
use pathclass::paths::ResolvedInput;
use pathclass::types::EmitStrategy;

use crate::integration::support::{member_lines, MemorySource};

fn source() -> MemorySource {
    MemorySource::new("/data")
        .file("/data/a/1.txt")
        .failing("/data/bad")
        .file("/data/c/2.txt")
}

#[test]
fn unreadable_sibling_does_not_stop_generation() {
    let input = ResolvedInput::new("/data", "https://x");
    let unit = generate_from_source(&source(), &input, &EmitOptions::default()).unwrap();
    let text = unit.to_text();

    assert!(text.contains(
        "        public class folder_002\n        {\n            // Error processing directory bad: permission denied\n        }\n"
    ));
    assert_eq!(
        member_lines(&text),
        vec![
            "public readonly string _1_txt = \"https://x/a/1.txt\";".to_string(),
            "public readonly string _2_txt = \"https://x/c/2.txt\";".to_string(),
            "public readonly folder_001 a = new folder_001();".to_string(),
            "public readonly folder_003 c = new folder_003();".to_string(),
        ]
    );
    assert_eq!(unit.stats.failures, 1);
    assert_eq!(unit.stats.folder_members, 2);
    assert!(!unit.folders.iter().any(|(path, _)| path == "bad"));
}

#[test]
fn unreadable_deep_directory_keeps_ancestor_files() {
    let source = MemorySource::new("/data")
        .file("/data/img/logo.png")
        .failing("/data/img/private/locked");
    let input = ResolvedInput::new("/data", "https://x");

    let unit = generate_from_source(&source, &input, &EmitOptions::default()).unwrap();
    let text = unit.to_text();
    assert!(text.contains("// Error processing directory img/private/locked: permission denied"));
    assert!(text.contains("public readonly string logo_png = \"https://x/img/logo.png\";"));
    assert!(text.contains("public readonly folder_001 img = new folder_001();"));
    assert!(text.contains("public readonly folder_002 _private = new folder_002();"));
    assert_eq!(unit.stats.failures, 1);
}

#[test]
fn unreadable_root_still_produces_a_unit() {
    let source = MemorySource::new("/data").failing("/data");
    let input = ResolvedInput::new("/data", "https://x");

    let unit = generate_from_source(&source, &input, &EmitOptions::default()).unwrap();
    let text = unit.to_text();
    assert!(text.contains("    public class data\n    {\n        // Error processing directory .: permission denied\n    }\n"));
    assert_eq!(unit.stats.failures, 1);
}

#[test]
fn flat_layout_recovers_the_same_way() {
    let options = EmitOptions {
        strategy: EmitStrategy::Flat,
        ..EmitOptions::default()
    };
    let input = ResolvedInput::new("/data", "https://x");

    let unit = generate_from_source(&source(), &input, &options).unwrap();
    let text = unit.to_text();
    assert!(text.contains("        // Error processing directory bad: permission denied\n"));
    assert!(text.contains("public readonly string a__1_txt = \"https://x/a/1.txt\";"));
    assert!(text.contains("public readonly string c__2_txt = \"https://x/c/2.txt\";"));
    assert_eq!(unit.stats.failures, 1);
}
