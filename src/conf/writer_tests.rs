//! Tests for the rule file writer.

use tempfile::TempDir;

use crate::conf::{ConfigWriter, WriteError, render};
use crate::rules::{Actions, NodeMatch, Rule, UpdateProps};

/// A fully populated rule for the French round-trip fixture.
fn microphone_rule() -> Rule {
    let label = "Microphone intégré".to_string();
    Rule {
        matches: vec![NodeMatch {
            node_name: Some("alsa_input.pci-0000_00_1f.3.analog-stereo".to_string()),
        }],
        actions: Actions {
            update_props: UpdateProps {
                description: Some(label.clone()),
                nick: Some(label.clone()),
                product_name: Some(label),
            },
        },
    }
}

mod rendering {
    use super::*;

    #[test]
    fn empty_rule_lists_render_empty_arrays() {
        let content = render(&[], &[]).unwrap();
        assert_eq!(content, "device.rules = []\n\nnode.rules = []\n");
    }

    #[test]
    fn single_rule_renders_exact_layout() {
        let content = render(&[], &[microphone_rule()]).unwrap();

        let expected = "\
device.rules = []

node.rules = [
    {
        \"matches\": [
            {
                \"node.name\": \"alsa_input.pci-0000_00_1f.3.analog-stereo\"
            }
        ],
        \"actions\": {
            \"update-props\": {
                \"node.description\": \"Microphone intégré\",
                \"node.nick\": \"Microphone intégré\",
                \"node.product.name\": \"Microphone intégré\"
            }
        }
    }
]
";
        assert_eq!(content, expected);
    }

    #[test]
    fn non_ascii_labels_stay_literal() {
        let content = render(&[], &[microphone_rule()]).unwrap();

        assert!(content.contains("Microphone intégré"));
        assert!(!content.contains("\\u"));
    }

    #[test]
    fn blocks_are_separated_by_one_blank_line_and_file_ends_with_newline() {
        let content = render(&[], &[microphone_rule()]).unwrap();

        assert_eq!(content.matches("\n\nnode.rules = ").count(), 1);
        assert!(!content.contains("\n\n\n"));
        assert!(content.ends_with("]\n"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let rules = vec![microphone_rule(), Rule::default()];
        assert_eq!(render(&[], &rules).unwrap(), render(&[], &rules).unwrap());
    }

    #[test]
    fn rendered_node_rules_parse_back_as_json() {
        let content = render(&[], &[microphone_rule()]).unwrap();

        let (_, node_block) = content.split_once("node.rules = ").unwrap();
        let parsed: Vec<Rule> = serde_json::from_str(node_block.trim()).unwrap();

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0], microphone_rule());

        let (device_block, _) = content.split_once("\n\nnode.rules = ").unwrap();
        let device_json = device_block.strip_prefix("device.rules = ").unwrap();
        let device_parsed: Vec<Rule> = serde_json::from_str(device_json).unwrap();
        assert!(device_parsed.is_empty());
    }
}

mod writing {
    use super::*;

    #[test]
    fn write_creates_the_file_with_rendered_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.conf");

        let writer = ConfigWriter::new(&path);
        writer.write(&[], &[microphone_rule()]).unwrap();

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, render(&[], &[microphone_rule()]).unwrap());
    }

    #[test]
    fn write_overwrites_previous_content_without_backup() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.conf");
        std::fs::write(&path, "stale content").unwrap();

        ConfigWriter::new(&path).write(&[], &[]).unwrap();

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, "device.rules = []\n\nnode.rules = []\n");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn writing_twice_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.conf");
        let writer = ConfigWriter::new(&path);

        writer.write(&[], &[microphone_rule()]).unwrap();
        let first = std::fs::read(&path).unwrap();
        writer.write(&[], &[microphone_rule()]).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn missing_parent_directory_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("does-not-exist").join("custom.conf");

        let result = ConfigWriter::new(&path).write(&[], &[]);

        match result {
            Err(WriteError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn path_returns_the_destination() {
        let writer = ConfigWriter::new("/tmp/custom.conf");
        assert_eq!(writer.path(), std::path::Path::new("/tmp/custom.conf"));
    }
}
