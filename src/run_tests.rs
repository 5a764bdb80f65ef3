//! Tests for the interactive orchestration helpers.

use std::io::Cursor;

use pw_relabel::inventory::{Device, DeviceKind};

use super::{KindChoice, display_devices, prompt_kind_choice, rename_interactively, rename_selected};

/// Device with both name and description populated.
fn device(name: &str, description: &str) -> Device {
    Device {
        name: Some(name.to_string()),
        description: Some(description.to_string()),
        kind: Some(DeviceKind::Output),
    }
}

mod kind_choice {
    use super::*;

    fn choose(answer: &str) -> KindChoice {
        let mut input = Cursor::new(answer.to_string());
        let mut output = Vec::new();
        prompt_kind_choice(&mut input, &mut output).unwrap()
    }

    #[test]
    fn one_selects_sinks() {
        assert_eq!(choose("1\n"), KindChoice::Sinks);
    }

    #[test]
    fn two_selects_sources() {
        assert_eq!(choose("2\n"), KindChoice::Sources);
    }

    #[test]
    fn anything_else_skips() {
        assert_eq!(choose("3\n"), KindChoice::Skip);
        assert_eq!(choose("yes\n"), KindChoice::Skip);
        assert_eq!(choose("\n"), KindChoice::Skip);
    }

    #[test]
    fn end_of_input_skips() {
        assert_eq!(choose(""), KindChoice::Skip);
    }

    #[test]
    fn prompt_lists_both_options() {
        let mut input = Cursor::new("1\n".to_string());
        let mut output = Vec::new();
        prompt_kind_choice(&mut input, &mut output).unwrap();

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("[1] Outputs (sinks)"));
        assert!(shown.contains("[2] Inputs (sources)"));
    }
}

mod selection {
    use super::*;

    fn rename(answers: &str, devices: &mut [Device]) -> String {
        let mut input = Cursor::new(answers.to_string());
        let mut output = Vec::new();
        rename_selected(&mut input, &mut output, devices).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn valid_index_and_label_rename_the_device() {
        let mut devices = vec![device("alsa_output.a", "Old"), device("alsa_output.b", "Keep")];

        rename("0\nMes enceintes\n", &mut devices);

        assert_eq!(devices[0].description.as_deref(), Some("Mes enceintes"));
        assert_eq!(devices[1].description.as_deref(), Some("Keep"));
    }

    #[test]
    fn label_whitespace_is_trimmed() {
        let mut devices = vec![device("alsa_output.a", "Old")];

        rename("0\n  Casque USB  \n", &mut devices);

        assert_eq!(devices[0].description.as_deref(), Some("Casque USB"));
    }

    #[test]
    fn non_numeric_index_skips_the_rename() {
        let mut devices = vec![device("alsa_output.a", "Old")];

        let shown = rename("abc\n", &mut devices);

        assert_eq!(devices[0].description.as_deref(), Some("Old"));
        assert!(shown.contains("Invalid index"));
    }

    #[test]
    fn out_of_range_index_skips_the_rename() {
        let mut devices = vec![device("alsa_output.a", "Old")];

        let shown = rename("5\n", &mut devices);

        assert_eq!(devices[0].description.as_deref(), Some("Old"));
        assert!(shown.contains("Invalid index"));
    }

    #[test]
    fn empty_label_keeps_current_description() {
        let mut devices = vec![device("alsa_output.a", "Old")];

        let shown = rename("0\n\n", &mut devices);

        assert_eq!(devices[0].description.as_deref(), Some("Old"));
        assert!(shown.contains("Label unchanged"));
    }

    #[test]
    fn rename_works_on_device_without_description() {
        let mut devices = vec![Device {
            name: Some("alsa_output.bare".to_string()),
            description: None,
            kind: Some(DeviceKind::Output),
        }];

        rename("0\nEnceintes\n", &mut devices);

        assert_eq!(devices[0].description.as_deref(), Some("Enceintes"));
    }
}

mod display {
    use super::*;

    #[test]
    fn listing_shows_index_name_and_description() {
        let devices = vec![device("alsa_output.pci", "Enceintes internes")];
        let mut output = Vec::new();

        display_devices(&mut output, &devices, "audio outputs (sinks)").unwrap();

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("=== List of audio outputs (sinks) ==="));
        assert!(shown.contains("[0] alsa_output.pci"));
        assert!(shown.contains("Enceintes internes"));
    }

    #[test]
    fn placeholder_devices_display_without_panicking() {
        let devices = vec![Device::new()];
        let mut output = Vec::new();

        display_devices(&mut output, &devices, "audio inputs (sources)").unwrap();

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("[0] (no name)"));
        assert!(shown.contains("(no description)"));
    }
}

mod full_flow {
    use super::*;

    #[test]
    fn scripted_session_renames_one_sink() {
        let mut sinks = vec![device("alsa_output.pci", "Enceintes")];
        let mut sources = vec![device("alsa_input.pci", "Micro")];

        let mut input = Cursor::new("1\n0\nMes enceintes\n".to_string());
        let mut output = Vec::new();
        rename_interactively(&mut input, &mut output, &mut sinks, &mut sources).unwrap();

        assert_eq!(sinks[0].description.as_deref(), Some("Mes enceintes"));
        assert_eq!(sources[0].description.as_deref(), Some("Micro"));
    }

    #[test]
    fn scripted_session_renames_one_source() {
        let mut sinks = vec![device("alsa_output.pci", "Enceintes")];
        let mut sources = vec![device("alsa_input.pci", "Micro")];

        let mut input = Cursor::new("2\n0\nMicro casque\n".to_string());
        let mut output = Vec::new();
        rename_interactively(&mut input, &mut output, &mut sinks, &mut sources).unwrap();

        assert_eq!(sinks[0].description.as_deref(), Some("Enceintes"));
        assert_eq!(sources[0].description.as_deref(), Some("Micro casque"));
    }

    #[test]
    fn skipping_leaves_everything_untouched() {
        let mut sinks = vec![device("alsa_output.pci", "Enceintes")];
        let mut sources = vec![device("alsa_input.pci", "Micro")];

        let mut input = Cursor::new("q\n".to_string());
        let mut output = Vec::new();
        rename_interactively(&mut input, &mut output, &mut sinks, &mut sources).unwrap();

        assert_eq!(sinks[0].description.as_deref(), Some("Enceintes"));
        assert_eq!(sources[0].description.as_deref(), Some("Micro"));
        assert!(String::from_utf8(output).unwrap().contains("Keeping all labels"));
    }
}
