#[cfg(test)]
mod tests {
    use contact_register_cli::option_selection::{
        read_value, select_option, write_command_options, DEFAULT_PROMPT, DEFAULT_TITLE,
    };
    use contact_register_cli::CONTACT_FIELDS;
    use contact_register_core::error::Error;
    use contact_register_core::query::{ensure_known_fields, QueryFilter};
    use std::io::Cursor;

    #[test]
    fn test_menu_then_selection() {
        let mut output: Vec<u8> = Vec::new();
        write_command_options(&CONTACT_FIELDS, None, &mut output).unwrap();

        let mut input = Cursor::new(b"email\n9\n2\n".to_vec());
        let selected = select_option(&CONTACT_FIELDS, None, &mut input, &mut output).unwrap();
        assert_eq!(*selected, "email");

        let transcript = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = transcript.lines().collect();
        assert_eq!(lines[0], DEFAULT_TITLE);
        assert_eq!(lines[1], "0: name");
        assert_eq!(lines[5], "4: address");
        // One complaint per rejected line, then the final prompt
        assert_eq!(
            transcript.matches(DEFAULT_PROMPT).count(),
            3,
            "transcript: {transcript}"
        );
        assert!(transcript.contains("not a valid integer"));
        assert!(transcript.contains("out of range"));
    }

    #[test]
    fn test_selected_field_builds_known_filter() {
        let mut input = Cursor::new(b"3\n 555-0100 \n".to_vec());
        let mut output: Vec<u8> = Vec::new();

        let field = select_option(&CONTACT_FIELDS, Some("Field: "), &mut input, &mut output).unwrap();
        let pattern = read_value("Pattern: ", &mut input, &mut output).unwrap();

        let filters = vec![QueryFilter::new(field, &pattern)];
        assert!(ensure_known_fields(&filters, &CONTACT_FIELDS).is_ok());
        assert_eq!(filters[0].to_string(), "phone=555-0100");
    }

    #[test]
    fn test_selection_over_display_values() {
        let options = vec![
            QueryFilter::new("name", "Bob"),
            QueryFilter::new("email", "bob@example.com"),
        ];
        let mut input = Cursor::new(b"1\n".to_vec());
        let mut output: Vec<u8> = Vec::new();

        let selected = select_option(&options, None, &mut input, &mut output).unwrap();
        assert_eq!(selected, &options[1]);
    }

    #[test]
    fn test_selection_gives_up_when_input_ends() {
        let mut input = Cursor::new(b"-3\nten\n".to_vec());
        let mut output: Vec<u8> = Vec::new();

        let result = select_option(&CONTACT_FIELDS, None, &mut input, &mut output);
        assert!(matches!(result, Err(Error::InputClosed)));
    }
}
