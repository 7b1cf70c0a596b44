//! Option parser tests

use mcu_console::cli::options::{parse_args, parse_int, OptionError, OptionSpec, OPT_VALUES_MAX};

// Test output buffer
struct TestOutput {
    buf: [u8; 2048],
    len: usize,
}

impl TestOutput {
    fn new() -> Self {
        Self {
            buf: [0u8; 2048],
            len: 0,
        }
    }

    fn contains(&self, s: &str) -> bool {
        if let Ok(content) = core::str::from_utf8(&self.buf[..self.len]) {
            content.contains(s)
        } else {
            false
        }
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl core::fmt::Write for TestOutput {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        let bytes = s.as_bytes();
        let available = self.buf.len() - self.len;
        let to_copy = bytes.len().min(available);
        self.buf[self.len..self.len + to_copy].copy_from_slice(&bytes[..to_copy]);
        self.len += to_copy;
        Ok(())
    }
}

#[test]
fn test_short_int_option_with_arity_two() {
    let mut ints: heapless::Vec<i64, OPT_VALUES_MAX> = heapless::Vec::new();
    let mut out = TestOutput::new();

    let unused = {
        let mut schema = [OptionSpec::int('i', "int", "an integer", &mut ints).with_arity(1, 2)];
        parse_args(&["-i", "3", "4", "positional"], &mut schema, &mut out).unwrap()
    };

    assert_eq!(ints.as_slice(), [3, 4]);
    assert_eq!(unused.as_slice(), ["positional"]);
}

#[test]
fn test_long_option_matches_exact_name() {
    let mut ints: heapless::Vec<i64, OPT_VALUES_MAX> = heapless::Vec::new();
    let mut out = TestOutput::new();

    {
        let mut schema = [OptionSpec::int('i', "int", "an integer", &mut ints)];
        parse_args(&["--int", "7"], &mut schema, &mut out).unwrap();
    }

    assert_eq!(ints.as_slice(), [7]);
}

#[test]
fn test_value_consumption_stops_at_next_option() {
    let mut ints: heapless::Vec<i64, OPT_VALUES_MAX> = heapless::Vec::new();
    let mut flag = false;
    let mut out = TestOutput::new();

    {
        let mut schema = [
            OptionSpec::int('i', "int", "an integer", &mut ints).with_arity(1, 2),
            OptionSpec::flag('b', "bool", "a flag", &mut flag),
        ];
        parse_args(&["-i", "1", "-b"], &mut schema, &mut out).unwrap();
    }

    assert_eq!(ints.as_slice(), [1]);
    assert!(flag);
}

#[test]
fn test_missing_value_is_arity_error() {
    let mut ints: heapless::Vec<i64, OPT_VALUES_MAX> = heapless::Vec::new();
    let mut out = TestOutput::new();

    let err = {
        let mut schema = [OptionSpec::int('i', "int", "an integer", &mut ints)];
        parse_args(&["-i"], &mut schema, &mut out).unwrap_err()
    };

    match err {
        OptionError::Arity { option, min, got } => {
            assert_eq!(option.as_str(), "-i");
            assert_eq!(min, 1);
            assert_eq!(got, 0);
        }
        other => panic!("expected arity error, got {:?}", other),
    }
}

#[test]
fn test_unknown_option_reports_token() {
    let mut out = TestOutput::new();

    let err = {
        let mut schema: [OptionSpec<'_, '_>; 0] = [];
        parse_args(&["--nope"], &mut schema, &mut out).unwrap_err()
    };

    assert_eq!(err, OptionError::UnknownOption("--nope".try_into().unwrap()));
}

#[test]
fn test_bundled_short_options_rejected() {
    let mut flag = false;
    let mut out = TestOutput::new();

    let err = {
        let mut schema = [OptionSpec::flag('b', "bool", "a flag", &mut flag)];
        parse_args(&["-bx"], &mut schema, &mut out).unwrap_err()
    };

    assert!(matches!(err, OptionError::UnknownOption(_)));
}

#[test]
fn test_invalid_number_names_offending_text() {
    let mut ints: heapless::Vec<i64, OPT_VALUES_MAX> = heapless::Vec::new();
    let mut out = TestOutput::new();

    let err = {
        let mut schema = [OptionSpec::int('i', "int", "an integer", &mut ints)];
        parse_args(&["-i", "12x"], &mut schema, &mut out).unwrap_err()
    };

    match err {
        OptionError::InvalidNumber { option, text } => {
            assert_eq!(option.as_str(), "-i");
            assert_eq!(text.as_str(), "12x");
        }
        other => panic!("expected invalid number, got {:?}", other),
    }
}

#[test]
fn test_flag_consumes_no_values() {
    let mut flag = false;
    let mut out = TestOutput::new();

    let unused = {
        let mut schema = [OptionSpec::flag('b', "bool", "a flag", &mut flag)];
        parse_args(&["-b", "tail"], &mut schema, &mut out).unwrap()
    };

    assert!(flag);
    assert_eq!(unused.as_slice(), ["tail"]);
}

#[test]
fn test_string_values_borrow_from_argv() {
    let mut strings: heapless::Vec<&str, OPT_VALUES_MAX> = heapless::Vec::new();
    let mut out = TestOutput::new();

    {
        let mut schema =
            [OptionSpec::string('s', "string", "a string", &mut strings).with_arity(1, 2)];
        parse_args(&["-s", "hello", "world"], &mut schema, &mut out).unwrap();
    }

    assert_eq!(strings.as_slice(), ["hello", "world"]);
}

#[test]
fn test_positionals_keep_input_order() {
    let mut flag = false;
    let mut out = TestOutput::new();

    let unused = {
        let mut schema = [OptionSpec::flag('b', "bool", "a flag", &mut flag)];
        parse_args(&["x", "-b", "y", "z"], &mut schema, &mut out).unwrap()
    };

    assert_eq!(unused.as_slice(), ["x", "y", "z"]);
}

#[test]
fn test_help_prints_schema_and_stops() {
    let mut ints: heapless::Vec<i64, OPT_VALUES_MAX> = heapless::Vec::new();
    let mut out = TestOutput::new();

    let unused = {
        let mut schema = [
            OptionSpec::comment("Basic Options"),
            OptionSpec::help('h', "help", "Show help hints"),
            OptionSpec::int('i', "int", "Get an integer value", &mut ints),
        ];
        parse_args(&["-h", "-i", "3"], &mut schema, &mut out).unwrap()
    };

    // Nothing after -h was consumed
    assert!(ints.is_empty());
    assert!(unused.is_empty());

    assert!(out.contains("Basic Options:"));
    assert!(out.contains("--int"));
    assert!(out.contains("Get an integer value"));
}

#[test]
fn test_no_options_all_positional() {
    let mut out = TestOutput::new();

    let unused = {
        let mut schema: [OptionSpec<'_, '_>; 0] = [];
        parse_args(&["just", "data"], &mut schema, &mut out).unwrap()
    };

    assert_eq!(unused.as_slice(), ["just", "data"]);
    assert!(out.is_empty());
}

#[test]
fn test_parse_int_base_detection() {
    assert_eq!(parse_int("42"), Some(42));
    assert_eq!(parse_int("-5"), Some(-5));
    assert_eq!(parse_int("+7"), Some(7));
    assert_eq!(parse_int("0x1F"), Some(31));
    assert_eq!(parse_int("0X1f"), Some(31));
    assert_eq!(parse_int("0b101"), Some(5));
    assert_eq!(parse_int("0o17"), Some(15));
    assert_eq!(parse_int("010"), Some(8));
    assert_eq!(parse_int("0"), Some(0));
}

#[test]
fn test_parse_int_rejects_garbage() {
    assert_eq!(parse_int(""), None);
    assert_eq!(parse_int("-"), None);
    assert_eq!(parse_int("12x"), None);
    assert_eq!(parse_int("0x"), None);
    assert_eq!(parse_int("4 2"), None);
}
