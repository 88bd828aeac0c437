//! argot, an exact-token command-line argument parser.
#![deny(missing_docs)]

pub use argot_parser as parser;

pub use parser::{DefaultValue, Parser};

/// Defines the possible errors that may occur during usage of the crate.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An error comes from the declaration or parsing of arguments.
    #[error(transparent)]
    Parser(#[from] parser::Error),
}

#[cfg(test)]
mod tests {
    use googletest::prelude::{assert_that, eq};

    use crate as argot;

    #[test]
    fn it_should_fail_when_a_required_flag_is_missing() {
        let mut parser = argot::Parser::new();
        parser
            .register_flag(&["-b", "--bool"], "A bool", false, true)
            .unwrap();

        let res = parser.parse(["prog"]);
        assert_that!(
            res,
            eq(&Err(argot::parser::Error::MissingRequiredArgument(
                "-b --bool".to_string()
            )))
        );
    }

    #[test]
    fn it_should_satisfy_a_required_flag_through_either_alias() {
        let mut parser = argot::Parser::new();
        parser
            .register_flag(&["-b", "--bool"], "A bool", false, true)
            .unwrap();

        parser.parse(["prog", "-b"]).unwrap();
        assert_that!(parser.get::<bool>("-b"), eq(Some(true)));

        parser.parse(["prog", "--bool"]).unwrap();
        assert_that!(parser.get::<bool>("-b"), eq(Some(true)));
        assert_that!(parser.get::<bool>("--bool"), eq(Some(true)));
    }

    #[test]
    fn it_should_extract_an_option_value_and_collect_the_rest() {
        let mut parser = argot::Parser::new();
        parser
            .register_argument(&["-n", "--name"], "A name", "x", false)
            .unwrap();

        parser.parse(["prog", "--name", "y", "extra"]).unwrap();

        assert_that!(parser.get::<String>("--name"), eq(&Some("y".to_string())));
        assert_that!(
            parser.unmatched_args().to_vec(),
            eq(&vec!["extra".to_string()])
        );
    }

    #[test]
    fn it_should_fail_when_the_value_is_cut_off_by_end_of_input() {
        let mut parser = argot::Parser::new();
        parser
            .register_argument(&["-n", "--name"], "A name", "x", true)
            .unwrap();

        let res = parser.parse(["prog", "--name"]);
        assert_that!(
            res,
            eq(&Err(argot::parser::Error::ExpectedValue(
                "--name".to_string()
            )))
        );
    }

    #[test]
    fn it_should_render_errors_for_display() {
        let err = argot::Error::from(argot::parser::Error::MissingRequiredArgument(
            "-b --bool".to_string(),
        ));

        assert_that!(err.to_string(), eq("missing required argument: -b --bool"));
    }

    #[test]
    fn it_should_report_a_help_request_without_aborting() {
        let mut parser = argot::Parser::new();
        parser
            .register_flag(&["-b", "--bool"], "A bool", false, false)
            .unwrap();

        parser.parse(["prog", "--help", "-b"]).unwrap();

        assert_that!(parser.help_requested(), eq(true));
        assert_that!(parser.get::<bool>("-b"), eq(Some(true)));
    }
}
