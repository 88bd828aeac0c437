use argot_parser::Parser;

struct MyArgs {
    verbose: bool,
    level: u32,
}

fn main() {
    let argv = ["demo", "--verbose", "--level", "3"];

    let mut parser = Parser::new();
    parser
        .register_flag(&["-v", "--verbose"], "Verbose output", false, false)
        .expect("aliases must be free");
    parser
        .register_argument(&["-l", "--level"], "Compression level", 1i64, false)
        .expect("aliases must be free");

    parser.parse(argv).expect("must parse");

    let args = MyArgs {
        verbose: parser.get("-v").expect("must be registered"),
        level: parser.get("--level").expect("must be registered"),
    };

    if !args.verbose {
        panic!("invalid verbose");
    }

    if 3 != args.level {
        panic!("invalid level");
    }
}
