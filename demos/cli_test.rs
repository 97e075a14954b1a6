use lilarg::{ArgumentParser, IntArg, ParseStatus, StringArg};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    println!("{}\n", args.join(" "));

    let mut parser = ArgumentParser::new().expect("failed to create the parser");

    let input: StringArg = parser.add("input").expect("failed to add 'input'");
    parser.set_help(input, "input file");

    let output: StringArg = parser.add("output").expect("failed to add 'output'");
    parser.set_help(output, "output file");

    let first: IntArg = parser.add("--first").expect("failed to add '--first'");
    parser.set_alt(first, "-f");
    parser.set_help(first, "first int optional argument");
    parser.set_default(first, 1);

    let second: StringArg = parser.add("--second").expect("failed to add '--second'");
    parser.set_alt(second, "-s");
    parser.set_help(second, "second string optional argument");
    parser.set_default(second, "default");

    match parser.parse(&args).expect("failed to parse") {
        ParseStatus::Ok => {
            println!("input: '{}'", parser.value(input));
            println!("output: '{}'", parser.value(output));
            println!("first: {}", parser.value(first));
            println!("second: '{}'", parser.value(second));
        }
        ParseStatus::Help | ParseStatus::Error(_) => {
            print!("{}", parser.message());
        }
    }
}
