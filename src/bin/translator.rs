use dasharg::{ArgumentParser, FlagArgument, OrExit, ValueArgument};
use std::path::Path;

fn main() {
    let mut parser = ArgumentParser::new("translator")
        .add(
            ValueArgument::new("headless", true)
                .describe("Run the browser without a visible window."),
        )
        .add(
            ValueArgument::new("lang", "en:de")
                .with_alias("language")
                .describe("The language pair to translate, as 'from:to'."),
        )
        .add(
            ValueArgument::new("translator", "deepl")
                .describe("The translation service: 'google' or 'deepl'."),
        )
        .add(
            ValueArgument::new("driverpath", Path::new(r"C:\path\to\geckodriver.exe"))
                .with_alias("path")
                .describe("The path to the browser driver executable.")
                .required(),
        )
        .add(FlagArgument::new("verbose").describe("Print every step."));

    parser.parse_env();

    let headless: bool = parser.get_bool("headless").or_exit();
    let lang = parser.get_string("lang").or_exit();
    let translator = parser.get_string("translator").or_exit();
    let driverpath = parser.get_path("driverpath").or_exit();
    let verbose = parser.is_set("verbose");

    println!("headless: {headless}");
    println!("lang: {lang}");
    println!("translator: {translator}");
    println!("driverpath: {}", driverpath.display());
    println!("verbose: {verbose}");
}
