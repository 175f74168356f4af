//! `dasharg` is a small, forgiving command line parser for Rust.
//!
//! It reads the classic single-dash style of command line, where every option is spelled `-name` and its value (if any) follows as the next token.
//! `dasharg` prioritizes the following design concerns:
//! * *Forgiving matching*:
//! Names and aliases match regardless of case, unknown options are collected rather than rejected, and stray tokens are ignored.
//! * *Deferred validation*:
//! Parsing never fails.
//! Values are stored as strings and only checked when the program reads them (ex: as a `bool` or `i32`).
//! * *Basic UX*:
//! Every argument documents itself in the help message, which is displayed when the first token asks for `-help`.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("bin/translator.rs")]
//! ```
//!
//! This generates the following Cli program:
//! ```console
//! $ translator -help
//! Usage: translator [OPTIONS]
//!
//! Options:
//!
//! This Argument is optional.
//! -headless <Value>
//! Run the browser without a visible window.
//! Example: -headless true
//!
//! ...
//!
//! -help
//! Displays this help message.
//!
//! $ translator -path /opt/geckodriver -LANGUAGE en:fr -verbose
//! headless: true
//! lang: en:fr
//! translator: deepl
//! driverpath: /opt/geckodriver
//! verbose: true
//!
//! $ translator
//! This Argument is required.
//! -driverpath <Value>
//! The path to the browser driver executable.
//! Example: -driverpath /current/dir/C:\path\to\geckodriver.exe
//! ```
//!
//! # Arguments
//! Configure `dasharg` by starting with an [`ArgumentParser`] and `add`ing arguments.
//! There are two kinds of arguments:
//! * [`FlagArgument`]: only records whether it was present (ex: `-verbose`).
//! * [`ValueArgument`]: records the token that follows it (ex: `-lang en:fr`), falling back to its default.
//! A value argument may be [`ValueArgument::required`], in which case reading it before it has been set fails.
//!
//! Both kinds of argument may have an alias, which is only consulted once no argument goes by that name.
//! When two arguments share a name, the first one declared wins.
//!
//! # Parsing
//! [`ArgumentParser::parse_tokens`] aligns the tokens left to right:
//! * `-name value` assigns the value to `name` (a repeated name takes its last value).
//! * `-name` followed by another `-..` token (or nothing) marks `name` as set.
//! * Any other token is ignored.
//!
//! Names the parser does not know are added on the fly, so that the program may still inspect them.
//!
//! [`ArgumentParser::parse`] and [`ArgumentParser::parse_env`] additionally exit the process (with error code `0`) after displaying the help message.
//! This may be disabled via [`ArgumentParser::exit_on_help`].
//!
//! # Reading values
//! Values are read via the typed getters ([`ArgumentParser::get_string`], [`ArgumentParser::get_bool`], [`ArgumentParser::get_int`], [`ArgumentParser::get_path`]).
//! Each produces a [`ValueError`] when the value cannot be read.
//! Use [`OrExit::or_exit`] to report the failure and exit with error code `1` instead.
//! A required argument that has not been set is reported by displaying its help.
pub use dasharg_builder::*;
