//! Traits which, typically, may be imported without concern: `use dasharg::prelude::*`.
use std::path::{Path, PathBuf};

/// Behaviour for turning a default or assigned value into the string stored on a `ValueArgument`.
///
/// Paths are stored in their absolute form; everything else uses its natural `Display` form.
// Needs to be imported in order to implement a custom `IntoValue`.
pub trait IntoValue {
    /// Convert into the stored string form.
    fn into_value(self) -> String;
}

macro_rules! display_into_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoValue for $t {
                fn into_value(self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_into_value!(
    &str, String, &String, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128,
    usize, f32, f64,
);

impl IntoValue for &Path {
    fn into_value(self) -> String {
        absolute(self)
    }
}

impl IntoValue for PathBuf {
    fn into_value(self) -> String {
        absolute(&self)
    }
}

impl IntoValue for &PathBuf {
    fn into_value(self) -> String {
        absolute(self)
    }
}

fn absolute(path: &Path) -> String {
    // An empty path cannot be made absolute; keep it as given.
    match std::path::absolute(path) {
        Ok(absolute) => absolute.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}
