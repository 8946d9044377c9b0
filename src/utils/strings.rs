//! String helpers for display text

use crate::localization::Bundle;

/// Extension methods for string slices.
pub trait StringExt {
    /// Upper-case the first character and lower-case the rest.
    fn capitalizing_first_letter(&self) -> String;

    /// Look the string up as a key in `bundle`, falling back to the key itself.
    fn local(&self, bundle: &Bundle) -> String;
}

impl StringExt for str {
    fn capitalizing_first_letter(&self) -> String {
        let mut chars = self.chars();
        match chars.next() {
            Some(first) => {
                let mut capitalized: String = first.to_uppercase().collect();
                capitalized.push_str(&chars.as_str().to_lowercase());
                capitalized
            }
            None => String::new(),
        }
    }

    fn local(&self, bundle: &Bundle) -> String {
        bundle.localized(self)
    }
}

/// In-place variant of [`StringExt::capitalizing_first_letter`].
pub trait CapitalizeInPlace {
    fn capitalize_first_letter(&mut self);
}

impl CapitalizeInPlace for String {
    fn capitalize_first_letter(&mut self) {
        *self = self.as_str().capitalizing_first_letter();
    }
}
