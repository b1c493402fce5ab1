use std::{collections::BTreeSet, convert::Infallible, str::FromStr};

use crate::validators::ValidatorIndex;

/// Validator indices an operator narrowed the event feed down to. Tokens match an index only when
/// they equal its decimal text, so "abc", "+12" or "012" match no validator at all. A filter
/// without any tokens lets everything through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidatorFilter {
    indices: BTreeSet<ValidatorIndex>,
    unmatched: BTreeSet<String>,
}

impl ValidatorFilter {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty() && self.unmatched.is_empty()
    }

    pub fn contains(&self, validator_index: ValidatorIndex) -> bool {
        self.indices.contains(&validator_index)
    }

    /// Tokens that are not the decimal text of any index.
    pub fn unmatched_tokens(&self) -> &BTreeSet<String> {
        &self.unmatched
    }

    /// Whether an event for `validator_index` should be shown.
    pub fn allows(&self, validator_index: ValidatorIndex) -> bool {
        self.is_empty() || self.contains(validator_index)
    }
}

impl FromIterator<ValidatorIndex> for ValidatorFilter {
    fn from_iter<I: IntoIterator<Item = ValidatorIndex>>(iter: I) -> Self {
        ValidatorFilter {
            indices: iter.into_iter().collect(),
            unmatched: BTreeSet::new(),
        }
    }
}

/// Reads the free text an operator types, e.g. "123, 456". Blank entries are skipped.
impl From<&str> for ValidatorFilter {
    fn from(s: &str) -> Self {
        let mut filter = ValidatorFilter::default();

        for token in s.split(',').map(str::trim).filter(|token| !token.is_empty()) {
            match token.parse::<ValidatorIndex>() {
                Ok(index) if index.to_string() == token => {
                    filter.indices.insert(index);
                }
                _ => {
                    filter.unmatched.insert(token.to_string());
                }
            }
        }

        filter
    }
}

impl FromStr for ValidatorFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ValidatorFilter::from(s))
    }
}
