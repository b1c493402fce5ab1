use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validators::ValidatorIndex;

use super::Group;

/// One way of telling which validators belong to a group.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum MemberInput {
    Withdrawal(String),
    Index(ValidatorIndex),
}

/// An unsaved group, as filled in by an operator adding or managing a group.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDraft {
    pub name: String,
    pub fee_recipient_address: String,
    pub members: Vec<MemberInput>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("group name is required")]
    MissingName,
    #[error("fee recipient address is required")]
    MissingFeeRecipient,
    #[error("a group needs at least one withdrawal address or validator index")]
    NoMembers,
    #[error("withdrawal address at position {0} is empty")]
    EmptyWithdrawalAddress(usize),
}

impl Default for GroupDraft {
    /// A fresh draft starts with a single empty withdrawal address input.
    fn default() -> Self {
        Self {
            name: String::new(),
            fee_recipient_address: String::new(),
            members: vec![MemberInput::Withdrawal(String::new())],
        }
    }
}

impl GroupDraft {
    /// Prefills a draft from an existing group, withdrawal addresses first, then indices.
    pub fn from_group(group: &Group) -> Self {
        let withdrawals = group
            .withdrawal_addresses
            .iter()
            .cloned()
            .map(MemberInput::Withdrawal);
        let indices = group
            .validator_indices
            .iter()
            .copied()
            .map(MemberInput::Index);

        Self {
            name: group.name.clone(),
            fee_recipient_address: group.fee_recipient_address.clone(),
            members: withdrawals.chain(indices).collect(),
        }
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::MissingName);
        }

        if self.fee_recipient_address.trim().is_empty() {
            return Err(DraftError::MissingFeeRecipient);
        }

        if self.members.is_empty() {
            return Err(DraftError::NoMembers);
        }

        for (position, member) in self.members.iter().enumerate() {
            if let MemberInput::Withdrawal(address) = member {
                if address.trim().is_empty() {
                    return Err(DraftError::EmptyWithdrawalAddress(position));
                }
            }
        }

        Ok(())
    }
}
