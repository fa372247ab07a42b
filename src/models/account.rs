use serde::{Deserialize, Serialize};

use crate::filters::title_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Savings,
    Checking,
    Loan,
    CreditCard,
    Investment,
    Retirement,
    Asset,
    PhysicalAsset,
    External,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Savings => "SAVINGS",
            AccountType::Checking => "CHECKING",
            AccountType::Loan => "LOAN",
            AccountType::CreditCard => "CREDIT_CARD",
            AccountType::Investment => "INVESTMENT",
            AccountType::Retirement => "RETIREMENT",
            AccountType::Asset => "ASSET",
            AccountType::PhysicalAsset => "PHYSICAL_ASSET",
            AccountType::External => "EXTERNAL",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
}

impl Account {
    /// Display title such as `Everyday (Credit Card)`.
    pub fn title(&self) -> String {
        format!("{} ({})", self.name, title_case(self.account_type.as_str()))
    }
}
