use serde::{Deserialize, Serialize};

/// One moneyline outcome scraped from the sportsbook page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneylineRecord {
    pub team: String,
    pub moneyline: String, // American odds exactly as displayed, e.g. "-150", "+130"
}

impl MoneylineRecord {
    pub fn new(team: impl Into<String>, moneyline: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            moneyline: moneyline.into(),
        }
    }
}

/// Raw result of the single GET against the odds page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    /// Hands back the body only for a 200 response. Any other status,
    /// including other 2xx codes, is rejected.
    pub fn into_body(self) -> Result<String, crate::error::ScrapeError> {
        if self.status == 200 {
            Ok(self.body)
        } else {
            Err(crate::error::ScrapeError::UnexpectedStatus(self.status))
        }
    }
}
