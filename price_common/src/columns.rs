//! Column layout of the price CSV file.

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// One column of the output file, in file order.
///
/// The string form doubles as the header cell and as the label printed by the CLI.
#[derive(Debug, Clone, Copy, Display, EnumIter, EnumString, Hash, Eq, PartialEq)]
pub enum Column {
    /// Local time the row was written.
    #[strum(serialize = "Timestamp")]
    Timestamp,
    /// Regular market price.
    #[strum(serialize = "Current Price")]
    CurrentPrice,
    /// Pre-market price or `N/A`.
    #[strum(serialize = "Pre-market Price")]
    PreMarketPrice,
    /// Post-market price or `N/A`.
    #[strum(serialize = "Post-market Price")]
    PostMarketPrice,
    /// Exchange-reported time of the last regular market trade.
    #[strum(serialize = "Last Update")]
    LastUpdate,
}

impl Column {
    /// Header cells in file order.
    pub fn header() -> Vec<String> {
        Column::iter().map(|c| c.to_string()).collect()
    }
}
