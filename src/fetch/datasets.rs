/// One remotely hosted dataset and the fixed filename it lands under locally.
#[derive(Debug)]
pub struct Dataset {
    pub name: &'static str,
    pub url: &'static str,
    pub file_name: &'static str,
}

/// Historical college-football QB points-above-replacement seasons.
pub static QB_PAR_CSV: Dataset = Dataset {
    name: "qb-par-csv",
    url: "https://raw.githubusercontent.com/Neil-Paine-1/College-Football-QB-PAR/main/historical-QB-PAR-seasons.csv",
    file_name: "historical_QB_PAR_seasons.csv",
};

/// NCAA stats workbook.
pub static NCAA_XLSX: Dataset = Dataset {
    name: "ncaa-xlsx",
    url: "https://raw.githubusercontent.com/Cap110100/College-Football-Analysis/main/All_stats.xlsx",
    file_name: "all_NCAA_data.xlsx",
};

/// StatsBomb open-data competitions list.
pub static COMPETITIONS_JSON: Dataset = Dataset {
    name: "competitions-json",
    url: "https://raw.githubusercontent.com/statsbomb/open-data/refs/heads/master/data/competitions.json",
    file_name: "matches.json",
};

/// Moby Dick, full text from Project Gutenberg.
pub static MOBY_DICK_TXT: Dataset = Dataset {
    name: "moby-dick-txt",
    url: "https://www.gutenberg.org/cache/epub/2701/pg2701.txt",
    file_name: "ahab.txt",
};

/// All datasets, in fetch order.
pub static ALL: &[&Dataset] = &[&QB_PAR_CSV, &NCAA_XLSX, &COMPETITIONS_JSON, &MOBY_DICK_TXT];
