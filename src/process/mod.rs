pub mod columns;
pub mod csv_stats;
pub mod excel_count;
pub mod json_tally;
pub mod series;
pub mod stats;
pub mod text_count;
