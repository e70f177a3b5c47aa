use super::*;

mod company_search;
mod medline_report;
