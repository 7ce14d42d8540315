//! The fixed set of master file columns that all bank and file format data is
//! eventually translated into.

pub const TRANSACTION_DATE: &str = "Transaction Date";
pub const TRANSACTION_ACCOUNT: &str = "Transaction Account";
pub const TRANSACTION_DESCRIPTION: &str = "Transaction Description";
pub const CURRENCY: &str = "Currency";
pub const CREDIT_DEBIT: &str = "Credit/Debit";
pub const CATEGORY: &str = "Category";
pub const SUBCATEGORY: &str = "Subcategory";
pub const NOTE: &str = "Note";
pub const YEAR: &str = "Year";
pub const MONTH: &str = "Month";
pub const DAY: &str = "Day";
pub const TRANSACTION_DATE2: &str = "Transaction Date2";

/// Master file columns, in output order.
pub const MASTER_COLUMNS: [&str; 12] = [
    TRANSACTION_DATE,
    TRANSACTION_ACCOUNT,
    TRANSACTION_DESCRIPTION,
    CURRENCY,
    CREDIT_DEBIT,
    CATEGORY,
    SUBCATEGORY,
    NOTE,
    YEAR,
    MONTH,
    DAY,
    TRANSACTION_DATE2,
];

/// Returns true if `name` is exactly one of the master file columns.
pub fn is_master_column(name: &str) -> bool {
    MASTER_COLUMNS.contains(&name)
}
