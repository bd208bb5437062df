pub const TABLE_NAME_ENV: &str = "DYNAMODB_CUSTOMER_TABLE";
pub const TABLE_NAME_DEFAULT: &str = "customers";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub table_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let table_name = lookup(TABLE_NAME_ENV)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(TABLE_NAME_DEFAULT.into());

        Self { table_name }
    }
}
