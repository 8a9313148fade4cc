pub mod kv;
pub mod records;
